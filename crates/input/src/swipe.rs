//! Mouse swipe recognizer.
//!
//! A swipe is a left-button press followed by a release somewhere else. The
//! axis with the larger displacement wins; the swipe fires only when that
//! displacement reaches the axis threshold. Terminal cells are about twice as
//! tall as they are wide, so the thresholds are per axis and the dominant axis
//! is chosen after scaling by them.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::Direction;

/// Minimum horizontal displacement, in columns.
pub const DEFAULT_SWIPE_COLS: u16 = 2;
/// Minimum vertical displacement, in rows.
pub const DEFAULT_SWIPE_ROWS: u16 = 1;

#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
    min_cols: u16,
    min_rows: u16,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::with_thresholds(DEFAULT_SWIPE_COLS, DEFAULT_SWIPE_ROWS)
    }

    /// Thresholds of 0 are raised to 1 so a click never counts as a swipe.
    pub fn with_thresholds(min_cols: u16, min_rows: u16) -> Self {
        Self {
            start: None,
            min_cols: min_cols.max(1),
            min_rows: min_rows.max(1),
        }
    }

    /// Whether a press is being tracked.
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    pub fn reset(&mut self) {
        self.start = None;
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) -> Option<Direction> {
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.start = Some((event.column, event.row));
                None
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let start = self.start.take()?;
                self.classify(start, (event.column, event.row))
            }
            _ => None,
        }
    }

    /// Direction of a gesture from `start` to `end`, both `(column, row)`.
    pub fn classify(&self, start: (u16, u16), end: (u16, u16)) -> Option<Direction> {
        let dx = end.0 as i32 - start.0 as i32;
        let dy = end.1 as i32 - start.1 as i32;
        let (min_cols, min_rows) = (self.min_cols as i32, self.min_rows as i32);

        // Compare |dx|/min_cols with |dy|/min_rows without dividing.
        if dx.abs() * min_rows > dy.abs() * min_cols {
            if dx >= min_cols {
                Some(Direction::Right)
            } else if dx <= -min_cols {
                Some(Direction::Left)
            } else {
                None
            }
        } else if dy >= min_rows {
            Some(Direction::Down)
        } else if dy <= -min_rows {
            Some(Direction::Up)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn swipe(tracker: &mut SwipeTracker, from: (u16, u16), to: (u16, u16)) -> Option<Direction> {
        assert_eq!(
            tracker.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), from.0, from.1)),
            None
        );
        tracker.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), to.0, to.1));
        tracker.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), to.0, to.1))
    }

    #[test]
    fn four_directions() {
        let mut t = SwipeTracker::new();
        assert_eq!(swipe(&mut t, (10, 10), (20, 10)), Some(Direction::Right));
        assert_eq!(swipe(&mut t, (10, 10), (3, 11)), Some(Direction::Left));
        assert_eq!(swipe(&mut t, (10, 10), (10, 14)), Some(Direction::Down));
        assert_eq!(swipe(&mut t, (10, 10), (11, 7)), Some(Direction::Up));
        assert!(!t.is_tracking());
    }

    #[test]
    fn short_gestures_are_ignored() {
        let mut t = SwipeTracker::new();
        assert_eq!(swipe(&mut t, (10, 10), (10, 10)), None);
        assert_eq!(swipe(&mut t, (10, 10), (11, 10)), None);
        assert_eq!(swipe(&mut t, (10, 10), (12, 10)), Some(Direction::Right));
    }

    #[test]
    fn axes_are_scaled_by_threshold() {
        let t = SwipeTracker::new();
        // 3 columns is 1.5 thresholds; 2 rows is 2 thresholds.
        assert_eq!(t.classify((10, 10), (13, 12)), Some(Direction::Down));
        assert_eq!(t.classify((10, 10), (15, 12)), Some(Direction::Right));
    }

    #[test]
    fn release_without_press_does_nothing() {
        let mut t = SwipeTracker::new();
        assert_eq!(t.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0)), None);
        assert_eq!(t.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 0, 0)), None);
        assert!(!t.is_tracking());
    }

    #[test]
    fn custom_thresholds() {
        let t = SwipeTracker::with_thresholds(30, 30);
        assert_eq!(t.classify((0, 0), (29, 0)), None);
        assert_eq!(t.classify((0, 0), (30, 0)), Some(Direction::Right));
        assert_eq!(SwipeTracker::with_thresholds(0, 0).classify((0, 0), (0, 0)), None);
    }
}
