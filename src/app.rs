//! Screen state machine: menu, game and leaderboard.
//!
//! `App` owns the game and the score keeper and turns terminal events into
//! game actions or screen changes. It does no I/O of its own, so the whole
//! flow can be driven from tests with synthetic events.

use crossterm::event::{KeyEvent, MouseEvent};
use rand::RngCore;

use crate::core::GameSnapshot;
use crate::engine::{ActionOutcome, Game};
use crate::input::{handle_key_event, handle_ui_key, should_quit, SwipeTracker, UiCommand};
use crate::share::share_text;
use crate::store::ScoreKeeper;
use crate::term::{FrameBuffer, GameView, Hud, LeaderboardView, MenuView, Viewport};
use crate::types::{Direction, GameAction, Mode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Menu,
    Playing,
    Leaderboard,
}

pub struct App<R: RngCore> {
    screen: Screen,
    /// Menu cursor.
    selected: Mode,
    /// Mode shown on the leaderboard.
    board_mode: Mode,
    /// Leaderboard row of the game that just ended.
    highlight: Option<usize>,
    /// Screen to return to when the leaderboard closes.
    back_to: Screen,
    game: Game<R>,
    keeper: ScoreKeeper,
    swipe: SwipeTracker,
    snap: GameSnapshot,
    message: Option<String>,
    share_url: Option<String>,
    quit: bool,
}

impl<R: RngCore> App<R> {
    /// With `mode` set the first game starts right away, otherwise the menu opens.
    pub fn new(mode: Option<Mode>, rng: R, mut keeper: ScoreKeeper, share_url: Option<String>) -> Self {
        let first = mode.unwrap_or(Mode::Classic);
        let game = Game::new(first, rng, &mut keeper);
        let mut app = Self {
            screen: if mode.is_some() { Screen::Playing } else { Screen::Menu },
            selected: first,
            board_mode: first,
            highlight: None,
            back_to: Screen::Menu,
            game,
            keeper,
            swipe: SwipeTracker::new(),
            snap: GameSnapshot::default(),
            message: None,
            share_url,
            quit: false,
        };
        app.refresh_snapshot();
        app
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selected(&self) -> Mode {
        self.selected
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    pub fn keeper(&self) -> &ScoreKeeper {
        &self.keeper
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Current game state with the stored best score for its mode.
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snap
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if should_quit(key) {
            self.quit = true;
            return;
        }
        match self.screen {
            Screen::Menu => self.menu_key(key),
            Screen::Playing => self.game_key(key),
            Screen::Leaderboard => self.leaderboard_key(key),
        }
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if self.screen != Screen::Playing {
            self.swipe.reset();
            return;
        }
        if let Some(direction) = self.swipe.handle_mouse(event) {
            self.apply(GameAction::from(direction));
        }
    }

    /// Save pending score changes.
    pub fn shutdown(&mut self) {
        self.keeper.flush();
    }

    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        match self.screen {
            Screen::Menu => MenuView.render_into(self.selected, self.keeper.scoreboard(), viewport, fb),
            Screen::Playing => {
                let hud = Hud {
                    message: self.message.as_deref(),
                };
                GameView::default().render_into(&self.snap, &hud, viewport, fb);
            }
            Screen::Leaderboard => {
                let entries = self.keeper.scoreboard().leaderboard(self.board_mode);
                let highlight = self.highlight.filter(|_| self.board_mode == self.game.mode());
                LeaderboardView.render_into(self.board_mode, entries, highlight, viewport, fb);
            }
        }
    }

    fn menu_key(&mut self, key: KeyEvent) {
        match handle_ui_key(key) {
            Some(UiCommand::SelectMode(mode)) => self.start(mode),
            Some(UiCommand::Confirm) => self.start(self.selected),
            Some(UiCommand::CycleMode) => self.selected = self.selected.next(),
            Some(UiCommand::Leaderboard) => self.open_leaderboard(self.selected),
            Some(UiCommand::Share) | Some(UiCommand::Back) => {}
            None => match handle_key_event(key).and_then(|a| a.direction()) {
                Some(Direction::Down) => self.selected = self.selected.next(),
                Some(Direction::Up) => self.selected = self.selected.next().next(),
                _ => {}
            },
        }
    }

    fn game_key(&mut self, key: KeyEvent) {
        match handle_ui_key(key) {
            Some(UiCommand::Back) => {
                self.selected = self.game.mode();
                self.screen = Screen::Menu;
            }
            Some(UiCommand::Leaderboard) => self.open_leaderboard(self.game.mode()),
            // Only a finished game has a final score to share.
            Some(UiCommand::Share) if self.game.game_over() => {
                let text = share_text(self.game.mode(), self.snap.score, self.share_url.as_deref());
                log::info!("share: {}", text.replace('\n', " "));
                self.message = Some(text.replace('\n', "  "));
            }
            Some(UiCommand::Confirm) if self.game.game_over() => {
                self.apply(GameAction::Restart);
            }
            Some(_) => {}
            None => {
                if let Some(action) = handle_key_event(key) {
                    self.apply(action);
                }
            }
        }
    }

    fn leaderboard_key(&mut self, key: KeyEvent) {
        match handle_ui_key(key) {
            Some(UiCommand::CycleMode) => self.board_mode = self.board_mode.next(),
            Some(UiCommand::SelectMode(mode)) => self.board_mode = mode,
            Some(UiCommand::Back) | Some(UiCommand::Leaderboard) | Some(UiCommand::Confirm) => {
                self.screen = self.back_to;
            }
            _ => {}
        }
    }

    fn open_leaderboard(&mut self, mode: Mode) {
        self.back_to = self.screen;
        self.board_mode = mode;
        self.screen = Screen::Leaderboard;
    }

    fn start(&mut self, mode: Mode) {
        self.selected = mode;
        self.game.start_mode(mode, &mut self.keeper);
        self.after_change();
        self.screen = Screen::Playing;
    }

    fn apply(&mut self, action: GameAction) {
        let outcome = self.game.apply_action(action, &mut self.keeper);
        if outcome.changed() {
            self.after_change();
        }
        if let ActionOutcome::Moved { game_over: true, .. } = outcome {
            self.highlight = self.keeper.last_rank().map(|(_, rank)| rank);
        }
    }

    fn after_change(&mut self) {
        self.message = None;
        if !self.game.game_over() {
            self.highlight = None;
        }
        self.refresh_snapshot();
    }

    fn refresh_snapshot(&mut self) {
        self.game.snapshot_into(&mut self.snap);
        self.snap.best = self.keeper.best(self.game.mode()).max(self.snap.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SimpleRng;
    use crate::store::ScoreStore;
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app(mode: Option<Mode>) -> App<SimpleRng> {
        App::new(mode, SimpleRng::new(7), ScoreKeeper::new(ScoreStore::in_memory()), None)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn starts_in_menu_without_mode() {
        let mut app = app(None);
        assert_eq!(app.screen(), Screen::Menu);
        app.handle_key(key(KeyCode::Char('3')));
        assert_eq!(app.screen(), Screen::Playing);
        assert_eq!(app.game().mode(), Mode::Hardcore);
        assert_eq!(app.snapshot().side(), 5);
    }

    #[test]
    fn menu_cursor_wraps() {
        let mut app = app(None);
        app.handle_key(key(KeyCode::Up));
        assert_eq!(app.selected(), Mode::Hardcore);
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.selected(), Mode::Infinite);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.game().mode(), Mode::Infinite);
        assert_eq!(app.screen(), Screen::Playing);
    }

    #[test]
    fn esc_returns_to_menu_and_q_quits() {
        let mut app = app(Some(Mode::Classic));
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.screen(), Screen::Menu);
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn leaderboard_returns_to_previous_screen() {
        let mut app = app(Some(Mode::Classic));
        app.handle_key(key(KeyCode::Char('b')));
        assert_eq!(app.screen(), Screen::Leaderboard);
        app.handle_key(key(KeyCode::Tab));
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.screen(), Screen::Playing);
    }

    /// Cycle through the four directions until no move is left.
    fn play_until_over(app: &mut App<SimpleRng>) {
        let keys = [KeyCode::Left, KeyCode::Down, KeyCode::Right, KeyCode::Up];
        for code in keys.iter().cycle().take(100_000) {
            if app.game().game_over() {
                return;
            }
            app.handle_key(key(*code));
        }
        panic!("game did not end");
    }

    #[test]
    fn share_is_ignored_while_playing() {
        let mut app = app(Some(Mode::Classic));
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.message(), None);
        assert_eq!(app.screen(), Screen::Playing);
    }

    #[test]
    fn share_sets_message_after_game_over_until_restart() {
        let mut app = app(Some(Mode::Classic));
        play_until_over(&mut app);

        app.handle_key(key(KeyCode::Char('x')));
        let expected = format!("I scored {} on 2048 (classic mode)", app.snapshot().score);
        assert_eq!(app.message(), Some(expected.as_str()));

        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.message(), None);
        assert!(!app.game().game_over());
    }

    #[test]
    fn swipe_moves_only_while_playing() {
        let mut app = app(None);
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 10));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 30, 10));
        assert_eq!(app.game().session().moves(), 0);

        app.handle_key(key(KeyCode::Char('1')));
        let before = *app.game().session();
        for (from, to) in [((30, 10), (10, 10)), ((10, 10), (30, 10)), ((20, 15), (20, 5)), ((20, 5), (20, 15))] {
            app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), from.0, from.1));
            app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), to.0, to.1));
        }
        assert_ne!(*app.game().session(), before);
    }

    #[test]
    fn renders_each_screen() {
        let mut app = app(None);
        let mut fb = FrameBuffer::new(80, 24);
        let viewport = Viewport::new(80, 24);
        let text = |fb: &FrameBuffer| (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect::<String>();

        app.render_into(viewport, &mut fb);
        assert!(text(&fb).contains("hardcore"));

        app.handle_key(key(KeyCode::Enter));
        app.render_into(viewport, &mut fb);
        assert!(text(&fb).contains("SCORE"));

        app.handle_key(key(KeyCode::Char('b')));
        app.render_into(viewport, &mut fb);
        assert!(text(&fb).contains("LEADERBOARD"));
    }
}
