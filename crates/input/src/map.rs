//! Key mapping from terminal events to game actions.

use crate::types::{GameAction, Mode};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Screen-level commands that are not game actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    /// Start a game in this mode (menu).
    SelectMode(Mode),
    /// Open the leaderboard overlay.
    Leaderboard,
    /// Show the leaderboard of the next mode.
    CycleMode,
    /// Build the share text for the last game.
    Share,
    /// Leave the current screen (game → menu, overlay → previous screen).
    Back,
    /// Confirm the highlighted entry.
    Confirm,
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(GameAction::MoveLeft)
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(GameAction::MoveRight)
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(GameAction::MoveUp)
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(GameAction::MoveDown)
        }

        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Map keyboard input to screen commands.
///
/// Checked before [`handle_key_event`], so these keys must not overlap with
/// the movement keys.
pub fn handle_ui_key(key: KeyEvent) -> Option<UiCommand> {
    match key.code {
        KeyCode::Char('1') => Some(UiCommand::SelectMode(Mode::Classic)),
        KeyCode::Char('2') => Some(UiCommand::SelectMode(Mode::Infinite)),
        KeyCode::Char('3') => Some(UiCommand::SelectMode(Mode::Hardcore)),
        KeyCode::Char('b') | KeyCode::Char('B') => Some(UiCommand::Leaderboard),
        KeyCode::Tab => Some(UiCommand::CycleMode),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(UiCommand::Share),
        KeyCode::Esc | KeyCode::Backspace => Some(UiCommand::Back),
        KeyCode::Enter => Some(UiCommand::Confirm),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
