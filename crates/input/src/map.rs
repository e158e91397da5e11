//! Key mapping from terminal events to host actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Front-panel buttons of the emulated console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    /// Toggle pause
    Pause,
    /// Switch to the next game in the list
    NextGame,
    /// Switch to the previous game in the list
    PreviousGame,
    /// Restart the current game
    Reset,
    /// Award demo points (stands in for game rules)
    Score,
    /// Skip the attract splash
    SkipSplash,
}

/// Map keyboard input to host actions.
pub fn handle_key_event(key: KeyEvent) -> Option<HostAction> {
    match key.code {
        KeyCode::Char('p') | KeyCode::Char('P') => Some(HostAction::Pause),
        KeyCode::PageUp => Some(HostAction::NextGame),
        KeyCode::PageDown => Some(HostAction::PreviousGame),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(HostAction::Reset),
        KeyCode::Char(' ') => Some(HostAction::Score),
        KeyCode::Enter | KeyCode::Esc => Some(HostAction::SkipSplash),
        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
