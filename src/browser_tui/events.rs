//! Event handling for the record browser TUI

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::Navigation;

/// Application events that user input can trigger
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppEvent {
    /// Quit the application
    Quit,
    /// Show or hide the help popup
    ToggleHelp,
    /// Close the help popup
    CloseHelp,
    /// Move the record cursor
    Navigate(Navigation),
    /// Fetch the detail lines of the current record again
    ReloadLines,
}

impl AppEvent {
    /// Map a key press to an application event
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        let event = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => AppEvent::Quit,
            KeyCode::Char('q') => AppEvent::Quit,
            KeyCode::F(1) | KeyCode::Char('?') => AppEvent::ToggleHelp,
            KeyCode::Esc => AppEvent::CloseHelp,
            KeyCode::Char('f') | KeyCode::Home => AppEvent::Navigate(Navigation::First),
            KeyCode::Char('n') | KeyCode::PageDown | KeyCode::Right => {
                AppEvent::Navigate(Navigation::Next)
            }
            KeyCode::Char('p') | KeyCode::PageUp | KeyCode::Left => {
                AppEvent::Navigate(Navigation::Previous)
            }
            KeyCode::Char('r') => AppEvent::ReloadLines,
            _ => return None,
        };
        Some(event)
    }
}
