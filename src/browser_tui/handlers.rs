//! Common event handlers for the record browser

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::traits::Scrollable;

/// Common keyboard event handling utilities
pub struct CommonKeyHandler;

impl CommonKeyHandler {
    /// Handle scrolling keys; returns whether the key was consumed
    pub fn handle_scroll_keys<T: Scrollable>(scrollable: &mut T, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => scrollable.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => scrollable.scroll_down(1),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                scrollable.page_up()
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                scrollable.page_down()
            }
            KeyCode::Char('g') => scrollable.scroll_to_top(),
            KeyCode::Char('G') | KeyCode::End => scrollable.scroll_to_bottom(),
            _ => return false,
        }
        true
    }
}
