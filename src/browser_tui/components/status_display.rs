//! Status display component for showing the outcome of the last action

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::browser_tui::ui::Styles;

/// Types of status messages
#[derive(Debug, Clone, PartialEq)]
pub enum StatusType {
    Info,
    Success,
    Warning,
    Error,
    Loading,
}

/// Status message with type and content
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub message: String,
    pub status_type: StatusType,
    pub timestamp: chrono::DateTime<chrono::Local>,
}

impl StatusMessage {
    pub fn new(message: String, status_type: StatusType) -> Self {
        Self {
            message,
            status_type,
            timestamp: chrono::Local::now(),
        }
    }

    pub fn info(message: String) -> Self {
        Self::new(message, StatusType::Info)
    }

    pub fn success(message: String) -> Self {
        Self::new(message, StatusType::Success)
    }

    pub fn warning(message: String) -> Self {
        Self::new(message, StatusType::Warning)
    }

    pub fn error(message: String) -> Self {
        Self::new(message, StatusType::Error)
    }

    pub fn loading(message: String) -> Self {
        Self::new(message, StatusType::Loading)
    }
}

/// Status display component
pub struct StatusDisplay {
    pub current_message: Option<StatusMessage>,
    pub show_timestamp: bool,
    pub idle_text: String,
}

impl Default for StatusDisplay {
    fn default() -> Self {
        Self {
            current_message: None,
            show_timestamp: true,
            idle_text: "Ready".to_string(),
        }
    }
}

impl StatusDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_text(mut self, text: &str) -> Self {
        self.idle_text = text.to_string();
        self
    }

    /// Set current status message
    pub fn set_message(&mut self, message: StatusMessage) {
        self.current_message = Some(message);
    }

    /// Set loading message
    pub fn set_loading(&mut self, message: String) {
        self.set_message(StatusMessage::loading(message));
    }

    /// Get current message
    pub fn get_current(&self) -> Option<&StatusMessage> {
        self.current_message.as_ref()
    }

    /// Render the status display
    pub fn render(&self, f: &mut Frame, area: Rect) {
        let content = match &self.current_message {
            Some(message) => self.format_message(message),
            None => self.idle_text.clone(),
        };

        let style = match self.current_message.as_ref().map(|m| &m.status_type) {
            Some(StatusType::Info) => Styles::info(),
            Some(StatusType::Success) => Styles::success(),
            Some(StatusType::Warning) | Some(StatusType::Loading) => Styles::warning(),
            Some(StatusType::Error) => Styles::error(),
            None => Styles::inactive(),
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::inactive_border());

        let paragraph = Paragraph::new(content)
            .style(style)
            .block(block);

        f.render_widget(paragraph, area);
    }

    /// Format message for display
    fn format_message(&self, message: &StatusMessage) -> String {
        let prefix = match message.status_type {
            StatusType::Info => "ℹ",
            StatusType::Success => "✓",
            StatusType::Warning => "⚠",
            StatusType::Error => "✗",
            StatusType::Loading => "⟳",
        };

        if self.show_timestamp {
            format!(
                "{} [{}] {}",
                prefix,
                message.timestamp.format("%H:%M:%S"),
                message.message
            )
        } else {
            format!("{} {}", prefix, message.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_without_timestamp() {
        let display = StatusDisplay {
            show_timestamp: false,
            ..StatusDisplay::default()
        };
        let text = display.format_message(&StatusMessage::error("boom".to_string()));
        assert_eq!(text, "✗ boom");
    }

    #[test]
    fn test_idle_then_loading() {
        let mut display = StatusDisplay::new().with_idle_text("idle");
        assert!(display.get_current().is_none());
        assert_eq!(display.idle_text, "idle");

        display.set_loading("Loading next record...".to_string());
        assert_eq!(display.get_current().unwrap().status_type, StatusType::Loading);
    }
}
