//! Read-only field showing the current record

use ratatui::{
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::browser_tui::ui::Styles;
use crate::models::Identifier;

/// Title of the field: the record id when one is shown
pub fn field_title(record_id: Option<&Identifier>) -> String {
    match record_id {
        Some(id) => format!("Record {}", id),
        None => "Record".to_string(),
    }
}

/// Render the record field with `text` centered
pub fn render(f: &mut Frame, area: Rect, text: &str, record_id: Option<&Identifier>) {
    let block = Block::default()
        .title(field_title(record_id))
        .borders(Borders::ALL)
        .border_style(Styles::active_border());

    let paragraph = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .style(Styles::header())
        .block(block);

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_title() {
        assert_eq!(field_title(None), "Record");
        assert_eq!(field_title(Some(&Identifier::Integer(7))), "Record 7");
    }
}
