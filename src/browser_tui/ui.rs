//! Common UI styles and layout helpers for the record browser

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
};

/// Common UI styles
pub struct Styles;

impl Styles {
    pub fn header() -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn button() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Color::Red)
    }

    pub fn success() -> Style {
        Style::default()
            .fg(Color::Green)
    }

    pub fn warning() -> Style {
        Style::default()
            .fg(Color::Yellow)
    }

    pub fn info() -> Style {
        Style::default()
            .fg(Color::Cyan)
    }

    pub fn inactive() -> Style {
        Style::default()
            .fg(Color::DarkGray)
    }

    pub fn active_border() -> Style {
        Style::default()
            .fg(Color::Yellow)
    }

    pub fn inactive_border() -> Style {
        Style::default()
            .fg(Color::Gray)
    }
}

/// Center a rectangle within another rectangle
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Whether a terminal cell lies inside `area`
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x.saturating_add(area.width)
        && row >= area.y
        && row < area.y.saturating_add(area.height)
}
