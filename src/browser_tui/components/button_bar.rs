//! Navigation buttons: first, next and previous record

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::browser_tui::ui::{contains, Styles};
use crate::models::Navigation;
use crate::shaper::Shaper;

pub const FIRST_LABEL: &str = "السجل الأول";
pub const NEXT_LABEL: &str = "السجل التالي";
pub const PREV_LABEL: &str = "السجل السابق";

/// One clickable button
#[derive(Debug, Clone)]
pub struct Button {
    pub navigation: Navigation,
    pub label: String,
    pub hint: &'static str,
}

/// Row of navigation buttons; remembers where it was drawn for mouse clicks
#[derive(Debug, Clone)]
pub struct ButtonBar {
    pub buttons: Vec<Button>,
    areas: Vec<Rect>,
}

impl ButtonBar {
    /// Labels are shaped once, they never change
    pub fn new(shaper: &dyn Shaper) -> Self {
        let button = |navigation, label: &str, hint| Button {
            navigation,
            label: shaper.shape(label),
            hint,
        };

        Self {
            buttons: vec![
                button(Navigation::First, FIRST_LABEL, "f"),
                button(Navigation::Next, NEXT_LABEL, "n"),
                button(Navigation::Previous, PREV_LABEL, "p"),
            ],
            areas: Vec::new(),
        }
    }

    /// Split `area` evenly between the buttons and remember the result
    pub fn layout(&mut self, area: Rect) -> &[Rect] {
        let count = self.buttons.len() as u32;
        let constraints: Vec<Constraint> = self
            .buttons
            .iter()
            .map(|_| Constraint::Ratio(1, count))
            .collect();

        self.areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(area)
            .to_vec();
        &self.areas
    }

    /// Button under a mouse click, if any
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Navigation> {
        self.areas
            .iter()
            .zip(&self.buttons)
            .find(|(area, _)| contains(**area, column, row))
            .map(|(_, button)| button.navigation)
    }

    /// Draw the buttons; next and previous are dimmed until a record is shown
    pub fn render(&mut self, f: &mut Frame, area: Rect, positioned: bool) {
        let areas = self.layout(area).to_vec();

        for (button, button_area) in self.buttons.iter().zip(areas) {
            let enabled = positioned || button.navigation == Navigation::First;
            let style = if enabled { Styles::button() } else { Styles::inactive() };

            let paragraph = Paragraph::new(format!("[{}] {}", button.hint, button.label))
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Styles::inactive_border()),
                );

            f.render_widget(paragraph, button_area);
        }
    }
}
