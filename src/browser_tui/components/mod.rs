//! Reusable UI components for the record browser

pub mod button_bar;
pub mod detail_grid;
pub mod record_field;
pub mod status_display;

pub use button_bar::ButtonBar;
pub use detail_grid::DetailGridView;
pub use status_display::{StatusDisplay, StatusMessage, StatusType};
