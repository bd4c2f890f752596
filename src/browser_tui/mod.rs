//! Record browser terminal user interface
//!
//! A record field, the first/next/previous buttons, the detail lines of the
//! current record and a status bar, driven by one sequential event loop.

pub mod app;
pub mod components;
pub mod events;
pub mod handlers;
pub mod traits;
pub mod ui;

pub use app::App;
pub use events::AppEvent;
