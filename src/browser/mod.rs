//! Record browsing
//!
//! The navigation cursor, the detail table model and the controller that ties
//! them to a record source. Nothing in here touches the terminal.

pub mod cursor;
pub mod table;
pub mod controller;

pub use cursor::{Cursor, CursorRequest};
pub use table::{DetailTable, Grid, GridCell, TableError};
pub use controller::{Browser, NavOutcome};
