//! mahal: a terminal client for a remote record service
//!
//! Records are fetched one at a time (first, next, previous) and shown
//! together with their detail lines. Arabic text is shaped for right-to-left
//! display before it reaches the terminal.

pub mod browser;
pub mod browser_tui;
pub mod cli;
pub mod client;
pub mod config;
pub mod models;
pub mod shaper;
