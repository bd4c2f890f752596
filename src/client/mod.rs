//! Record service client
//!
//! HTTP access to the remote record service: the `/first`, `/next` and `/prev`
//! cursor endpoints and the `/mahal_line` detail endpoint.

pub mod errors;
pub mod record_client;

pub use errors::ClientError;
pub use record_client::{RecordClient, RecordSource};
