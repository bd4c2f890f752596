//! Record service error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid server URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Failed to build HTTP client: {0}")]
    Setup(#[source] reqwest::Error),

    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    #[error("Record service returned status {0}")]
    Status(u16),

    #[error("Failed to parse record service response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    /// Network-level failures the user is told about; status and decode
    /// failures are treated as "no data".
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }
}
