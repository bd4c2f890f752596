//! Navigation cursor over the server-side record sequence

use serde_json::Value;

use crate::client::{ClientError, RecordSource};
use crate::models::{Identifier, Navigation};

/// Identifier of the last record shown. Empty until a first record arrives,
/// never cleared afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cursor {
    current: Option<Identifier>,
}

/// A request the cursor allows in its current state.
#[derive(Debug, Clone, PartialEq)]
pub enum CursorRequest {
    First,
    Next(Identifier),
    Prev(Identifier),
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Identifier> {
        self.current.as_ref()
    }

    pub fn is_positioned(&self) -> bool {
        self.current.is_some()
    }

    /// Request for a move, or `None` when the move needs a position the
    /// cursor does not have yet.
    pub fn plan(&self, navigation: Navigation) -> Option<CursorRequest> {
        match (navigation, &self.current) {
            (Navigation::First, _) => Some(CursorRequest::First),
            (Navigation::Next, Some(id)) => Some(CursorRequest::Next(id.clone())),
            (Navigation::Previous, Some(id)) => Some(CursorRequest::Prev(id.clone())),
            (_, None) => None,
        }
    }

    /// Move onto a record that has just been shown.
    pub fn advance(&mut self, id: Identifier) {
        self.current = Some(id);
    }
}

impl CursorRequest {
    pub async fn send<S>(&self, source: &S) -> Result<Value, ClientError>
    where
        S: RecordSource + ?Sized,
    {
        match self {
            CursorRequest::First => source.first().await,
            CursorRequest::Next(id) => source.next(id).await,
            CursorRequest::Prev(id) => source.prev(id).await,
        }
    }
}
