//! Browsing controller: cursor moves, record field and detail grid

use tracing::{debug, info, warn};

use crate::browser::cursor::Cursor;
use crate::browser::table::Grid;
use crate::client::{ClientError, RecordSource};
use crate::models::{Navigation, Record};
use crate::shaper::{ArabicShaper, Shaper};

/// Prefix of the message shown in the record field when the service is unreachable.
pub const CONNECTION_ERROR: &str = "خطأ في الاتصال";

/// What a cursor move did.
#[derive(Debug)]
pub enum NavOutcome {
    /// A record was shown and its detail lines reloaded
    Shown(Record),
    /// Next/previous asked for before any record was shown; nothing was sent
    NotPositioned,
    /// The service answered without a record, e.g. past the last one
    NoRecord,
    /// The request failed; cursor and views are unchanged apart from the
    /// record field on transport errors
    Failed(ClientError),
}

impl NavOutcome {
    pub fn is_shown(&self) -> bool {
        matches!(self, NavOutcome::Shown(_))
    }
}

/// Owns the cursor and what is on screen for one record source.
pub struct Browser<S> {
    source: S,
    shaper: ArabicShaper,
    cursor: Cursor,
    record: Option<Record>,
    record_field: String,
    grid: Grid,
}

impl<S: RecordSource> Browser<S> {
    pub fn new(source: S, shaper: ArabicShaper) -> Self {
        Self {
            source,
            shaper,
            cursor: Cursor::new(),
            record: None,
            record_field: String::new(),
            grid: Grid::default(),
        }
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn record(&self) -> Option<&Record> {
        self.record.as_ref()
    }

    /// Text of the read-only record field: the record's `mah_idd`, or the
    /// last connection error.
    pub fn record_field(&self) -> &str {
        &self.record_field
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub async fn first(&mut self) -> NavOutcome {
        self.navigate(Navigation::First).await
    }

    pub async fn next(&mut self) -> NavOutcome {
        self.navigate(Navigation::Next).await
    }

    pub async fn previous(&mut self) -> NavOutcome {
        self.navigate(Navigation::Previous).await
    }

    /// Move the cursor and, on success, show the new record and its lines.
    pub async fn navigate(&mut self, navigation: Navigation) -> NavOutcome {
        let Some(request) = self.cursor.plan(navigation) else {
            debug!("Ignoring {} before any record is shown", navigation.as_str());
            return NavOutcome::NotPositioned;
        };

        let value = match request.send(&self.source).await {
            Ok(value) => value,
            Err(e) => {
                self.report_failure(&e);
                return NavOutcome::Failed(e);
            }
        };

        let Some(record) = Record::from_json(&value) else {
            info!("No record returned for {}", navigation.as_str());
            return NavOutcome::NoRecord;
        };

        info!("Showing record {} ({})", record.id, navigation.as_str());
        self.show_record(record.clone()).await;
        NavOutcome::Shown(record)
    }

    async fn show_record(&mut self, record: Record) {
        self.cursor.advance(record.id.clone());
        self.record_field = self.shaper.shape(&record.mah_idd_param());
        self.record = Some(record);
        // A failed detail load still shows the record, with the placeholder grid
        let _ = self.reload_detail_lines().await;
    }

    /// Fetch the detail lines of the current record and rebuild the grid.
    ///
    /// Always uses the `mah_idd` of the record currently shown. Does nothing
    /// when no record is shown. On failure the grid shows the placeholder and
    /// the error is handed back.
    pub async fn reload_detail_lines(&mut self) -> Result<(), ClientError> {
        let Some(record) = &self.record else {
            return Ok(());
        };
        let mah_idd = record.mah_idd_param();

        let (rows, result) = match self.source.detail_rows(&mah_idd).await {
            Ok(rows) => (Some(rows), Ok(())),
            Err(e) => {
                self.report_failure(&e);
                (None, Err(e))
            }
        };

        self.grid = Grid::render(rows.as_ref(), &self.shaper);
        debug!(
            "Detail grid for mah_idd '{}': {} columns, {} cells",
            mah_idd,
            self.grid.cols,
            self.grid.cells.len()
        );
        result
    }

    fn report_failure(&mut self, error: &ClientError) {
        if error.is_transport() {
            warn!("Record service unreachable: {}", error);
            self.record_field = self
                .shaper
                .shape(&format!("{}: {}", CONNECTION_ERROR, error));
        } else {
            debug!("Treating response as no data: {}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Endpoint, Identifier};
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    type Call = (Endpoint, Vec<(String, String)>);

    /// Answers requests from a script and records what was asked.
    #[derive(Default)]
    struct ScriptedSource {
        responses: Mutex<VecDeque<Result<Value, ClientError>>>,
        calls: Mutex<Vec<Call>>,
    }

    impl ScriptedSource {
        fn answer(self, response: Result<Value, ClientError>) -> Self {
            self.responses.lock().unwrap().push_back(response);
            self
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RecordSource for ScriptedSource {
        async fn request(
            &self,
            endpoint: Endpoint,
            params: &[(&str, String)],
        ) -> Result<Value, ClientError> {
            self.calls.lock().unwrap().push((
                endpoint,
                params.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
            ));
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Err(ClientError::Status(500)))
        }
    }

    async fn transport_error() -> ClientError {
        let err = reqwest::Client::new()
            .get("not a url")
            .send()
            .await
            .unwrap_err();
        ClientError::Transport(err)
    }

    fn param(key: &str, value: &str) -> Vec<(String, String)> {
        vec![(key.to_string(), value.to_string())]
    }

    #[tokio::test]
    async fn test_next_and_previous_send_nothing_before_first() {
        let mut browser = Browser::new(ScriptedSource::default(), ArabicShaper::default());

        for _ in 0..3 {
            assert!(matches!(browser.next().await, NavOutcome::NotPositioned));
            assert!(matches!(browser.previous().await, NavOutcome::NotPositioned));
        }

        assert!(browser.source().calls().is_empty());
        assert!(!browser.cursor().is_positioned());
    }

    #[tokio::test]
    async fn test_first_shows_record_and_loads_lines() {
        let source = ScriptedSource::default()
            .answer(Ok(json!({"id": 1, "mah_idd": 40})))
            .answer(Ok(json!([{"a": 1, "b": 2}, {"a": 3, "b": 4}])));
        let mut browser = Browser::new(source, ArabicShaper::default());

        assert!(browser.first().await.is_shown());
        assert_eq!(browser.cursor().current(), Some(&Identifier::Integer(1)));
        assert_eq!(browser.record_field(), "40");
        assert_eq!(browser.grid().cols, 2);
        assert_eq!(browser.grid().cells.len(), 6);
        assert_eq!(
            browser.source().calls(),
            vec![
                (Endpoint::First, vec![]),
                (Endpoint::MahalLine, param("mah_idd", "40")),
            ]
        );
    }

    #[tokio::test]
    async fn test_next_uses_current_id_as_last_id() {
        let source = ScriptedSource::default()
            .answer(Ok(json!({"id": 7, "mah_idd": "m7"})))
            .answer(Ok(json!([])))
            .answer(Ok(json!({"id": 8, "mah_idd": "m8"})))
            .answer(Ok(json!([])))
            .answer(Ok(json!({"id": 7, "mah_idd": "m7"})))
            .answer(Ok(json!([])));
        let mut browser = Browser::new(source, ArabicShaper::default());

        browser.first().await;
        browser.next().await;
        browser.previous().await;

        let calls = browser.source().calls();
        assert_eq!(calls[2], (Endpoint::Next, param("last_id", "7")));
        assert_eq!(calls[4], (Endpoint::Prev, param("last_id", "8")));
        assert_eq!(browser.cursor().current(), Some(&Identifier::Integer(7)));
        assert!(browser.grid().is_placeholder());
    }

    #[tokio::test]
    async fn test_transport_failure_keeps_cursor_and_reports_in_field() {
        let source = ScriptedSource::default()
            .answer(Ok(json!({"id": 7, "mah_idd": 3})))
            .answer(Ok(json!([{"a": 1}])))
            .answer(Err(transport_error().await));
        let mut browser = Browser::new(source, ArabicShaper::new(false));
        browser.first().await;
        let grid_before = browser.grid().clone();

        let outcome = browser.next().await;

        assert!(matches!(outcome, NavOutcome::Failed(ref e) if e.is_transport()));
        assert_eq!(browser.cursor().current(), Some(&Identifier::Integer(7)));
        assert_eq!(browser.grid(), &grid_before);
        assert!(browser.record_field().starts_with(CONNECTION_ERROR));
    }

    #[tokio::test]
    async fn test_status_error_is_silent_no_data() {
        let source = ScriptedSource::default()
            .answer(Ok(json!({"id": 7, "mah_idd": 3})))
            .answer(Ok(json!([])))
            .answer(Err(ClientError::Status(404)));
        let mut browser = Browser::new(source, ArabicShaper::default());
        browser.first().await;

        let outcome = browser.next().await;
        assert!(matches!(outcome, NavOutcome::Failed(ClientError::Status(404))));
        assert_eq!(browser.record_field(), "3");
        assert_eq!(browser.cursor().current(), Some(&Identifier::Integer(7)));
    }

    #[tokio::test]
    async fn test_end_of_sequence_bodies_leave_state_alone() {
        for end in [json!(null), json!({}), json!({"mah_idd": 9}), json!([])] {
            let source = ScriptedSource::default()
                .answer(Ok(json!({"id": 5, "mah_idd": 1})))
                .answer(Ok(json!([{"a": 1}])))
                .answer(Ok(end));
            let mut browser = Browser::new(source, ArabicShaper::default());
            browser.first().await;

            assert!(matches!(browser.next().await, NavOutcome::NoRecord));
            assert_eq!(browser.cursor().current(), Some(&Identifier::Integer(5)));
            assert_eq!(browser.record_field(), "1");
            assert_eq!(browser.grid().cols, 1);
            assert_eq!(browser.grid().cells[0].text, "a");
            assert_eq!(browser.source().calls().len(), 3);
        }
    }

    #[tokio::test]
    async fn test_failed_detail_load_shows_placeholder_and_next_uses_new_mah_idd() {
        let source = ScriptedSource::default()
            .answer(Ok(json!({"id": 1, "mah_idd": "x1"})))
            .answer(Err(ClientError::Status(500)))
            .answer(Ok(json!({"id": 2, "mah_idd": "x2"})))
            .answer(Ok(json!([{"a": 1}])));
        let mut browser = Browser::new(source, ArabicShaper::default());

        browser.first().await;
        assert!(browser.grid().is_placeholder());
        assert_eq!(browser.cursor().current(), Some(&Identifier::Integer(1)));

        browser.next().await;
        let calls = browser.source().calls();
        assert_eq!(calls[3], (Endpoint::MahalLine, param("mah_idd", "x2")));
        assert_eq!(browser.grid().cols, 1);
        assert!(!browser.grid().is_placeholder());
    }

    #[tokio::test]
    async fn test_reload_detail_lines_reports_its_result() {
        let source = ScriptedSource::default()
            .answer(Ok(json!({"id": 1, "mah_idd": "x1"})))
            .answer(Ok(json!([{"a": 1}])))
            .answer(Err(ClientError::Status(503)))
            .answer(Ok(json!([{"a": 2}])));
        let mut browser = Browser::new(source, ArabicShaper::default());

        assert!(browser.reload_detail_lines().await.is_ok());
        assert!(browser.source().calls().is_empty());

        browser.first().await;
        assert!(matches!(
            browser.reload_detail_lines().await,
            Err(ClientError::Status(503))
        ));
        assert!(browser.grid().is_placeholder());

        assert!(browser.reload_detail_lines().await.is_ok());
        assert_eq!(browser.grid().cells[1].text, "2");
    }

    #[tokio::test]
    async fn test_detail_transport_failure_reports_in_field() {
        let source = ScriptedSource::default()
            .answer(Ok(json!({"id": 1, "mah_idd": "x1"})))
            .answer(Err(transport_error().await));
        let mut browser = Browser::new(source, ArabicShaper::new(false));

        assert!(browser.first().await.is_shown());
        assert!(browser.record_field().starts_with(CONNECTION_ERROR));
        assert!(browser.grid().is_placeholder());
        assert_eq!(browser.cursor().current(), Some(&Identifier::Integer(1)));
    }
}
