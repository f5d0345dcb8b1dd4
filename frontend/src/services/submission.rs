//! Ordering of overlapping submissions.
//!
//! Every submit takes a [`Ticket`], including one rejected for lack of a
//! file. A response is applied only while its ticket is still the latest
//! one, so a slow earlier request can never overwrite the view of a later
//! submission.

use serde_json::Value;

use crate::config::{MSG_NO_FILE, MSG_UPLOADING};
use crate::types::{AppError, AppResult, ResultView};

/// Identifies one submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Contents of the `result` container and the download control after one step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewUpdate {
    pub result: ResultView,
    /// Raw response offered for download, `None` removes the control.
    pub download: Option<Value>,
}

#[derive(Debug, Default)]
pub struct SubmissionTracker {
    latest: u64,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a submission, superseding every earlier ticket.
    pub fn begin(&mut self) -> Ticket {
        self.latest = self.latest.wrapping_add(1);
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest == ticket.0
    }

    /// Handle a submit event.
    ///
    /// Returns the view to show right away and, when a file was selected,
    /// the file with the ticket its request must present on completion.
    /// The download control is always removed.
    pub fn submit<F>(&mut self, file: Option<F>) -> (ViewUpdate, Option<(F, Ticket)>) {
        let ticket = self.begin();

        match file {
            None => {
                let err = AppError::Validation(MSG_NO_FILE.to_string());
                log::info!("Submit rejected: {}", err);
                (
                    ViewUpdate {
                        result: ResultView::failure(&err),
                        download: None,
                    },
                    None,
                )
            }
            Some(file) => (
                ViewUpdate {
                    result: ResultView::info(MSG_UPLOADING),
                    download: None,
                },
                Some((file, ticket)),
            ),
        }
    }

    /// Turn a finished request into a view update.
    ///
    /// `None` when a later submit has superseded `ticket`.
    pub fn complete(&self, ticket: Ticket, outcome: AppResult<Value>) -> Option<ViewUpdate> {
        if !self.is_current(ticket) {
            log::debug!("Dropping result of a superseded submission");
            return None;
        }

        let update = match outcome {
            Ok(value) => {
                let result = ResultView::from_response(&value);
                let download = match &result {
                    ResultView::Success(parsed) => {
                        log::info!(
                            "✅ Parsed {} rows from page {}",
                            parsed.rows.len(),
                            parsed.page_number
                        );
                        Some(value)
                    }
                    _ => {
                        log::warn!("Response carried no data array");
                        None
                    }
                };
                ViewUpdate { result, download }
            }
            Err(e) => {
                log::error!("❌ Parse failed: {}", e);
                ViewUpdate {
                    result: ResultView::failure(&e),
                    download: None,
                }
            }
        };
        Some(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_response() -> Value {
        json!({
            "page_number": 2,
            "count": 2,
            "data": [
                {"Terminal Serial": "T1", "Payment Value": 10.5, "Days Since Last Transaction": 3},
                {"Terminal Serial": "T2", "Payment Value": 20, "Days Since Last Transaction": 0}
            ]
        })
    }

    #[test]
    fn test_latest_ticket_wins() {
        let mut tracker = SubmissionTracker::new();
        let first = tracker.begin();
        assert!(tracker.is_current(first));

        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
        assert_ne!(first, second);
    }

    #[test]
    fn test_submit_without_file_sends_nothing() {
        let mut tracker = SubmissionTracker::new();
        let (update, request) = tracker.submit(None::<&str>);

        assert!(request.is_none());
        assert_eq!(update.result, ResultView::Info("Please select a PDF file.".to_string()));
        assert_eq!(update.download, None);
    }

    #[test]
    fn test_submit_with_file_shows_progress() {
        let mut tracker = SubmissionTracker::new();
        let (update, request) = tracker.submit(Some("sample.pdf"));

        let (file, ticket) = request.expect("request should be sent");
        assert_eq!(file, "sample.pdf");
        assert!(tracker.is_current(ticket));
        assert_eq!(update.result, ResultView::Info("Uploading and parsing...".to_string()));
        assert_eq!(update.download, None);
    }

    #[test]
    fn test_empty_submit_supersedes_pending_request() {
        let mut tracker = SubmissionTracker::new();
        let (_, request) = tracker.submit(Some("a.pdf"));
        let (_, ticket) = request.unwrap();

        let (update, request) = tracker.submit(None::<&str>);
        assert!(request.is_none());
        assert_eq!(update.result.css_class(), "response-info");

        // a.pdf finishing late must not replace the no-file message
        assert_eq!(tracker.complete(ticket, Ok(sample_response())), None);
    }

    #[test]
    fn test_slow_earlier_request_is_dropped() {
        let mut tracker = SubmissionTracker::new();
        let (_, first) = tracker.submit(Some("a.pdf"));
        let (_, second) = tracker.submit(Some("b.pdf"));
        let (_, first) = first.unwrap();
        let (_, second) = second.unwrap();

        let late = AppError::Status { code: 500, detail: None };
        assert_eq!(tracker.complete(first, Err(late)), None);
        assert!(tracker.complete(second, Ok(sample_response())).is_some());
    }

    #[test]
    fn test_error_then_success_leaves_nothing_stale() {
        let mut tracker = SubmissionTracker::new();

        let (_, request) = tracker.submit(Some("broken.pdf"));
        let (_, ticket) = request.unwrap();
        let failed = tracker
            .complete(ticket, Err(AppError::Status { code: 502, detail: None }))
            .unwrap();
        assert_eq!(failed.result, ResultView::Error("Error: Server error: 502".to_string()));
        assert_eq!(failed.download, None);

        let (pending, request) = tracker.submit(Some("sample.pdf"));
        assert_eq!(pending.result.css_class(), "response-info");
        assert_eq!(pending.download, None);

        let (_, ticket) = request.unwrap();
        let done = tracker.complete(ticket, Ok(sample_response())).unwrap();
        assert_eq!(done.result.css_class(), "response-success");
        assert_eq!(done.download, Some(sample_response()));
    }

    #[test]
    fn test_success_then_no_data_removes_download() {
        let mut tracker = SubmissionTracker::new();

        let (_, request) = tracker.submit(Some("sample.pdf"));
        let (_, ticket) = request.unwrap();
        let done = tracker.complete(ticket, Ok(sample_response())).unwrap();
        assert!(done.download.is_some());

        let (pending, request) = tracker.submit(Some("blank.pdf"));
        assert_eq!(pending.download, None);

        let (_, ticket) = request.unwrap();
        let empty = tracker.complete(ticket, Ok(json!({"data": "x"}))).unwrap();
        assert_eq!(empty.result, ResultView::Info("No data found in PDF.".to_string()));
        assert_eq!(empty.download, None);
    }

    #[test]
    fn test_decode_failure_is_error_view() {
        let mut tracker = SubmissionTracker::new();
        let (_, request) = tracker.submit(Some("sample.pdf"));
        let (_, ticket) = request.unwrap();

        let update = tracker
            .complete(ticket, Err(AppError::Decode("expected value".to_string())))
            .unwrap();
        assert_eq!(update.result.css_class(), "response-error");
        assert!(matches!(&update.result, ResultView::Error(msg) if msg.starts_with("Error: ")));
    }
}
