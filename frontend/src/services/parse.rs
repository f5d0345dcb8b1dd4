//! HTTP service posting a PDF to the parsing backend.

use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::Value;
use web_sys::{File, FormData};

use crate::config::UPLOAD_FIELD;
use crate::types::{AppError, AppResult};

/// Error body the backend sends with 4xx/5xx replies.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Upload a PDF and return the decoded JSON reply.
///
/// The reply is returned untouched so it can be offered as a download.
pub async fn parse_pdf(file: File, url: &str) -> AppResult<Value> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Network(format!("Failed to create FormData: {:?}", e)))?;

    form_data
        .append_with_blob(UPLOAD_FIELD, &file)
        .map_err(|e| AppError::Network(format!("Failed to append file: {:?}", e)))?;

    let request = Request::post(url)
        .body(form_data)
        .map_err(|e| AppError::Network(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(e.to_string()))?;

    if !response.ok() {
        let code = response.status();
        return Err(status_error(code, response.text().await));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| AppError::Decode(e.to_string()))
}

/// Error for a non-2xx reply, with the backend's message when the body has one.
fn status_error<E: std::fmt::Display>(code: u16, body: Result<String, E>) -> AppError {
    let detail = match body {
        Ok(body) => error_detail(&body),
        Err(e) => {
            log::debug!("Could not read body of {} reply: {}", code, e);
            None
        }
    };
    AppError::Status { code, detail }
}

/// Pull the `error` message out of a backend error body, if there is one.
pub fn error_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.error)
        .filter(|msg| !msg.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_from_backend_body() {
        let body = r#"{"error": "No file uploaded. Use form field 'file'."}"#;
        assert_eq!(
            error_detail(body).as_deref(),
            Some("No file uploaded. Use form field 'file'.")
        );
    }

    #[test]
    fn test_error_detail_ignores_other_bodies() {
        assert_eq!(error_detail(""), None);
        assert_eq!(error_detail("<html>Bad Gateway</html>"), None);
        assert_eq!(error_detail(r#"{"message": "nope"}"#), None);
        assert_eq!(error_detail(r#"{"error": 12}"#), None);
        assert_eq!(error_detail(r#"{"error": "  "}"#), None);
    }

    #[test]
    fn test_status_error_with_backend_message() {
        let body = Ok::<_, String>(r#"{"error": "Only PDF files are supported."}"#.to_string());
        assert_eq!(
            status_error(400, body).to_string(),
            "Server error: 400 (Only PDF files are supported.)"
        );
    }

    #[test]
    fn test_unreadable_body_keeps_bare_status() {
        let err = status_error(503, Err("body stream already read"));
        assert_eq!(err, AppError::Status { code: 503, detail: None });
        assert_eq!(err.to_string(), "Server error: 503");
    }

    #[test]
    fn test_status_error_mentions_code() {
        let err = AppError::Status {
            code: 413,
            detail: error_detail("Request Entity Too Large"),
        };
        assert!(err.to_string().contains("413"));
    }
}
