//! Application configuration.
//!
//! Centralized configuration for the PDF parser frontend.
//! These are compile-time constants; the page is served next to the
//! parsing backend so the default endpoint is same-origin.

/// Backend base URL.
///
/// Empty means same origin, so requests go to the relative `/parse`.
pub const BACKEND_URL: &str = "";

/// Address of the local development backend.
///
/// Swap it into [`BACKEND_URL`] when the page is served from another port.
pub const LOCAL_BACKEND_URL: &str = "http://127.0.0.1:5000";

/// Path of the parsing endpoint.
pub const PARSE_PATH: &str = "/parse";

/// Multipart field name carrying the PDF.
pub const UPLOAD_FIELD: &str = "pdf";

/// File name offered for the JSON download.
pub const DOWNLOAD_FILE_NAME: &str = "parsed_result.json";

/// Table columns, in display order. Each is also the row record key.
pub const COLUMNS: [&str; 3] = [
    "Terminal Serial",
    "Payment Value",
    "Days Since Last Transaction",
];

pub const MSG_NO_FILE: &str = "Please select a PDF file.";
pub const MSG_UPLOADING: &str = "Uploading and parsing...";
pub const MSG_NO_DATA: &str = "No data found in PDF.";

/// Full URL of the parsing endpoint.
pub fn parse_url() -> String {
    format!("{}{}", BACKEND_URL, PARSE_PATH)
}
