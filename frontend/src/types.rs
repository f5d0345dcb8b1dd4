//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Response Types** - display model derived from the backend reply
//! - **View Types** - state of the `result` container
//! - **Error Types** - Frontend error handling

use serde_json::Value;
use std::fmt;

use crate::config::{COLUMNS, MSG_NO_DATA};

// =============================================================================
// Response Types
// =============================================================================

/// One parsed table entry, already converted to display text.
#[derive(Clone, Debug, PartialEq)]
pub struct RowRecord {
    pub terminal_serial: String,
    pub payment_value: String,
    pub days_since_last_transaction: String,
}

impl RowRecord {
    /// Build a row from one element of the `data` array.
    ///
    /// Anything that is not an object yields `undefined` cells, the same
    /// text a missing key produces.
    pub fn from_value(row: &Value) -> Self {
        let cell = |key: &str| display_value(row.as_object().and_then(|obj| obj.get(key)));
        let [serial, payment, days] = COLUMNS;
        Self {
            terminal_serial: cell(serial),
            payment_value: cell(payment),
            days_since_last_transaction: cell(days),
        }
    }

    /// Cells in column order.
    pub fn cells(&self) -> [&str; 3] {
        [
            &self.terminal_serial,
            &self.payment_value,
            &self.days_since_last_transaction,
        ]
    }
}

/// Display model of a successful `/parse` reply.
///
/// `count` is shown as sent; it is never checked against `rows.len()`.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseResponse {
    pub page_number: String,
    pub count: String,
    /// Optional note from the backend, e.g. when no matching page was found.
    pub message: Option<String>,
    pub rows: Vec<RowRecord>,
}

impl ParseResponse {
    /// Derive the display model, or `None` when `data` is not an array.
    pub fn from_value(value: &Value) -> Option<Self> {
        let rows = value.get("data")?.as_array()?;
        Some(Self {
            page_number: display_value(value.get("page_number")),
            count: display_value(value.get("count")),
            message: value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            rows: rows.iter().map(RowRecord::from_value).collect(),
        })
    }

    pub fn heading(&self) -> String {
        format!("Results (Page {})", self.page_number)
    }
}

/// Text of a JSON value as a browser template literal would print it.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.as_f64().map(number_text).unwrap_or_else(|| n.to_string()),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_value(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(Value::Object(_)) => "[object Object]".to_string(),
    }
}

/// Number formatting of a browser: every number is a double, plain
/// notation from 1e-6 up to 1e21, shortest round-trip digits.
fn number_text(f: f64) -> String {
    if f == 0.0 {
        // Covers -0 as well
        return "0".to_string();
    }

    let abs = f.abs();
    if !(1e-6..1e21).contains(&abs) {
        let sci = format!("{:e}", f);
        return match sci.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => sci,
        };
    }

    if f.fract() != 0.0 {
        return f.to_string();
    }

    // Integral: shortest digits padded with zeros, so 2^64 prints as 18446744073709552000
    let sci = format!("{:e}", abs);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits = mantissa.replace('.', "");
    let exp: usize = exp.parse().unwrap_or(0);
    let zeros = (exp + 1).saturating_sub(digits.len());
    let sign = if f < 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, digits, "0".repeat(zeros))
}

// =============================================================================
// View Types
// =============================================================================

/// State of the `result` container.
///
/// Every submission starts from [`ResultView::Empty`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ResultView {
    #[default]
    Empty,
    /// Neutral status: validation guard, in-flight notice, or no data.
    Info(String),
    /// Transport or decode failure, already prefixed with `Error: `.
    Error(String),
    /// Parsed table ready to render.
    Success(ParseResponse),
}

impl ResultView {
    /// Render a decoded backend reply.
    pub fn from_response(value: &Value) -> Self {
        match ParseResponse::from_value(value) {
            Some(parsed) => ResultView::Success(parsed),
            None => ResultView::Info(MSG_NO_DATA.to_string()),
        }
    }

    pub fn info(message: &str) -> Self {
        ResultView::Info(message.to_string())
    }

    /// View for a failed step. Validation problems stay informational.
    pub fn failure(err: &AppError) -> Self {
        match err {
            AppError::Validation(msg) => ResultView::Info(msg.clone()),
            other => ResultView::Error(format!("Error: {}", other)),
        }
    }

    /// Get CSS class for the container.
    pub fn css_class(&self) -> &'static str {
        match self {
            ResultView::Empty => "",
            ResultView::Info(_) => "response-info",
            ResultView::Error(_) => "response-error",
            ResultView::Success(_) => "response-success",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ResultView::Success(_))
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Nothing usable was selected.
    Validation(String),
    /// Request could not be built or sent.
    Network(String),
    /// Backend answered with a non-2xx status.
    Status { code: u16, detail: Option<String> },
    /// Response body was not JSON.
    Decode(String),
    /// Browser refused to produce the JSON download.
    Download(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "{}", msg),
            AppError::Network(msg) => write!(f, "{}", msg),
            AppError::Status { code, detail: None } => write!(f, "Server error: {}", code),
            AppError::Status { code, detail: Some(detail) } => {
                write!(f, "Server error: {} ({})", code, detail)
            }
            AppError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            AppError::Download(msg) => write!(f, "Download failed: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
