//! UI Components for the PDF parser page.
//!
//! # Layout Components
//! - [`Hero`] - Title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadForm`] - `uploadForm` with the `pdfFile` input
//! - [`ResultPanel`] - `result` container (messages or table)
//! - [`DownloadButton`] - `downloadJsonBtn` JSON export

mod hero;
mod upload_form;
mod result_view;
mod download_button;
mod footer;

pub use hero::*;
pub use upload_form::*;
pub use result_view::*;
pub use download_button::*;
pub use footer::*;
