//! Backend and browser services.
//!
//! # Services
//!
//! - [`parse`] - PDF upload to the parsing endpoint
//! - [`download`] - JSON download of the last parsed response
//! - [`submission`] - ordering of overlapping submissions

pub mod parse;
pub mod download;
pub mod submission;

pub use parse::*;
pub use download::*;
pub use submission::*;
