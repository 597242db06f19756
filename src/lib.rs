// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Registration roster builder
//!
//! Scans a directory for `.eml` registration notifications, pulls the
//! registrant's name, phone number and email out of the HTML body, and
//! writes one row per unique email to an Excel workbook.
//!
//! # Example
//!
//! ```rust
//! use eml_roster::parse_registration;
//!
//! let raw = b"From: forms@example.com\r\n\
//!     Date: Fri, 01 Mar 2024 10:00:00 +0000\r\n\
//!     Content-Type: text/html\r\n\r\n\
//!     <td style=\"color:#555555;padding-top: 3px;padding-bottom: 20px;\">Jane Doe</td>\
//!     <a href=\"mailto:jane@example.com\">jane@example.com</a>\
//!     <td style=\"color:#555555;padding-top: 3px;padding-bottom: 20px;\">Course A</td>\
//!     <td style=\"color:#555555;padding-top: 3px;padding-bottom: 20px;\">+1-555-0100</td>";
//! let record = parse_registration(raw).unwrap();
//!
//! assert_eq!(record.name, "Jane Doe");
//! assert_eq!(record.phone_number, "+1-555-0100");
//! ```

mod config;
mod discovery;
mod error;
mod extracted;
mod parser;
mod pipeline;
mod types;
mod writer;

pub use config::{Config, EML_SUFFIX, OUTPUT_FILE_NAME, SHEET_NAME};
pub use discovery::discover_files;
pub use error::{Error, Result};
pub use extracted::*;
pub use parser::{DATE_FORMAT, parse_file, parse_registration};
pub use pipeline::{RunSummary, collect_records, run};
pub use types::*;
pub use writer::write_workbook;
