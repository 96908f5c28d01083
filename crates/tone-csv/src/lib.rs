//! # tone-csv
//!
//! CSV ingestion and export for Tone.
//!
//! - [`parse_rows`] pulls candidate texts out of an uploaded file by locating a
//!   `text`, `review`, `comment`, or `feedback` header column.
//! - [`export_ledger`] serializes the history ledger, newest-first.
//! - [`sample_csv`] writes a curated dataset in the `text,category` shape the
//!   importer consumes.
//!
//! The importer splits rows on every comma and does not understand quoted
//! fields, while the exporter quotes and escapes the text column. A text that
//! contains a comma therefore does not survive an export/import round trip.

mod error;
mod export;
mod import;
mod sample;

pub use error::CsvError;
pub use export::{CSV_MIME_TYPE, EXPORT_HEADER, export_file_name, export_ledger, quote_field};
pub use import::{MAX_DATA_ROWS, MIN_TEXT_CHARS, ParsedRows, TEXT_COLUMNS, parse_rows};
pub use sample::{sample_csv, sample_file_name};
