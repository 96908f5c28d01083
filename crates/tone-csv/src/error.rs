//! CSV error types.

use thiserror::Error;

/// Errors that abort a CSV import.
///
/// Malformed individual rows never produce an error; they are skipped and
/// counted in [`ParsedRows::skipped`](crate::ParsedRows::skipped).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CsvError {
    /// No header cell names a usable text column.
    #[error(
        "could not find a text column (expected one of: text, review, comment, feedback); found headers: [{}]",
        headers.join(", ")
    )]
    MissingColumn {
        /// Normalized header cells that were found (empty for an empty file).
        headers: Vec<String>,
    },
}
