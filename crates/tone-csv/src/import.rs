//! Text-column extraction from uploaded CSV files.

use crate::error::CsvError;

/// Header names accepted as the text column, in lookup order per cell.
pub const TEXT_COLUMNS: &[&str] = &["text", "review", "comment", "feedback"];

/// Maximum number of data rows considered after the header.
pub const MAX_DATA_ROWS: usize = 50;

/// Minimum length (in characters) of a row's text to be analyzed.
pub const MIN_TEXT_CHARS: usize = 6;

/// Candidate texts extracted from a CSV file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRows {
    /// Normalized header of the column the texts came from.
    pub column: String,
    /// Surviving texts, in file order.
    pub texts: Vec<String>,
    /// Rows within the cap that were dropped (too few fields, too short).
    pub skipped: usize,
    /// True when rows beyond [`MAX_DATA_ROWS`] were ignored.
    pub truncated: bool,
}

/// Extract candidate texts from raw CSV `contents`.
///
/// Blank lines are discarded before the header is read and before the
/// [`MAX_DATA_ROWS`] cap is applied. Rows are split on every comma; quoted
/// commas are not recognized.
///
/// # Errors
///
/// Returns [`CsvError::MissingColumn`] when no header cell (trimmed,
/// lowercased) is one of [`TEXT_COLUMNS`], including when the input has no
/// non-blank line at all.
pub fn parse_rows(contents: &str) -> Result<ParsedRows, CsvError> {
    let mut lines = contents.lines().filter(|line| !line.trim().is_empty());

    let Some(header_line) = lines.next() else {
        return Err(CsvError::MissingColumn {
            headers: Vec::new(),
        });
    };

    let headers: Vec<String> = header_line
        .split(',')
        .map(|cell| cell.trim().to_lowercase())
        .collect();

    let Some(column_index) = headers
        .iter()
        .position(|header| TEXT_COLUMNS.contains(&header.as_str()))
    else {
        return Err(CsvError::MissingColumn { headers });
    };

    let data: Vec<&str> = lines.collect();
    let mut parsed = ParsedRows {
        column: headers[column_index].clone(),
        truncated: data.len() > MAX_DATA_ROWS,
        ..ParsedRows::default()
    };

    for row in data.into_iter().take(MAX_DATA_ROWS) {
        match extract_text(row, column_index) {
            Some(text) => parsed.texts.push(text),
            None => parsed.skipped += 1,
        }
    }

    tracing::debug!(
        column = %parsed.column,
        rows = parsed.texts.len(),
        skipped = parsed.skipped,
        truncated = parsed.truncated,
        "parsed csv rows"
    );

    Ok(parsed)
}

fn extract_text(row: &str, column_index: usize) -> Option<String> {
    let field = row.split(',').nth(column_index)?;
    let field = field.strip_prefix('"').unwrap_or(field);
    let field = field.strip_suffix('"').unwrap_or(field);
    let text = field.trim();

    (text.chars().count() >= MIN_TEXT_CHARS).then(|| text.to_string())
}
