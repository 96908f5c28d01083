//! Sample dataset CSV in the importer's `text,category` shape.

use tone_core::Industry;
use tone_core::samples;

use crate::export::quote_field;

/// Render the industry's sample dataset as `text,category` CSV.
#[must_use]
pub fn sample_csv(industry: Industry) -> String {
    let mut lines = vec![String::from("text,category")];
    lines.extend(
        samples::for_industry(industry)
            .iter()
            .map(|sample| format!("{},{}", quote_field(sample.text), sample.category)),
    );
    lines.join("\n")
}

/// Download name for an industry's sample CSV.
#[must_use]
pub fn sample_file_name(industry: Industry) -> String {
    format!("{industry}-sample-data.csv")
}
