//! Entity structs for Tone domain objects.
//!
//! A [`Classification`] is what any classifier returns; a
//! [`ClassificationResult`] is the full ledger entry built around it.

mod classification;
mod result;

pub use classification::Classification;
pub use result::{ClassificationResult, PREVIEW_CHARS, TIMESTAMP_FORMAT};
