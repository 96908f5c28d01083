use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Classify one piece of text.
    Analyze(AnalyzeArgs),
    /// Classify the text column of a CSV file.
    Import(ImportArgs),
    /// Classify the built-in sample dataset, or write it as CSV.
    Samples(SamplesArgs),
    /// Interactive session: analyze lines from stdin and manage the history.
    Session,
}

#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    /// Text to classify; multiple words are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

impl AnalyzeArgs {
    #[must_use]
    pub fn joined(&self) -> String {
        self.text.join(" ")
    }
}

#[derive(Clone, Debug, Args)]
pub struct ImportArgs {
    /// CSV file with a text, review, comment, or feedback column.
    pub file: String,

    /// Also write the analyzed rows as a CSV export to this path.
    #[arg(long)]
    pub export: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SamplesArgs {
    /// Emit the sample dataset as importable CSV instead of classifying it.
    #[arg(long)]
    pub csv: bool,

    /// File to write the sample CSV to (stdout when omitted).
    #[arg(long, requires = "csv")]
    pub out: Option<String>,
}
