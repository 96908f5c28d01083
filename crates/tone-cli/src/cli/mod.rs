use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, EngineOverride, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

use crate::commands::shared::parse::parse_enum;

/// Top-level CLI parser for the `tone` binary.
#[derive(Debug, Parser)]
#[command(name = "tone", version, about = "Tone - text sentiment analysis")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Colorize table output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Industry focus: finance, government (defaults to config)
    #[arg(short, long, global = true)]
    pub industry: Option<String>,

    /// Use the hosted model for manual analysis
    #[arg(long, global = true, conflicts_with = "local")]
    pub remote: bool,

    /// Use only the local lexicon, even if a remote model is configured
    #[arg(long, global = true)]
    pub local: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    ///
    /// # Errors
    ///
    /// Returns an error when `--industry` names an unknown industry.
    pub fn global_flags(&self) -> anyhow::Result<GlobalFlags> {
        let industry = self
            .industry
            .as_deref()
            .map(|value| parse_enum(value, "industry"))
            .transpose()?;
        let engine = if self.remote {
            Some(EngineOverride::Remote)
        } else if self.local {
            Some(EngineOverride::Local)
        } else {
            None
        };

        Ok(GlobalFlags {
            format: self.format,
            color: self.color,
            quiet: self.quiet,
            industry,
            engine,
        })
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;
    use tone_core::Industry;

    use super::{Cli, Commands, EngineOverride, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn default_format_is_table() {
        let cli = Cli::try_parse_from(["tone", "session"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(matches!(cli.command, Commands::Session));
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "tone",
            "--format",
            "json",
            "--industry",
            "government",
            "--verbose",
            "session",
        ])
        .expect("cli should parse");

        assert!(cli.verbose);
        let flags = cli.global_flags().expect("flags");
        assert_eq!(flags.format, OutputFormat::Json);
        assert_eq!(flags.industry, Some(Industry::Government));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["tone", "samples", "--format", "raw", "--quiet", "--local"])
            .expect("cli should parse");

        let flags = cli.global_flags().expect("flags");
        assert_eq!(flags.format, OutputFormat::Raw);
        assert!(flags.quiet);
        assert_eq!(flags.engine, Some(EngineOverride::Local));
    }

    #[test]
    fn remote_and_local_conflict() {
        let parsed = Cli::try_parse_from(["tone", "--remote", "--local", "session"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn unknown_industry_is_rejected() {
        let cli = Cli::try_parse_from(["tone", "--industry", "retail", "session"])
            .expect("cli should parse");
        let err = cli.global_flags().expect_err("industry should be rejected");
        assert!(err.to_string().contains("invalid industry 'retail'"));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["tone", "--format", "xml", "session"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn analyze_joins_words() {
        let cli = Cli::try_parse_from(["tone", "analyze", "really", "great", "service"])
            .expect("cli should parse");
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.joined(), "really great service");
    }

    #[test]
    fn analyze_requires_text() {
        assert!(Cli::try_parse_from(["tone", "analyze"]).is_err());
    }

    #[test]
    fn samples_out_requires_csv() {
        assert!(Cli::try_parse_from(["tone", "samples", "--out", "x.csv"]).is_err());
        let cli = Cli::try_parse_from(["tone", "samples", "--csv", "--out", "x.csv"])
            .expect("cli should parse");
        let Commands::Samples(args) = cli.command else {
            panic!("expected samples");
        };
        assert_eq!(args.out.as_deref(), Some("x.csv"));
    }
}
