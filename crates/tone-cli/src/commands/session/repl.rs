/// One line of input in an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Analyze(String),
    Import(String),
    Export(Option<String>),
    Samples,
    Stats,
    History,
    Clear,
    Industry(String),
    Status,
    Help,
    Quit,
    Unknown(String),
    Usage(&'static str),
}

pub const HELP: &str = "\
Type any text to analyze it. Commands:
  :import <path>      classify the text column of a CSV file
  :export [path]      write the history as CSV
  :samples            load the sample dataset for the current industry
  :stats              sentiment distribution and confidence trend
  :history            list analyzed entries, newest first
  :clear              drop the history
  :industry <name>    switch to finance or government
  :status             show industry, engine, and history size
  :help               show this help
  :quit               leave the session";

/// Parse one input line. Blank lines yield `None`.
#[must_use]
pub fn parse(line: &str) -> Option<ReplCommand> {
    if line.trim().is_empty() {
        return None;
    }

    let Some(command) = line.trim_start().strip_prefix(':') else {
        return Some(ReplCommand::Analyze(line.to_string()));
    };

    let (name, rest) = command
        .trim()
        .split_once(char::is_whitespace)
        .map_or((command.trim(), ""), |(name, rest)| (name, rest.trim()));
    let argument = (!rest.is_empty()).then(|| rest.to_string());

    Some(match name.to_ascii_lowercase().as_str() {
        "import" => argument.map_or(ReplCommand::Usage(":import <path>"), ReplCommand::Import),
        "export" => ReplCommand::Export(argument),
        "samples" => ReplCommand::Samples,
        "stats" => ReplCommand::Stats,
        "history" => ReplCommand::History,
        "clear" => ReplCommand::Clear,
        "industry" => argument.map_or(
            ReplCommand::Usage(":industry <finance|government>"),
            ReplCommand::Industry,
        ),
        "status" => ReplCommand::Status,
        "help" | "h" | "?" => ReplCommand::Help,
        "quit" | "q" | "exit" => ReplCommand::Quit,
        other => ReplCommand::Unknown(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{ReplCommand, parse};

    #[test]
    fn blank_lines_are_ignored() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("   \t"), None);
    }

    #[test]
    fn plain_text_is_analyzed_verbatim() {
        assert_eq!(
            parse("  great service "),
            Some(ReplCommand::Analyze("  great service ".to_string()))
        );
    }

    #[test]
    fn commands_take_trimmed_arguments() {
        assert_eq!(
            parse(":import   data/reviews.csv  "),
            Some(ReplCommand::Import("data/reviews.csv".to_string()))
        );
        assert_eq!(parse(":export"), Some(ReplCommand::Export(None)));
        assert_eq!(
            parse(":export out.csv"),
            Some(ReplCommand::Export(Some("out.csv".to_string())))
        );
        assert_eq!(
            parse(":Industry government"),
            Some(ReplCommand::Industry("government".to_string()))
        );
    }

    #[test]
    fn missing_arguments_report_usage() {
        assert_eq!(parse(":import"), Some(ReplCommand::Usage(":import <path>")));
        assert!(matches!(parse(":industry "), Some(ReplCommand::Usage(_))));
    }

    #[test]
    fn aliases_and_unknown_commands() {
        assert_eq!(parse(":q"), Some(ReplCommand::Quit));
        assert_eq!(parse(":?"), Some(ReplCommand::Help));
        assert_eq!(
            parse(":frobnicate now"),
            Some(ReplCommand::Unknown("frobnicate".to_string()))
        );
    }
}
