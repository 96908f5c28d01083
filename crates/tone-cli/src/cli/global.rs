use clap::ValueEnum;
use tone_core::Industry;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Raw,
}

/// When table output is colorized.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Which classifier manual analysis uses, when forced from the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EngineOverride {
    Remote,
    Local,
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub color: ColorMode,
    pub quiet: bool,
    pub industry: Option<Industry>,
    pub engine: Option<EngineOverride>,
}
