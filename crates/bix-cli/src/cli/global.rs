use std::path::PathBuf;

use clap::ValueEnum;

/// Shared output mode across all commands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report.
    Text,
    Json,
    Table,
    /// Single-line JSON.
    Raw,
}

impl OutputFormat {
    /// Parse a configured format name, ignoring case.
    pub fn from_config(value: &str) -> anyhow::Result<Self> {
        <Self as ValueEnum>::from_str(value, true)
            .map_err(|error| anyhow::anyhow!("invalid output.format '{value}': {error}"))
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: Option<OutputFormat>,
    pub snapshot: Option<PathBuf>,
    pub quiet: bool,
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::OutputFormat;

    #[test]
    fn config_format_is_case_insensitive() {
        assert_eq!(
            OutputFormat::from_config("JSON").expect("valid"),
            OutputFormat::Json
        );
        assert_eq!(
            OutputFormat::from_config("text").expect("valid"),
            OutputFormat::Text
        );
        assert!(OutputFormat::from_config("yaml").is_err());
    }
}
