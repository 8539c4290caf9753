use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `bix` binary.
#[derive(Debug, Parser)]
#[command(
    name = "bix",
    version,
    about = "bix - classify and describe every name in the builtins namespace",
    after_help = "Examples:\n  bix summary\n  bix inspect dict\n  bix inspect print\n  bix category \"Built-in Function\"\n  bix all"
)]
pub struct Cli {
    /// Defaults to `summary`.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format: text, json, raw, table (defaults to `output.format` from config)
    #[arg(short, long, global = true)]
    pub format: Option<OutputFormat>,

    /// Namespace snapshot (JSON or TOML) to inspect instead of the embedded table
    #[arg(short, long, global = true, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            snapshot: self.snapshot.clone(),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, GlobalFlags, OutputFormat};
    use crate::cli::root_commands::SchemaType;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_summary() {
        let cli = Cli::try_parse_from(["bix"]).expect("cli should parse");
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Commands::Summary));
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["bix", "--format", "table", "--verbose", "summary"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Table));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Summary)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["bix", "inspect", "dict", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(OutputFormat::Raw));
        assert!(cli.quiet);
        assert!(matches!(cli.command, Some(Commands::Inspect(ref args)) if args.name == "dict"));
    }

    #[test]
    fn category_accepts_labels_with_spaces() {
        let cli = Cli::try_parse_from(["bix", "category", "Built-in Function"])
            .expect("cli should parse");
        assert!(
            matches!(cli.command, Some(Commands::Category(ref args)) if args.name == "Built-in Function")
        );
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["bix", "--format", "xml", "summary"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn output_format_accepts_all_supported_values() {
        for value in ["text", "json", "table", "raw"] {
            let cli = Cli::try_parse_from(["bix", "--format", value, "all"])
                .expect("cli should parse");
            assert!(matches!(cli.command, Some(Commands::All)));
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["bix", "--quiet", "--verbose"]).is_err());
    }

    #[test]
    fn schema_type_is_validated() {
        let cli = Cli::try_parse_from(["bix", "schema", "catalog-entry"]).expect("cli should parse");
        assert!(
            matches!(cli.command, Some(Commands::Schema(ref args)) if args.type_name == SchemaType::CatalogEntry)
        );
        assert!(Cli::try_parse_from(["bix", "schema", "session"]).is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["bix", "--snapshot", "/tmp/ns.json", "all"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(
            flags.snapshot.as_deref(),
            Some(std::path::Path::new("/tmp/ns.json"))
        );
        assert_eq!(flags.format, None);
    }
}
