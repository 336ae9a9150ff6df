// src/cli/args.rs
// Command line arguments for the catalog binary

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for non-interactive commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "agentsea-catalog",
    version,
    about = "Browse the AgentSea example catalog from your terminal"
)]
pub struct CliArgs {
    /// Load the catalog from a JSON file instead of the built-in examples
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Narrow the catalog to a single category
    #[arg(long, global = true, value_name = "LABEL")]
    pub category: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the catalog interactively (the default)
    Browse,
    /// Print one-line summaries of every example
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print one example fully expanded
    Show {
        /// Position in the listing, starting at 1
        index: usize,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Copy an example's code to the system clipboard
    Copy {
        /// Position in the listing, starting at 1
        index: usize,
    },
    /// Show the product landing view
    Home,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let args = CliArgs::parse_from(["agentsea-catalog"]);
        assert!(args.command.is_none());
        assert!(args.file.is_none());
    }

    #[test]
    fn test_global_flags_apply_to_subcommands() {
        let args = CliArgs::parse_from(["agentsea-catalog", "list", "--category", "voice"]);
        assert_eq!(args.category.as_deref(), Some("voice"));
        assert!(matches!(args.command, Some(Command::List { .. })));
    }

    #[test]
    fn test_show_takes_a_one_based_index() {
        let args = CliArgs::parse_from(["agentsea-catalog", "show", "3", "--format", "json"]);
        match args.command {
            Some(Command::Show { index, format }) => {
                assert_eq!(index, 3);
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
