//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - merge: arguments of the default merge run
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod merge;

pub use completions::CompletionsArgs;
pub use merge::MergeArgs;

/// merge-yaml - overlay one YAML document onto another
#[derive(Parser, Debug)]
#[command(
    name = "merge-yaml",
    author,
    version,
    args_conflicts_with_subcommands = true,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Overlay the top-level keys of a header YAML document onto a base document",
    long_about = "Reads a base document and a header document, replaces or adds every top-level \
                  key of the base with the header's value, and writes the result. Nested mappings \
                  are replaced wholesale, never merged.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  merge-yaml                                   \x1b[90m# openapi_header.yml over openapi.yml into merged_openapi.yml\x1b[0m\n   \
                  merge-yaml --base api.yml --header info.yml  \x1b[90m# Custom inputs\x1b[0m\n   \
                  merge-yaml --sort-keys -o merged.yml         \x1b[90m# Sorted keys, custom output\x1b[0m\n   \
                  merge-yaml --dry-run                         \x1b[90m# Print the result instead of writing it\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    #[command(flatten)]
    pub merge: MergeArgs,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parsing_defaults() {
        let cli = Cli::try_parse_from(["merge-yaml"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert_eq!(cli.merge.base, PathBuf::from("openapi.yml"));
        assert_eq!(cli.merge.header, PathBuf::from("openapi_header.yml"));
        assert_eq!(cli.merge.output, PathBuf::from("merged_openapi.yml"));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["merge-yaml", "version"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Version)));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["merge-yaml", "completions", "zsh"]).unwrap();
        match cli.command {
            Some(Commands::Completions(args)) => assert_eq!(args.shell, "zsh"),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_parsing_verbose() {
        let cli = Cli::try_parse_from(["merge-yaml", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_merge_flags_conflict_with_subcommand() {
        let result = Cli::try_parse_from(["merge-yaml", "--dry-run", "version"]);
        assert!(result.is_err());
    }
}
