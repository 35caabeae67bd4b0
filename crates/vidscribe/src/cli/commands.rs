//! CLI command definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Vidscribe - YouTube video titles and scripts from a topic
#[derive(Parser, Debug)]
#[command(name = "vidscribe")]
#[command(about = "Generate YouTube video titles and scripts grounded in Wikipedia research", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute (defaults to the interactive TUI)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file layered over the defaults
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Launch the interactive terminal interface
    Tui,

    /// Generate a title and script for one topic and print them
    Generate {
        /// Topic to write about
        topic: String,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Labelled plain-text sections
    Text,
    /// A single JSON object
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_tui() {
        let cli = Cli::try_parse_from(["vidscribe"]).expect("parse");
        assert_eq!(cli.command, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_generate_with_global_flags() {
        let cli = Cli::try_parse_from([
            "vidscribe",
            "generate",
            "black holes",
            "--format",
            "json",
            "--verbose",
            "--config",
            "custom.toml",
        ])
        .expect("parse");

        assert_eq!(
            cli.command,
            Some(Commands::Generate {
                topic: "black holes".to_string(),
                format: OutputFormat::Json,
            })
        );
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["vidscribe", "generate", "cats", "--format", "xml"]).is_err());
    }
}
