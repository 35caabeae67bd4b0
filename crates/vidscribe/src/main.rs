//! Vidscribe CLI binary.
//!
//! This binary provides command-line access to Vidscribe:
//! - Launch the interactive TUI (default)
//! - Generate a title and script for one topic

use clap::Parser;
use vidscribe::{
    LogTarget, ObservabilityConfig, VidscribeConfig, init_observability, with_scoped_observability,
};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, launch_tui, run_generate};

    // Load .env before anything reads OPENAI_API_KEY
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };

    // Config decides the log format, so it loads under a temporary stderr subscriber
    let bootstrap = ObservabilityConfig::new().with_log_level(log_level);
    let config = with_scoped_observability(&bootstrap, || {
        VidscribeConfig::load(cli.config.as_deref())
    })??;

    // Initialize tracing
    let command = cli.command.unwrap_or(Commands::Tui);
    let target = match command {
        Commands::Tui => LogTarget::default_file(),
        Commands::Generate { .. } => LogTarget::Stderr,
    };
    init_observability(
        &ObservabilityConfig::new()
            .with_log_level(log_level)
            .with_json_logs(config.logging.json)
            .with_target(target),
    )?;

    // Execute the requested command
    match command {
        Commands::Tui => {
            launch_tui(&config).await?;
        }

        Commands::Generate { topic, format } => {
            run_generate(&config, &topic, format).await?;
        }
    }

    Ok(())
}
