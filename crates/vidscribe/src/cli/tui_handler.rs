//! TUI launch command handler.

use vidscribe::{VidscribeConfig, VidscribeResult, build_pipeline, run_tui};

/// Launch the interactive terminal interface.
pub async fn launch_tui(config: &VidscribeConfig) -> VidscribeResult<()> {
    tracing::info!(model = %config.completion.model, "Launching TUI");

    let mut pipeline = build_pipeline(config)?;
    run_tui(&mut pipeline).await?;

    tracing::info!("TUI closed");
    Ok(())
}
