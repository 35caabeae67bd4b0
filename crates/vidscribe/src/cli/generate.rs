//! One-shot generation command handler.

use super::OutputFormat;
use vidscribe::{Report, VidscribeConfig, VidscribeResult, build_pipeline};

/// Run the pipeline once for `topic` and print the result to stdout.
#[tracing::instrument(skip(config))]
pub async fn run_generate(
    config: &VidscribeConfig,
    topic: &str,
    format: OutputFormat,
) -> VidscribeResult<()> {
    let mut pipeline = build_pipeline(config)?;

    let Some(output) = pipeline.submit(topic).await? else {
        tracing::warn!("Topic is empty, nothing to generate");
        return Ok(());
    };

    let report = Report::new(&output, &pipeline);
    match format {
        OutputFormat::Text => println!("{}", report.to_text()),
        OutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize report");
                println!("{}", report.to_text());
            }
        },
    }

    Ok(())
}
