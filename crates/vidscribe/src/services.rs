//! Construction of the service clients and the pipeline from configuration.

use crate::VidscribeConfig;
use std::{sync::Arc, time::Duration};
use tracing::{info, instrument, warn};
use vidscribe_chain::VideoPipeline;
use vidscribe_error::VidscribeResult;
use vidscribe_models::{OpenAiClient, WikipediaClient};

/// Build the completion client described by `[completion]`.
///
/// The API key comes from `OPENAI_API_KEY`. A missing key is reported on the
/// first request, not here.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built with the configured
/// timeout.
pub fn completion_client(config: &VidscribeConfig) -> VidscribeResult<OpenAiClient> {
    let completion = &config.completion;
    let mut client = OpenAiClient::new(completion.model.clone()).with_base_url(completion.base_url.clone());

    if let Some(secs) = completion.timeout_secs {
        client = client.with_timeout(Duration::from_secs(secs))?;
    }

    if !client.has_api_key() {
        warn!("OPENAI_API_KEY is not set; generation will fail until it is");
    }

    Ok(client)
}

/// Build the lookup client described by `[research]`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn research_client(config: &VidscribeConfig) -> VidscribeResult<WikipediaClient> {
    let research = &config.research;
    let mut client = WikipediaClient::for_language(&research.language)?
        .with_top_k(research.top_k_results)
        .with_max_chars(research.max_chars)
        .with_no_match(research.no_match);

    if let Some(base_url) = &research.base_url {
        client = client.with_base_url(base_url.clone());
    }

    Ok(client)
}

/// Wire both clients and the configured prompts into a pipeline.
///
/// # Errors
///
/// Returns an error if a client cannot be built or a prompt is invalid.
#[instrument(skip(config), fields(model = %config.completion.model))]
pub fn build_pipeline(config: &VidscribeConfig) -> VidscribeResult<VideoPipeline> {
    let driver = Arc::new(completion_client(config)?);
    let research = Arc::new(research_client(config)?);

    let pipeline = VideoPipeline::with_prompts(
        driver,
        research,
        config.prompts.title_template()?,
        config.prompts.script_template()?,
        config.completion.chain_settings(),
    )?;

    info!("Pipeline ready");
    Ok(pipeline)
}
