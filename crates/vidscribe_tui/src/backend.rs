//! Backend trait for TUI generation.
//!
//! This module defines the backend trait that lets the TUI drive any
//! generator (the real pipeline, or a scripted one in tests) without
//! coupling to a specific implementation.

use crate::GenerationView;
use async_trait::async_trait;
use vidscribe_chain::VideoPipeline;
use vidscribe_error::VidscribeResult;

/// Backend trait for TUI generation.
///
/// Note: Only requires `Send` (not `Sync`) since the TUI drives one
/// submission at a time.
#[async_trait]
pub trait TuiBackend: Send {
    /// Run one submission for raw user input.
    ///
    /// # Returns
    ///
    /// `Ok(None)` for empty input, otherwise the values to display.
    async fn generate(&mut self, raw: &str) -> VidscribeResult<Option<GenerationView>>;
}

#[async_trait]
impl TuiBackend for VideoPipeline {
    async fn generate(&mut self, raw: &str) -> VidscribeResult<Option<GenerationView>> {
        let Some(output) = self.submit(raw).await? else {
            return Ok(None);
        };

        Ok(Some(GenerationView {
            title: output.title().clone(),
            script: output.script().clone(),
            research: output.research().clone(),
            title_history: self.title_log().buffer(),
            script_history: self.script_log().buffer(),
        }))
    }
}
