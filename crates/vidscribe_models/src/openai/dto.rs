//! OpenAI completions API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use vidscribe_core::{FinishReason, Usage};

/// Body of `POST /v1/completions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct OpenAiCompletionRequest {
    /// Model identifier
    model: String,
    /// Rendered prompt
    prompt: String,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Maximum tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

impl OpenAiCompletionRequest {
    /// Creates a new builder for `OpenAiCompletionRequest`.
    pub fn builder() -> OpenAiCompletionRequestBuilder {
        OpenAiCompletionRequestBuilder::default()
    }
}

/// One generated alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct OpenAiChoice {
    /// Generated text
    text: String,
    /// Why generation stopped
    #[serde(default)]
    finish_reason: Option<FinishReason>,
}

/// Reply of `POST /v1/completions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct OpenAiCompletionResponse {
    /// Generated alternatives, first one is used
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
    /// Token usage statistics (if available)
    #[serde(default)]
    usage: Option<Usage>,
}

impl OpenAiCompletionResponse {
    /// Split into the first choice and the usage report.
    pub fn into_first_choice(self) -> (Option<OpenAiChoice>, Option<Usage>) {
        (self.choices.into_iter().next(), self.usage)
    }
}
