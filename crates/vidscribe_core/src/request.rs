//! Request and response types for text completion.

use serde::{Deserialize, Serialize};

/// Completion request sent to a completion driver.
///
/// # Examples
///
/// ```
/// use vidscribe_core::GenerateRequest;
///
/// let request = GenerateRequest::new("Write me a YouTube video title about cats")
///     .with_temperature(0.9)
///     .with_max_tokens(256);
///
/// assert_eq!(request.temperature, Some(0.9));
/// assert_eq!(request.model, None);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", strip_option)]
pub struct GenerateRequest {
    /// Fully rendered prompt text
    #[setters(skip)]
    pub prompt: String,
    /// Sampling temperature (0.0 to 2.0)
    pub temperature: Option<f32>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Model identifier, overriding the driver's default
    #[setters(into)]
    pub model: Option<String>,
}

impl GenerateRequest {
    /// Create a request for the given prompt with provider defaults.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }
}

/// Why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Model completed naturally.
    Stop,
    /// Hit max_tokens limit.
    Length,
    /// Content was filtered.
    ContentFilter,
    /// Other/unknown reason.
    #[serde(other)]
    Other,
}

/// Token accounting reported by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Usage {
    /// Tokens consumed by the prompt
    pub prompt_tokens: u32,
    /// Tokens generated
    pub completion_tokens: u32,
    /// Sum of both
    pub total_tokens: u32,
}

/// Completion result returned by a driver.
///
/// # Examples
///
/// ```
/// use vidscribe_core::GenerateResponse;
///
/// let response = GenerateResponse::text_only("Black Holes Explained");
/// assert_eq!(response.text(), "Black Holes Explained");
/// assert!(response.usage().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerateResponse {
    /// Generated text
    text: String,
    /// Why generation stopped, when reported
    finish_reason: Option<FinishReason>,
    /// Token usage, when reported
    usage: Option<Usage>,
}

impl GenerateResponse {
    /// Create a response with all fields.
    pub fn new(text: String, finish_reason: Option<FinishReason>, usage: Option<Usage>) -> Self {
        Self {
            text,
            finish_reason,
            usage,
        }
    }

    /// Create a response carrying only text.
    pub fn text_only(text: impl Into<String>) -> Self {
        Self::new(text.into(), None, None)
    }

    /// Consume the response, keeping the generated text.
    pub fn into_text(self) -> String {
        self.text
    }
}
