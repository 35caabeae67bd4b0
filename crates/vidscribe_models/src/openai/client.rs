//! OpenAI completions API client.

use crate::openai::{OpenAiCompletionRequest, OpenAiCompletionResponse};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, error, instrument};
use vidscribe_core::{GenerateRequest, GenerateResponse};
use vidscribe_error::{ConfigError, ServiceError, ServiceErrorKind, VidscribeResult};
use vidscribe_interface::CompletionDriver;

/// Client for the OpenAI legacy text completions endpoint.
///
/// A missing API key is not an error at construction time; the first call to
/// [`generate`](CompletionDriver::generate) reports it instead.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
}

impl OpenAiClient {
    /// Default API root.
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";

    /// Default completion model.
    pub const DEFAULT_MODEL: &'static str = "gpt-3.5-turbo-instruct";

    /// Creates a new OpenAI client.
    ///
    /// Reads the API key from the `OPENAI_API_KEY` environment variable.
    #[instrument(skip_all)]
    pub fn new(model: impl Into<String>) -> Self {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        if api_key.is_none() {
            debug!("OPENAI_API_KEY not set; completion calls will fail");
        }
        Self::build(api_key, model.into())
    }

    /// Creates a new OpenAI client with an explicit API key.
    #[instrument(skip_all)]
    pub fn with_api_key(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::build(Some(api_key.into()), model.into())
    }

    fn build(api_key: Option<String>, model: String) -> Self {
        debug!(model = %model, "Created OpenAI client");
        Self {
            client: Client::new(),
            api_key,
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            model,
        }
    }

    /// Point the client at a different API root (proxies, compatible servers, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Apply a whole-request timeout to every call.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be rebuilt.
    pub fn with_timeout(mut self, timeout: Duration) -> VidscribeResult<Self> {
        self.client = Client::builder().timeout(timeout).build().map_err(|e| {
            ConfigError::new(format!("Failed to build HTTP client: {}", e))
        })?;
        Ok(self)
    }

    /// Whether an API key is available.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn endpoint(&self) -> String {
        format!("{}/completions", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionDriver for OpenAiClient {
    #[instrument(skip(self, req), fields(provider = "openai", model = %self.model))]
    async fn generate(&self, req: &GenerateRequest) -> VidscribeResult<GenerateResponse> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| ServiceError::new(ServiceErrorKind::MissingApiKey))?;

        let body = OpenAiCompletionRequest::builder()
            .model(req.model.clone().unwrap_or_else(|| self.model.clone()))
            .prompt(req.prompt.clone())
            .temperature(req.temperature)
            .max_tokens(req.max_tokens)
            .build()
            .map_err(|e| ServiceError::new(ServiceErrorKind::RequestConversion(e.to_string())))?;

        let url = self.endpoint();
        debug!(url = %url, prompt_len = req.prompt.len(), "Sending completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "HTTP request failed");
                ServiceError::new(ServiceErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, error = %message, "API error");

            let kind = match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ServiceErrorKind::Unauthorized {
                    status: status.as_u16(),
                    message,
                },
                _ => ServiceErrorKind::Api {
                    status: status.as_u16(),
                    message,
                },
            };
            return Err(ServiceError::new(kind).into());
        }

        let reply: OpenAiCompletionResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse completion response");
            ServiceError::new(ServiceErrorKind::ResponseParsing(e.to_string()))
        })?;

        let (choice, usage) = reply.into_first_choice();
        let choice = choice.ok_or_else(|| ServiceError::new(ServiceErrorKind::EmptyResponse))?;

        debug!(
            response_len = choice.text().len(),
            finish_reason = ?choice.finish_reason(),
            "Received completion"
        );

        Ok(GenerateResponse::new(
            choice.text().trim().to_string(),
            *choice.finish_reason(),
            usage,
        ))
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
