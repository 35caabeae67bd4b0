//! A single prompt → completion step with conversation memory.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use vidscribe_core::{ConversationLog, GenerateRequest, PromptTemplate};
use vidscribe_error::{TemplateError, TemplateErrorKind, VidscribeResult};
use vidscribe_interface::{CompletionDriver, PostCallHook};

/// Sampling and logging settings shared by a chain's calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainSettings {
    /// Sampling temperature, fixed for the chain's lifetime
    pub temperature: f32,
    /// Maximum tokens per completion
    pub max_tokens: Option<u32>,
    /// Model override; the driver's model when `None`
    pub model: Option<String>,
    /// Log formatted prompts and completions at `info` level
    pub verbose: bool,
}

impl Default for ChainSettings {
    fn default() -> Self {
        Self {
            temperature: 0.9,
            max_tokens: Some(256),
            model: None,
            verbose: true,
        }
    }
}

/// Renders a prompt, calls the completion driver and records the exchange.
///
/// After every successful call the chain runs its conversation log's
/// [`PostCallHook`] with the value of the log's input variable and the
/// generated text. Failed calls leave the log untouched.
pub struct LlmChain {
    driver: Arc<dyn CompletionDriver>,
    prompt: PromptTemplate,
    memory: ConversationLog,
    settings: ChainSettings,
}

impl LlmChain {
    /// Create a chain.
    ///
    /// # Errors
    ///
    /// Returns a template error if the log's input key is not one of the
    /// prompt's variables.
    pub fn new(
        driver: Arc<dyn CompletionDriver>,
        prompt: PromptTemplate,
        memory: ConversationLog,
    ) -> Result<Self, TemplateError> {
        if !prompt
            .input_variables()
            .iter()
            .any(|name| name == memory.input_key())
        {
            return Err(TemplateError::new(TemplateErrorKind::Mismatch {
                missing: vec![memory.input_key().to_string()],
                unexpected: vec![],
            }));
        }

        Ok(Self {
            driver,
            prompt,
            memory,
            settings: ChainSettings::default(),
        })
    }

    /// Replace the chain's settings.
    pub fn with_settings(mut self, settings: ChainSettings) -> Self {
        self.settings = settings;
        self
    }

    /// The chain's prompt template.
    pub fn prompt(&self) -> &PromptTemplate {
        &self.prompt
    }

    /// The chain's conversation log.
    pub fn memory(&self) -> &ConversationLog {
        &self.memory
    }

    /// The chain's settings.
    pub fn settings(&self) -> &ChainSettings {
        &self.settings
    }

    /// Same driver, prompt and settings with an empty log.
    pub fn fork(&self) -> Self {
        Self {
            driver: Arc::clone(&self.driver),
            prompt: self.prompt.clone(),
            memory: ConversationLog::new(self.memory.input_key()),
            settings: self.settings.clone(),
        }
    }

    /// Render the prompt with `inputs`, generate, and record the turn.
    ///
    /// # Errors
    ///
    /// Returns a template error if `inputs` do not match the prompt's
    /// variables, or the driver's error if generation fails.
    #[instrument(
        skip(self, inputs),
        fields(
            chain = %self.memory.input_key(),
            provider = self.driver.provider_name(),
            model = %self.driver.model_name()
        )
    )]
    pub async fn run(&mut self, inputs: &[(&str, &str)]) -> VidscribeResult<String> {
        let prompt = self.prompt.render(inputs.iter().copied())?;
        if self.settings.verbose {
            info!("Prompt after formatting:\n{}", prompt);
        }

        let mut request = GenerateRequest::new(prompt).with_temperature(self.settings.temperature);
        if let Some(max_tokens) = self.settings.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }
        if let Some(model) = &self.settings.model {
            request = request.with_model(model.clone());
        }

        let text = self.driver.generate(&request).await?.into_text();
        if self.settings.verbose {
            info!("Finished chain:\n{}", text);
        }

        let input = inputs
            .iter()
            .find(|(name, _)| *name == self.memory.input_key())
            .map(|(_, value)| *value)
            .unwrap_or_default();
        self.memory.after_call(input, &text);
        debug!(turns = self.memory.len(), "Recorded turn");

        Ok(text)
    }
}

impl std::fmt::Debug for LlmChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmChain")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.driver.model_name())
            .field("prompt", &self.prompt)
            .field("turns", &self.memory.len())
            .field("settings", &self.settings)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use vidscribe_core::{GenerateResponse, Turn};
    use vidscribe_error::{ServiceError, ServiceErrorKind};

    /// Echoes the prompt and remembers every request it saw.
    #[derive(Default)]
    struct RecordingDriver {
        requests: Mutex<Vec<GenerateRequest>>,
        fail: bool,
    }

    #[async_trait]
    impl CompletionDriver for RecordingDriver {
        async fn generate(&self, req: &GenerateRequest) -> VidscribeResult<GenerateResponse> {
            self.requests.lock().expect("lock").push(req.clone());
            if self.fail {
                return Err(ServiceError::new(ServiceErrorKind::Http("offline".into())).into());
            }
            Ok(GenerateResponse::text_only(format!("echo: {}", req.prompt)))
        }

        fn provider_name(&self) -> &'static str {
            "mock"
        }

        fn model_name(&self) -> &str {
            "mock-model-v1"
        }
    }

    fn title_chain(driver: Arc<RecordingDriver>) -> LlmChain {
        let prompt = PromptTemplate::new(["topic"], "Title about {topic}").expect("template");
        LlmChain::new(driver, prompt, ConversationLog::new("topic")).expect("chain")
    }

    #[tokio::test]
    async fn test_run_uses_fixed_temperature_and_records_turn() {
        let driver = Arc::new(RecordingDriver::default());
        let mut chain = title_chain(Arc::clone(&driver)).with_settings(ChainSettings {
            temperature: 0.9,
            max_tokens: Some(64),
            model: Some("gpt-test".to_string()),
            verbose: false,
        });

        let text = chain.run(&[("topic", "cats")]).await.expect("run");

        assert_eq!(text, "echo: Title about cats");
        let requests = driver.requests.lock().expect("lock");
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].temperature, Some(0.9));
        assert_eq!(requests[0].max_tokens, Some(64));
        assert_eq!(requests[0].model.as_deref(), Some("gpt-test"));
        assert_eq!(chain.memory().turns(), &[Turn::new("cats", "echo: Title about cats")]);
    }

    #[tokio::test]
    async fn test_failed_call_leaves_log_untouched() {
        let driver = Arc::new(RecordingDriver {
            fail: true,
            ..Default::default()
        });
        let mut chain = title_chain(driver);

        let err = chain.run(&[("topic", "cats")]).await.expect_err("driver fails");
        assert!(err.is_service());
        assert!(chain.memory().is_empty());
    }

    #[tokio::test]
    async fn test_template_mismatch_skips_driver() {
        let driver = Arc::new(RecordingDriver::default());
        let mut chain = title_chain(Arc::clone(&driver));

        let err = chain.run(&[("subject", "cats")]).await.expect_err("mismatch");
        assert!(matches!(
            err.kind(),
            vidscribe_error::VidscribeErrorKind::Template(_)
        ));
        assert!(driver.requests.lock().expect("lock").is_empty());
    }

    #[test]
    fn test_memory_key_must_be_prompt_variable() {
        let prompt = PromptTemplate::new(["topic"], "Title about {topic}").expect("template");
        let err = LlmChain::new(
            Arc::new(RecordingDriver::default()),
            prompt,
            ConversationLog::new("title"),
        )
        .expect_err("title is not a prompt variable");
        assert!(matches!(err.kind, TemplateErrorKind::Mismatch { .. }));
    }

    #[tokio::test]
    async fn test_fork_starts_with_empty_log() {
        let driver = Arc::new(RecordingDriver::default());
        let mut chain = title_chain(driver);
        chain.run(&[("topic", "cats")]).await.expect("run");

        let forked = chain.fork();
        assert_eq!(chain.memory().len(), 1);
        assert!(forked.memory().is_empty());
        assert_eq!(forked.prompt(), chain.prompt());
    }
}
