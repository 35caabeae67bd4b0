//! Trait definitions for remote services and chain hooks.

use async_trait::async_trait;
use std::sync::Arc;
use vidscribe_core::{ConversationLog, GenerateRequest, GenerateResponse, Turn};
use vidscribe_error::VidscribeResult;

/// Core trait that every text-completion backend implements.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Generate text for a fully rendered prompt.
    async fn generate(&self, req: &GenerateRequest) -> VidscribeResult<GenerateResponse>;

    /// Provider name (e.g., "openai").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-3.5-turbo-instruct").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T: CompletionDriver + ?Sized> CompletionDriver for Arc<T> {
    async fn generate(&self, req: &GenerateRequest) -> VidscribeResult<GenerateResponse> {
        (**self).generate(req).await
    }

    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Trait for services that summarise a topic from a knowledge base.
///
/// Implementations are stateless across calls.
#[async_trait]
pub trait SummaryLookup: Send + Sync {
    /// Return descriptive text for the best matches of `query`.
    async fn lookup(&self, query: &str) -> VidscribeResult<String>;

    /// Service name (e.g., "wikipedia").
    fn service_name(&self) -> &'static str;
}

#[async_trait]
impl<T: SummaryLookup + ?Sized> SummaryLookup for Arc<T> {
    async fn lookup(&self, query: &str) -> VidscribeResult<String> {
        (**self).lookup(query).await
    }

    fn service_name(&self) -> &'static str {
        (**self).service_name()
    }
}

/// Callback a chain runs after each successful completion.
///
/// `input` is the value of the chain's input variable and `output` the
/// generated text. Hooks never run for failed calls.
pub trait PostCallHook: Send {
    /// Observe one completed call.
    fn after_call(&mut self, input: &str, output: &str);
}

impl PostCallHook for ConversationLog {
    fn after_call(&mut self, input: &str, output: &str) {
        self.append(Turn::new(input, output));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversation_log_hook_appends() {
        let mut log = ConversationLog::new("topic");
        log.after_call("cats", "Cat Title");
        log.after_call("dogs", "Dog Title");

        assert_eq!(log.len(), 2);
        assert_eq!(log.turns()[0], Turn::new("cats", "Cat Title"));
        assert_eq!(log.turns()[1], Turn::new("dogs", "Dog Title"));
    }
}
