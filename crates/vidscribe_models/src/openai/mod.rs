//! OpenAI legacy completions API integration.

mod client;
mod dto;

pub use client::OpenAiClient;
pub use dto::{OpenAiChoice, OpenAiCompletionRequest, OpenAiCompletionRequestBuilder, OpenAiCompletionResponse};
