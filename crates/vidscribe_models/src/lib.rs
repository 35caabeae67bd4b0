//! Remote service clients for Vidscribe.
//!
//! This crate provides the HTTP clients behind the pipeline's two seams, each
//! behind its own feature flag.
//!
//! # Available Services
//!
//! - **OpenAI** completions - Enable with `openai` feature
//! - **Wikipedia** summaries - Enable with `wikipedia` feature
//!
//! # Example
//!
//! ```no_run
//! # #[cfg(all(feature = "openai", feature = "wikipedia"))]
//! # {
//! use vidscribe_core::GenerateRequest;
//! use vidscribe_interface::{CompletionDriver, SummaryLookup};
//! use vidscribe_models::{OpenAiClient, WikipediaClient};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OpenAiClient::new("gpt-3.5-turbo-instruct");
//! let title = client
//!     .generate(&GenerateRequest::new("Write me a YouTube video title about cats"))
//!     .await?;
//!
//! let research = WikipediaClient::new()?.lookup("cats").await?;
//! println!("{}\n{}", title.text(), research);
//! # Ok(())
//! # }
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(feature = "openai")]
mod openai;

#[cfg(feature = "wikipedia")]
mod wikipedia;

#[cfg(feature = "openai")]
pub use openai::{
    OpenAiChoice, OpenAiClient, OpenAiCompletionRequest, OpenAiCompletionRequestBuilder,
    OpenAiCompletionResponse,
};

#[cfg(feature = "wikipedia")]
pub use wikipedia::{NoMatchPolicy, WikipediaClient};
