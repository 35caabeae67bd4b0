//! Prompt chains and the video pipeline for Vidscribe.
//!
//! A [`LlmChain`] renders a prompt template, sends it to a completion driver
//! and records the exchange in its conversation log. [`VideoPipeline`] runs
//! the title chain, the encyclopedia lookup and the script chain in order.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vidscribe_chain::VideoPipeline;
//! use vidscribe_models::{OpenAiClient, WikipediaClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let driver = Arc::new(OpenAiClient::new("gpt-3.5-turbo-instruct"));
//! let research = Arc::new(WikipediaClient::new()?);
//! let mut pipeline = VideoPipeline::new(driver, research)?;
//!
//! if let Some(output) = pipeline.submit("black holes").await? {
//!     println!("{}\n\n{}", output.title(), output.script());
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod chain;
mod pipeline;
mod prompts;

pub use chain::{ChainSettings, LlmChain};
pub use pipeline::{PipelineOutput, VideoPipeline};
pub use prompts::{
    SCRIPT_TEMPLATE, SCRIPT_VARIABLES, TITLE_TEMPLATE, TITLE_VARIABLES, script_template,
    title_template,
};
