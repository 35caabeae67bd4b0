//! Vidscribe - YouTube titles and scripts from a single topic.
//!
//! Vidscribe asks a completion service for a video title, looks the topic up
//! on Wikipedia, and asks the completion service again for a script grounded
//! in that research. Each prompt chain keeps an in-memory transcript of its
//! exchanges.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vidscribe::{VidscribeConfig, build_pipeline};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = VidscribeConfig::load(None)?;
//!     let mut pipeline = build_pipeline(&config)?;
//!
//!     if let Some(output) = pipeline.submit("black holes").await? {
//!         println!("{}\n\n{}", output.title(), output.script());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Vidscribe is organized as a workspace with focused crates:
//!
//! - `vidscribe_error` - Error types
//! - `vidscribe_core` - Topics, prompt templates, conversation logs, request types
//! - `vidscribe_interface` - Completion, lookup and post-call hook traits
//! - `vidscribe_models` - OpenAI and Wikipedia clients
//! - `vidscribe_chain` - Prompt chains and the video pipeline
//! - `vidscribe_tui` - Terminal form and output renderer
//!
//! This crate (`vidscribe`) re-exports everything for convenience and adds
//! configuration, logging setup and the `vidscribe` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod observability;
mod report;
mod services;

pub use config::{CompletionConfig, LoggingConfig, PromptsConfig, ResearchConfig, VidscribeConfig};
pub use observability::{
    LogTarget, ObservabilityConfig, init_observability, with_scoped_observability,
};
pub use report::Report;
pub use services::{build_pipeline, completion_client, research_client};

pub use vidscribe_chain::*;
pub use vidscribe_core::*;
pub use vidscribe_error::*;
pub use vidscribe_interface::*;
pub use vidscribe_models::*;
pub use vidscribe_tui::*;
