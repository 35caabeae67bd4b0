//! Core data types for Vidscribe.
//!
//! This crate provides the data model shared by the pipeline, the providers
//! and the renderers: topics, prompt templates, conversation logs and the
//! completion request/response pair.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod log;
mod request;
mod template;
mod topic;

pub use log::{ConversationLog, Turn};
pub use request::{FinishReason, GenerateRequest, GenerateResponse, Usage};
pub use template::PromptTemplate;
pub use topic::Topic;
