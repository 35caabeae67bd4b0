//! Trait definitions for Vidscribe.
//!
//! This crate provides the seams between the pipeline and the remote
//! services it calls: completion drivers, summary lookups and the post-call
//! hook that chains use to record their history.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{CompletionDriver, PostCallHook, SummaryLookup};
