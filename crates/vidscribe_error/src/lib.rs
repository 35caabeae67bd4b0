//! Error types for Vidscribe.
//!
//! This crate provides the error types shared by every Vidscribe crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use vidscribe_error::{ServiceError, ServiceErrorKind, VidscribeResult};
//!
//! fn fetch_title() -> VidscribeResult<String> {
//!     Err(ServiceError::new(ServiceErrorKind::MissingApiKey))?
//! }
//!
//! match fetch_title() {
//!     Ok(title) => println!("Got: {}", title),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod service;
mod template;
#[cfg(feature = "tui")]
mod tui;

pub use config::ConfigError;
pub use error::{VidscribeError, VidscribeErrorKind, VidscribeResult};
pub use service::{ServiceError, ServiceErrorKind};
pub use template::{TemplateError, TemplateErrorKind};
#[cfg(feature = "tui")]
pub use tui::{TuiError, TuiErrorKind, TuiResult};
