//! Remote service error types.
//!
//! Covers both the completion service and the encyclopedia lookup service.
//! These errors are scoped to a single submission and are never retried.

/// Specific error conditions for remote service calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ServiceErrorKind {
    /// No API key was configured for the completion service
    #[display("API key is not set (export OPENAI_API_KEY or add it to .env)")]
    MissingApiKey,
    /// The service rejected the credential
    #[display("Unauthorized ({}): {}", status, message)]
    Unauthorized {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
    /// Transport failure (connection, TLS, timeout)
    #[display("HTTP request failed: {}", _0)]
    Http(String),
    /// Non-success status from the service
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },
    /// Request body could not be assembled
    #[display("Failed to build request: {}", _0)]
    RequestConversion(String),
    /// Service replied successfully but without any generated text
    #[display("Service returned no completion choices")]
    EmptyResponse,
    /// Response body could not be decoded
    #[display("Failed to parse response: {}", _0)]
    ResponseParsing(String),
    /// The lookup service found nothing for the query
    #[display("No lookup result for '{}'", _0)]
    NoMatch(String),
}

/// Error type for remote service calls.
///
/// # Examples
///
/// ```
/// use vidscribe_error::{ServiceError, ServiceErrorKind};
///
/// let err = ServiceError::new(ServiceErrorKind::NoMatch("zzxq".to_string()));
/// assert!(format!("{}", err).contains("zzxq"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Service Error: {} at line {} in {}", kind, line, file)]
pub struct ServiceError {
    /// The specific error condition
    pub kind: ServiceErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ServiceError {
    /// Create a new ServiceError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServiceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
