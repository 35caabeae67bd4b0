//! Top-level error wrapper types.

use crate::{ConfigError, ServiceError, TemplateError};
#[cfg(feature = "tui")]
use crate::TuiError;

/// Every error condition Vidscribe can surface.
///
/// # Examples
///
/// ```
/// use vidscribe_error::{VidscribeError, ConfigError};
///
/// let err: VidscribeError = ConfigError::new("bad file").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VidscribeErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Prompt template error
    #[from(TemplateError)]
    Template(TemplateError),
    /// Remote completion or lookup service error
    #[from(ServiceError)]
    Service(ServiceError),
    /// TUI error
    #[cfg(feature = "tui")]
    #[from(TuiError)]
    Tui(TuiError),
}

/// Vidscribe error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vidscribe_error::{VidscribeErrorKind, VidscribeResult, ServiceError, ServiceErrorKind};
///
/// fn might_fail() -> VidscribeResult<()> {
///     Err(ServiceError::new(ServiceErrorKind::EmptyResponse))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), VidscribeErrorKind::Service(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vidscribe Error: {}", _0)]
pub struct VidscribeError(Box<VidscribeErrorKind>);

impl VidscribeError {
    /// Create a new error from a kind.
    pub fn new(kind: VidscribeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VidscribeErrorKind {
        &self.0
    }

    /// Whether this error came from a remote service call.
    pub fn is_service(&self) -> bool {
        matches!(self.kind(), VidscribeErrorKind::Service(_))
    }
}

// Generic From implementation for any type that converts to VidscribeErrorKind
impl<T> From<T> for VidscribeError
where
    T: Into<VidscribeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vidscribe operations.
pub type VidscribeResult<T> = std::result::Result<T, VidscribeError>;
