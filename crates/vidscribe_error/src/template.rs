//! Prompt template error types.

/// Specific error conditions for prompt templates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TemplateErrorKind {
    /// Supplied variables do not match the declared variables
    #[display(
        "Template variables mismatch (missing: [{}], unexpected: [{}])",
        missing.join(", "),
        unexpected.join(", ")
    )]
    Mismatch {
        /// Declared variables that were not supplied (or not used by the template)
        missing: Vec<String>,
        /// Supplied variables that the template does not declare
        unexpected: Vec<String>,
    },
    /// A `{` or `}` without its partner
    #[display("Unbalanced brace at byte {}", _0)]
    UnbalancedBrace(usize),
    /// Placeholder name is not a valid identifier
    #[display("Invalid placeholder name '{}'", _0)]
    InvalidPlaceholder(String),
}

/// Error type for prompt template operations.
///
/// # Examples
///
/// ```
/// use vidscribe_error::{TemplateError, TemplateErrorKind};
///
/// let err = TemplateError::new(TemplateErrorKind::Mismatch {
///     missing: vec!["topic".to_string()],
///     unexpected: vec![],
/// });
/// assert!(format!("{}", err).contains("missing: [topic]"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Template Error: {} at line {} in {}", kind, line, file)]
pub struct TemplateError {
    /// The specific error condition
    pub kind: TemplateErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl TemplateError {
    /// Create a new TemplateError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TemplateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
