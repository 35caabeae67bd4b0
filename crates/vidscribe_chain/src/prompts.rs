//! Built-in prompt templates.

use vidscribe_core::PromptTemplate;
use vidscribe_error::TemplateError;

/// Variables of the title prompt.
pub const TITLE_VARIABLES: [&str; 1] = ["topic"];

/// Default title prompt.
pub const TITLE_TEMPLATE: &str = "Write me a YouTube video title about {topic}";

/// Variables of the script prompt.
pub const SCRIPT_VARIABLES: [&str; 2] = ["title", "wikipedia_research"];

/// Default script prompt.
pub const SCRIPT_TEMPLATE: &str = "Write me a YouTube video script based on this title: \"{title}\" while leveraging this Wikipedia research: {wikipedia_research}";

/// Title template, from `template` or the default.
///
/// # Errors
///
/// Returns a template error if `template` does not use exactly `{topic}`.
pub fn title_template(template: Option<&str>) -> Result<PromptTemplate, TemplateError> {
    PromptTemplate::new(TITLE_VARIABLES, template.unwrap_or(TITLE_TEMPLATE))
}

/// Script template, from `template` or the default.
///
/// # Errors
///
/// Returns a template error if `template` does not use exactly `{title}` and
/// `{wikipedia_research}`.
pub fn script_template(template: Option<&str>) -> Result<PromptTemplate, TemplateError> {
    PromptTemplate::new(SCRIPT_VARIABLES, template.unwrap_or(SCRIPT_TEMPLATE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidscribe_error::TemplateErrorKind;

    #[test]
    fn test_defaults_are_valid() {
        assert!(title_template(None).is_ok());
        assert!(script_template(None).is_ok());
    }

    #[test]
    fn test_override_must_match_variables() {
        let err = title_template(Some("A title about {subject}")).expect_err("wrong variable");
        assert!(matches!(err.kind, TemplateErrorKind::Mismatch { .. }));

        let ok = script_template(Some("{title}: {wikipedia_research}")).expect("valid override");
        assert_eq!(ok.template(), "{title}: {wikipedia_research}");
    }
}
