//! Prompt templates with `{name}` placeholders.

use std::collections::{BTreeSet, HashMap};
use vidscribe_error::{TemplateError, TemplateErrorKind};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Variable(String),
}

/// An immutable prompt template.
///
/// Placeholders are written `{name}`; `{{` and `}}` produce literal braces.
/// The set of placeholders must equal the declared input variables, which is
/// checked once at construction.
///
/// # Examples
///
/// ```
/// use vidscribe_core::PromptTemplate;
///
/// let template = PromptTemplate::new(
///     ["topic"],
///     "Write me a YouTube video title about {topic}",
/// )?;
///
/// let prompt = template.render([("topic", "black holes")])?;
/// assert_eq!(prompt, "Write me a YouTube video title about black holes");
/// # Ok::<(), vidscribe_error::TemplateError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    input_variables: Vec<String>,
    template: String,
    segments: Vec<Segment>,
}

impl PromptTemplate {
    /// Parse and validate a template.
    ///
    /// # Errors
    ///
    /// - `UnbalancedBrace` for a lone `{` or `}`
    /// - `InvalidPlaceholder` for a placeholder that is not an identifier
    /// - `Mismatch` when placeholders and declared variables differ; `missing`
    ///   lists placeholders with no declaration, `unexpected` lists declared
    ///   variables the template never uses
    pub fn new<I, S>(input_variables: I, template: impl Into<String>) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let input_variables: Vec<String> = input_variables.into_iter().map(Into::into).collect();
        let template = template.into();
        let segments = parse(&template)?;

        let declared: BTreeSet<&str> = input_variables.iter().map(String::as_str).collect();
        let used: BTreeSet<&str> = segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Variable(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect();

        if declared != used {
            return Err(TemplateError::new(TemplateErrorKind::Mismatch {
                missing: used.difference(&declared).map(|s| s.to_string()).collect(),
                unexpected: declared.difference(&used).map(|s| s.to_string()).collect(),
            }));
        }

        Ok(Self {
            input_variables,
            template,
            segments,
        })
    }

    /// Declared input variable names, in declaration order.
    pub fn input_variables(&self) -> &[String] {
        &self.input_variables
    }

    /// The raw template string.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Substitute every placeholder with its value.
    ///
    /// Values are inserted verbatim; braces inside a value are never
    /// interpreted as placeholders.
    ///
    /// # Errors
    ///
    /// Returns `Mismatch` if a declared variable has no value (`missing`) or a
    /// value is supplied for an undeclared name (`unexpected`).
    pub fn render<'a, I>(&self, values: I) -> Result<String, TemplateError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let values: HashMap<&str, &str> = values.into_iter().collect();

        let missing: Vec<String> = self
            .input_variables
            .iter()
            .filter(|name| !values.contains_key(name.as_str()))
            .cloned()
            .collect();
        let mut unexpected: Vec<String> = values
            .keys()
            .filter(|key| !self.input_variables.iter().any(|name| name == *key))
            .map(|key| key.to_string())
            .collect();
        unexpected.sort();

        if !missing.is_empty() || !unexpected.is_empty() {
            return Err(TemplateError::new(TemplateErrorKind::Mismatch {
                missing,
                unexpected,
            }));
        }

        let mut rendered = String::with_capacity(self.template.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Variable(name) => {
                    // Presence checked above
                    if let Some(value) = values.get(name.as_str()) {
                        rendered.push_str(value);
                    }
                }
            }
        }
        Ok(rendered)
    }
}

fn parse(template: &str) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = template.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        match c {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    literal.push('{');
                    continue;
                }

                let mut name = String::new();
                let mut closed = false;
                for (_, c) in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    name.push(c);
                }
                if !closed {
                    return Err(TemplateError::new(TemplateErrorKind::UnbalancedBrace(index)));
                }
                if !is_identifier(&name) {
                    return Err(TemplateError::new(TemplateErrorKind::InvalidPlaceholder(name)));
                }

                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Variable(name));
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    literal.push('}');
                    continue;
                }
                return Err(TemplateError::new(TemplateErrorKind::UnbalancedBrace(index)));
            }
            _ => literal.push(c),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
