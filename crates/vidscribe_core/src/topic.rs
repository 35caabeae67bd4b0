//! User-supplied topic.

use serde::{Deserialize, Serialize};

/// A non-empty, trimmed topic entered by the user.
///
/// # Examples
///
/// ```
/// use vidscribe_core::Topic;
///
/// let topic = Topic::new("  black holes ").unwrap();
/// assert_eq!(topic.as_str(), "black holes");
///
/// assert!(Topic::new("").is_none());
/// assert!(Topic::new("   ").is_none());
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "String", into = "String")]
pub struct Topic(String);

impl Topic {
    /// Create a topic from raw input, or `None` if nothing remains after trimming.
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Borrow the topic text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Topic {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Topic {
    type Error = String;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(&raw).ok_or_else(|| "topic must not be empty".to_string())
    }
}

impl From<Topic> for String {
    fn from(topic: Topic) -> Self {
        topic.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_trims_and_rejects_blank() {
        let topic: Topic = serde_json::from_str("\"  owls \"").expect("valid topic");
        assert_eq!(topic.as_str(), "owls");

        assert!(serde_json::from_str::<Topic>("\"\"").is_err());
        assert!(serde_json::from_str::<Topic>("\"   \"").is_err());
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let topic = Topic::new("black holes").expect("topic");
        assert_eq!(serde_json::to_string(&topic).expect("serialize"), "\"black holes\"");
    }
}
