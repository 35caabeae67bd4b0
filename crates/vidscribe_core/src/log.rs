//! Append-only conversation logs.

use serde::{Deserialize, Serialize};

/// One input/output exchange recorded by a chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct Turn {
    /// Value of the chain's input variable
    input: String,
    /// Generated text
    output: String,
}

impl Turn {
    /// Create a new turn.
    pub fn new(input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// Ordered, append-only record of turns for one chain.
///
/// Turns are never removed or reordered; a log only starts empty when it is
/// created. The transcript is rendered as `Human: ...` / `AI: ...` lines.
///
/// # Examples
///
/// ```
/// use vidscribe_core::{ConversationLog, Turn};
///
/// let mut log = ConversationLog::new("topic");
/// log.append(Turn::new("cats", "Why Cats Rule"));
/// log.append(Turn::new("dogs", "Dogs: A History"));
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.memory_key(), "chat_history");
/// assert_eq!(
///     log.buffer(),
///     "Human: cats\nAI: Why Cats Rule\nHuman: dogs\nAI: Dogs: A History"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationLog {
    memory_key: String,
    input_key: String,
    human_prefix: String,
    ai_prefix: String,
    turns: Vec<Turn>,
}

impl ConversationLog {
    /// Label under which the transcript is exposed.
    pub const DEFAULT_MEMORY_KEY: &'static str = "chat_history";

    /// Create an empty log that records the value of `input_key`.
    pub fn new(input_key: impl Into<String>) -> Self {
        Self {
            memory_key: Self::DEFAULT_MEMORY_KEY.to_string(),
            input_key: input_key.into(),
            human_prefix: "Human".to_string(),
            ai_prefix: "AI".to_string(),
            turns: Vec::new(),
        }
    }

    /// Replace the transcript prefixes.
    pub fn with_prefixes(mut self, human: impl Into<String>, ai: impl Into<String>) -> Self {
        self.human_prefix = human.into();
        self.ai_prefix = ai.into();
        self
    }

    /// Record a turn at the end of the log.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// Memory key label.
    pub fn memory_key(&self) -> &str {
        &self.memory_key
    }

    /// Name of the chain variable recorded as the turn input.
    pub fn input_key(&self) -> &str {
        &self.input_key
    }

    /// All turns in call order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of recorded turns.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether no turn has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Full transcript text.
    pub fn buffer(&self) -> String {
        self.turns
            .iter()
            .map(|turn| {
                format!(
                    "{}: {}\n{}: {}",
                    self.human_prefix, turn.input, self.ai_prefix, turn.output
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
