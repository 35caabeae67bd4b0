//! One-shot rendering of a finished run.

use serde::{Deserialize, Serialize};
use vidscribe_chain::{PipelineOutput, VideoPipeline};
use vidscribe_core::Turn;

/// Everything a one-shot run prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Submitted topic
    pub topic: String,
    /// Generated title
    pub title: String,
    /// Generated script
    pub script: String,
    /// Research text passed to the script prompt
    pub research: String,
    /// Title chain turns
    pub title_history: Vec<Turn>,
    /// Script chain turns
    pub script_history: Vec<Turn>,
    /// Title chain transcript as the log renders it
    pub title_transcript: String,
    /// Script chain transcript as the log renders it
    pub script_transcript: String,
}

impl Report {
    /// Collect the output and both transcripts of a pipeline.
    pub fn new(output: &PipelineOutput, pipeline: &VideoPipeline) -> Self {
        Self {
            topic: output.topic().to_string(),
            title: output.title().clone(),
            script: output.script().clone(),
            research: output.research().clone(),
            title_history: pipeline.title_log().turns().to_vec(),
            script_history: pipeline.script_log().turns().to_vec(),
            title_transcript: pipeline.title_log().buffer(),
            script_transcript: pipeline.script_log().buffer(),
        }
    }

    /// Plain-text sections in display order.
    pub fn to_text(&self) -> String {
        [
            section("Generated Title", &self.title),
            section("Video Script", &self.script),
            section("Title History", &self.title_transcript),
            section("Script History", &self.script_transcript),
            section("Wikipedia Research", &self.research),
        ]
        .join("\n\n")
    }
}

fn section(heading: &str, body: &str) -> String {
    format!("== {} ==\n{}", heading, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vidscribe_core::ConversationLog;

    #[test]
    fn test_text_uses_log_rendering() {
        let mut log = ConversationLog::new("topic").with_prefixes("User", "Bot");
        log.append(Turn::new("cats", "Cats Explained"));

        let report = Report {
            topic: "cats".to_string(),
            title: "Cats Explained".to_string(),
            script: "Meow.".to_string(),
            research: "Page: Cat".to_string(),
            title_history: log.turns().to_vec(),
            script_history: vec![],
            title_transcript: log.buffer(),
            script_transcript: String::new(),
        };

        let text = report.to_text();
        assert!(text.contains("== Title History ==\nUser: cats\nBot: Cats Explained"));
        assert!(!text.contains("Human:"));
    }
}
