//! Title → research → script orchestration.

use crate::{ChainSettings, LlmChain, script_template, title_template};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument};
use vidscribe_core::{ConversationLog, PromptTemplate, Topic};
use vidscribe_error::VidscribeResult;
use vidscribe_interface::{CompletionDriver, SummaryLookup};

/// Everything one successful submission produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct PipelineOutput {
    /// Submitted topic
    topic: Topic,
    /// Generated video title
    title: String,
    /// Encyclopedia research used for the script
    research: String,
    /// Generated video script
    script: String,
}

/// Runs the title chain, the lookup and the script chain in order.
///
/// The pipeline owns both chains and therefore both conversation logs; a
/// session that needs its own history gets its own pipeline via
/// [`fresh_session`](Self::fresh_session).
pub struct VideoPipeline {
    title_chain: LlmChain,
    script_chain: LlmChain,
    research: Arc<dyn SummaryLookup>,
}

impl VideoPipeline {
    /// Create a pipeline with the built-in prompts and default settings.
    ///
    /// # Errors
    ///
    /// Returns a template error if the built-in prompts fail to parse.
    pub fn new(
        driver: Arc<dyn CompletionDriver>,
        research: Arc<dyn SummaryLookup>,
    ) -> VidscribeResult<Self> {
        Self::with_prompts(
            driver,
            research,
            title_template(None)?,
            script_template(None)?,
            ChainSettings::default(),
        )
    }

    /// Create a pipeline with custom prompts and settings.
    ///
    /// The title prompt must declare `topic`; the script prompt must declare
    /// `title` and `wikipedia_research`.
    ///
    /// # Errors
    ///
    /// Returns a template error if a prompt lacks its chain's input variable.
    pub fn with_prompts(
        driver: Arc<dyn CompletionDriver>,
        research: Arc<dyn SummaryLookup>,
        title_prompt: PromptTemplate,
        script_prompt: PromptTemplate,
        settings: ChainSettings,
    ) -> VidscribeResult<Self> {
        let title_chain = LlmChain::new(
            Arc::clone(&driver),
            title_prompt,
            ConversationLog::new("topic"),
        )?
        .with_settings(settings.clone());
        let script_chain = LlmChain::new(driver, script_prompt, ConversationLog::new("title"))?
            .with_settings(settings);

        Ok(Self {
            title_chain,
            script_chain,
            research,
        })
    }

    /// Transcript of the title chain.
    pub fn title_log(&self) -> &ConversationLog {
        self.title_chain.memory()
    }

    /// Transcript of the script chain.
    pub fn script_log(&self) -> &ConversationLog {
        self.script_chain.memory()
    }

    /// A pipeline sharing services, prompts and settings but with empty logs.
    pub fn fresh_session(&self) -> Self {
        Self {
            title_chain: self.title_chain.fork(),
            script_chain: self.script_chain.fork(),
            research: Arc::clone(&self.research),
        }
    }

    /// Run the pipeline for raw user input.
    ///
    /// Returns `Ok(None)` without touching any service when the input is
    /// empty or whitespace.
    ///
    /// # Errors
    ///
    /// See [`run`](Self::run).
    pub async fn submit(&mut self, raw: &str) -> VidscribeResult<Option<PipelineOutput>> {
        match Topic::new(raw) {
            Some(topic) => self.run(&topic).await.map(Some),
            None => {
                debug!("Empty topic, nothing to generate");
                Ok(None)
            }
        }
    }

    /// Generate a title, fetch research, then generate a script.
    ///
    /// The first failing step ends the run; later steps are not attempted.
    ///
    /// # Errors
    ///
    /// Returns the error of the first failing step.
    #[instrument(skip(self, topic), fields(topic = %topic))]
    pub async fn run(&mut self, topic: &Topic) -> VidscribeResult<PipelineOutput> {
        info!("Generating title");
        let title = self.title_chain.run(&[("topic", topic.as_str())]).await?;

        info!(service = self.research.service_name(), "Looking up research");
        let research = self.research.lookup(topic.as_str()).await?;

        info!("Generating script");
        let script = self
            .script_chain
            .run(&[
                ("title", title.as_str()),
                ("wikipedia_research", research.as_str()),
            ])
            .await?;

        Ok(PipelineOutput {
            topic: topic.clone(),
            title,
            research,
            script,
        })
    }
}

impl std::fmt::Debug for VideoPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoPipeline")
            .field("title_chain", &self.title_chain)
            .field("script_chain", &self.script_chain)
            .field("research", &self.research.service_name())
            .finish()
    }
}
