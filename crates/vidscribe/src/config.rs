//! Layered TOML configuration.
//!
//! Sources, later ones overriding earlier ones:
//! - Bundled defaults (include_str! from vidscribe.toml)
//! - `~/.config/vidscribe/vidscribe.toml`
//! - `./vidscribe.toml`
//! - An explicit `--config` file, which must exist

use config::{Config, ConfigBuilder, File, FileFormat, builder::DefaultState};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};
use vidscribe_chain::{ChainSettings, script_template, title_template};
use vidscribe_core::PromptTemplate;
use vidscribe_error::{ConfigError, VidscribeError, VidscribeResult};
use vidscribe_models::NoMatchPolicy;

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../vidscribe.toml");

/// Completion service settings.
///
/// # Example
///
/// ```toml
/// [completion]
/// model = "gpt-3.5-turbo-instruct"
/// temperature = 0.9
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CompletionConfig {
    /// Model identifier sent with every request
    pub model: String,
    /// API root, without the `/completions` suffix
    pub base_url: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Cap on generated tokens
    #[serde(default)]
    pub max_tokens: Option<u32>,
    /// Log rendered prompts and outputs at info level
    #[serde(default)]
    pub verbose: bool,
    /// Per-request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl CompletionConfig {
    /// Chain settings derived from this section.
    pub fn chain_settings(&self) -> ChainSettings {
        ChainSettings {
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            model: None,
            verbose: self.verbose,
        }
    }
}

/// Encyclopedia lookup settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResearchConfig {
    /// Wikipedia language edition
    pub language: String,
    /// Wiki root overriding the language edition
    #[serde(default)]
    pub base_url: Option<String>,
    /// How many search hits to summarise
    pub top_k_results: usize,
    /// Maximum characters of research text
    pub max_chars: usize,
    /// What to do when the search finds nothing
    #[serde(default)]
    pub no_match: NoMatchPolicy,
}

/// Prompt template overrides.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct PromptsConfig {
    /// Title prompt; must use exactly `{topic}`
    #[serde(default)]
    pub title: Option<String>,
    /// Script prompt; must use exactly `{title}` and `{wikipedia_research}`
    #[serde(default)]
    pub script: Option<String>,
}

impl PromptsConfig {
    /// Parse and validate the title prompt.
    ///
    /// # Errors
    ///
    /// Returns a template error if the prompt is malformed or uses the wrong
    /// variables.
    pub fn title_template(&self) -> VidscribeResult<PromptTemplate> {
        Ok(title_template(self.title.as_deref())?)
    }

    /// Parse and validate the script prompt.
    ///
    /// # Errors
    ///
    /// Returns a template error if the prompt is malformed or uses the wrong
    /// variables.
    pub fn script_template(&self) -> VidscribeResult<PromptTemplate> {
        Ok(script_template(self.script.as_deref())?)
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of plain text
    #[serde(default)]
    pub json: bool,
}

/// Top-level Vidscribe configuration.
///
/// # Example
///
/// ```no_run
/// use vidscribe::VidscribeConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = VidscribeConfig::load(None)?;
/// println!("Model: {}", config.completion.model);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VidscribeConfig {
    /// Completion service settings
    pub completion: CompletionConfig,
    /// Lookup service settings
    pub research: ResearchConfig,
    /// Prompt overrides
    #[serde(default)]
    pub prompts: PromptsConfig,
    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl VidscribeConfig {
    /// Load configuration with precedence: explicit file > current dir > home dir > bundled.
    ///
    /// The home and current-directory files are optional; an explicit file
    /// must exist. Prompt overrides are validated before returning.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a file cannot be read or parsed, or a
    /// template error if a prompt override is invalid.
    #[instrument(skip(explicit))]
    pub fn load(explicit: Option<&Path>) -> VidscribeResult<Self> {
        debug!("Loading configuration with precedence: explicit > current dir > home dir > bundled defaults");

        let mut builder = Self::bundled();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/vidscribe/vidscribe.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("vidscribe").required(false));

        if let Some(path) = explicit {
            debug!(path = %path.display(), "Adding explicit configuration file");
            builder = builder.add_source(File::from(path).required(true));
        }

        Self::finish(builder)
    }

    /// Load the bundled defaults overlaid with one TOML document.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn from_toml_str(overrides: &str) -> VidscribeResult<Self> {
        Self::finish(Self::bundled().add_source(File::from_str(overrides, FileFormat::Toml)))
    }

    /// The bundled defaults alone.
    ///
    /// # Errors
    ///
    /// Returns an error only if the bundled file is broken.
    pub fn defaults() -> VidscribeResult<Self> {
        Self::finish(Self::bundled())
    }

    /// Parse both prompt templates, failing on the first invalid one.
    ///
    /// # Errors
    ///
    /// Returns a template error for an invalid prompt override.
    pub fn validate(&self) -> VidscribeResult<()> {
        self.prompts.title_template()?;
        self.prompts.script_template()?;
        Ok(())
    }

    fn bundled() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> VidscribeResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| {
                VidscribeError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                VidscribeError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })?;

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_defaults() {
        let config = VidscribeConfig::defaults().expect("bundled config parses");

        assert_eq!(config.completion.model, "gpt-3.5-turbo-instruct");
        assert_eq!(config.completion.temperature, 0.9);
        assert_eq!(config.completion.max_tokens, Some(256));
        assert!(config.completion.verbose);
        assert_eq!(config.completion.timeout_secs, None);
        assert_eq!(config.research.language, "en");
        assert_eq!(config.research.top_k_results, 3);
        assert_eq!(config.research.max_chars, 4000);
        assert_eq!(config.research.no_match, NoMatchPolicy::Explain);
        assert!(!config.logging.json);
    }

    #[test]
    fn test_chain_settings_follow_completion_section() {
        let config = VidscribeConfig::from_toml_str(
            "[completion]\ntemperature = 0.2\nverbose = false\nmax_tokens = 64\n",
        )
        .expect("config");

        let settings = config.completion.chain_settings();
        assert_eq!(settings.temperature, 0.2);
        assert_eq!(settings.max_tokens, Some(64));
        assert!(!settings.verbose);
        assert_eq!(settings.model, None);
    }
}
