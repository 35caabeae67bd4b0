//! Wikipedia summary client.

use crate::wikipedia::dto::{ApiErrorBody, ExtractResponse, SearchResponse};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{debug, error, instrument};
use vidscribe_error::{ConfigError, ServiceError, ServiceErrorKind, VidscribeResult};
use vidscribe_interface::SummaryLookup;

/// Search queries longer than this are cut before being sent.
const MAX_QUERY_CHARS: usize = 300;

/// What to return when a query matches no article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoMatchPolicy {
    /// Return [`WikipediaClient::NO_RESULT`] as the research text
    #[default]
    Explain,
    /// Fail with `ServiceErrorKind::NoMatch`
    Error,
}

/// Client that summarises the top Wikipedia articles for a query.
///
/// Each matching article contributes a `Page: <title>\nSummary: <intro>`
/// block; blocks are separated by a blank line and the whole text is cut to
/// `max_chars` characters.
#[derive(Debug, Clone)]
pub struct WikipediaClient {
    client: Client,
    base_url: String,
    top_k: usize,
    max_chars: usize,
    no_match: NoMatchPolicy,
}

impl WikipediaClient {
    /// Research text used by [`NoMatchPolicy::Explain`].
    pub const NO_RESULT: &'static str = "No good Wikipedia Search Result was found";

    /// Default number of articles summarised.
    pub const DEFAULT_TOP_K: usize = 3;

    /// Default maximum research length in characters.
    pub const DEFAULT_MAX_CHARS: usize = 4000;

    /// Creates a client for English Wikipedia.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new() -> VidscribeResult<Self> {
        Self::for_language("en")
    }

    /// Creates a client for the Wikipedia edition of `language` (e.g. "de").
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument]
    pub fn for_language(language: &str) -> VidscribeResult<Self> {
        let client = Client::builder()
            .user_agent(concat!("vidscribe/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: format!("https://{}.wikipedia.org", language),
            top_k: Self::DEFAULT_TOP_K,
            max_chars: Self::DEFAULT_MAX_CHARS,
            no_match: NoMatchPolicy::default(),
        })
    }

    /// Point the client at a different wiki root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Number of articles to summarise.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Maximum research length in characters.
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Behaviour when nothing matches.
    pub fn with_no_match(mut self, no_match: NoMatchPolicy) -> Self {
        self.no_match = no_match;
        self
    }

    /// Titles of the best matching articles, best first.
    ///
    /// # Errors
    ///
    /// Returns a service error on network or decoding failure, or when the
    /// API reports an error in the response body.
    #[instrument(skip(self))]
    pub async fn search(&self, query: &str) -> VidscribeResult<Vec<String>> {
        let limit = self.top_k.to_string();
        let response: SearchResponse = self
            .get_json(&[
                ("action", "query"),
                ("list", "search"),
                ("srsearch", query),
                ("srlimit", limit.as_str()),
                ("srprop", ""),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .await?;
        reject_api_error(response.error)?;

        let titles: Vec<String> = response
            .query
            .map(|q| q.search.into_iter().map(|hit| hit.title).collect())
            .unwrap_or_default();
        debug!(hits = titles.len(), "Wikipedia search complete");
        Ok(titles)
    }

    /// Plain-text introduction of an article, with its resolved title.
    ///
    /// Returns `None` for missing pages and pages without an extract.
    ///
    /// # Errors
    ///
    /// Returns a service error on network or decoding failure, or when the
    /// API reports an error in the response body.
    #[instrument(skip(self))]
    pub async fn summary(&self, title: &str) -> VidscribeResult<Option<(String, String)>> {
        let response: ExtractResponse = self
            .get_json(&[
                ("action", "query"),
                ("prop", "extracts"),
                ("exintro", "1"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("titles", title),
                ("format", "json"),
                ("formatversion", "2"),
            ])
            .await?;
        reject_api_error(response.error)?;

        let page = response
            .query
            .and_then(|q| q.pages.into_iter().next())
            .filter(|page| !page.missing);

        Ok(page.and_then(|page| {
            let extract = page.extract.unwrap_or_default();
            let extract = extract.trim();
            if extract.is_empty() {
                None
            } else {
                Some((page.title, extract.to_string()))
            }
        }))
    }

    async fn get_json<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> VidscribeResult<T> {
        let url = format!("{}/w/api.php", self.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Wikipedia request failed");
                ServiceError::new(ServiceErrorKind::Http(e.to_string()))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, "Wikipedia API error");
            return Err(ServiceError::new(ServiceErrorKind::Api {
                status: status.as_u16(),
                message,
            })
            .into());
        }

        response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Wikipedia response");
            ServiceError::new(ServiceErrorKind::ResponseParsing(e.to_string())).into()
        })
    }
}

#[async_trait]
impl SummaryLookup for WikipediaClient {
    #[instrument(skip(self), fields(service = "wikipedia"))]
    async fn lookup(&self, query: &str) -> VidscribeResult<String> {
        let query: String = query.chars().take(MAX_QUERY_CHARS).collect();

        let mut summaries = Vec::new();
        for title in self.search(&query).await?.iter().take(self.top_k) {
            match self.summary(title).await? {
                Some((page_title, extract)) => {
                    summaries.push(format!("Page: {}\nSummary: {}", page_title, extract));
                }
                None => debug!(title = %title, "Skipping article without summary"),
            }
        }

        if summaries.is_empty() {
            debug!(policy = ?self.no_match, "No Wikipedia match");
            return match self.no_match {
                NoMatchPolicy::Explain => Ok(Self::NO_RESULT.to_string()),
                NoMatchPolicy::Error => Err(ServiceError::new(ServiceErrorKind::NoMatch(query)).into()),
            };
        }

        Ok(truncate_chars(&summaries.join("\n\n"), self.max_chars))
    }

    fn service_name(&self) -> &'static str {
        "wikipedia"
    }
}

/// MediaWiki answers failed actions with HTTP 200 and an `error` object.
fn reject_api_error(error: Option<ApiErrorBody>) -> VidscribeResult<()> {
    match error {
        Some(body) => {
            error!(code = %body.code, info = %body.info, "Wikipedia API reported an error");
            Err(ServiceError::new(ServiceErrorKind::Api {
                status: 200,
                message: format!("{}: {}", body.code, body.info),
            })
            .into())
        }
        None => Ok(()),
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => text[..index].to_string(),
        None => text.to_string(),
    }
}
