//! MediaWiki action API response shapes (`formatversion=2`).

use serde::Deserialize;

/// Top-level `error` object MediaWiki returns, with HTTP 200, for failed actions.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    pub(crate) code: String,
    #[serde(default)]
    pub(crate) info: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub(crate) error: Option<ApiErrorBody>,
    #[serde(default)]
    pub(crate) query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchQuery {
    #[serde(default)]
    pub(crate) search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchHit {
    pub(crate) title: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExtractResponse {
    #[serde(default)]
    pub(crate) error: Option<ApiErrorBody>,
    #[serde(default)]
    pub(crate) query: Option<ExtractQuery>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExtractQuery {
    #[serde(default)]
    pub(crate) pages: Vec<ExtractPage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExtractPage {
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) missing: bool,
    #[serde(default)]
    pub(crate) extract: Option<String>,
}
