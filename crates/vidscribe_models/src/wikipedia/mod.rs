//! Wikipedia (MediaWiki action API) summary lookup.

mod client;
mod dto;

pub use client::{NoMatchPolicy, WikipediaClient};
