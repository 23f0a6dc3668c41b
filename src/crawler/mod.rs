//! Crawler module for page fetching and link extraction
//!
//! This module contains the crawling logic, including:
//! - HTTP fetching that reports failures as values
//! - HTML parsing down to anchor and image tags
//! - Link extraction and local / not-local classification
//! - The one-hop expansion over a page's links

mod extract;
mod fetcher;
mod parser;
mod traversal;

pub use extract::{extract_all_links, extract_local_links, extract_not_local_links, LinkSources};
pub use fetcher::{build_http_client, fetch_document, fetch_url, FetchResult};
pub use parser::{Document, ImageTag};
pub use traversal::{expand_one_level, expand_one_level_with, ExpandOptions, LevelEntry};
