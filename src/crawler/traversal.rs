//! One-hop traversal
//!
//! Each URL found on a page is fetched once, in order, and the links found
//! on the target are recorded. URLs starting with `/` or `.` are resolved
//! against the page they came from first. Failed fetches leave no entry.

use crate::config::Resolution;
use crate::crawler::extract::LinkSources;
use crate::crawler::fetcher::fetch_document;
use crate::url::{needs_base, resolve_with};
use reqwest::Client;

/// Links discovered on one second-level page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelEntry {
    /// The URL that was fetched (resolved when it was relative)
    pub url: String,

    /// Every link found on that page
    pub links: Vec<String>,
}

/// Options for [`expand_one_level_with`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandOptions {
    /// How `/`- and `.`-prefixed URLs are made absolute
    pub resolution: Resolution,

    /// Which tags are read on each fetched page
    pub sources: LinkSources,
}

/// Fetches every URL once and records the links found on each target
///
/// Uses truncating resolution and reads both anchors and images.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `urls` - URLs discovered on the base page, in order
/// * `base_url` - The page the URLs were found on
///
/// # Returns
///
/// One entry per successful fetch, in input order
pub async fn expand_one_level(client: &Client, urls: &[String], base_url: &str) -> Vec<LevelEntry> {
    expand_one_level_with(client, urls, base_url, ExpandOptions::default()).await
}

/// [`expand_one_level`] with explicit resolution and link sources
pub async fn expand_one_level_with(
    client: &Client,
    urls: &[String],
    base_url: &str,
    options: ExpandOptions,
) -> Vec<LevelEntry> {
    let mut levels = Vec::new();

    tracing::info!("Expanding {} links found on {}", urls.len(), base_url);

    for url in urls {
        let target = if needs_base(url) {
            resolve_with(options.resolution, url, base_url)
        } else {
            url.clone()
        };

        let Some(doc) = fetch_document(client, &target).await else {
            continue;
        };

        let links = options.sources.all_links(&doc);
        tracing::debug!("{} links on {}", links.len(), target);

        levels.push(LevelEntry { url: target, links });
    }

    tracing::info!(
        "Next level of {}: {} of {} links fetched",
        base_url,
        levels.len(),
        urls.len()
    );

    levels
}
