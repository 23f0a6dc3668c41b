//! URL handling module for myds
//!
//! This module provides the local / not-local classification, image URL
//! filtering, base URL resolution for the next-level expansion, and
//! validation of URLs given on the command line.

mod classify;
mod image;
mod resolve;

use crate::{UrlError, UrlResult};
use url::Url;

// Re-export main functions
pub use classify::{is_local, is_not_local, needs_base};
pub use image::{filter_by_image_extension, has_image_extension, IMAGE_EXTENSIONS};
pub use resolve::{resolve_relative, resolve_with, truncate_base};

/// Parses a URL given as a crawl starting point
///
/// Only absolute HTTP and HTTPS URLs with a host are accepted.
///
/// # Examples
///
/// ```
/// use myds::url::parse_start_url;
///
/// assert!(parse_start_url("https://example.com/page").is_ok());
/// assert!(parse_start_url("example.com").is_err());
/// assert!(parse_start_url("ftp://example.com/").is_err());
/// ```
pub fn parse_start_url(url_str: &str) -> UrlResult<Url> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(format!("{}: {}", url_str, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(UrlError::Parse(format!("{}: missing host", url_str)));
    }

    Ok(url)
}
