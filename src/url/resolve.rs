use crate::config::Resolution;
use url::Url;

/// Truncates a base URL the way the link expansion has always done it
///
/// With `k = count('/') - 2`, the base is split from the right at most `k`
/// times and the first piece is kept. For a URL with a path this is the text
/// before the third `/` (scheme and authority). A base with exactly two
/// slashes is kept whole. With fewer than two slashes the split is unbounded,
/// so the text before the first `/` is kept.
///
/// # Examples
///
/// ```
/// use myds::url::truncate_base;
///
/// assert_eq!(truncate_base("http://example.com/page"), "http://example.com");
/// assert_eq!(truncate_base("http://example.com/a/b/c"), "http://example.com");
/// assert_eq!(truncate_base("http://example.com"), "http://example.com");
/// ```
pub fn truncate_base(base_url: &str) -> &str {
    let slashes = base_url.matches('/').count();

    match slashes {
        0 => base_url,
        1 => base_url.split('/').next().unwrap_or(base_url),
        2 => base_url,
        n => {
            let max_splits = n - 2;
            base_url
                .rsplitn(max_splits + 1, '/')
                .last()
                .unwrap_or(base_url)
        }
    }
}

/// Resolves a `/`- or `.`-prefixed URL by appending it to the truncated base
pub fn resolve_relative(url: &str, base_url: &str) -> String {
    format!("{}{}", truncate_base(base_url), url)
}

/// Resolves a URL against a base using the configured strategy
///
/// [`Resolution::Join`] applies standard relative reference resolution and
/// falls back to truncation when either side does not parse.
pub fn resolve_with(resolution: Resolution, url: &str, base_url: &str) -> String {
    match resolution {
        Resolution::Truncate => resolve_relative(url, base_url),
        Resolution::Join => match Url::parse(base_url).and_then(|base| base.join(url)) {
            Ok(joined) => joined.to_string(),
            Err(e) => {
                tracing::debug!("Cannot join {} onto {}: {}", url, base_url, e);
                resolve_relative(url, base_url)
            }
        },
    }
}
