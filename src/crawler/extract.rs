//! Link extraction from parsed documents
//!
//! All extractors walk the same sources in the same order: anchor `href`
//! values, then image `src` values, then image `data-src` values. Absent
//! attributes are skipped and nothing is deduplicated.

use crate::crawler::parser::Document;
use crate::url::{is_local, is_not_local};

/// Which tags the extractors read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkSources {
    /// Read `<img src>` and `<img data-src>` after the anchors
    pub include_images: bool,
}

impl Default for LinkSources {
    fn default() -> Self {
        Self {
            include_images: true,
        }
    }
}

impl LinkSources {
    /// Anchors only
    pub fn anchors_only() -> Self {
        Self {
            include_images: false,
        }
    }

    /// Iterates the candidate URLs of a document in extraction order
    fn candidates<'a>(&self, doc: &'a Document) -> impl Iterator<Item = &'a str> + 'a {
        let include_images = self.include_images;

        let anchors = doc.anchors.iter().filter_map(|href| href.as_deref());
        let srcs = doc
            .images
            .iter()
            .filter(move |_| include_images)
            .filter_map(|img| img.src.as_deref());
        let data_srcs = doc
            .images
            .iter()
            .filter(move |_| include_images)
            .filter_map(|img| img.data_src.as_deref());

        anchors.chain(srcs).chain(data_srcs)
    }

    fn collect_where(&self, doc: &Document, keep: impl Fn(&str) -> bool) -> Vec<String> {
        self.candidates(doc)
            .filter(|url| keep(*url))
            .map(str::to_string)
            .collect()
    }

    /// Every present URL, anchors first, then image `src`, then image `data-src`
    pub fn all_links(&self, doc: &Document) -> Vec<String> {
        self.collect_where(doc, |_| true)
    }

    /// Every present URL that starts with `/`
    pub fn local_links(&self, doc: &Document) -> Vec<String> {
        self.collect_where(doc, is_local)
    }

    /// Every present URL that does not start with `/`, or starts with `.`
    pub fn not_local_links(&self, doc: &Document) -> Vec<String> {
        self.collect_where(doc, is_not_local)
    }
}

/// Extracts every present anchor and image URL from a document
///
/// # Example
///
/// ```
/// use myds::crawler::{extract_all_links, Document};
///
/// let doc = Document::from_anchors([Some("/a"), None, Some("http://x.com")]);
/// assert_eq!(extract_all_links(&doc), vec!["/a", "http://x.com"]);
/// ```
pub fn extract_all_links(doc: &Document) -> Vec<String> {
    LinkSources::default().all_links(doc)
}

/// Extracts the local (`/`-prefixed) anchor and image URLs from a document
pub fn extract_local_links(doc: &Document) -> Vec<String> {
    LinkSources::default().local_links(doc)
}

/// Extracts the not-local anchor and image URLs from a document
pub fn extract_not_local_links(doc: &Document) -> Vec<String> {
    LinkSources::default().not_local_links(doc)
}
