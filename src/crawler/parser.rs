//! HTML parser for extracting link sources
//!
//! Parsing keeps only what the link extractors read:
//! - The `href` of every `<a>` element, present or not
//! - The `src` and `data-src` of every `<img>` element, present or not
//!
//! Attribute values are kept verbatim. Nothing is resolved, trimmed or
//! filtered here.

use scraper::{Html, Selector};

/// An `<img>` element's URL attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageTag {
    /// The `src` attribute
    pub src: Option<String>,

    /// The `data-src` attribute used by lazy-loading scripts
    pub data_src: Option<String>,
}

/// A parsed HTML document reduced to its anchor and image tags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// `href` of each `<a>` element, in document order
    pub anchors: Vec<Option<String>>,

    /// Each `<img>` element, in document order
    pub images: Vec<ImageTag>,
}

impl Document {
    /// Builds a document from anchor `href` values, with no images
    pub fn from_anchors<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            anchors: hrefs.into_iter().map(|href| href.map(Into::into)).collect(),
            images: Vec::new(),
        }
    }

    /// Parses HTML content
    ///
    /// HTML parsing is lenient and never fails; malformed markup yields
    /// whatever elements the parser recovers.
    ///
    /// # Example
    ///
    /// ```
    /// use myds::crawler::Document;
    ///
    /// let html = r#"<a href="/page">Link</a><a>No href</a><img data-src="/lazy.png">"#;
    /// let doc = Document::parse(html);
    /// assert_eq!(doc.anchors, vec![Some("/page".to_string()), None]);
    /// assert_eq!(doc.images[0].data_src.as_deref(), Some("/lazy.png"));
    /// ```
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);

        Self {
            anchors: extract_anchors(&document),
            images: extract_images(&document),
        }
    }
}

fn extract_anchors(document: &Html) -> Vec<Option<String>> {
    let mut anchors = Vec::new();

    if let Ok(a_selector) = Selector::parse("a") {
        for element in document.select(&a_selector) {
            anchors.push(element.value().attr("href").map(str::to_string));
        }
    }

    anchors
}

fn extract_images(document: &Html) -> Vec<ImageTag> {
    let mut images = Vec::new();

    if let Ok(img_selector) = Selector::parse("img") {
        for element in document.select(&img_selector) {
            let value = element.value();
            images.push(ImageTag {
                src: value.attr("src").map(str::to_string),
                data_src: value.attr("data-src").map(str::to_string),
            });
        }
    }

    images
}
