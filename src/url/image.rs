use std::collections::HashSet;

/// Image filename extensions recognised by [`filter_by_image_extension`]
pub const IMAGE_EXTENSIONS: &[&str] = &[
    ".apng", ".bmp", ".gif", ".ico", ".cur", ".jpg", ".jpeg", ".jfif", ".pjpeg", ".pjp", ".png",
    ".svg", ".tif", ".tiff", ".webp",
];

/// Returns true if the URL contains one of [`IMAGE_EXTENSIONS`]
///
/// The match is a case-sensitive substring test, so `/pic.JPG` is not an
/// image and `/a.png?size=2` is.
pub fn has_image_extension(url: &str) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| url.contains(ext))
}

/// Keeps the URLs that look like images, in input order, each at most once
///
/// # Examples
///
/// ```
/// use myds::url::filter_by_image_extension;
///
/// let urls = vec!["/pic.JPG".to_string(), "/pic.jpg".to_string(), "/doc.pdf".to_string()];
/// assert_eq!(filter_by_image_extension(&urls), vec!["/pic.jpg".to_string()]);
/// ```
pub fn filter_by_image_extension(urls: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();

    urls.iter()
        .filter(|url| has_image_extension(url))
        .filter(|url| seen.insert(url.as_str()))
        .cloned()
        .collect()
}
