//! Local / not-local URL predicates
//!
//! The two predicates are evaluated independently. A URL starting with `.`
//! is not local and is also reported by [`is_not_local`], while a URL such as
//! `"/x"` is only local. Neither is derived from the other.

/// Returns true if the URL is root-relative (starts with `/`)
pub fn is_local(url: &str) -> bool {
    url.starts_with('/')
}

/// Returns true if the URL does not start with `/`, or starts with `.`
pub fn is_not_local(url: &str) -> bool {
    !url.starts_with('/') || url.starts_with('.')
}

/// Returns true if the URL must be resolved against the page it was found on
/// before it can be fetched
pub fn needs_base(url: &str) -> bool {
    url.starts_with('/') || url.starts_with('.')
}
