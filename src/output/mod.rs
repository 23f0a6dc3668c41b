//! Output module for link listings and reports
//!
//! This module handles:
//! - Printing enumerated link lists to stdout
//! - Generating markdown reports of a run

mod console;
mod markdown;

pub use console::{format_enumerated, print_page_report};
pub use markdown::{format_markdown_report, write_markdown_report};

use crate::crawler::LevelEntry;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to format output: {0}")]
    Format(String),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Everything gathered for one starting URL
#[derive(Debug, Clone, Default)]
pub struct PageReport {
    /// The starting URL
    pub url: String,

    /// All links on the page, in extraction order
    pub all_links: Vec<String>,

    /// The `/`-prefixed links on the page
    pub local_links: Vec<String>,

    /// Links that look like images, deduplicated
    pub image_links: Vec<String>,

    /// Links found one hop away, when the expansion ran
    pub next_level: Vec<LevelEntry>,
}

impl PageReport {
    /// Total number of links found one hop away
    pub fn next_level_link_count(&self) -> usize {
        self.next_level.iter().map(|entry| entry.links.len()).sum()
    }
}
