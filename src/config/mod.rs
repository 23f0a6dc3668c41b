//! Configuration module for myds
//!
//! This module handles loading, parsing, and validating the optional TOML
//! configuration file used by the link crawler.
//!
//! # Example
//!
//! ```no_run
//! use myds::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("myds.toml")).unwrap();
//! println!("Follow next level: {}", config.crawler.follow_next_level);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlerConfig, OutputConfig, Resolution, UserAgentConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
