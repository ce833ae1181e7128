//! Configuration module for Site-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section is optional; an empty file (or no file at all) yields the
//! built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use site_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Images go to: {}", config.output.image_dir);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, ExtractionConfig, FetchConfig, LanguageConfig, OutputConfig, TargetConfig,
    DEFAULT_PHONE_PATTERN, DEFAULT_TARGET_URL, DEFAULT_ZIP_PATTERN,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
