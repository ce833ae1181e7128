//! Phone number and zip code extraction
//!
//! Both patterns are plain regular expressions compiled once per run. No
//! validation is done on the matches: any five-digit number is a zip code.

use crate::config::ExtractionConfig;
use crate::Result;
use regex::Regex;
use std::collections::BTreeSet;

/// Compiled extraction patterns
#[derive(Debug, Clone)]
pub struct ContactPatterns {
    phone: Regex,
    zip: Regex,
}

impl ContactPatterns {
    /// Compiles the patterns from configuration
    pub fn new(config: &ExtractionConfig) -> Result<Self> {
        Ok(Self {
            phone: Regex::new(&config.phone_pattern)?,
            zip: Regex::new(&config.zip_pattern)?,
        })
    }

    /// Collects every phone number match in the text
    pub fn phone_numbers(&self, text: &str) -> BTreeSet<String> {
        collect_matches(&self.phone, text)
    }

    /// Collects every zip code match in the text
    pub fn zip_codes(&self, text: &str) -> BTreeSet<String> {
        collect_matches(&self.zip, text)
    }
}

fn collect_matches(pattern: &Regex, text: &str) -> BTreeSet<String> {
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
