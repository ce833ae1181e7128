//! URL handling module for Site-Harvest
//!
//! This module resolves `href`/`src` attribute values against the page URL,
//! applies the page-link domain filter, and derives local file names for
//! downloaded images.

mod domain;
mod filename;
mod resolve;

// Re-export main functions
pub use domain::{extract_domain, matches_domain_filter};
pub use filename::image_file_name;
pub use resolve::resolve_link;
