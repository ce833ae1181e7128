//! Image download module
//!
//! Images are fetched one at a time. Each attempt produces an
//! [`ImageOutcome`]; failures never abort the loop.

mod downloader;

pub use downloader::{download_image, download_images};

use std::path::PathBuf;

/// Result of downloading a single image
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageOutcome {
    /// Bytes were written to `path`
    Saved { path: PathBuf, bytes: usize },

    /// The image could not be fetched or written
    Failed { reason: String },
}

/// One entry per image URL attempted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDownload {
    pub url: String,
    pub outcome: ImageOutcome,
}

/// Aggregated results of an image download pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    /// Downloads in the order they were attempted
    pub downloads: Vec<ImageDownload>,
}

impl DownloadSummary {
    /// Total number of images attempted
    pub fn attempted(&self) -> usize {
        self.downloads.len()
    }

    /// Iterates over successfully saved images as (url, path)
    pub fn saved(&self) -> impl Iterator<Item = (&str, &PathBuf)> {
        self.downloads.iter().filter_map(|d| match &d.outcome {
            ImageOutcome::Saved { path, .. } => Some((d.url.as_str(), path)),
            ImageOutcome::Failed { .. } => None,
        })
    }

    /// Iterates over failed images as (url, reason)
    pub fn failures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.downloads.iter().filter_map(|d| match &d.outcome {
            ImageOutcome::Failed { reason } => Some((d.url.as_str(), reason.as_str())),
            ImageOutcome::Saved { .. } => None,
        })
    }

    pub fn saved_count(&self) -> usize {
        self.saved().count()
    }

    pub fn failed_count(&self) -> usize {
        self.failures().count()
    }

    /// Total bytes written across all saved images
    pub fn total_bytes(&self) -> usize {
        self.downloads
            .iter()
            .map(|d| match d.outcome {
                ImageOutcome::Saved { bytes, .. } => bytes,
                ImageOutcome::Failed { .. } => 0,
            })
            .sum()
    }
}
