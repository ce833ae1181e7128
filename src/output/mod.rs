//! Output module for harvest reports
//!
//! This module handles:
//! - Rendering the plain-text report
//! - Writing it to a timestamped file
//! - Mirroring it to standard output

mod report;

pub use report::{render_report, report_file_name, write_report, ReportData};

use crate::images::DownloadSummary;
use crate::scrape::ScrapedPage;
use crate::text::TextAnalysis;

impl ReportData {
    /// Assembles report data from the results of each pipeline stage
    pub fn from_parts(
        target_url: &str,
        page: ScrapedPage,
        analysis: TextAnalysis,
        downloads: DownloadSummary,
    ) -> Self {
        Self {
            target_url: target_url.to_string(),
            page_links: page.page_links,
            image_links: page.image_links,
            phone_numbers: page.phone_numbers,
            zip_codes: page.zip_codes,
            vocabulary: analysis.vocabulary,
            nouns: analysis.nouns,
            verbs: analysis.verbs,
            downloads,
        }
    }
}
