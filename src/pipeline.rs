//! Harvest pipeline - runs every stage once, in order
//!
//! 1. Prepare the image directory and language data
//! 2. Fetch and extract the target page
//! 3. Download the images it references
//! 4. Analyze its visible text
//! 5. Write the report

use crate::config::Config;
use crate::images::download_images;
use crate::output::{write_report, ReportData};
use crate::scrape::{build_http_client, scrape_website, ContactPatterns};
use crate::text::{analyze_text, ensure_stopwords, load_tagger, LexiconTagger, StopWords};
use crate::{Result, UrlError};
use chrono::Local;
use reqwest::Client;
use std::path::{Path, PathBuf};
use url::Url;

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct HarvestOutcome {
    /// Path of the written report
    pub report_path: PathBuf,
    /// The data the report was rendered from
    pub report: ReportData,
}

/// Main harvest structure
pub struct Harvester {
    config: Config,
    client: Client,
    target: Url,
    domain_filter: String,
    patterns: ContactPatterns,
    stopwords: StopWords,
    tagger: LexiconTagger,
}

impl Harvester {
    /// Creates a harvester ready to run
    ///
    /// Compiles the extraction patterns, builds the HTTP client and makes
    /// sure the language data is available. Nothing is fetched from the
    /// target yet.
    pub async fn new(config: Config) -> Result<Self> {
        let target = Url::parse(&config.target.url)?;
        let domain_filter = config
            .target
            .effective_domain_filter()
            .ok_or_else(|| UrlError::Parse(format!("{} has no host", target)))?;
        let patterns = ContactPatterns::new(&config.extraction)?;
        let client = build_http_client(&config.fetch)?;
        let stopwords = ensure_stopwords(&client, &config.language).await?;
        let tagger = load_tagger(&config.language)?;

        tracing::debug!(
            "Harvester ready: domain filter '{}', {} stop words",
            domain_filter,
            stopwords.len()
        );

        Ok(Self {
            config,
            client,
            target,
            domain_filter,
            patterns,
            stopwords,
            tagger,
        })
    }

    /// Runs the whole pipeline once
    ///
    /// A failure fetching the target page or writing the report ends the
    /// run with an error. Image failures are recorded in the report instead.
    pub async fn run(&self) -> Result<HarvestOutcome> {
        let image_dir = Path::new(&self.config.output.image_dir);
        std::fs::create_dir_all(image_dir)?;

        tracing::info!("Target website: {}", self.target);
        let page = scrape_website(&self.client, &self.target, &self.domain_filter, &self.patterns)
            .await?;

        tracing::info!("Downloading images...");
        let downloads = download_images(&self.client, &page.image_links, image_dir).await;

        tracing::info!("Processing text...");
        let analysis = analyze_text(&page.text_content, &self.stopwords, &self.tagger);

        tracing::info!("Generating report...");
        let report = ReportData::from_parts(&self.config.target.url, page, analysis, downloads);
        let report_path = write_report(
            &report,
            Path::new(&self.config.output.report_dir),
            &Local::now(),
        )?;

        tracing::info!("Report saved to {}", report_path.display());
        tracing::info!("Completed");

        Ok(HarvestOutcome {
            report_path,
            report,
        })
    }
}

/// Runs a complete harvest
///
/// This is the main entry point. It will:
/// 1. Build the HTTP client and load language data
/// 2. Fetch and extract the target page
/// 3. Download images
/// 4. Analyze text
/// 5. Write the report
///
/// # Returns
///
/// * `Ok(HarvestOutcome)` - Harvest completed and the report was written
/// * `Err(HarvestError)` - Harvest failed
pub async fn run_harvest(config: Config) -> Result<HarvestOutcome> {
    let harvester = Harvester::new(config).await?;
    harvester.run().await
}
