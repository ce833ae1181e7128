//! Scrape module for fetching and extracting the target page
//!
//! This module contains the single-page scraping logic:
//! - HTTP fetching of the target page and of binary resources
//! - HTML parsing into links, images and visible text
//! - Phone number and zip code extraction from the text

mod fetcher;
mod parser;
mod patterns;

pub use fetcher::{build_http_client, fetch_bytes, fetch_page, fetch_text, FetchedPage};
pub use parser::{parse_html, ParsedPage};
pub use patterns::ContactPatterns;

use crate::Result;
use reqwest::Client;
use std::collections::BTreeSet;
use url::Url;

/// Everything extracted from the target page
#[derive(Debug, Clone)]
pub struct ScrapedPage {
    /// The URL the page was finally served from
    pub page_url: Url,
    pub page_links: BTreeSet<String>,
    pub image_links: BTreeSet<String>,
    pub text_content: String,
    pub phone_numbers: BTreeSet<String>,
    pub zip_codes: BTreeSet<String>,
}

/// Extracts links, images, text, phone numbers and zip codes from HTML
///
/// This is the offline half of [`scrape_website`].
pub fn extract_page(
    html: &str,
    page_url: &Url,
    domain_filter: &str,
    patterns: &ContactPatterns,
) -> ScrapedPage {
    let parsed = parse_html(html, page_url, domain_filter);
    let phone_numbers = patterns.phone_numbers(&parsed.text_content);
    let zip_codes = patterns.zip_codes(&parsed.text_content);

    ScrapedPage {
        page_url: page_url.clone(),
        page_links: parsed.page_links,
        image_links: parsed.image_links,
        text_content: parsed.text_content,
        phone_numbers,
        zip_codes,
    }
}

/// Fetches the target page and extracts everything from it
///
/// Relative links resolve against the final URL after redirects. A network
/// failure or non-2xx status is returned as an error; there is no retry.
pub async fn scrape_website(
    client: &Client,
    url: &Url,
    domain_filter: &str,
    patterns: &ContactPatterns,
) -> Result<ScrapedPage> {
    let page = fetch_page(client, url).await?;
    let scraped = extract_page(&page.body, &page.final_url, domain_filter, patterns);

    tracing::info!(
        "Found {} page links, {} image links, {} phone numbers, {} zip codes",
        scraped.page_links.len(),
        scraped.image_links.len(),
        scraped.phone_numbers.len(),
        scraped.zip_codes.len()
    );

    Ok(scraped)
}
