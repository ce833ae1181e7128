//! HTML parser for extracting links, images and visible text
//!
//! This module handles parsing HTML content to extract:
//! - Page links from `<a href>` tags, filtered by the domain filter
//! - Image links from `<img src>` tags, not filtered
//! - The visible text of the page

use crate::url::{matches_domain_filter, resolve_link};
use scraper::{Html, Selector};
use std::collections::BTreeSet;
use url::Url;

/// Elements whose text content is never rendered
const HIDDEN_TEXT_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default)]
pub struct ParsedPage {
    /// Absolute page URLs that passed the domain filter
    pub page_links: BTreeSet<String>,

    /// Absolute image URLs, regardless of domain
    pub image_links: BTreeSet<String>,

    /// Visible text nodes, trimmed and joined with single spaces
    pub text_content: String,
}

/// Parses HTML content and extracts links, images and text
///
/// # Link Extraction Rules
///
/// - `<a href>` values are resolved against `page_url` and kept when the
///   resolved URL contains `domain_filter`. Fragments are dropped so
///   `/about#team` and `/about` count once.
/// - `<img src>` values are resolved the same way and always kept.
/// - `javascript:`, `mailto:`, `tel:`, `data:` and fragment-only values are
///   skipped.
///
/// # Example
///
/// ```
/// use site_harvest::scrape::parse_html;
/// use url::Url;
///
/// let html = r#"<html><body><a href="/page">Link</a><img src="logo.png"></body></html>"#;
/// let base_url = Url::parse("https://example.com/").unwrap();
/// let parsed = parse_html(html, &base_url, "example.com");
/// assert!(parsed.page_links.contains("https://example.com/page"));
/// assert!(parsed.image_links.contains("https://example.com/logo.png"));
/// assert_eq!(parsed.text_content, "Link");
/// ```
pub fn parse_html(html: &str, page_url: &Url, domain_filter: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        page_links: extract_page_links(&document, page_url, domain_filter),
        image_links: extract_image_links(&document, page_url),
        text_content: extract_text(&document),
    }
}

/// Extracts domain-filtered page links from `<a>` tags
fn extract_page_links(document: &Html, page_url: &Url, domain_filter: &str) -> BTreeSet<String> {
    let mut links = BTreeSet::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            let Some(href) = element.value().attr("href") else {
                continue;
            };

            if let Some(mut absolute_url) = resolve_link(href, page_url) {
                absolute_url.set_fragment(None);
                let link = absolute_url.to_string();

                if matches_domain_filter(&link, domain_filter) {
                    links.insert(link);
                } else {
                    tracing::trace!("Link outside domain filter: {}", link);
                }
            }
        }
    }

    links
}

/// Extracts every image URL from `<img>` tags
fn extract_image_links(document: &Html, page_url: &Url) -> BTreeSet<String> {
    let mut images = BTreeSet::new();

    if let Ok(img_selector) = Selector::parse("img[src]") {
        for element in document.select(&img_selector) {
            if let Some(src) = element.value().attr("src") {
                if let Some(absolute_url) = resolve_link(src, page_url) {
                    images.insert(absolute_url.to_string());
                }
            }
        }
    }

    images
}

/// Concatenates the visible text of the document
///
/// Every text node outside script-like elements is trimmed; empty nodes are
/// dropped and the rest joined with a single space.
fn extract_text(document: &Html) -> String {
    let mut parts: Vec<&str> = Vec::new();

    for node in document.root_element().descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|element| HIDDEN_TEXT_ELEMENTS.contains(&element.name()))
        });
        if hidden {
            continue;
        }

        let trimmed = text.trim();
        if !trimmed.is_empty() {
            parts.push(trimmed);
        }
    }

    parts.join(" ")
}
