//! Plain-text report generation
//!
//! This module renders the harvest results as a labeled, comma-separated
//! text report, writes it to a timestamped file, and mirrors it to stdout.

use crate::images::DownloadSummary;
use chrono::{DateTime, Local};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Everything a report shows
#[derive(Debug, Clone, Default)]
pub struct ReportData {
    pub target_url: String,
    pub page_links: BTreeSet<String>,
    pub image_links: BTreeSet<String>,
    pub phone_numbers: BTreeSet<String>,
    pub zip_codes: BTreeSet<String>,
    pub vocabulary: BTreeSet<String>,
    pub nouns: BTreeSet<String>,
    pub verbs: BTreeSet<String>,
    pub downloads: DownloadSummary,
}

/// Returns the report file name for a point in time
///
/// # Example
///
/// ```
/// use chrono::{Local, TimeZone};
/// use site_harvest::output::report_file_name;
///
/// let at = Local.with_ymd_and_hms(2025, 5, 12, 14, 3, 9).unwrap();
/// assert_eq!(report_file_name(&at), "report_20250512_140309.txt");
/// ```
pub fn report_file_name(timestamp: &DateTime<Local>) -> String {
    format!("report_{}.txt", timestamp.format("%Y%m%d_%H%M%S"))
}

/// Renders the report text
///
/// Every section is a `Label (count):` line, the members joined by `", "`
/// (an empty line when there are none), then a blank line. Sections after
/// the first are preceded by one more newline. Sets list in sorted order;
/// download outcomes list in attempt order.
pub fn render_report(data: &ReportData) -> String {
    let saved: Vec<String> = data
        .downloads
        .saved()
        .map(|(_, path)| path.display().to_string())
        .collect();
    let failures: Vec<String> = data
        .downloads
        .failures()
        .map(|(url, reason)| format!("{} ({})", url, reason))
        .collect();

    let sections = [
        section("Unique URLs Found", &data.page_links),
        section("Unique Image URLs Found", &data.image_links),
        section("Phone Numbers Found", &data.phone_numbers),
        section("Zip Codes Found", &data.zip_codes),
        section("Unique Vocabulary Found", &data.vocabulary),
        section("Nouns Found", &data.nouns),
        section("Verbs Found", &data.verbs),
        (
            format!(
                "Images Downloaded ({} of {})",
                saved.len(),
                data.downloads.attempted()
            ),
            saved.join(", "),
        ),
        (
            format!("Image Download Failures ({})", failures.len()),
            failures.join(", "),
        ),
    ];

    let mut report = format!("Target Website: {}\n\n", data.target_url);
    for (index, (heading, listing)) in sections.iter().enumerate() {
        if index > 0 {
            report.push('\n');
        }
        report.push_str(&format!("{}:\n{}\n\n", heading, listing));
    }

    report
}

fn section(label: &str, items: &BTreeSet<String>) -> (String, String) {
    let listing = items
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    (format!("{} ({})", label, items.len()), listing)
}

/// Writes the report to `report_dir` and mirrors it to stdout
///
/// # Returns
///
/// * `Ok(PathBuf)` - Path of the written report
/// * `Err(io::Error)` - Failed to create the directory or write the file
pub fn write_report(
    data: &ReportData,
    report_dir: &Path,
    timestamp: &DateTime<Local>,
) -> std::io::Result<PathBuf> {
    let rendered = render_report(data);

    std::fs::create_dir_all(report_dir)?;
    let path = report_dir.join(report_file_name(timestamp));

    {
        let mut file = File::create(&path)?;
        file.write_all(rendered.as_bytes())?;
    }

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(rendered.as_bytes())?;
    handle.flush()?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::{ImageDownload, ImageOutcome};
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn create_test_data() -> ReportData {
        ReportData {
            target_url: "https://example.com".to_string(),
            page_links: set(&["https://example.com/b", "https://example.com/a"]),
            phone_numbers: set(&["(555) 123-4567"]),
            zip_codes: set(&["90210"]),
            vocabulary: set(&["quick", "Fox", "jumps"]),
            nouns: set(&["Fox"]),
            verbs: set(&["jumps"]),
            ..ReportData::default()
        }
    }

    #[test]
    fn test_report_starts_with_target() {
        let report = render_report(&create_test_data());
        assert!(report.starts_with("Target Website: https://example.com\n\nUnique URLs Found (2):\n"));
    }

    #[test]
    fn test_sections_are_sorted_and_counted() {
        let report = render_report(&create_test_data());

        assert!(report.contains(
            "Unique URLs Found (2):\nhttps://example.com/a, https://example.com/b\n\n"
        ));
        assert!(report.contains("\nUnique Vocabulary Found (3):\nFox, jumps, quick\n\n"));
        assert!(report.contains("\nNouns Found (1):\nFox\n\n"));
        assert!(report.contains("\nVerbs Found (1):\njumps\n\n"));
    }

    #[test]
    fn test_empty_sections_have_empty_listing_line() {
        let report = render_report(&ReportData {
            target_url: "https://example.com".to_string(),
            ..ReportData::default()
        });

        assert!(report.contains("\nPhone Numbers Found (0):\n\n"));
        assert!(report.contains("\nUnique Image URLs Found (0):\n\n"));
        assert!(report.contains("\nImages Downloaded (0 of 0):\n\n"));
    }

    #[test]
    fn test_section_order() {
        let report = render_report(&create_test_data());
        let labels = [
            "Unique URLs Found",
            "Unique Image URLs Found",
            "Phone Numbers Found",
            "Zip Codes Found",
            "Unique Vocabulary Found",
            "Nouns Found",
            "Verbs Found",
            "Images Downloaded",
            "Image Download Failures",
        ];

        let positions: Vec<usize> = labels
            .iter()
            .map(|label| report.find(label).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_blank_line_between_sections() {
        let report = render_report(&create_test_data());
        assert!(report.contains("https://example.com/b\n\n\nUnique Image URLs Found (0):"));
    }

    #[test]
    fn test_download_outcomes_listed() {
        let mut data = create_test_data();
        data.downloads.downloads = vec![
            ImageDownload {
                url: "https://example.com/a.png".to_string(),
                outcome: ImageOutcome::Saved {
                    path: PathBuf::from("images/a.png"),
                    bytes: 3,
                },
            },
            ImageDownload {
                url: "https://example.com/b.png".to_string(),
                outcome: ImageOutcome::Failed {
                    reason: "Unexpected status 500".to_string(),
                },
            },
        ];

        let report = render_report(&data);

        assert!(report.contains("\nImages Downloaded (1 of 2):\nimages/a.png\n\n"));
        assert!(report.contains(
            "\nImage Download Failures (1):\nhttps://example.com/b.png (Unexpected status 500)\n\n"
        ));
    }

    #[test]
    fn test_write_report_creates_timestamped_file() {
        let dir = TempDir::new().unwrap();
        let timestamp = Local.with_ymd_and_hms(2025, 5, 12, 9, 30, 0).unwrap();
        let data = create_test_data();

        let path = write_report(&data, dir.path(), &timestamp).unwrap();

        assert_eq!(path, dir.path().join("report_20250512_093000.txt"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), render_report(&data));
    }
}
