//! Sequential image downloader

use crate::images::{DownloadSummary, ImageDownload, ImageOutcome};
use crate::scrape::fetch_bytes;
use crate::url::image_file_name;
use crate::Result;
use reqwest::Client;
use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use url::Url;

/// Downloads every image into `image_dir`
///
/// URLs are processed in set order, one request at a time. Each failure is
/// logged and recorded in the summary, then the loop moves on.
///
/// Images that share a basename overwrite each other on disk; the last one
/// downloaded wins.
pub async fn download_images(
    client: &Client,
    image_links: &BTreeSet<String>,
    image_dir: &Path,
) -> DownloadSummary {
    let mut summary = DownloadSummary::default();
    let mut written: HashMap<PathBuf, String> = HashMap::new();

    for image_url in image_links {
        let outcome = match download_image(client, image_url, image_dir).await {
            Ok((path, bytes)) => {
                tracing::info!("Image saved: {}", path.display());
                if let Some(previous) = written.insert(path.clone(), image_url.clone()) {
                    tracing::debug!(
                        "{} overwrote {} (downloaded from {})",
                        image_url,
                        path.display(),
                        previous
                    );
                }
                ImageOutcome::Saved { path, bytes }
            }
            Err(e) => {
                tracing::warn!("Error downloading image {}: {}", image_url, e);
                ImageOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };

        summary.downloads.push(ImageDownload {
            url: image_url.clone(),
            outcome,
        });
    }

    tracing::info!(
        "Downloaded {} of {} images ({} bytes)",
        summary.saved_count(),
        summary.attempted(),
        summary.total_bytes()
    );

    summary
}

/// Downloads a single image and returns where it was written and its size
pub async fn download_image(
    client: &Client,
    image_url: &str,
    image_dir: &Path,
) -> Result<(PathBuf, usize)> {
    let url = Url::parse(image_url)?;
    let file_name = image_file_name(&url)?;
    let bytes = fetch_bytes(client, &url).await?;

    let path = image_dir.join(file_name);
    let mut file = File::create(&path)?;
    file.write_all(&bytes)?;

    Ok((path, bytes.len()))
}
