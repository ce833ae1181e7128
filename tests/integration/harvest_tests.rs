//! End-to-end harvest tests
//!
//! These tests use wiremock to serve a target page and its images, and
//! tempfile directories for the image and report output.

use site_harvest::config::{Config, LanguageConfig, OutputConfig, TargetConfig};
use site_harvest::pipeline::{run_harvest, Harvester};
use site_harvest::scrape::{build_http_client, scrape_website, ContactPatterns};
use site_harvest::{HarvestError, ImageOutcome};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointed at the mock server
fn create_test_config(base_url: &str, workdir: &TempDir) -> Config {
    Config {
        target: TargetConfig {
            url: format!("{}/", base_url),
            domain_filter: None,
        },
        language: LanguageConfig::default(),
        output: OutputConfig {
            image_dir: workdir.path().join("images").to_string_lossy().into_owned(),
            report_dir: workdir.path().join("reports").to_string_lossy().into_owned(),
        },
        ..Config::default()
    }
}

async fn mount_page(server: &MockServer, body: String) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

async fn mount_image(server: &MockServer, image_path: &str, status: u16, body: &[u8]) {
    Mock::given(method("GET"))
        .and(path(image_path))
        .respond_with(ResponseTemplate::new(status).set_body_bytes(body.to_vec()))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_links_and_images_from_fixture() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        format!(
            r#"<html><head><title>Home</title></head><body>
            <a href="/about">About</a>
            <a href="{base}/events">Events</a>
            <a href="https://other.org/partner">Partner</a>
            <a href="mailto:info@example.com">Mail</a>
            <img src="/img/logo.png">
            <img src="https://cdn.other.org/banner.jpg">
            </body></html>"#,
            base = base_url
        ),
    )
    .await;

    let client = build_http_client(&Default::default()).expect("Failed to build client");
    let patterns = ContactPatterns::new(&Default::default()).expect("Failed to compile patterns");
    let target = url::Url::parse(&format!("{}/", base_url)).unwrap();

    let page = scrape_website(&client, &target, "127.0.0.1", &patterns)
        .await
        .expect("Scrape failed");

    let page_links: Vec<String> = page.page_links.into_iter().collect();
    let expected = vec![format!("{}/about", base_url), format!("{}/events", base_url)];
    assert_eq!(page_links, expected);

    assert_eq!(page.image_links.len(), 2);
    assert!(page.image_links.contains(&format!("{}/img/logo.png", base_url)));
    assert!(page.image_links.contains("https://cdn.other.org/banner.jpg"));
}

#[tokio::test]
async fn test_full_harvest_writes_report_and_images() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        r#"<html><head><title>Cyber Range</title></head><body>
        <h1>Welcome</h1>
        <p>The quick Fox jumps over the lazy dog.</p>
        <p>Call (555) 123-4567 or visit 90210-1234</p>
        <a href="/contact">Contact</a>
        <img src="/img/one.png">
        <img src="/img/two.png">
        <img src="/img/three.png">
        </body></html>"#
            .to_string(),
    )
    .await;

    // Set order is one, three, two; the second image attempted is three
    mount_image(&mock_server, "/img/one.png", 200, b"one").await;
    mount_image(&mock_server, "/img/three.png", 500, b"").await;
    mount_image(&mock_server, "/img/two.png", 200, b"two").await;

    let workdir = TempDir::new().unwrap();
    let config = create_test_config(&base_url, &workdir);

    let outcome = run_harvest(config).await.expect("Harvest failed");

    // Images that succeeded are on disk, the failure did not stop the loop
    let image_dir = workdir.path().join("images");
    assert_eq!(std::fs::read(image_dir.join("one.png")).unwrap(), b"one");
    assert_eq!(std::fs::read(image_dir.join("two.png")).unwrap(), b"two");
    assert!(!image_dir.join("three.png").exists());

    let downloads = &outcome.report.downloads;
    assert_eq!(downloads.attempted(), 3);
    assert_eq!(downloads.saved_count(), 2);
    assert!(matches!(
        downloads.downloads[1].outcome,
        ImageOutcome::Failed { .. }
    ));

    // Report file matches the collected data
    assert!(outcome.report_path.starts_with(workdir.path().join("reports")));
    let file_name = outcome
        .report_path
        .file_name()
        .unwrap()
        .to_string_lossy()
        .into_owned();
    assert!(file_name.starts_with("report_"));
    assert!(file_name.ends_with(".txt"));
    assert_eq!(file_name.len(), "report_YYYYMMDD_HHMMSS.txt".len());

    let report = std::fs::read_to_string(&outcome.report_path).unwrap();
    assert!(report.starts_with(&format!("Target Website: {}/\n\n", base_url)));
    assert!(report.contains("\nPhone Numbers Found (1):\n(555) 123-4567\n\n"));
    assert!(report.contains("\nZip Codes Found (1):\n90210-1234\n\n"));
    assert!(report.contains(&format!(
        "Unique URLs Found (1):\n{}/contact\n\n",
        base_url
    )));
    assert!(report.contains("\nImages Downloaded (2 of 3):\n"));
    assert!(report.contains("\nImage Download Failures (1):\n"));

    assert!(outcome.report.vocabulary.contains("Fox"));
    assert!(!outcome.report.vocabulary.contains("The"));
    assert!(outcome.report.nouns.contains("Fox"));
    assert!(outcome.report.verbs.contains("jumps"));
}

#[tokio::test]
async fn test_report_without_images_or_phone_numbers() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "<html><body><p>Nothing to see here</p></body></html>".to_string(),
    )
    .await;

    let workdir = TempDir::new().unwrap();
    let config = create_test_config(&base_url, &workdir);

    let outcome = run_harvest(config).await.expect("Harvest failed");
    let report = std::fs::read_to_string(&outcome.report_path).unwrap();

    assert!(report.contains("\nPhone Numbers Found (0):\n\n"));
    assert!(report.contains("\nUnique Image URLs Found (0):\n\n"));
    assert!(report.contains("\nImages Downloaded (0 of 0):\n\n"));

    // The image directory is created even when there is nothing to download
    assert!(workdir.path().join("images").is_dir());
}

#[tokio::test]
async fn test_page_fetch_failure_is_fatal() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let workdir = TempDir::new().unwrap();
    let config = create_test_config(&mock_server.uri(), &workdir);

    let result = run_harvest(config).await;

    assert!(matches!(
        result,
        Err(HarvestError::Status { status: 404, .. })
    ));
    assert!(!workdir.path().join("reports").exists());
}

#[tokio::test]
async fn test_harvester_uses_explicit_domain_filter() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        r#"<html><body>
        <a href="/docs/intro">Docs</a>
        <a href="/blog/post">Blog</a>
        </body></html>"#
            .to_string(),
    )
    .await;

    let workdir = TempDir::new().unwrap();
    let mut config = create_test_config(&base_url, &workdir);
    config.target.domain_filter = Some("/docs/".to_string());

    let harvester = Harvester::new(config).await.expect("Failed to create harvester");
    let outcome = harvester.run().await.expect("Harvest failed");

    assert_eq!(outcome.report.page_links.len(), 1);
    assert!(outcome
        .report
        .page_links
        .contains(&format!("{}/docs/intro", base_url)));
}
