//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the fetcher and the full crawl cycle end-to-end.

use contact_scraper::config::{Config, HttpConfig};
use contact_scraper::crawler::{crawl, Coordinator, CrawlBudget, FetchError, HttpFetcher, PageSource};
use contact_scraper::{ContactRecord, ScraperError};
use std::time::{Duration, Instant};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with fast failure behavior
fn create_test_config() -> Config {
    let mut config = Config::default();
    config.http = HttpConfig {
        user_agent: "TestScraper/1.0".to_string(),
        timeout_secs: 1,
        connect_retries: 0,
        backoff_base_ms: 0,
        accept_invalid_certs: true,
    };
    config.crawler.time_budget_secs = 30;
    config
}

fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><body>{}</body></html>", body))
        .insert_header("content-type", "text/html")
}

#[tokio::test]
async fn test_fetcher_returns_body_and_sends_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page"))
        .and(header("user-agent", "TestScraper/1.0"))
        .respond_with(html_page("hello"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::from_config(&create_test_config().http).unwrap();
    let body = fetcher
        .fetch(&format!("{}/page", mock_server.uri()))
        .await
        .expect("fetch should succeed");

    assert!(body.contains("hello"));
}

#[tokio::test]
async fn test_fetcher_classifies_http_errors_without_retry() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut http = create_test_config().http;
    http.connect_retries = 3;
    let fetcher = HttpFetcher::from_config(&http).unwrap();

    let missing = fetcher
        .fetch(&format!("{}/missing", mock_server.uri()))
        .await;
    assert_eq!(missing, Err(FetchError::Status(404)));

    let broken = fetcher.fetch(&format!("{}/broken", mock_server.uri())).await;
    assert_eq!(broken, Err(FetchError::Status(500)));
}

#[tokio::test]
async fn test_fetcher_follows_redirects() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/new"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(html_page("moved here"))
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::from_config(&create_test_config().http).unwrap();
    let body = fetcher
        .fetch(&format!("{}/old", mock_server.uri()))
        .await
        .unwrap();

    assert!(body.contains("moved here"));
}

#[tokio::test]
async fn test_fetcher_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(html_page("late").set_delay(Duration::from_secs(3)))
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::from_config(&create_test_config().http).unwrap();
    let result = fetcher.fetch(&format!("{}/slow", mock_server.uri())).await;

    assert_eq!(result, Err(FetchError::Timeout));
}

#[tokio::test]
async fn test_full_crawl_seed_and_contact_page() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Seed page: fetched once for contacts and once for links
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(
            r#"<p>Main office: 555-000-1111</p><a href="/contact-us">Reach us</a>"#,
        ))
        .expect(2)
        .mount(&mock_server)
        .await;

    // URL-keyword extraction, text probe, then the one-hop visit
    Mock::given(method("GET"))
        .and(path("/contact-us"))
        .respond_with(html_page("<p>Call 555-222-3333</p>"))
        .expect(3)
        .mount(&mock_server)
        .await;

    let outcome = crawl(&create_test_config(), &[base_url.clone()])
        .await
        .expect("crawl should start");

    assert_eq!(
        outcome.records,
        vec![
            ContactRecord::phone(base_url.clone(), "555-000-1111"),
            ContactRecord::phone(format!("{}/contact-us", base_url), "555-222-3333"),
        ]
    );
    assert_eq!(outcome.stats.pages_fetched, 5);
    assert_eq!(outcome.stats.fetch_failures, 0);
    assert!(!outcome.stats.budget_exhausted);
}

#[tokio::test]
async fn test_cross_origin_links_are_not_fetched() {
    let mock_server = MockServer::start().await;
    let other_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(&format!(
            r#"<a href="{}/contact">Partner contact</a>555-300-4000"#,
            other_server.uri()
        )))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .respond_with(html_page("555-999-9999"))
        .expect(0)
        .mount(&other_server)
        .await;

    let outcome = crawl(&create_test_config(), &[mock_server.uri()])
        .await
        .unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records[0].value, "555-300-4000");
    assert_eq!(outcome.stats.links_discovered, 0);
}

#[tokio::test]
async fn test_failing_pages_do_not_abort_crawl() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page(
            r#"<a href="/broken">Broken</a><a href="/team">Team</a>"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/team"))
        .respond_with(html_page("Sales: (555) 410-2020"))
        .mount(&mock_server)
        .await;

    let outcome = crawl(&create_test_config(), &[mock_server.uri()])
        .await
        .unwrap();

    assert_eq!(
        outcome.records,
        vec![ContactRecord::phone(
            format!("{}/team", mock_server.uri()),
            "(555) 410-2020"
        )]
    );
    // probe and one-hop visit of /broken
    assert_eq!(outcome.stats.fetch_failures, 2);
}

#[tokio::test]
async fn test_expired_budget_makes_no_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html_page("555-000-1111"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config();
    let fetcher = HttpFetcher::from_config(&config.http).unwrap();
    let coordinator = Coordinator::new(fetcher, &config.crawler);

    let outcome = coordinator
        .run_with_budget(&[mock_server.uri()], CrawlBudget::until(Instant::now()))
        .await;

    assert!(outcome.records.is_empty());
    assert_eq!(outcome.stats.pages_fetched, 0);
    assert!(outcome.stats.budget_exhausted);
}

#[tokio::test]
async fn test_crawl_results_exported_to_csv() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page("Front desk 555-123-4567 ext 89"))
        .mount(&mock_server)
        .await;

    let outcome = crawl(&create_test_config(), &[mock_server.uri()])
        .await
        .unwrap();

    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("contact_info.csv");
    let written = outcome.export_csv(&csv_path).unwrap();
    assert_eq!(written, 1);

    let content = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(
        content,
        format!(
            "Website,Contact,Type\r\n{},555-123-4567 ext 89,phone\r\n",
            mock_server.uri()
        )
    );
}

#[tokio::test]
async fn test_csv_export_to_missing_directory_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_page("Office 555-765-4321"))
        .mount(&mock_server)
        .await;

    let outcome = crawl(&create_test_config(), &[mock_server.uri()])
        .await
        .unwrap();
    assert_eq!(outcome.records.len(), 1);

    let dir = tempfile::tempdir().unwrap();
    let result = outcome.export_csv(&dir.path().join("missing").join("out.csv"));

    assert!(matches!(result, Err(ScraperError::Output(_))));
}
