//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! fetch-parse-filter cycle end to end.

use webcrawler::config::{Config, CrawlOptions, HttpConfig, Overrides, UserAgentConfig};
use webcrawler::crawler::{crawl, Crawler, HttpFetcher, StopReason};
use webcrawler::output::{render_links, render_urls};
use webcrawler::state::Link;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_test_fetcher() -> HttpFetcher {
    let user_agent = UserAgentConfig {
        crawler_name: "TestBot".to_string(),
        crawler_version: "1.0.0".to_string(),
    };
    let http = HttpConfig {
        timeout_secs: 5,
        connect_timeout_secs: 2,
    };
    HttpFetcher::from_config(&user_agent, &http).expect("Failed to build fetcher")
}

fn create_test_options(root: &str, depth_limit: u32) -> CrawlOptions {
    CrawlOptions {
        depth_limit,
        ..CrawlOptions::new(root)
    }
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(
        format!("<html><body>{}</body></html>", body),
        "text/html; charset=utf-8",
    )
}

/// Mounts a GET mock for `page` that must be hit exactly `times` times
async fn mount_page(server: &MockServer, page: &str, response: ResponseTemplate, times: u64) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(response)
        .expect(times)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_single_host() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html(&format!(
            r#"<a href="/page1">Page 1</a>
               <a href="{}/page2">Page 2</a>
               <a href="http://other.invalid/x">Elsewhere</a>"#,
            base_url
        )),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/page1",
        html(
            r#"<a href="/page2#section">Page 2 again</a>
               <a href="/missing">Missing</a>
               <a href="/doc.pdf">PDF</a>
               <a href="/">Home</a>"#,
        ),
        1,
    )
    .await;
    mount_page(&mock_server, "/page2", html("No links here"), 1).await;
    mount_page(&mock_server, "/missing", ResponseTemplate::new(404), 1).await;
    mount_page(
        &mock_server,
        "/doc.pdf",
        ResponseTemplate::new(200)
            .set_body_raw(r#"<a href="/hidden">not parsed</a>"#, "application/pdf"),
        1,
    )
    .await;
    mount_page(&mock_server, "/hidden", html(""), 0).await;

    let mut crawler = Crawler::new(
        create_test_options(&format!("{}/", base_url), 3),
        create_test_fetcher(),
    );
    let reason = crawler.crawl().await;

    assert_eq!(reason, StopReason::FrontierExhausted);

    let state = crawler.state();
    // Root, page1, page2, missing and the PDF were all attempted
    assert_eq!(state.links_followed(), 5);
    assert_eq!(state.visited().len(), 5);
    // 2 same-host links on the root, 4 on page1; the external link is not remembered
    assert_eq!(state.links_found(), 6);
    assert!(!state
        .remembered_urls()
        .contains("http://other.invalid/x"));
    assert!(state
        .remembered_urls()
        .contains(&format!("{}/page2", base_url)));
    assert!(state.remembered_links().contains(&Link::href(
        format!("{}/page1", base_url),
        format!("{}/", base_url)
    )));
}

#[tokio::test]
async fn test_unfiltered_links_include_other_hosts() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html(r#"<a href="/b">B</a><a href="http://other.invalid/c">C</a>"#),
        1,
    )
    .await;
    mount_page(&mock_server, "/b", html(""), 1).await;

    let mut options = create_test_options(&format!("{}/", base_url), 1);
    options.filter_remembered = false;
    let mut crawler = Crawler::new(options, create_test_fetcher());
    crawler.crawl().await;

    assert_eq!(crawler.state().links_followed(), 2);
    assert_eq!(crawler.state().links_found(), 2);
    assert_eq!(
        render_urls(crawler.state()),
        format!("{}/b\nhttp://other.invalid/c", base_url)
    );
}

#[tokio::test]
async fn test_depth_limit_respected() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", html(r#"<a href="/level1">1</a>"#), 1).await;
    mount_page(&mock_server, "/level1", html(r#"<a href="/level2">2</a>"#), 1).await;
    mount_page(&mock_server, "/level2", html(r#"<a href="/level3">3</a>"#), 0).await;

    let mut crawler = Crawler::new(
        create_test_options(&format!("{}/", base_url), 1),
        create_test_fetcher(),
    );
    let reason = crawler.crawl().await;

    assert_eq!(reason, StopReason::DepthLimit { depth: 2 });
    assert_eq!(crawler.state().links_followed(), 2);
}

#[tokio::test]
async fn test_root_outside_confinement_makes_no_requests() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", html(r#"<a href="/docs/a">A</a>"#), 0).await;

    let mut options = create_test_options(&format!("{}/", base_url), 3);
    options.confine = Some(format!("{}/docs/", base_url));
    let mut crawler = Crawler::new(options, create_test_fetcher());
    crawler.crawl().await;

    assert_eq!(crawler.state().links_followed(), 0);
    assert!(crawler.state().remembered_urls().is_empty());
}

#[tokio::test]
async fn test_not_found_continues_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html(r#"<a href="/gone">Gone</a><a href="/here">Here</a>"#),
        1,
    )
    .await;
    mount_page(&mock_server, "/gone", ResponseTemplate::new(404), 1).await;
    mount_page(&mock_server, "/here", html(r#"<a href="/deeper">D</a>"#), 1).await;
    mount_page(&mock_server, "/deeper", html(""), 1).await;

    let mut crawler = Crawler::new(
        create_test_options(&format!("{}/", base_url), 3),
        create_test_fetcher(),
    );
    let reason = crawler.crawl().await;

    assert_eq!(reason, StopReason::FrontierExhausted);
    assert_eq!(crawler.state().links_followed(), 4);
    assert!(crawler
        .state()
        .visited()
        .contains(&format!("{}/gone", base_url)));
}

#[tokio::test]
async fn test_excluded_prefix_not_fetched() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html(r#"<a href="/private/secret">S</a><a href="/public">P</a>"#),
        1,
    )
    .await;
    mount_page(&mock_server, "/private/secret", html(""), 0).await;
    mount_page(&mock_server, "/public", html(""), 1).await;

    let mut options = create_test_options(&format!("{}/", base_url), 3);
    options.exclude = vec![format!("{}/private", base_url)];
    let mut crawler = Crawler::new(options, create_test_fetcher());
    crawler.crawl().await;

    assert_eq!(crawler.state().links_followed(), 2);
}

#[tokio::test]
async fn test_links_report() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        html(r#"<a href="/a">A</a><a href="/a#again">A again</a>"#),
        1,
    )
    .await;
    mount_page(&mock_server, "/a", html(r#"<a href="/">Home</a>"#), 1).await;

    let mut crawler = Crawler::new(
        create_test_options(&format!("{}/", base_url), 2),
        create_test_fetcher(),
    );
    crawler.crawl().await;

    assert_eq!(
        render_links(crawler.state()),
        format!(
            "{base}/ -> {base}/a\n{base}/a -> {base}/",
            base = base_url
        )
    );
    // Both occurrences on the root page are counted
    assert_eq!(crawler.state().links_found(), 3);
}

#[tokio::test]
async fn test_crawl_entry_point_with_overrides() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", html(r#"<a href="/next">Next</a>"#), 1).await;
    mount_page(&mock_server, "/next", html(""), 0).await;

    let overrides = Overrides {
        depth: Some(0),
        ..Default::default()
    };
    let (reason, state) = crawl(&Config::default(), &format!("{}/", base_url), &overrides)
        .await
        .expect("Crawl failed");

    assert_eq!(reason, StopReason::DepthLimit { depth: 1 });
    assert_eq!(state.links_followed(), 1);
    assert_eq!(state.links_found(), 1);
}

#[tokio::test]
async fn test_root_without_trailing_slash_fetched_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", html(r#"<a href="/">Home</a>"#), 1).await;

    let mut crawler = Crawler::new(create_test_options(&base_url, 3), create_test_fetcher());
    let reason = crawler.crawl().await;

    assert_eq!(reason, StopReason::FrontierExhausted);
    assert_eq!(crawler.state().links_followed(), 1);
    assert_eq!(crawler.root(), format!("{}/", base_url));
}
