//! Integration tests for fetching and the one-hop expansion
//!
//! These tests use wiremock to create mock HTTP servers and exercise the
//! fetch, extract and expand cycle end-to-end.

use myds::config::{Resolution, UserAgentConfig};
use myds::crawler::{
    build_http_client, expand_one_level, expand_one_level_with, extract_all_links,
    extract_local_links, fetch_document, fetch_url, ExpandOptions, FetchResult, LevelEntry,
    LinkSources,
};
use myds::filter_by_image_extension;
use reqwest::Client;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A loopback address that refuses connections
const UNREACHABLE: &str = "http://127.0.0.1:1/";

fn test_client() -> Client {
    build_http_client(&UserAgentConfig {
        crawler_name: "TestBot".to_string(),
        crawler_version: "1.0.0".to_string(),
        contact_url: None,
    })
    .expect("Failed to build client")
}

fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(format!("<html><head><title>T</title></head><body>{}</body></html>", body))
        .insert_header("content-type", "text/html")
}

async fn mount_page(server: &MockServer, page_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(html_page(body))
        .mount(server)
        .await;
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_fetch_document_extracts_links() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/page",
        r#"<a href="/a">A</a><a>none</a><a href="http://x.com">X</a><img src="/logo.png">"#,
    )
    .await;

    let client = test_client();
    let doc = fetch_document(&client, &format!("{}/page", mock_server.uri()))
        .await
        .expect("Fetch should succeed");

    assert_eq!(
        extract_all_links(&doc),
        strings(&["/a", "http://x.com", "/logo.png"])
    );
    assert_eq!(extract_local_links(&doc), strings(&["/a", "/logo.png"]));
}

#[tokio::test]
async fn test_fetch_sends_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "TestBot/1.0.0"))
        .respond_with(html_page(""))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = test_client();
    let result = fetch_url(&client, &format!("{}/", mock_server.uri())).await;
    assert!(result.is_success());
}

#[tokio::test]
async fn test_error_status_still_parsed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(r#"<html><body><a href="/home">Home</a></body></html>"#),
        )
        .mount(&mock_server)
        .await;

    let client = test_client();
    match fetch_url(&client, &format!("{}/missing", mock_server.uri())).await {
        FetchResult::Success { status_code, .. } => assert_eq!(status_code, 404),
        FetchResult::Failure { error } => panic!("Unexpected failure: {}", error),
    }

    let doc = fetch_document(&client, &format!("{}/missing", mock_server.uri()))
        .await
        .expect("Error pages are still documents");
    assert_eq!(extract_all_links(&doc), strings(&["/home"]));
}

#[tokio::test]
async fn test_fetch_unreachable_is_absent() {
    let client = test_client();

    match fetch_url(&client, UNREACHABLE).await {
        FetchResult::Failure { error } => assert!(!error.is_empty()),
        FetchResult::Success { .. } => panic!("Expected a failure"),
    }
    assert!(fetch_document(&client, UNREACHABLE).await.is_none());
}

#[tokio::test]
async fn test_expand_resolves_local_link_against_base() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/page", mock_server.uri());

    mount_page(&mock_server, "/next", r#"<a href="/foo">Foo</a>"#).await;

    let client = test_client();
    let levels = expand_one_level(&client, &strings(&["/next"]), &base_url).await;

    assert_eq!(
        levels,
        vec![LevelEntry {
            url: format!("{}/next", mock_server.uri()),
            links: strings(&["/foo"]),
        }]
    );
}

#[tokio::test]
async fn test_expand_truncates_deep_base_to_authority() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/docs/guide/intro.html", mock_server.uri());

    mount_page(&mock_server, "/next", r#"<a href="/foo">Foo</a>"#).await;

    let client = test_client();
    let levels = expand_one_level(&client, &strings(&["/next"]), &base_url).await;

    assert_eq!(levels.len(), 1);
    assert_eq!(levels[0].url, format!("{}/next", mock_server.uri()));
}

#[tokio::test]
async fn test_expand_join_resolution() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/docs/intro.html", mock_server.uri());

    mount_page(&mock_server, "/docs/setup.html", r#"<a href="/x">X</a>"#).await;

    let client = test_client();
    let options = ExpandOptions {
        resolution: Resolution::Join,
        sources: LinkSources::default(),
    };
    let levels =
        expand_one_level_with(&client, &strings(&["./setup.html"]), &base_url, options).await;

    assert_eq!(levels.len(), 1);
    assert_eq!(levels[0].url, format!("{}/docs/setup.html", mock_server.uri()));
    assert_eq!(levels[0].links, strings(&["/x"]));
}

#[tokio::test]
async fn test_expand_absolute_link_used_as_is() {
    let mock_server = MockServer::start().await;
    let absolute = format!("{}/other", mock_server.uri());

    mount_page(&mock_server, "/other", r#"<a href="https://elsewhere.com">E</a>"#).await;

    let client = test_client();
    let levels = expand_one_level(
        &client,
        &[absolute.clone()],
        "http://unrelated.invalid/page",
    )
    .await;

    assert_eq!(
        levels,
        vec![LevelEntry {
            url: absolute,
            links: strings(&["https://elsewhere.com"]),
        }]
    );
}

#[tokio::test]
async fn test_expand_failed_fetch_yields_nothing() {
    let client = test_client();
    let levels = expand_one_level(&client, &strings(&["/next"]), "http://127.0.0.1:1/page").await;
    assert!(levels.is_empty());
}

#[tokio::test]
async fn test_expand_skips_failures_and_keeps_order() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/", mock_server.uri());

    mount_page(&mock_server, "/first", r#"<a href="/1">1</a>"#).await;
    mount_page(&mock_server, "/second", r#"<a href="/2">2</a><img data-src="/2.png">"#).await;

    let urls = vec![
        "/first".to_string(),
        UNREACHABLE.to_string(),
        format!("{}/second", mock_server.uri()),
    ];

    let client = test_client();
    let levels = expand_one_level(&client, &urls, &base_url).await;

    assert_eq!(
        levels,
        vec![
            LevelEntry {
                url: format!("{}/first", mock_server.uri()),
                links: strings(&["/1"]),
            },
            LevelEntry {
                url: format!("{}/second", mock_server.uri()),
                links: strings(&["/2", "/2.png"]),
            },
        ]
    );
}

#[tokio::test]
async fn test_expand_fetches_each_entry_once() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/page", mock_server.uri());

    Mock::given(method("GET"))
        .and(path("/dup"))
        .respond_with(html_page(r#"<a href="/z">Z</a>"#))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = test_client();
    let levels = expand_one_level(&client, &strings(&["/dup", "/dup"]), &base_url).await;

    // Duplicates are not collapsed; wiremock verifies the call count on drop
    assert_eq!(levels.len(), 2);
}

#[tokio::test]
async fn test_expand_anchors_only() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/page", mock_server.uri());

    mount_page(&mock_server, "/next", r#"<a href="/a">A</a><img src="/a.png">"#).await;

    let client = test_client();
    let options = ExpandOptions {
        resolution: Resolution::Truncate,
        sources: LinkSources::anchors_only(),
    };
    let levels = expand_one_level_with(&client, &strings(&["/next"]), &base_url, options).await;

    assert_eq!(levels[0].links, strings(&["/a"]));
}

#[tokio::test]
async fn test_full_page_then_next_level() {
    let mock_server = MockServer::start().await;
    let base_url = format!("{}/index.html", mock_server.uri());

    mount_page(
        &mock_server,
        "/index.html",
        r#"
        <a href="/about">About</a>
        <a href="/about">About again</a>
        <img src="/img/logo.png">
        <img data-src="/img/hero.JPG">
        "#,
    )
    .await;
    mount_page(&mock_server, "/about", r#"<a href="/team">Team</a>"#).await;

    // The image URLs are not pages
    Mock::given(method("GET"))
        .and(path("/img/logo.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x89, 0x50, 0x4e, 0x47]))
        .mount(&mock_server)
        .await;

    let client = test_client();
    let doc = fetch_document(&client, &base_url)
        .await
        .expect("Index should be fetched");

    let all = extract_all_links(&doc);
    assert_eq!(
        all,
        strings(&["/about", "/about", "/img/logo.png", "/img/hero.JPG"])
    );
    assert_eq!(filter_by_image_extension(&all), strings(&["/img/logo.png"]));

    let levels = expand_one_level(&client, &all, &base_url).await;

    // /img/hero.JPG has no mock and gets a 404 with an empty body, which is
    // still a successful fetch
    assert_eq!(levels.len(), 4);
    assert_eq!(levels[0].links, strings(&["/team"]));
    assert_eq!(levels[1].links, strings(&["/team"]));
    assert!(levels[2].links.is_empty());
    assert!(levels[3].links.is_empty());
}
