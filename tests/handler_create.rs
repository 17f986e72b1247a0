mod common;

use axum::http::StatusCode;
use serde_json::json;
use snipurl::application::services::CreateUrl;
use snipurl::domain::repositories::UrlRepository;
use snipurl::error::AppError;
use snipurl::utils::validation::SlugPolicy;

#[tokio::test]
async fn test_create_with_generated_slug_json() {
    let (server, repo) = common::create_test_server();

    let response = server
        .post("/url")
        .json(&json!({ "url": "https://example.com" }))
        .await;

    response.assert_status_ok();

    let html = response.text();
    let slug = common::short_link_slug(&html);
    assert_eq!(slug.len(), 5);
    assert!(html.contains(&format!("{}/{}", common::BASE_URL, slug)));

    let stored = repo.find_by_slug(&slug).await.unwrap().unwrap();
    assert_eq!(stored.url, "https://example.com");
}

#[tokio::test]
async fn test_create_with_form_body() {
    let (server, repo) = common::create_test_server();

    let response = server
        .post("/url")
        .form(&[("url", "https://rust-lang.org"), ("slug", "Rust")])
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("http://sho.rt/rust"));
    assert!(repo.find_by_slug("rust").await.unwrap().is_some());
}

#[tokio::test]
async fn test_create_empty_form_slug_generates_one() {
    let (server, repo) = common::create_test_server();

    let response = server
        .post("/url")
        .form(&[("url", "https://example.com"), ("slug", "")])
        .await;

    response.assert_status_ok();
    let slug = common::short_link_slug(&response.text());
    assert_eq!(slug.len(), 5);
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_lowercases_custom_slug() {
    let (server, repo) = common::create_test_server();

    let response = server
        .post("/url")
        .json(&json!({ "slug": "My-Link", "url": "https://example.com" }))
        .await;

    response.assert_status_ok();
    assert!(response.text().contains("http://sho.rt/my-link"));
    assert!(repo.find_by_slug("my-link").await.unwrap().is_some());
    assert!(repo.find_by_slug("My-Link").await.unwrap().is_none());
}

#[tokio::test]
async fn test_create_invalid_url_renders_error() {
    let (server, repo) = common::create_test_server();

    let response = server
        .post("/url")
        .json(&json!({ "url": "example.com" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("url must be a valid URL"));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_missing_url_renders_error() {
    let (server, repo) = common::create_test_server();

    let response = server.post("/url").json(&json!({ "slug": "abc" })).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.text().contains("url is a required field"));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_slug_without_permitted_chars() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/url")
        .json(&json!({ "slug": "!!!", "url": "https://example.com" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_duplicate_slug_conflicts() {
    let (server, repo) = common::create_test_server();

    server
        .post("/url")
        .json(&json!({ "slug": "dup", "url": "https://a.example.com" }))
        .await
        .assert_status_ok();

    let response = server
        .post("/url")
        .json(&json!({ "slug": "DUP", "url": "https://b.example.com" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    assert!(response.text().contains("already in use"));

    let stored = repo.find_by_slug("dup").await.unwrap().unwrap();
    assert_eq!(stored.url, "https://a.example.com");
}

#[tokio::test]
async fn test_create_malformed_json_is_bad_request() {
    let (server, _repo) = common::create_test_server();

    let response = server
        .post("/url")
        .bytes("{not json".into())
        .content_type("application/json")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_concurrent_creates_with_same_slug_keep_one() {
    let (state, repo) = common::create_test_state(SlugPolicy::Lenient);
    let service = state.url_service;

    let first = CreateUrl {
        slug: Some("race".to_string()),
        url: Some("https://a.example.com".to_string()),
    };
    let second = CreateUrl {
        slug: Some("RACE".to_string()),
        url: Some("https://b.example.com".to_string()),
    };

    let (a, b) = tokio::join!(service.create(first), service.create(second));

    let results = [a, b];
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert_eq!(
        results
            .iter()
            .filter(|r| matches!(r, Err(AppError::Conflict { .. })))
            .count(),
        1
    );
    assert_eq!(repo.count().await.unwrap(), 1);

    let winner = results.into_iter().find_map(Result::ok).unwrap();
    let stored = repo.find_by_slug("race").await.unwrap().unwrap();
    assert_eq!(stored.url, winner.url);
}
