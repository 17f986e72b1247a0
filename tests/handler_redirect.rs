mod common;

use axum::http::StatusCode;
use serde_json::json;
use snipurl::domain::entities::NewUrlMapping;
use snipurl::domain::repositories::UrlRepository;

#[tokio::test]
async fn test_redirect_success() {
    let (server, repo) = common::create_test_server();
    repo.create(NewUrlMapping {
        slug: "target".to_string(),
        url: "https://example.com/target".to_string(),
    })
    .await
    .unwrap();

    let response = server.get("/target").await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com/target");
}

#[tokio::test]
async fn test_redirect_not_found_goes_to_landing() {
    let (server, _repo) = common::create_test_server();

    let response = server.get("/missing").await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "/?error=missing+not+found");
}

#[tokio::test]
async fn test_generated_slug_round_trip() {
    let (server, _repo) = common::create_test_server();

    let created = server
        .post("/url")
        .json(&json!({ "url": "https://example.com" }))
        .await;
    created.assert_status_ok();
    let slug = common::short_link_slug(&created.text());

    let response = server.get(&format!("/{slug}")).await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_mixed_case_slug_lookup_is_case_sensitive() {
    let (server, _repo) = common::create_test_server();

    server
        .post("/url")
        .json(&json!({ "slug": "My-Link", "url": "https://example.com" }))
        .await
        .assert_status_ok();

    let miss = server.get("/My-Link").await;
    assert_eq!(miss.status_code(), StatusCode::TEMPORARY_REDIRECT);
    let location = miss.header("location");
    let location = location.to_str().unwrap();
    assert!(location.starts_with("/?error="));
    assert!(location.contains("My-Link"));

    let hit = server.get("/my-link").await;
    assert_eq!(hit.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(hit.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_not_found_message_shown_on_landing() {
    let (server, _repo) = common::create_test_server();

    let miss = server.get("/nope").await;
    let location = miss.header("location").to_str().unwrap().to_string();
    let query = location.strip_prefix("/?").unwrap();
    let (key, message) = url::form_urlencoded::parse(query.as_bytes())
        .next()
        .unwrap();
    assert_eq!(key, "error");

    let landing = server
        .get("/")
        .add_query_param("error", &*message)
        .await;

    landing.assert_status_ok();
    assert!(landing.text().contains("nope not found"));
}

#[tokio::test]
async fn test_route_names_cannot_be_claimed_as_slugs() {
    let (server, repo) = common::create_test_server();

    for slug in ["url", "static", "Static"] {
        let response = server
            .post("/url")
            .json(&json!({ "slug": slug, "url": "https://example.com" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert!(response.text().contains("This slug is reserved"));
    }

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_script_url_is_never_redirected_to() {
    let (server, repo) = common::create_test_server();

    let response = server
        .post("/url")
        .json(&json!({ "slug": "x", "url": "javascript://example.com/%0aalert(1)" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(repo.count().await.unwrap(), 0);

    let miss = server.get("/x").await;
    assert_eq!(miss.status_code(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(miss.header("location"), "/?error=x+not+found");
}
