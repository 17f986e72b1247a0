#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use std::sync::Arc;
use snipurl::application::services::UrlService;
use snipurl::infrastructure::persistence::MemoryUrlRepository;
use snipurl::routes::app_router;
use snipurl::state::AppState;
use snipurl::utils::validation::SlugPolicy;

pub const BASE_URL: &str = "http://sho.rt";

pub fn create_test_state(policy: SlugPolicy) -> (AppState, Arc<MemoryUrlRepository>) {
    let repo = Arc::new(MemoryUrlRepository::new());
    let url_service = Arc::new(UrlService::new(repo.clone(), BASE_URL, policy));

    (AppState::new(url_service), repo)
}

pub fn create_test_app(state: AppState) -> Router {
    app_router(state, "public")
}

pub fn create_test_server() -> (TestServer, Arc<MemoryUrlRepository>) {
    let (state, repo) = create_test_state(SlugPolicy::Lenient);
    let server = TestServer::new(create_test_app(state)).unwrap();
    (server, repo)
}

/// Extracts the slug from the short link shown on the created page.
pub fn short_link_slug(html: &str) -> String {
    let marker = format!("href=\"{}/", BASE_URL);
    let start = html.find(&marker).expect("short link in page") + marker.len();
    html[start..]
        .chars()
        .take_while(|c| *c != '"')
        .collect()
}
