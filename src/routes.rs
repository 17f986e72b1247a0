//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`          - Landing page
//! - `POST /url`       - Create a short link
//! - `GET  /{slug}`    - Short link redirect
//! - `/static/*`       - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive cross-origin access
//! - **Security headers** - `nosniff`, frame and referrer policies

use crate::state::AppState;
use crate::web;
use crate::web::middleware::{security_headers, tracing};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `static_dir` - directory served under `/static`
pub fn app_router(state: AppState, static_dir: &str) -> Router {
    let router = web::routes::routes()
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
        .layer(CorsLayer::permissive());

    security_headers::apply(router).layer(tracing::layer())
}
