//! Landing page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::Query, response::IntoResponse};
use serde::Deserialize;

/// Query parameters accepted by the landing page.
#[derive(Debug, Default, Deserialize)]
pub struct LandingQuery {
    /// Message left by a failed redirect.
    pub error: Option<String>,
}

/// Template for the landing page.
///
/// Renders `templates/landing.html` with the creation form and, when present,
/// the error message from the query string.
#[derive(Template, WebTemplate)]
#[template(path = "landing.html")]
pub struct LandingTemplate {
    pub error: Option<String>,
}

/// Renders the landing page.
///
/// # Endpoint
///
/// `GET /`
pub async fn landing_handler(Query(query): Query<LandingQuery>) -> impl IntoResponse {
    LandingTemplate {
        error: query.error.filter(|e| !e.is_empty()),
    }
}
