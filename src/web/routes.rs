//! Web route configuration.

use crate::state::AppState;
use crate::web::handlers::{create_handler, landing_handler, redirect_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Public routes.
///
/// # Endpoints
///
/// - `GET  /`        - Landing page with the creation form
/// - `POST /url`     - Create a short link
/// - `GET  /{slug}`  - Redirect to the stored URL
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(landing_handler))
        .route("/url", post(create_handler))
        .route("/{slug}", get(redirect_handler))
}
