//! Handler for short link redirects.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use url::{Url, form_urlencoded};

use crate::state::AppState;

/// Redirects a slug to its stored URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// The slug is looked up exactly as requested. A miss or lookup failure never
/// produces an error page: the visitor is sent to `/?error=<message>` instead.
pub async fn redirect_handler(Path(slug): Path<String>, State(state): State<AppState>) -> Redirect {
    match state.url_service.resolve(&slug).await {
        Ok(mapping) => match location(&mapping.url) {
            Some(target) => Redirect::temporary(&target),
            None => Redirect::temporary(&landing_with_error(&format!("{slug} not found"))),
        },
        Err(e) => Redirect::temporary(&landing_with_error(e.message())),
    }
}

/// Landing page URL carrying `message` in the `error` query parameter.
pub fn landing_with_error(message: &str) -> String {
    let query: String = form_urlencoded::Serializer::new(String::new())
        .append_pair("error", message)
        .finish();
    format!("/?{query}")
}

/// Header-safe redirect target for a stored URL.
///
/// Printable ASCII URLs are used verbatim; anything else is re-serialized by the
/// URL parser, which percent-encodes and punycodes it.
fn location(stored: &str) -> Option<String> {
    if stored.bytes().all(|b| b.is_ascii_graphic()) {
        return Some(stored.to_string());
    }
    Url::parse(stored).ok().map(String::from)
}
