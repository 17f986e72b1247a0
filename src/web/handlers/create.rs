//! Short link creation handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use serde::Deserialize;

use crate::application::services::CreateUrl;
use crate::domain::entities::UrlMapping;
use crate::error::AppError;
use crate::state::AppState;
use crate::web::extract::FormOrJson;

/// Body of `POST /url`.
///
/// Both fields are optional at this level so that a missing `url` is reported by
/// validation rather than by the body decoder.
#[derive(Debug, Default, Deserialize)]
pub struct CreateUrlForm {
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl From<CreateUrlForm> for CreateUrl {
    fn from(form: CreateUrlForm) -> Self {
        Self {
            slug: form.slug,
            url: form.url,
        }
    }
}

/// Template for the created link page.
#[derive(Template, WebTemplate)]
#[template(path = "created.html")]
pub struct CreatedTemplate {
    pub created: UrlMapping,
    pub short_url: String,
}

/// Creates a short link and renders it.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// Form-encoded or JSON:
///
/// ```json
/// { "url": "https://example.com", "slug": "my-link" }
/// ```
///
/// # Errors
///
/// Failures are rendered by [`AppError`]'s error page:
/// - 400 for an invalid URL, slug or body
/// - 409 when the slug is already in use
/// - 500 on storage errors
pub async fn create_handler(
    State(state): State<AppState>,
    FormOrJson(form): FormOrJson<CreateUrlForm>,
) -> Result<CreatedTemplate, AppError> {
    let created = state.url_service.create(form.into()).await?;
    let short_url = state.url_service.short_url(&created.slug);

    Ok(CreatedTemplate { created, short_url })
}
