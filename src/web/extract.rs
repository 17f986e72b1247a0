//! Body extractor accepting both form and JSON submissions.

use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::error::AppError;

/// Deserializes the body as JSON when `Content-Type` is `application/json`,
/// and as `application/x-www-form-urlencoded` otherwise.
///
/// A body that cannot be read is rejected with [`AppError::Validation`].
pub struct FormOrJson<T>(pub T);

impl<T, S> FromRequest<S> for FormOrJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        if is_json {
            let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
                AppError::bad_request("Invalid JSON body", json!({ "reason": e.body_text() }))
            })?;
            Ok(Self(value))
        } else {
            let Form(value) = Form::<T>::from_request(req, state).await.map_err(|e| {
                AppError::bad_request("Invalid form body", json!({ "reason": e.body_text() }))
            })?;
            Ok(Self(value))
        }
    }
}
