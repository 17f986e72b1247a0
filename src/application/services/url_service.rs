//! Short link creation and resolution service.

use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::slug_generator::generate_slug;
use crate::utils::validation::{SlugPolicy, UrlCandidate, validate_candidate};
use serde_json::json;
use tracing::{debug, info, warn};

/// Request to create a short link.
#[derive(Debug, Clone, Default)]
pub struct CreateUrl {
    pub slug: Option<String>,
    pub url: Option<String>,
}

/// Service for creating and resolving short links.
///
/// Holds the injected repository; it keeps no other state between requests.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    base_url: String,
    slug_policy: SlugPolicy,
}

impl UrlService {
    /// Creates a new URL service.
    ///
    /// `base_url` is the prefix of displayed short links; a trailing slash is ignored.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        base_url: impl Into<String>,
        slug_policy: SlugPolicy,
    ) -> Self {
        Self {
            repository,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            slug_policy,
        }
    }

    /// Creates a short link.
    ///
    /// An absent or empty slug is replaced by a generated one. Generated slugs are
    /// not checked against existing records; a collision surfaces as a conflict
    /// from the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL or slug is invalid.
    /// Returns [`AppError::Conflict`] if the slug already exists.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create(&self, input: CreateUrl) -> Result<UrlMapping, AppError> {
        let slug = match input.slug {
            Some(slug) if !slug.is_empty() => slug,
            _ => generate_slug(),
        };

        let candidate = UrlCandidate {
            slug,
            url: input.url,
        };
        let new_mapping = validate_candidate(&candidate, self.slug_policy)?;

        let created = self.repository.create(new_mapping).await?;
        info!(slug = %created.slug, id = created.id, "Short link created");

        Ok(created)
    }

    /// Resolves a slug to its mapping.
    ///
    /// The slug is matched exactly as given; no case folding is applied even
    /// though stored slugs are lowercase.
    ///
    /// # Errors
    ///
    /// Always returns [`AppError::NotFound`] on failure. A storage error is logged
    /// and reported as not found.
    pub async fn resolve(&self, slug: &str) -> Result<UrlMapping, AppError> {
        match self.repository.find_by_slug(slug).await {
            Ok(Some(mapping)) => {
                debug!(slug, "Resolved short link");
                Ok(mapping)
            }
            Ok(None) => Err(AppError::not_found(
                format!("{slug} not found"),
                json!({ "slug": slug }),
            )),
            Err(e) => {
                warn!(slug, error = %e, "Lookup failed");
                Err(AppError::not_found("Link not found", json!({ "slug": slug })))
            }
        }
    }

    /// Number of stored mappings.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Composes the shareable short link for `slug`.
    pub fn short_url(&self, slug: &str) -> String {
        format!("{}/{}", self.base_url, slug)
    }
}
