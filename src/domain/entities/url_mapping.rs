//! URL mapping entity.

use chrono::{DateTime, Utc};

/// A persisted pairing of a slug and its target URL.
///
/// `id` and `created_at` are assigned by the store on insertion.
/// `slug` is always lowercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub slug: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    pub fn new(id: i64, slug: String, url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            slug,
            url,
            created_at,
        }
    }
}

/// Input for inserting a mapping.
///
/// Only built by [`crate::utils::validation::validate_candidate`], so the slug is
/// already lowercase and the URL is a trimmed absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub slug: String,
    pub url: String,
}
