//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::debug;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Process-local store keyed by slug.
///
/// Used for local development (`DATABASE_URL=memory://`) and HTTP tests.
/// Contents are lost when the process exits.
#[derive(Debug)]
pub struct MemoryUrlRepository {
    mappings: RwLock<HashMap<String, UrlMapping>>,
    next_id: AtomicI64,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        debug!("Using in-memory URL store");
        Self {
            mappings: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for MemoryUrlRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn poisoned() -> AppError {
    AppError::internal("In-memory store is unavailable", json!({ "reason": "lock poisoned" }))
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let mut mappings = self.mappings.write().map_err(|_| poisoned())?;

        if mappings.contains_key(&new_mapping.slug) {
            return Err(AppError::conflict(
                format!("Slug \"{}\" is already in use", new_mapping.slug),
                json!({ "slug": new_mapping.slug }),
            ));
        }

        let mapping = UrlMapping::new(
            self.next_id.fetch_add(1, Ordering::Relaxed),
            new_mapping.slug,
            new_mapping.url,
            Utc::now(),
        );
        mappings.insert(mapping.slug.clone(), mapping.clone());

        Ok(mapping)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlMapping>, AppError> {
        let mappings = self.mappings.read().map_err(|_| poisoned())?;
        Ok(mappings.get(slug).cloned())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let mappings = self.mappings.read().map_err(|_| poisoned())?;
        Ok(mappings.len() as i64)
    }
}
