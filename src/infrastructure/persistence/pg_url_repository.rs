//! PostgreSQL implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// Name of the unique constraint on `urls.slug`.
const SLUG_CONSTRAINT: &str = "urls_slug_key";

type UrlRow = (i64, String, String, DateTime<Utc>);

/// PostgreSQL repository for URL mappings.
///
/// Slug uniqueness is enforced by the `urls_slug_key` constraint, so concurrent
/// inserts of the same slug leave exactly one row.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn into_mapping((id, slug, url, created_at): UrlRow) -> UrlMapping {
    UrlMapping::new(id, slug, url, created_at)
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_mapping: NewUrlMapping) -> Result<UrlMapping, AppError> {
        let row: UrlRow = sqlx::query_as(
            r#"
            INSERT INTO urls (slug, url)
            VALUES ($1, $2)
            RETURNING id, slug, url, created_at
            "#,
        )
        .bind(&new_mapping.slug)
        .bind(&new_mapping.url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| match AppError::from(e) {
            AppError::Conflict { .. } => AppError::conflict(
                format!("Slug \"{}\" is already in use", new_mapping.slug),
                json!({ "slug": new_mapping.slug, "constraint": SLUG_CONSTRAINT }),
            ),
            other => other,
        })?;

        Ok(into_mapping(row))
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlMapping>, AppError> {
        let row: Option<UrlRow> = sqlx::query_as(
            r#"
            SELECT id, slug, url, created_at
            FROM urls
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(into_mapping))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
