//! Validation of candidate URL mappings.
//!
//! [`validate_candidate`] is the only way to build a
//! [`NewUrlMapping`]: it checks the URL and slug, trims both and lowercases the
//! slug.

use crate::domain::entities::NewUrlMapping;
use crate::error::AppError;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;
use url::Url;

/// Matches a single permitted slug character anywhere in the input.
static SLUG_CHAR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[A-Za-z0-9_-]").unwrap());

/// Matches a slug made only of permitted characters.
static SLUG_FULL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

/// Slugs that collide with fixed routes and would never reach the redirect.
const RESERVED_SLUGS: &[&str] = &["url", "static"];

/// URL schemes a short link may point to.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "ftp"];

/// How strictly user-supplied slugs are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlugPolicy {
    /// The slug must contain at least one of `[A-Za-z0-9_-]`.
    #[default]
    Lenient,
    /// The whole slug must consist of `[A-Za-z0-9_-]`.
    Strict,
}

/// A mapping as submitted, before validation.
#[derive(Debug, Clone, Default)]
pub struct UrlCandidate {
    pub slug: String,
    pub url: Option<String>,
}

/// Validates a candidate and returns the normalized mapping.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the URL is missing, empty, or not an
/// absolute `http`, `https` or `ftp` URL with a host, or if the slug fails
/// `policy` or is reserved.
pub fn validate_candidate(
    candidate: &UrlCandidate,
    policy: SlugPolicy,
) -> Result<NewUrlMapping, AppError> {
    let url = validate_url(candidate.url.as_deref())?;
    let slug = validate_slug(&candidate.slug, policy)?;

    Ok(NewUrlMapping {
        slug: slug.to_lowercase(),
        url,
    })
}

/// Checks that `raw` is present and, once trimmed, an absolute `http`, `https`
/// or `ftp` URL with a host.
///
/// Returns the trimmed URL.
pub fn validate_url(raw: Option<&str>) -> Result<String, AppError> {
    let trimmed = raw.map(str::trim).unwrap_or_default();

    if trimmed.is_empty() {
        return Err(AppError::bad_request(
            "url is a required field",
            json!({ "field": "url" }),
        ));
    }

    match Url::parse(trimmed) {
        Ok(parsed) if !ALLOWED_SCHEMES.contains(&parsed.scheme()) => Err(AppError::bad_request(
            "url must be a valid URL",
            json!({ "field": "url", "reason": "unsupported scheme", "scheme": parsed.scheme() }),
        )),
        Ok(parsed) if parsed.host_str().is_some_and(|h| !h.is_empty()) => Ok(trimmed.to_string()),
        Ok(_) => Err(AppError::bad_request(
            "url must be a valid URL",
            json!({ "field": "url", "reason": "missing host" }),
        )),
        Err(e) => Err(AppError::bad_request(
            "url must be a valid URL",
            json!({ "field": "url", "reason": e.to_string() }),
        )),
    }
}

/// Checks a trimmed slug against `policy`.
///
/// Returns the trimmed slug with its original casing. Reserved slugs are
/// rejected under either policy.
pub fn validate_slug(raw: &str, policy: SlugPolicy) -> Result<String, AppError> {
    let trimmed = raw.trim();

    let valid = match policy {
        SlugPolicy::Lenient => SLUG_CHAR_REGEX.is_match(trimmed),
        SlugPolicy::Strict => SLUG_FULL_REGEX.is_match(trimmed),
    };

    if !valid {
        let message = match policy {
            SlugPolicy::Lenient => {
                "slug must contain at least one letter, digit, underscore or hyphen"
            }
            SlugPolicy::Strict => "slug can only contain letters, digits, underscores and hyphens",
        };
        return Err(AppError::bad_request(
            message,
            json!({ "field": "slug", "slug": raw }),
        ));
    }

    let lowered = trimmed.to_lowercase();
    if RESERVED_SLUGS.contains(&lowered.as_str()) {
        return Err(AppError::bad_request(
            "This slug is reserved",
            json!({ "field": "slug", "slug": raw }),
        ));
    }

    Ok(trimmed.to_string())
}
