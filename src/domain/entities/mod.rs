//! Core domain entities.
//!
//! - [`UrlMapping`] - A stored slug to URL mapping
//! - [`NewUrlMapping`] - A validated, normalized mapping ready for insertion

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
