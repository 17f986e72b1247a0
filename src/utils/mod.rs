//! Pure helpers used by the mapping service.
//!
//! - [`slug_generator`] - Random slug generation
//! - [`validation`] - Candidate mapping validation and normalization

pub mod slug_generator;
pub mod validation;
