//! Domain layer containing the URL mapping entity and its storage contract.
//!
//! The domain has no dependencies on infrastructure or presentation layers.
//! Repository traits defined here are implemented in
//! [`crate::infrastructure::persistence`] and consumed by
//! [`crate::application::services`].
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions

pub mod entities;
pub mod repositories;
