//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers
//! and the admin CLI.
//!
//! - [`services::url_service::UrlService`] - Short link creation and resolution

pub mod services;
