//! Web layer: HTML pages, short link redirects and HTTP middleware.
//!
//! Uses Askama templates for server-side rendering.
//!
//! # Modules
//!
//! - [`extract`] - Request body extractors
//! - [`handlers`] - Page rendering and redirect handlers
//! - [`middleware`] - Tracing and response header middleware
//! - [`routes`] - Route configuration

pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
