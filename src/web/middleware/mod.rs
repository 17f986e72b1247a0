//! HTTP middleware applied to every route.

pub mod security_headers;
pub mod tracing;
