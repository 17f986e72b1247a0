//! Storage implementations of the domain repository traits.
//!
//! - [`PgUrlRepository`] - PostgreSQL storage via SQLx
//! - [`MemoryUrlRepository`] - process-local storage
//! - [`Store`] - owned store handle selecting one of the above

pub mod memory_url_repository;
pub mod pg_url_repository;
pub mod store;

pub use memory_url_repository::MemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;
pub use store::Store;
