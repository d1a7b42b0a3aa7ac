//! # Blogfeed Infrastructure
//!
//! Concrete implementations of the ports defined in `blogfeed-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL content store via SeaORM

pub mod content;
pub mod database;

// Re-exports - In-Memory
pub use content::InMemoryContentStore;
pub use database::DatabaseConfig;

// Re-exports - PostgreSQL
#[cfg(feature = "postgres")]
pub use database::{PostgresArticleRepository, PostgresBlogRepository, PostgresContentStore};
