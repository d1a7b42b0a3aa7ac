//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod content_store;
mod repository;

pub use content_store::ContentStore;
pub use repository::{ArticleRepository, BaseRepository, BlogRepository};
