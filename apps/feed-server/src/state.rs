//! Application state - shared across all handlers.

use std::sync::Arc;

use blogfeed_core::ports::ContentStore;
use blogfeed_infra::{DatabaseConfig, InMemoryContentStore};

#[cfg(feature = "postgres")]
use blogfeed_infra::PostgresContentStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<dyn ContentStore>,
    /// Name of the backing store, reported by the health check.
    pub store_kind: &'static str,
}

impl AppState {
    pub fn with_store(content: Arc<dyn ContentStore>, store_kind: &'static str) -> Self {
        Self {
            content,
            store_kind,
        }
    }

    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryContentStore::new()), "memory")
    }

    /// Build the application state with the appropriate content store.
    #[cfg(feature = "postgres")]
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Self::in_memory();
        };

        match blogfeed_infra::database::connect(config).await {
            Ok(conn) => {
                tracing::info!("Application state initialized with PostgreSQL content store");
                Self::with_store(Arc::new(PostgresContentStore::new(conn)), "postgres")
            }
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Self::in_memory()
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        if db_config.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
        }
        tracing::info!("Running without postgres feature - using in-memory content store");
        Self::in_memory()
    }
}
