//! Application state - shared across all handlers.

use std::sync::Arc;

use posts_core::PostService;
use posts_core::ports::PostRepository;
use posts_infra::{DatabaseConfig, DatabaseConnections, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use posts_infra::PostgresPostRepository;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build the application state with the store the configuration asks for.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let state = {
            if let Some(config) = db_config {
                match DatabaseConnections::init(config).await {
                    Ok(connections) => {
                        let conn = Arc::new(connections);
                        let repo = Arc::new(PostgresPostRepository::shared(conn.main.clone()));
                        Self::with_store(repo, Some(conn))
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory store.",
                            e
                        );
                        Self::in_memory()
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running with the in-memory store.");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            if db_config.is_some() {
                tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
            }
            tracing::info!("Running without postgres feature - using in-memory store");
            Self::in_memory()
        };

        tracing::info!(store = state.store_kind(), "Application state initialized");
        state
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemoryPostRepository::new()), None)
    }

    fn with_store(repo: Arc<dyn PostRepository>, db: Option<Arc<DatabaseConnections>>) -> Self {
        Self {
            posts: PostService::new(repo),
            db,
        }
    }

    pub fn store_kind(&self) -> &'static str {
        if self.db.is_some() { "postgres" } else { "memory" }
    }

    /// Whether the store is reachable. The in-memory store always is.
    pub async fn store_healthy(&self) -> bool {
        match &self.db {
            #[cfg(feature = "postgres")]
            Some(db) => db.ping().await,
            #[cfg(not(feature = "postgres"))]
            Some(_) => true,
            None => true,
        }
    }

    /// Release the database pool, if any.
    #[cfg(feature = "postgres")]
    pub async fn shutdown(&self) {
        if let Some(db) = &self.db
            && let Err(e) = db.close().await
        {
            tracing::error!("Failed to close database connection: {}", e);
        }
    }

    #[cfg(not(feature = "postgres"))]
    pub async fn shutdown(&self) {}
}
