#[cfg(feature = "postgres")]
use std::sync::Arc;
#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Configuration for the posts database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Handle to the database pool.
///
/// Opened once at startup, handed to the store, and closed at shutdown.
///
/// # Example
/// ```ignore
/// let db = DatabaseConnections::init(&config).await?;
/// let repo = PostgresPostRepository::shared(db.main.clone());
/// // ... serve ...
/// db.close().await?;
/// ```
#[cfg(feature = "postgres")]
pub struct DatabaseConnections {
    /// Shared with the store; the pool itself is not cloned.
    pub main: Arc<DbConn>,
}

#[cfg(not(feature = "postgres"))]
pub struct DatabaseConnections;

#[cfg(feature = "postgres")]
impl DatabaseConnections {
    /// Open the pool described by `config`.
    pub async fn init(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Initializing database connection...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(true)
            .to_owned();

        let main = Database::connect(opts).await?;
        tracing::info!("Database connected (pool: {})", config.max_connections);

        Ok(Self {
            main: Arc::new(main),
        })
    }

    /// Check that the database still answers.
    pub async fn ping(&self) -> bool {
        match self.main.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Database ping failed: {}", e);
                false
            }
        }
    }

    /// Close the pool. Stores sharing `main` stop working afterwards.
    pub async fn close(&self) -> Result<(), DbErr> {
        tracing::info!("Closing database connection");
        self.main.close_by_ref().await
    }
}
