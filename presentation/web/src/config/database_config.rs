use std::env;
use std::sync::Arc;

use anyhow::Context;
use business::domain::product::repository::ProductRepository;
use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use persistence::product::memory::ProductRepositoryInMemory;
use persistence::product::repository::ProductRepositoryPostgres;

const DEFAULT_MIGRATIONS_PATH: &str = "./infrastructure/persistence/migrations";

/// Where products are stored
pub enum StorageConfig {
    Postgres {
        database: DatabaseConfig,
        migrations_path: String,
    },
    InMemory,
}

impl StorageConfig {
    /// Environment variables:
    /// - DATABASE_URL: PostgreSQL connection string (optional; in-memory store when unset)
    /// - DATABASE_MAX_CONNECTIONS: pool size (default: 5)
    /// - MIGRATIONS_PATH: sqlx migrations directory (default: "./infrastructure/persistence/migrations")
    pub fn from_env() -> anyhow::Result<Self> {
        let Ok(db_url) = env::var("DATABASE_URL") else {
            return Ok(StorageConfig::InMemory);
        };

        let mut database = DatabaseConfig::new(db_url);
        if let Ok(max) = env::var("DATABASE_MAX_CONNECTIONS") {
            let max = max
                .trim()
                .parse::<u32>()
                .context("DATABASE_MAX_CONNECTIONS must be a positive integer")?;
            database = database.with_max_connections(max);
        }

        let migrations_path =
            env::var("MIGRATIONS_PATH").unwrap_or_else(|_| DEFAULT_MIGRATIONS_PATH.to_string());

        Ok(StorageConfig::Postgres {
            database,
            migrations_path,
        })
    }
}

/// Initialize the product repository for the configured storage
///
/// # Errors
/// Returns error if the database connection or the migrations fail
pub async fn init_repository(config: &StorageConfig) -> anyhow::Result<Arc<dyn ProductRepository>> {
    match config {
        StorageConfig::Postgres {
            database,
            migrations_path,
        } => {
            let pool = create_postgres_pool(database).await?;
            run_migrations(&pool, migrations_path).await?;
            tracing::info!("Using PostgreSQL product store");
            Ok(Arc::new(ProductRepositoryPostgres::new(pool)))
        }
        StorageConfig::InMemory => {
            tracing::warn!("DATABASE_URL not set; products are kept in memory only");
            Ok(Arc::new(ProductRepositoryInMemory::new()))
        }
    }
}
