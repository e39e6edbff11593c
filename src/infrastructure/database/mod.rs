pub mod entities;
pub mod migrator;
pub mod repositories;

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./estimate.db?mode=rwc")
    pub url: String,
    /// Pool size; SQLite in-memory databases must use 1
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./estimate.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

impl DatabaseConfig {
    /// Private in-memory SQLite database, single connection
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }

    /// Create config from environment variable
    pub fn from_env() -> Self {
        Self {
            url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://./estimate.db?mode=rwc".to_string()),
            ..Self::default()
        }
    }
}

/// Initialize database connection
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, sea_orm::DbErr> {
    info!("Connecting to database: {}", config.url);

    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    info!("Database connected successfully");
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_reads_database_url() {
        std::env::set_var("DATABASE_URL", "sqlite://./from-env.db?mode=rwc");
        let config = DatabaseConfig::from_env();
        std::env::remove_var("DATABASE_URL");

        assert_eq!(config.url, "sqlite://./from-env.db?mode=rwc");
        assert_eq!(config.max_connections, DatabaseConfig::default().max_connections);

        let fallback = DatabaseConfig::from_env();
        assert_eq!(fallback.url, DatabaseConfig::default().url);
    }
}
