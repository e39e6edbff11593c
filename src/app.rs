//! Application runtime.
//!
//! [`EstimateApp`] owns the database connection and wires the repository
//! provider into an [`EstimateService`]: connect, migrate, build, and
//! close on shutdown.

use std::path::Path;
use std::sync::Arc;

use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use crate::application::EstimateService;
use crate::config::AppConfig;
use crate::domain::RepositoryProvider;
use crate::infrastructure::database::migrator::Migrator;
use crate::infrastructure::{init_database, SeaOrmRepositoryProvider};
use crate::shared::{AppError, InfraError};

/// Handle to a started application.
///
/// ```rust,no_run
/// use moving_estimate::app::EstimateApp;
/// use moving_estimate::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let app = EstimateApp::start(AppConfig::default()).await?;
///     // ... serve requests through app.service ...
///     app.shutdown().await;
///     Ok(())
/// }
/// ```
pub struct EstimateApp {
    pub service: Arc<EstimateService>,
    pub repos: Arc<dyn RepositoryProvider>,
    /// The configuration the app was started with.
    pub config: AppConfig,

    db: DatabaseConnection,
}

impl EstimateApp {
    /// Connect to the database, apply migrations (schema and rate seeds),
    /// and build the service.
    pub async fn start(config: AppConfig) -> Result<Self, AppError> {
        info!("Starting moving estimate service...");

        let db = match init_database(&config.database.to_database_config()).await {
            Ok(db) => db,
            Err(e) => {
                error!("Failed to connect to database: {}", e);
                return Err(InfraError::Database(e).into());
            }
        };

        info!("Running database migrations...");
        if let Err(e) = Migrator::up(&db, None).await {
            error!("Failed to run migrations: {}", e);
            return Err(InfraError::Database(e).into());
        }
        info!("Migrations completed");

        let provider = SeaOrmRepositoryProvider::new(db.clone());
        let repos: Arc<dyn RepositoryProvider> = if config.rates.cache {
            info!("Rate cache enabled");
            Arc::new(provider.with_rate_cache())
        } else {
            Arc::new(provider)
        };

        let service = Arc::new(EstimateService::new(repos.clone()));

        Ok(Self {
            service,
            repos,
            config,
            db,
        })
    }

    /// Load the TOML config at `path` (defaults if absent) and start.
    pub async fn start_from_file(path: &Path) -> Result<Self, AppError> {
        let config = match AppConfig::load_or_default(path) {
            Ok(config) => config,
            Err(e) => {
                error!("Failed to load config {}: {}", path.display(), e);
                return Err(InfraError::Config(e).into());
            }
        };
        info!("Configuration loaded from {}", path.display());
        Self::start(config).await
    }

    /// Close the database connection.
    pub async fn shutdown(self) {
        info!("Shutting down moving estimate service...");
        if let Err(e) = self.db.close().await {
            warn!("Error closing database connection: {}", e);
        } else {
            info!("Database connection closed");
        }
    }
}

/// Initialize tracing (logging) from the application config.
///
/// Call this once at process startup (before [`EstimateApp::start`]).
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseSection;

    fn in_memory_config(cache: bool) -> AppConfig {
        let mut config = AppConfig {
            database: DatabaseSection {
                url: "sqlite::memory:".to_string(),
                max_connections: 1,
            },
            ..AppConfig::default()
        };
        config.rates.cache = cache;
        config
    }

    #[tokio::test]
    async fn starts_on_empty_database() {
        for cache in [true, false] {
            let app = EstimateApp::start(in_memory_config(cache)).await.unwrap();
            assert_eq!(app.repos.orders().count_customers().await.unwrap(), 0);
            assert_eq!(app.repos.rates().truck_price_for_box_count(80).await.unwrap(), 30000);
            app.shutdown().await;
        }
    }

    #[tokio::test]
    async fn starts_from_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[database]\nurl = \"sqlite::memory:\"\nmax_connections = 1\n[rates]\ncache = false\n",
        )
        .unwrap();

        let app = EstimateApp::start_from_file(&path).await.unwrap();
        assert!(!app.config.rates.cache);
        assert_eq!(app.config.database.url, "sqlite::memory:");
        app.shutdown().await;
    }

    #[tokio::test]
    async fn malformed_config_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[database\nurl = ").unwrap();

        let err = EstimateApp::start_from_file(&path).await.err().unwrap();
        assert!(matches!(err, AppError::Infra(InfraError::Config(_))));
    }

    #[tokio::test]
    async fn bad_url_is_a_database_error() {
        let mut config = in_memory_config(false);
        config.database.url = "sqlite:///nonexistent-dir/sub/estimate.db".to_string();

        let err = EstimateApp::start(config).await.err().unwrap();
        assert!(matches!(err, AppError::Infra(InfraError::Database(_))));
    }
}
