//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::customer::OrderRepository;
use crate::domain::estimate::RateRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::infrastructure::storage::CachedRateRepository;

use super::order_repository::SeaOrmOrderRepository;
use super::rate_repository::SeaOrmRateRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone()).with_rate_cache();
/// let km = repos.rates().distance_between(&from, &to).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    rates: Box<dyn RateRepository>,
    orders: SeaOrmOrderRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            rates: Box::new(SeaOrmRateRepository::new(db.clone())),
            orders: SeaOrmOrderRepository::new(db),
        }
    }

    /// Serve repeated rate lookups from memory
    pub fn with_rate_cache(self) -> Self {
        Self {
            rates: Box::new(CachedRateRepository::new(self.rates)),
            orders: self.orders,
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn rates(&self) -> &dyn RateRepository {
        self.rates.as_ref()
    }

    fn orders(&self) -> &dyn OrderRepository {
        &self.orders
    }
}
