//! Infrastructure layer - database and in-memory storage

pub mod database;
pub mod storage;

pub use database::repositories::{
    SeaOrmOrderRepository, SeaOrmRateRepository, SeaOrmRepositoryProvider,
};
pub use database::{init_database, DatabaseConfig};
pub use storage::{
    CachedRateRepository, InMemoryOrderRepository, InMemoryRateRepository,
    InMemoryRepositoryProvider,
};
