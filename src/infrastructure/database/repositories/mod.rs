//! Database repository implementations
//!
//! SeaORM repositories for rates and orders + unified RepositoryProvider.

pub mod order_repository;
pub mod rate_repository;
pub mod repository_provider;

pub use order_repository::{SeaOrmOrderRepository, SeaOrmOrderTransaction};
pub use rate_repository::SeaOrmRateRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
