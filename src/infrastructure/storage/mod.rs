//! In-memory repositories and the rate cache

mod cached;
mod memory;

pub use cached::CachedRateRepository;
pub use memory::{
    FailurePoint, InMemoryOrderRepository, InMemoryOrderTransaction, InMemoryRateRepository,
    InMemoryRepositoryProvider,
};
