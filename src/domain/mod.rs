pub mod customer;
pub mod estimate;
pub mod repositories;

// Re-export commonly used types
pub use customer::{
    Customer, CustomerId, CustomerOptionService, CustomerPackage, NewCustomer, OrderRepository,
    OrderTransaction,
};
pub use estimate::{
    OptionalServiceType, OrderRequest, PackageType, PrefectureId, PriceBreakdown, RateRepository,
    Season, MAX_BOX_COUNT, PRICE_PER_KILOMETER,
};
pub use repositories::{DomainResult, RepositoryProvider};

// Re-export DomainError from shared for convenience
pub use crate::shared::errors::DomainError;
