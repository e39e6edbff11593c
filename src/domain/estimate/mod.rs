//! Estimate aggregate
//!
//! Order request, fixed code sets, the price breakdown and the rate
//! lookups pricing depends on.

pub mod codes;
pub mod model;
pub mod pricing;
pub mod repository;

pub use codes::{OptionalServiceType, PackageType};
pub use model::{
    OrderRequest, PrefectureId, PriceBreakdown, Season, MAX_BOX_COUNT, PRICE_PER_KILOMETER,
};
pub use repository::RateRepository;
