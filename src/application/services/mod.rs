//! Application services

mod estimate;

pub use estimate::EstimateService;
