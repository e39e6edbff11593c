pub mod services;

pub use services::EstimateService;
