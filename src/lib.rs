//! # Moving Estimate
//!
//! Price estimation and order registration for a domestic moving service.
//!
//! ## Architecture
//!
//! - **domain**: prefectures, packages, optional services, pricing rules and repository traits
//! - **application**: [`EstimateService`], the entry point for pricing and registration
//! - **infrastructure**: SeaORM/SQLite storage with seeded rate tables, in-memory stores, rate cache
//! - **app**: startup wiring and tracing setup

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use app::{init_tracing, EstimateApp};
pub use application::EstimateService;
pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};
