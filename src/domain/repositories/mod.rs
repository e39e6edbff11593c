//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to the rate and order repositories
//! - `DomainResult`: standard result type for domain operations

use super::customer::OrderRepository;
use super::estimate::RateRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let km = repos.rates().distance_between(&from, &to).await?;
///     let customer = repos.orders().find_customer(1).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn rates(&self) -> &dyn RateRepository;
    fn orders(&self) -> &dyn OrderRepository;
}
