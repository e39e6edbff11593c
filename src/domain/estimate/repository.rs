//! Rate lookup interface

use async_trait::async_trait;

use super::codes::{OptionalServiceType, PackageType};
use super::model::PrefectureId;
use crate::domain::DomainResult;

/// Read-only business rates consumed by pricing.
///
/// Every lookup that cannot be resolved returns `DomainError::NotFound`;
/// callers never substitute a default.
#[async_trait]
pub trait RateRepository: Send + Sync {
    /// Distance in kilometres between two prefectures
    async fn distance_between(&self, from: &PrefectureId, to: &PrefectureId) -> DomainResult<f64>;

    /// Price of the cheapest truck that holds `box_count` box-equivalents
    async fn truck_price_for_box_count(&self, box_count: i32) -> DomainResult<i32>;

    /// Box-equivalents per item, keyed by `PackageType::code`
    async fn box_multiplier_for_package_type(&self, package: PackageType) -> DomainResult<i32>;

    /// Price of an optional service, keyed by `OptionalServiceType::code`
    async fn optional_service_price(&self, service: OptionalServiceType) -> DomainResult<i32>;
}
