//! Read-through cache in front of a rate repository
//!
//! Rates are fixed business policy, so successful lookups are kept for the
//! lifetime of the cache. Failures are never cached.

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::trace;

use crate::domain::estimate::{OptionalServiceType, PackageType, PrefectureId, RateRepository};
use crate::domain::DomainResult;

pub struct CachedRateRepository<R: ?Sized = dyn RateRepository> {
    distances: DashMap<(String, String), f64>,
    truck_prices: DashMap<i32, i32>,
    box_multipliers: DashMap<i32, i32>,
    service_prices: DashMap<i32, i32>,
    inner: Box<R>,
}

impl<R: RateRepository + ?Sized> CachedRateRepository<R> {
    pub fn new(inner: Box<R>) -> Self {
        Self {
            distances: DashMap::new(),
            truck_prices: DashMap::new(),
            box_multipliers: DashMap::new(),
            service_prices: DashMap::new(),
            inner,
        }
    }

    /// Drop every cached entry
    pub fn clear(&self) {
        self.distances.clear();
        self.truck_prices.clear();
        self.box_multipliers.clear();
        self.service_prices.clear();
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

#[async_trait]
impl<R: RateRepository + ?Sized> RateRepository for CachedRateRepository<R> {
    async fn distance_between(&self, from: &PrefectureId, to: &PrefectureId) -> DomainResult<f64> {
        let key = (from.as_str().to_string(), to.as_str().to_string());
        if let Some(km) = self.distances.get(&key) {
            trace!("distance cache hit {}→{}", from, to);
            return Ok(*km);
        }
        let km = self.inner.distance_between(from, to).await?;
        self.distances.insert(key, km);
        Ok(km)
    }

    async fn truck_price_for_box_count(&self, box_count: i32) -> DomainResult<i32> {
        if let Some(price) = self.truck_prices.get(&box_count) {
            return Ok(*price);
        }
        let price = self.inner.truck_price_for_box_count(box_count).await?;
        self.truck_prices.insert(box_count, price);
        Ok(price)
    }

    async fn box_multiplier_for_package_type(&self, package: PackageType) -> DomainResult<i32> {
        if let Some(boxes) = self.box_multipliers.get(&package.code()) {
            return Ok(*boxes);
        }
        let boxes = self.inner.box_multiplier_for_package_type(package).await?;
        self.box_multipliers.insert(package.code(), boxes);
        Ok(boxes)
    }

    async fn optional_service_price(&self, service: OptionalServiceType) -> DomainResult<i32> {
        if let Some(price) = self.service_prices.get(&service.code()) {
            return Ok(*price);
        }
        let price = self.inner.optional_service_price(service).await?;
        self.service_prices.insert(service.code(), price);
        Ok(price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryRateRepository;

    fn pref(code: &str) -> PrefectureId {
        PrefectureId::parse(code).unwrap()
    }

    #[tokio::test]
    async fn repeated_lookups_hit_cache() {
        let inner = InMemoryRateRepository::standard().with_distance("13", "27", 500.0);
        let cache = CachedRateRepository::new(Box::new(inner));

        for _ in 0..3 {
            assert_eq!(
                cache.distance_between(&pref("13"), &pref("27")).await.unwrap(),
                500.0
            );
            assert_eq!(cache.truck_price_for_box_count(4).await.unwrap(), 30000);
            assert_eq!(
                cache
                    .box_multiplier_for_package_type(PackageType::Bed)
                    .await
                    .unwrap(),
                15
            );
        }

        assert_eq!(cache.inner().lookup_count(), 3);
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let cache = CachedRateRepository::new(Box::new(InMemoryRateRepository::new()));

        assert!(cache.truck_price_for_box_count(10).await.is_err());
        assert!(cache.truck_price_for_box_count(10).await.is_err());
        assert_eq!(cache.inner().lookup_count(), 2);
    }

    #[tokio::test]
    async fn clear_forces_reload() {
        let cache = CachedRateRepository::new(Box::new(InMemoryRateRepository::standard()));
        cache
            .optional_service_price(OptionalServiceType::Iwate)
            .await
            .unwrap();
        cache.clear();
        cache
            .optional_service_price(OptionalServiceType::Iwate)
            .await
            .unwrap();
        assert_eq!(cache.inner().lookup_count(), 2);
    }
}
