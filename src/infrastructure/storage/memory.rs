//! In-memory rate and order storage for development and testing

use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use crate::domain::customer::{
    Customer, CustomerId, CustomerOptionService, CustomerPackage, NewCustomer, OrderRepository,
    OrderTransaction,
};
use crate::domain::estimate::{OptionalServiceType, PackageType, PrefectureId, RateRepository};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::{DomainError, DomainResult};

// ── InMemoryRateRepository ──────────────────────────────────────

/// Rate tables held in memory. Distances are symmetric.
pub struct InMemoryRateRepository {
    distances: DashMap<(String, String), f64>,
    /// truck_id -> (max_box, price)
    trucks: DashMap<i32, (i32, i32)>,
    box_multipliers: DashMap<i32, i32>,
    service_prices: DashMap<i32, i32>,
    lookups: AtomicUsize,
}

impl InMemoryRateRepository {
    /// Empty tables; every lookup fails until populated
    pub fn new() -> Self {
        Self {
            distances: DashMap::new(),
            trucks: DashMap::new(),
            box_multipliers: DashMap::new(),
            service_prices: DashMap::new(),
            lookups: AtomicUsize::new(0),
        }
    }

    /// Same trucks, multipliers and service prices the migrations seed.
    /// Distances are left empty.
    pub fn standard() -> Self {
        Self::new()
            .with_truck(80, 30000)
            .with_truck(200, 50000)
            .with_box_multiplier(PackageType::Box, 1)
            .with_box_multiplier(PackageType::Bed, 15)
            .with_box_multiplier(PackageType::Bicycle, 5)
            .with_box_multiplier(PackageType::WashingMachine, 10)
            .with_service_price(OptionalServiceType::WashingMachineInstall, 3000)
            .with_service_price(OptionalServiceType::Hokkaido, 10000)
            .with_service_price(OptionalServiceType::Iwate, 5000)
            .with_service_price(OptionalServiceType::Fukushima, 5000)
    }

    pub fn with_distance(self, from: &str, to: &str, km: f64) -> Self {
        self.distances.insert(Self::pair_key(from, to), km);
        self
    }

    pub fn with_truck(self, max_box: i32, price: i32) -> Self {
        let truck_id = self.trucks.len() as i32 + 1;
        self.trucks.insert(truck_id, (max_box, price));
        self
    }

    pub fn with_box_multiplier(self, package: PackageType, boxes: i32) -> Self {
        self.box_multipliers.insert(package.code(), boxes);
        self
    }

    pub fn with_service_price(self, service: OptionalServiceType, price: i32) -> Self {
        self.service_prices.insert(service.code(), price);
        self
    }

    /// Number of lookups served so far
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn pair_key(a: &str, b: &str) -> (String, String) {
        if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        }
    }

    fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::SeqCst);
    }
}

impl Default for InMemoryRateRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateRepository for InMemoryRateRepository {
    async fn distance_between(&self, from: &PrefectureId, to: &PrefectureId) -> DomainResult<f64> {
        self.record_lookup();
        if from == to {
            return Ok(0.0);
        }
        self.distances
            .get(&Self::pair_key(from.as_str(), to.as_str()))
            .map(|km| *km)
            .ok_or_else(|| DomainError::NotFound {
                entity: "PrefectureDistance",
                field: "from_prefecture_id,to_prefecture_id",
                value: format!("{},{}", from, to),
            })
    }

    async fn truck_price_for_box_count(&self, box_count: i32) -> DomainResult<i32> {
        self.record_lookup();
        self.trucks
            .iter()
            .filter(|t| t.value().0 >= box_count)
            .map(|t| t.value().1)
            .min()
            .ok_or_else(|| DomainError::NotFound {
                entity: "TruckCapacity",
                field: "max_box",
                value: box_count.to_string(),
            })
    }

    async fn box_multiplier_for_package_type(&self, package: PackageType) -> DomainResult<i32> {
        self.record_lookup();
        self.box_multipliers
            .get(&package.code())
            .map(|b| *b)
            .ok_or_else(|| DomainError::NotFound {
                entity: "PackageContent",
                field: "package_id",
                value: package.code().to_string(),
            })
    }

    async fn optional_service_price(&self, service: OptionalServiceType) -> DomainResult<i32> {
        self.record_lookup();
        self.service_prices
            .get(&service.code())
            .map(|p| *p)
            .ok_or_else(|| DomainError::NotFound {
                entity: "OptionalService",
                field: "service_id",
                value: service.code().to_string(),
            })
    }
}

// ── InMemoryOrderRepository ─────────────────────────────────────

/// Step at which an in-memory transaction is told to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePoint {
    InsertCustomer,
    InsertOptionalService,
    InsertPackages,
    Commit,
}

#[derive(Default)]
struct OrderTables {
    customers: DashMap<CustomerId, Customer>,
    option_services: DashMap<CustomerId, Vec<CustomerOptionService>>,
    packages: DashMap<CustomerId, Vec<CustomerPackage>>,
    customer_counter: AtomicI32,
}

/// Order store with staged writes; only `commit` makes rows visible
pub struct InMemoryOrderRepository {
    tables: Arc<OrderTables>,
    failure: Option<FailurePoint>,
}

impl InMemoryOrderRepository {
    pub fn new() -> Self {
        Self {
            tables: Arc::new(OrderTables::default()),
            failure: None,
        }
    }

    /// Make every transaction fail at `point`
    pub fn with_failure(mut self, point: FailurePoint) -> Self {
        self.failure = Some(point);
        self
    }
}

impl Default for InMemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

pub struct InMemoryOrderTransaction {
    tables: Arc<OrderTables>,
    failure: Option<FailurePoint>,
    customers: Vec<Customer>,
    option_services: Vec<CustomerOptionService>,
    packages: Vec<CustomerPackage>,
    finished: bool,
}

impl InMemoryOrderTransaction {
    fn check(&self, step: FailurePoint) -> DomainResult<()> {
        if self.finished {
            return Err(DomainError::Transaction("transaction already finished".into()));
        }
        if self.failure == Some(step) {
            return Err(DomainError::Storage(format!("injected failure at {:?}", step)));
        }
        Ok(())
    }

    fn require_customer(&self, customer_id: CustomerId) -> DomainResult<()> {
        let staged = self.customers.iter().any(|c| c.id == customer_id);
        if staged || self.tables.customers.contains_key(&customer_id) {
            Ok(())
        } else {
            Err(DomainError::Storage(format!(
                "foreign key violation: customer {} does not exist",
                customer_id
            )))
        }
    }
}

#[async_trait]
impl OrderTransaction for InMemoryOrderTransaction {
    async fn insert_customer(&mut self, customer: NewCustomer) -> DomainResult<CustomerId> {
        self.check(FailurePoint::InsertCustomer)?;
        let id = self.tables.customer_counter.fetch_add(1, Ordering::SeqCst) + 1;
        self.customers.push(Customer::from_new(id, customer, Utc::now()));
        Ok(id)
    }

    async fn insert_optional_service(&mut self, link: CustomerOptionService) -> DomainResult<()> {
        self.check(FailurePoint::InsertOptionalService)?;
        self.require_customer(link.customer_id)?;
        self.option_services.push(link);
        Ok(())
    }

    async fn batch_insert_packages(&mut self, lines: Vec<CustomerPackage>) -> DomainResult<()> {
        self.check(FailurePoint::InsertPackages)?;
        for line in &lines {
            self.require_customer(line.customer_id)?;
        }
        self.packages.extend(lines);
        Ok(())
    }

    async fn commit(&mut self) -> DomainResult<()> {
        self.check(FailurePoint::Commit)?;
        self.finished = true;

        for customer in self.customers.drain(..) {
            self.tables.customers.insert(customer.id, customer);
        }
        for link in self.option_services.drain(..) {
            self.tables
                .option_services
                .entry(link.customer_id)
                .or_default()
                .push(link);
        }
        for line in self.packages.drain(..) {
            self.tables
                .packages
                .entry(line.customer_id)
                .or_default()
                .push(line);
        }
        Ok(())
    }

    async fn rollback(&mut self) -> DomainResult<()> {
        if self.finished {
            return Err(DomainError::Transaction("transaction already finished".into()));
        }
        self.finished = true;
        self.customers.clear();
        self.option_services.clear();
        self.packages.clear();
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn begin(&self) -> DomainResult<Box<dyn OrderTransaction>> {
        Ok(Box::new(InMemoryOrderTransaction {
            tables: self.tables.clone(),
            failure: self.failure,
            customers: Vec::new(),
            option_services: Vec::new(),
            packages: Vec::new(),
            finished: false,
        }))
    }

    async fn find_customer(&self, id: CustomerId) -> DomainResult<Option<Customer>> {
        Ok(self.tables.customers.get(&id).map(|c| c.clone()))
    }

    async fn find_packages(&self, customer_id: CustomerId) -> DomainResult<Vec<CustomerPackage>> {
        let mut lines = self
            .tables
            .packages
            .get(&customer_id)
            .map(|l| l.clone())
            .unwrap_or_default();
        lines.sort_by_key(|l| l.package.code());
        Ok(lines)
    }

    async fn find_optional_services(
        &self,
        customer_id: CustomerId,
    ) -> DomainResult<Vec<CustomerOptionService>> {
        let mut links = self
            .tables
            .option_services
            .get(&customer_id)
            .map(|l| l.clone())
            .unwrap_or_default();
        links.sort_by_key(|l| l.service.code());
        Ok(links)
    }

    async fn count_customers(&self) -> DomainResult<u64> {
        Ok(self.tables.customers.len() as u64)
    }
}

// ── InMemoryRepositoryProvider ──────────────────────────────────

pub struct InMemoryRepositoryProvider {
    rates: InMemoryRateRepository,
    orders: InMemoryOrderRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new(rates: InMemoryRateRepository, orders: InMemoryOrderRepository) -> Self {
        Self { rates, orders }
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn rates(&self) -> &dyn RateRepository {
        &self.rates
    }

    fn orders(&self) -> &dyn OrderRepository {
        &self.orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pref(code: &str) -> PrefectureId {
        PrefectureId::parse(code).unwrap()
    }

    #[tokio::test]
    async fn cheapest_sufficient_truck_wins() {
        let rates = InMemoryRateRepository::new()
            .with_truck(200, 50000)
            .with_truck(80, 30000)
            .with_truck(300, 45000);
        assert_eq!(rates.truck_price_for_box_count(10).await.unwrap(), 30000);
        assert_eq!(rates.truck_price_for_box_count(150).await.unwrap(), 45000);
        assert!(rates.truck_price_for_box_count(301).await.is_err());
    }

    #[tokio::test]
    async fn distances_are_symmetric() {
        let rates = InMemoryRateRepository::new().with_distance("27", "13", 500.0);
        assert_eq!(rates.distance_between(&pref("13"), &pref("27")).await.unwrap(), 500.0);
        assert_eq!(rates.distance_between(&pref("27"), &pref("13")).await.unwrap(), 500.0);
        assert!(rates.distance_between(&pref("01"), &pref("13")).await.is_err());
        assert_eq!(rates.lookup_count(), 3);
    }

    #[tokio::test]
    async fn staged_writes_invisible_until_commit() {
        let repo = InMemoryOrderRepository::new();
        let mut tx = repo.begin().await.unwrap();
        let id = tx
            .insert_customer(NewCustomer {
                customer_name: "テスト".into(),
                tel: "0312345678".into(),
                email: "t@example.com".into(),
                old_prefecture_id: pref("13"),
                old_address: "a".into(),
                new_prefecture_id: pref("14"),
                new_address: "b".into(),
                season: "2".into(),
            })
            .await
            .unwrap();

        assert_eq!(repo.count_customers().await.unwrap(), 0);
        tx.commit().await.unwrap();
        assert_eq!(repo.count_customers().await.unwrap(), 1);
        assert!(repo.find_customer(id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn links_require_existing_customer() {
        let repo = InMemoryOrderRepository::new();
        let mut tx = repo.begin().await.unwrap();
        let err = tx
            .insert_optional_service(CustomerOptionService {
                customer_id: 99,
                service: OptionalServiceType::WashingMachineInstall,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Storage(_)));
    }
}
