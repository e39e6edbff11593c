//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_prefectures;
mod m20240101_000002_create_prefecture_distances;
mod m20240101_000003_create_truck_capacities;
mod m20240101_000004_create_package_contents;
mod m20240101_000005_create_optional_services;
mod m20240101_000006_create_customers;
mod m20240101_000007_create_customer_option_services;
mod m20240101_000008_create_customer_packages;
pub mod prefecture_data;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_prefectures::Migration),
            Box::new(m20240101_000002_create_prefecture_distances::Migration),
            Box::new(m20240101_000003_create_truck_capacities::Migration),
            Box::new(m20240101_000004_create_package_contents::Migration),
            Box::new(m20240101_000005_create_optional_services::Migration),
            Box::new(m20240101_000006_create_customers::Migration),
            Box::new(m20240101_000007_create_customer_option_services::Migration),
            Box::new(m20240101_000008_create_customer_packages::Migration),
        ]
    }
}
