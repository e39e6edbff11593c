//! Database entities module

pub mod customer;
pub mod customer_option_service;
pub mod customer_package;
pub mod optional_service;
pub mod package_content;
pub mod prefecture;
pub mod prefecture_distance;
pub mod truck_capacity;

pub use customer::Entity as Customer;
pub use customer_option_service::Entity as CustomerOptionService;
pub use customer_package::Entity as CustomerPackage;
pub use optional_service::Entity as OptionalService;
pub use package_content::Entity as PackageContent;
pub use prefecture::Entity as Prefecture;
pub use prefecture_distance::Entity as PrefectureDistance;
pub use truck_capacity::Entity as TruckCapacity;
