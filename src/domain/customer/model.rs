//! Customer records created by order registration

use chrono::{DateTime, Utc};

use crate::domain::estimate::{OptionalServiceType, OrderRequest, PackageType, PrefectureId};

pub type CustomerId = i32;

/// Customer row before insert; the id is generated by the store
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub customer_name: String,
    pub tel: String,
    pub email: String,
    pub old_prefecture_id: PrefectureId,
    pub old_address: String,
    pub new_prefecture_id: PrefectureId,
    pub new_address: String,
    pub season: String,
}

impl NewCustomer {
    /// Field-by-field copy of the order's customer data.
    /// Package counts and the installation flag are stored as link rows.
    pub fn from_order(order: &OrderRequest) -> Self {
        Self {
            customer_name: order.customer_name.clone(),
            tel: order.tel.clone(),
            email: order.email.clone(),
            old_prefecture_id: order.old_prefecture_id.clone(),
            old_address: order.old_address.clone(),
            new_prefecture_id: order.new_prefecture_id.clone(),
            new_address: order.new_address.clone(),
            season: order.season.clone(),
        }
    }
}

/// Persisted customer; never updated after insert
#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: CustomerId,
    pub customer_name: String,
    pub tel: String,
    pub email: String,
    pub old_prefecture_id: PrefectureId,
    pub old_address: String,
    pub new_prefecture_id: PrefectureId,
    pub new_address: String,
    pub season: String,
    pub created_at: DateTime<Utc>,
}

impl Customer {
    pub fn from_new(id: CustomerId, new: NewCustomer, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            customer_name: new.customer_name,
            tel: new.tel,
            email: new.email,
            old_prefecture_id: new.old_prefecture_id,
            old_address: new.old_address,
            new_prefecture_id: new.new_prefecture_id,
            new_address: new.new_address,
            season: new.season,
            created_at,
        }
    }
}

/// Optional service selected by a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerOptionService {
    pub customer_id: CustomerId,
    pub service: OptionalServiceType,
}

/// Requested count of one package type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerPackage {
    pub customer_id: CustomerId,
    pub package: PackageType,
    pub count: i32,
}

impl CustomerPackage {
    /// One line per package type, zero counts included
    pub fn lines_for(customer_id: CustomerId, order: &OrderRequest) -> Vec<Self> {
        PackageType::ALL
            .into_iter()
            .map(|package| Self {
                customer_id,
                package,
                count: order.package_count(package),
            })
            .collect()
    }
}
