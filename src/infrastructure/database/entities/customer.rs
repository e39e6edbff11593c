//! Customer entity - one row per registered order

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "customers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub customer_id: i32,

    pub customer_name: String,

    pub tel: String,

    pub email: String,

    pub old_prefecture_id: String,

    pub old_address: String,

    pub new_prefecture_id: String,

    pub new_address: String,

    /// Season code as submitted
    pub season: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::customer_option_service::Entity")]
    CustomerOptionService,
    #[sea_orm(has_many = "super::customer_package::Entity")]
    CustomerPackage,
}

impl Related<super::customer_option_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerOptionService.def()
    }
}

impl Related<super::customer_package::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CustomerPackage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
