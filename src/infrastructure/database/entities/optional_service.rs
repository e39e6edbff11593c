//! Optional service price list

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "optional_services")]
pub struct Model {
    /// `OptionalServiceType::code`
    #[sea_orm(primary_key, auto_increment = false)]
    pub service_id: i32,

    pub service_name: String,

    /// Price in yen
    pub price: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
