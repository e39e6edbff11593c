//! Truck classes and their flat price

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "truck_capacities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub truck_id: i32,

    /// Box-equivalents the truck can carry
    pub max_box: i32,

    /// Price in yen
    pub price: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
