//! Distance between two prefectures, one row per unordered pair

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prefecture_distances")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub from_prefecture_id: String,

    #[sea_orm(primary_key, auto_increment = false)]
    pub to_prefecture_id: String,

    /// Kilometres
    #[sea_orm(column_type = "Double")]
    pub distance: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
