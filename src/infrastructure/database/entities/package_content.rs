//! Box-equivalents per package type

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "package_contents")]
pub struct Model {
    /// `PackageType::code`
    #[sea_orm(primary_key, auto_increment = false)]
    pub package_id: i32,

    pub package_name: String,

    /// Boxes one item of this type counts as
    pub box_count: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
