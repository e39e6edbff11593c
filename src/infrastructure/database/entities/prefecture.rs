//! Prefecture master

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prefectures")]
pub struct Model {
    /// Two-digit JIS code ("01".."47")
    #[sea_orm(primary_key, auto_increment = false)]
    pub prefecture_id: String,

    pub prefecture_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
