//! SeaORM implementation of RateRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::estimate::{OptionalServiceType, PackageType, PrefectureId, RateRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{
    optional_service, package_content, prefecture_distance, truck_capacity,
};

pub struct SeaOrmRateRepository {
    db: DatabaseConnection,
}

impl SeaOrmRateRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_distance(&self, from: &str, to: &str) -> DomainResult<Option<f64>> {
        let model = prefecture_distance::Entity::find()
            .filter(prefecture_distance::Column::FromPrefectureId.eq(from))
            .filter(prefecture_distance::Column::ToPrefectureId.eq(to))
            .one(&self.db)
            .await?;
        Ok(model.map(|m| m.distance))
    }
}

#[async_trait]
impl RateRepository for SeaOrmRateRepository {
    async fn distance_between(&self, from: &PrefectureId, to: &PrefectureId) -> DomainResult<f64> {
        if from == to {
            return Ok(0.0);
        }

        // Pairs are stored once; try both orientations
        if let Some(km) = self.find_distance(from.as_str(), to.as_str()).await? {
            return Ok(km);
        }
        if let Some(km) = self.find_distance(to.as_str(), from.as_str()).await? {
            return Ok(km);
        }

        Err(DomainError::NotFound {
            entity: "PrefectureDistance",
            field: "from_prefecture_id,to_prefecture_id",
            value: format!("{},{}", from, to),
        })
    }

    async fn truck_price_for_box_count(&self, box_count: i32) -> DomainResult<i32> {
        let truck = truck_capacity::Entity::find()
            .filter(truck_capacity::Column::MaxBox.gte(box_count))
            .order_by_asc(truck_capacity::Column::Price)
            .one(&self.db)
            .await?;

        truck.map(|t| t.price).ok_or_else(|| DomainError::NotFound {
            entity: "TruckCapacity",
            field: "max_box",
            value: box_count.to_string(),
        })
    }

    async fn box_multiplier_for_package_type(&self, package: PackageType) -> DomainResult<i32> {
        let content = package_content::Entity::find_by_id(package.code())
            .one(&self.db)
            .await?;

        content.map(|c| c.box_count).ok_or_else(|| DomainError::NotFound {
            entity: "PackageContent",
            field: "package_id",
            value: package.code().to_string(),
        })
    }

    async fn optional_service_price(&self, service: OptionalServiceType) -> DomainResult<i32> {
        let model = optional_service::Entity::find_by_id(service.code())
            .one(&self.db)
            .await?;

        model.map(|s| s.price).ok_or_else(|| DomainError::NotFound {
            entity: "OptionalService",
            field: "service_id",
            value: service.code().to_string(),
        })
    }
}
