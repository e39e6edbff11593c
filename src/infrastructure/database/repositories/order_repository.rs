//! SeaORM implementation of OrderRepository
//!
//! `SeaOrmOrderTransaction` wraps a `DatabaseTransaction`; if it is dropped
//! before `commit`, SeaORM rolls the transaction back.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DatabaseTransaction,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use tracing::debug;

use crate::domain::customer::{
    Customer, CustomerId, CustomerOptionService, CustomerPackage, NewCustomer, OrderRepository,
    OrderTransaction,
};
use crate::domain::estimate::{OptionalServiceType, PackageType, PrefectureId};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{customer, customer_option_service, customer_package};

// ── Conversion helpers ──────────────────────────────────────────

fn entity_to_domain(c: customer::Model) -> DomainResult<Customer> {
    Ok(Customer {
        id: c.customer_id,
        customer_name: c.customer_name,
        tel: c.tel,
        email: c.email,
        old_prefecture_id: PrefectureId::parse(&c.old_prefecture_id)?,
        old_address: c.old_address,
        new_prefecture_id: PrefectureId::parse(&c.new_prefecture_id)?,
        new_address: c.new_address,
        season: c.season,
        created_at: c.created_at,
    })
}

fn package_to_domain(p: customer_package::Model) -> DomainResult<CustomerPackage> {
    let package = PackageType::from_code(p.package_id).ok_or_else(|| {
        DomainError::Storage(format!("unknown package_id {} in customer_packages", p.package_id))
    })?;
    Ok(CustomerPackage {
        customer_id: p.customer_id,
        package,
        count: p.package_number,
    })
}

fn option_to_domain(o: customer_option_service::Model) -> DomainResult<CustomerOptionService> {
    let service = OptionalServiceType::from_code(o.service_id).ok_or_else(|| {
        DomainError::Storage(format!(
            "unknown service_id {} in customer_option_services",
            o.service_id
        ))
    })?;
    Ok(CustomerOptionService {
        customer_id: o.customer_id,
        service,
    })
}

// ── SeaOrmOrderTransaction ──────────────────────────────────────

pub struct SeaOrmOrderTransaction {
    txn: Option<DatabaseTransaction>,
}

impl SeaOrmOrderTransaction {
    fn open(&self) -> DomainResult<&DatabaseTransaction> {
        self.txn
            .as_ref()
            .ok_or_else(|| DomainError::Transaction("transaction already finished".into()))
    }

    fn take(&mut self) -> DomainResult<DatabaseTransaction> {
        self.txn
            .take()
            .ok_or_else(|| DomainError::Transaction("transaction already finished".into()))
    }
}

#[async_trait]
impl OrderTransaction for SeaOrmOrderTransaction {
    async fn insert_customer(&mut self, c: NewCustomer) -> DomainResult<CustomerId> {
        let txn = self.open()?;
        let model = customer::ActiveModel {
            customer_id: NotSet,
            customer_name: Set(c.customer_name),
            tel: Set(c.tel),
            email: Set(c.email),
            old_prefecture_id: Set(c.old_prefecture_id.into()),
            old_address: Set(c.old_address),
            new_prefecture_id: Set(c.new_prefecture_id.into()),
            new_address: Set(c.new_address),
            season: Set(c.season),
            created_at: Set(Utc::now()),
        };
        let result = model.insert(txn).await?;
        debug!("Customer row inserted: {}", result.customer_id);
        Ok(result.customer_id)
    }

    async fn insert_optional_service(&mut self, link: CustomerOptionService) -> DomainResult<()> {
        let txn = self.open()?;
        let model = customer_option_service::ActiveModel {
            customer_id: Set(link.customer_id),
            service_id: Set(link.service.code()),
        };
        customer_option_service::Entity::insert(model)
            .exec_without_returning(txn)
            .await?;
        Ok(())
    }

    async fn batch_insert_packages(&mut self, lines: Vec<CustomerPackage>) -> DomainResult<()> {
        let txn = self.open()?;
        if lines.is_empty() {
            return Ok(());
        }

        let models = lines.into_iter().map(|line| customer_package::ActiveModel {
            customer_id: Set(line.customer_id),
            package_id: Set(line.package.code()),
            package_number: Set(line.count),
        });
        customer_package::Entity::insert_many(models)
            .exec_without_returning(txn)
            .await?;
        Ok(())
    }

    async fn commit(&mut self) -> DomainResult<()> {
        self.take()?
            .commit()
            .await
            .map_err(|e| DomainError::Transaction(e.to_string()))
    }

    async fn rollback(&mut self) -> DomainResult<()> {
        self.take()?
            .rollback()
            .await
            .map_err(|e| DomainError::Transaction(e.to_string()))
    }
}

// ── SeaOrmOrderRepository ───────────────────────────────────────

pub struct SeaOrmOrderRepository {
    db: DatabaseConnection,
}

impl SeaOrmOrderRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepository for SeaOrmOrderRepository {
    async fn begin(&self) -> DomainResult<Box<dyn OrderTransaction>> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| DomainError::Transaction(e.to_string()))?;
        Ok(Box::new(SeaOrmOrderTransaction { txn: Some(txn) }))
    }

    async fn find_customer(&self, id: CustomerId) -> DomainResult<Option<Customer>> {
        let model = customer::Entity::find_by_id(id).one(&self.db).await?;
        model.map(entity_to_domain).transpose()
    }

    async fn find_packages(&self, customer_id: CustomerId) -> DomainResult<Vec<CustomerPackage>> {
        let models = customer_package::Entity::find()
            .filter(customer_package::Column::CustomerId.eq(customer_id))
            .order_by_asc(customer_package::Column::PackageId)
            .all(&self.db)
            .await?;
        models.into_iter().map(package_to_domain).collect()
    }

    async fn find_optional_services(
        &self,
        customer_id: CustomerId,
    ) -> DomainResult<Vec<CustomerOptionService>> {
        let models = customer_option_service::Entity::find()
            .filter(customer_option_service::Column::CustomerId.eq(customer_id))
            .order_by_asc(customer_option_service::Column::ServiceId)
            .all(&self.db)
            .await?;
        models.into_iter().map(option_to_domain).collect()
    }

    async fn count_customers(&self) -> DomainResult<u64> {
        Ok(customer::Entity::find().count(&self.db).await?)
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::ModelTrait;
    use sea_orm_migration::MigratorTrait;

    use super::*;
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::{init_database, DatabaseConfig};

    async fn repo() -> SeaOrmOrderRepository {
        let db = init_database(&DatabaseConfig::in_memory()).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SeaOrmOrderRepository::new(db)
    }

    fn new_customer() -> NewCustomer {
        NewCustomer {
            customer_name: "山田太郎".into(),
            tel: "03-1234-5678".into(),
            email: "taro@example.com".into(),
            old_prefecture_id: PrefectureId::parse("13").unwrap(),
            old_address: "千代田区1-1".into(),
            new_prefecture_id: PrefectureId::parse("27").unwrap(),
            new_address: "北区2-2".into(),
            season: "0".into(),
        }
    }

    fn lines(customer_id: CustomerId) -> Vec<CustomerPackage> {
        PackageType::ALL
            .into_iter()
            .map(|package| CustomerPackage {
                customer_id,
                package,
                count: package.code() - 1,
            })
            .collect()
    }

    #[tokio::test]
    async fn committed_rows_are_readable() {
        let repo = repo().await;

        let mut tx = repo.begin().await.unwrap();
        let id = tx.insert_customer(new_customer()).await.unwrap();
        tx.insert_optional_service(CustomerOptionService {
            customer_id: id,
            service: OptionalServiceType::WashingMachineInstall,
        })
        .await
        .unwrap();
        tx.batch_insert_packages(lines(id)).await.unwrap();
        tx.commit().await.unwrap();

        let customer = repo.find_customer(id).await.unwrap().unwrap();
        assert_eq!(customer.customer_name, "山田太郎");
        assert_eq!(customer.new_prefecture_id.as_str(), "27");
        assert_eq!(customer.season, "0");

        let packages = repo.find_packages(id).await.unwrap();
        assert_eq!(packages, lines(id));

        let options = repo.find_optional_services(id).await.unwrap();
        assert_eq!(
            options,
            vec![CustomerOptionService {
                customer_id: id,
                service: OptionalServiceType::WashingMachineInstall,
            }]
        );
    }

    #[tokio::test]
    async fn rollback_discards_everything() {
        let repo = repo().await;

        let mut tx = repo.begin().await.unwrap();
        let id = tx.insert_customer(new_customer()).await.unwrap();
        tx.batch_insert_packages(lines(id)).await.unwrap();
        tx.rollback().await.unwrap();

        assert_eq!(repo.count_customers().await.unwrap(), 0);
        assert!(repo.find_packages(id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn dropped_transaction_rolls_back() {
        let repo = repo().await;
        {
            let mut tx = repo.begin().await.unwrap();
            tx.insert_customer(new_customer()).await.unwrap();
        }
        assert_eq!(repo.count_customers().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn finished_transaction_rejects_writes() {
        let repo = repo().await;
        let mut tx = repo.begin().await.unwrap();
        tx.commit().await.unwrap();

        let err = tx.insert_customer(new_customer()).await.unwrap_err();
        assert!(matches!(err, DomainError::Transaction(_)));
        assert!(tx.commit().await.is_err());
    }

    #[tokio::test]
    async fn deleting_customer_cascades_to_lines() {
        let repo = repo().await;

        let mut tx = repo.begin().await.unwrap();
        let id = tx.insert_customer(new_customer()).await.unwrap();
        tx.batch_insert_packages(lines(id)).await.unwrap();
        tx.commit().await.unwrap();

        let model = customer::Entity::find_by_id(id)
            .one(&repo.db)
            .await
            .unwrap()
            .unwrap();
        model.delete(&repo.db).await.unwrap();

        assert!(repo.find_packages(id).await.unwrap().is_empty());
    }
}
