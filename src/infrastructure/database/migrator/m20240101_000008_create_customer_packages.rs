//! Create customer_packages table

use sea_orm_migration::prelude::*;

use super::m20240101_000006_create_customers::Customers;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CustomerPackages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CustomerPackages::CustomerId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomerPackages::PackageId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomerPackages::PackageNumber)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .primary_key(
                        Index::create()
                            .col(CustomerPackages::CustomerId)
                            .col(CustomerPackages::PackageId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customer_packages_customer")
                            .from(CustomerPackages::Table, CustomerPackages::CustomerId)
                            .to(Customers::Table, Customers::CustomerId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CustomerPackages::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum CustomerPackages {
    Table,
    CustomerId,
    PackageId,
    PackageNumber,
}
