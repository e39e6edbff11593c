//! Create customer_option_services table

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
                    .table(CustomerOptionServices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CustomerOptionServices::CustomerId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CustomerOptionServices::ServiceId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CustomerOptionServices::CustomerId)
                            .col(CustomerOptionServices::ServiceId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_customer_option_services_customer")
                            .from(CustomerOptionServices::Table, CustomerOptionServices::CustomerId)
                            .to(Customers::Table, Customers::CustomerId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CustomerOptionServices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum CustomerOptionServices {
    Table,
    CustomerId,
    ServiceId,
}
