//! Create customers table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::CustomerId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customers::CustomerName).string().not_null())
                    .col(ColumnDef::new(Customers::Tel).string().not_null())
                    .col(ColumnDef::new(Customers::Email).string().not_null())
                    .col(
                        ColumnDef::new(Customers::OldPrefectureId)
                            .string_len(2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Customers::OldAddress).string().not_null())
                    .col(
                        ColumnDef::new(Customers::NewPrefectureId)
                            .string_len(2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Customers::NewAddress).string().not_null())
                    .col(ColumnDef::new(Customers::Season).string().not_null())
                    .col(
                        ColumnDef::new(Customers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Customers {
    Table,
    CustomerId,
    CustomerName,
    Tel,
    Email,
    OldPrefectureId,
    OldAddress,
    NewPrefectureId,
    NewAddress,
    Season,
    CreatedAt,
}
