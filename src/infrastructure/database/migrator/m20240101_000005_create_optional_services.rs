//! Create optional_services table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OptionalServices::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OptionalServices::ServiceId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(OptionalServices::ServiceName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OptionalServices::Price)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        let insert = Query::insert()
            .into_table(OptionalServices::Table)
            .columns([
                OptionalServices::ServiceId,
                OptionalServices::ServiceName,
                OptionalServices::Price,
            ])
            .values_panic([1.into(), "洗濯機取り付け".into(), 3000.into()])
            .values_panic([2.into(), "北海道".into(), 10000.into()])
            .values_panic([3.into(), "岩手".into(), 5000.into()])
            .values_panic([4.into(), "福島".into(), 5000.into()])
            .to_owned();

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OptionalServices::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum OptionalServices {
    Table,
    ServiceId,
    ServiceName,
    Price,
}
