//! Create truck_capacities table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TruckCapacities::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TruckCapacities::TruckId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(TruckCapacities::MaxBox)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TruckCapacities::Price)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 2t truck up to 80 boxes, 4t truck up to 200 boxes
        let insert = Query::insert()
            .into_table(TruckCapacities::Table)
            .columns([
                TruckCapacities::TruckId,
                TruckCapacities::MaxBox,
                TruckCapacities::Price,
            ])
            .values_panic([1.into(), 80.into(), 30000.into()])
            .values_panic([2.into(), 200.into(), 50000.into()])
            .to_owned();

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TruckCapacities::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TruckCapacities {
    Table,
    TruckId,
    MaxBox,
    Price,
}
