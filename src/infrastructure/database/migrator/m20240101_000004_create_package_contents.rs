//! Create package_contents table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PackageContents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PackageContents::PackageId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PackageContents::PackageName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PackageContents::BoxCount)
                            .integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        let insert = Query::insert()
            .into_table(PackageContents::Table)
            .columns([
                PackageContents::PackageId,
                PackageContents::PackageName,
                PackageContents::BoxCount,
            ])
            .values_panic([1.into(), "段ボール".into(), 1.into()])
            .values_panic([2.into(), "ベッド".into(), 15.into()])
            .values_panic([3.into(), "自転車".into(), 5.into()])
            .values_panic([4.into(), "洗濯機".into(), 10.into()])
            .to_owned();

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PackageContents::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum PackageContents {
    Table,
    PackageId,
    PackageName,
    BoxCount,
}
