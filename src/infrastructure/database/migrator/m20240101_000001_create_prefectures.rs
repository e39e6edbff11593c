//! Create prefectures table

use sea_orm_migration::prelude::*;

use super::prefecture_data::PREFECTURES;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Prefectures::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Prefectures::PrefectureId)
                            .string_len(2)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Prefectures::PrefectureName)
                            .string()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert()
            .into_table(Prefectures::Table)
            .columns([Prefectures::PrefectureId, Prefectures::PrefectureName])
            .to_owned();
        for (code, name, _, _) in PREFECTURES {
            insert.values_panic([code.into(), name.into()]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Prefectures::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Prefectures {
    Table,
    PrefectureId,
    PrefectureName,
}
