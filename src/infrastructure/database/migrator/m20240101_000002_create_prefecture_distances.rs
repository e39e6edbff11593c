//! Create prefecture_distances table
//!
//! Each unordered pair is stored once with the lower code first.

use sea_orm_migration::prelude::*;

use super::prefecture_data::{great_circle_km, PREFECTURES};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PrefectureDistances::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PrefectureDistances::FromPrefectureId)
                            .string_len(2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PrefectureDistances::ToPrefectureId)
                            .string_len(2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PrefectureDistances::Distance)
                            .double()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(PrefectureDistances::FromPrefectureId)
                            .col(PrefectureDistances::ToPrefectureId),
                    )
                    .to_owned(),
            )
            .await?;

        // One statement per origin keeps the bind count small
        for (i, (from, _, from_lat, from_lon)) in PREFECTURES.iter().enumerate() {
            let rest = &PREFECTURES[i + 1..];
            if rest.is_empty() {
                continue;
            }

            let mut insert = Query::insert()
                .into_table(PrefectureDistances::Table)
                .columns([
                    PrefectureDistances::FromPrefectureId,
                    PrefectureDistances::ToPrefectureId,
                    PrefectureDistances::Distance,
                ])
                .to_owned();
            for (to, _, to_lat, to_lon) in rest {
                let km = great_circle_km((*from_lat, *from_lon), (*to_lat, *to_lon));
                insert.values_panic([(*from).into(), (*to).into(), km.into()]);
            }

            manager.exec_stmt(insert).await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PrefectureDistances::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum PrefectureDistances {
    Table,
    FromPrefectureId,
    ToPrefectureId,
    Distance,
}
