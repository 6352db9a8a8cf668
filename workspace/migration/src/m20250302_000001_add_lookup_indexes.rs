use model::entities::{emission, municipality, municipality_kpi, prelude::*};
use sea_orm_migration::prelude::*;

use crate::entity_iden::EntityIden;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Prefecture pages list municipalities by prefecture code
        manager
            .create_index(
                Index::create()
                    .name("idx_municipality_prefecture")
                    .table(Municipality::table())
                    .col(Municipality::column(municipality::Column::PrefectureCode))
                    .to_owned(),
            )
            .await?;

        // Rankings are ordered by achievement rate
        manager
            .create_index(
                Index::create()
                    .name("idx_municipality_kpi_achievement")
                    .table(MunicipalityKpi::table())
                    .col(MunicipalityKpi::column(municipality_kpi::Column::PaceAchievementRate))
                    .to_owned(),
            )
            .await?;

        // History queries filter by city and sort by year
        manager
            .create_index(
                Index::create()
                    .name("idx_emission_city_year")
                    .table(Emission::table())
                    .col(Emission::column(emission::Column::CityCode))
                    .col(Emission::column(emission::Column::FiscalYear))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_emission_city_year")
                    .table(Emission::table())
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_municipality_kpi_achievement")
                    .table(MunicipalityKpi::table())
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_municipality_prefecture")
                    .table(Municipality::table())
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
