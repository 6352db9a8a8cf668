use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create prefecture_kpis table
        manager
            .create_table(
                Table::create()
                    .table(PrefectureKpis::Table)
                    .if_not_exists()
                    .col(string_len(PrefectureKpis::PrefectureCode, 2).primary_key())
                    .col(string(PrefectureKpis::PrefectureName))
                    .col(string(PrefectureKpis::PrefectureSlug).unique_key())
                    .col(big_integer_null(PrefectureKpis::Population))
                    .col(integer(PrefectureKpis::LatestYear))
                    .col(double(PrefectureKpis::BaseEmissionMt))
                    .col(double(PrefectureKpis::LatestEmissionMt))
                    .col(double(PrefectureKpis::ReductionRate))
                    .col(double(PrefectureKpis::ActualPace))
                    .col(double(PrefectureKpis::RequiredPace))
                    .col(double(PrefectureKpis::PaceAchievementRate))
                    .col(string_len(PrefectureKpis::Status, 9))
                    .col(double(PrefectureKpis::Shortfall2030Mt))
                    .col(integer(PrefectureKpis::MunicipalityCount).default(0))
                    .col(integer(PrefectureKpis::OnTrackCount).default(0))
                    .col(integer(PrefectureKpis::AtRiskCount).default(0))
                    .col(integer(PrefectureKpis::OffTrackCount).default(0))
                    .col(date_time_null(PrefectureKpis::CalculatedAt))
                    .to_owned(),
            )
            .await?;

        // Create municipalities table
        manager
            .create_table(
                Table::create()
                    .table(Municipalities::Table)
                    .if_not_exists()
                    .col(string_len(Municipalities::CityCode, 5).primary_key())
                    .col(string_len(Municipalities::PrefectureCode, 2))
                    .col(string(Municipalities::Name))
                    .col(big_integer_null(Municipalities::Population))
                    .col(double_null(Municipalities::AreaKm2))
                    .col(boolean(Municipalities::ZeroCarbonDeclared).default(false))
                    .col(integer_null(Municipalities::ZeroCarbonYear))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_municipality_prefecture")
                            .from(Municipalities::Table, Municipalities::PrefectureCode)
                            .to(PrefectureKpis::Table, PrefectureKpis::PrefectureCode)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create municipality_kpis table
        manager
            .create_table(
                Table::create()
                    .table(MunicipalityKpis::Table)
                    .if_not_exists()
                    .col(string_len(MunicipalityKpis::CityCode, 5).primary_key())
                    .col(integer(MunicipalityKpis::BaseYear).default(2013))
                    .col(double(MunicipalityKpis::BaseEmissionKt))
                    .col(integer(MunicipalityKpis::LatestYear))
                    .col(double(MunicipalityKpis::LatestEmissionKt))
                    .col(double(MunicipalityKpis::ReductionRate))
                    .col(double(MunicipalityKpis::ActualPace))
                    .col(double(MunicipalityKpis::RequiredPace))
                    .col(double(MunicipalityKpis::PaceAchievementRate))
                    .col(string_len(MunicipalityKpis::Status, 9))
                    .col(double(MunicipalityKpis::Shortfall2030Kt))
                    .col(double_null(MunicipalityKpis::EmissionPerCapita))
                    .col(double_null(MunicipalityKpis::DeviationScore))
                    .col(integer_null(MunicipalityKpis::PrefRank))
                    .col(integer_null(MunicipalityKpis::NationalRank))
                    .col(date_time_null(MunicipalityKpis::CalculatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_municipality_kpi_municipality")
                            .from(MunicipalityKpis::Table, MunicipalityKpis::CityCode)
                            .to(Municipalities::Table, Municipalities::CityCode)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create emissions table
        manager
            .create_table(
                Table::create()
                    .table(Emissions::Table)
                    .if_not_exists()
                    .col(pk_auto(Emissions::Id))
                    .col(string_len(Emissions::CityCode, 5))
                    .col(integer(Emissions::FiscalYear))
                    .col(string(Emissions::Sector))
                    .col(double(Emissions::ValueKtCo2))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_emission_municipality")
                            .from(Emissions::Table, Emissions::CityCode)
                            .to(Municipalities::Table, Municipalities::CityCode)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One value per municipality, year and sector
        manager
            .create_index(
                Index::create()
                    .name("uq_emission_city_year_sector")
                    .table(Emissions::Table)
                    .col(Emissions::CityCode)
                    .col(Emissions::FiscalYear)
                    .col(Emissions::Sector)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order to handle foreign key constraints
        manager
            .drop_table(Table::drop().table(Emissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(MunicipalityKpis::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Municipalities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PrefectureKpis::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum PrefectureKpis {
    Table,
    PrefectureCode,
    PrefectureName,
    PrefectureSlug,
    Population,
    LatestYear,
    BaseEmissionMt,
    LatestEmissionMt,
    ReductionRate,
    ActualPace,
    RequiredPace,
    PaceAchievementRate,
    Status,
    #[sea_orm(iden = "shortfall_2030_mt")]
    Shortfall2030Mt,
    MunicipalityCount,
    OnTrackCount,
    AtRiskCount,
    OffTrackCount,
    CalculatedAt,
}

#[derive(DeriveIden)]
enum Municipalities {
    Table,
    CityCode,
    PrefectureCode,
    Name,
    Population,
    #[sea_orm(iden = "area_km2")]
    AreaKm2,
    ZeroCarbonDeclared,
    ZeroCarbonYear,
}

#[derive(DeriveIden)]
enum MunicipalityKpis {
    Table,
    CityCode,
    BaseYear,
    BaseEmissionKt,
    LatestYear,
    LatestEmissionKt,
    ReductionRate,
    ActualPace,
    RequiredPace,
    PaceAchievementRate,
    Status,
    #[sea_orm(iden = "shortfall_2030_kt")]
    Shortfall2030Kt,
    EmissionPerCapita,
    DeviationScore,
    PrefRank,
    NationalRank,
    CalculatedAt,
}

#[derive(DeriveIden)]
enum Emissions {
    Table,
    Id,
    CityCode,
    FiscalYear,
    Sector,
    #[sea_orm(iden = "value_kt_co2")]
    ValueKtCo2,
}
