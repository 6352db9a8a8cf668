//! SeaORM entities of the emission dashboard.
//! Four tables: prefecture KPIs, the municipality master, municipality KPIs
//! and the raw per-sector emission inventory.

pub mod emission;
pub mod municipality;
pub mod municipality_kpi;
pub mod pace_status;
pub mod prefecture_kpi;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::emission::Entity as Emission;
    pub use super::municipality::Entity as Municipality;
    pub use super::municipality_kpi::Entity as MunicipalityKpi;
    pub use super::pace_status::PaceStatus;
    pub use super::prefecture_kpi::Entity as PrefectureKpi;
}

#[cfg(test)]
mod test {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, ConnectionTrait, Database, DatabaseConnection, DbErr,
        EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
    };

    use super::*;
    use prelude::*;

    async fn setup_db() -> Result<DatabaseConnection, DbErr> {
        let db = Database::connect("sqlite::memory:").await?;

        // Enable foreign keys
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;

        Migrator::up(&db, None).await.expect("Migrations failed.");
        Ok(db)
    }

    fn tokyo() -> prefecture_kpi::ActiveModel {
        prefecture_kpi::ActiveModel {
            prefecture_code: Set("13".to_string()),
            prefecture_name: Set("東京都".to_string()),
            prefecture_slug: Set("tokyo".to_string()),
            population: Set(Some(14_047_594)),
            latest_year: Set(2021),
            base_emission_mt: Set(62.41),
            latest_emission_mt: Set(52.83),
            reduction_rate: Set(-15.35),
            actual_pace: Set(2.06),
            required_pace: Set(3.56),
            pace_achievement_rate: Set(57.9),
            status: Set(PaceStatus::OffTrack),
            shortfall_2030_mt: Set(9.12),
            municipality_count: Set(1),
            on_track_count: Set(0),
            at_risk_count: Set(0),
            off_track_count: Set(1),
            calculated_at: Set(None),
        }
    }

    fn hachioji() -> municipality::ActiveModel {
        municipality::ActiveModel {
            city_code: Set("13201".to_string()),
            prefecture_code: Set("13".to_string()),
            name: Set("八王子市".to_string()),
            population: Set(Some(579_355)),
            area_km2: Set(Some(186.38)),
            zero_carbon_declared: Set(true),
            zero_carbon_year: Set(Some(2022)),
        }
    }

    #[tokio::test]
    async fn test_entity_integration() -> Result<(), DbErr> {
        let db = setup_db().await?;

        tokyo().insert(&db).await?;
        let city = hachioji().insert(&db).await?;

        municipality_kpi::ActiveModel {
            city_code: Set(city.city_code.clone()),
            base_year: Set(2013),
            base_emission_kt: Set(2_385.0),
            latest_year: Set(2021),
            latest_emission_kt: Set(1_985.0),
            reduction_rate: Set(-16.77),
            actual_pace: Set(2.27),
            required_pace: Set(3.56),
            pace_achievement_rate: Set(63.8),
            status: Set(PaceStatus::OffTrack),
            shortfall_2030_kt: Set(386.2),
            emission_per_capita: Set(Some(3.426)),
            deviation_score: Set(Some(52.4)),
            pref_rank: Set(Some(1)),
            national_rank: Set(None),
            calculated_at: Set(None),
        }
        .insert(&db)
        .await?;

        for (year, value) in [(2013, 800.0), (2014, 790.5), (2021, 640.25)] {
            emission::ActiveModel {
                city_code: Set(city.city_code.clone()),
                fiscal_year: Set(year),
                sector: Set("製造業".to_string()),
                value_kt_co2: Set(value),
                ..Default::default()
            }
            .insert(&db)
            .await?;
        }

        // KPI row joins back to its municipality
        let (kpi, muni) = MunicipalityKpi::find_by_id("13201".to_string())
            .find_also_related(Municipality)
            .one(&db)
            .await?
            .expect("kpi row");
        let muni = muni.expect("joined municipality");
        assert_eq!(muni.name, "八王子市");
        assert_eq!(kpi.status, PaceStatus::OffTrack);

        let dto = kpi.into_dto(&muni);
        assert_eq!(dto.prefecture_code, "13");
        assert_eq!(dto.status, common::PaceStatus::OffTrack);
        assert_eq!(dto.population, Some(579_355));

        // Emission history ordered by year
        let rows = Emission::find()
            .filter(emission::Column::CityCode.eq("13201"))
            .order_by_asc(emission::Column::FiscalYear)
            .all(&db)
            .await?;
        let years: Vec<i32> = rows.iter().map(|r| r.fiscal_year).collect();
        assert_eq!(years, vec![2013, 2014, 2021]);

        // Prefecture has its municipality
        let pref = PrefectureKpi::find_by_id("13".to_string()).one(&db).await?.unwrap();
        let members = pref.find_related(Municipality).all(&db).await?;
        assert_eq!(members.len(), 1);
        let dto: common::PrefectureKpi = pref.into();
        assert_eq!(dto.slug, "tokyo");

        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_emission_row_is_rejected() -> Result<(), DbErr> {
        let db = setup_db().await?;
        tokyo().insert(&db).await?;
        hachioji().insert(&db).await?;

        let row = || emission::ActiveModel {
            city_code: Set("13201".to_string()),
            fiscal_year: Set(2013),
            sector: Set("家庭".to_string()),
            value_kt_co2: Set(410.0),
            ..Default::default()
        };
        row().insert(&db).await?;
        assert!(row().insert(&db).await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn test_deleting_municipality_cascades() -> Result<(), DbErr> {
        let db = setup_db().await?;
        tokyo().insert(&db).await?;
        let city = hachioji().insert(&db).await?;

        emission::ActiveModel {
            city_code: Set("13201".to_string()),
            fiscal_year: Set(2013),
            sector: Set("家庭".to_string()),
            value_kt_co2: Set(410.0),
            ..Default::default()
        }
        .insert(&db)
        .await?;

        city.delete(&db).await?;
        let remaining = Emission::find().all(&db).await?;
        assert!(remaining.is_empty());
        Ok(())
    }
}
