use sea_orm::entity::prelude::*;

use super::{municipality, pace_status::PaceStatus};

/// Pre-computed KPIs of a municipality. Emissions in thousand t-CO₂.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "municipality_kpis")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub city_code: String,
    pub base_year: i32,
    pub base_emission_kt: f64,
    pub latest_year: i32,
    pub latest_emission_kt: f64,
    /// Change since the base year in percent. Negative means reduced.
    pub reduction_rate: f64,
    pub actual_pace: f64,
    pub required_pace: f64,
    pub pace_achievement_rate: f64,
    pub status: PaceStatus,
    pub shortfall_2030_kt: f64,
    pub emission_per_capita: Option<f64>,
    pub deviation_score: Option<f64>,
    pub pref_rank: Option<i32>,
    pub national_rank: Option<i32>,
    pub calculated_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "municipality::Entity",
        from = "Column::CityCode",
        to = "municipality::Column::CityCode",
        on_delete = "Cascade"
    )]
    Municipality,
}

impl Related<municipality::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Municipality.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Joins the KPI row with its municipality master record.
    pub fn into_dto(self, municipality: &municipality::Model) -> common::MunicipalityKpi {
        common::MunicipalityKpi {
            city_code: self.city_code,
            name: municipality.name.clone(),
            prefecture_code: municipality.prefecture_code.clone(),
            population: municipality.population,
            area_km2: municipality.area_km2,
            zero_carbon_declared: municipality.zero_carbon_declared,
            zero_carbon_year: municipality.zero_carbon_year,
            base_year: self.base_year,
            base_emission_kt: self.base_emission_kt,
            latest_year: self.latest_year,
            latest_emission_kt: self.latest_emission_kt,
            reduction_rate: self.reduction_rate,
            actual_pace: self.actual_pace,
            required_pace: self.required_pace,
            pace_achievement_rate: self.pace_achievement_rate,
            status: self.status.into(),
            shortfall_2030_kt: self.shortfall_2030_kt,
            emission_per_capita: self.emission_per_capita,
            deviation_score: self.deviation_score,
            pref_rank: self.pref_rank,
            national_rank: self.national_rank,
        }
    }
}
