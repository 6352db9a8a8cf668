use sea_orm::entity::prelude::*;

use super::{municipality, pace_status::PaceStatus};

/// Aggregated KPIs of one prefecture. Emissions in million t-CO₂.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "prefecture_kpis")]
pub struct Model {
    /// Two digit JIS prefecture code.
    #[sea_orm(primary_key, auto_increment = false)]
    pub prefecture_code: String,
    pub prefecture_name: String,
    #[sea_orm(unique)]
    pub prefecture_slug: String,
    pub population: Option<i64>,
    pub latest_year: i32,
    pub base_emission_mt: f64,
    pub latest_emission_mt: f64,
    pub reduction_rate: f64,
    pub actual_pace: f64,
    pub required_pace: f64,
    pub pace_achievement_rate: f64,
    pub status: PaceStatus,
    pub shortfall_2030_mt: f64,
    pub municipality_count: i32,
    pub on_track_count: i32,
    pub at_risk_count: i32,
    pub off_track_count: i32,
    pub calculated_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "municipality::Entity")]
    Municipality,
}

impl Related<municipality::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Municipality.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for common::PrefectureKpi {
    fn from(model: Model) -> Self {
        Self {
            code: model.prefecture_code,
            name: model.prefecture_name,
            slug: model.prefecture_slug,
            population: model.population,
            latest_year: model.latest_year,
            base_emission_mt: model.base_emission_mt,
            latest_emission_mt: model.latest_emission_mt,
            reduction_rate: model.reduction_rate,
            actual_pace: model.actual_pace,
            required_pace: model.required_pace,
            pace_achievement_rate: model.pace_achievement_rate,
            status: model.status.into(),
            shortfall_2030_mt: model.shortfall_2030_mt,
            municipality_count: model.municipality_count,
            on_track_count: model.on_track_count,
            at_risk_count: model.at_risk_count,
            off_track_count: model.off_track_count,
            calculated_at: model.calculated_at,
        }
    }
}
