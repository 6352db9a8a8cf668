use sea_orm::entity::prelude::*;

use super::{emission, municipality_kpi, prefecture_kpi};

/// Master record of a municipality (市区町村).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "municipalities")]
pub struct Model {
    /// Five digit local government code.
    #[sea_orm(primary_key, auto_increment = false)]
    pub city_code: String,
    pub prefecture_code: String,
    pub name: String,
    pub population: Option<i64>,
    pub area_km2: Option<f64>,
    #[sea_orm(default_value = "false")]
    pub zero_carbon_declared: bool,
    /// Year the zero carbon city declaration was made.
    pub zero_carbon_year: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "prefecture_kpi::Entity",
        from = "Column::PrefectureCode",
        to = "prefecture_kpi::Column::PrefectureCode",
        on_delete = "Cascade"
    )]
    Prefecture,
    #[sea_orm(has_one = "municipality_kpi::Entity")]
    Kpi,
    #[sea_orm(has_many = "emission::Entity")]
    Emission,
}

impl Related<prefecture_kpi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Prefecture.def()
    }
}

impl Related<municipality_kpi::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Kpi.def()
    }
}

impl Related<emission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Emission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
