use sea_orm::entity::prelude::*;

use super::municipality;

/// One sector's emission for one municipality and fiscal year.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "emissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub city_code: String,
    pub fiscal_year: i32,
    /// Sector name as published in the inventory, e.g. `製造業`.
    pub sector: String,
    /// Thousand t-CO₂.
    pub value_kt_co2: f64,
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
