//! Read queries behind the dashboard pages.

use std::collections::BTreeMap;

use compute::{EmissionRow, yearly_totals};
use model::entities::{emission, municipality, municipality_kpi, prefecture_kpi};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::{debug, instrument, trace, warn};

use crate::error::QueryError;

pub type QueryResult<T> = Result<T, QueryError>;

/// A prefecture with the KPI rows of its municipalities.
#[derive(Debug, Clone)]
pub struct PrefectureWithMunicipalities {
    pub prefecture: prefecture_kpi::Model,
    /// Ordered by pace achievement rate, best first
    pub municipalities: Vec<(municipality_kpi::Model, municipality::Model)>,
}

/// A municipality KPI row with its master record and raw emissions.
#[derive(Debug, Clone)]
pub struct MunicipalityWithEmissions {
    pub kpi: municipality_kpi::Model,
    pub municipality: municipality::Model,
    /// Ordered by fiscal year
    pub emissions: Vec<emission::Model>,
}

/// Every prefecture KPI row, best pace achievement first.
#[instrument(skip(db))]
pub async fn prefecture_rankings(db: &DatabaseConnection) -> QueryResult<Vec<prefecture_kpi::Model>> {
    let rows = prefecture_kpi::Entity::find()
        .order_by_desc(prefecture_kpi::Column::PaceAchievementRate)
        .order_by_asc(prefecture_kpi::Column::PrefectureCode)
        .all(db)
        .await?;
    debug!("Loaded {} prefecture KPI rows", rows.len());
    Ok(rows)
}

/// One prefecture KPI row.
#[instrument(skip(db))]
pub async fn prefecture(db: &DatabaseConnection, code: &str) -> QueryResult<prefecture_kpi::Model> {
    prefecture_kpi::Entity::find_by_id(code.to_string())
        .one(db)
        .await?
        .ok_or_else(|| QueryError::not_found("Prefecture", code))
}

/// The prefecture row plus its municipalities' KPI rows.
#[instrument(skip(db))]
pub async fn prefecture_with_municipalities(
    db: &DatabaseConnection,
    code: &str,
) -> QueryResult<PrefectureWithMunicipalities> {
    let prefecture = prefecture(db, code).await?;

    let city_codes: Vec<String> = municipality::Entity::find()
        .select_only()
        .column(municipality::Column::CityCode)
        .filter(municipality::Column::PrefectureCode.eq(code))
        .into_tuple()
        .all(db)
        .await?;
    trace!("Prefecture {} has {} municipalities", code, city_codes.len());

    if city_codes.is_empty() {
        return Ok(PrefectureWithMunicipalities {
            prefecture,
            municipalities: Vec::new(),
        });
    }

    let rows = municipality_kpi::Entity::find()
        .find_also_related(municipality::Entity)
        .filter(municipality_kpi::Column::CityCode.is_in(city_codes))
        .order_by_desc(municipality_kpi::Column::PaceAchievementRate)
        .order_by_asc(municipality_kpi::Column::CityCode)
        .all(db)
        .await?;

    let municipalities = rows
        .into_iter()
        .filter_map(|(kpi, municipality)| match municipality {
            Some(municipality) => Some((kpi, municipality)),
            None => {
                warn!(city_code = %kpi.city_code, "KPI row without municipality, skipping");
                None
            }
        })
        .collect::<Vec<_>>();
    debug!(
        "Loaded {} municipality KPI rows for prefecture {}",
        municipalities.len(),
        code
    );

    Ok(PrefectureWithMunicipalities {
        prefecture,
        municipalities,
    })
}

async fn municipality_kpi_row(
    db: &DatabaseConnection,
    city_code: &str,
) -> QueryResult<(municipality_kpi::Model, municipality::Model)> {
    match municipality_kpi::Entity::find_by_id(city_code.to_string())
        .find_also_related(municipality::Entity)
        .one(db)
        .await?
    {
        Some((kpi, Some(municipality))) => Ok((kpi, municipality)),
        _ => Err(QueryError::not_found("Municipality", city_code)),
    }
}

async fn emission_rows(db: &DatabaseConnection, city_code: &str) -> QueryResult<Vec<emission::Model>> {
    Ok(emission::Entity::find()
        .filter(emission::Column::CityCode.eq(city_code))
        .order_by_asc(emission::Column::FiscalYear)
        .order_by_asc(emission::Column::Id)
        .all(db)
        .await?)
}

/// KPI row of one municipality and its emission history, read concurrently.
#[instrument(skip(db))]
pub async fn municipality_detail(
    db: &DatabaseConnection,
    city_code: &str,
) -> QueryResult<MunicipalityWithEmissions> {
    let ((kpi, municipality), emissions) = tokio::try_join!(
        municipality_kpi_row(db, city_code),
        emission_rows(db, city_code)
    )?;
    debug!(
        "Loaded municipality {} with {} emission rows",
        city_code,
        emissions.len()
    );

    Ok(MunicipalityWithEmissions {
        kpi,
        municipality,
        emissions,
    })
}

/// Number of municipalities with published KPIs in a prefecture.
#[instrument(skip(db))]
pub async fn published_municipality_count(db: &DatabaseConnection, code: &str) -> QueryResult<u64> {
    Ok(municipality_kpi::Entity::find()
        .inner_join(municipality::Entity)
        .filter(municipality::Column::PrefectureCode.eq(code))
        .count(db)
        .await?)
}

/// Summed emissions per fiscal year of the prefecture's municipalities that
/// have a KPI row, the same set the prefecture rollup is built from.
#[instrument(skip(db))]
pub async fn prefecture_emission_history(
    db: &DatabaseConnection,
    code: &str,
) -> QueryResult<BTreeMap<i32, f64>> {
    let published: Vec<String> = municipality_kpi::Entity::find()
        .select_only()
        .column(municipality_kpi::Column::CityCode)
        .inner_join(municipality::Entity)
        .filter(municipality::Column::PrefectureCode.eq(code))
        .into_tuple()
        .all(db)
        .await?;

    if published.is_empty() {
        trace!("Prefecture {} has no published municipalities", code);
        return Ok(BTreeMap::new());
    }

    let rows: Vec<EmissionRow> = emission::Entity::find()
        .filter(emission::Column::CityCode.is_in(published))
        .all(db)
        .await?
        .into_iter()
        .map(EmissionRow::from)
        .collect();
    trace!("Prefecture {} has {} emission rows", code, rows.len());
    Ok(yearly_totals(&rows))
}

/// Number of prefectures with a KPI row.
pub async fn prefecture_count(db: &DatabaseConnection) -> QueryResult<u64> {
    Ok(prefecture_kpi::Entity::find().count(db).await?)
}
