//! Assembles page payloads from query results.

use std::collections::BTreeMap;

use common::{
    MunicipalityDetail, MunicipalityRankingRow, PrefectureKpi, PrefectureOverview, TrajectoryPoint,
};
use compute::{EmissionRow, TrajectoryBuilder, aggregate_sector_trend, sector_reductions, yearly_totals};
use model::entities::{municipality, municipality_kpi};
use tracing::trace;

use super::queries::{MunicipalityWithEmissions, PrefectureWithMunicipalities};

/// Ranking line for one municipality. `rank` is 1-based.
pub fn ranking_row(
    rank: usize,
    kpi: &municipality_kpi::Model,
    municipality: &municipality::Model,
) -> MunicipalityRankingRow {
    MunicipalityRankingRow {
        rank: rank as i32,
        city_code: kpi.city_code.clone(),
        name: municipality.name.clone(),
        population: municipality.population,
        zero_carbon_declared: municipality.zero_carbon_declared,
        reduction_rate: kpi.reduction_rate,
        actual_pace: kpi.actual_pace,
        required_pace: kpi.required_pace,
        pace_achievement_rate: kpi.pace_achievement_rate,
        status: kpi.status.into(),
    }
}

/// Prefecture trajectory in thousand t-CO₂.
pub fn prefecture_trajectory(
    prefecture: &PrefectureKpi,
    history: &BTreeMap<i32, f64>,
) -> Vec<TrajectoryPoint> {
    TrajectoryBuilder::new(prefecture.base_emission_mt * 1000.0, prefecture.required_pace)
        .with_observed(history.iter().map(|(year, total)| (*year, *total)))
        .build()
}

pub fn prefecture_overview(
    data: PrefectureWithMunicipalities,
    history: &BTreeMap<i32, f64>,
) -> PrefectureOverview {
    let municipalities = data
        .municipalities
        .iter()
        .enumerate()
        .map(|(i, (kpi, municipality))| ranking_row(i + 1, kpi, municipality))
        .collect();

    let prefecture = PrefectureKpi::from(data.prefecture);
    let trajectory = prefecture_trajectory(&prefecture, history);

    PrefectureOverview {
        prefecture,
        municipalities,
        trajectory,
    }
}

pub fn municipality_detail(data: MunicipalityWithEmissions, peer_count: usize) -> MunicipalityDetail {
    let rows: Vec<EmissionRow> = data.emissions.iter().map(EmissionRow::from).collect();
    let kpi = data.kpi.into_dto(&data.municipality);

    let sector_trend = aggregate_sector_trend(&rows);
    let sector_reductions = sector_reductions(&rows, kpi.base_year, kpi.latest_year);
    let trajectory = TrajectoryBuilder::new_with_base_year(
        kpi.base_year,
        kpi.base_emission_kt,
        kpi.required_pace,
    )
    .with_observed(yearly_totals(&rows))
    .build();
    trace!(
        "Derived {} trend points and {} sector reductions for {}",
        sector_trend.len(),
        sector_reductions.len(),
        kpi.city_code
    );

    MunicipalityDetail {
        kpi,
        peer_count,
        sector_trend,
        sector_reductions,
        trajectory,
    }
}
