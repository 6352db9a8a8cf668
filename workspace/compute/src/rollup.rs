//! Prefecture figures from the KPIs of its municipalities.

use common::{PaceStatus, TARGET_REDUCTION_2030, TARGET_YEAR_2030};
use tracing::{debug, instrument};

use crate::kpi;
use crate::round_to;

/// The part of a municipality KPI the rollup needs.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberKpi {
    pub base_year: i32,
    /// Thousand t-CO₂
    pub base_emission_kt: f64,
    pub latest_year: i32,
    /// Thousand t-CO₂
    pub latest_emission_kt: f64,
    pub population: Option<i64>,
    pub status: PaceStatus,
}

/// Aggregated prefecture KPI. Emissions in million t-CO₂.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefectureRollup {
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
}

/// Sums member emissions and recomputes the pace figures from the sums.
///
/// Returns `None` for a prefecture without members.
#[instrument(skip(members), fields(members = members.len()))]
pub fn rollup_prefecture(members: &[MemberKpi]) -> Option<PrefectureRollup> {
    let base_year = members.iter().map(|m| m.base_year).min()?;
    let latest_year = members.iter().map(|m| m.latest_year).max()?;

    let total_base: f64 = members.iter().map(|m| m.base_emission_kt).sum();
    let total_latest: f64 = members.iter().map(|m| m.latest_emission_kt).sum();

    let known: Vec<i64> = members.iter().filter_map(|m| m.population).collect();
    let population: Option<i64> = (!known.is_empty()).then(|| known.iter().sum());

    let count = |status: PaceStatus| members.iter().filter(|m| m.status == status).count() as i32;

    let actual_pace = kpi::actual_pace(total_base, total_latest, base_year, latest_year);
    let required_pace = kpi::required_pace(TARGET_REDUCTION_2030, base_year, TARGET_YEAR_2030);
    let pace_achievement_rate = kpi::pace_achievement_rate(actual_pace, required_pace);
    let shortfall_kt = kpi::shortfall_2030(total_base, actual_pace, base_year);

    let rollup = PrefectureRollup {
        population,
        latest_year,
        base_emission_mt: round_to(total_base / 1000.0, 2),
        latest_emission_mt: round_to(total_latest / 1000.0, 2),
        reduction_rate: kpi::reduction_rate(total_base, total_latest),
        actual_pace,
        required_pace,
        pace_achievement_rate,
        status: PaceStatus::from_achievement_rate(pace_achievement_rate),
        shortfall_2030_mt: round_to(shortfall_kt / 1000.0, 2),
        municipality_count: members.len() as i32,
        on_track_count: count(PaceStatus::OnTrack),
        at_risk_count: count(PaceStatus::AtRisk),
        off_track_count: count(PaceStatus::OffTrack),
    };
    debug!(?rollup, "Rolled up prefecture");
    Some(rollup)
}
