use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Classification derived from the pace achievement rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PaceStatus {
    OnTrack,
    AtRisk,
    OffTrack,
}

impl PaceStatus {
    /// Achievement rate (%) at or above which a pace counts as on track.
    pub const ON_TRACK_THRESHOLD: f64 = 100.0;
    /// Achievement rate (%) at or above which a pace counts as at risk.
    pub const AT_RISK_THRESHOLD: f64 = 80.0;

    pub fn from_achievement_rate(rate: f64) -> Self {
        if rate >= Self::ON_TRACK_THRESHOLD {
            PaceStatus::OnTrack
        } else if rate >= Self::AT_RISK_THRESHOLD {
            PaceStatus::AtRisk
        } else {
            PaceStatus::OffTrack
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PaceStatus::OnTrack => "on-track",
            PaceStatus::AtRisk => "at-risk",
            PaceStatus::OffTrack => "off-track",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaceStatus::OnTrack => "On Track",
            PaceStatus::AtRisk => "At Risk",
            PaceStatus::OffTrack => "Off Track",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            PaceStatus::OnTrack => "#2d6b45",
            PaceStatus::AtRisk => "#b87020",
            PaceStatus::OffTrack => "#8b2a2a",
        }
    }
}

impl fmt::Display for PaceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on-track" => Ok(PaceStatus::OnTrack),
            "at-risk" => Ok(PaceStatus::AtRisk),
            "off-track" => Ok(PaceStatus::OffTrack),
            other => Err(format!("unknown pace status '{}'", other)),
        }
    }
}

/// Prefecture level KPI row. Emissions are in million t-CO₂.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PrefectureKpi {
    /// Two digit prefecture code
    pub code: String,
    pub name: String,
    /// Romanized name used in URLs
    pub slug: String,
    pub population: Option<i64>,
    pub latest_year: i32,
    pub base_emission_mt: f64,
    pub latest_emission_mt: f64,
    pub reduction_rate: f64,
    /// Observed average annual reduction (%/year)
    pub actual_pace: f64,
    /// Annual reduction needed for the 2030 target (%/year)
    pub required_pace: f64,
    pub pace_achievement_rate: f64,
    pub status: PaceStatus,
    pub shortfall_2030_mt: f64,
    pub municipality_count: i32,
    pub on_track_count: i32,
    pub at_risk_count: i32,
    pub off_track_count: i32,
    pub calculated_at: Option<NaiveDateTime>,
}

/// Municipality level KPI row. Emissions are in thousand t-CO₂.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MunicipalityKpi {
    /// Five digit local government code
    pub city_code: String,
    pub name: String,
    pub prefecture_code: String,
    pub population: Option<i64>,
    pub area_km2: Option<f64>,
    pub zero_carbon_declared: bool,
    pub zero_carbon_year: Option<i32>,
    pub base_year: i32,
    pub base_emission_kt: f64,
    pub latest_year: i32,
    pub latest_emission_kt: f64,
    pub reduction_rate: f64,
    pub actual_pace: f64,
    pub required_pace: f64,
    pub pace_achievement_rate: f64,
    pub status: PaceStatus,
    pub shortfall_2030_kt: f64,
    /// t-CO₂ per resident
    pub emission_per_capita: Option<f64>,
    /// Standing among similar sized peers, centered at 50
    pub deviation_score: Option<f64>,
    pub pref_rank: Option<i32>,
    pub national_rank: Option<i32>,
}

/// One line of a prefecture's municipality ranking.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MunicipalityRankingRow {
    pub rank: i32,
    pub city_code: String,
    pub name: String,
    pub population: Option<i64>,
    pub zero_carbon_declared: bool,
    pub reduction_rate: f64,
    pub actual_pace: f64,
    pub required_pace: f64,
    pub pace_achievement_rate: f64,
    pub status: PaceStatus,
}
