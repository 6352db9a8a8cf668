use crate::charts::{SectorReduction, SectorTrendPoint, TrajectoryPoint};
use crate::kpi::{MunicipalityKpi, MunicipalityRankingRow, PrefectureKpi};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Data behind the home page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct HomeSummary {
    pub featured: PrefectureKpi,
    /// Number of prefectures with published KPIs
    pub prefecture_count: usize,
}

/// Data behind a prefecture overview page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PrefectureOverview {
    pub prefecture: PrefectureKpi,
    /// Municipalities ordered by pace achievement rate, best first
    pub municipalities: Vec<MunicipalityRankingRow>,
    /// Trajectory in thousand t-CO₂
    pub trajectory: Vec<TrajectoryPoint>,
}

/// Data behind a municipality detail page.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct MunicipalityDetail {
    pub kpi: MunicipalityKpi,
    /// Municipalities published for the same prefecture
    pub peer_count: usize,
    pub sector_trend: Vec<SectorTrendPoint>,
    pub sector_reductions: Vec<SectorReduction>,
    pub trajectory: Vec<TrajectoryPoint>,
}
