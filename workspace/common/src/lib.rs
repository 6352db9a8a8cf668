//! Common transport-layer types shared between backend and frontend.
//! These structs mirror the backend handlers' response payloads so the
//! frontend can deserialize API responses without duplicating shapes.

mod charts;
pub mod codes;
pub mod format;
mod kpi;
mod pages;
pub mod sector;

pub use charts::{SectorReduction, SectorTrendPoint, TrajectoryPoint};
pub use kpi::{MunicipalityKpi, MunicipalityRankingRow, PaceStatus, PrefectureKpi};
pub use pages::{HomeSummary, MunicipalityDetail, PrefectureOverview};
pub use sector::{Sector, SectorBucket};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fiscal year all reductions are measured against (Paris Agreement base).
pub const BASE_YEAR: i32 = 2013;
/// Mid-term national target year.
pub const TARGET_YEAR_2030: i32 = 2030;
/// Long-term national target year.
pub const TARGET_YEAR_2050: i32 = 2050;
/// Reduction from the base year required by 2030.
pub const TARGET_REDUCTION_2030: f64 = 0.46;
/// Reduction from the base year required by 2050.
pub const TARGET_REDUCTION_2050: f64 = 0.80;

/// Generic API response wrapper used by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

/// Error body returned by the backend for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}
