use common::{
    HomeSummary, MunicipalityDetail, MunicipalityKpi, MunicipalityRankingRow, PaceStatus,
    PrefectureKpi, PrefectureOverview, Sector, SectorReduction, SectorTrendPoint,
    TrajectoryPoint,
};
use moka::future::Cache;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, OpenApi, ToSchema};
use validator::{Validate, ValidationError};

pub use common::{ApiResponse, ErrorResponse};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Cache for assembled page payloads
    pub cache: Cache<String, CachedData>,
    /// Prefecture shown on the home page
    pub featured_prefecture: String,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Home(HomeSummary),
    Prefectures(Vec<PrefectureKpi>),
    Prefecture(PrefectureOverview),
    Municipality(MunicipalityDetail),
}

fn validate_digits(value: &str) -> Result<(), ValidationError> {
    if value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::new("digits"))
    }
}

/// Path parameters of the prefecture endpoints
#[derive(Debug, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Path)]
pub struct PrefecturePath {
    /// Two digit prefecture code, e.g. `13`
    #[validate(length(equal = 2), custom(function = "validate_digits"))]
    pub prefecture_code: String,
}

/// Path parameters of the municipality endpoints
#[derive(Debug, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Path)]
pub struct MunicipalityPath {
    /// Five digit local government code, e.g. `13101`
    #[validate(length(equal = 5), custom(function = "validate_digits"))]
    pub city_code: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::home::get_home,
        crate::handlers::prefectures::get_prefectures,
        crate::handlers::prefectures::get_prefecture,
        crate::handlers::municipalities::get_municipality,
    ),
    components(
        schemas(
            ApiResponse<HomeSummary>,
            ApiResponse<Vec<PrefectureKpi>>,
            ApiResponse<PrefectureOverview>,
            ApiResponse<MunicipalityDetail>,
            ErrorResponse,
            HealthResponse,
            HomeSummary,
            PrefectureOverview,
            MunicipalityDetail,
            PrefectureKpi,
            MunicipalityKpi,
            MunicipalityRankingRow,
            PaceStatus,
            Sector,
            SectorReduction,
            SectorTrendPoint,
            TrajectoryPoint,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "home", description = "Home page summary"),
        (name = "prefectures", description = "Prefecture rankings and overviews"),
        (name = "municipalities", description = "Municipality detail pages"),
    ),
    info(
        title = "carbonpace API",
        description = "Municipal CO₂ reduction pace dashboard - actual versus required reduction pace towards the 2030 and 2050 targets",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
