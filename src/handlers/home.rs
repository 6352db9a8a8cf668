use axum::{extract::State, response::Json};
use common::{HomeSummary, PrefectureKpi};
use tracing::{debug, info, instrument, trace};

use crate::error::ApiError;
use crate::helpers::queries;
use crate::schemas::{ApiResponse, AppState, CachedData, ErrorResponse};

const CACHE_KEY: &str = "home";

/// Home page summary: the featured prefecture and the number of published prefectures
#[utoipa::path(
    get,
    path = "/api/v1/home",
    tag = "home",
    responses(
        (status = 200, description = "Home summary retrieved successfully", body = ApiResponse<HomeSummary>),
        (status = 404, description = "Featured prefecture not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_home(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<HomeSummary>>, ApiError> {
    trace!("Entering get_home function");

    if let Some(CachedData::Home(summary)) = state.cache.get(CACHE_KEY).await {
        debug!("Serving home summary from cache");
        return Ok(Json(ApiResponse {
            data: summary,
            message: "Home summary retrieved from cache".to_string(),
            success: true,
        }));
    }

    let (featured, prefecture_count) = tokio::try_join!(
        queries::prefecture(&state.db, &state.featured_prefecture),
        queries::prefecture_count(&state.db)
    )?;

    let summary = HomeSummary {
        featured: PrefectureKpi::from(featured),
        prefecture_count: prefecture_count as usize,
    };
    info!(
        "Home summary assembled for prefecture {}",
        summary.featured.code
    );

    state
        .cache
        .insert(CACHE_KEY.to_string(), CachedData::Home(summary.clone()))
        .await;

    Ok(Json(ApiResponse {
        data: summary,
        message: "Home summary retrieved successfully".to_string(),
        success: true,
    }))
}
