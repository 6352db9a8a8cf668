use axum::{
    extract::{Path, State},
    response::Json,
};
use axum_valid::Valid;
use common::{PrefectureKpi, PrefectureOverview};
use tracing::{debug, info, instrument, trace};

use crate::error::ApiError;
use crate::helpers::{converters, queries};
use crate::schemas::{ApiResponse, AppState, CachedData, ErrorResponse, PrefecturePath};

/// Get all prefectures ranked by pace achievement rate
#[utoipa::path(
    get,
    path = "/api/v1/prefectures",
    tag = "prefectures",
    responses(
        (status = 200, description = "Prefecture rankings retrieved successfully", body = ApiResponse<Vec<PrefectureKpi>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_prefectures(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PrefectureKpi>>>, ApiError> {
    trace!("Entering get_prefectures function");
    let cache_key = "prefectures".to_string();

    if let Some(CachedData::Prefectures(prefectures)) = state.cache.get(&cache_key).await {
        debug!("Serving {} prefectures from cache", prefectures.len());
        return Ok(Json(ApiResponse {
            data: prefectures,
            message: "Prefecture rankings retrieved from cache".to_string(),
            success: true,
        }));
    }

    let prefectures: Vec<PrefectureKpi> = queries::prefecture_rankings(&state.db)
        .await?
        .into_iter()
        .map(PrefectureKpi::from)
        .collect();
    info!("Retrieved {} prefecture rankings", prefectures.len());

    state
        .cache
        .insert(cache_key, CachedData::Prefectures(prefectures.clone()))
        .await;

    Ok(Json(ApiResponse {
        data: prefectures,
        message: "Prefecture rankings retrieved successfully".to_string(),
        success: true,
    }))
}

/// Get a prefecture overview with its municipality ranking and trajectory
#[utoipa::path(
    get,
    path = "/api/v1/prefectures/{prefecture_code}",
    tag = "prefectures",
    params(PrefecturePath),
    responses(
        (status = 200, description = "Prefecture overview retrieved successfully", body = ApiResponse<PrefectureOverview>),
        (status = 400, description = "Invalid prefecture code"),
        (status = 404, description = "Prefecture not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_prefecture(
    Valid(Path(path)): Valid<Path<PrefecturePath>>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PrefectureOverview>>, ApiError> {
    trace!("Entering get_prefecture function");
    let code = path.prefecture_code;
    let cache_key = format!("prefecture_{}", code);

    if let Some(CachedData::Prefecture(overview)) = state.cache.get(&cache_key).await {
        debug!("Serving prefecture {} from cache", code);
        return Ok(Json(ApiResponse {
            data: overview,
            message: "Prefecture overview retrieved from cache".to_string(),
            success: true,
        }));
    }

    let data = queries::prefecture_with_municipalities(&state.db, &code).await?;
    let history = queries::prefecture_emission_history(&state.db, &code).await?;
    let overview = converters::prefecture_overview(data, &history);
    info!(
        "Prefecture {} overview assembled with {} municipalities",
        code,
        overview.municipalities.len()
    );

    state
        .cache
        .insert(cache_key, CachedData::Prefecture(overview.clone()))
        .await;

    Ok(Json(ApiResponse {
        data: overview,
        message: "Prefecture overview retrieved successfully".to_string(),
        success: true,
    }))
}
