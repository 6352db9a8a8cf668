use axum::{
    extract::{Path, State},
    response::Json,
};
use axum_valid::Valid;
use common::MunicipalityDetail;
use tracing::{debug, info, instrument, trace};

use crate::error::ApiError;
use crate::helpers::{converters, queries};
use crate::schemas::{ApiResponse, AppState, CachedData, ErrorResponse, MunicipalityPath};

/// Get a municipality's KPIs, sector breakdown and trajectory
#[utoipa::path(
    get,
    path = "/api/v1/municipalities/{city_code}",
    tag = "municipalities",
    params(MunicipalityPath),
    responses(
        (status = 200, description = "Municipality detail retrieved successfully", body = ApiResponse<MunicipalityDetail>),
        (status = 400, description = "Invalid city code"),
        (status = 404, description = "Municipality not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_municipality(
    Valid(Path(path)): Valid<Path<MunicipalityPath>>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<MunicipalityDetail>>, ApiError> {
    trace!("Entering get_municipality function");
    let city_code = path.city_code;
    let cache_key = format!("municipality_{}", city_code);

    if let Some(CachedData::Municipality(detail)) = state.cache.get(&cache_key).await {
        debug!("Serving municipality {} from cache", city_code);
        return Ok(Json(ApiResponse {
            data: detail,
            message: "Municipality detail retrieved from cache".to_string(),
            success: true,
        }));
    }

    let data = queries::municipality_detail(&state.db, &city_code).await?;
    let peer_count =
        queries::published_municipality_count(&state.db, &data.municipality.prefecture_code)
            .await?;
    let detail = converters::municipality_detail(data, peer_count as usize);
    info!(
        "Municipality {} detail assembled ({} trend points)",
        city_code,
        detail.sector_trend.len()
    );

    state
        .cache
        .insert(cache_key, CachedData::Municipality(detail.clone()))
        .await;

    Ok(Json(ApiResponse {
        data: detail,
        message: "Municipality detail retrieved successfully".to_string(),
        success: true,
    }))
}
