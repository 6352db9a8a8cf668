use common::codes::{is_city_code, is_prefecture_code};
use common::{HomeSummary, MunicipalityDetail, PrefectureKpi, PrefectureOverview};

use super::{get, ApiError};

pub async fn fetch_home() -> Result<HomeSummary, ApiError> {
    log::trace!("Fetching home summary");
    get("/home").await
}

pub async fn fetch_prefectures() -> Result<Vec<PrefectureKpi>, ApiError> {
    log::trace!("Fetching prefecture rankings");
    get("/prefectures").await
}

pub async fn fetch_prefecture(code: String) -> Result<PrefectureOverview, ApiError> {
    log::trace!("Fetching prefecture overview: {}", code);
    if !is_prefecture_code(&code) {
        log::warn!("Malformed prefecture code: {}", code);
        return Err(ApiError::NotFound);
    }
    get(&format!("/prefectures/{}", code)).await
}

pub async fn fetch_municipality(city_code: String) -> Result<MunicipalityDetail, ApiError> {
    log::trace!("Fetching municipality detail: {}", city_code);
    if !is_city_code(&city_code) {
        log::warn!("Malformed city code: {}", city_code);
        return Err(ApiError::NotFound);
    }
    get(&format!("/municipalities/{}", city_code)).await
}
