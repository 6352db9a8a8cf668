use crate::handlers::{
    health::health_check,
    home::get_home,
    municipalities::get_municipality,
    prefectures::{get_prefecture, get_prefectures},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{Router, routing::get};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Dashboard pages
        .route("/api/v1/home", get(get_home))
        .route("/api/v1/prefectures", get(get_prefectures))
        .route("/api/v1/prefectures/:prefecture_code", get(get_prefecture))
        .route("/api/v1/municipalities/:city_code", get(get_municipality))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
