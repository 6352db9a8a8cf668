use crate::config::build_cache;
use crate::router::create_router;
use crate::schemas::AppState;
use axum::Router;
use chrono::NaiveDate;
use compute::KpiRecalculator;
use migration::{Migrator, MigratorTrait};
use model::entities::{emission, municipality, pace_status::PaceStatus, prefecture_kpi};
use sea_orm::{ActiveModelTrait, ConnectionTrait, Database, DatabaseConnection, Set};
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Create an in-memory SQLite database for testing
pub async fn setup_test_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    db.execute_unprepared("PRAGMA foreign_keys = ON;")
        .await
        .expect("Failed to enable foreign keys");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

async fn insert_prefecture(db: &DatabaseConnection, code: &str, name: &str, slug: &str) {
    prefecture_kpi::ActiveModel {
        prefecture_code: Set(code.to_string()),
        prefecture_name: Set(name.to_string()),
        prefecture_slug: Set(slug.to_string()),
        population: Set(None),
        latest_year: Set(2013),
        base_emission_mt: Set(0.0),
        latest_emission_mt: Set(0.0),
        reduction_rate: Set(0.0),
        actual_pace: Set(0.0),
        required_pace: Set(0.0),
        pace_achievement_rate: Set(0.0),
        status: Set(PaceStatus::OffTrack),
        shortfall_2030_mt: Set(0.0),
        municipality_count: Set(0),
        on_track_count: Set(0),
        at_risk_count: Set(0),
        off_track_count: Set(0),
        calculated_at: Set(None),
    }
    .insert(db)
    .await
    .expect("Failed to create test prefecture");
}

pub async fn insert_municipality(
    db: &DatabaseConnection,
    city_code: &str,
    name: &str,
    population: Option<i64>,
    zero_carbon_year: Option<i32>,
) {
    municipality::ActiveModel {
        city_code: Set(city_code.to_string()),
        prefecture_code: Set(city_code[..2].to_string()),
        name: Set(name.to_string()),
        population: Set(population),
        area_km2: Set(None),
        zero_carbon_declared: Set(zero_carbon_year.is_some()),
        zero_carbon_year: Set(zero_carbon_year),
    }
    .insert(db)
    .await
    .expect("Failed to create test municipality");
}

pub async fn insert_emission(db: &DatabaseConnection, city_code: &str, year: i32, sector: &str, value: f64) {
    emission::ActiveModel {
        city_code: Set(city_code.to_string()),
        fiscal_year: Set(year),
        sector: Set(sector.to_string()),
        value_kt_co2: Set(value),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect("Failed to create test emission row");
}

/// Seeds two prefectures and four municipalities, then computes their KPIs.
///
/// 13101 is on track, 13102 at risk, 13103 off track and 13104 has no
/// later year data so it gets no KPI row. Kanagawa has no municipalities.
pub async fn seed_test_data(db: &DatabaseConnection) {
    insert_prefecture(db, "13", "東京都", "tokyo").await;
    insert_prefecture(db, "14", "神奈川県", "kanagawa").await;

    insert_municipality(db, "13101", "千代田区", Some(66_680), Some(2021)).await;
    insert_municipality(db, "13102", "中央区", Some(169_179), None).await;
    insert_municipality(db, "13103", "港区", Some(260_486), Some(2022)).await;
    insert_municipality(db, "13104", "新宿区", Some(349_385), None).await;

    let rows = [
        ("13101", 2013, "業務その他", 800.0),
        ("13101", 2013, "家庭", 200.0),
        ("13101", 2019, "業務その他", 560.0),
        ("13101", 2019, "家庭", 160.0),
        ("13101", 2021, "業務その他", 450.0),
        ("13101", 2021, "家庭", 150.0),
        ("13102", 2013, "製造業", 300.0),
        ("13102", 2013, "旅客", 700.0),
        ("13102", 2021, "製造業", 250.0),
        ("13102", 2021, "旅客", 500.0),
        ("13102", 2021, "エネルギー転換", 40.0),
        ("13103", 2013, "家庭", 500.0),
        ("13103", 2021, "家庭", 500.0),
        ("13104", 2013, "家庭", 420.0),
    ];
    for (city_code, year, sector, value) in rows {
        insert_emission(db, city_code, year, sector, value).await;
    }

    let now = NaiveDate::from_ymd_opt(2025, 3, 1)
        .and_then(|d| d.and_hms_opt(9, 0, 0))
        .expect("valid timestamp");
    KpiRecalculator::new_with_time(now)
        .run(db)
        .await
        .expect("Failed to compute test KPIs");
}

/// Create AppState for testing
pub async fn setup_test_app_state() -> AppState {
    let db = setup_test_db().await;
    seed_test_data(&db).await;

    AppState {
        db,
        cache: build_cache(Duration::from_secs(60)),
        featured_prefecture: "13".to_string(),
    }
}

/// Initialize tracing for tests with output to STDERR.
///
/// The log level is taken from RUST_LOG, defaulting to WARN.
pub fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let log_level = std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| match level.to_uppercase().as_str() {
            "ERROR" => Some(Level::ERROR),
            "WARN" => Some(Level::WARN),
            "INFO" => Some(Level::INFO),
            "DEBUG" => Some(Level::DEBUG),
            "TRACE" => Some(Level::TRACE),
            _ => None,
        })
        .unwrap_or(Level::WARN);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Create axum app for testing
pub async fn setup_test_app() -> Router {
    let state = setup_test_app_state().await;
    create_router(state)
}
