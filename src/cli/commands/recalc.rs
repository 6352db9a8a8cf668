use anyhow::{Context, Result};
use compute::KpiRecalculator;
use sea_orm::Database;
use tracing::{debug, info, trace};

pub async fn recalculate(database_url: &str) -> Result<()> {
    trace!("Entering recalculate function");
    debug!("Database URL: {}", database_url);

    let db = Database::connect(database_url)
        .await
        .context("Failed to connect to database")?;

    let summary = KpiRecalculator::default()
        .run(&db)
        .await
        .context("KPI recalculation failed")?;

    info!(
        "Recalculated {} municipalities ({} skipped) and {} prefectures",
        summary.municipalities_updated,
        summary.municipalities_skipped,
        summary.prefectures_updated
    );
    Ok(())
}
