use anyhow::{Context, Result, bail};
use common::Sector;
use common::codes::{is_city_code, is_prefecture_code};
use model::entities::{emission, municipality, pace_status::PaceStatus, prefecture_kpi};
use sea_orm::{
    ConnectionTrait, Database, EntityTrait, Set, TransactionTrait, sea_query::OnConflict,
};
use serde::Deserialize;
use std::collections::{BTreeSet, HashSet};
use std::fs::File;
use std::path::Path;
use tracing::{debug, info, trace, warn};

/// Dataset file layout
#[derive(Debug, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub prefectures: Vec<PrefectureRecord>,
    #[serde(default)]
    pub municipalities: Vec<MunicipalityRecord>,
    #[serde(default)]
    pub emissions: Vec<EmissionRecord>,
}

#[derive(Debug, Deserialize)]
pub struct PrefectureRecord {
    pub code: String,
    pub name: String,
    pub slug: String,
    pub population: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct MunicipalityRecord {
    pub city_code: String,
    pub prefecture_code: String,
    pub name: String,
    pub population: Option<i64>,
    pub area_km2: Option<f64>,
    #[serde(default)]
    pub zero_carbon_declared: bool,
    pub zero_carbon_year: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct EmissionRecord {
    pub city_code: String,
    pub fiscal_year: i32,
    pub sector: String,
    /// Thousand t-CO₂
    pub value_kt_co2: f64,
}

impl Dataset {
    /// Rejects malformed codes before anything is written.
    pub fn validate(&self) -> Result<()> {
        for prefecture in &self.prefectures {
            if !is_prefecture_code(&prefecture.code) {
                bail!("Invalid prefecture code '{}'", prefecture.code);
            }
        }
        for municipality in &self.municipalities {
            if !is_city_code(&municipality.city_code) {
                bail!("Invalid city code '{}'", municipality.city_code);
            }
            if !is_prefecture_code(&municipality.prefecture_code) {
                bail!(
                    "Invalid prefecture code '{}' for {}",
                    municipality.prefecture_code,
                    municipality.city_code
                );
            }
            if !municipality.city_code.starts_with(&municipality.prefecture_code) {
                warn!(
                    "City code {} does not start with its prefecture code {}",
                    municipality.city_code, municipality.prefecture_code
                );
            }
        }
        for row in &self.emissions {
            if !is_city_code(&row.city_code) {
                bail!("Invalid city code '{}' in emission rows", row.city_code);
            }
        }

        let unknown: BTreeSet<&str> = self
            .emissions
            .iter()
            .filter(|row| Sector::from_name(&row.sector).is_none())
            .map(|row| row.sector.as_str())
            .collect();
        if !unknown.is_empty() {
            warn!(
                "Dataset contains sectors outside the catalogue, they only count in totals: {:?}",
                unknown
            );
        }
        Ok(())
    }
}

pub fn load_dataset(json_path: &str) -> Result<Dataset> {
    let path = Path::new(json_path);
    let file = File::open(path).with_context(|| format!("Failed to open file: {}", json_path))?;
    let dataset: Dataset = serde_json::from_reader(file).context("Failed to parse JSON")?;
    info!(
        "Loaded {} prefectures, {} municipalities and {} emission rows",
        dataset.prefectures.len(),
        dataset.municipalities.len(),
        dataset.emissions.len()
    );
    Ok(dataset)
}

/// Writes the dataset, replacing rows with matching keys.
pub async fn store_dataset<C>(db: &C, dataset: &Dataset) -> Result<()>
where
    C: ConnectionTrait + TransactionTrait,
{
    dataset.validate()?;
    let txn = db.begin().await?;

    info!("Importing prefectures...");
    for record in &dataset.prefectures {
        // KPI columns stay zero until the next recalculation
        let row = prefecture_kpi::ActiveModel {
            prefecture_code: Set(record.code.clone()),
            prefecture_name: Set(record.name.clone()),
            prefecture_slug: Set(record.slug.clone()),
            population: Set(record.population),
            latest_year: Set(common::BASE_YEAR),
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
        };
        prefecture_kpi::Entity::insert(row)
            .on_conflict(
                OnConflict::column(prefecture_kpi::Column::PrefectureCode)
                    .update_columns([
                        prefecture_kpi::Column::PrefectureName,
                        prefecture_kpi::Column::PrefectureSlug,
                        prefecture_kpi::Column::Population,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await
            .with_context(|| format!("Failed to import prefecture {}", record.code))?;
        debug!("Imported prefecture {} ({})", record.code, record.name);
    }

    info!("Importing municipalities...");
    for record in &dataset.municipalities {
        let row = municipality::ActiveModel {
            city_code: Set(record.city_code.clone()),
            prefecture_code: Set(record.prefecture_code.clone()),
            name: Set(record.name.clone()),
            population: Set(record.population),
            area_km2: Set(record.area_km2),
            zero_carbon_declared: Set(record.zero_carbon_declared),
            zero_carbon_year: Set(record.zero_carbon_year),
        };
        municipality::Entity::insert(row)
            .on_conflict(
                OnConflict::column(municipality::Column::CityCode)
                    .update_columns([
                        municipality::Column::PrefectureCode,
                        municipality::Column::Name,
                        municipality::Column::Population,
                        municipality::Column::AreaKm2,
                        municipality::Column::ZeroCarbonDeclared,
                        municipality::Column::ZeroCarbonYear,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&txn)
            .await
            .with_context(|| format!("Failed to import municipality {}", record.city_code))?;
        trace!("Imported municipality {}", record.city_code);
    }

    info!("Importing emission rows...");
    let mut cities: HashSet<&str> = HashSet::new();
    for record in &dataset.emissions {
        let row = emission::ActiveModel {
            city_code: Set(record.city_code.clone()),
            fiscal_year: Set(record.fiscal_year),
            sector: Set(record.sector.trim().to_string()),
            value_kt_co2: Set(record.value_kt_co2),
            ..Default::default()
        };
        emission::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([
                    emission::Column::CityCode,
                    emission::Column::FiscalYear,
                    emission::Column::Sector,
                ])
                .update_column(emission::Column::ValueKtCo2)
                .to_owned(),
            )
            .exec_without_returning(&txn)
            .await
            .with_context(|| {
                format!(
                    "Failed to import emission {} {} {}",
                    record.city_code, record.fiscal_year, record.sector
                )
            })?;
        cities.insert(record.city_code.as_str());
    }
    debug!("Imported emissions for {} municipalities", cities.len());

    txn.commit().await?;
    Ok(())
}

pub async fn import_dataset(json_path: &str, database_url: &str) -> Result<()> {
    trace!("Entering import_dataset function");
    info!("Starting dataset import");
    debug!("JSON path: {}", json_path);
    debug!("Database URL: {}", database_url);

    let dataset = load_dataset(json_path)?;

    let db = Database::connect(database_url)
        .await
        .context("Failed to connect to database")?;
    info!("Connected to database");

    store_dataset(&db, &dataset).await?;

    info!("Dataset import completed successfully!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{DatabaseConnection, EntityTrait};
    use std::io::Write;

    const DATASET: &str = r#"{
        "prefectures": [
            {"code": "13", "name": "東京都", "slug": "tokyo", "population": 14047594}
        ],
        "municipalities": [
            {"city_code": "13101", "prefecture_code": "13", "name": "千代田区",
             "population": 66680, "area_km2": 11.66, "zero_carbon_declared": true,
             "zero_carbon_year": 2021},
            {"city_code": "13102", "prefecture_code": "13", "name": "中央区",
             "population": 169179, "area_km2": 10.21}
        ],
        "emissions": [
            {"city_code": "13101", "fiscal_year": 2013, "sector": "業務その他", "value_kt_co2": 3120.5},
            {"city_code": "13101", "fiscal_year": 2021, "sector": "業務その他", "value_kt_co2": 2480.0},
            {"city_code": "13102", "fiscal_year": 2013, "sector": "家庭", "value_kt_co2": 210.0}
        ]
    }"#;

    async fn setup_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_import_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(DATASET.as_bytes()).unwrap();

        let dataset = load_dataset(file.path().to_str().unwrap()).unwrap();
        let db = setup_db().await;
        store_dataset(&db, &dataset).await.unwrap();

        let municipalities = municipality::Entity::find().all(&db).await.unwrap();
        assert_eq!(municipalities.len(), 2);
        let emissions = emission::Entity::find().all(&db).await.unwrap();
        assert_eq!(emissions.len(), 3);
    }

    #[tokio::test]
    async fn test_reimport_replaces_matching_rows() {
        let db = setup_db().await;
        let dataset: Dataset = serde_json::from_str(DATASET).unwrap();
        store_dataset(&db, &dataset).await.unwrap();

        let update: Dataset = serde_json::from_str(
            r#"{
                "municipalities": [
                    {"city_code": "13101", "prefecture_code": "13", "name": "千代田区",
                     "population": 67000, "area_km2": 11.66, "zero_carbon_declared": true,
                     "zero_carbon_year": 2021}
                ],
                "emissions": [
                    {"city_code": "13101", "fiscal_year": 2021, "sector": "業務その他", "value_kt_co2": 2400.0}
                ]
            }"#,
        )
        .unwrap();
        store_dataset(&db, &update).await.unwrap();

        let chiyoda = municipality::Entity::find_by_id("13101".to_string())
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(chiyoda.population, Some(67000));

        let emissions = emission::Entity::find().all(&db).await.unwrap();
        assert_eq!(emissions.len(), 3);
        let latest = emissions
            .iter()
            .find(|e| e.city_code == "13101" && e.fiscal_year == 2021)
            .unwrap();
        assert_eq!(latest.value_kt_co2, 2400.0);
    }

    #[test]
    fn test_invalid_codes_are_rejected() {
        let dataset: Dataset = serde_json::from_str(
            r#"{"prefectures": [{"code": "1", "name": "x", "slug": "x", "population": null}]}"#,
        )
        .unwrap();
        assert!(dataset.validate().is_err());

        let dataset: Dataset = serde_json::from_str(
            r#"{"emissions": [{"city_code": "13A01", "fiscal_year": 2013, "sector": "家庭", "value_kt_co2": 1.0}]}"#,
        )
        .unwrap();
        assert!(dataset.validate().is_err());
    }
}
