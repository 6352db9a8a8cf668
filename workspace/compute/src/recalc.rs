//! Rebuilds the stored KPI tables from the raw emission inventory.
//!
//! Runs in one transaction: municipality KPIs are replaced wholesale, then
//! each prefecture row is updated from its members.

use std::collections::HashMap;

use chrono::{NaiveDateTime, Utc};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, TransactionTrait,
};
use tracing::{debug, info, instrument, warn};

use common::BASE_YEAR;
use model::entities::{emission, municipality, municipality_kpi, prefecture_kpi};

use crate::error::Result;
use crate::kpi::{KpiCalculator, KpiFigures, KpiInput};
use crate::ranking::rank_by_achievement;
use crate::rollup::{MemberKpi, rollup_prefecture};
use crate::sector::{EmissionRow, yearly_totals};
use crate::stats::{PeerValue, peer_deviation_scores};

/// SQLite caps bound parameters per statement; keep inserts well below it.
const INSERT_BATCH: usize = 50;

/// Outcome of a recalculation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecalcSummary {
    pub municipalities_updated: usize,
    /// Municipalities without a usable base/latest year pair
    pub municipalities_skipped: usize,
    pub prefectures_updated: usize,
}

struct Computed<'a> {
    municipality: &'a municipality::Model,
    input: KpiInput,
    figures: KpiFigures,
}

/// Recomputes `municipality_kpis` and `prefecture_kpis`.
#[derive(Debug, Clone)]
pub struct KpiRecalculator {
    calculator: KpiCalculator,
    now: NaiveDateTime,
}

impl Default for KpiRecalculator {
    fn default() -> Self {
        Self::new_with_time(Utc::now().naive_utc())
    }
}

impl KpiRecalculator {
    /// Uses `now` as the `calculated_at` stamp.
    pub fn new_with_time(now: NaiveDateTime) -> Self {
        Self {
            calculator: KpiCalculator::new(BASE_YEAR),
            now,
        }
    }

    #[instrument(skip(self, db))]
    pub async fn run(&self, db: &DatabaseConnection) -> Result<RecalcSummary> {
        info!("Recalculating KPIs");

        let municipalities = municipality::Entity::find()
            .order_by_asc(municipality::Column::CityCode)
            .all(db)
            .await?;
        let emissions = emission::Entity::find().all(db).await?;
        debug!(
            "Loaded {} municipalities and {} emission rows",
            municipalities.len(),
            emissions.len()
        );

        let mut history: HashMap<String, Vec<EmissionRow>> = HashMap::new();
        for row in &emissions {
            history
                .entry(row.city_code.clone())
                .or_default()
                .push(EmissionRow::from(row));
        }

        let mut summary = RecalcSummary::default();
        let mut computed: Vec<Computed> = Vec::with_capacity(municipalities.len());
        for municipality in &municipalities {
            let rows = history
                .get(&municipality.city_code)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            let Some(input) = self.input_for(municipality, rows) else {
                warn!(
                    city_code = %municipality.city_code,
                    "No base and later year emissions, skipping"
                );
                summary.municipalities_skipped += 1;
                continue;
            };
            let figures = self.calculator.calculate(&input)?;
            computed.push(Computed {
                municipality,
                input,
                figures,
            });
        }

        let peers: Vec<PeerValue> = computed
            .iter()
            .map(|c| PeerValue {
                city_code: c.municipality.city_code.clone(),
                prefecture_code: c.municipality.prefecture_code.clone(),
                population: c.municipality.population,
                reduction_rate: c.figures.reduction_rate,
            })
            .collect();
        let deviation_scores = peer_deviation_scores(&peers)?;

        let national_ranks = rank_by_achievement(
            computed
                .iter()
                .map(|c| (c.municipality.city_code.as_str(), c.figures.pace_achievement_rate)),
        );

        let mut by_prefecture: HashMap<&str, Vec<&Computed>> = HashMap::new();
        for c in &computed {
            by_prefecture
                .entry(c.municipality.prefecture_code.as_str())
                .or_default()
                .push(c);
        }
        let mut pref_ranks: HashMap<String, i32> = HashMap::new();
        for members in by_prefecture.values() {
            pref_ranks.extend(rank_by_achievement(members.iter().map(|c| {
                (c.municipality.city_code.as_str(), c.figures.pace_achievement_rate)
            })));
        }

        let rows: Vec<municipality_kpi::ActiveModel> = computed
            .iter()
            .map(|c| {
                let city_code = &c.municipality.city_code;
                municipality_kpi::ActiveModel {
                    city_code: Set(city_code.clone()),
                    base_year: Set(c.input.base_year),
                    base_emission_kt: Set(c.input.base_emission),
                    latest_year: Set(c.input.latest_year),
                    latest_emission_kt: Set(c.input.latest_emission),
                    reduction_rate: Set(c.figures.reduction_rate),
                    actual_pace: Set(c.figures.actual_pace),
                    required_pace: Set(c.figures.required_pace),
                    pace_achievement_rate: Set(c.figures.pace_achievement_rate),
                    status: Set(c.figures.status.into()),
                    shortfall_2030_kt: Set(c.figures.shortfall_2030),
                    emission_per_capita: Set(c.figures.emission_per_capita),
                    deviation_score: Set(deviation_scores.get(city_code).copied()),
                    pref_rank: Set(pref_ranks.get(city_code).copied()),
                    national_rank: Set(national_ranks.get(city_code).copied()),
                    calculated_at: Set(Some(self.now)),
                }
            })
            .collect();

        let txn = db.begin().await?;

        municipality_kpi::Entity::delete_many().exec(&txn).await?;
        for batch in rows.chunks(INSERT_BATCH) {
            municipality_kpi::Entity::insert_many(batch.to_vec())
                .exec_without_returning(&txn)
                .await?;
        }
        summary.municipalities_updated = rows.len();

        let prefectures = prefecture_kpi::Entity::find().all(&txn).await?;
        for prefecture in prefectures {
            let members: Vec<MemberKpi> = by_prefecture
                .get(prefecture.prefecture_code.as_str())
                .map(|members| {
                    members
                        .iter()
                        .map(|c| MemberKpi {
                            base_year: c.input.base_year,
                            base_emission_kt: c.input.base_emission,
                            latest_year: c.input.latest_year,
                            latest_emission_kt: c.input.latest_emission,
                            population: c.municipality.population,
                            status: c.figures.status,
                        })
                        .collect()
                })
                .unwrap_or_default();

            let Some(rollup) = rollup_prefecture(&members) else {
                warn!(
                    prefecture_code = %prefecture.prefecture_code,
                    "Prefecture has no computed municipalities, keeping stored KPI"
                );
                continue;
            };

            let population = prefecture.population.or(rollup.population);
            let mut active: prefecture_kpi::ActiveModel = prefecture.into();
            active.population = Set(population);
            active.latest_year = Set(rollup.latest_year);
            active.base_emission_mt = Set(rollup.base_emission_mt);
            active.latest_emission_mt = Set(rollup.latest_emission_mt);
            active.reduction_rate = Set(rollup.reduction_rate);
            active.actual_pace = Set(rollup.actual_pace);
            active.required_pace = Set(rollup.required_pace);
            active.pace_achievement_rate = Set(rollup.pace_achievement_rate);
            active.status = Set(rollup.status.into());
            active.shortfall_2030_mt = Set(rollup.shortfall_2030_mt);
            active.municipality_count = Set(rollup.municipality_count);
            active.on_track_count = Set(rollup.on_track_count);
            active.at_risk_count = Set(rollup.at_risk_count);
            active.off_track_count = Set(rollup.off_track_count);
            active.calculated_at = Set(Some(self.now));
            active.update(&txn).await?;
            summary.prefectures_updated += 1;
        }

        txn.commit().await?;

        info!(?summary, "KPI recalculation finished");
        Ok(summary)
    }

    /// Base year total and the latest later year total of one municipality.
    fn input_for(&self, municipality: &municipality::Model, rows: &[EmissionRow]) -> Option<KpiInput> {
        let totals = yearly_totals(rows);
        let base_year = self.calculator.base_year();
        let base_emission = *totals.get(&base_year)?;
        if base_emission <= 0.0 {
            return None;
        }
        let (&latest_year, &latest_emission) = totals.range(base_year + 1..).next_back()?;

        Some(KpiInput {
            base_year,
            base_emission,
            latest_year,
            latest_emission,
            population: municipality.population,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use migration::{Migrator, MigratorTrait};
    use model::entities::pace_status::PaceStatus;
    use sea_orm::{ConnectionTrait, Database, DbErr};

    async fn setup_db() -> std::result::Result<DatabaseConnection, DbErr> {
        let db = Database::connect("sqlite::memory:").await?;
        db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;
        Migrator::up(&db, None).await?;
        Ok(db)
    }

    async fn seed(db: &DatabaseConnection) -> std::result::Result<(), DbErr> {
        prefecture_kpi::ActiveModel {
            prefecture_code: Set("13".to_string()),
            prefecture_name: Set("東京都".to_string()),
            prefecture_slug: Set("tokyo".to_string()),
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
        .await?;

        let cities = [
            ("13101", "千代田区", Some(60_000)),
            ("13102", "中央区", Some(70_000)),
            ("13103", "港区", Some(80_000)),
        ];
        for (code, name, population) in cities {
            municipality::ActiveModel {
                city_code: Set(code.to_string()),
                prefecture_code: Set("13".to_string()),
                name: Set(name.to_string()),
                population: Set(population),
                area_km2: Set(None),
                zero_carbon_declared: Set(false),
                zero_carbon_year: Set(None),
            }
            .insert(db)
            .await?;
        }

        let emissions = [
            // 1000 -> 600: well ahead of pace
            ("13101", 2013, "製造業", 600.0),
            ("13101", 2013, "家庭", 400.0),
            ("13101", 2021, "製造業", 350.0),
            ("13101", 2021, "家庭", 250.0),
            // 1000 -> 750: just below pace
            ("13102", 2013, "業務その他", 1000.0),
            ("13102", 2019, "業務その他", 900.0),
            ("13102", 2021, "業務その他", 750.0),
            // 500 -> 500: no progress
            ("13103", 2013, "旅客", 500.0),
            ("13103", 2021, "旅客", 500.0),
        ];
        for (code, year, sector, value) in emissions {
            emission::ActiveModel {
                city_code: Set(code.to_string()),
                fiscal_year: Set(year),
                sector: Set(sector.to_string()),
                value_kt_co2: Set(value),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
        Ok(())
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn test_recalc_fills_kpi_tables() {
        let db = setup_db().await.unwrap();
        seed(&db).await.unwrap();

        let summary = KpiRecalculator::new_with_time(now()).run(&db).await.unwrap();
        assert_eq!(
            summary,
            RecalcSummary {
                municipalities_updated: 3,
                municipalities_skipped: 0,
                prefectures_updated: 1,
            }
        );

        let kpis = municipality_kpi::Entity::find()
            .order_by_asc(municipality_kpi::Column::PrefRank)
            .all(&db)
            .await
            .unwrap();
        let codes: Vec<&str> = kpis.iter().map(|k| k.city_code.as_str()).collect();
        assert_eq!(codes, vec!["13101", "13102", "13103"]);

        let best = &kpis[0];
        assert_eq!(best.base_emission_kt, 1000.0);
        assert_eq!(best.latest_year, 2021);
        assert_eq!(best.latest_emission_kt, 600.0);
        assert_eq!(best.reduction_rate, -40.0);
        assert_eq!(best.status, PaceStatus::OnTrack);
        assert_eq!(best.national_rank, Some(1));
        assert_eq!(best.emission_per_capita, Some(10.0));
        assert_eq!(best.calculated_at, Some(now()));

        assert_eq!(kpis[1].status, PaceStatus::AtRisk);
        assert_eq!(kpis[2].status, PaceStatus::OffTrack);
        assert_eq!(kpis[2].actual_pace, 0.0);

        // all three share one band, so scores spread around 50
        let scores: Vec<f64> = kpis.iter().map(|k| k.deviation_score.unwrap()).collect();
        assert!(scores[0] > 50.0 && scores[2] < 50.0);

        let prefecture = prefecture_kpi::Entity::find_by_id("13".to_string())
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(prefecture.municipality_count, 3);
        assert_eq!(prefecture.on_track_count, 1);
        assert_eq!(prefecture.at_risk_count, 1);
        assert_eq!(prefecture.off_track_count, 1);
        assert_eq!(prefecture.base_emission_mt, 2.5);
        assert_eq!(prefecture.latest_emission_mt, 1.85);
        assert_eq!(prefecture.latest_year, 2021);
        assert_eq!(prefecture.population, Some(210_000));
        assert_eq!(prefecture.required_pace, 3.56);
    }

    #[tokio::test]
    async fn test_recalc_skips_municipalities_without_history() {
        let db = setup_db().await.unwrap();
        seed(&db).await.unwrap();

        municipality::ActiveModel {
            city_code: Set("13104".to_string()),
            prefecture_code: Set("13".to_string()),
            name: Set("新宿区".to_string()),
            population: Set(Some(340_000)),
            area_km2: Set(Some(18.22)),
            zero_carbon_declared: Set(true),
            zero_carbon_year: Set(Some(2021)),
        }
        .insert(&db)
        .await
        .unwrap();
        // base year only
        emission::ActiveModel {
            city_code: Set("13104".to_string()),
            fiscal_year: Set(2013),
            sector: Set("家庭".to_string()),
            value_kt_co2: Set(300.0),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let summary = KpiRecalculator::new_with_time(now()).run(&db).await.unwrap();
        assert_eq!(summary.municipalities_updated, 3);
        assert_eq!(summary.municipalities_skipped, 1);

        let missing = municipality_kpi::Entity::find_by_id("13104".to_string())
            .one(&db)
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_recalc_is_repeatable() {
        let db = setup_db().await.unwrap();
        seed(&db).await.unwrap();

        let recalculator = KpiRecalculator::new_with_time(now());
        let first = recalculator.run(&db).await.unwrap();
        let second = recalculator.run(&db).await.unwrap();
        assert_eq!(first, second);

        let count = municipality_kpi::Entity::find().all(&db).await.unwrap().len();
        assert_eq!(count, 3);
    }
}
