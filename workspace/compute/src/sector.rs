//! Per-year sector breakdown for the stacked trend chart.

use std::collections::{BTreeMap, BTreeSet};

use common::{Sector, SectorTrendPoint};
use model::entities::emission;
use tracing::{instrument, trace, warn};

/// One emission figure as it comes out of the `emissions` table.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionRow {
    pub fiscal_year: i32,
    pub sector: String,
    /// Thousand t-CO₂
    pub value: f64,
}

impl EmissionRow {
    pub fn new(fiscal_year: i32, sector: impl Into<String>, value: f64) -> Self {
        Self {
            fiscal_year,
            sector: sector.into(),
            value,
        }
    }
}

impl From<emission::Model> for EmissionRow {
    fn from(model: emission::Model) -> Self {
        Self {
            fiscal_year: model.fiscal_year,
            sector: model.sector,
            value: model.value_kt_co2,
        }
    }
}

impl From<&emission::Model> for EmissionRow {
    fn from(model: &emission::Model) -> Self {
        Self {
            fiscal_year: model.fiscal_year,
            sector: model.sector.clone(),
            value: model.value_kt_co2,
        }
    }
}

/// Groups emission rows by year into display buckets.
///
/// `total` holds every value reported for the year, including sectors the
/// catalogue does not know. Such values appear in no bucket, so for those
/// years the buckets do not add up to the total.
#[instrument(skip(rows), fields(rows = rows.len()))]
pub fn aggregate_sector_trend(rows: &[EmissionRow]) -> Vec<SectorTrendPoint> {
    let mut by_year: BTreeMap<i32, SectorTrendPoint> = BTreeMap::new();
    let mut unknown: BTreeSet<&str> = BTreeSet::new();

    for row in rows {
        let point = by_year
            .entry(row.fiscal_year)
            .or_insert_with(|| SectorTrendPoint::new(row.fiscal_year));

        point.total += row.value;
        match Sector::from_name(&row.sector) {
            Some(sector) => point.add_to_bucket(sector.bucket(), row.value),
            None => {
                unknown.insert(row.sector.as_str());
            }
        }
    }

    if !unknown.is_empty() {
        warn!(
            sectors = ?unknown,
            "Emission rows with unknown sectors counted in totals only"
        );
    }

    trace!("Aggregated {} years", by_year.len());
    by_year.into_values().collect()
}

/// Total emission per year over all sectors.
pub fn yearly_totals(rows: &[EmissionRow]) -> BTreeMap<i32, f64> {
    let mut totals = BTreeMap::new();
    for row in rows {
        *totals.entry(row.fiscal_year).or_insert(0.0) += row.value;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::SectorBucket;

    fn rows() -> Vec<EmissionRow> {
        vec![
            EmissionRow::new(2021, "製造業", 100.0),
            EmissionRow::new(2013, "製造業", 120.0),
            EmissionRow::new(2013, "建設業", 10.0),
            EmissionRow::new(2013, "家庭", 80.0),
            EmissionRow::new(2013, "旅客", 30.0),
            EmissionRow::new(2013, "貨物", 20.0),
            EmissionRow::new(2013, "廃棄物", 5.0),
            EmissionRow::new(2021, "業務その他", 60.0),
            EmissionRow::new(2021, "家庭", 70.0),
        ]
    }

    #[test]
    fn test_groups_by_year_in_order() {
        let trend = aggregate_sector_trend(&rows());

        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].year, 2013);
        assert_eq!(trend[1].year, 2021);

        assert_eq!(trend[0].industry, 130.0);
        assert_eq!(trend[0].home, 80.0);
        assert_eq!(trend[0].transport, 50.0);
        assert_eq!(trend[0].waste, 5.0);
        assert_eq!(trend[0].business, 0.0);
        assert_eq!(trend[0].total, 265.0);

        assert_eq!(trend[1].business, 60.0);
        assert_eq!(trend[1].total, 230.0);
    }

    #[test]
    fn test_bucket_sum_matches_total_for_known_sectors() {
        for point in aggregate_sector_trend(&rows()) {
            assert!((point.bucket_sum() - point.total).abs() < 1e-9);
            assert_eq!(point.bucket(SectorBucket::Other), 0.0);
        }
    }

    #[test]
    fn test_unknown_sector_counts_only_in_total() {
        let mut input = rows();
        input.push(EmissionRow::new(2021, "エネルギー転換", 15.0));

        let trend = aggregate_sector_trend(&input);
        let latest = &trend[1];

        assert_eq!(latest.total, 245.0);
        assert_eq!(latest.bucket_sum(), 230.0);
        assert_eq!(latest.other, 0.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_sector_trend(&[]).is_empty());
        assert!(yearly_totals(&[]).is_empty());
    }

    #[test]
    fn test_yearly_totals() {
        let totals = yearly_totals(&rows());
        assert_eq!(totals.get(&2013), Some(&265.0));
        assert_eq!(totals.get(&2021), Some(&230.0));
    }
}
