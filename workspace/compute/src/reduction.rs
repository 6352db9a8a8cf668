use std::collections::HashMap;

use common::{Sector, SectorReduction};
use tracing::{debug, instrument};

use crate::sector::EmissionRow;

/// Rounds to the nearest integer, ties toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Change of each sector between `base_year` and `latest_year`, in percent.
///
/// Sectors come out in catalogue order. A sector without a positive base
/// year value has no meaningful rate and is left out. Missing latest values
/// count as zero, i.e. a full reduction.
#[instrument(skip(rows), fields(rows = rows.len()))]
pub fn sector_reductions(
    rows: &[EmissionRow],
    base_year: i32,
    latest_year: i32,
) -> Vec<SectorReduction> {
    let mut base: HashMap<Sector, f64> = HashMap::new();
    let mut latest: HashMap<Sector, f64> = HashMap::new();

    for row in rows {
        let Some(sector) = Sector::from_name(&row.sector) else {
            continue;
        };
        if row.fiscal_year == base_year {
            *base.entry(sector).or_insert(0.0) += row.value;
        }
        if row.fiscal_year == latest_year {
            *latest.entry(sector).or_insert(0.0) += row.value;
        }
    }

    let reductions: Vec<SectorReduction> = Sector::ALL
        .into_iter()
        .filter_map(|sector| {
            let b = base.get(&sector).copied().unwrap_or(0.0);
            if b <= 0.0 {
                return None;
            }
            let l = latest.get(&sector).copied().unwrap_or(0.0);
            let rate = -round_half_up((b - l) / b * 1000.0) / 10.0;
            Some(SectorReduction {
                sector,
                rate: rate + 0.0,
            })
        })
        .collect();

    debug!(
        "Computed {} sector reductions between {} and {}",
        reductions.len(),
        base_year,
        latest_year
    );
    reductions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(249.4), 249.0);
    }

    #[test]
    fn test_rates_in_catalogue_order() {
        let rows = vec![
            EmissionRow::new(2013, "家庭", 100.0),
            EmissionRow::new(2021, "家庭", 75.0),
            EmissionRow::new(2013, "製造業", 200.0),
            EmissionRow::new(2021, "製造業", 240.0),
            EmissionRow::new(2013, "旅客", 50.0),
        ];

        let reductions = sector_reductions(&rows, 2013, 2021);

        assert_eq!(
            reductions,
            vec![
                SectorReduction {
                    sector: Sector::Manufacturing,
                    rate: 20.0
                },
                SectorReduction {
                    sector: Sector::Household,
                    rate: -25.0
                },
                // missing in the latest year counts as a full reduction
                SectorReduction {
                    sector: Sector::Passenger,
                    rate: -100.0
                },
            ]
        );
    }

    #[test]
    fn test_zero_base_sectors_are_excluded() {
        let rows = vec![
            EmissionRow::new(2013, "鉄道", 0.0),
            EmissionRow::new(2021, "鉄道", 4.0),
            EmissionRow::new(2021, "船舶", 2.0),
            EmissionRow::new(2013, "廃棄物", 8.0),
            EmissionRow::new(2021, "廃棄物", 8.0),
        ];

        let reductions = sector_reductions(&rows, 2013, 2021);

        assert_eq!(reductions.len(), 1);
        assert_eq!(reductions[0].sector, Sector::Waste);
        assert_eq!(reductions[0].rate, 0.0);
        assert!(reductions[0].rate.is_sign_positive());
    }

    #[test]
    fn test_unknown_sectors_are_ignored() {
        let rows = vec![
            EmissionRow::new(2013, "エネルギー転換", 10.0),
            EmissionRow::new(2021, "エネルギー転換", 5.0),
        ];
        assert!(sector_reductions(&rows, 2013, 2021).is_empty());
    }
}
