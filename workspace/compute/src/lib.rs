//! Derivations behind the dashboard: emission trajectories, sector
//! breakdowns and the KPI pipeline that fills `municipality_kpis` and
//! `prefecture_kpis`.

pub mod error;
pub mod kpi;
pub mod ranking;
pub mod recalc;
pub mod reduction;
pub mod rollup;
pub mod sector;
pub mod stats;
pub mod trajectory;

pub use error::{ComputeError, Result};
pub use recalc::{KpiRecalculator, RecalcSummary};
pub use reduction::sector_reductions;
pub use sector::{EmissionRow, aggregate_sector_trend, yearly_totals};
pub use trajectory::TrajectoryBuilder;

/// Rounds to `decimals` places, halves away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    let rounded = (value * factor).round() / factor;
    // never hand out -0.0
    rounded + 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(3.55965, 2), 3.56);
        assert_eq!(round_to(-24.944, 1), -24.9);
        assert_eq!(round_to(1234.5678, 0), 1235.0);
        assert!(round_to(-0.001, 2).is_sign_positive());
    }
}
