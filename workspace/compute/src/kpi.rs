//! Pace and KPI formulas.
//!
//! Emissions are compared against the base year using compound annual
//! reduction. All percentages are in percent, not fractions.

use common::{BASE_YEAR, PaceStatus, TARGET_REDUCTION_2030, TARGET_YEAR_2030};
use tracing::{instrument, trace};

use crate::error::{ComputeError, Result};
use crate::round_to;

/// Observed average annual reduction between two years, %/year.
pub fn actual_pace(base_emission: f64, latest_emission: f64, base_year: i32, latest_year: i32) -> f64 {
    let years = latest_year - base_year;
    if base_emission <= 0.0 || latest_emission <= 0.0 || years <= 0 {
        return 0.0;
    }
    let ratio = latest_emission / base_emission;
    round_to((1.0 - ratio.powf(1.0 / years as f64)) * 100.0, 2)
}

/// Annual reduction that reaches `target_reduction` by `target_year`, %/year.
pub fn required_pace(target_reduction: f64, base_year: i32, target_year: i32) -> f64 {
    let years = target_year - base_year;
    if years <= 0 {
        return 0.0;
    }
    round_to((1.0 - (1.0 - target_reduction).powf(1.0 / years as f64)) * 100.0, 2)
}

/// Actual pace as a share of the required pace, %.
pub fn pace_achievement_rate(actual_pace: f64, required_pace: f64) -> f64 {
    if required_pace <= 0.0 {
        return 0.0;
    }
    round_to(actual_pace / required_pace * 100.0, 1)
}

/// Gap between the 2030 emission the current pace leads to and the 2030
/// target. Zero when the pace is enough.
pub fn shortfall_2030(base_emission: f64, actual_pace: f64, base_year: i32) -> f64 {
    let years = TARGET_YEAR_2030 - base_year;
    let projected = base_emission * (1.0 - actual_pace / 100.0).powi(years);
    let target = base_emission * (1.0 - TARGET_REDUCTION_2030);
    round_to((projected - target).max(0.0), 1)
}

/// Change since the base year, %. Negative means reduced.
pub fn reduction_rate(base_emission: f64, latest_emission: f64) -> f64 {
    if base_emission <= 0.0 {
        return 0.0;
    }
    round_to((latest_emission - base_emission) / base_emission * 100.0, 2)
}

/// t-CO₂ per resident from an emission in thousand t-CO₂.
pub fn emission_per_capita(emission_kt: f64, population: Option<i64>) -> Option<f64> {
    match population {
        Some(population) if population > 0 => {
            Some(round_to(emission_kt * 1000.0 / population as f64, 3))
        }
        _ => None,
    }
}

/// Base and latest emission of one municipality.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiInput {
    pub base_year: i32,
    pub base_emission: f64,
    pub latest_year: i32,
    pub latest_emission: f64,
    pub population: Option<i64>,
}

/// KPI figures computed from one [`KpiInput`].
#[derive(Debug, Clone, PartialEq)]
pub struct KpiFigures {
    pub reduction_rate: f64,
    pub actual_pace: f64,
    pub required_pace: f64,
    pub pace_achievement_rate: f64,
    pub status: PaceStatus,
    pub shortfall_2030: f64,
    pub emission_per_capita: Option<f64>,
}

/// Turns base/latest emissions into the published KPI figures.
#[derive(Debug, Clone)]
pub struct KpiCalculator {
    base_year: i32,
    required_pace: f64,
}

impl Default for KpiCalculator {
    fn default() -> Self {
        Self::new(BASE_YEAR)
    }
}

impl KpiCalculator {
    pub fn new(base_year: i32) -> Self {
        Self {
            base_year,
            required_pace: required_pace(TARGET_REDUCTION_2030, base_year, TARGET_YEAR_2030),
        }
    }

    pub fn base_year(&self) -> i32 {
        self.base_year
    }

    pub fn required_pace(&self) -> f64 {
        self.required_pace
    }

    #[instrument(skip(self))]
    pub fn calculate(&self, input: &KpiInput) -> Result<KpiFigures> {
        if input.base_year != self.base_year {
            return Err(ComputeError::EmissionHistory(format!(
                "base year {} does not match calculator base year {}",
                input.base_year, self.base_year
            )));
        }
        if input.base_emission <= 0.0 {
            return Err(ComputeError::EmissionHistory(format!(
                "base emission must be positive, got {}",
                input.base_emission
            )));
        }

        let actual = actual_pace(
            input.base_emission,
            input.latest_emission,
            input.base_year,
            input.latest_year,
        );
        let achievement = pace_achievement_rate(actual, self.required_pace);

        let figures = KpiFigures {
            reduction_rate: reduction_rate(input.base_emission, input.latest_emission),
            actual_pace: actual,
            required_pace: self.required_pace,
            pace_achievement_rate: achievement,
            status: PaceStatus::from_achievement_rate(achievement),
            shortfall_2030: shortfall_2030(input.base_emission, actual, input.base_year),
            emission_per_capita: emission_per_capita(input.latest_emission, input.population),
        };
        trace!(?figures, "Calculated KPI figures");
        Ok(figures)
    }
}
