//! Projected emission trajectory between the base year and 2050.
//!
//! The chart shows four independent series on one year axis: observed
//! emissions, the compound-decay curve implied by the required pace, and
//! the two national target markers.

use std::collections::BTreeMap;

use common::{
    BASE_YEAR, TARGET_REDUCTION_2030, TARGET_REDUCTION_2050, TARGET_YEAR_2030, TARGET_YEAR_2050,
    TrajectoryPoint,
};
use tracing::{debug, instrument};

/// Builds the dense trajectory series for one municipality or prefecture.
#[derive(Debug, Clone)]
pub struct TrajectoryBuilder {
    base_year: i32,
    base_emission: f64,
    required_pace: f64,
    observed: BTreeMap<i32, f64>,
}

impl TrajectoryBuilder {
    /// `required_pace` is the annual reduction in percent.
    pub fn new(base_emission: f64, required_pace: f64) -> Self {
        Self::new_with_base_year(BASE_YEAR, base_emission, required_pace)
    }

    pub fn new_with_base_year(base_year: i32, base_emission: f64, required_pace: f64) -> Self {
        Self {
            base_year,
            base_emission,
            required_pace,
            observed: BTreeMap::new(),
        }
    }

    /// Adds observed `(year, emission)` pairs. Later pairs for the same year win.
    pub fn with_observed<I>(mut self, observed: I) -> Self
    where
        I: IntoIterator<Item = (i32, f64)>,
    {
        self.observed.extend(observed);
        self
    }

    /// Emission the required pace implies for `year`.
    pub fn required_at(&self, year: i32) -> f64 {
        let years = year - self.base_year;
        self.base_emission * (1.0 - self.required_pace / 100.0).powi(years)
    }

    pub fn target_2030(&self) -> f64 {
        self.base_emission * (1.0 - TARGET_REDUCTION_2030)
    }

    pub fn target_2050(&self) -> f64 {
        self.base_emission * (1.0 - TARGET_REDUCTION_2050)
    }

    /// One point per year from the base year through 2050.
    #[instrument(skip(self), fields(base_year = self.base_year, observed = self.observed.len()))]
    pub fn build(&self) -> Vec<TrajectoryPoint> {
        let points: Vec<TrajectoryPoint> = (self.base_year..=TARGET_YEAR_2050)
            .map(|year| {
                let actual = if year == self.base_year {
                    Some(self.base_emission)
                } else {
                    self.observed.get(&year).copied()
                };

                TrajectoryPoint {
                    year,
                    actual,
                    required: Some(self.required_at(year)),
                    target_2030: (year == TARGET_YEAR_2030).then(|| self.target_2030()),
                    target_2050: (year == TARGET_YEAR_2050).then(|| self.target_2050()),
                }
            })
            .collect();

        debug!("Built trajectory with {} points", points.len());
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 0.01,
            "expected {expected}, got {actual}"
        );
    }

    fn point(points: &[TrajectoryPoint], year: i32) -> &TrajectoryPoint {
        points.iter().find(|p| p.year == year).unwrap()
    }

    #[test]
    fn test_covers_base_year_through_2050() {
        let points = TrajectoryBuilder::new(738.0, 3.2).build();

        assert_eq!(points.len(), 38);
        assert_eq!(points.first().unwrap().year, 2013);
        assert_eq!(points.last().unwrap().year, 2050);
        assert!(points.windows(2).all(|w| w[0].year + 1 == w[1].year));
    }

    #[test]
    fn test_required_curve_values() {
        let points = TrajectoryBuilder::new(738.0, 3.2).build();

        assert_close(point(&points, 2013).required.unwrap(), 738.0);
        // 738 * 0.968^9
        assert_close(point(&points, 2022).required.unwrap(), 550.72);
    }

    #[test]
    fn test_required_curve_strictly_decreasing() {
        let points = TrajectoryBuilder::new(738.0, 3.56).build();
        let required: Vec<f64> = points.iter().map(|p| p.required.unwrap()).collect();
        assert!(required.windows(2).all(|w| w[1] < w[0]));
    }

    #[test]
    fn test_target_markers_only_at_target_years() {
        let points = TrajectoryBuilder::new(738.0, 3.2).build();

        let with_2030: Vec<i32> = points
            .iter()
            .filter(|p| p.target_2030.is_some())
            .map(|p| p.year)
            .collect();
        assert_eq!(with_2030, vec![2030]);
        assert_close(point(&points, 2030).target_2030.unwrap(), 398.52);

        let with_2050: Vec<i32> = points
            .iter()
            .filter(|p| p.target_2050.is_some())
            .map(|p| p.year)
            .collect();
        assert_eq!(with_2050, vec![2050]);
        assert_close(point(&points, 2050).target_2050.unwrap(), 147.6);
    }

    #[test]
    fn test_target_2030_differs_from_required_curve() {
        // 3.2%/year misses the 2030 target, so the marker sits below the curve.
        let points = TrajectoryBuilder::new(738.0, 3.2).build();
        let at_2030 = point(&points, 2030);
        assert!(at_2030.target_2030.unwrap() < at_2030.required.unwrap());
    }

    #[test]
    fn test_actual_series() {
        let points = TrajectoryBuilder::new(738.0, 3.56)
            .with_observed(vec![
                (2010, 800.0),
                (2013, 999.0),
                (2019, 640.0),
                (2021, 612.5),
                (2055, 100.0),
            ])
            .build();

        // the base year always shows the base emission
        assert_eq!(point(&points, 2013).actual, Some(738.0));
        assert_eq!(point(&points, 2019).actual, Some(640.0));
        assert_eq!(point(&points, 2021).actual, Some(612.5));
        assert_eq!(point(&points, 2020).actual, None);
        assert!(points.iter().all(|p| p.year >= 2013 && p.year <= 2050));
        assert_eq!(points.iter().filter(|p| p.actual.is_some()).count(), 3);
    }

    #[test]
    fn test_base_year_after_2050_yields_nothing() {
        let points = TrajectoryBuilder::new_with_base_year(2051, 10.0, 1.0).build();
        assert!(points.is_empty());
    }
}
