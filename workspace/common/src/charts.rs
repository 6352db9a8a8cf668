use crate::sector::{Sector, SectorBucket};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One stacked bar of the sector trend chart (thousand t-CO₂).
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SectorTrendPoint {
    pub year: i32,
    pub industry: f64,
    pub business: f64,
    pub home: f64,
    pub transport: f64,
    pub waste: f64,
    pub other: f64,
    /// Sum of every raw sector value reported for the year
    pub total: f64,
}

impl SectorTrendPoint {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            ..Default::default()
        }
    }

    pub fn bucket(&self, bucket: SectorBucket) -> f64 {
        match bucket {
            SectorBucket::Industry => self.industry,
            SectorBucket::Business => self.business,
            SectorBucket::Home => self.home,
            SectorBucket::Transport => self.transport,
            SectorBucket::Waste => self.waste,
            SectorBucket::Other => self.other,
        }
    }

    pub fn add_to_bucket(&mut self, bucket: SectorBucket, value: f64) {
        match bucket {
            SectorBucket::Industry => self.industry += value,
            SectorBucket::Business => self.business += value,
            SectorBucket::Home => self.home += value,
            SectorBucket::Transport => self.transport += value,
            SectorBucket::Waste => self.waste += value,
            SectorBucket::Other => self.other += value,
        }
    }

    pub fn bucket_sum(&self) -> f64 {
        SectorBucket::ALL.iter().map(|b| self.bucket(*b)).sum()
    }
}

/// Change of one sector between the base and latest year, in percent.
/// Negative values are reductions.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SectorReduction {
    pub sector: Sector,
    pub rate: f64,
}

/// A sparse point of the reduction trajectory chart.
///
/// Each series is independent; charts connect across the gaps.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct TrajectoryPoint {
    pub year: i32,
    pub actual: Option<f64>,
    pub required: Option<f64>,
    pub target_2030: Option<f64>,
    pub target_2050: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_accumulation() {
        let mut point = SectorTrendPoint::new(2020);
        point.add_to_bucket(SectorBucket::Industry, 10.0);
        point.add_to_bucket(SectorBucket::Industry, 2.5);
        point.add_to_bucket(SectorBucket::Home, 4.0);

        assert_eq!(point.industry, 12.5);
        assert_eq!(point.bucket(SectorBucket::Home), 4.0);
        assert_eq!(point.bucket_sum(), 16.5);
        assert_eq!(point.total, 0.0);
    }

    #[test]
    fn test_trajectory_point_serializes_gaps_as_null() {
        let point = TrajectoryPoint {
            year: 2030,
            actual: None,
            required: Some(400.0),
            target_2030: Some(398.52),
            target_2050: None,
        };
        let json = serde_json::to_value(&point).unwrap();
        assert!(json["actual"].is_null());
        assert_eq!(json["target_2030"], 398.52);
    }
}
