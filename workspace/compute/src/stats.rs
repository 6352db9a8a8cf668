//! Deviation scores (偏差値) within peer groups of similar population.

use std::collections::{BTreeMap, HashMap};

use polars::prelude::*;
use tracing::{debug, instrument};

use crate::error::{ComputeError, Result};
use crate::round_to;

/// Score given to a municipality that cannot be compared.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Population band used to pick comparable municipalities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PopulationBand {
    /// Below 30,000 residents
    Small,
    /// 30,000 up to 100,000
    Medium,
    /// 100,000 up to 300,000
    Large,
    /// 300,000 and more
    Major,
    /// Population not published
    Unknown,
}

impl PopulationBand {
    pub fn of(population: Option<i64>) -> Self {
        match population {
            Some(p) if p <= 0 => PopulationBand::Unknown,
            Some(p) if p < 30_000 => PopulationBand::Small,
            Some(p) if p < 100_000 => PopulationBand::Medium,
            Some(p) if p < 300_000 => PopulationBand::Large,
            Some(_) => PopulationBand::Major,
            None => PopulationBand::Unknown,
        }
    }
}

/// Input row of the deviation calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct PeerValue {
    pub city_code: String,
    pub prefecture_code: String,
    pub population: Option<i64>,
    /// Change since the base year, %. Negative means reduced.
    pub reduction_rate: f64,
}

/// Deviation score of `value` among `values`, rounded to one decimal.
///
/// Uses the population standard deviation. Groups with fewer than two
/// values or without spread score [`NEUTRAL_SCORE`].
pub fn deviation_score(values: &[f64], value: f64) -> Result<f64> {
    if values.len() < 2 {
        return Ok(NEUTRAL_SCORE);
    }

    let series = Series::new("value".into(), values);
    let values = series.f64()?;
    let mean = values
        .mean()
        .ok_or_else(|| ComputeError::Series("mean of empty series".to_string()))?;
    let std = values
        .std(0)
        .ok_or_else(|| ComputeError::Series("std of empty series".to_string()))?;

    if std <= f64::EPSILON {
        return Ok(NEUTRAL_SCORE);
    }
    Ok(round_to(NEUTRAL_SCORE + 10.0 * (value - mean) / std, 1))
}

/// Deviation score for every municipality, keyed by city code.
///
/// Larger reductions score higher. Each municipality is compared with the
/// municipalities of the same prefecture and population band.
#[instrument(skip(peers), fields(peers = peers.len()))]
pub fn peer_deviation_scores(peers: &[PeerValue]) -> Result<HashMap<String, f64>> {
    let mut groups: BTreeMap<(&str, PopulationBand), Vec<&PeerValue>> = BTreeMap::new();
    for peer in peers {
        groups
            .entry((peer.prefecture_code.as_str(), PopulationBand::of(peer.population)))
            .or_default()
            .push(peer);
    }

    let mut scores = HashMap::with_capacity(peers.len());
    for ((prefecture, band), members) in &groups {
        let magnitudes: Vec<f64> = members.iter().map(|p| -p.reduction_rate).collect();
        debug!(
            prefecture,
            ?band,
            members = members.len(),
            "Scoring peer group"
        );
        for (peer, magnitude) in members.iter().zip(&magnitudes) {
            scores.insert(peer.city_code.clone(), deviation_score(&magnitudes, *magnitude)?);
        }
    }

    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peer(city_code: &str, population: i64, reduction_rate: f64) -> PeerValue {
        PeerValue {
            city_code: city_code.to_string(),
            prefecture_code: city_code[..2].to_string(),
            population: Some(population),
            reduction_rate,
        }
    }

    #[test]
    fn test_population_bands() {
        assert_eq!(PopulationBand::of(Some(8_000)), PopulationBand::Small);
        assert_eq!(PopulationBand::of(Some(30_000)), PopulationBand::Medium);
        assert_eq!(PopulationBand::of(Some(150_000)), PopulationBand::Large);
        assert_eq!(PopulationBand::of(Some(920_000)), PopulationBand::Major);
        assert_eq!(PopulationBand::of(Some(0)), PopulationBand::Unknown);
        assert_eq!(PopulationBand::of(None), PopulationBand::Unknown);
    }

    #[test]
    fn test_deviation_score() {
        // mean 20, population std 10
        let values = [10.0, 30.0];
        assert_eq!(deviation_score(&values, 30.0).unwrap(), 60.0);
        assert_eq!(deviation_score(&values, 10.0).unwrap(), 40.0);
        assert_eq!(deviation_score(&values, 20.0).unwrap(), 50.0);
    }

    #[test]
    fn test_degenerate_groups_are_neutral() {
        assert_eq!(deviation_score(&[12.0], 12.0).unwrap(), 50.0);
        assert_eq!(deviation_score(&[], 0.0).unwrap(), 50.0);
        assert_eq!(deviation_score(&[5.0, 5.0, 5.0], 5.0).unwrap(), 50.0);
    }

    #[test]
    fn test_larger_reduction_scores_higher() {
        let peers = vec![
            peer("13101", 60_000, -30.0),
            peer("13102", 70_000, -10.0),
            peer("13103", 80_000, -20.0),
        ];
        let scores = peer_deviation_scores(&peers).unwrap();

        assert!(scores["13101"] > scores["13103"]);
        assert!(scores["13103"] > scores["13102"]);
        assert_eq!(scores["13103"], 50.0);
    }

    #[test]
    fn test_groups_split_by_band_and_prefecture() {
        let peers = vec![
            peer("13101", 60_000, -30.0),
            peer("13102", 70_000, -10.0),
            // alone in its band
            peer("13201", 500_000, -5.0),
            // same band, other prefecture
            peer("14101", 65_000, -50.0),
        ];
        let scores = peer_deviation_scores(&peers).unwrap();

        assert_eq!(scores.len(), 4);
        assert_eq!(scores["13101"], 60.0);
        assert_eq!(scores["13102"], 40.0);
        assert_eq!(scores["13201"], 50.0);
        assert_eq!(scores["14101"], 50.0);
    }
}
