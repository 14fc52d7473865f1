use rand::Rng;

/// Turns a total rank score into an indicative population position.
///
/// The production estimator is a placeholder: it does not rank against a
/// real population, it only places the candidate somewhere inside a band
/// chosen by score. The trait exists so the aggregator can swap in a real
/// population-relative estimator without any other change.
pub trait PositionEstimator: Send + Sync {
    fn estimate(&self, total_score: f64) -> u32;
}

/// Score band -> inclusive position range.
const BANDS: &[(f64, u32, u32)] = &[
    (90.0, 1, 50),
    (80.0, 51, 200),
    (70.0, 201, 500),
    (60.0, 501, 1000),
];
const FALLBACK_BAND: (u32, u32) = (1001, 5000);

/// Placeholder estimator: uniformly random position within the score
/// band. Not a percentile; output is only meaningful at band granularity
/// and tests must assert band membership, never exact values.
#[derive(Debug, Clone, Copy, Default)]
pub struct BandPlaceholderEstimator;

impl BandPlaceholderEstimator {
    /// Inclusive position range for a score, for band-membership checks.
    pub fn band(total_score: f64) -> (u32, u32) {
        BANDS
            .iter()
            .find(|(threshold, _, _)| total_score >= *threshold)
            .map(|(_, lo, hi)| (*lo, *hi))
            .unwrap_or(FALLBACK_BAND)
    }
}

impl PositionEstimator for BandPlaceholderEstimator {
    fn estimate(&self, total_score: f64) -> u32 {
        let (lo, hi) = Self::band(total_score);
        rand::thread_rng().gen_range(lo..=hi)
    }
}

/// Real population-relative estimator: position the candidate would take
/// in a known, sorted population of total scores (1 = best).
#[derive(Debug, Clone, Default)]
pub struct PopulationPercentileEstimator {
    /// Descending total scores of the known population.
    scores: Vec<f64>,
}

impl PopulationPercentileEstimator {
    pub fn new(mut population: Vec<f64>) -> Self {
        population.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
        Self { scores: population }
    }
}

impl PositionEstimator for PopulationPercentileEstimator {
    fn estimate(&self, total_score: f64) -> u32 {
        let ahead = self.scores.iter().filter(|s| **s > total_score).count();
        ahead as u32 + 1
    }
}
