use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One leaf scorer's output: the weighted sub-score plus its named
/// component values, all in [0, 100]. Returned even for empty input
/// (everything zero) so callers can always render a full breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub score: f64,
    pub components: BTreeMap<String, f64>,
}

impl ScoreBreakdown {
    pub fn new(score: f64, components: impl IntoIterator<Item = (&'static str, f64)>) -> Self {
        Self {
            score,
            components: components
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        }
    }

    /// All-zero breakdown with the given component names.
    pub fn zeroed(component_names: &[&'static str]) -> Self {
        Self {
            score: 0.0,
            components: component_names
                .iter()
                .map(|name| (name.to_string(), 0.0))
                .collect(),
        }
    }

    pub fn component(&self, name: &str) -> f64 {
        self.components.get(name).copied().unwrap_or(0.0)
    }
}

/// Aggregate ranking output for one candidate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingResult {
    #[serde(rename = "totalScore")]
    pub total_score: f64,
    /// Indicative population position. Placeholder semantics, see
    /// `PositionEstimator`.
    #[serde(rename = "positionEstimate")]
    pub position_estimate: u32,
    pub recommendations: Vec<String>,
    pub skills: ScoreBreakdown,
    pub education: ScoreBreakdown,
    pub experience: ScoreBreakdown,
    pub certifications: ScoreBreakdown,
    pub coding: ScoreBreakdown,
    pub profile: ScoreBreakdown,
}

/// Per-dimension compatibility scores between two people.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityBreakdown {
    #[serde(rename = "emotionalCompat")]
    pub emotional: f64,
    #[serde(rename = "valuesAlignment")]
    pub values_alignment: f64,
    #[serde(rename = "communicationCompat")]
    pub communication: f64,
    #[serde(rename = "loveLanguageCompat")]
    pub love_language: f64,
    #[serde(rename = "lifestyleCompat")]
    pub lifestyle: f64,
    #[serde(rename = "familyCompat")]
    pub family: f64,
}

/// Pairwise compatibility report. Generated fresh per pair; never
/// persisted by the core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompatibilityReport {
    #[serde(rename = "overallScore")]
    pub overall_score: f64,
    pub breakdown: CompatibilityBreakdown,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
    #[serde(rename = "psychologistRecommendation")]
    pub recommendation: String,
    /// Set only on degenerate reports (e.g. a missing psychology score).
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub message: Option<String>,
    #[serde(rename = "generatedAt")]
    pub generated_at: DateTime<Utc>,
}
