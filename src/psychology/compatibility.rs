use crate::models::{
    CompatibilityBreakdown, CompatibilityReport, PartnerProfile, PsychologyScore,
};
use chrono::Utc;
use tracing::debug;

const MISSING_PROFILE_MESSAGE: &str =
    "Compatibility requires a completed psychology assessment from both partners";

const DEFAULT_STRENGTH: &str =
    "Keep investing in the relationship to build more shared strengths";
const DEFAULT_CHALLENGE: &str = "No major challenges identified; keep growing together";

const STRENGTH_THRESHOLD: f64 = 75.0;
const CHALLENGE_THRESHOLD: f64 = 60.0;

/// Produces the pairwise compatibility report between two partner
/// profiles. Stateless; safe to share across requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompatibilityEngine;

impl CompatibilityEngine {
    pub fn new() -> Self {
        Self
    }

    /// Build the report for a pair.
    ///
    /// Overall formula:
    /// overall = round(
    ///     psychological_match * 0.3 +
    ///     values_alignment * 0.2 +
    ///     communication * 0.15 +
    ///     lifestyle * 0.15 +
    ///     family * 0.1 +
    ///     emotional * 0.1
    /// )
    pub fn report(&self, a: &PartnerProfile, b: &PartnerProfile) -> CompatibilityReport {
        let (Some(psych_a), Some(psych_b)) = (&a.psychology_score, &b.psychology_score) else {
            return Self::zero_report();
        };

        let emotional = 100.0
            - (psych_a.dimensions.emotional_stability - psych_b.dimensions.emotional_stability)
                .abs();
        let values_alignment =
            values_alignment(&psych_a.dimensions.values, &psych_b.dimensions.values);
        let communication = communication_compat(
            &psych_a.dimensions.communication_style,
            &psych_b.dimensions.communication_style,
        );
        let love_language = if psych_a.dimensions.love_language == psych_b.dimensions.love_language
        {
            95.0
        } else {
            60.0
        };
        let diet = lifestyle_field_compat(&a.diet, &b.diet, 100.0, 60.0);
        let family = family_compat(&a.family_values, &b.family_values);

        let psychological_match = psychological_match(psych_a, psych_b);
        let extroversion_fit =
            100.0 - (psych_a.dimensions.extroversion - psych_b.dimensions.extroversion).abs();
        let lifestyle = (diet + extroversion_fit) / 2.0;

        let overall_score = (psychological_match * 0.3
            + values_alignment * 0.2
            + communication * 0.15
            + lifestyle * 0.15
            + family * 0.1
            + emotional * 0.1)
            .round();

        let breakdown = CompatibilityBreakdown {
            emotional,
            values_alignment,
            communication,
            love_language,
            lifestyle,
            family,
        };

        debug!(overall_score, "generated compatibility report");

        CompatibilityReport {
            overall_score,
            strengths: strengths(&breakdown),
            challenges: challenges(&breakdown),
            recommendation: recommendation(overall_score).to_string(),
            breakdown,
            message: None,
            generated_at: Utc::now(),
        }
    }

    /// Degenerate report for a pair missing a psychology assessment.
    fn zero_report() -> CompatibilityReport {
        CompatibilityReport {
            overall_score: 0.0,
            breakdown: CompatibilityBreakdown::default(),
            strengths: vec![],
            challenges: vec![],
            recommendation: String::new(),
            message: Some(MISSING_PROFILE_MESSAGE.to_string()),
            generated_at: Utc::now(),
        }
    }
}

/// Weighted closeness of the four core dimensions.
#[inline]
fn psychological_match(a: &PsychologyScore, b: &PsychologyScore) -> f64 {
    let emotional =
        100.0 - (a.dimensions.emotional_stability - b.dimensions.emotional_stability).abs();
    let openness = 100.0 - (a.dimensions.openness - b.dimensions.openness).abs();
    let agreeableness = 100.0 - (a.dimensions.agreeableness - b.dimensions.agreeableness).abs();
    let conscientiousness =
        100.0 - (a.dimensions.conscientiousness - b.dimensions.conscientiousness).abs();

    emotional * 0.3 + openness * 0.2 + agreeableness * 0.25 + conscientiousness * 0.25
}

/// Overlap of the two value lists over the longer list; 50 when either
/// side declared nothing.
#[inline]
fn values_alignment(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 50.0;
    }
    let shared = a.iter().filter(|value| b.contains(value)).count() as f64;
    shared / a.len().max(b.len()) as f64 * 100.0
}

/// NOTE: the assertive/reflective pairing bonus is only applied in A->B
/// order. Likely an upstream omission of the mirrored case; reproduced
/// as-is until product confirms, and pinned by a test below.
#[inline]
fn communication_compat(a: &str, b: &str) -> f64 {
    if a == b {
        90.0
    } else if a == "assertive" && b == "reflective" {
        80.0
    } else {
        65.0
    }
}

#[inline]
fn family_compat(a: &Option<String>, b: &Option<String>) -> f64 {
    let a = normalized(a);
    let b = normalized(b);
    if a == b {
        95.0
    } else if a == "moderate" || b == "moderate" {
        75.0
    } else {
        50.0
    }
}

#[inline]
fn lifestyle_field_compat(a: &Option<String>, b: &Option<String>, hit: f64, miss: f64) -> f64 {
    if normalized(a) == normalized(b) {
        hit
    } else {
        miss
    }
}

#[inline]
fn normalized(field: &Option<String>) -> String {
    field.as_deref().unwrap_or("").trim().to_lowercase()
}

fn strengths(breakdown: &CompatibilityBreakdown) -> Vec<String> {
    let rules: [(f64, &str); 6] = [
        (breakdown.emotional, "You understand and support each other emotionally"),
        (breakdown.values_alignment, "Your core values are strongly aligned"),
        (breakdown.communication, "Your communication styles work well together"),
        (breakdown.love_language, "You express and receive love in the same way"),
        (breakdown.lifestyle, "Your day-to-day lifestyles fit together naturally"),
        (breakdown.family, "You share similar family values"),
    ];

    let mut out: Vec<String> = rules
        .iter()
        .filter(|(score, _)| *score >= STRENGTH_THRESHOLD)
        .map(|(_, message)| message.to_string())
        .collect();
    if out.is_empty() {
        out.push(DEFAULT_STRENGTH.to_string());
    }
    out
}

fn challenges(breakdown: &CompatibilityBreakdown) -> Vec<String> {
    let rules: [(f64, &str); 6] = [
        (breakdown.emotional, "Emotional needs may differ; make space to talk about feelings"),
        (breakdown.values_alignment, "Discuss your priorities; your core values differ in places"),
        (breakdown.communication, "Practice active listening; your communication styles differ"),
        (breakdown.love_language, "Learn each other's love language to avoid feeling unappreciated"),
        (breakdown.lifestyle, "Day-to-day habits differ; agree on shared routines"),
        (breakdown.family, "Align expectations around family roles and traditions"),
    ];

    let mut out: Vec<String> = rules
        .iter()
        .filter(|(score, _)| *score < CHALLENGE_THRESHOLD)
        .map(|(_, message)| message.to_string())
        .collect();
    if out.is_empty() {
        out.push(DEFAULT_CHALLENGE.to_string());
    }
    out
}

fn recommendation(overall_score: f64) -> &'static str {
    if overall_score >= 80.0 {
        "Excellent match. You complement each other across the dimensions that matter most"
    } else if overall_score >= 65.0 {
        "Strong potential. Invest in the few areas where you differ and this can flourish"
    } else if overall_score >= 50.0 {
        "Moderate compatibility. Meaningful differences exist; open conversations early will help"
    } else {
        "Significant differences. Proceed thoughtfully and consider discussing expectations with a counselor"
    }
}
