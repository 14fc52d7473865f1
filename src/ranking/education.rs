use crate::config::{EducationWeights, TierEntry, TierTables};
use crate::models::{EducationRecord, ScoreBreakdown};

const COMPONENTS: &[&str] = &[
    "degree_level",
    "institution_tier",
    "gpa_score",
    "field_relevance",
];

const UNKNOWN_DEGREE_LEVEL: f64 = 50.0;
const UNKNOWN_INSTITUTION_TIER: f64 = 50.0;
const MISSING_GPA_SCORE: f64 = 70.0;
const NON_TECH_FIELD_SCORE: f64 = 60.0;

/// Score a candidate's education (0-100)
///
/// Only the first (highest-priority) record counts. Scoring formula:
/// score = (
///     degree_level * 0.3 +         # keyword lookup on the degree string
///     institution_tier * 0.4 +     # named institutions, else numeric tier
///     gpa_score * 0.2 +            # gpa / 4.0 * 100, default 70
///     field_relevance * 0.1        # 100 for tech fields, else 60
/// )
pub fn score_education(
    education: &[EducationRecord],
    tiers: &TierTables,
    weights: &EducationWeights,
) -> ScoreBreakdown {
    let Some(record) = education.first() else {
        return ScoreBreakdown::zeroed(COMPONENTS);
    };

    let degree = substring_tier(&record.degree, &tiers.degrees).unwrap_or(UNKNOWN_DEGREE_LEVEL);
    let institution = institution_tier(record, tiers);
    let gpa = record
        .gpa
        .map(|gpa| gpa / 4.0 * 100.0)
        .unwrap_or(MISSING_GPA_SCORE);
    let field = field_relevance(&record.field, tiers);

    let score = degree * weights.degree
        + institution * weights.institution
        + gpa * weights.gpa
        + field * weights.field;

    ScoreBreakdown::new(
        score.min(100.0),
        [
            ("degree_level", degree),
            ("institution_tier", institution),
            ("gpa_score", gpa),
            ("field_relevance", field),
        ],
    )
}

/// First tier entry whose keyword appears in the lowercased input.
#[inline]
fn substring_tier(input: &str, entries: &[TierEntry]) -> Option<f64> {
    let lowered = input.to_lowercase();
    entries
        .iter()
        .find(|entry| lowered.contains(&entry.keyword))
        .map(|entry| entry.score)
}

/// Named institutions win; otherwise the numeric college tier maps
/// (5 - tier) * 20, clamped; otherwise the unknown default.
#[inline]
fn institution_tier(record: &EducationRecord, tiers: &TierTables) -> f64 {
    if let Some(score) = substring_tier(&record.institution, &tiers.institutions) {
        return score;
    }
    match record.college_tier {
        Some(tier) => ((5.0 - tier as f64) * 20.0).clamp(0.0, 100.0),
        None => UNKNOWN_INSTITUTION_TIER,
    }
}

#[inline]
fn field_relevance(field: &str, tiers: &TierTables) -> f64 {
    let lowered = field.to_lowercase();
    if tiers.field_keywords.iter().any(|kw| lowered.contains(kw)) {
        100.0
    } else {
        NON_TECH_FIELD_SCORE
    }
}
