use crate::config::{CodingWeights, TierTables};
use crate::models::{CodingAssessmentRecord, ScoreBreakdown};

const COMPONENTS: &[&str] = &[
    "problem_solving",
    "code_efficiency",
    "algorithm_knowledge",
    "language_proficiency",
];

const UNKNOWN_DIFFICULTY_MULTIPLIER: f64 = 50.0;

/// Score a candidate's coding-assessment results (0-100)
///
/// Scoring formula:
/// score = (
///     problem_solving * 0.3 +      # avg completion rate (solved/total)
///     code_efficiency * 0.25 +     # avg per-record efficiency score
///     algorithm_knowledge * 0.25 + # avg score% weighted by difficulty
///     language_proficiency * 0.2   # avg score/max_score
/// )
///
/// Records with a zero divisor (no problems, zero max score) contribute
/// zero to the affected component instead of dividing.
pub fn score_coding(
    assessments: &[CodingAssessmentRecord],
    tiers: &TierTables,
    weights: &CodingWeights,
) -> ScoreBreakdown {
    if assessments.is_empty() {
        return ScoreBreakdown::zeroed(COMPONENTS);
    }

    let count = assessments.len() as f64;

    let problem_solving: f64 = assessments
        .iter()
        .map(|a| {
            if a.total_problems == 0 {
                0.0
            } else {
                a.problems_solved as f64 / a.total_problems as f64 * 100.0
            }
        })
        .sum::<f64>()
        / count;

    let efficiency: f64 = assessments.iter().map(|a| a.efficiency_score).sum::<f64>() / count;

    let algorithm: f64 = assessments
        .iter()
        .map(|a| score_percent(a) * difficulty_multiplier(&a.difficulty_level, tiers) / 100.0)
        .sum::<f64>()
        / count;

    let language: f64 = assessments.iter().map(score_percent).sum::<f64>() / count;

    let score = problem_solving * weights.problem_solving
        + efficiency * weights.efficiency
        + algorithm * weights.algorithm
        + language * weights.language;

    ScoreBreakdown::new(
        score.min(100.0),
        [
            ("problem_solving", problem_solving),
            ("code_efficiency", efficiency),
            ("algorithm_knowledge", algorithm),
            ("language_proficiency", language),
        ],
    )
}

#[inline]
fn score_percent(assessment: &CodingAssessmentRecord) -> f64 {
    if assessment.max_score <= 0.0 {
        return 0.0;
    }
    assessment.score / assessment.max_score * 100.0
}

#[inline]
fn difficulty_multiplier(level: &str, tiers: &TierTables) -> f64 {
    tiers
        .difficulty
        .get(&level.to_lowercase())
        .copied()
        .unwrap_or(UNKNOWN_DIFFICULTY_MULTIPLIER)
}
