use crate::config::ScoringConfig;
use crate::error::ScoringError;
use crate::models::{CandidateInput, RankingResult, ScoreBreakdown};
use crate::ranking::{
    certifications::score_certifications,
    coding::score_coding,
    completeness::{completion_bonus, score_completeness},
    education::score_education,
    experience::score_experience,
    position::{BandPlaceholderEstimator, PositionEstimator},
    skills::score_skills,
};
use chrono::Utc;
use tracing::debug;

/// Threshold checks run in this fixed order; each failing check appends
/// its message to the recommendation list.
const RECOMMENDATION_RULES: &[(SubScore, f64, &str)] = &[
    (SubScore::Skills, 70.0, "Add more in-demand skills and get them verified to strengthen your profile"),
    (SubScore::Education, 60.0, "Add education details such as degree, institution and GPA"),
    (SubScore::Experience, 70.0, "Expand your work history with roles and dates to show progression"),
    (SubScore::Certifications, 50.0, "Earn certifications from recognized industry issuers"),
    (SubScore::Coding, 60.0, "Take more coding assessments to demonstrate problem solving"),
    (SubScore::Profile, 80.0, "Complete your profile basics, summary and portfolio links"),
];

#[derive(Debug, Clone, Copy)]
enum SubScore {
    Skills,
    Education,
    Experience,
    Certifications,
    Coding,
    Profile,
}

/// Main ranking orchestrator
///
/// Runs the six leaf scorers over an already-loaded candidate, combines
/// them with the configured weights, applies the completion bonus and
/// produces the position estimate and improvement recommendations.
pub struct RankEngine {
    config: ScoringConfig,
    estimator: Box<dyn PositionEstimator>,
}

impl RankEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            estimator: Box::new(BandPlaceholderEstimator),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(ScoringConfig::default())
    }

    /// Swap the position estimator, e.g. for a population-backed one.
    pub fn with_estimator(mut self, estimator: Box<dyn PositionEstimator>) -> Self {
        self.estimator = estimator;
        self
    }

    /// Rank one candidate.
    ///
    /// Validates the records first; scoring itself cannot fail. The total
    /// is the weighted sum of the six sub-scores plus the completion
    /// bonus, deliberately not re-clamped.
    pub fn rank(&self, input: &CandidateInput) -> Result<RankingResult, ScoringError> {
        input.validate()?;

        let now = Utc::now();
        let tiers = &self.config.tiers;

        let skills = score_skills(&input.skills, tiers, &self.config.skill_weights);
        let education = score_education(&input.education, tiers, &self.config.education_weights);
        let experience =
            score_experience(&input.experience, tiers, &self.config.experience_weights, now);
        let certifications = score_certifications(
            &input.certifications,
            tiers,
            &self.config.certification_weights,
            now,
        );
        let coding = score_coding(&input.coding_assessments, tiers, &self.config.coding_weights);
        let profile =
            score_completeness(input.profile.as_ref(), &self.config.completeness_weights);

        let weights = &self.config.rank_weights;
        let bonus =
            completion_bonus(input.profile.as_ref().and_then(|p| p.completion_percentage));

        let total_score = skills.score * weights.skills
            + education.score * weights.education
            + experience.score * weights.experience
            + certifications.score * weights.certifications
            + coding.score * weights.coding
            + profile.score * weights.profile
            + bonus;

        let position_estimate = self.estimator.estimate(total_score);
        let recommendations = self.recommendations(&[
            &skills,
            &education,
            &experience,
            &certifications,
            &coding,
            &profile,
        ]);

        debug!(
            total_score,
            position_estimate,
            recommendation_count = recommendations.len(),
            "ranked candidate"
        );

        Ok(RankingResult {
            total_score,
            position_estimate,
            recommendations,
            skills,
            education,
            experience,
            certifications,
            coding,
            profile,
        })
    }

    fn recommendations(&self, breakdowns: &[&ScoreBreakdown; 6]) -> Vec<String> {
        RECOMMENDATION_RULES
            .iter()
            .filter(|(sub, threshold, _)| breakdowns[*sub as usize].score < *threshold)
            .map(|(_, _, message)| message.to_string())
            .collect()
    }
}

impl Default for RankEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BasicProfile, SkillRecord};

    fn strong_skills() -> Vec<SkillRecord> {
        vec![
            SkillRecord {
                name: "Rust".to_string(),
                level: 10,
                experience_years: 10.0,
                is_verified: true,
            },
            SkillRecord {
                name: "React".to_string(),
                level: 10,
                experience_years: 10.0,
                is_verified: true,
            },
        ]
    }

    #[test]
    fn test_all_empty_input_scores_zero() {
        let engine = RankEngine::with_defaults();
        let result = engine.rank(&CandidateInput::default()).unwrap();

        assert_eq!(result.total_score, 0.0);
        assert_eq!(result.skills.score, 0.0);
        assert_eq!(result.education.score, 0.0);
        assert_eq!(result.experience.score, 0.0);
        assert_eq!(result.certifications.score, 0.0);
        assert_eq!(result.coding.score, 0.0);
        assert_eq!(result.profile.score, 0.0);
        // Everything below threshold: all six recommendations fire, in order
        assert_eq!(result.recommendations.len(), 6);
        assert!(result.recommendations[0].contains("skills"));
    }

    #[test]
    fn test_completion_bonus_is_total_for_empty_input() {
        let engine = RankEngine::with_defaults();
        let input = CandidateInput {
            profile: Some(BasicProfile {
                completion_percentage: Some(100.0),
                ..Default::default()
            }),
            ..Default::default()
        };
        let result = engine.rank(&input).unwrap();

        // All weighted terms are zero; only the bonus remains
        assert_eq!(result.total_score, 10.0);
    }

    #[test]
    fn test_total_is_weighted_sum_plus_bonus() {
        let engine = RankEngine::with_defaults();
        let input = CandidateInput {
            skills: strong_skills(),
            ..Default::default()
        };
        let result = engine.rank(&input).unwrap();

        assert!((result.total_score - result.skills.score * 0.30).abs() < 1e-9);
    }

    #[test]
    fn test_high_skills_drop_skills_recommendation() {
        let engine = RankEngine::with_defaults();
        let input = CandidateInput {
            skills: strong_skills(),
            ..Default::default()
        };
        let result = engine.rank(&input).unwrap();

        assert!(result.skills.score >= 70.0);
        assert!(!result.recommendations.iter().any(|r| r.contains("in-demand skills")));
    }

    #[test]
    fn test_invalid_record_fails_fast() {
        let engine = RankEngine::with_defaults();
        let input = CandidateInput {
            skills: vec![SkillRecord {
                name: "Rust".to_string(),
                level: 0,
                experience_years: 1.0,
                is_verified: false,
            }],
            ..Default::default()
        };

        assert!(matches!(engine.rank(&input), Err(ScoringError::Validation(_))));
    }

    #[test]
    fn test_position_estimate_within_band() {
        let engine = RankEngine::with_defaults();
        let result = engine.rank(&CandidateInput::default()).unwrap();

        let (lo, hi) = BandPlaceholderEstimator::band(result.total_score);
        assert!((lo..=hi).contains(&result.position_estimate));
    }

    #[test]
    fn test_sub_scores_deterministic_across_calls() {
        let engine = RankEngine::with_defaults();
        let input = CandidateInput {
            skills: strong_skills(),
            ..Default::default()
        };

        let first = engine.rank(&input).unwrap();
        let second = engine.rank(&input).unwrap();

        // Everything except the placeholder position must be bit-identical
        assert_eq!(first.total_score, second.total_score);
        assert_eq!(first.skills, second.skills);
        assert_eq!(first.recommendations, second.recommendations);
    }
}
