//! Talentia Scoring - deterministic candidate ranking and compatibility core
//!
//! This library holds the scoring logic shared by the Talentia recruiting
//! and matrimony platforms: a candidate ranking engine that folds skills,
//! education, experience, certifications, coding assessments and profile
//! completeness into a single explainable score, and a psychology
//! profiling engine that derives personality dimensions from questionnaire
//! answers and computes pairwise compatibility reports.
//!
//! Everything here is a pure function over already-loaded data; routing,
//! persistence and presentation live in the consuming web layer.

pub mod config;
pub mod error;
pub mod models;
pub mod psychology;
pub mod ranking;

// Re-export commonly used types
pub use config::{ScoringConfig, Settings, TraitKeys};
pub use error::ScoringError;
pub use models::{
    AnswerMap, AnswerValue, BasicProfile, CandidateInput, CertificationRecord,
    CodingAssessmentRecord, CompatibilityReport, EducationRecord, ExperienceRecord,
    PartnerProfile, PsychologyScore, Question, QuestionBank, QuestionType, RankingResult,
    ScoreBreakdown, SkillRecord,
};
pub use psychology::{CompatibilityEngine, Profiler};
pub use ranking::{
    BandPlaceholderEstimator, PopulationPercentileEstimator, PositionEstimator, RankEngine,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports wire together
        let engine = RankEngine::with_defaults();
        let result = engine.rank(&CandidateInput::default()).unwrap();
        assert_eq!(result.total_score, 0.0);
    }
}
