// Model exports
pub mod domain;
pub mod profile;
pub mod reports;

pub use domain::{
    BasicProfile, CandidateInput, CertificationRecord, CodingAssessmentRecord,
    EducationRecord, ExperienceRecord, SkillRecord,
};
pub use profile::{
    AnswerMap, AnswerValue, Dimensions, PartnerProfile, PsychologyScore, Question,
    QuestionBank, QuestionType,
};
pub use reports::{CompatibilityBreakdown, CompatibilityReport, RankingResult, ScoreBreakdown};
