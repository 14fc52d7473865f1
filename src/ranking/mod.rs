// Candidate ranking exports
pub mod aggregator;
pub mod certifications;
pub mod coding;
pub mod completeness;
pub mod education;
pub mod experience;
pub mod position;
pub mod skills;

pub use aggregator::RankEngine;
pub use certifications::score_certifications;
pub use coding::score_coding;
pub use completeness::{completion_bonus, score_completeness, MAX_COMPLETION_BONUS};
pub use education::score_education;
pub use experience::score_experience;
pub use position::{BandPlaceholderEstimator, PopulationPercentileEstimator, PositionEstimator};
pub use skills::score_skills;
