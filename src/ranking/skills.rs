use crate::config::{SkillWeights, TierTables};
use crate::models::{ScoreBreakdown, SkillRecord};

const COMPONENTS: &[&str] = &[
    "technical_skills",
    "experience_depth",
    "skill_diversity",
    "verification_bonus",
];

/// Default tier for a skill name missing from the tier table.
const UNKNOWN_SKILL_TIER: f64 = 50.0;

/// Score a candidate's skill list (0-100)
///
/// Scoring formula:
/// score = (
///     technical_skills * 0.4 +     # tier * level/10, averaged
///     experience_depth * 0.3 +     # min(avg years * 10, 100)
///     skill_diversity * 0.2 +      # min(count * 5, 100)
///     verification_bonus * 0.1     # % of skills verified
/// )
pub fn score_skills(
    skills: &[SkillRecord],
    tiers: &TierTables,
    weights: &SkillWeights,
) -> ScoreBreakdown {
    if skills.is_empty() {
        return ScoreBreakdown::zeroed(COMPONENTS);
    }

    let count = skills.len() as f64;

    let technical: f64 = skills
        .iter()
        .map(|skill| skill_tier(&skill.name, tiers) * (skill.level as f64 / 10.0))
        .sum::<f64>()
        / count;

    let avg_years = skills.iter().map(|s| s.experience_years).sum::<f64>() / count;
    let experience_depth = (avg_years * 10.0).min(100.0);

    let diversity = (count * 5.0).min(100.0);

    let verified = skills.iter().filter(|s| s.is_verified).count() as f64;
    let verification = verified / count * 100.0;

    let score = technical * weights.technical
        + experience_depth * weights.experience_depth
        + diversity * weights.diversity
        + verification * weights.verification;

    ScoreBreakdown::new(
        score.min(100.0),
        [
            ("technical_skills", technical),
            ("experience_depth", experience_depth),
            ("skill_diversity", diversity),
            ("verification_bonus", verification),
        ],
    )
}

/// Tier lookup by lowercased exact name, defaulting for unknown skills.
#[inline]
fn skill_tier(name: &str, tiers: &TierTables) -> f64 {
    tiers
        .skills
        .get(&name.to_lowercase())
        .copied()
        .unwrap_or(UNKNOWN_SKILL_TIER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(name: &str, level: u8, years: f64, verified: bool) -> SkillRecord {
        SkillRecord {
            name: name.to_string(),
            level,
            experience_years: years,
            is_verified: verified,
        }
    }

    #[test]
    fn test_empty_skills_zeroed() {
        let breakdown = score_skills(&[], &TierTables::default(), &SkillWeights::default());
        assert_eq!(breakdown.score, 0.0);
        assert_eq!(breakdown.component("technical_skills"), 0.0);
        assert_eq!(breakdown.components.len(), 4);
    }

    #[test]
    fn test_single_verified_react_expert() {
        let skills = vec![skill("React", 10, 5.0, true)];
        let breakdown = score_skills(&skills, &TierTables::default(), &SkillWeights::default());

        // tier 95 * level 1.0
        assert!((breakdown.component("technical_skills") - 95.0).abs() < f64::EPSILON);
        assert_eq!(breakdown.component("skill_diversity"), 5.0);
        assert_eq!(breakdown.component("verification_bonus"), 100.0);
        assert_eq!(breakdown.component("experience_depth"), 50.0);
    }

    #[test]
    fn test_unknown_skill_defaults_to_mid_tier() {
        let skills = vec![skill("underwater basket weaving", 10, 0.0, false)];
        let breakdown = score_skills(&skills, &TierTables::default(), &SkillWeights::default());

        assert_eq!(breakdown.component("technical_skills"), 50.0);
    }

    #[test]
    fn test_diversity_caps_at_100() {
        let skills: Vec<SkillRecord> =
            (0..25).map(|i| skill(&format!("skill{}", i), 5, 1.0, false)).collect();
        let breakdown = score_skills(&skills, &TierTables::default(), &SkillWeights::default());

        assert_eq!(breakdown.component("skill_diversity"), 100.0);
    }

    #[test]
    fn test_level_scales_tier() {
        let high = score_skills(
            &[skill("Python", 10, 1.0, false)],
            &TierTables::default(),
            &SkillWeights::default(),
        );
        let low = score_skills(
            &[skill("Python", 5, 1.0, false)],
            &TierTables::default(),
            &SkillWeights::default(),
        );

        assert!((high.component("technical_skills") - 85.0).abs() < f64::EPSILON);
        assert!((low.component("technical_skills") - 42.5).abs() < f64::EPSILON);
    }
}
