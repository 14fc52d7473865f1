use crate::config::{ExperienceWeights, TierTables};
use crate::models::{ExperienceRecord, ScoreBreakdown};
use chrono::{DateTime, Utc};
use std::collections::BTreeSet;

const COMPONENTS: &[&str] = &[
    "years_of_experience",
    "role_progression",
    "company_quality",
    "industry_diversity",
];

const UNMATCHED_ROLE_SCORE: f64 = 30.0;
const UNKNOWN_COMPANY_TIER: f64 = 50.0;

/// Score a candidate's employment history (0-100)
///
/// Scoring formula:
/// score = (
///     years_of_experience * 0.4 +  # min(total fractional years * 15, 100)
///     role_progression * 0.3 +     # highest seniority keyword across roles
///     company_quality * 0.2 +      # avg employer tier, default 50
///     industry_diversity * 0.1     # min(distinct employers * 20, 100)
/// )
pub fn score_experience(
    experience: &[ExperienceRecord],
    tiers: &TierTables,
    weights: &ExperienceWeights,
    now: DateTime<Utc>,
) -> ScoreBreakdown {
    if experience.is_empty() {
        return ScoreBreakdown::zeroed(COMPONENTS);
    }

    let total_years: f64 = experience.iter().map(|e| e.tenure_years(now)).sum();
    let years_score = (total_years * 15.0).min(100.0);

    let progression = role_progression(experience, tiers);

    let company_quality: f64 = experience
        .iter()
        .map(|e| company_tier(&e.company, tiers))
        .sum::<f64>()
        / experience.len() as f64;

    let distinct_employers: BTreeSet<String> = experience
        .iter()
        .map(|e| e.company.to_lowercase())
        .collect();
    let diversity = (distinct_employers.len() as f64 * 20.0).min(100.0);

    let score = years_score * weights.years
        + progression * weights.progression
        + company_quality * weights.company
        + diversity * weights.diversity;

    ScoreBreakdown::new(
        score.min(100.0),
        [
            ("years_of_experience", years_score),
            ("role_progression", progression),
            ("company_quality", company_quality),
            ("industry_diversity", diversity),
        ],
    )
}

/// Highest seniority ladder index matched anywhere in the history, times
/// ten. Deliberately the max across records, not the most recent role.
#[inline]
fn role_progression(experience: &[ExperienceRecord], tiers: &TierTables) -> f64 {
    let best = experience
        .iter()
        .filter_map(|e| {
            let role = e.role.to_lowercase();
            tiers
                .seniority_ladder
                .iter()
                .enumerate()
                .filter(|(_, keyword)| role.contains(keyword.as_str()))
                .map(|(index, _)| index)
                .max()
        })
        .max();

    match best {
        Some(index) => index as f64 * 10.0,
        None => UNMATCHED_ROLE_SCORE,
    }
}

#[inline]
fn company_tier(company: &str, tiers: &TierTables) -> f64 {
    tiers
        .companies
        .get(&company.to_lowercase())
        .copied()
        .unwrap_or(UNKNOWN_COMPANY_TIER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn job(company: &str, role: &str, start: (i32, u32), end: Option<(i32, u32)>) -> ExperienceRecord {
        ExperienceRecord {
            company: company.to_string(),
            role: role.to_string(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, 1).unwrap(),
            end_date: end.map(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1).unwrap()),
            is_current: end.is_none(),
        }
    }

    #[test]
    fn test_empty_experience_zeroed() {
        let breakdown = score_experience(
            &[],
            &TierTables::default(),
            &ExperienceWeights::default(),
            Utc::now(),
        );
        assert_eq!(breakdown.score, 0.0);
        assert_eq!(breakdown.components.len(), 4);
    }

    #[test]
    fn test_years_capped_at_100() {
        let jobs = vec![job("Acme", "Engineer", (2000, 1), Some((2015, 1)))];
        let breakdown = score_experience(
            &jobs,
            &TierTables::default(),
            &ExperienceWeights::default(),
            Utc::now(),
        );

        // 15 years * 15 caps out
        assert_eq!(breakdown.component("years_of_experience"), 100.0);
    }

    #[test]
    fn test_progression_uses_max_across_records() {
        // Director in an older role, engineer in the latest: max wins
        let jobs = vec![
            job("Acme", "Engineering Director", (2015, 1), Some((2019, 1))),
            job("Beta", "Software Engineer", (2019, 1), None),
        ];
        let breakdown = score_experience(
            &jobs,
            &TierTables::default(),
            &ExperienceWeights::default(),
            Utc::now(),
        );

        // "director" is ladder index 8
        assert_eq!(breakdown.component("role_progression"), 80.0);
    }

    #[test]
    fn test_unmatched_role_defaults() {
        let jobs = vec![job("Acme", "Wizard of Oz", (2020, 1), None)];
        let breakdown = score_experience(
            &jobs,
            &TierTables::default(),
            &ExperienceWeights::default(),
            Utc::now(),
        );

        assert_eq!(breakdown.component("role_progression"), 30.0);
    }

    #[test]
    fn test_company_quality_averaged() {
        let jobs = vec![
            job("Google", "Engineer", (2018, 1), Some((2020, 1))),
            job("Some Startup", "Engineer", (2020, 1), None),
        ];
        let breakdown = score_experience(
            &jobs,
            &TierTables::default(),
            &ExperienceWeights::default(),
            Utc::now(),
        );

        // (100 + 50) / 2
        assert_eq!(breakdown.component("company_quality"), 75.0);
        assert_eq!(breakdown.component("industry_diversity"), 40.0);
    }

    #[test]
    fn test_duplicate_employers_not_double_counted() {
        let jobs = vec![
            job("Acme", "Engineer", (2018, 1), Some((2019, 1))),
            job("acme", "Senior Engineer", (2019, 1), None),
        ];
        let breakdown = score_experience(
            &jobs,
            &TierTables::default(),
            &ExperienceWeights::default(),
            Utc::now(),
        );

        assert_eq!(breakdown.component("industry_diversity"), 20.0);
    }
}
