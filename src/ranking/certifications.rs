use crate::config::{CertificationWeights, TierTables};
use crate::models::{CertificationRecord, ScoreBreakdown};
use chrono::{DateTime, Utc};

const COMPONENTS: &[&str] = &[
    "certification_count",
    "certification_quality",
    "recency_bonus",
    "verification_status",
];

const RECOGNIZED_ISSUER_SCORE: f64 = 100.0;
const UNRECOGNIZED_ISSUER_SCORE: f64 = 60.0;
const RECENCY_FLOOR: f64 = 20.0;

/// Score a candidate's certifications (0-100)
///
/// Scoring formula:
/// score = (
///     certification_count * 0.3 +   # min(count * 15, 100)
///     certification_quality * 0.4 + # 100 recognized issuer, else 60, averaged
///     recency_bonus * 0.2 +         # max(100 - months_old * 2, 20), averaged
///     verification_status * 0.1     # % verified
/// )
pub fn score_certifications(
    certifications: &[CertificationRecord],
    tiers: &TierTables,
    weights: &CertificationWeights,
    now: DateTime<Utc>,
) -> ScoreBreakdown {
    if certifications.is_empty() {
        return ScoreBreakdown::zeroed(COMPONENTS);
    }

    let count = certifications.len() as f64;
    let count_score = (count * 15.0).min(100.0);

    let quality: f64 = certifications
        .iter()
        .map(|cert| issuer_score(&cert.issuer, tiers))
        .sum::<f64>()
        / count;

    let recency: f64 = certifications
        .iter()
        .map(|cert| (100.0 - cert.months_old(now) * 2.0).max(RECENCY_FLOOR))
        .sum::<f64>()
        / count;

    let verified = certifications.iter().filter(|c| c.is_verified).count() as f64;
    let verification = verified / count * 100.0;

    let score = count_score * weights.count
        + quality * weights.quality
        + recency * weights.recency
        + verification * weights.verification;

    ScoreBreakdown::new(
        score.min(100.0),
        [
            ("certification_count", count_score),
            ("certification_quality", quality),
            ("recency_bonus", recency),
            ("verification_status", verification),
        ],
    )
}

#[inline]
fn issuer_score(issuer: &str, tiers: &TierTables) -> f64 {
    let lowered = issuer.to_lowercase();
    if tiers.issuers.iter().any(|kw| lowered.contains(kw)) {
        RECOGNIZED_ISSUER_SCORE
    } else {
        UNRECOGNIZED_ISSUER_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn cert(issuer: &str, months_ago: i64, verified: bool, now: DateTime<Utc>) -> CertificationRecord {
        CertificationRecord {
            name: "Cert".to_string(),
            issuer: issuer.to_string(),
            issue_date: (now - Duration::days(months_ago * 30)).date_naive(),
            is_verified: verified,
        }
    }

    #[test]
    fn test_empty_certifications_zeroed() {
        let breakdown = score_certifications(
            &[],
            &TierTables::default(),
            &CertificationWeights::default(),
            Utc::now(),
        );
        assert_eq!(breakdown.score, 0.0);
        assert_eq!(breakdown.components.len(), 4);
    }

    #[test]
    fn test_ten_stale_unknown_certs() {
        let now = Utc::now();
        let certs: Vec<CertificationRecord> =
            (0..10).map(|_| cert("Some Academy", 24, false, now)).collect();
        let breakdown = score_certifications(
            &certs,
            &TierTables::default(),
            &CertificationWeights::default(),
            now,
        );

        assert_eq!(breakdown.component("certification_count"), 100.0);
        assert_eq!(breakdown.component("certification_quality"), 60.0);
        // 100 - 24 * 2, within a day or two of drift
        let recency = breakdown.component("recency_bonus");
        assert!((recency - 52.0).abs() < 1.5, "recency was {}", recency);
        assert_eq!(breakdown.component("verification_status"), 0.0);
    }

    #[test]
    fn test_recognized_issuer_substring() {
        let now = Utc::now();
        let certs = vec![cert("Amazon Web Services Training", 1, true, now)];
        let breakdown = score_certifications(
            &certs,
            &TierTables::default(),
            &CertificationWeights::default(),
            now,
        );

        assert_eq!(breakdown.component("certification_quality"), 100.0);
        assert_eq!(breakdown.component("verification_status"), 100.0);
    }

    #[test]
    fn test_ancient_cert_hits_recency_floor() {
        let now = Utc::now();
        let certs = vec![cert("Oracle", 120, false, now)];
        let breakdown = score_certifications(
            &certs,
            &TierTables::default(),
            &CertificationWeights::default(),
            now,
        );

        assert_eq!(breakdown.component("recency_bonus"), 20.0);
    }
}
