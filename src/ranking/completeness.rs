use crate::config::CompletenessWeights;
use crate::models::{BasicProfile, ScoreBreakdown};

const COMPONENTS: &[&str] = &[
    "basic_info",
    "professional_summary",
    "portfolio_links",
    "recommendations",
];

/// Maximum extra points the completion bonus can add to the total.
pub const MAX_COMPLETION_BONUS: f64 = 10.0;

/// Score profile completeness (0-100)
///
/// Scoring formula:
/// score = (
///     basic_info * 0.4 +           # fraction of name/email/phone/location
///     professional_summary * 0.3 + # bio length thresholds
///     portfolio_links * 0.2 +      # website present
///     recommendations * 0.1        # reserved, always 0 for now
/// )
pub fn score_completeness(
    profile: Option<&BasicProfile>,
    weights: &CompletenessWeights,
) -> ScoreBreakdown {
    let Some(profile) = profile else {
        return ScoreBreakdown::zeroed(COMPONENTS);
    };

    let fields = [&profile.name, &profile.email, &profile.phone, &profile.location];
    let filled = fields.iter().filter(|f| is_present(f)).count() as f64;
    let basic_info = filled / fields.len() as f64 * 100.0;

    let summary = summary_score(profile.bio.as_deref());

    let portfolio = if is_present(&profile.website) { 100.0 } else { 0.0 };

    // Recommendations are not collected upstream yet
    let recommendations = 0.0;

    let score = basic_info * weights.basic_info
        + summary * weights.summary
        + portfolio * weights.portfolio
        + recommendations * weights.recommendations;

    ScoreBreakdown::new(
        score.min(100.0),
        [
            ("basic_info", basic_info),
            ("professional_summary", summary),
            ("portfolio_links", portfolio),
            ("recommendations", recommendations),
        ],
    )
}

/// Extra points for a declared profile-completion percentage, added on top
/// of the weighted total. Linear in the percentage, monotonic, capped at
/// `MAX_COMPLETION_BONUS`.
pub fn completion_bonus(completion_percentage: Option<f64>) -> f64 {
    let pct = completion_percentage.unwrap_or(0.0).clamp(0.0, 100.0);
    pct / 100.0 * MAX_COMPLETION_BONUS
}

#[inline]
fn is_present(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

#[inline]
fn summary_score(bio: Option<&str>) -> f64 {
    match bio.map(|b| b.trim().len()).unwrap_or(0) {
        len if len > 100 => 100.0,
        len if len > 50 => 70.0,
        len if len > 0 => 40.0,
        _ => 0.0,
    }
}
