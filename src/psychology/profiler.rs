use crate::config::TraitKeys;
use crate::error::ScoringError;
use crate::models::{
    AnswerMap, AnswerValue, Dimensions, PsychologyScore, Question, QuestionBank, QuestionType,
};
use chrono::Utc;
use tracing::debug;

/// Baseline for every numeric dimension before any answer is applied.
const DIMENSION_BASELINE: f64 = 70.0;

/// Score ladder for choice answers, indexed by the selected option.
const CHOICE_LADDER: [f64; 4] = [90.0, 75.0, 55.0, 40.0];
const CHOICE_FALLBACK: f64 = 60.0;

/// Literal answer-label maps for the categorical traits. Unmatched labels
/// fall through to the first (default) token.
const COMMUNICATION_STYLES: &[(&str, &str, &str)] = &[
    ("I address concerns directly and immediately", "assertive", "collaborative"),
    ("I think things through before raising them", "reflective", "accommodating"),
    ("I prefer to keep the peace", "passive", "avoidant"),
    ("I can get heated in the moment", "expressive", "competing"),
];

const LOVE_LANGUAGES: &[(&str, &str)] = &[
    ("Quality time", "quality_time"),
    ("Words of affirmation", "words_of_affirmation"),
    ("Acts of service", "acts_of_service"),
    ("Physical touch", "physical_touch"),
    ("Receiving gifts", "receiving_gifts"),
];

const ATTACHMENT_STYLES: &[(&str, &str)] = &[
    ("I feel comfortable depending on my partner", "secure"),
    ("I worry my partner may not stay", "anxious"),
    ("I prefer not to depend on anyone", "avoidant"),
    ("I both want and fear closeness", "fearful"),
];

const DEFAULT_VALUE: &str = "Family & relationships";
const MAX_VALUES: usize = 3;

/// Converts questionnaire answers into a psychology profile.
///
/// The trait question keys are validated against the bank at construction
/// so a bank/scorer mismatch fails loudly instead of silently producing
/// default traits for everyone.
pub struct Profiler {
    bank: QuestionBank,
    trait_keys: TraitKeys,
}

impl Profiler {
    pub fn new(bank: QuestionBank, trait_keys: TraitKeys) -> Result<Self, ScoringError> {
        for (trait_name, key) in [
            ("communicationStyle", &trait_keys.communication),
            ("loveLanguage", &trait_keys.love_language),
            ("attachmentStyle", &trait_keys.attachment),
            ("values", &trait_keys.values),
        ] {
            if !bank.contains(key) {
                return Err(ScoringError::TraitKey {
                    trait_name: trait_name.to_string(),
                    key: key.clone(),
                });
            }
        }
        Ok(Self { bank, trait_keys })
    }

    pub fn with_default_keys(bank: QuestionBank) -> Result<Self, ScoringError> {
        Self::new(bank, TraitKeys::default())
    }

    /// Derive a profile from a flat answer map.
    ///
    /// Each dimension starts at the 70 baseline and is updated with a
    /// running average toward the latest answer, `dim = (dim + new) / 2`.
    /// The result therefore depends on question order; the bank's listed
    /// order is used so repeated calls are bit-identical.
    pub fn profile(&self, answers: &AnswerMap) -> PsychologyScore {
        let mut dims = NumericDims::baseline();

        for question in &self.bank.questions {
            let Some(answer) = answers.get(&question.id) else {
                continue;
            };
            let normalized = match question.question_type {
                QuestionType::Scale => answer.as_scale().clamp(0.0, 10.0) / 10.0 * 100.0,
                QuestionType::Choice => choice_score(question, answer),
            };
            dims.apply(&question.dimension, normalized);
        }

        let (communication_style, conflict_resolution) = self.communication(answers);
        let dimensions = Dimensions {
            emotional_stability: dims.emotional_stability,
            openness: dims.openness,
            agreeableness: dims.agreeableness,
            conscientiousness: dims.conscientiousness,
            extroversion: dims.extroversion,
            attachment_style: self.attachment_style(answers),
            communication_style,
            conflict_resolution,
            love_language: self.love_language(answers),
            values: self.values(answers),
        };

        let overall = (0.25 * dims.emotional_stability
            + 0.15 * dims.openness
            + 0.20 * dims.agreeableness
            + 0.20 * dims.conscientiousness
            + 0.20 * dims.extroversion)
            .round();

        debug!(overall, answered = answers.len(), "derived psychology profile");

        PsychologyScore {
            overall,
            dimensions,
            assessed_at: Utc::now(),
        }
    }

    /// Communication and conflict style come from the same answer.
    fn communication(&self, answers: &AnswerMap) -> (String, String) {
        let answer = answers
            .get(&self.trait_keys.communication)
            .and_then(AnswerValue::as_text);
        let (_, comm, conflict) = answer
            .and_then(|label| {
                COMMUNICATION_STYLES
                    .iter()
                    .find(|(candidate, _, _)| *candidate == label)
            })
            .unwrap_or(&COMMUNICATION_STYLES[0]);
        (comm.to_string(), conflict.to_string())
    }

    /// Only the first selected entry counts.
    fn love_language(&self, answers: &AnswerMap) -> String {
        let first = answers.get(&self.trait_keys.love_language).and_then(|a| {
            a.as_list()
                .and_then(|items| items.first().map(String::as_str))
                .or_else(|| a.as_text())
        });
        first
            .and_then(|label| {
                LOVE_LANGUAGES
                    .iter()
                    .find(|(candidate, _)| *candidate == label)
            })
            .map(|(_, token)| token.to_string())
            .unwrap_or_else(|| LOVE_LANGUAGES[0].1.to_string())
    }

    fn attachment_style(&self, answers: &AnswerMap) -> String {
        answers
            .get(&self.trait_keys.attachment)
            .and_then(AnswerValue::as_text)
            .and_then(|label| {
                ATTACHMENT_STYLES
                    .iter()
                    .find(|(candidate, _)| *candidate == label)
            })
            .map(|(_, token)| token.to_string())
            .unwrap_or_else(|| ATTACHMENT_STYLES[0].1.to_string())
    }

    fn values(&self, answers: &AnswerMap) -> Vec<String> {
        let selected = answers
            .get(&self.trait_keys.values)
            .and_then(AnswerValue::as_list)
            .unwrap_or(&[]);
        if selected.is_empty() {
            return vec![DEFAULT_VALUE.to_string()];
        }
        selected.iter().take(MAX_VALUES).cloned().collect()
    }
}

/// Option index -> ladder score; unknown options and indexes past the
/// ladder both fall back.
#[inline]
fn choice_score(question: &Question, answer: &AnswerValue) -> f64 {
    answer
        .as_text()
        .and_then(|label| question.options.iter().position(|opt| opt == label))
        .and_then(|index| CHOICE_LADDER.get(index).copied())
        .unwrap_or(CHOICE_FALLBACK)
}

struct NumericDims {
    emotional_stability: f64,
    openness: f64,
    agreeableness: f64,
    conscientiousness: f64,
    extroversion: f64,
}

impl NumericDims {
    fn baseline() -> Self {
        Self {
            emotional_stability: DIMENSION_BASELINE,
            openness: DIMENSION_BASELINE,
            agreeableness: DIMENSION_BASELINE,
            conscientiousness: DIMENSION_BASELINE,
            extroversion: DIMENSION_BASELINE,
        }
    }

    fn apply(&mut self, dimension: &str, normalized: f64) {
        let slot = match dimension {
            "emotionalStability" => &mut self.emotional_stability,
            // Legacy tag: attachment questions feed emotional stability
            "attachmentStyle" => &mut self.emotional_stability,
            "openness" => &mut self.openness,
            "agreeableness" => &mut self.agreeableness,
            "conscientiousness" => &mut self.conscientiousness,
            "extroversion" => &mut self.extroversion,
            _ => return,
        };
        *slot = (*slot + normalized) / 2.0;
    }
}
