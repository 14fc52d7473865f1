use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A raw questionnaire answer. Scale questions carry a number, choice
/// questions a selected option label, multi-select questions a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Scale(f64),
    Text(String),
    Multi(Vec<String>),
}

impl AnswerValue {
    /// Numeric view of the answer; non-numeric answers coerce to the
    /// scale midpoint of 5.
    pub fn as_scale(&self) -> f64 {
        match self {
            AnswerValue::Scale(n) => *n,
            _ => 5.0,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            AnswerValue::Multi(items) => Some(items),
            _ => None,
        }
    }
}

/// Flat map from question id to the given answer.
pub type AnswerMap = HashMap<String, AnswerValue>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Scale,
    Choice,
}

/// One assessment question as supplied by the web layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    /// Dimension tag this question feeds, e.g. "openness". The legacy tag
    /// "attachmentStyle" routes to emotional stability.
    pub dimension: String,
    #[serde(default)]
    pub options: Vec<String>,
}

/// The full bank of assessment questions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuestionBank {
    pub questions: Vec<Question>,
}

impl QuestionBank {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn get(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

/// The five numeric personality dimensions plus the four categorical
/// traits derived from the questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(rename = "emotionalStability")]
    pub emotional_stability: f64,
    pub openness: f64,
    pub agreeableness: f64,
    pub conscientiousness: f64,
    pub extroversion: f64,
    #[serde(rename = "attachmentStyle")]
    pub attachment_style: String,
    #[serde(rename = "communicationStyle")]
    pub communication_style: String,
    #[serde(rename = "conflictResolution")]
    pub conflict_resolution: String,
    #[serde(rename = "loveLanguage")]
    pub love_language: String,
    pub values: Vec<String>,
}

/// Derived psychology profile for one person.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PsychologyScore {
    pub overall: f64,
    pub dimensions: Dimensions,
    #[serde(rename = "assessedAt")]
    pub assessed_at: DateTime<Utc>,
}

/// One side of a compatibility request: the stored psychology score plus
/// the lifestyle fields the matcher compares directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartnerProfile {
    #[serde(rename = "psychologyScore", default)]
    pub psychology_score: Option<PsychologyScore>,
    #[serde(default)]
    pub diet: Option<String>,
    #[serde(rename = "familyValues", default)]
    pub family_values: Option<String>,
}
