use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

/// One claimed skill on a candidate profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SkillRecord {
    pub name: String,
    /// Self-assessed proficiency, 1 (novice) to 10 (expert)
    #[validate(range(min = 1, max = 10))]
    pub level: u8,
    #[serde(rename = "experienceYears", default)]
    pub experience_years: f64,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
}

/// One degree. The list on a candidate is ordered highest-priority first;
/// only the first entry is scored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EducationRecord {
    pub institution: String,
    pub degree: String,
    pub field: String,
    #[validate(range(min = 0.0, max = 4.0))]
    #[serde(default)]
    pub gpa: Option<f64>,
    /// Numeric fallback tier (1 = best) used when the institution is not
    /// in the tier table.
    #[serde(rename = "collegeTier", default)]
    pub college_tier: Option<u8>,
}

/// One employment entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceRecord {
    pub company: String,
    pub role: String,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate", default)]
    pub end_date: Option<NaiveDate>,
    #[serde(rename = "isCurrent", default)]
    pub is_current: bool,
}

impl ExperienceRecord {
    /// Fractional years between start and end (or `now` for a current role).
    pub fn tenure_years(&self, now: DateTime<Utc>) -> f64 {
        let end = self.end_date.unwrap_or_else(|| now.date_naive());
        let days = (end - self.start_date).num_days();
        if days <= 0 {
            return 0.0;
        }
        days as f64 / 365.25
    }
}

/// One credential
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificationRecord {
    pub name: String,
    pub issuer: String,
    #[serde(rename = "issueDate")]
    pub issue_date: NaiveDate,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
}

impl CertificationRecord {
    /// Fractional months since issue, never negative.
    pub fn months_old(&self, now: DateTime<Utc>) -> f64 {
        let days = (now.date_naive() - self.issue_date).num_days();
        if days <= 0 {
            return 0.0;
        }
        days as f64 / 30.44
    }
}

/// One coding-test result
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CodingAssessmentRecord {
    pub language: String,
    #[validate(range(min = 0.0))]
    pub score: f64,
    #[serde(rename = "maxScore")]
    pub max_score: f64,
    #[serde(rename = "difficultyLevel", default)]
    pub difficulty_level: String,
    #[serde(rename = "problemsSolved", default)]
    pub problems_solved: u32,
    #[serde(rename = "totalProblems", default)]
    pub total_problems: u32,
    #[validate(range(min = 0.0, max = 100.0))]
    #[serde(rename = "efficiencyScore", default)]
    pub efficiency_score: f64,
}

/// Basic-info/bio/links slice of the profile used by the completeness
/// scorer, plus the declared completion percentage that feeds the bonus.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasicProfile {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(rename = "completionPercentage", default)]
    pub completion_percentage: Option<f64>,
}

/// Everything the web layer loads for one candidate before asking for a
/// rank. All lists may be empty; the corresponding sub-score is then zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateInput {
    #[serde(default)]
    pub skills: Vec<SkillRecord>,
    #[serde(default)]
    pub education: Vec<EducationRecord>,
    #[serde(default)]
    pub experience: Vec<ExperienceRecord>,
    #[serde(default)]
    pub certifications: Vec<CertificationRecord>,
    #[serde(rename = "codingAssessments", default)]
    pub coding_assessments: Vec<CodingAssessmentRecord>,
    #[serde(default)]
    pub profile: Option<BasicProfile>,
}

impl CandidateInput {
    /// Structural validation, run before any scoring. Empty lists are fine;
    /// a malformed record is not.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        for skill in &self.skills {
            skill.validate()?;
        }
        for edu in &self.education {
            edu.validate()?;
        }
        for exp in &self.experience {
            // end_date must be absent exactly when the role is current
            if exp.is_current == exp.end_date.is_some() {
                let mut errors = ValidationErrors::new();
                let mut err = ValidationError::new("end_date_mismatch");
                err.message =
                    Some("endDate must be present iff isCurrent is false".into());
                errors.add("endDate", err);
                return Err(errors);
            }
        }
        for coding in &self.coding_assessments {
            coding.validate()?;
            if coding.score > coding.max_score {
                let mut errors = ValidationErrors::new();
                let mut err = ValidationError::new("score_exceeds_max");
                err.message = Some("score must not exceed maxScore".into());
                errors.add("score", err);
                return Err(errors);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_level_out_of_range_rejected() {
        let input = CandidateInput {
            skills: vec![SkillRecord {
                name: "React".to_string(),
                level: 11,
                experience_years: 1.0,
                is_verified: false,
            }],
            ..Default::default()
        };

        assert!(input.validate().is_err());
    }

    #[test]
    fn test_current_role_with_end_date_rejected() {
        let input = CandidateInput {
            experience: vec![ExperienceRecord {
                company: "Acme".to_string(),
                role: "Engineer".to_string(),
                start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
                end_date: Some(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()),
                is_current: true,
            }],
            ..Default::default()
        };

        assert!(input.validate().is_err());
    }

    #[test]
    fn test_score_above_max_rejected() {
        let input = CandidateInput {
            coding_assessments: vec![CodingAssessmentRecord {
                language: "Rust".to_string(),
                score: 110.0,
                max_score: 100.0,
                difficulty_level: "expert".to_string(),
                problems_solved: 5,
                total_problems: 5,
                efficiency_score: 80.0,
            }],
            ..Default::default()
        };

        assert!(input.validate().is_err());
    }

    #[test]
    fn test_empty_input_is_valid() {
        assert!(CandidateInput::default().validate().is_ok());
    }

    #[test]
    fn test_tenure_years() {
        let exp = ExperienceRecord {
            company: "Acme".to_string(),
            role: "Engineer".to_string(),
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: Some(NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()),
            is_current: false,
        };

        let years = exp.tenure_years(Utc::now());
        assert!((years - 2.0).abs() < 0.01);
    }

    #[test]
    fn test_camel_case_contract() {
        let json = r#"{
            "name": "React",
            "level": 8,
            "experienceYears": 3.5,
            "isVerified": true
        }"#;

        let skill: SkillRecord = serde_json::from_str(json).unwrap();
        assert_eq!(skill.level, 8);
        assert!(skill.is_verified);
    }
}
