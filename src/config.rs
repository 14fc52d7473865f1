use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Every tunable piece of the scoring rules: weight sets, tier tables and
/// the trait question keys. Deserializable so the rules can be adjusted
/// from `config/*.toml` or environment variables without code changes;
/// `Default` carries the production values.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ScoringConfig {
    #[serde(default)]
    pub rank_weights: RankWeights,
    #[serde(default)]
    pub skill_weights: SkillWeights,
    #[serde(default)]
    pub education_weights: EducationWeights,
    #[serde(default)]
    pub experience_weights: ExperienceWeights,
    #[serde(default)]
    pub certification_weights: CertificationWeights,
    #[serde(default)]
    pub coding_weights: CodingWeights,
    #[serde(default)]
    pub completeness_weights: CompletenessWeights,
    #[serde(default)]
    pub tiers: TierTables,
    #[serde(default)]
    pub trait_keys: TraitKeys,
}

/// Weights for combining the six sub-scores into the total rank score
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RankWeights {
    #[serde(default = "default_rank_skills")]
    pub skills: f64,
    #[serde(default = "default_rank_education")]
    pub education: f64,
    #[serde(default = "default_rank_experience")]
    pub experience: f64,
    #[serde(default = "default_rank_certifications")]
    pub certifications: f64,
    #[serde(default = "default_rank_coding")]
    pub coding: f64,
    #[serde(default = "default_rank_profile")]
    pub profile: f64,
}

impl Default for RankWeights {
    fn default() -> Self {
        Self {
            skills: default_rank_skills(),
            education: default_rank_education(),
            experience: default_rank_experience(),
            certifications: default_rank_certifications(),
            coding: default_rank_coding(),
            profile: default_rank_profile(),
        }
    }
}

fn default_rank_skills() -> f64 { 0.30 }
fn default_rank_education() -> f64 { 0.20 }
fn default_rank_experience() -> f64 { 0.25 }
fn default_rank_certifications() -> f64 { 0.10 }
fn default_rank_coding() -> f64 { 0.10 }
fn default_rank_profile() -> f64 { 0.05 }

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SkillWeights {
    #[serde(default = "default_04")]
    pub technical: f64,
    #[serde(default = "default_03")]
    pub experience_depth: f64,
    #[serde(default = "default_02")]
    pub diversity: f64,
    #[serde(default = "default_01")]
    pub verification: f64,
}

impl Default for SkillWeights {
    fn default() -> Self {
        Self {
            technical: default_04(),
            experience_depth: default_03(),
            diversity: default_02(),
            verification: default_01(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EducationWeights {
    #[serde(default = "default_03")]
    pub degree: f64,
    #[serde(default = "default_04")]
    pub institution: f64,
    #[serde(default = "default_02")]
    pub gpa: f64,
    #[serde(default = "default_01")]
    pub field: f64,
}

impl Default for EducationWeights {
    fn default() -> Self {
        Self {
            degree: default_03(),
            institution: default_04(),
            gpa: default_02(),
            field: default_01(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ExperienceWeights {
    #[serde(default = "default_04")]
    pub years: f64,
    #[serde(default = "default_03")]
    pub progression: f64,
    #[serde(default = "default_02")]
    pub company: f64,
    #[serde(default = "default_01")]
    pub diversity: f64,
}

impl Default for ExperienceWeights {
    fn default() -> Self {
        Self {
            years: default_04(),
            progression: default_03(),
            company: default_02(),
            diversity: default_01(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CertificationWeights {
    #[serde(default = "default_03")]
    pub count: f64,
    #[serde(default = "default_04")]
    pub quality: f64,
    #[serde(default = "default_02")]
    pub recency: f64,
    #[serde(default = "default_01")]
    pub verification: f64,
}

impl Default for CertificationWeights {
    fn default() -> Self {
        Self {
            count: default_03(),
            quality: default_04(),
            recency: default_02(),
            verification: default_01(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CodingWeights {
    #[serde(default = "default_03")]
    pub problem_solving: f64,
    #[serde(default = "default_025")]
    pub efficiency: f64,
    #[serde(default = "default_025")]
    pub algorithm: f64,
    #[serde(default = "default_02")]
    pub language: f64,
}

impl Default for CodingWeights {
    fn default() -> Self {
        Self {
            problem_solving: default_03(),
            efficiency: default_025(),
            algorithm: default_025(),
            language: default_02(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CompletenessWeights {
    #[serde(default = "default_04")]
    pub basic_info: f64,
    #[serde(default = "default_03")]
    pub summary: f64,
    #[serde(default = "default_02")]
    pub portfolio: f64,
    #[serde(default = "default_01")]
    pub recommendations: f64,
}

impl Default for CompletenessWeights {
    fn default() -> Self {
        Self {
            basic_info: default_04(),
            summary: default_03(),
            portfolio: default_02(),
            recommendations: default_01(),
        }
    }
}

fn default_04() -> f64 { 0.4 }
fn default_03() -> f64 { 0.3 }
fn default_025() -> f64 { 0.25 }
fn default_02() -> f64 { 0.2 }
fn default_01() -> f64 { 0.1 }

/// One substring-matched lookup entry. Entries are checked in listed
/// order and the first keyword contained in the input wins.
#[derive(Debug, Clone, Deserialize)]
pub struct TierEntry {
    pub keyword: String,
    pub score: f64,
}

impl TierEntry {
    fn new(keyword: &str, score: f64) -> Self {
        Self { keyword: keyword.to_string(), score }
    }
}

/// Name -> score lookup tables standing in for real reputation data.
/// Unknown names always fall back to the scorer's documented default.
#[derive(Debug, Clone, Deserialize)]
pub struct TierTables {
    /// Exact (lowercased) skill name -> tier score.
    #[serde(default = "default_skill_tiers")]
    pub skills: BTreeMap<String, f64>,
    /// Degree keyword -> level score, substring matched in order.
    #[serde(default = "default_degree_levels")]
    pub degrees: Vec<TierEntry>,
    /// Institution keyword -> tier score, substring matched in order.
    #[serde(default = "default_institution_tiers")]
    pub institutions: Vec<TierEntry>,
    /// Field-of-study keywords counted as tech-relevant.
    #[serde(default = "default_field_keywords")]
    pub field_keywords: Vec<String>,
    /// Seniority ladder, least to most senior; a role's score is the
    /// highest matching index times ten.
    #[serde(default = "default_seniority_ladder")]
    pub seniority_ladder: Vec<String>,
    /// Exact (lowercased) employer name -> tier score.
    #[serde(default = "default_company_tiers")]
    pub companies: BTreeMap<String, f64>,
    /// Recognized certification issuer keywords, substring matched.
    #[serde(default = "default_issuer_keywords")]
    pub issuers: Vec<String>,
    /// Assessment difficulty label -> multiplier percentage.
    #[serde(default = "default_difficulty_multipliers")]
    pub difficulty: BTreeMap<String, f64>,
}

impl Default for TierTables {
    fn default() -> Self {
        Self {
            skills: default_skill_tiers(),
            degrees: default_degree_levels(),
            institutions: default_institution_tiers(),
            field_keywords: default_field_keywords(),
            seniority_ladder: default_seniority_ladder(),
            companies: default_company_tiers(),
            issuers: default_issuer_keywords(),
            difficulty: default_difficulty_multipliers(),
        }
    }
}

fn default_skill_tiers() -> BTreeMap<String, f64> {
    [
        ("rust", 95.0),
        ("react", 95.0),
        ("typescript", 90.0),
        ("kubernetes", 90.0),
        ("go", 90.0),
        ("python", 85.0),
        ("aws", 85.0),
        ("node.js", 80.0),
        ("java", 75.0),
        ("sql", 70.0),
        ("html", 55.0),
        ("css", 55.0),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

fn default_degree_levels() -> Vec<TierEntry> {
    vec![
        TierEntry::new("phd", 100.0),
        TierEntry::new("doctor", 100.0),
        TierEntry::new("master", 85.0),
        TierEntry::new("mba", 85.0),
        TierEntry::new("bachelor", 70.0),
        TierEntry::new("b.tech", 70.0),
        TierEntry::new("diploma", 40.0),
        TierEntry::new("certificate", 20.0),
    ]
}

fn default_institution_tiers() -> Vec<TierEntry> {
    vec![
        TierEntry::new("iit", 100.0),
        TierEntry::new("mit", 100.0),
        TierEntry::new("stanford", 95.0),
        TierEntry::new("carnegie mellon", 95.0),
        TierEntry::new("berkeley", 90.0),
        TierEntry::new("nit", 85.0),
        TierEntry::new("bits", 85.0),
        TierEntry::new("iiit", 80.0),
    ]
}

fn default_field_keywords() -> Vec<String> {
    ["computer", "software", "information", "data", "electronics", "engineering"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_seniority_ladder() -> Vec<String> {
    [
        "intern", "trainee", "junior", "associate", "engineer", "senior",
        "lead", "manager", "director", "vp", "cto",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_company_tiers() -> BTreeMap<String, f64> {
    [
        ("google", 100.0),
        ("microsoft", 95.0),
        ("amazon", 95.0),
        ("apple", 95.0),
        ("meta", 95.0),
        ("netflix", 90.0),
        ("uber", 85.0),
        ("stripe", 85.0),
        ("infosys", 70.0),
        ("tcs", 65.0),
        ("wipro", 65.0),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

fn default_issuer_keywords() -> Vec<String> {
    [
        "aws", "amazon", "google", "microsoft", "oracle", "cisco",
        "red hat", "kubernetes", "linux foundation",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_difficulty_multipliers() -> BTreeMap<String, f64> {
    [
        ("beginner", 25.0),
        ("easy", 25.0),
        ("intermediate", 50.0),
        ("medium", 50.0),
        ("advanced", 75.0),
        ("hard", 75.0),
        ("expert", 100.0),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

/// Question ids that drive the categorical traits. These used to be string
/// literals buried in the profiler; keeping them here makes the contract
/// with the question bank explicit, and the profiler validates it when
/// constructed.
#[derive(Debug, Clone, Deserialize)]
pub struct TraitKeys {
    #[serde(default = "default_communication_key")]
    pub communication: String,
    #[serde(default = "default_love_language_key")]
    pub love_language: String,
    #[serde(default = "default_attachment_key")]
    pub attachment: String,
    #[serde(default = "default_values_key")]
    pub values: String,
}

impl Default for TraitKeys {
    fn default() -> Self {
        Self {
            communication: default_communication_key(),
            love_language: default_love_language_key(),
            attachment: default_attachment_key(),
            values: default_values_key(),
        }
    }
}

fn default_communication_key() -> String { "cm1".to_string() }
fn default_love_language_key() -> String { "cm2".to_string() }
fn default_attachment_key() -> String { "at2".to_string() }
fn default_values_key() -> String { "vl1".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the structs
    /// 2. Configuration file (config/default.toml)
    /// 3. Local config file (config/local.toml, for development overrides)
    /// 4. Environment variables (prefixed with TALENTIA_)
    ///    e.g., TALENTIA_SCORING__RANK_WEIGHTS__SKILLS -> scoring.rank_weights.skills
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("TALENTIA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("TALENTIA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
