use thiserror::Error;

/// Errors surfaced by the scoring core.
///
/// Scoring itself never fails: empty inputs and unknown lookup names fall
/// back to documented defaults. Errors only occur for structurally invalid
/// records or a misconfigured profiler.
#[derive(Debug, Error)]
pub enum ScoringError {
    /// A record failed structural validation before scoring.
    #[error("invalid input: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// A configured trait question key does not exist in the question bank.
    #[error("trait key '{key}' for {trait_name} not present in question bank")]
    TraitKey { trait_name: String, key: String },

    /// Configuration could not be loaded or deserialized.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
