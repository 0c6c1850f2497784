//! Error types for linkrank

use thiserror::Error;

/// Result type alias using LinkRankError
pub type Result<T> = std::result::Result<T, LinkRankError>;

/// Error type alias for convenience
pub type Error = LinkRankError;

/// Exit codes for CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const NOT_FOUND: i32 = 2;
    pub const INVALID_INPUT: i32 = 3;
    pub const NON_CONVERGENCE: i32 = 4;
}

/// Main error type for linkrank
#[derive(Debug, Error)]
pub enum LinkRankError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Iteration did not converge after {rounds} rounds (last max delta {last_delta:e})")]
    NonConvergence { rounds: usize, last_delta: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl LinkRankError {
    /// Shorthand for an `InvalidInput` error
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(e) if e.kind() == std::io::ErrorKind::NotFound => exit_codes::NOT_FOUND,
            Self::InvalidInput(_) | Self::Config(_) | Self::GlobPattern(_) => {
                exit_codes::INVALID_INPUT
            }
            Self::NonConvergence { .. } => exit_codes::NON_CONVERGENCE,
            _ => exit_codes::GENERAL_ERROR,
        }
    }
}
