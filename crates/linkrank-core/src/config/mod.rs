//! Configuration management

use crate::error::{LinkRankError, Result};
use crate::graph::{validate_damping, DEFAULT_DAMPING};
use crate::rank::{IterateOptions, DEFAULT_MAX_ROUNDS, DEFAULT_SAMPLES, DEFAULT_THRESHOLD};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable pointing at an alternative config file
pub const CONFIG_ENV: &str = "LINKRANK_CONFIG";

pub const DAMPING_ENV: &str = "LINKRANK_DAMPING";
pub const SAMPLES_ENV: &str = "LINKRANK_SAMPLES";
pub const SEED_ENV: &str = "LINKRANK_SEED";

/// Directories to exclude from scanning
const EXCLUDE_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    ".cache",
    "vendor",
    "dist",
    "build",
    "target",
];

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// Estimator settings
    #[serde(default)]
    pub ranking: RankConfig,

    /// Corpus loading settings
    #[serde(default)]
    pub corpus: CorpusConfig,
}

/// Estimator settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankConfig {
    /// Probability of following a link rather than jumping to a random page
    #[serde(default = "default_damping")]
    pub damping: f64,

    /// Random surfer steps for the sampling estimator
    #[serde(default = "default_samples")]
    pub samples: usize,

    /// Max per-page change that ends iteration
    #[serde(default = "default_threshold")]
    pub convergence_threshold: f64,

    /// Round limit for the iterative estimator
    #[serde(default = "default_max_rounds")]
    pub max_rounds: usize,

    /// Seed for reproducible sampling
    #[serde(default = "default_seed")]
    pub seed: Option<u64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            convergence_threshold: default_threshold(),
            max_rounds: default_max_rounds(),
            seed: default_seed(),
        }
    }
}

impl RankConfig {
    /// Reject out-of-range settings; values are never clamped.
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        if self.samples == 0 {
            return Err(LinkRankError::invalid("sample count must be at least 1"));
        }
        self.iterate_options().validate()
    }

    /// Override settings from `LINKRANK_DAMPING`, `LINKRANK_SAMPLES` and
    /// `LINKRANK_SEED`. A set variable that does not parse is an error.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| {
            std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
        })
    }

    /// Override settings from variables resolved by `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(damping) = parse_override(&lookup, DAMPING_ENV)? {
            self.damping = damping;
        }
        if let Some(samples) = parse_override(&lookup, SAMPLES_ENV)? {
            self.samples = samples;
        }
        if let Some(seed) = parse_override(&lookup, SEED_ENV)? {
            self.seed = Some(seed);
        }
        Ok(())
    }

    pub fn iterate_options(&self) -> IterateOptions {
        IterateOptions {
            damping: self.damping,
            threshold: self.convergence_threshold,
            max_rounds: self.max_rounds,
        }
    }
}

fn parse_override<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map(Some).map_err(|e| {
            LinkRankError::Config(format!("{} must be a number, got {:?}: {}", key, raw, e))
        }),
        None => Ok(None),
    }
}

fn default_damping() -> f64 {
    DEFAULT_DAMPING
}

fn default_samples() -> usize {
    DEFAULT_SAMPLES
}

fn default_threshold() -> f64 {
    DEFAULT_THRESHOLD
}

fn default_max_rounds() -> usize {
    DEFAULT_MAX_ROUNDS
}

fn default_seed() -> Option<u64> {
    None
}

/// Which files form the corpus
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CorpusConfig {
    /// Glob pattern matched against paths relative to the corpus root
    #[serde(default = "default_pattern")]
    pub pattern: String,

    /// Descend into subdirectories
    #[serde(default)]
    pub recursive: bool,

    #[serde(default = "default_true")]
    pub follow_symlinks: bool,

    /// Skip files and directories whose name starts with '.'
    #[serde(default = "default_true")]
    pub exclude_hidden: bool,

    #[serde(default = "default_exclude_dirs")]
    pub exclude_dirs: Vec<String>,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            pattern: default_pattern(),
            recursive: false,
            follow_symlinks: true,
            exclude_hidden: true,
            exclude_dirs: default_exclude_dirs(),
        }
    }
}

fn default_pattern() -> String {
    "*.html".to_string()
}

fn default_true() -> bool {
    true
}

fn default_exclude_dirs() -> Vec<String> {
    EXCLUDE_DIRS.iter().map(|s| s.to_string()).collect()
}

impl Config {
    /// `$LINKRANK_CONFIG` if set, otherwise the default path
    pub fn resolve_path() -> PathBuf {
        std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| Self::default_path())
    }

    /// Load config from `path`, falling back to defaults if it does not
    /// exist, then apply environment overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_yaml::from_str(&content)?;
            tracing::debug!("Loaded config from {}", path.display());
            config
        } else {
            Config::default()
        };
        config.ranking.apply_env()?;
        Ok(config)
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get default config path
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::CONFIG_DIR_NAME)
            .join("config.yml")
    }

    pub fn validate(&self) -> Result<()> {
        self.ranking.validate()?;
        glob::Pattern::new(&self.corpus.pattern)?;
        Ok(())
    }
}
