//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use linkrank_core::{CorpusConfig, Estimator, RankConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(
    author,
    version,
    about = "Rank hyperlinked pages by sampling and iterative PageRank"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to $LINKRANK_CONFIG, then the user config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute PageRank for a corpus
    Rank(RankArgs),

    /// Show the link graph of a corpus
    Graph(CorpusArgs),

    /// Show the next-page distribution from one page
    Transition(TransitionArgs),

    /// Show or create the configuration file
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct CorpusArgs {
    /// Corpus directory
    pub dir: PathBuf,

    /// Glob pattern for pages, relative to the corpus directory
    #[arg(long)]
    pub pattern: Option<String>,

    /// Include pages in subdirectories
    #[arg(short, long)]
    pub recursive: bool,
}

impl CorpusArgs {
    pub fn apply(&self, config: &mut CorpusConfig) {
        if let Some(ref pattern) = self.pattern {
            config.pattern = pattern.clone();
        }
        if self.recursive {
            config.recursive = true;
        }
    }
}

#[derive(Args)]
pub struct RankOverrides {
    /// Probability of following a link instead of jumping to a random page
    #[arg(short, long)]
    pub damping: Option<f64>,

    /// Random surfer steps for the sampling estimate
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Max per-page change that ends iteration
    #[arg(long)]
    pub threshold: Option<f64>,

    /// Round limit for the iterative estimate
    #[arg(long)]
    pub max_rounds: Option<usize>,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,
}

impl RankOverrides {
    pub fn apply(&self, config: &mut RankConfig) {
        if let Some(damping) = self.damping {
            config.damping = damping;
        }
        if let Some(samples) = self.samples {
            config.samples = samples;
        }
        if let Some(threshold) = self.threshold {
            config.convergence_threshold = threshold;
        }
        if let Some(max_rounds) = self.max_rounds {
            config.max_rounds = max_rounds;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

#[derive(Args)]
pub struct RankArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    #[command(flatten)]
    pub ranking: RankOverrides,

    /// Estimators to run
    #[arg(long, value_enum, default_value = "both")]
    pub method: Method,
}

#[derive(Args)]
pub struct TransitionArgs {
    #[command(flatten)]
    pub corpus: CorpusArgs,

    /// Page to step from, relative to the corpus directory
    pub page: String,

    /// Probability of following a link instead of jumping to a random page
    #[arg(short, long)]
    pub damping: Option<f64>,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the effective configuration to the config file
    #[arg(long)]
    pub init: bool,

    /// Overwrite an existing config file
    #[arg(long, requires = "init")]
    pub force: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    Both,
    Sample,
    Iterate,
}

impl Method {
    pub fn estimators(self) -> Vec<Estimator> {
        match self {
            Method::Both => vec![Estimator::Sampling, Estimator::Iteration],
            Method::Sample => vec![Estimator::Sampling],
            Method::Iterate => vec![Estimator::Iteration],
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Csv,
    Md,
}
