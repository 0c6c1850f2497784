//! PageRank estimators
//!
//! Two independent estimates of the same stationary distribution:
//! - [`sample_pagerank`]: visit frequencies of a simulated random surfer
//! - [`iterate_pagerank`]: fixed point of the PageRank recurrence

mod iterative;
mod sampling;

pub use iterative::{
    iterate_pagerank, iterate_pagerank_with, Convergence, IterateOptions, DEFAULT_MAX_ROUNDS,
    DEFAULT_THRESHOLD,
};
pub use sampling::{sample_pagerank, sample_pagerank_seeded, DEFAULT_SAMPLES};

use crate::config::RankConfig;
use crate::error::{LinkRankError, Result};
use crate::graph::LinkGraph;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Page -> estimated rank. Ranks are in [0, 1] and sum to 1.
pub type RankMap<N = String> = BTreeMap<N, f64>;

/// Which estimator produced a rank mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Estimator {
    Sampling,
    Iteration,
}

impl Estimator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Estimator::Sampling => "sampling",
            Estimator::Iteration => "iteration",
        }
    }
}

/// Result of running one estimator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate<N = String> {
    pub estimator: Estimator,
    pub ranks: RankMap<N>,
    /// Surfer steps taken, for the sampling estimator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<usize>,
    /// Rounds until convergence, for the iterative estimator
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rounds: Option<usize>,
}

/// Run one estimator with the settings in `config`.
pub fn estimate<N>(
    graph: &LinkGraph<N>,
    estimator: Estimator,
    config: &RankConfig,
) -> Result<Estimate<N>>
where
    N: Ord + Clone + Debug,
{
    config.validate()?;
    match estimator {
        Estimator::Sampling => {
            let ranks = sample_pagerank_seeded(graph, config.damping, config.samples, config.seed)?;
            Ok(Estimate {
                estimator,
                ranks,
                samples: Some(config.samples),
                rounds: None,
            })
        }
        Estimator::Iteration => {
            let convergence = iterate_pagerank_with(graph, &config.iterate_options())?;
            Ok(Estimate {
                estimator,
                ranks: convergence.ranks,
                samples: None,
                rounds: Some(convergence.rounds),
            })
        }
    }
}

/// Entries ordered by descending rank, ties broken by page.
pub fn ranked<N: Ord + Clone>(ranks: &RankMap<N>) -> Vec<(N, f64)> {
    let mut entries: Vec<(N, f64)> = ranks.iter().map(|(p, r)| (p.clone(), *r)).collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries
}

/// Largest absolute per-page difference between two mappings of the same pages.
pub fn max_divergence<N: Ord + Debug>(a: &RankMap<N>, b: &RankMap<N>) -> Result<f64> {
    if a.len() != b.len() || a.keys().zip(b.keys()).any(|(x, y)| x != y) {
        return Err(LinkRankError::invalid("rank mappings cover different pages"));
    }

    Ok(a
        .values()
        .zip(b.values())
        .fold(0.0_f64, |acc, (x, y)| acc.max((x - y).abs())))
}
