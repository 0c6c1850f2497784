//! PageRank by power iteration until the ranks stop moving

use super::RankMap;
use crate::error::{LinkRankError, Result};
use crate::graph::{validate_damping, LinkGraph, DEFAULT_DAMPING};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Max per-page change below which iteration stops, when none is configured
pub const DEFAULT_THRESHOLD: f64 = 1e-4;

/// Safety bound on the number of rounds
pub const DEFAULT_MAX_ROUNDS: usize = 10_000;

/// Parameters for [`iterate_pagerank_with`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterateOptions {
    pub damping: f64,
    pub threshold: f64,
    pub max_rounds: usize,
}

impl Default for IterateOptions {
    fn default() -> Self {
        Self {
            damping: DEFAULT_DAMPING,
            threshold: DEFAULT_THRESHOLD,
            max_rounds: DEFAULT_MAX_ROUNDS,
        }
    }
}

impl IterateOptions {
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return Err(LinkRankError::invalid(format!(
                "convergence threshold must be positive, got {}",
                self.threshold
            )));
        }
        if self.max_rounds == 0 {
            return Err(LinkRankError::invalid("max rounds must be at least 1"));
        }
        Ok(())
    }
}

/// Converged ranks together with how they were reached
#[derive(Debug, Clone, PartialEq)]
pub struct Convergence<N = String> {
    pub ranks: RankMap<N>,
    /// Rounds computed, including the final one
    pub rounds: usize,
    /// Largest per-page change of each round
    pub deltas: Vec<f64>,
}

/// Compute PageRank by iterating the PageRank recurrence from a uniform start.
///
/// Stops once no page's rank moved by `threshold` or more in a round.
pub fn iterate_pagerank<N>(
    graph: &LinkGraph<N>,
    damping: f64,
    threshold: f64,
) -> Result<RankMap<N>>
where
    N: Ord + Clone + Debug,
{
    let options = IterateOptions {
        damping,
        threshold,
        ..IterateOptions::default()
    };
    iterate_pagerank_with(graph, &options).map(|convergence| convergence.ranks)
}

/// Power iteration with explicit options and the full convergence trace.
///
/// Every round reads only the previous round's ranks. A page without links
/// spreads its rank evenly over all pages, matching the transition model, so
/// the total rank stays 1. Fails with `NonConvergence` when `max_rounds`
/// rounds pass without meeting the threshold.
pub fn iterate_pagerank_with<N>(
    graph: &LinkGraph<N>,
    options: &IterateOptions,
) -> Result<Convergence<N>>
where
    N: Ord + Clone + Debug,
{
    options.validate()?;
    if graph.is_empty() {
        return Err(LinkRankError::invalid("graph has no pages"));
    }

    let n = graph.len() as f64;
    let inbound = graph.inbound();
    let out_degree: BTreeMap<&N, f64> = graph
        .iter()
        .map(|(page, targets)| (page, targets.len() as f64))
        .collect();

    tracing::debug!(
        pages = graph.len(),
        damping = options.damping,
        threshold = options.threshold,
        "Iterating PageRank"
    );

    let mut ranks: BTreeMap<&N, f64> = graph.nodes().map(|page| (page, 1.0 / n)).collect();
    let mut deltas = Vec::new();

    for round in 1..=options.max_rounds {
        let dangling: f64 = graph
            .dangling_nodes()
            .map(|page| ranks.get(page).copied().unwrap_or(0.0))
            .sum();
        let base = (1.0 - options.damping) / n + options.damping * dangling / n;

        let next: BTreeMap<&N, f64> = inbound
            .iter()
            .map(|(page, sources)| {
                let incoming: f64 = sources
                    .iter()
                    .map(|source| {
                        let rank = ranks.get(source).copied().unwrap_or(0.0);
                        let degree = out_degree.get(source).copied().unwrap_or(1.0);
                        rank / degree
                    })
                    .sum();
                (*page, base + options.damping * incoming)
            })
            .collect();

        let delta = max_delta(&ranks, &next);
        deltas.push(delta);
        ranks = next;

        tracing::trace!(round, delta, "PageRank round");

        if delta < options.threshold {
            tracing::debug!(rounds = round, delta, "PageRank converged");
            return Ok(Convergence {
                ranks: ranks
                    .into_iter()
                    .map(|(page, rank)| (page.clone(), rank))
                    .collect(),
                rounds: round,
                deltas,
            });
        }
    }

    Err(LinkRankError::NonConvergence {
        rounds: options.max_rounds,
        last_delta: deltas.last().copied().unwrap_or(f64::INFINITY),
    })
}

/// Largest absolute change over all pages; both maps share one key set.
fn max_delta<N: Ord>(previous: &BTreeMap<&N, f64>, next: &BTreeMap<&N, f64>) -> f64 {
    previous
        .values()
        .zip(next.values())
        .fold(0.0_f64, |acc, (old, new)| acc.max((new - old).abs()))
}
