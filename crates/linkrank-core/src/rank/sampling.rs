//! Monte-Carlo PageRank estimate from a random surfer's visit frequencies

use super::RankMap;
use crate::error::{LinkRankError, Result};
use crate::graph::{transition_weights, validate_damping, LinkGraph};
use rand::distributions::{Distribution as _, WeightedIndex};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Number of surfer steps used when none is configured
pub const DEFAULT_SAMPLES: usize = 10_000;

/// Estimate PageRank by walking `samples` steps of the random surfer.
///
/// The walk starts on a page chosen uniformly at random. Each step draws the
/// next page from the transition model and counts the visit; a page's rank is
/// its share of all visits. The starting page itself is not counted.
///
/// All randomness comes from `rng`, so a seeded generator gives a
/// reproducible result.
pub fn sample_pagerank<N, R>(
    graph: &LinkGraph<N>,
    damping: f64,
    samples: usize,
    rng: &mut R,
) -> Result<RankMap<N>>
where
    N: Ord + Clone + Debug,
    R: Rng + ?Sized,
{
    validate_damping(damping)?;
    if samples < 1 {
        return Err(LinkRankError::invalid("sample count must be at least 1"));
    }

    let pages: Vec<&N> = graph.nodes().collect();
    let mut current = *pages
        .choose(rng)
        .ok_or_else(|| LinkRankError::invalid("graph has no pages"))?;

    tracing::debug!(pages = pages.len(), samples, damping, "Sampling PageRank");

    let mut visits: BTreeMap<&N, usize> = pages.iter().map(|page| (*page, 0)).collect();

    for _ in 0..samples {
        // One weight per page, in the same order as `pages`.
        let weights = transition_weights(graph, current, damping)?;
        let sampler = WeightedIndex::<f64>::new(&weights)
            .map_err(|e| LinkRankError::invalid(format!("transition weights: {}", e)))?;

        current = pages[sampler.sample(rng)];
        *visits.entry(current).or_default() += 1;
    }

    tracing::debug!(samples, "Sampling finished");

    let total = samples as f64;
    Ok(visits
        .into_iter()
        .map(|(page, count)| (page.clone(), count as f64 / total))
        .collect())
}

/// [`sample_pagerank`] with a generator built from `seed`, or from system
/// entropy when no seed is given.
pub fn sample_pagerank_seeded<N>(
    graph: &LinkGraph<N>,
    damping: f64,
    samples: usize,
    seed: Option<u64>,
) -> Result<RankMap<N>>
where
    N: Ord + Clone + Debug,
{
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    sample_pagerank(graph, damping, samples, &mut rng)
}
