//! Random-surfer transition model

use super::LinkGraph;
use crate::error::{LinkRankError, Result};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// One-step probability distribution over the next page
pub type Distribution<N = String> = BTreeMap<N, f64>;

/// Damping factor used when none is configured
pub const DEFAULT_DAMPING: f64 = 0.85;

/// Probability distribution over which page to visit after `node`.
///
/// With probability `damping` the surfer follows one of `node`'s links chosen
/// uniformly; otherwise it jumps to any page in the graph, `node` included.
/// A page without links is treated as linking to every page, so its
/// distribution is uniform. The result always has one entry per page.
pub fn transition_model<N>(
    graph: &LinkGraph<N>,
    node: &N,
    damping: f64,
) -> Result<Distribution<N>>
where
    N: Ord + Clone + Debug,
{
    let weights = transition_weights(graph, node, damping)?;
    Ok(graph.nodes().cloned().zip(weights).collect())
}

/// [`transition_model`] as bare probabilities, in [`LinkGraph::nodes`] order.
pub fn transition_weights<N>(graph: &LinkGraph<N>, node: &N, damping: f64) -> Result<Vec<f64>>
where
    N: Ord + Clone + Debug,
{
    validate_damping(damping)?;
    if graph.is_empty() {
        return Err(LinkRankError::invalid("graph has no pages"));
    }

    let links = graph
        .links(node)
        .ok_or_else(|| LinkRankError::invalid(format!("page {:?} is not in the graph", node)))?;

    let n = graph.len() as f64;

    if links.is_empty() {
        return Ok(vec![1.0 / n; graph.len()]);
    }

    let restart = (1.0 - damping) / n;
    let follow = damping / links.len() as f64;

    Ok(graph
        .nodes()
        .map(|page| {
            if links.contains(page) {
                restart + follow
            } else {
                restart
            }
        })
        .collect())
}

/// Damping must be a probability strictly between 0 and 1.
pub fn validate_damping(damping: f64) -> Result<()> {
    if damping.is_finite() && damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(LinkRankError::invalid(format!(
            "damping factor must be in (0, 1), got {}",
            damping
        )))
    }
}
