//! Immutable page link graph

use crate::error::{LinkRankError, Result};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

/// Directed graph of pages and their outbound links.
///
/// Every link target is itself a node and no node links to itself. Ordered maps
/// keep iteration order stable, so everything computed from the graph is
/// reproducible for identical input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LinkGraph<N = String> {
    links: BTreeMap<N, BTreeSet<N>>,
}

impl<N: Ord + Clone + Debug> LinkGraph<N> {
    /// Build a graph, rejecting links to pages that are not in the graph.
    ///
    /// Self-links are dropped. Fails with `InvalidInput` on an empty graph or a
    /// dangling link target.
    pub fn new(mut links: BTreeMap<N, BTreeSet<N>>) -> Result<Self> {
        if links.is_empty() {
            return Err(LinkRankError::invalid("graph has no pages"));
        }

        for (page, targets) in &links {
            if let Some(missing) = targets.iter().find(|t| !links.contains_key(*t)) {
                return Err(LinkRankError::invalid(format!(
                    "page {:?} links to {:?}, which is not in the graph",
                    page, missing
                )));
            }
        }

        strip_self_links(&mut links);
        Ok(Self { links })
    }

    /// Build a graph from raw extracted links, dropping self-links and any
    /// target outside the graph.
    pub fn from_unfiltered(mut links: BTreeMap<N, BTreeSet<N>>) -> Result<Self> {
        if links.is_empty() {
            return Err(LinkRankError::invalid("graph has no pages"));
        }

        let pages: BTreeSet<N> = links.keys().cloned().collect();
        for targets in links.values_mut() {
            targets.retain(|t| pages.contains(t));
        }

        strip_self_links(&mut links);
        Ok(Self { links })
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Always false for a constructed graph
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Pages in ascending order
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.links.keys()
    }

    pub fn contains(&self, node: &N) -> bool {
        self.links.contains_key(node)
    }

    /// Outbound links of `node`, or `None` if it is not in the graph
    pub fn links(&self, node: &N) -> Option<&BTreeSet<N>> {
        self.links.get(node)
    }

    /// (page, outbound links) pairs in page order
    pub fn iter(&self) -> impl Iterator<Item = (&N, &BTreeSet<N>)> + '_ {
        self.links.iter()
    }

    pub fn out_degree(&self, node: &N) -> Option<usize> {
        self.links.get(node).map(BTreeSet::len)
    }

    pub fn is_dangling(&self, node: &N) -> bool {
        self.links.get(node).is_some_and(BTreeSet::is_empty)
    }

    /// Pages without outbound links
    pub fn dangling_nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.links
            .iter()
            .filter(|(_, targets)| targets.is_empty())
            .map(|(page, _)| page)
    }

    /// Total number of links
    pub fn edge_count(&self) -> usize {
        self.links.values().map(BTreeSet::len).sum()
    }

    /// Reverse index: every page mapped to the pages linking to it.
    pub fn inbound(&self) -> BTreeMap<&N, Vec<&N>> {
        let mut inbound: BTreeMap<&N, Vec<&N>> =
            self.links.keys().map(|page| (page, Vec::new())).collect();

        for (source, targets) in &self.links {
            for target in targets {
                if let Some(sources) = inbound.get_mut(target) {
                    sources.push(source);
                }
            }
        }

        inbound
    }
}

impl LinkGraph<String> {
    /// Build a graph from `(page, [targets])` pairs.
    pub fn from_adjacency(adjacency: &[(&str, &[&str])]) -> Result<Self> {
        let links = adjacency
            .iter()
            .map(|(page, targets)| {
                (
                    page.to_string(),
                    targets.iter().map(|t| t.to_string()).collect(),
                )
            })
            .collect();
        Self::new(links)
    }
}

fn strip_self_links<N: Ord>(links: &mut BTreeMap<N, BTreeSet<N>>) {
    for (page, targets) in links.iter_mut() {
        targets.remove(page);
    }
}
