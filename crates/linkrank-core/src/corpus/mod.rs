//! Loading a directory of HTML pages into a link graph

mod links;
mod scanner;

pub use links::extract_links;
pub use scanner::{scan_pages, ScannedPage};

use crate::config::CorpusConfig;
use crate::error::{LinkRankError, Result};
use crate::graph::LinkGraph;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// Build the link graph of the pages under `root`.
///
/// Each page is identified by its path relative to `root`. Links to pages
/// outside the corpus and links from a page to itself are dropped.
pub fn crawl(root: &Path, config: &CorpusConfig) -> Result<LinkGraph<String>> {
    let metadata = std::fs::metadata(root)?;
    if !metadata.is_dir() {
        return Err(LinkRankError::invalid(format!(
            "{} is not a directory",
            root.display()
        )));
    }

    let pages = scan_pages(root, config)?;
    if pages.is_empty() {
        return Err(LinkRankError::invalid(format!(
            "no pages matching '{}' under {}",
            config.pattern,
            root.display()
        )));
    }

    let mut links: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

    for page in pages {
        let bytes = std::fs::read(&page.path)?;
        let content = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = content {
            tracing::warn!("{} is not valid UTF-8, decoding lossily", page.relative_path);
        }

        let targets = extract_links(&content, &page.relative_path)
            .into_iter()
            .collect();
        links.insert(page.relative_path, targets);
    }

    let graph = LinkGraph::from_unfiltered(links)?;
    tracing::info!(
        "Loaded corpus with {} pages and {} links",
        graph.len(),
        graph.edge_count()
    );
    Ok(graph)
}
