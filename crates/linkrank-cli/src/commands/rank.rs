//! PageRank computation command

use crate::app::{OutputFormat, RankArgs};
use crate::output::{self, RankSummary};
use anyhow::{Context, Result};
use linkrank_core::{crawl, estimate, max_divergence, Config};
use std::sync::Arc;

/// Crawl the corpus and run the selected estimators concurrently
pub async fn run(args: RankArgs, mut config: Config, format: OutputFormat) -> Result<()> {
    args.corpus.apply(&mut config.corpus);
    args.ranking.apply(&mut config.ranking);
    config.validate()?;

    let graph = crawl(&args.corpus.dir, &config.corpus)
        .with_context(|| format!("loading corpus {}", args.corpus.dir.display()))?;
    let graph = Arc::new(graph);
    let ranking = Arc::new(config.ranking);

    let handles: Vec<_> = args
        .method
        .estimators()
        .into_iter()
        .map(|estimator| {
            let graph = Arc::clone(&graph);
            let ranking = Arc::clone(&ranking);
            tokio::task::spawn_blocking(move || estimate(&*graph, estimator, &*ranking))
        })
        .collect();

    let mut estimates = Vec::with_capacity(handles.len());
    for handle in handles {
        let finished = handle.await??;
        tracing::debug!("{} estimate finished", finished.estimator.as_str());
        estimates.push(finished);
    }

    let divergence = match estimates.as_slice() {
        [a, b] => Some(max_divergence(&a.ranks, &b.ranks)?),
        _ => None,
    };

    let summary = RankSummary {
        pages: graph.len(),
        links: graph.edge_count(),
        estimates: &estimates,
        max_divergence: divergence,
    };
    print!("{}", output::format_ranks(&summary, format));

    Ok(())
}
