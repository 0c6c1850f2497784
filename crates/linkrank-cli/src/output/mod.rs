//! Output formatters

pub mod csv;
pub mod json;
pub mod markdown;
pub mod terminal;

use crate::app::OutputFormat;
use linkrank_core::{Distribution, Estimate, Estimator, LinkGraph};

/// Everything `linkrank rank` reports
pub struct RankSummary<'a> {
    pub pages: usize,
    pub links: usize,
    pub estimates: &'a [Estimate],
    /// Largest per-page difference between the estimates, when two ran
    pub max_divergence: Option<f64>,
}

/// Heading used for an estimate in human-readable formats
pub fn estimate_title(estimate: &Estimate) -> String {
    match (estimate.estimator, estimate.samples, estimate.rounds) {
        (Estimator::Sampling, Some(n), _) => format!("PageRank Results from Sampling (n = {})", n),
        (Estimator::Iteration, _, Some(rounds)) => {
            format!("PageRank Results from Iteration ({} rounds)", rounds)
        }
        (Estimator::Sampling, ..) => "PageRank Results from Sampling".to_string(),
        (Estimator::Iteration, ..) => "PageRank Results from Iteration".to_string(),
    }
}

/// Format rank estimates
pub fn format_ranks(summary: &RankSummary<'_>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_ranks(summary),
        OutputFormat::Csv => csv::format_ranks(summary),
        OutputFormat::Md => markdown::format_ranks(summary),
        OutputFormat::Cli => terminal::format_ranks(summary),
    }
}

/// Format a corpus link graph
pub fn format_graph(graph: &LinkGraph, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_graph(graph),
        OutputFormat::Csv => csv::format_graph(graph),
        OutputFormat::Md => markdown::format_graph(graph),
        OutputFormat::Cli => terminal::format_graph(graph),
    }
}

/// Format a one-step transition distribution
pub fn format_distribution(
    page: &str,
    distribution: &Distribution,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Json => json::format_distribution(page, distribution),
        OutputFormat::Csv => csv::format_distribution(page, distribution),
        OutputFormat::Md => markdown::format_distribution(page, distribution),
        OutputFormat::Cli => terminal::format_distribution(page, distribution),
    }
}
