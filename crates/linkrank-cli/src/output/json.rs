//! JSON output formatter

use super::RankSummary;
use linkrank_core::{Distribution, LinkGraph};

pub fn format_ranks(summary: &RankSummary<'_>) -> String {
    let output = serde_json::json!({
        "pages": summary.pages,
        "links": summary.links,
        "estimates": summary.estimates,
        "max_divergence": summary.max_divergence,
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string()) + "\n"
}

pub fn format_graph(graph: &LinkGraph) -> String {
    serde_json::to_string_pretty(graph).unwrap_or_else(|_| "{}".to_string()) + "\n"
}

pub fn format_distribution(page: &str, distribution: &Distribution) -> String {
    let output = serde_json::json!({
        "page": page,
        "distribution": distribution,
    });

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string()) + "\n"
}
