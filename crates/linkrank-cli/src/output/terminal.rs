//! Terminal output formatter

use super::{estimate_title, RankSummary};
use linkrank_core::{Distribution, LinkGraph};

pub fn format_ranks(summary: &RankSummary<'_>) -> String {
    let mut output = format!("Corpus: {} pages, {} links\n", summary.pages, summary.links);

    for estimate in summary.estimates {
        output.push('\n');
        output.push_str(&estimate_title(estimate));
        output.push_str("\n\n");
        for (page, rank) in &estimate.ranks {
            output.push_str(&format!("  {}: {:.4}\n", page, rank));
        }
    }

    if let Some(divergence) = summary.max_divergence {
        output.push_str(&format!("\nMax divergence between estimates: {:.4}\n", divergence));
    }

    output
}

pub fn format_graph(graph: &LinkGraph) -> String {
    let mut output = String::new();

    for (page, links) in graph.iter() {
        if links.is_empty() {
            output.push_str(&format!("{} -> (no links)\n", page));
        } else {
            let targets: Vec<&str> = links.iter().map(String::as_str).collect();
            output.push_str(&format!("{} -> {}\n", page, targets.join(", ")));
        }
    }

    output
}

pub fn format_distribution(page: &str, distribution: &Distribution) -> String {
    let mut output = format!("Next page from {}\n\n", page);

    for (target, p) in distribution {
        output.push_str(&format!("  {}: {:.4}\n", target, p));
    }

    output
}
