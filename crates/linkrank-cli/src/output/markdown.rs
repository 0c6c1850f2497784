//! Markdown output formatter

use super::{estimate_title, RankSummary};
use linkrank_core::{ranked, Distribution, LinkGraph};

pub fn format_ranks(summary: &RankSummary<'_>) -> String {
    let mut output = String::from("# PageRank\n\n");
    output.push_str(&format!(
        "- **Pages**: {}\n- **Links**: {}\n",
        summary.pages, summary.links
    ));
    if let Some(divergence) = summary.max_divergence {
        output.push_str(&format!("- **Max divergence**: {:.4}\n", divergence));
    }

    for estimate in summary.estimates {
        output.push_str(&format!("\n## {}\n\n", estimate_title(estimate)));
        output.push_str("| # | Page | Rank |\n|---|------|------|\n");
        for (i, (page, rank)) in ranked(&estimate.ranks).iter().enumerate() {
            output.push_str(&format!("| {} | `{}` | {:.4} |\n", i + 1, page, rank));
        }
    }

    output
}

pub fn format_graph(graph: &LinkGraph) -> String {
    let mut output = String::from("# Link Graph\n\n");

    for (page, links) in graph.iter() {
        output.push_str(&format!("- `{}`\n", page));
        for target in links {
            output.push_str(&format!("  - `{}`\n", target));
        }
    }

    output
}

pub fn format_distribution(page: &str, distribution: &Distribution) -> String {
    let mut output = format!("# Next page from `{}`\n\n", page);
    output.push_str("| Page | Probability |\n|------|-------------|\n");

    for (target, p) in distribution {
        output.push_str(&format!("| `{}` | {:.4} |\n", target, p));
    }

    output
}
