//! CSV output formatter

use super::RankSummary;
use linkrank_core::{Distribution, LinkGraph};

pub fn format_ranks(summary: &RankSummary<'_>) -> String {
    let mut output = String::from("estimator,page,rank\n");

    for estimate in summary.estimates {
        for (page, rank) in &estimate.ranks {
            output.push_str(&format!(
                "{},{},{}\n",
                estimate.estimator.as_str(),
                escape_csv(page),
                rank
            ));
        }
    }

    output
}

pub fn format_graph(graph: &LinkGraph) -> String {
    let mut output = String::from("page,target\n");

    for (page, links) in graph.iter() {
        if links.is_empty() {
            output.push_str(&format!("{},\n", escape_csv(page)));
        }
        for target in links {
            output.push_str(&format!("{},{}\n", escape_csv(page), escape_csv(target)));
        }
    }

    output
}

pub fn format_distribution(page: &str, distribution: &Distribution) -> String {
    let mut output = String::from("from,to,probability\n");

    for (target, p) in distribution {
        output.push_str(&format!("{},{},{}\n", escape_csv(page), escape_csv(target), p));
    }

    output
}

fn escape_csv(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
