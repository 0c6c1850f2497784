//! Integration tests for the sampling and iterative estimators

use linkrank_core::{
    crawl, iterate_pagerank, iterate_pagerank_with, max_divergence, sample_pagerank,
    sample_pagerank_seeded, CorpusConfig, IterateOptions, LinkGraph,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use tempfile::TempDir;

fn corpus0() -> LinkGraph {
    LinkGraph::from_adjacency(&[
        ("1.html", &["2.html"]),
        ("2.html", &["1.html", "3.html"]),
        ("3.html", &["2.html", "4.html"]),
        ("4.html", &["2.html"]),
    ])
    .unwrap()
}

#[test]
fn test_single_page_graph() {
    let graph = LinkGraph::from_adjacency(&[("index.html", &[])]).unwrap();

    let sampled = sample_pagerank_seeded(&graph, 0.85, 500, Some(1)).unwrap();
    let iterated = iterate_pagerank(&graph, 0.85, 1e-4).unwrap();

    assert_eq!(sampled["index.html"], 1.0);
    assert!((iterated["index.html"] - 1.0).abs() < 1e-12);
}

#[test]
fn test_two_page_cycle() {
    let graph = LinkGraph::from_adjacency(&[("a", &["b"]), ("b", &["a"])]).unwrap();

    let sampled = sample_pagerank_seeded(&graph, 0.85, 10_000, Some(2024)).unwrap();
    let iterated = iterate_pagerank(&graph, 0.85, 1e-4).unwrap();

    for page in ["a", "b"] {
        assert!((sampled[page] - 0.5).abs() < 0.02, "sampled {}", sampled[page]);
        assert!((iterated[page] - 0.5).abs() < 1e-9, "iterated {}", iterated[page]);
    }
}

#[test]
fn test_corpus0_default_threshold() {
    let ranks = iterate_pagerank(&corpus0(), 0.85, 1e-4).unwrap();

    let expected = [
        ("1.html", 0.2199),
        ("2.html", 0.4292),
        ("3.html", 0.2199),
        ("4.html", 0.1310),
    ];
    for (page, value) in expected {
        assert!(
            (ranks[page] - value).abs() < 1e-4,
            "{}: {} vs {}",
            page,
            ranks[page],
            value
        );
    }
    let total: f64 = ranks.values().sum();
    assert!((total - 1.0).abs() < 1e-6);
}

#[test]
fn test_estimators_agree() {
    let graph = corpus0();
    let mut rng = StdRng::seed_from_u64(42);

    let sampled = sample_pagerank(&graph, 0.85, 20_000, &mut rng).unwrap();
    let iterated = iterate_pagerank(&graph, 0.85, 1e-6).unwrap();

    let divergence = max_divergence(&sampled, &iterated).unwrap();
    assert!(divergence < 0.02, "divergence {}", divergence);
}

#[test]
fn test_iteration_is_deterministic() {
    let graph = LinkGraph::from_adjacency(&[
        ("a", &["b", "c"]),
        ("b", &["c"]),
        ("c", &["a", "d"]),
        ("d", &[]),
        ("e", &["a"]),
    ])
    .unwrap();

    let first = iterate_pagerank(&graph, 0.85, 1e-8).unwrap();
    let second = iterate_pagerank(&graph, 0.85, 1e-8).unwrap();

    assert_eq!(first.len(), second.len());
    for (page, rank) in &first {
        assert_eq!(rank.to_bits(), second[page].to_bits());
    }
}

#[test]
fn test_max_delta_is_monotone_without_dangling_pages() {
    let options = IterateOptions {
        damping: 0.85,
        threshold: 1e-12,
        max_rounds: 1_000,
    };
    let convergence = iterate_pagerank_with(&corpus0(), &options).unwrap();

    assert!(convergence.rounds > 10);
    for pair in convergence.deltas.windows(2) {
        assert!(pair[1] <= pair[0] + 1e-15, "{:?}", pair);
    }
}

#[test]
fn test_crawled_corpus_ranks() {
    let dir = TempDir::new().unwrap();
    let pages = [
        ("1.html", r#"<a href="2.html">2</a>"#),
        ("2.html", r#"<a href="1.html">1</a> <a href="3.html">3</a>"#),
        ("3.html", r#"<a href="2.html">2</a> <a href="4.html">4</a>"#),
        ("4.html", r#"<a href="2.html">2</a>"#),
    ];
    for (name, body) in pages {
        fs::write(
            dir.path().join(name),
            format!("<html><body>{}</body></html>", body),
        )
        .unwrap();
    }

    let graph = crawl(dir.path(), &CorpusConfig::default()).unwrap();
    assert_eq!(graph, corpus0());

    let ranks = iterate_pagerank(&graph, 0.85, 1e-6).unwrap();
    assert!(ranks["2.html"] > ranks["1.html"]);
    assert!(ranks["1.html"] > ranks["4.html"]);
}
