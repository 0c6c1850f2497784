//! Integration tests for the rank command

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn linkrank_cmd(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("linkrank").unwrap();
    cmd.env("LINKRANK_CONFIG", config_dir.path().join("config.yml"))
        .env_remove("LINKRANK_DAMPING")
        .env_remove("LINKRANK_SAMPLES")
        .env_remove("LINKRANK_SEED");
    cmd
}

fn setup_corpus() -> TempDir {
    let dir = TempDir::new().unwrap();
    let pages = [
        ("1.html", r#"<a href="2.html">Two</a>"#),
        ("2.html", r#"<a href="1.html">One</a> <a href="3.html">Three</a>"#),
        ("3.html", r#"<a href="2.html">Two</a> <a href="4.html">Four</a>"#),
        ("4.html", r#"<a href="2.html">Two</a> <a href="https://example.com">out</a>"#),
    ];

    for (name, body) in pages {
        fs::write(
            dir.path().join(name),
            format!("<!DOCTYPE html><html><body>{}</body></html>", body),
        )
        .unwrap();
    }
    fs::write(dir.path().join("notes.txt"), "<a href=\"1.html\">ignored</a>").unwrap();

    dir
}

#[test]
fn test_rank_prints_both_estimates() {
    let corpus = setup_corpus();
    let config_dir = TempDir::new().unwrap();

    linkrank_cmd(&config_dir)
        .arg("rank")
        .arg(corpus.path())
        .arg("--seed")
        .arg("7")
        .assert()
        .success()
        .stdout(predicate::str::contains("Corpus: 4 pages, 6 links"))
        .stdout(predicate::str::contains("PageRank Results from Sampling (n = 10000)"))
        .stdout(predicate::str::contains("PageRank Results from Iteration"))
        .stdout(predicate::str::contains("2.html: 0.4292"))
        .stdout(predicate::str::contains("4.html: 0.1310"))
        .stdout(predicate::str::contains("Max divergence between estimates"));
}

#[test]
fn test_rank_json_output() {
    let corpus = setup_corpus();
    let config_dir = TempDir::new().unwrap();

    let output = linkrank_cmd(&config_dir)
        .arg("rank")
        .arg(corpus.path())
        .args(["--seed", "11", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["pages"], 4);

    let estimates = json["estimates"].as_array().unwrap();
    assert_eq!(estimates.len(), 2);
    assert_eq!(estimates[0]["estimator"], "sampling");
    assert_eq!(estimates[0]["samples"], 10000);
    assert_eq!(estimates[1]["estimator"], "iteration");
    assert!(estimates[1]["rounds"].as_u64().unwrap() > 1);

    for estimate in estimates {
        let ranks = estimate["ranks"].as_object().unwrap();
        assert_eq!(ranks.len(), 4);
        let total: f64 = ranks.values().map(|r| r.as_f64().unwrap()).sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    assert!(json["max_divergence"].as_f64().unwrap() < 0.05);
}

#[test]
fn test_rank_same_seed_same_output() {
    let corpus = setup_corpus();
    let config_dir = TempDir::new().unwrap();

    let run = || {
        linkrank_cmd(&config_dir)
            .arg("rank")
            .arg(corpus.path())
            .args(["--seed", "99", "--samples", "2000", "--format", "csv"])
            .output()
            .unwrap()
            .stdout
    };

    let first = run();
    assert!(String::from_utf8_lossy(&first).starts_with("estimator,page,rank\n"));
    assert_eq!(first, run());
}

#[test]
fn test_rank_single_method() {
    let corpus = setup_corpus();
    let config_dir = TempDir::new().unwrap();

    linkrank_cmd(&config_dir)
        .arg("rank")
        .arg(corpus.path())
        .args(["--method", "iterate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PageRank Results from Iteration"))
        .stdout(predicate::str::contains("Sampling").not())
        .stdout(predicate::str::contains("Max divergence").not());
}

#[test]
fn test_rank_rejects_invalid_damping() {
    let corpus = setup_corpus();
    let config_dir = TempDir::new().unwrap();

    linkrank_cmd(&config_dir)
        .arg("rank")
        .arg(corpus.path())
        .args(["--damping", "1.5"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("damping"));
}

#[test]
fn test_rank_reports_non_convergence() {
    let corpus = setup_corpus();
    let config_dir = TempDir::new().unwrap();

    linkrank_cmd(&config_dir)
        .arg("rank")
        .arg(corpus.path())
        .args(["--method", "iterate", "--threshold", "1e-15", "--max-rounds", "2"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("did not converge"));
}

#[test]
fn test_rank_missing_directory() {
    let config_dir = TempDir::new().unwrap();

    linkrank_cmd(&config_dir)
        .arg("rank")
        .arg(config_dir.path().join("no-such-corpus"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("loading corpus"));
}

#[test]
fn test_rank_uses_config_file() {
    let corpus = setup_corpus();
    let config_dir = TempDir::new().unwrap();
    fs::write(
        config_dir.path().join("config.yml"),
        "ranking:\n  samples: 321\n  seed: 5\n",
    )
    .unwrap();

    linkrank_cmd(&config_dir)
        .arg("rank")
        .arg(corpus.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(n = 321)"));
}

#[test]
fn test_rank_rejects_malformed_env_override() {
    let corpus = setup_corpus();
    let config_dir = TempDir::new().unwrap();

    linkrank_cmd(&config_dir)
        .env("LINKRANK_SAMPLES", "-5")
        .arg("rank")
        .arg(corpus.path())
        .assert()
        .code(3)
        .stderr(predicate::str::contains("LINKRANK_SAMPLES"));
}

#[test]
fn test_rank_env_override_beats_config_file() {
    let corpus = setup_corpus();
    let config_dir = TempDir::new().unwrap();
    fs::write(config_dir.path().join("config.yml"), "ranking:\n  samples: 321\n").unwrap();

    linkrank_cmd(&config_dir)
        .env("LINKRANK_SAMPLES", "654")
        .args(["rank", "--method", "sample", "--seed", "1"])
        .arg(corpus.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("(n = 654)"));
}
