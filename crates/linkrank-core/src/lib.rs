//! Linkrank Core Library
//!
//! Estimates the PageRank of pages in a corpus of hyperlinked documents.
//!
//! # Features
//! - Link graph loading from a directory of HTML pages
//! - Random-surfer transition model with damping and uniform restarts
//! - Monte-Carlo estimate from a seedable random walk
//! - Power-iteration estimate with a global convergence test

pub mod config;
pub mod corpus;
pub mod error;
pub mod graph;
pub mod rank;

pub use config::{Config, CorpusConfig, RankConfig};
pub use corpus::crawl;
pub use error::{Error, LinkRankError, Result};
pub use graph::{transition_model, transition_weights, Distribution, LinkGraph, DEFAULT_DAMPING};
pub use rank::{
    estimate, iterate_pagerank, iterate_pagerank_with, max_divergence, ranked, sample_pagerank,
    sample_pagerank_seeded, Convergence, Estimate, Estimator, IterateOptions, RankMap,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "linkrank";
