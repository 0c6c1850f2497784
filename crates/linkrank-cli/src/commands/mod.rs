//! CLI command handlers

pub mod config;
pub mod graph;
pub mod rank;
pub mod transition;
