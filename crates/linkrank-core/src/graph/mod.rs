//! Page link graph and transition model

mod link_graph;
mod transition;

pub use link_graph::LinkGraph;
pub use transition::{
    transition_model, transition_weights, validate_damping, Distribution, DEFAULT_DAMPING,
};
