//! Dial SSSP - single-source shortest paths over a weighted directed graph
//!
//! Two solvers share one graph model and one correctness contract:
//! a comparison-based Dijkstra and Dial's integer-bucket algorithm.
//! Callers build a [`DirectedGraph`], pick a source vertex and a solver, and
//! receive one `(vertex, cost, predecessor)` entry per vertex.

pub mod algorithm;
pub mod data_structures;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod graph;
#[cfg(feature = "web")]
pub mod web;

pub use algorithm::{
    dial::{BucketOrder, Dial},
    dijkstra::{Dijkstra, Extraction},
    run_dial, run_dijkstra, ResultEntry, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::{DirectedGraph, Edge, Vertex, VertexId};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Vertex already present in graph: {0}")]
    DuplicateVertex(String),

    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Source vertex not found in graph: {0}")]
    UnknownSource(String),

    #[error("Invalid edge weight: {0}")]
    InvalidWeight(String),

    #[error("Bucket range exceeded: max_edge_weight {max_edge_weight} is below the largest edge weight {actual}")]
    BucketRangeExceeded { max_edge_weight: u64, actual: u64 },

    #[error("Bucket range overflow: max_edge_weight {max_edge_weight} over {vertex_count} vertices does not fit in memory indices")]
    BucketRangeOverflow { max_edge_weight: u64, vertex_count: usize },

    #[error("Path cost overflows the weight type: reaching {vertex} from {source_vertex}")]
    CostOverflow { source_vertex: String, vertex: String },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
