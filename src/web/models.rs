use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::{ResultEntry, ShortestPathResult};
use crate::data_structures::BucketOrder;
use crate::algorithm::dijkstra::Extraction;
use crate::graph::DirectedGraph;

pub type SessionGraph = DirectedGraph<String, OrderedFloat<f64>>;

/// A vertex as sent to the front-end
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebVertex {
    pub index: usize,
    pub label: String,
}

/// An edge as sent to the front-end
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Complete graph of a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub vertices: Vec<WebVertex>,
    pub edges: Vec<WebEdge>,
}

impl WebGraph {
    pub fn from_graph(graph: &SessionGraph) -> Self {
        let vertices = graph
            .vertices()
            .iter()
            .enumerate()
            .map(|(index, v)| WebVertex {
                index,
                label: v.id().clone(),
            })
            .collect();

        let edges = graph
            .vertices()
            .iter()
            .flat_map(|v| {
                v.edges().iter().map(move |e| WebEdge {
                    from: v.id().clone(),
                    to: graph.vertices()[e.to.index()].id().clone(),
                    weight: e.weight.into_inner(),
                })
            })
            .collect();

        WebGraph { vertices, edges }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddVertexRequest {
    pub label: String,
}

#[derive(Debug, Deserialize)]
pub struct AddEdgeRequest {
    pub from: String,
    pub to: String,
    pub weight: f64,
}

/// Which solver a run request selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    Dijkstra,
    Dial,
}

/// Parameters for algorithm execution
#[derive(Debug, Clone, Deserialize)]
pub struct AlgorithmRequest {
    pub algorithm: AlgorithmKind,
    pub source: String,
    /// Required for Dial's algorithm
    #[serde(default)]
    pub max_edge_weight: Option<u64>,
    #[serde(default)]
    pub extraction: Extraction,
    #[serde(default)]
    pub bucket_order: BucketOrder,
}

/// Parameters for running both solvers from one source
#[derive(Debug, Clone, Deserialize)]
pub struct CompareRequest {
    pub source: String,
    /// Defaults to the largest edge weight in the graph
    #[serde(default)]
    pub max_edge_weight: Option<u64>,
}

/// One row of a result table; `cost` is null for unreachable vertices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebResultEntry {
    pub vertex: String,
    pub cost: Option<f64>,
    pub predecessor: Option<String>,
}

impl From<&ResultEntry<String, OrderedFloat<f64>>> for WebResultEntry {
    fn from(entry: &ResultEntry<String, OrderedFloat<f64>>) -> Self {
        WebResultEntry {
            vertex: entry.vertex.clone(),
            cost: entry.cost.map(|c| c.into_inner()),
            predecessor: entry.predecessor.clone(),
        }
    }
}

/// Response containing algorithm execution results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgorithmResponse {
    pub execution_id: Uuid,
    pub algorithm: String,
    pub source: String,
    pub execution_time_ms: f64,
    pub reachable: usize,
    pub results: Vec<WebResultEntry>,
    /// Rendered `"<vertex>: Cost = .., Previous = .."` lines
    pub lines: Vec<String>,
}

impl AlgorithmResponse {
    pub fn new(result: &ShortestPathResult<String, OrderedFloat<f64>>, execution_time_ms: f64) -> Self {
        AlgorithmResponse {
            execution_id: Uuid::new_v4(),
            algorithm: result.algorithm.to_string(),
            source: result.source.clone(),
            execution_time_ms,
            reachable: result.reachable_count(),
            results: result.entries().iter().map(WebResultEntry::from).collect(),
            lines: result.lines(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    pub dijkstra: AlgorithmResponse,
    pub dial: AlgorithmResponse,
    pub costs_match: bool,
    pub predecessors_match: bool,
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// Session summary returned by the session endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub last_result: Option<AlgorithmResponse>,
}

/// One interactive session: a graph under construction plus its latest run
#[derive(Debug, Clone)]
pub struct Session {
    pub id: Uuid,
    pub graph: SessionGraph,
    pub last_result: Option<AlgorithmResponse>,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            graph: DirectedGraph::new(),
            last_result: None,
            created_at: Utc::now(),
        }
    }

    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            id: self.id,
            created_at: self.created_at,
            vertex_count: self.graph.vertex_count(),
            edge_count: self.graph.edge_count(),
            last_result: self.last_result.clone(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
