use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

use crate::graph::traits::{VertexKey, Weight};
use crate::{Error, Result};

/// Dense index of a vertex in its graph, equal to its insertion position
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct VertexId(pub usize);

impl VertexId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A directed weighted edge, owned by the outgoing list of its `from` vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<W> {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: W,
}

/// A vertex together with the per-run solver state
#[derive(Debug, Clone)]
pub struct Vertex<K, W> {
    id: K,
    /// Tentative cost; `None` stands for infinity
    cost: Option<W>,
    predecessor: Option<VertexId>,
    visited: bool,
    edges: Vec<Edge<W>>,
}

impl<K, W> Vertex<K, W>
where
    K: VertexKey,
    W: Weight,
{
    fn new(id: K) -> Self {
        Vertex {
            id,
            cost: None,
            predecessor: None,
            visited: false,
            edges: Vec::new(),
        }
    }

    pub fn id(&self) -> &K {
        &self.id
    }

    pub fn cost(&self) -> Option<W> {
        self.cost
    }

    pub fn predecessor(&self) -> Option<VertexId> {
        self.predecessor
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    fn reset(&mut self) {
        self.cost = None;
        self.predecessor = None;
        self.visited = false;
    }
}

/// A directed graph stored as an arena of vertices with outgoing adjacency lists.
///
/// Vertex order is insertion order and drives every deterministic tie-break.
/// Solvers write tentative costs, predecessors and the visited marker directly
/// into the vertices, so a graph must not be shared between concurrent runs.
#[derive(Debug, Clone)]
pub struct DirectedGraph<K, W>
where
    K: VertexKey,
    W: Weight,
{
    vertices: Vec<Vertex<K, W>>,

    /// Identity -> arena index
    index: HashMap<K, VertexId>,

    edge_count: usize,
}

impl<K, W> Default for DirectedGraph<K, W>
where
    K: VertexKey,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, W> DirectedGraph<K, W>
where
    K: VertexKey,
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            vertices: Vec::new(),
            index: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates an empty graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            vertices: Vec::with_capacity(vertices),
            index: HashMap::with_capacity(vertices),
            edge_count: 0,
        }
    }

    /// Adds a vertex with infinite cost and no predecessor.
    ///
    /// Fails with [`Error::DuplicateVertex`] if `id` is already present.
    pub fn add_vertex(&mut self, id: K) -> Result<VertexId> {
        if self.index.contains_key(&id) {
            return Err(Error::DuplicateVertex(format!("{:?}", id)));
        }

        let vertex_id = VertexId(self.vertices.len());
        self.index.insert(id.clone(), vertex_id);
        self.vertices.push(Vertex::new(id));
        Ok(vertex_id)
    }

    /// Adds a directed edge `from -> to`. No reverse edge is created.
    ///
    /// Both endpoints are checked before the weight, and nothing is modified
    /// on failure.
    pub fn add_edge(&mut self, from: &K, to: &K, weight: W) -> Result<Edge<W>> {
        let from_id = self.require(from)?;
        let to_id = self.require(to)?;

        if !weight.is_valid_weight() {
            return Err(Error::InvalidWeight(format!(
                "{:?} on edge {:?} -> {:?}",
                weight, from, to
            )));
        }

        let edge = Edge {
            from: from_id,
            to: to_id,
            weight,
        };
        self.vertices[from_id.0].edges.push(edge);
        self.edge_count += 1;
        Ok(edge)
    }

    /// Read-only view of all vertices in insertion order
    pub fn vertices(&self) -> &[Vertex<K, W>] {
        &self.vertices
    }

    /// Restores infinite cost, no predecessor and unvisited on every vertex
    pub fn reset(&mut self) {
        for vertex in &mut self.vertices {
            vertex.reset();
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains_vertex(&self, id: &K) -> bool {
        self.index.contains_key(id)
    }

    /// Looks up the arena index of a vertex identity
    pub fn vertex_id(&self, id: &K) -> Option<VertexId> {
        self.index.get(id).copied()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<K, W>> {
        self.vertices.get(id.0)
    }

    /// Returns the outgoing edges of a vertex (empty for an unknown index)
    pub fn outgoing_edges(&self, id: VertexId) -> &[Edge<W>] {
        match self.vertices.get(id.0) {
            Some(vertex) => &vertex.edges,
            None => &[],
        }
    }

    /// Returns true if there's at least one edge `from -> to`
    pub fn has_edge(&self, from: &K, to: &K) -> bool {
        match (self.vertex_id(from), self.vertex_id(to)) {
            (Some(from), Some(to)) => self.outgoing_edges(from).iter().any(|e| e.to == to),
            _ => false,
        }
    }

    /// Largest edge weight in the graph, `None` if there are no edges
    pub fn max_edge_weight(&self) -> Option<W> {
        self.vertices
            .iter()
            .flat_map(|v| v.edges.iter())
            .map(|e| e.weight)
            .max()
    }

    fn require(&self, id: &K) -> Result<VertexId> {
        self.vertex_id(id)
            .ok_or_else(|| Error::UnknownVertex(format!("{:?}", id)))
    }

    // Solver-facing state accessors

    pub(crate) fn cost_of(&self, id: VertexId) -> Option<W> {
        self.vertices[id.0].cost
    }

    pub(crate) fn set_cost(&mut self, id: VertexId, cost: W, predecessor: Option<VertexId>) {
        let vertex = &mut self.vertices[id.0];
        vertex.cost = Some(cost);
        vertex.predecessor = predecessor;
    }

    pub(crate) fn mark_visited(&mut self, id: VertexId) {
        self.vertices[id.0].visited = true;
    }

    pub(crate) fn is_visited(&self, id: VertexId) -> bool {
        self.vertices[id.0].visited
    }
}
