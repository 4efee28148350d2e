use std::collections::HashSet;
use std::fmt;

use log::warn;
use serde::Serialize;

use crate::graph::{DirectedGraph, VertexKey, Weight};
use crate::Result;

/// Final state of one vertex after a solver run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEntry<K, W> {
    pub vertex: K,
    /// `None` means unreachable (infinite cost)
    pub cost: Option<W>,
    pub predecessor: Option<K>,
}

impl<K, W> fmt::Display for ResultEntry<K, W>
where
    K: fmt::Display,
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: Cost = ", self.vertex)?;
        match &self.cost {
            Some(cost) => write!(f, "{}", cost)?,
            None => write!(f, "inf")?,
        }
        match &self.predecessor {
            Some(pred) => write!(f, ", Previous = {}", pred),
            None => write!(f, ", Previous = None"),
        }
    }
}

/// Result of a shortest path algorithm execution.
///
/// A snapshot: it holds identities, not references into the graph, and is
/// unaffected by later runs or resets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPathResult<K, W> {
    /// Name of the algorithm that produced the result
    pub algorithm: &'static str,

    /// Source vertex identity
    pub source: K,

    /// One entry per vertex, in insertion order
    pub entries: Vec<ResultEntry<K, W>>,
}

impl<K, W> ShortestPathResult<K, W>
where
    K: VertexKey,
    W: Weight,
{
    /// Snapshots the per-vertex state left in `graph` by a run
    pub(crate) fn snapshot(algorithm: &'static str, graph: &DirectedGraph<K, W>, source: &K) -> Self {
        let vertices = graph.vertices();
        let entries = vertices
            .iter()
            .map(|vertex| ResultEntry {
                vertex: vertex.id().clone(),
                cost: vertex.cost(),
                predecessor: vertex.predecessor().map(|p| vertices[p.index()].id().clone()),
            })
            .collect();

        ShortestPathResult {
            algorithm,
            source: source.clone(),
            entries,
        }
    }

    pub fn entries(&self) -> &[ResultEntry<K, W>] {
        &self.entries
    }

    pub fn get(&self, vertex: &K) -> Option<&ResultEntry<K, W>> {
        self.entries.iter().find(|e| &e.vertex == vertex)
    }

    /// Cost of reaching `vertex`; `None` if unreachable or unknown
    pub fn cost(&self, vertex: &K) -> Option<W> {
        self.get(vertex).and_then(|e| e.cost)
    }

    pub fn predecessor(&self, vertex: &K) -> Option<&K> {
        self.get(vertex).and_then(|e| e.predecessor.as_ref())
    }

    /// Number of vertices with a finite cost, the source included
    pub fn reachable_count(&self) -> usize {
        self.entries.iter().filter(|e| e.cost.is_some()).count()
    }

    /// Renders every entry as one line of text
    pub fn lines(&self) -> Vec<String>
    where
        K: fmt::Display,
        W: fmt::Display,
    {
        self.entries.iter().map(|e| e.to_string()).collect()
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<K, W>
where
    K: VertexKey,
    W: Weight,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Computes shortest paths from `source` to every vertex.
    ///
    /// Validation happens first and leaves the graph untouched on error;
    /// the graph's per-vertex state is then reset and overwritten in place.
    fn run(&self, graph: &mut DirectedGraph<K, W>, source: &K) -> Result<ShortestPathResult<K, W>>;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<K, W>, target: &K) -> Option<Vec<K>> {
        result.cost(target)?;

        let mut path = Vec::new();
        let mut seen = HashSet::new();
        let mut current = target.clone();

        while current != result.source {
            if !seen.insert(current.clone()) {
                warn!("Cycle detected in path reconstruction at vertex {:?}", current);
                return None;
            }
            let pred = result.predecessor(&current)?.clone();
            path.push(current);
            current = pred;
        }

        path.push(result.source.clone());
        path.reverse();
        Some(path)
    }
}
