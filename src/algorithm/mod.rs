pub mod traits;
pub mod dijkstra;
pub mod dial;

pub use traits::{ResultEntry, ShortestPathAlgorithm, ShortestPathResult};

use crate::graph::{DirectedGraph, VertexKey, Weight};
use crate::Result;

/// Runs linear-scan Dijkstra from `source`
pub fn run_dijkstra<K, W>(graph: &mut DirectedGraph<K, W>, source: &K) -> Result<ShortestPathResult<K, W>>
where
    K: VertexKey,
    W: Weight,
{
    dijkstra::Dijkstra::new().run(graph, source)
}

/// Runs Dial's algorithm from `source` with FIFO buckets
pub fn run_dial<K, W>(
    graph: &mut DirectedGraph<K, W>,
    source: &K,
    max_edge_weight: u64,
) -> Result<ShortestPathResult<K, W>>
where
    K: VertexKey,
    W: Weight,
{
    dial::Dial::new(max_edge_weight).run(graph, source)
}
