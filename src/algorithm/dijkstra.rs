use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::{DirectedGraph, VertexId, VertexKey, Weight};
use crate::{Error, Result};

/// How the next vertex to settle is chosen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Extraction {
    /// Scan every unvisited vertex for the minimum cost: O(V^2)
    #[default]
    LinearScan,
    /// Lazy-deletion binary heap: O((V + E) log V)
    BinaryHeap,
}

/// Classic Dijkstra's algorithm implementation.
///
/// Among unvisited vertices of equal cost the one inserted first is settled
/// first, in both extraction modes, so both produce identical results.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra {
    extraction: Extraction,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance using linear-scan extraction
    pub fn new() -> Self {
        Dijkstra {
            extraction: Extraction::LinearScan,
        }
    }

    /// Set the extraction strategy
    pub fn with_extraction(mut self, extraction: Extraction) -> Self {
        self.extraction = extraction;
        self
    }

    pub fn extraction(&self) -> Extraction {
        self.extraction
    }

    fn run_linear_scan<K, W>(&self, graph: &mut DirectedGraph<K, W>, overflowed: &mut Vec<Overflow>) -> usize
    where
        K: VertexKey,
        W: Weight,
    {
        let n = graph.vertex_count();
        let mut settled = 0;

        for _ in 0..n {
            // First unvisited vertex with the smallest cost; infinity loses to any finite cost
            let mut best: Option<(VertexId, Option<W>)> = None;
            for i in 0..n {
                let v = VertexId(i);
                if graph.is_visited(v) {
                    continue;
                }
                let cost = graph.cost_of(v);
                let better = match (best, cost) {
                    (None, _) => true,
                    (Some((_, None)), Some(_)) => true,
                    (Some((_, Some(best_cost))), Some(cost)) => cost < best_cost,
                    _ => false,
                };
                if better {
                    best = Some((v, cost));
                }
            }

            let Some((u, cost_u)) = best else {
                break;
            };
            graph.mark_visited(u);

            // Unreachable vertices are still extracted but relax nothing
            if let Some(cost_u) = cost_u {
                trace!("Settled {:?} at cost {:?}", graph.vertices()[u.index()].id(), cost_u);
                settled += 1;
                relax_edges(graph, u, cost_u, overflowed, |_, _| {});
            }
        }

        settled
    }

    fn run_binary_heap<K, W>(
        &self,
        graph: &mut DirectedGraph<K, W>,
        source: VertexId,
        overflowed: &mut Vec<Overflow>,
    ) -> usize
    where
        K: VertexKey,
        W: Weight,
    {
        let mut queue = BinaryHeapWrapper::with_capacity(graph.vertex_count());
        queue.push(source, W::zero());
        let mut settled = 0;

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry: u was settled earlier or a cheaper entry exists
            if graph.is_visited(u) || graph.cost_of(u) != Some(dist_u) {
                continue;
            }
            graph.mark_visited(u);
            trace!("Settled {:?} at cost {:?}", graph.vertices()[u.index()].id(), dist_u);
            settled += 1;

            relax_edges(graph, u, dist_u, overflowed, |v, cost| queue.push(v, cost));
        }

        // Match the linear scan, which extracts unreachable vertices too
        for i in 0..graph.vertex_count() {
            graph.mark_visited(VertexId(i));
        }

        settled
    }
}

/// An edge `from -> to` whose candidate cost did not fit in the weight type
#[derive(Debug, Clone, Copy)]
struct Overflow {
    from: VertexId,
    to: VertexId,
}

/// Relaxes every outgoing edge of `u`, calling `on_improved` for each vertex
/// whose cost dropped.
///
/// A candidate above `W::max_value()` can never beat a finite cost, so it is
/// skipped and recorded in `overflowed` instead.
fn relax_edges<K, W, F>(
    graph: &mut DirectedGraph<K, W>,
    u: VertexId,
    cost_u: W,
    overflowed: &mut Vec<Overflow>,
    mut on_improved: F,
) where
    K: VertexKey,
    W: Weight,
    F: FnMut(VertexId, W),
{
    for i in 0..graph.outgoing_edges(u).len() {
        let edge = graph.outgoing_edges(u)[i];
        let Some(new_cost) = cost_u.checked_sum(edge.weight) else {
            overflowed.push(Overflow { from: u, to: edge.to });
            continue;
        };

        let should_update = match graph.cost_of(edge.to) {
            None => true,
            Some(current) => new_cost < current,
        };

        if should_update {
            graph.set_cost(edge.to, new_cost, Some(u));
            on_improved(edge.to, new_cost);
        }
    }
}

/// Fails if a skipped candidate left its target without any cost: that
/// vertex's shortest path cost exceeds `W::max_value()`.
fn check_overflow<K, W>(graph: &DirectedGraph<K, W>, overflowed: &[Overflow]) -> Result<()>
where
    K: VertexKey,
    W: Weight,
{
    match overflowed.iter().find(|o| graph.cost_of(o.to).is_none()) {
        Some(o) => Err(Error::CostOverflow {
            source_vertex: format!("{:?}", graph.vertices()[o.from.index()].id()),
            vertex: format!("{:?}", graph.vertices()[o.to.index()].id()),
        }),
        None => Ok(()),
    }
}

impl<K, W> ShortestPathAlgorithm<K, W> for Dijkstra
where
    K: VertexKey,
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn run(&self, graph: &mut DirectedGraph<K, W>, source: &K) -> Result<ShortestPathResult<K, W>> {
        let source_id = graph
            .vertex_id(source)
            .ok_or_else(|| Error::UnknownSource(format!("{:?}", source)))?;

        debug!(
            "Dijkstra ({:?}) from {:?} on {} vertices, {} edges",
            self.extraction,
            source,
            graph.vertex_count(),
            graph.edge_count()
        );

        graph.reset();
        graph.set_cost(source_id, W::zero(), None);

        let mut overflowed = Vec::new();
        let settled = match self.extraction {
            Extraction::LinearScan => self.run_linear_scan(graph, &mut overflowed),
            Extraction::BinaryHeap => self.run_binary_heap(graph, source_id, &mut overflowed),
        };

        if let Err(err) = check_overflow(graph, &overflowed) {
            // No partially solved state is left behind
            graph.reset();
            return Err(err);
        }

        debug!("Dijkstra settled {} of {} vertices", settled, graph.vertex_count());
        Ok(ShortestPathResult::snapshot(
            <Self as ShortestPathAlgorithm<K, W>>::name(self),
            graph,
            source,
        ))
    }
}
