use log::{debug, trace};
use num_traits::NumCast;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::BucketQueue;
use crate::graph::{DirectedGraph, VertexKey, Weight};
use crate::{Error, Result};

pub use crate::data_structures::BucketOrder;

/// Dial's algorithm: Dijkstra with the priority queue replaced by an array of
/// buckets indexed by integer distance.
///
/// Requires non-negative integral weights no larger than `max_edge_weight`.
/// Every shortest path is simple, so no distance exceeds
/// `max_edge_weight * (vertex_count - 1)`, which bounds the bucket range.
#[derive(Debug, Clone, Copy)]
pub struct Dial {
    max_edge_weight: u64,
    bucket_order: BucketOrder,
}

impl Dial {
    pub fn new(max_edge_weight: u64) -> Self {
        Dial {
            max_edge_weight,
            bucket_order: BucketOrder::Fifo,
        }
    }

    /// Set the order in which a bucket releases its vertices
    pub fn with_bucket_order(mut self, order: BucketOrder) -> Self {
        self.bucket_order = order;
        self
    }

    pub fn max_edge_weight(&self) -> u64 {
        self.max_edge_weight
    }

    pub fn bucket_order(&self) -> BucketOrder {
        self.bucket_order
    }

    /// Checks weights and the bound. Returns the highest bucket index and
    /// the integral weight of every edge, laid out like the adjacency lists.
    fn validate<K, W>(&self, graph: &DirectedGraph<K, W>) -> Result<(usize, Vec<Vec<u64>>)>
    where
        K: VertexKey,
        W: Weight,
    {
        let mut actual_max = 0u64;
        let mut weights = Vec::with_capacity(graph.vertex_count());
        for vertex in graph.vertices() {
            let mut outgoing = Vec::with_capacity(vertex.edges().len());
            for edge in vertex.edges() {
                let weight = edge.weight.as_integral().ok_or_else(|| {
                    Error::InvalidWeight(format!(
                        "{:?} on edge {:?} -> {:?} is not a non-negative integer",
                        edge.weight,
                        vertex.id(),
                        graph.vertices()[edge.to.index()].id()
                    ))
                })?;
                actual_max = actual_max.max(weight);
                outgoing.push(weight);
            }
            weights.push(outgoing);
        }

        if self.max_edge_weight < actual_max {
            return Err(Error::BucketRangeExceeded {
                max_edge_weight: self.max_edge_weight,
                actual: actual_max,
            });
        }

        let vertex_count = graph.vertex_count();
        let overflow = || Error::BucketRangeOverflow {
            max_edge_weight: self.max_edge_weight,
            vertex_count,
        };
        let edges_on_longest_path = vertex_count.saturating_sub(1) as u64;
        let limit = self
            .max_edge_weight
            .checked_mul(edges_on_longest_path)
            .ok_or_else(overflow)?;
        let limit = usize::try_from(limit).map_err(|_| overflow())?;
        // Every settled cost is at most `limit`, so it must be representable as W
        <W as NumCast>::from(limit).ok_or_else(overflow)?;
        Ok((limit, weights))
    }
}

impl<K, W> ShortestPathAlgorithm<K, W> for Dial
where
    K: VertexKey,
    W: Weight,
{
    fn name(&self) -> &'static str {
        "Dial"
    }

    fn run(&self, graph: &mut DirectedGraph<K, W>, source: &K) -> Result<ShortestPathResult<K, W>> {
        let source_id = graph
            .vertex_id(source)
            .ok_or_else(|| Error::UnknownSource(format!("{:?}", source)))?;
        let (limit, weights) = self.validate(graph)?;

        debug!(
            "Dial ({:?}) from {:?} on {} vertices, {} edges, buckets 0..={}",
            self.bucket_order,
            source,
            graph.vertex_count(),
            graph.edge_count(),
            limit
        );

        graph.reset();

        // Integer mirror of each vertex's cost, i.e. the bucket it sits in
        let mut slot: Vec<Option<usize>> = vec![None; graph.vertex_count()];
        let mut buckets = BucketQueue::new(limit, self.bucket_order);

        graph.set_cost(source_id, W::zero(), None);
        slot[source_id.index()] = Some(0);
        buckets.push(0, source_id);

        let mut settled = 0;
        let mut index = 0;
        while !buckets.is_empty() {
            while let Some(u) = buckets.pop(index) {
                let (Some(cost_u), Some(slot_u)) = (graph.cost_of(u), slot[u.index()]) else {
                    continue;
                };
                // Superseded by a cheaper relaxation already processed
                if slot_u < index {
                    continue;
                }
                trace!("Settled {:?} at cost {:?}", graph.vertices()[u.index()].id(), cost_u);
                settled += 1;

                for i in 0..graph.outgoing_edges(u).len() {
                    let edge = graph.outgoing_edges(u)[i];
                    let v = edge.to;
                    let new_slot = slot_u.saturating_add(weights[u.index()][i] as usize);

                    let improves = match slot[v.index()] {
                        None => true,
                        Some(current) => new_slot < current,
                    };
                    if !improves {
                        continue;
                    }

                    if let Some(current) = slot[v.index()] {
                        buckets.remove(current, v);
                    }
                    // An improving relaxation extends a simple path, so new_slot <= limit
                    let new_cost = cost_u + edge.weight;
                    trace!("Relaxed {:?} -> {:?} to {:?}", u, v, new_cost);
                    graph.set_cost(v, new_cost, Some(u));
                    slot[v.index()] = Some(new_slot);
                    buckets.push(new_slot, v);
                }
            }
            index += 1;
        }

        debug!(
            "Dial settled {} of {} vertices using {} buckets",
            settled,
            graph.vertex_count(),
            buckets.allocated()
        );
        Ok(ShortestPathResult::snapshot(
            <Self as ShortestPathAlgorithm<K, W>>::name(self),
            graph,
            source,
        ))
    }
}
