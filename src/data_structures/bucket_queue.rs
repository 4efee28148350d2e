use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::graph::VertexId;

/// How a bucket hands out its vertices
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BucketOrder {
    /// First enqueued, first popped
    #[default]
    Fifo,
    /// Lowest vertex index first, matching Dijkstra's tie-break
    VertexOrder,
}

/// Array of queues indexed by integer distance, as used by Dial's algorithm.
///
/// Indices run from `0` to `limit` inclusive. Buckets are allocated on first
/// use, so memory follows the largest distance actually reached rather than
/// the worst-case bound.
#[derive(Debug)]
pub struct BucketQueue {
    buckets: Vec<VecDeque<VertexId>>,
    limit: usize,
    order: BucketOrder,
    /// Entries across all buckets
    queued: usize,
}

impl BucketQueue {
    pub fn new(limit: usize, order: BucketOrder) -> Self {
        BucketQueue {
            buckets: Vec::new(),
            limit,
            order,
            queued: 0,
        }
    }

    /// Highest bucket index this queue accepts
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of buckets allocated so far
    pub fn allocated(&self) -> usize {
        self.buckets.len()
    }

    pub fn len(&self) -> usize {
        self.queued
    }

    pub fn is_empty(&self) -> bool {
        self.queued == 0
    }

    /// Appends `vertex` to bucket `index`
    pub fn push(&mut self, index: usize, vertex: VertexId) {
        debug_assert!(
            index <= self.limit,
            "bucket index {} beyond range 0..={}",
            index,
            self.limit
        );
        if index >= self.buckets.len() {
            self.buckets.resize_with(index + 1, VecDeque::new);
        }
        self.buckets[index].push_back(vertex);
        self.queued += 1;
    }

    /// Removes one occurrence of `vertex` from bucket `index`.
    /// Returns false if it was not there.
    pub fn remove(&mut self, index: usize, vertex: VertexId) -> bool {
        let Some(bucket) = self.buckets.get_mut(index) else {
            return false;
        };
        match bucket.iter().position(|&v| v == vertex) {
            Some(pos) => {
                bucket.remove(pos);
                self.queued -= 1;
                true
            }
            None => false,
        }
    }

    /// Takes the next vertex out of bucket `index`
    pub fn pop(&mut self, index: usize) -> Option<VertexId> {
        let bucket = self.buckets.get_mut(index)?;
        let vertex = match self.order {
            BucketOrder::Fifo => bucket.pop_front(),
            BucketOrder::VertexOrder => {
                let pos = bucket
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, v)| **v)
                    .map(|(pos, _)| pos)?;
                bucket.remove(pos)
            }
        }?;
        self.queued -= 1;
        Some(vertex)
    }
}
