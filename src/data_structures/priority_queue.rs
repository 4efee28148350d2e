use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue over `(priority, item)` pairs.
///
/// Equal priorities pop the smallest item first, so with vertex indices as
/// items the earliest inserted vertex wins a tie.
#[derive(Debug)]
pub struct BinaryHeapWrapper<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> Default for BinaryHeapWrapper<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, P> BinaryHeapWrapper<V, P>
where
    V: Copy + Ord + Debug,
    P: Copy + Ord + Debug,
{
    pub fn new() -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        BinaryHeapWrapper {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn push(&mut self, item: V, priority: P) {
        self.heap.push(Reverse((priority, item)));
    }

    /// Removes the entry with the lowest priority (then lowest item)
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, item))| (item, priority))
    }
}
