use dial_sssp::data_structures::{BinaryHeapWrapper, BucketOrder, BucketQueue};
use dial_sssp::graph::VertexId;
use ordered_float::OrderedFloat;

#[test]
fn test_fifo_bucket_pops_in_arrival_order() {
    let mut queue = BucketQueue::new(10, BucketOrder::Fifo);
    queue.push(3, VertexId(5));
    queue.push(3, VertexId(1));
    queue.push(3, VertexId(4));
    assert_eq!(queue.len(), 3);

    assert_eq!(queue.pop(3), Some(VertexId(5)));
    assert_eq!(queue.pop(3), Some(VertexId(1)));
    assert_eq!(queue.pop(3), Some(VertexId(4)));
    assert_eq!(queue.pop(3), None);
    assert!(queue.is_empty());
}

#[test]
fn test_vertex_order_bucket_pops_lowest_index() {
    let mut queue = BucketQueue::new(10, BucketOrder::VertexOrder);
    queue.push(2, VertexId(7));
    queue.push(2, VertexId(3));
    queue.push(2, VertexId(9));

    assert_eq!(queue.pop(2), Some(VertexId(3)));
    assert_eq!(queue.pop(2), Some(VertexId(7)));
    assert_eq!(queue.pop(2), Some(VertexId(9)));
}

#[test]
fn test_remove_from_bucket() {
    let mut queue = BucketQueue::new(10, BucketOrder::Fifo);
    queue.push(6, VertexId(1));
    queue.push(6, VertexId(2));

    assert!(queue.remove(6, VertexId(1)));
    assert!(!queue.remove(6, VertexId(1)));
    assert!(!queue.remove(9, VertexId(2)));
    assert_eq!(queue.len(), 1);
    assert_eq!(queue.pop(6), Some(VertexId(2)));
    assert!(queue.is_empty());
}

#[test]
fn test_buckets_allocated_lazily() {
    let mut queue = BucketQueue::new(1_000_000, BucketOrder::Fifo);
    assert_eq!(queue.allocated(), 0);
    assert_eq!(queue.limit(), 1_000_000);

    queue.push(4, VertexId(0));
    assert_eq!(queue.allocated(), 5);
    assert_eq!(queue.pop(100), None);
    assert_eq!(queue.pop(0), None);
    assert_eq!(queue.pop(4), Some(VertexId(0)));
}

#[test]
fn test_priority_queue_breaks_ties_by_item() {
    let mut heap: BinaryHeapWrapper<VertexId, OrderedFloat<f64>> = BinaryHeapWrapper::new();
    heap.push(VertexId(4), OrderedFloat(2.0));
    heap.push(VertexId(2), OrderedFloat(1.0));
    heap.push(VertexId(1), OrderedFloat(2.0));
    assert_eq!(heap.len(), 3);

    assert_eq!(heap.pop(), Some((VertexId(2), OrderedFloat(1.0))));
    assert_eq!(heap.pop(), Some((VertexId(1), OrderedFloat(2.0))));
    assert_eq!(heap.pop(), Some((VertexId(4), OrderedFloat(2.0))));
    assert!(heap.is_empty());
}
