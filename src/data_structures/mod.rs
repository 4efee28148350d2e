pub mod bucket_queue;
pub mod priority_queue;

pub use bucket_queue::{BucketOrder, BucketQueue};
pub use priority_queue::BinaryHeapWrapper;
