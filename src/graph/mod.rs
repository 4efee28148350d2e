pub mod traits;
pub mod directed;
pub mod generators;

pub use traits::{VertexKey, Weight};
pub use directed::{DirectedGraph, Edge, Vertex, VertexId};
