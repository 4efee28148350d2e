use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Bounded, Num, NumCast};

/// Numeric edge weight usable by both solvers.
///
/// `Ord` keeps extraction deterministic; use `OrderedFloat<f64>` for real weights.
pub trait Weight: Num + NumCast + Bounded + Copy + Ord + Debug {
    /// Returns true if the weight is non-negative and a number
    fn is_valid_weight(&self) -> bool {
        *self >= Self::zero() && self.to_f64().map_or(true, |w| !w.is_nan())
    }

    /// Adds two non-negative weights, or `None` if the sum does not fit in `Self`
    fn checked_sum(&self, rhs: Self) -> Option<Self> {
        if rhs > Self::max_value() - *self {
            None
        } else {
            Some(*self + rhs)
        }
    }

    /// Returns the weight as an exact non-negative integer, if it is one
    fn as_integral(&self) -> Option<u64> {
        let value = self.to_u64()?;
        match <Self as NumCast>::from(value) {
            Some(back) if back == *self => Some(value),
            _ => None,
        }
    }
}

impl<T> Weight for T where T: Num + NumCast + Bounded + Copy + Ord + Debug {}

/// Caller-supplied vertex identity (labels, numeric tokens, ...)
pub trait VertexKey: Clone + Eq + Hash + Debug {}

impl<T> VertexKey for T where T: Clone + Eq + Hash + Debug {}
