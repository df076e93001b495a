//! Reduction operators and accumulators
//!
//! Both operators are associative and commutative, so any partition of the
//! input, combined in any order, yields the same extremum as a linear scan.

/// Which extremum to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReduceOp {
    /// Smallest value
    Min,
    /// Largest value
    Max,
}

impl ReduceOp {
    /// Combine two partial results.
    #[inline]
    pub fn combine(self, a: f32, b: f32) -> f32 {
        match self {
            ReduceOp::Min => a.min(b),
            ReduceOp::Max => a.max(b),
        }
    }
}

/// Running (min, max) pair over a partition of the input
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinMax {
    pub min: f32,
    pub max: f32,
}

impl MinMax {
    /// Accumulator covering a single value.
    #[inline]
    pub fn splat(value: f32) -> Self {
        MinMax {
            min: value,
            max: value,
        }
    }

    /// Merge two accumulators covering disjoint partitions.
    #[inline]
    pub fn merge(self, other: MinMax) -> MinMax {
        MinMax {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// `max - min`
    #[inline]
    pub fn span(&self) -> f32 {
        self.max - self.min
    }
}
