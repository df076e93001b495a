//! lumen-reduce - Parallel min/max reduction
//!
//! This crate provides the reduction engine that feeds normalization
//! parameters to the tone mapper:
//!
//! - [`reduce`] / [`reduce_min_max`] - grouped pairwise tree reduction,
//!   groups dispatched to the rayon pool
//! - [`reduce_linear`] / [`min_max_linear`] - sequential reference scan
//!
//! Min and max are exact (no rounding), so the parallel engine returns
//! bit-identical results to the linear scan for any input and any group
//! size.

mod error;
pub mod linear;
pub mod op;
pub mod tree;

pub use error::{ReduceError, ReduceResult};
pub use linear::{min_max_linear, reduce_linear};
pub use op::{MinMax, ReduceOp};
pub use tree::{
    GROUP_SIZE, ReduceConfig, reduce, reduce_group, reduce_max, reduce_min, reduce_min_max,
    reduce_min_max_with, reduce_with,
};
