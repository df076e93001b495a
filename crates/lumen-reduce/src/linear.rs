//! Sequential reference reduction
//!
//! A plain left-to-right scan. It validates the parallel engine and feeds
//! the reference tone mapper; it applies the same input checks so both
//! paths fail on exactly the same inputs.

use crate::error::ReduceResult;
use crate::op::{MinMax, ReduceOp};
use crate::tree::validate_input;

/// Linear-scan minimum or maximum.
///
/// # Errors
///
/// Returns [`crate::ReduceError::InvalidInput`] if `values` is empty or holds NaN.
pub fn reduce_linear(values: &[f32], op: ReduceOp) -> ReduceResult<f32> {
    validate_input(values)?;
    let mut acc = values[0];
    for &v in &values[1..] {
        acc = op.combine(acc, v);
    }
    Ok(acc)
}

/// Linear-scan minimum and maximum.
pub fn min_max_linear(values: &[f32]) -> ReduceResult<MinMax> {
    validate_input(values)?;
    let mut acc = MinMax::splat(values[0]);
    for &v in &values[1..] {
        acc = acc.merge(MinMax::splat(v));
    }
    Ok(acc)
}
