//! Parallel tree reduction
//!
//! # Algorithm
//!
//! The input is partitioned into groups of `group_size` values (the last
//! group may be partial). Every group is reduced independently, in
//! parallel, by a pairwise tree: each round combines slot `i` with slot
//! `i + half`, halving the active count, and an odd leftover slot is folded
//! into slot 0 so no value is dropped. The per-group results form the input
//! of the next pass, which is partitioned the same way, until one value
//! remains.
//!
//! Each pass collects its group results into a fresh vector, one slot per
//! group, so a pass never observes a partially written result of the pass
//! before it and no two groups ever write the same slot.

use crate::error::{ReduceError, ReduceResult};
use crate::op::{MinMax, ReduceOp};
use log::{debug, trace};
use rayon::prelude::*;

/// Default number of values reduced by one group
pub const GROUP_SIZE: usize = 256;

/// Reduction engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReduceConfig {
    /// Values per group (at least 2)
    pub group_size: usize,
}

impl Default for ReduceConfig {
    fn default() -> Self {
        ReduceConfig {
            group_size: GROUP_SIZE,
        }
    }
}

impl ReduceConfig {
    /// Configuration with a custom group size.
    pub fn with_group_size(group_size: usize) -> Self {
        ReduceConfig { group_size }
    }

    /// Check the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ReduceError::InvalidParameter`] if `group_size < 2`.
    pub fn validate(&self) -> ReduceResult<()> {
        if self.group_size < 2 {
            return Err(ReduceError::InvalidParameter(format!(
                "group_size must be at least 2, got {}",
                self.group_size
            )));
        }
        Ok(())
    }
}

/// Reject input that cannot be reduced deterministically.
pub(crate) fn validate_input(values: &[f32]) -> ReduceResult<()> {
    if values.is_empty() {
        return Err(ReduceError::InvalidInput(
            "cannot reduce an empty sequence".to_string(),
        ));
    }
    if let Some(idx) = values.iter().position(|v| v.is_nan()) {
        return Err(ReduceError::InvalidInput(format!(
            "NaN at index {idx}"
        )));
    }
    Ok(())
}

/// Reduce one group in place with a pairwise tree and return its result.
///
/// Every slot takes part in exactly one combine per round it is active in;
/// with an odd active count the last slot is folded into slot 0.
///
/// # Panics
///
/// Panics if `slots` is empty.
pub fn reduce_group<T, F>(slots: &mut [T], combine: &F) -> T
where
    T: Copy,
    F: Fn(T, T) -> T,
{
    let mut active = slots.len();
    while active > 1 {
        let half = active / 2;
        for i in 0..half {
            slots[i] = combine(slots[i], slots[i + half]);
        }
        if active % 2 == 1 {
            slots[0] = combine(slots[0], slots[active - 1]);
        }
        active = half;
    }
    slots[0]
}

/// Run passes of grouped tree reductions until a single value remains.
fn tree_reduce<T, F>(mut current: Vec<T>, group_size: usize, combine: F) -> T
where
    T: Copy + Send + Sync,
    F: Fn(T, T) -> T + Sync,
{
    let mut pass = 0usize;
    while current.len() > 1 {
        let groups = current.len().div_ceil(group_size);
        trace!(
            "reduction pass {}: {} values in {} groups",
            pass,
            current.len(),
            groups
        );
        current = current
            .par_chunks_mut(group_size)
            .map(|group| reduce_group(group, &combine))
            .collect();
        pass += 1;
    }
    current[0]
}

/// Reduce `values` to their minimum or maximum with the default configuration.
///
/// # Errors
///
/// Returns [`ReduceError::InvalidInput`] if `values` is empty or holds NaN.
///
/// # Example
///
/// ```
/// use lumen_reduce::{ReduceOp, reduce};
///
/// let values = [3.0, -1.5, 7.25, 0.0];
/// assert_eq!(reduce(&values, ReduceOp::Min).unwrap(), -1.5);
/// assert_eq!(reduce(&values, ReduceOp::Max).unwrap(), 7.25);
/// ```
pub fn reduce(values: &[f32], op: ReduceOp) -> ReduceResult<f32> {
    reduce_with(values, op, &ReduceConfig::default())
}

/// Reduce `values` with an explicit engine configuration.
pub fn reduce_with(values: &[f32], op: ReduceOp, config: &ReduceConfig) -> ReduceResult<f32> {
    config.validate()?;
    validate_input(values)?;
    if values.len() == 1 {
        return Ok(values[0]);
    }

    debug!(
        "reduce {:?}: {} values, group size {}",
        op,
        values.len(),
        config.group_size
    );
    Ok(tree_reduce(values.to_vec(), config.group_size, |a, b| {
        op.combine(a, b)
    }))
}

/// Minimum of `values`.
pub fn reduce_min(values: &[f32]) -> ReduceResult<f32> {
    reduce(values, ReduceOp::Min)
}

/// Maximum of `values`.
pub fn reduce_max(values: &[f32]) -> ReduceResult<f32> {
    reduce(values, ReduceOp::Max)
}

/// Minimum and maximum of `values` in one combined pass.
pub fn reduce_min_max(values: &[f32]) -> ReduceResult<MinMax> {
    reduce_min_max_with(values, &ReduceConfig::default())
}

/// Minimum and maximum of `values` with an explicit engine configuration.
pub fn reduce_min_max_with(values: &[f32], config: &ReduceConfig) -> ReduceResult<MinMax> {
    config.validate()?;
    validate_input(values)?;

    debug!(
        "reduce min/max: {} values, group size {}",
        values.len(),
        config.group_size
    );
    let seeds: Vec<MinMax> = values.par_iter().map(|&v| MinMax::splat(v)).collect();
    Ok(tree_reduce(seeds, config.group_size, MinMax::merge))
}
