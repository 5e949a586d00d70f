//! # Linear algebra primitives
//!
//! Sparse primitives used to represent the constraint matrix of a linear program.

pub mod entry;
pub mod matrix;

/// Shared sentinel for unbounded sides of constraints and variables.
///
/// Backends translate it into their own notion of infinity.
pub const INFINITY: f64 = f64::INFINITY;

/// Absolute tolerance for comparing constraint bounds.
pub const BOUND_TOLERANCE: f64 = 1e-15;

/// Compare two bounds, which may be infinite, within `BOUND_TOLERANCE`.
pub(crate) fn bounds_equal(left: f64, right: f64) -> bool {
    left == right || (left - right).abs() <= BOUND_TOLERANCE
}
