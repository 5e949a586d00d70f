//! # Error reporting
//!
//! Two levels of errors exist. An `InvalidInput` is created when a value object is constructed
//! from data that violates one of its invariants; it is reported immediately, at the point of
//! construction. A `SolverError` is created by a solver backend, and wraps the former where a
//! backend validates raw data itself.
use thiserror::Error;

use crate::data::linear_algebra::entry::Orientation;
use crate::data::linear_program::elements::VariableType;
use crate::solver::parameter::{Parameter, ParameterKind};

/// Data used to construct a value object violates one of its invariants.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInput {
    /// An index appears more than once in the same sparse entry.
    #[error("index {index} appears more than once in the same entry")]
    InvalidEntry {
        /// The first index that was found to be repeated.
        index: usize,
    },
    /// Two sequences that should be of equal length are not.
    #[error("mismatched dimensions: expected length {expected}, got {actual}")]
    DimensionMismatch {
        #[allow(missing_docs)]
        expected: usize,
        #[allow(missing_docs)]
        actual: usize,
    },
    /// Entries of one orientation were added to a matrix of the other orientation.
    #[error("can't add {actual} entries to a {expected} oriented matrix")]
    WrongOrientation {
        /// Orientation of the matrix.
        expected: Orientation,
        /// Orientation of the entries that were offered.
        actual: Orientation,
    },
    /// The lower bound of a variable exceeds its upper bound.
    #[error("invalid variable bounds: lower bound {lower} exceeds upper bound {upper}")]
    InvalidVariableBounds {
        #[allow(missing_docs)]
        lower: f64,
        #[allow(missing_docs)]
        upper: f64,
    },
    /// Segment start offsets of compressed data are not usable.
    ///
    /// They should start at zero, be nondecreasing and end at the number of values.
    #[error("invalid start offset at position {position}")]
    InvalidOffsets {
        /// Position in the offset sequence of the first offending offset.
        position: usize,
    },
}

/// A solver backend could not complete an operation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    /// The backend has no mapping for this parameter, or maps it for the other value kind.
    #[error("parameter {parameter:?} is not supported with a value of kind {kind}")]
    UnsupportedParameter {
        #[allow(missing_docs)]
        parameter: Parameter,
        /// Kind of the value that was offered.
        kind: ParameterKind,
    },
    /// The parameter is supported, but the value has no meaning for it.
    #[error("value {value} is not valid for parameter {parameter:?}")]
    InvalidParameterValue {
        #[allow(missing_docs)]
        parameter: Parameter,
        /// Formatted value that was offered.
        value: String,
    },
    /// The problem is not ready to be handed to the backend.
    #[error("linear program is not initialized, no objective has been set")]
    NotInitialized,
    /// No solution is available; either no solve happened or it did not produce a solution.
    #[error("model has not been solved to (sub)optimality")]
    ModelNotSolved,
    /// The backend can't represent variables of this type.
    #[error("variable type {0:?} is not supported by this backend")]
    UnsupportedVariableType(VariableType),
    /// A row or column index refers to something that doesn't exist.
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange {
        #[allow(missing_docs)]
        index: usize,
        #[allow(missing_docs)]
        len: usize,
    },
    /// A finite bound of a variable lies outside the range the backend can represent.
    #[error("bound {value} of variable {index} can't be represented by this backend")]
    UnrepresentableBound {
        /// Variable of the bound.
        index: usize,
        #[allow(missing_docs)]
        value: f64,
    },
    /// Raw data handed to the backend was malformed.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
    /// The native engine reported an error.
    ///
    /// The native code is preserved as it was reported.
    #[error("{backend} failed with code {code}: {message}")]
    Backend {
        /// Name of the backend.
        backend: &'static str,
        /// Native error or status code.
        code: i32,
        /// Message for the end user.
        message: String,
    },
}
