//! # Bulk ingestion of raw data
//!
//! Large problems are cheaper to hand to a backend as compressed arrays than as individual
//! constraints. The arrays are validated per segment before the backend sees them.
use itertools::Itertools;

use crate::data::linear_algebra::entry::MatrixEntry;
use crate::data::linear_program::elements::VariableType;
use crate::error::{InvalidInput, SolverError};

/// Hand compressed row or column data directly to a backend.
///
/// # Compressed format
///
/// Segment `k` (a row for `add_rows`, a column for `add_columns`) consists of the values and
/// indices at positions `start_offsets[k]..start_offsets[k + 1]`. There is one more offset than
/// there are segments, the first is zero and the last equals the number of values.
pub trait FlushRawData {
    /// Append constraints.
    ///
    /// # Arguments
    ///
    /// * `values`: Nonzero coefficients of all rows, concatenated.
    /// * `row_start_offsets`: Start of each row in `values`, plus a trailing offset.
    /// * `col_indices`: Column of each value.
    /// * `lower_bounds`: Lower bound of each row.
    /// * `upper_bounds`: Upper bound of each row.
    ///
    /// # Errors
    ///
    /// When the data is malformed, see `CompressedEntries::new`, when the number of bounds
    /// doesn't match the number of rows, or when the backend can't accept it.
    fn add_rows(
        &mut self,
        values: Vec<f64>,
        row_start_offsets: Vec<usize>,
        col_indices: Vec<usize>,
        lower_bounds: Vec<f64>,
        upper_bounds: Vec<f64>,
    ) -> Result<(), SolverError>;

    /// Append variables by their columns.
    ///
    /// The new variables have a zero objective coefficient and real type.
    ///
    /// # Arguments
    ///
    /// * `values`: Nonzero coefficients of all columns, concatenated.
    /// * `col_start_offsets`: Start of each column in `values`, plus a trailing offset.
    /// * `row_indices`: Row of each value.
    /// * `lower_bounds`: Lower bound of each variable.
    /// * `upper_bounds`: Upper bound of each variable.
    ///
    /// # Errors
    ///
    /// See `add_rows`.
    fn add_columns(
        &mut self,
        values: Vec<f64>,
        col_start_offsets: Vec<usize>,
        row_indices: Vec<usize>,
        lower_bounds: Vec<f64>,
        upper_bounds: Vec<f64>,
    ) -> Result<(), SolverError>;

    /// Append variables by their objective coefficient.
    ///
    /// The new variables have default bounds.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if there isn't one type per coefficient, or when the backend can't
    /// represent one of the types.
    fn add_variables(
        &mut self,
        objective_values: Vec<f64>,
        variable_types: Vec<VariableType>,
    ) -> Result<(), SolverError>;
}

/// Validated compressed data.
#[derive(Clone, Debug, PartialEq)]
pub struct CompressedEntries<F> {
    values: Vec<F>,
    start_offsets: Vec<usize>,
    indices: Vec<usize>,
}

impl<F> CompressedEntries<F> {
    /// Validate compressed data.
    ///
    /// # Errors
    ///
    /// * `DimensionMismatch` if there isn't one index per value.
    /// * `InvalidOffsets` if the offsets don't start at zero, decrease somewhere or don't end at
    ///   the number of values.
    /// * `InvalidEntry` if an index appears twice within a segment.
    pub fn new(values: Vec<F>, start_offsets: Vec<usize>, indices: Vec<usize>) -> Result<Self, InvalidInput> {
        if values.len() != indices.len() {
            return Err(InvalidInput::DimensionMismatch { expected: values.len(), actual: indices.len() });
        }
        if start_offsets.first() != Some(&0) {
            return Err(InvalidInput::InvalidOffsets { position: 0 });
        }
        if let Some((position, _)) = start_offsets.iter()
            .tuple_windows()
            .find_position(|(start, end)| start > end) {
            return Err(InvalidInput::InvalidOffsets { position: position + 1 });
        }
        if start_offsets.last() != Some(&values.len()) {
            return Err(InvalidInput::InvalidOffsets { position: start_offsets.len() - 1 });
        }

        let compressed = Self { values, start_offsets, indices };
        for (_, segment_indices) in compressed.segments() {
            if let Some(&index) = segment_indices.iter().duplicates().next() {
                return Err(InvalidInput::InvalidEntry { index });
            }
        }

        Ok(compressed)
    }

    /// Number of rows or columns.
    #[must_use]
    pub fn nr_segments(&self) -> usize {
        self.start_offsets.len() - 1
    }

    /// Values and indices of segment `k`.
    ///
    /// # Panics
    ///
    /// If there is no such segment.
    #[must_use]
    pub fn segment(&self, k: usize) -> (&[F], &[usize]) {
        let range = self.start_offsets[k]..self.start_offsets[k + 1];
        (&self.values[range.clone()], &self.indices[range])
    }

    /// All segments, in order.
    pub fn segments(&self) -> impl Iterator<Item = (&[F], &[usize])> + '_ {
        (0..self.nr_segments()).map(move |k| self.segment(k))
    }

    /// Largest index in any segment.
    #[must_use]
    pub fn max_index(&self) -> Option<usize> {
        self.indices.iter().copied().max()
    }

    /// Check that there is one bound of each side per segment.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if either sequence has the wrong length.
    pub fn check_bounds<B>(&self, lower_bounds: &[B], upper_bounds: &[B]) -> Result<(), InvalidInput> {
        for bounds in [lower_bounds, upper_bounds] {
            if bounds.len() != self.nr_segments() {
                return Err(InvalidInput::DimensionMismatch {
                    expected: self.nr_segments(),
                    actual: bounds.len(),
                });
            }
        }

        Ok(())
    }
}

impl<F: Clone> CompressedEntries<F> {
    /// Split into one entry per segment.
    #[must_use]
    pub fn into_entries(self) -> Vec<MatrixEntry<F>> {
        self.segments()
            .map(|(values, indices)| MatrixEntry::new_unchecked(values.to_vec(), indices.to_vec()))
            .collect()
    }
}
