//! # Sparse matrices
//!
//! A matrix is a list of sparse entries that all lie in the same direction. Which direction is
//! decided once, when the matrix is created.
use std::fmt;
use std::fmt::{Display, Formatter};

use num_traits::Zero;

use crate::data::linear_algebra::entry::{Column, MatrixEntry, Oriented, Orientation, Row};
use crate::error::InvalidInput;

/// Matrix stored as a list of rows or as a list of columns.
#[derive(Clone, Debug, PartialEq)]
pub struct SparseMatrix<F> {
    orientation: Orientation,
    entries: Vec<MatrixEntry<F>>,
}

impl<F> SparseMatrix<F> {
    /// Create an empty matrix.
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self { orientation, entries: Vec::new() }
    }

    /// Create a row major matrix.
    #[must_use]
    pub fn from_rows(rows: Vec<Row<F>>) -> Self {
        Self {
            orientation: Orientation::Row,
            entries: rows.into_iter().map(Oriented::into_entry).collect(),
        }
    }

    /// Create a column major matrix.
    #[must_use]
    pub fn from_columns(columns: Vec<Column<F>>) -> Self {
        Self {
            orientation: Orientation::Column,
            entries: columns.into_iter().map(Oriented::into_entry).collect(),
        }
    }

    /// Append entries.
    ///
    /// # Errors
    ///
    /// `WrongOrientation` if the entries don't lie in the direction of this matrix. In that case,
    /// nothing is added.
    pub fn add<E: Oriented<F>>(&mut self, entries: Vec<E>) -> Result<(), InvalidInput> {
        if E::ORIENTATION != self.orientation {
            return Err(InvalidInput::WrongOrientation {
                expected: self.orientation,
                actual: E::ORIENTATION,
            });
        }

        self.entries.extend(entries.into_iter().map(Oriented::into_entry));
        Ok(())
    }

    /// Append rows, only allowed for a row major matrix.
    ///
    /// # Errors
    ///
    /// `WrongOrientation` if this matrix is column major.
    pub fn add_rows(&mut self, rows: Vec<Row<F>>) -> Result<(), InvalidInput> {
        self.add(rows)
    }

    /// Append columns, only allowed for a column major matrix.
    ///
    /// # Errors
    ///
    /// `WrongOrientation` if this matrix is row major.
    pub fn add_columns(&mut self, columns: Vec<Column<F>>) -> Result<(), InvalidInput> {
        self.add(columns)
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// All entries in the direction of the matrix.
    #[must_use]
    pub fn entries(&self) -> &[MatrixEntry<F>] {
        &self.entries
    }

    /// Number of rows for a row major matrix, number of columns otherwise.
    #[must_use]
    pub fn num_entries(&self) -> usize {
        self.entries.len()
    }

    /// Total number of stored values.
    #[must_use]
    pub fn num_nonzero(&self) -> usize {
        self.entries.iter().map(MatrixEntry::num_nonzero).sum()
    }
}

impl<F: Zero + Clone> SparseMatrix<F> {
    /// Build from a dense matrix, dropping the zero values.
    ///
    /// For column orientation, the columns of `dense` become the entries.
    #[must_use]
    pub fn from_dense(dense: &[Vec<F>], orientation: Orientation) -> Self {
        let entries = match orientation {
            Orientation::Row => dense.iter()
                .map(|row| Self::compress(row.iter().cloned()))
                .collect(),
            Orientation::Column => {
                let nr_columns = dense.iter().map(Vec::len).max().unwrap_or(0);
                (0..nr_columns)
                    .map(|j| Self::compress(dense.iter().filter_map(|row| row.get(j).cloned())))
                    .collect()
            },
        };

        Self { orientation, entries }
    }

    fn compress(values: impl Iterator<Item = F>) -> MatrixEntry<F> {
        let (indices, values) = values
            .enumerate()
            .filter(|(_, value)| !value.is_zero())
            .unzip();
        MatrixEntry::new_unchecked(values, indices)
    }

    /// Element in row `i` and column `j`, zero if it is not stored.
    ///
    /// # Panics
    ///
    /// If the matrix has no entry for the major index (`i` for a row major matrix, `j` otherwise).
    #[must_use]
    pub fn at(&self, i: usize, j: usize) -> F {
        match self.orientation {
            Orientation::Row => self.entries[i].at(j),
            Orientation::Column => self.entries[j].at(i),
        }
    }
}

impl<F: Display> Display for SparseMatrix<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} major:", self.orientation)?;
        for (i, entry) in self.entries.iter().enumerate() {
            writeln!(f, "{}: {}", i, entry)?;
        }
        Ok(())
    }
}
