//! # Sparse entries
//!
//! A row or a column of a constraint matrix, stored as the values of its nonzero elements together
//! with their indices. Indices are unique within an entry but not necessarily sorted; entries are
//! typically small and read far more often than written.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::ops::{Deref, DerefMut};

use itertools::Itertools;
use num_traits::Zero;

use crate::error::InvalidInput;

/// Direction in which entries are laid out in a matrix.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Orientation {
    Row,
    Column,
}

impl Display for Orientation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::Row => "row",
            Orientation::Column => "column",
        })
    }
}

/// Compressed sparse vector.
///
/// The `k`-th value belongs to the `k`-th index. No index appears twice.
#[derive(Clone, Debug)]
pub struct MatrixEntry<F> {
    values: Vec<F>,
    nonzero_indices: Vec<usize>,
}

impl<F> MatrixEntry<F> {
    /// Create a new entry.
    ///
    /// # Arguments
    ///
    /// * `values`: Values of the nonzero elements.
    /// * `nonzero_indices`: Index of each of those values, all distinct.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the two sequences differ in length, `InvalidEntry` if an index
    /// appears more than once.
    pub fn new(values: Vec<F>, nonzero_indices: Vec<usize>) -> Result<Self, InvalidInput> {
        if values.len() != nonzero_indices.len() {
            return Err(InvalidInput::DimensionMismatch {
                expected: values.len(),
                actual: nonzero_indices.len(),
            });
        }
        if let Some(&index) = nonzero_indices.iter().duplicates().next() {
            return Err(InvalidInput::InvalidEntry { index });
        }

        Ok(Self { values, nonzero_indices })
    }

    /// Create a new entry without checking the indices.
    ///
    /// Only for data that was validated before, such as a segment of validated compressed data.
    pub(crate) fn new_unchecked(values: Vec<F>, nonzero_indices: Vec<usize>) -> Self {
        debug_assert_eq!(values.len(), nonzero_indices.len());
        debug_assert!(nonzero_indices.iter().all_unique());

        Self { values, nonzero_indices }
    }

    /// Entry without any nonzero values.
    #[must_use]
    pub fn empty() -> Self {
        Self { values: Vec::new(), nonzero_indices: Vec::new() }
    }

    /// Number of stored values.
    #[must_use]
    pub fn num_nonzero(&self) -> usize {
        self.values.len()
    }

    /// Whether no values are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Values can be changed in place, their indices can't.
    pub fn values_mut(&mut self) -> &mut [F] {
        &mut self.values
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn nonzero_indices(&self) -> &[usize] {
        &self.nonzero_indices
    }

    /// Iterate over the (index, value) pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &F)> {
        self.nonzero_indices.iter().copied().zip(&self.values)
    }

    /// Value stored at an index, if any.
    ///
    /// Scans the indices, this is not a constant time operation.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&F> {
        self.nonzero_indices.iter()
            .position(|&i| i == index)
            .map(|k| &self.values[k])
    }

    /// Add a value at an index that is not yet present.
    ///
    /// # Errors
    ///
    /// `InvalidEntry` if the index already has a value.
    pub fn push(&mut self, index: usize, value: F) -> Result<(), InvalidInput> {
        if self.nonzero_indices.contains(&index) {
            return Err(InvalidInput::InvalidEntry { index });
        }

        self.push_unchecked(index, value);
        Ok(())
    }

    pub(crate) fn push_unchecked(&mut self, index: usize, value: F) {
        debug_assert!(!self.nonzero_indices.contains(&index));

        self.nonzero_indices.push(index);
        self.values.push(value);
    }

    /// Drop the value at `index`, if any, and shift all larger indices down by one.
    pub(crate) fn remove_index(&mut self, index: usize) {
        if let Some(k) = self.nonzero_indices.iter().position(|&i| i == index) {
            self.nonzero_indices.swap_remove(k);
            self.values.swap_remove(k);
        }
        for i in &mut self.nonzero_indices {
            if *i > index {
                *i -= 1;
            }
        }
    }

    /// Take the entry apart into its values and indices.
    #[must_use]
    pub fn into_parts(self) -> (Vec<F>, Vec<usize>) {
        (self.values, self.nonzero_indices)
    }

    fn sorted_pairs(&self) -> impl Iterator<Item = (usize, &F)> {
        self.iter().sorted_unstable_by_key(|&(index, _)| index)
    }
}

impl<F: Zero + Clone> MatrixEntry<F> {
    /// Value at an index, zero if it is not stored.
    ///
    /// Never fails. Scans the indices, this is not a constant time operation.
    #[must_use]
    pub fn at(&self, index: usize) -> F {
        self.get(index).cloned().unwrap_or_else(F::zero)
    }
}

impl<F: PartialOrd + Clone> MatrixEntry<F> {
    /// Smallest stored value, if any value is stored.
    #[must_use]
    pub fn lower_bound(&self) -> Option<F> {
        self.values.iter()
            .min_by(|left, right| left.partial_cmp(right).unwrap_or(std::cmp::Ordering::Equal))
            .cloned()
    }

    /// Largest stored value, if any value is stored.
    #[must_use]
    pub fn upper_bound(&self) -> Option<F> {
        self.values.iter()
            .max_by(|left, right| left.partial_cmp(right).unwrap_or(std::cmp::Ordering::Equal))
            .cloned()
    }
}

impl<F> Default for MatrixEntry<F> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Entries are equal when they hold the same (index, value) pairs, in any order.
impl<F: PartialEq> PartialEq for MatrixEntry<F> {
    fn eq(&self, other: &Self) -> bool {
        self.num_nonzero() == other.num_nonzero()
            && self.sorted_pairs().eq(other.sorted_pairs())
    }
}

impl<F: Display> Display for MatrixEntry<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (k, (index, value)) in self.iter().enumerate() {
            if k > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({} {})", index, value)?;
        }
        write!(f, "]")
    }
}

/// An entry that knows its own orientation.
///
/// Containers check this orientation against their own.
pub trait Oriented<F>: Deref<Target = MatrixEntry<F>> {
    /// Direction in which this entry lies.
    const ORIENTATION: Orientation;

    /// Forget the orientation.
    fn into_entry(self) -> MatrixEntry<F>;
}

macro_rules! oriented_entry {
    ($name:ident, $orientation:expr, $description:literal) => {
        #[doc = $description]
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name<F>(MatrixEntry<F>);

        impl<F> $name<F> {
            /// Create a new entry, see `MatrixEntry::new`.
            ///
            /// # Errors
            ///
            /// When the indices are repeated or the lengths don't match.
            pub fn new(values: Vec<F>, nonzero_indices: Vec<usize>) -> Result<Self, InvalidInput> {
                MatrixEntry::new(values, nonzero_indices).map(Self)
            }
        }

        impl<F> From<MatrixEntry<F>> for $name<F> {
            fn from(entry: MatrixEntry<F>) -> Self {
                Self(entry)
            }
        }

        impl<F> Deref for $name<F> {
            type Target = MatrixEntry<F>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl<F> DerefMut for $name<F> {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl<F> Oriented<F> for $name<F> {
            const ORIENTATION: Orientation = $orientation;

            fn into_entry(self) -> MatrixEntry<F> {
                self.0
            }
        }

        impl<F: Display> Display for $name<F> {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    }
}

oriented_entry!(Row, Orientation::Row, "A row of a constraint matrix, indexed by column.");
oriented_entry!(Column, Orientation::Column, "A column of a constraint matrix, indexed by row.");
