//! # Building blocks to describe linear programs.
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::data::linear_algebra::entry::Row;
use crate::data::linear_algebra::{bounds_equal, INFINITY};
use crate::error::InvalidInput;

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum OptimizationType {
    Maximize,
    #[default]
    Minimize,
}

impl Display for OptimizationType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OptimizationType::Maximize => "maximize",
            OptimizationType::Minimize => "minimize",
        })
    }
}

/// Domain of a variable.
///
/// The semi variants take either the value zero or a value within their bounds.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum VariableType {
    Binary,
    Integer,
    #[default]
    Real,
    SemiReal,
    SemiInteger,
}

impl VariableType {
    /// Whether the variable may only take integer values.
    #[must_use]
    pub fn is_integer(self) -> bool {
        matches!(self, VariableType::Binary | VariableType::Integer | VariableType::SemiInteger)
    }
}

/// Bounds on the value of a single variable.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Variable {
    lower_bound: f64,
    upper_bound: f64,
}

impl Variable {
    /// Create a variable with bounds `lower_bound <= x <= upper_bound`.
    ///
    /// Either bound may be infinite.
    ///
    /// # Errors
    ///
    /// `InvalidVariableBounds` if the lower bound exceeds the upper bound, or either is NaN.
    pub fn new(lower_bound: f64, upper_bound: f64) -> Result<Self, InvalidInput> {
        if lower_bound <= upper_bound {
            Ok(Self { lower_bound, upper_bound })
        } else {
            Err(InvalidInput::InvalidVariableBounds { lower: lower_bound, upper: upper_bound })
        }
    }

    /// Variable without any bounds.
    #[must_use]
    pub fn free() -> Self {
        Self { lower_bound: -INFINITY, upper_bound: INFINITY }
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn lower_bound(&self) -> f64 {
        self.lower_bound
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn upper_bound(&self) -> f64 {
        self.upper_bound
    }
}

/// Nonnegative without an upper bound.
impl Default for Variable {
    fn default() -> Self {
        Self { lower_bound: 0.0, upper_bound: INFINITY }
    }
}

/// A row with a range, `lower_bound <= row * x <= upper_bound`.
///
/// Inequalities have one infinite bound, equalities have two equal bounds.
#[derive(Clone, Debug)]
pub struct Constraint {
    /// Coefficients of the row, indexed by variable.
    pub row: Row<f64>,
    #[allow(missing_docs)]
    pub lower_bound: f64,
    #[allow(missing_docs)]
    pub upper_bound: f64,
}

impl Constraint {
    #[must_use]
    #[allow(missing_docs)]
    pub fn new(row: Row<f64>, lower_bound: f64, upper_bound: f64) -> Self {
        Self { row, lower_bound, upper_bound }
    }

    /// `row * x <= upper_bound`.
    #[must_use]
    pub fn less(row: Row<f64>, upper_bound: f64) -> Self {
        Self::new(row, -INFINITY, upper_bound)
    }

    /// `row * x >= lower_bound`.
    #[must_use]
    pub fn greater(row: Row<f64>, lower_bound: f64) -> Self {
        Self::new(row, lower_bound, INFINITY)
    }

    /// `row * x == value`.
    #[must_use]
    pub fn equal(row: Row<f64>, value: f64) -> Self {
        Self::new(row, value, value)
    }
}

/// Bounds are compared with a small tolerance, rows exactly.
impl PartialEq for Constraint {
    fn eq(&self, other: &Self) -> bool {
        bounds_equal(self.lower_bound, other.lower_bound)
            && bounds_equal(self.upper_bound, other.upper_bound)
            && self.row == other.row
    }
}

impl Display for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} <= {} <= {}", self.lower_bound, self.row, self.upper_bound)
    }
}

/// Objective function coefficients, and the type of the variable of each coefficient.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Objective {
    values: Vec<f64>,
    variable_types: Vec<VariableType>,
}

impl Objective {
    /// Objective over real variables.
    #[must_use]
    pub fn new(values: Vec<f64>) -> Self {
        let variable_types = vec![VariableType::Real; values.len()];
        Self { values, variable_types }
    }

    /// Objective with explicit variable types.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if there isn't exactly one type per coefficient.
    pub fn with_types(
        values: Vec<f64>,
        variable_types: Vec<VariableType>,
    ) -> Result<Self, InvalidInput> {
        if values.len() == variable_types.len() {
            Ok(Self { values, variable_types })
        } else {
            Err(InvalidInput::DimensionMismatch {
                expected: values.len(),
                actual: variable_types.len(),
            })
        }
    }

    /// Number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[allow(missing_docs)]
    pub fn values_mut(&mut self) -> &mut [f64] {
        &mut self.values
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn variable_types(&self) -> &[VariableType] {
        &self.variable_types
    }

    #[allow(missing_docs)]
    pub fn variable_types_mut(&mut self) -> &mut [VariableType] {
        &mut self.variable_types
    }

    pub(crate) fn push(&mut self, value: f64, variable_type: VariableType) {
        self.values.push(value);
        self.variable_types.push(variable_type);
    }

    pub(crate) fn remove(&mut self, j: usize) {
        self.values.remove(j);
        self.variable_types.remove(j);
    }
}

impl Display for Objective {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (j, (value, variable_type)) in self.values.iter().zip(&self.variable_types).enumerate() {
            if j > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} {:?}", value, variable_type)?;
        }
        write!(f, "]")
    }
}
