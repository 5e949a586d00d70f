//! # Linear programs in "general form"
//!
//! Data structure for manipulation of linear programs before they are handed to a backend. All
//! constraints are ranges and all variables have bounds, which covers any mix of equalities and
//! inequalities.
use std::fmt::{Display, Formatter};
use std::fmt;

use index_utils::remove_indices;
use itertools::Itertools;

use crate::data::linear_algebra::matrix::SparseMatrix;
use crate::data::linear_program::elements::{Constraint, Objective, OptimizationType, Variable, VariableType};
use crate::data::linear_program::LinearProgramHandle;
use crate::error::InvalidInput;

/// A linear program held in memory.
///
/// There is one variable per objective coefficient. Constraint rows index into the variables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeneralForm {
    optimization_type: OptimizationType,
    constraints: Vec<Constraint>,
    objective: Objective,
    variables: Vec<Variable>,
    initialized: bool,
}

impl GeneralForm {
    /// Empty program; it is not initialized until an objective is set.
    #[must_use]
    pub fn new(optimization_type: OptimizationType) -> Self {
        Self {
            optimization_type,
            ..Self::default()
        }
    }

    /// Program with constraints, but without an objective yet.
    #[must_use]
    pub fn with_constraints(optimization_type: OptimizationType, constraints: Vec<Constraint>) -> Self {
        Self {
            optimization_type,
            constraints,
            ..Self::default()
        }
    }

    /// Complete program, all variables having default bounds.
    #[must_use]
    pub fn with_objective(
        optimization_type: OptimizationType,
        constraints: Vec<Constraint>,
        objective: Objective,
    ) -> Self {
        Self {
            optimization_type,
            constraints,
            variables: vec![Variable::default(); objective.len()],
            objective,
            initialized: true,
        }
    }

    /// Remove several constraints at once.
    ///
    /// # Arguments
    ///
    /// * `indices`: Constraints to remove, in any order. Repeated indices are removed once.
    ///
    /// # Panics
    ///
    /// If an index is out of range.
    pub fn remove_constraints(&mut self, indices: &[usize]) {
        let indices = indices.iter().copied().sorted_unstable().dedup().collect::<Vec<_>>();
        assert!(indices.last().is_none_or(|&last| last < self.constraints.len()));

        remove_indices(&mut self.constraints, &indices);
    }

    /// The constraint rows as a row major matrix.
    #[must_use]
    pub fn to_matrix(&self) -> SparseMatrix<f64> {
        SparseMatrix::from_rows(self.constraints.iter().map(|constraint| constraint.row.clone()).collect())
    }

    /// Whether the objective and the variables describe the same number of variables.
    fn is_consistent(&self) -> bool {
        self.objective.len() == self.variables.len()
    }
}

impl LinearProgramHandle for GeneralForm {
    fn optimization_type(&self) -> OptimizationType {
        self.optimization_type
    }

    fn set_objective_sense(&mut self, sense: OptimizationType) {
        self.optimization_type = sense;
    }

    fn variables(&self) -> &[Variable] {
        &self.variables
    }

    fn variables_mut(&mut self) -> &mut [Variable] {
        &mut self.variables
    }

    fn add_variables(&mut self, variables: Vec<Variable>) {
        for _ in 0..variables.len() {
            self.objective.push(0.0, VariableType::Real);
        }
        self.variables.extend(variables);

        debug_assert!(self.is_consistent());
    }

    fn remove_variable(&mut self, j: usize) {
        self.variables.remove(j);
        self.objective.remove(j);
        for constraint in &mut self.constraints {
            constraint.row.remove_index(j);
        }

        debug_assert!(self.is_consistent());
    }

    fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    fn constraints_mut(&mut self) -> &mut Vec<Constraint> {
        &mut self.constraints
    }

    fn objective(&self) -> &Objective {
        &self.objective
    }

    fn objective_mut(&mut self) -> &mut Objective {
        &mut self.objective
    }

    fn set_objective(&mut self, objective: Objective) -> Result<(), InvalidInput> {
        if objective.len() < self.variables.len() {
            return Err(InvalidInput::DimensionMismatch {
                expected: self.variables.len(),
                actual: objective.len(),
            });
        }

        self.variables.resize(objective.len(), Variable::default());
        self.objective = objective;
        self.initialized = true;

        debug_assert!(self.is_consistent());
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl Display for GeneralForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.optimization_type, self.objective)?;
        writeln!(f, "subject to")?;
        for constraint in &self.constraints {
            writeln!(f, "    {}", constraint)?;
        }
        writeln!(f, "with bounds")?;
        for (j, variable) in self.variables.iter().enumerate() {
            writeln!(f, "    {} <= x{} <= {}", variable.lower_bound(), j, variable.upper_bound())?;
        }
        Ok(())
    }
}
