//! # Representing linear programs
//!
//! A linear program is held independent of any solver backend: constraints in range form, an
//! objective with variable types and bounds on each variable. Backends read it through the
//! `LinearProgramHandle` trait when they synchronize.
use std::sync::Arc;

use crate::data::linear_program::elements::{Constraint, Objective, OptimizationType, Variable};
use crate::error::InvalidInput;

pub mod elements;
pub mod general_form;
pub mod solution;

/// Access to a linear program that is being built.
///
/// Row indices of constraints are not checked against the number of variables when constraints
/// are added; a backend reports out of range indices when it synchronizes.
pub trait LinearProgramHandle {
    /// Direction of optimization.
    fn optimization_type(&self) -> OptimizationType;
    #[allow(missing_docs)]
    fn set_objective_sense(&mut self, sense: OptimizationType);

    /// Number of variables, equal to the length of the objective.
    fn num_vars(&self) -> usize {
        self.variables().len()
    }
    /// Bounds of all variables.
    fn variables(&self) -> &[Variable];
    /// Bounds can be changed in place, the number of variables can't.
    fn variables_mut(&mut self) -> &mut [Variable];
    /// Bounds of variable `j`.
    ///
    /// # Panics
    ///
    /// If there is no such variable.
    fn variable(&self, j: usize) -> &Variable {
        &self.variables()[j]
    }
    /// Append variables with a zero objective coefficient of real type.
    fn add_variables(&mut self, variables: Vec<Variable>);
    /// Remove a variable, its objective coefficient and its column.
    ///
    /// Indices of later variables shift down by one, also in the rows of all constraints.
    ///
    /// # Panics
    ///
    /// If there is no such variable.
    fn remove_variable(&mut self, j: usize);

    #[allow(missing_docs)]
    fn num_constraints(&self) -> usize {
        self.constraints().len()
    }
    #[allow(missing_docs)]
    fn constraints(&self) -> &[Constraint];
    #[allow(missing_docs)]
    fn constraints_mut(&mut self) -> &mut Vec<Constraint>;
    /// Constraint `i`.
    ///
    /// # Panics
    ///
    /// If there is no such constraint.
    fn constraint(&self, i: usize) -> &Constraint {
        &self.constraints()[i]
    }
    /// Append constraints.
    fn add_constraints(&mut self, constraints: Vec<Constraint>) {
        self.constraints_mut().extend(constraints);
    }
    /// Remove constraint `i`, later constraints shift down by one.
    ///
    /// # Panics
    ///
    /// If there is no such constraint.
    fn remove_constraint(&mut self, i: usize) -> Constraint {
        self.constraints_mut().remove(i)
    }

    #[allow(missing_docs)]
    fn objective(&self) -> &Objective;
    /// Coefficients and types can be changed in place, the number of variables can't.
    fn objective_mut(&mut self) -> &mut Objective;
    /// Replace the objective.
    ///
    /// Variables are added with default bounds when the objective is longer than the current
    /// number of variables. After this call, the program is initialized.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if the objective is shorter than the current number of variables.
    fn set_objective(&mut self, objective: Objective) -> Result<(), InvalidInput>;

    /// Whether an objective was set, such that the program can be handed to a backend.
    fn is_initialized(&self) -> bool;
}

/// A program shared between the caller and a backend.
///
/// Mutation clones the program first if it is shared, so no side sees changes made by the other.
impl<H: LinearProgramHandle + Clone> LinearProgramHandle for Arc<H> {
    fn optimization_type(&self) -> OptimizationType {
        (**self).optimization_type()
    }
    fn set_objective_sense(&mut self, sense: OptimizationType) {
        Arc::make_mut(self).set_objective_sense(sense);
    }
    fn variables(&self) -> &[Variable] {
        (**self).variables()
    }
    fn variables_mut(&mut self) -> &mut [Variable] {
        Arc::make_mut(self).variables_mut()
    }
    fn add_variables(&mut self, variables: Vec<Variable>) {
        Arc::make_mut(self).add_variables(variables);
    }
    fn remove_variable(&mut self, j: usize) {
        Arc::make_mut(self).remove_variable(j);
    }
    fn constraints(&self) -> &[Constraint] {
        (**self).constraints()
    }
    fn constraints_mut(&mut self) -> &mut Vec<Constraint> {
        Arc::make_mut(self).constraints_mut()
    }
    fn objective(&self) -> &Objective {
        (**self).objective()
    }
    fn objective_mut(&mut self) -> &mut Objective {
        Arc::make_mut(self).objective_mut()
    }
    fn set_objective(&mut self, objective: Objective) -> Result<(), InvalidInput> {
        Arc::make_mut(self).set_objective(objective)
    }
    fn is_initialized(&self) -> bool {
        (**self).is_initialized()
    }
}
