//! # Representation of solutions
//!
//! A solver backend produces a solution when a solve ended (sub)optimally. Solutions are owned by
//! the backend that produced them, and become unavailable once the problem changes.
use std::fmt;
use std::fmt::{Display, Formatter};

/// Values found by a solver backend.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Solution {
    /// Value of each variable, in order.
    pub primal: Vec<f64>,
    /// Value of the dual variable of each constraint, in order.
    ///
    /// Empty when the backend doesn't report duals.
    pub dual: Vec<f64>,
    /// Value of the objective function in the primal solution.
    pub objective_value: f64,
}

impl Solution {
    #[must_use]
    #[allow(missing_docs)]
    pub fn new(primal: Vec<f64>, dual: Vec<f64>, objective_value: f64) -> Self {
        Self { primal, dual, objective_value }
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Objective value: {}", self.objective_value)?;
        writeln!(f, "Primal: {:?}", self.primal)?;
        write!(f, "Dual: {:?}", self.dual)
    }
}
