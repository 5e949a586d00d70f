//! # Solving linear programs
//!
//! A solver backend holds a linear program, translates it into its native structures and solves
//! it. This module describes what every backend offers; the backends themselves live in
//! `backend::my_backend`.
use crate::data::linear_program::LinearProgramHandle;
use crate::data::linear_program::solution::Solution;
use crate::error::SolverError;
use crate::solver::parameter::{Parameter, ParameterKind, ParameterValue};
use crate::solver::status::Status;

pub mod parameter;
pub mod raw;
pub mod status;

/// Lifecycle of a backend.
///
/// Starts `Unconfigured` while no problem data is available. Every change to the problem or the
/// parameters moves it back to `Configured` or `Synchronized`, after which no solution is
/// available until the next solve.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SolverState {
    /// No problem data yet.
    Unconfigured,
    /// The native structures don't reflect the held program.
    Configured,
    /// The native structures reflect the held program.
    Synchronized,
    /// A solve completed and produced a status.
    Solved,
    /// The backend failed; the problem has to be synchronized again.
    Failed,
}

impl SolverState {
    /// State after a parameter was set.
    #[must_use]
    pub fn after_configuration(self) -> Self {
        match self {
            SolverState::Unconfigured | SolverState::Configured | SolverState::Failed => SolverState::Configured,
            SolverState::Synchronized | SolverState::Solved => SolverState::Synchronized,
        }
    }

    /// State after the held program may have changed.
    #[must_use]
    pub fn after_program_change(self) -> Self {
        SolverState::Configured
    }

    /// Whether a solve can start without synchronizing first.
    #[must_use]
    pub fn is_synchronized(self) -> bool {
        matches!(self, SolverState::Synchronized | SolverState::Solved)
    }
}

/// A solver backend.
///
/// # Lifecycle
///
/// Parameters can be set at any time. The program is pushed to the native structures by
/// `update_program`, and solved by `solve_primal` or `solve_dual`; a solve of a program that was
/// changed since the last synchronization synchronizes first. A solution can be read only when the
/// last solve ended optimally or suboptimally.
pub trait LinearProgramSolver {
    /// Type of the held program.
    type Program: LinearProgramHandle;

    /// Name of the backend.
    fn backend(&self) -> &'static str;

    /// The held program.
    fn linear_program(&self) -> &Self::Program;
    /// The held program, for changes.
    ///
    /// The program is considered changed: the current solution becomes unavailable and the next
    /// solve synchronizes first.
    fn linear_program_mut(&mut self) -> &mut Self::Program;

    /// Whether the backend accepts values of this kind for the parameter.
    fn parameter_supported(&self, parameter: Parameter, kind: ParameterKind) -> bool;
    /// Set an integer parameter.
    ///
    /// # Errors
    ///
    /// `UnsupportedParameter` if the backend has no integer mapping for it, `InvalidParameterValue`
    /// if the value has no meaning.
    fn set_int_parameter(&mut self, parameter: Parameter, value: i32) -> Result<(), SolverError>;
    /// Set a real parameter.
    ///
    /// # Errors
    ///
    /// `UnsupportedParameter` if the backend has no real mapping for it, `InvalidParameterValue`
    /// if the value has no meaning.
    fn set_real_parameter(&mut self, parameter: Parameter, value: f64) -> Result<(), SolverError>;
    /// Set a parameter of either kind.
    ///
    /// # Errors
    ///
    /// See `set_int_parameter` and `set_real_parameter`.
    fn set_parameter(&mut self, parameter: Parameter, value: ParameterValue) -> Result<(), SolverError> {
        match value {
            ParameterValue::Integer(value) => self.set_int_parameter(parameter, value),
            ParameterValue::Real(value) => self.set_real_parameter(parameter, value),
        }
    }

    /// Push the held program into the native structures.
    ///
    /// Calling this repeatedly without changes in between has no further effect.
    ///
    /// # Errors
    ///
    /// `NotInitialized` if the program has no objective yet, or any error of the backend when it
    /// can't represent the program.
    fn update_program(&mut self) -> Result<(), SolverError>;

    /// Solve with a primal algorithm.
    ///
    /// # Return value
    ///
    /// The outcome; a status other than `Optimal` is not an error.
    ///
    /// # Errors
    ///
    /// When synchronization fails or the native engine reports a failure.
    fn solve_primal(&mut self) -> Result<Status, SolverError>;
    /// Solve with a dual algorithm.
    ///
    /// # Errors
    ///
    /// See `solve_primal`.
    fn solve_dual(&mut self) -> Result<Status, SolverError>;
    /// Synchronize and solve with the default algorithm.
    ///
    /// # Errors
    ///
    /// See `update_program` and `solve_primal`.
    fn solve(&mut self) -> Result<Status, SolverError> {
        self.update_program()?;
        self.solve_primal()
    }

    /// Status of the last solve, `NoInformation` before the first one.
    fn solution_status(&self) -> Status;
    /// Current lifecycle state.
    fn state(&self) -> SolverState;
    /// Solution of the last solve.
    ///
    /// # Errors
    ///
    /// `ModelNotSolved` unless the last solve ended with `Optimal` or `SuboptimalSolution` and
    /// nothing changed since.
    fn get_solution(&self) -> Result<&Solution, SolverError>;
}
