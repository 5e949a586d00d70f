//! # Outcomes of a solve
//!
//! Each backend reports its outcome as a native integer code. These codes are translated into one
//! vocabulary through a fixed table per backend.
use std::fmt;
use std::fmt::{Display, Formatter};

use enum_map::Enum;

use crate::error::SolverError;

/// Outcome of the last solve.
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Status {
    /// A provably optimal solution was found.
    Optimal,
    /// No solution satisfies all constraints.
    Infeasible,
    /// The backend could not tell which of the two is the case.
    InfeasibleOrUnbounded,
    /// The objective can be improved without limit.
    Unbounded,
    /// The optimal value is worse than the cutoff parameter.
    Cutoff,
    #[allow(missing_docs)]
    IterationLimit,
    /// The limit on the number of branch and bound nodes was reached.
    NodeLimit,
    /// The time limit was reached.
    TimeOut,
    /// The limit on the number of solutions found was reached.
    SolutionLimit,
    /// The solve was interrupted, by the user or by the backend.
    Interrupted,
    /// Numerical difficulties stopped the solve.
    NumericFailure,
    /// A solution was found, but it is not provably optimal within tolerances.
    SuboptimalSolution,
    /// A solve is still running.
    InProgress,
    /// A solution reached the objective limit set by the user.
    UserObjectiveLimit,
    /// Nothing is known, typically because no solve happened yet.
    NoInformation,
}

impl Status {
    /// Whether the solve that ended with this status produced a solution that can be read.
    #[must_use]
    pub fn has_solution(self) -> bool {
        matches!(self, Status::Optimal | Status::SuboptimalSolution)
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Optimal => "optimal",
            Status::Infeasible => "infeasible",
            Status::InfeasibleOrUnbounded => "infeasible or unbounded",
            Status::Unbounded => "unbounded",
            Status::Cutoff => "cutoff",
            Status::IterationLimit => "iteration limit reached",
            Status::NodeLimit => "node limit reached",
            Status::TimeOut => "time limit reached",
            Status::SolutionLimit => "solution limit reached",
            Status::Interrupted => "interrupted",
            Status::NumericFailure => "numeric failure",
            Status::SuboptimalSolution => "suboptimal solution",
            Status::InProgress => "in progress",
            Status::UserObjectiveLimit => "user objective limit reached",
            Status::NoInformation => "no information",
        })
    }
}

/// What a native code means.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StatusTranslation {
    /// The solve ended normally with this status.
    Status(Status),
    /// The backend failed; the message describes the native code.
    Failure(&'static str),
}

/// Translation of all native codes of one backend.
#[derive(Debug)]
pub struct StatusTable {
    backend: &'static str,
    entries: &'static [(i32, StatusTranslation)],
}

impl StatusTable {
    /// Create a table, to be stored in a `static`.
    ///
    /// # Arguments
    ///
    /// * `backend`: Name of the backend, for error messages.
    /// * `entries`: Each native code that the backend can report, exactly once.
    #[must_use]
    pub const fn new(backend: &'static str, entries: &'static [(i32, StatusTranslation)]) -> Self {
        Self { backend, entries }
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn backend(&self) -> &'static str {
        self.backend
    }

    /// All native codes in the table.
    pub fn codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.entries.iter().map(|&(code, _)| code)
    }

    /// Look up a native code.
    #[must_use]
    pub fn get(&self, code: i32) -> Option<StatusTranslation> {
        self.entries.iter()
            .find(|&&(native, _)| native == code)
            .map(|&(_, translation)| translation)
    }

    /// Translate a native code.
    ///
    /// # Errors
    ///
    /// `Backend` with the native code if the code indicates a failure of the backend.
    ///
    /// # Panics
    ///
    /// If the code is not in the table. Backends document all of their codes, so an unknown code
    /// means the table is incomplete.
    pub fn translate(&self, code: i32) -> Result<Status, SolverError> {
        self.translate_with(code, |message| message.to_string())
    }

    /// Translate a native code, replacing the message of a failure.
    ///
    /// Backends use this when the engine provides a more specific message than the table.
    ///
    /// # Errors
    ///
    /// See `translate`.
    ///
    /// # Panics
    ///
    /// See `translate`.
    pub fn translate_with(
        &self,
        code: i32,
        message: impl FnOnce(&'static str) -> String,
    ) -> Result<Status, SolverError> {
        match self.get(code) {
            Some(StatusTranslation::Status(status)) => Ok(status),
            Some(StatusTranslation::Failure(description)) => Err(SolverError::Backend {
                backend: self.backend,
                code,
                message: message(description),
            }),
            None => panic!("{} reported native status code {}, which has no translation", self.backend, code),
        }
    }
}
