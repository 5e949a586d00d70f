//! # SoPlex
//!
//! Translation of SoPlex's native codes, as defined in `soplex.h` and `spxsolver.h`. SoPlex solves
//! continuous problems only.
use std::sync::OnceLock;

use enum_map::enum_map;

use crate::data::linear_program::elements::{OptimizationType, VariableType};
use crate::error::SolverError;
use crate::solver::parameter::{NativeKey, Parameter, ParameterKey, ParameterTable};
use crate::solver::status::{Status, StatusTable, StatusTranslation};

#[allow(missing_docs)]
pub const BACKEND: &str = "SoPlex";

/// Values of `SPxSolver::Status`.
#[allow(missing_docs)]
pub mod code {
    pub const ERROR: i32 = -15;
    pub const NO_RATIOTESTER: i32 = -14;
    pub const NO_PRICER: i32 = -13;
    pub const NO_SOLVER: i32 = -12;
    pub const NOT_INIT: i32 = -11;
    pub const ABORT_EXDECOMP: i32 = -10;
    pub const ABORT_DECOMP: i32 = -9;
    pub const ABORT_CYCLING: i32 = -8;
    pub const ABORT_TIME: i32 = -7;
    pub const ABORT_ITER: i32 = -6;
    pub const ABORT_VALUE: i32 = -5;
    pub const SINGULAR: i32 = -4;
    pub const NO_PROBLEM: i32 = -3;
    pub const REGULAR: i32 = -2;
    pub const RUNNING: i32 = -1;
    pub const UNKNOWN: i32 = 0;
    pub const OPTIMAL: i32 = 1;
    pub const UNBOUNDED: i32 = 2;
    pub const INFEASIBLE: i32 = 3;
    pub const INF_OR_UNBD: i32 = 4;
    pub const OPTIMAL_UNSCALED_VIOLATIONS: i32 = 5;
}

/// Translation of `SPxSolver::Status`.
pub static STATUS: StatusTable = StatusTable::new(BACKEND, &[
    (code::ERROR, StatusTranslation::Failure("unspecified error")),
    (code::NO_RATIOTESTER, StatusTranslation::Failure("no ratio tester loaded")),
    (code::NO_PRICER, StatusTranslation::Failure("no pricer loaded")),
    (code::NO_SOLVER, StatusTranslation::Failure("no linear solver loaded")),
    (code::NOT_INIT, StatusTranslation::Status(Status::NoInformation)),
    (code::ABORT_EXDECOMP, StatusTranslation::Status(Status::Interrupted)),
    (code::ABORT_DECOMP, StatusTranslation::Status(Status::Interrupted)),
    (code::ABORT_CYCLING, StatusTranslation::Status(Status::NumericFailure)),
    (code::ABORT_TIME, StatusTranslation::Status(Status::TimeOut)),
    (code::ABORT_ITER, StatusTranslation::Status(Status::IterationLimit)),
    (code::ABORT_VALUE, StatusTranslation::Status(Status::UserObjectiveLimit)),
    (code::SINGULAR, StatusTranslation::Status(Status::NumericFailure)),
    (code::NO_PROBLEM, StatusTranslation::Status(Status::NoInformation)),
    (code::REGULAR, StatusTranslation::Status(Status::NoInformation)),
    (code::RUNNING, StatusTranslation::Status(Status::InProgress)),
    (code::UNKNOWN, StatusTranslation::Status(Status::NoInformation)),
    (code::OPTIMAL, StatusTranslation::Status(Status::Optimal)),
    (code::UNBOUNDED, StatusTranslation::Status(Status::Unbounded)),
    (code::INFEASIBLE, StatusTranslation::Status(Status::Infeasible)),
    (code::INF_OR_UNBD, StatusTranslation::Status(Status::InfeasibleOrUnbounded)),
    (code::OPTIMAL_UNSCALED_VIOLATIONS, StatusTranslation::Status(Status::SuboptimalSolution)),
]);

/// Integer and real parameters, named as in `SoPlex::IntParam` and `SoPlex::RealParam`.
pub fn parameters() -> &'static ParameterTable {
    static TABLE: OnceLock<ParameterTable> = OnceLock::new();
    TABLE.get_or_init(|| ParameterTable::new(BACKEND, enum_map! {
        Parameter::ObjectiveSense => Some(ParameterKey::integer(NativeKey::Name("OBJSENSE"))),
        Parameter::PrimalOrDual => Some(ParameterKey::integer(NativeKey::Name("ALGORITHM"))),
        Parameter::IterationLimit => Some(ParameterKey::integer(NativeKey::Name("ITERLIMIT"))),
        Parameter::Verbosity => Some(ParameterKey::integer(NativeKey::Name("VERBOSITY"))),
        Parameter::Infinity => Some(ParameterKey::real(NativeKey::Name("INFTY"))),
        Parameter::TimeLimit => Some(ParameterKey::real(NativeKey::Name("TIMELIMIT"))),
        Parameter::ObjectiveLowerLimit => Some(ParameterKey::real(NativeKey::Name("OBJLIMIT_LOWER"))),
        Parameter::ObjectiveUpperLimit => Some(ParameterKey::real(NativeKey::Name("OBJLIMIT_UPPER"))),
        Parameter::ThreadCount | Parameter::Cutoff => None,
    }))
}

/// Value of the `OBJSENSE` parameter.
#[must_use]
pub fn sense(optimization_type: OptimizationType) -> i32 {
    match optimization_type {
        OptimizationType::Minimize => -1,
        OptimizationType::Maximize => 1,
    }
}

/// SoPlex has no column types, only real variables can be represented.
///
/// # Errors
///
/// `UnsupportedVariableType` for anything other than `Real`.
pub fn variable_type(variable_type: VariableType) -> Result<(), SolverError> {
    match variable_type {
        VariableType::Real => Ok(()),
        other => Err(SolverError::UnsupportedVariableType(other)),
    }
}
