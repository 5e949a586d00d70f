//! # Gurobi
//!
//! Translation of Gurobi's native codes, as defined in `gurobi_c.h`.
use std::sync::OnceLock;

use enum_map::enum_map;

use crate::data::linear_program::elements::{OptimizationType, VariableType};
use crate::error::SolverError;
use crate::solver::parameter::{NativeKey, Parameter, ParameterKey, ParameterTable};
use crate::solver::status::{Status, StatusTable, StatusTranslation};

#[allow(missing_docs)]
pub const BACKEND: &str = "Gurobi";

/// Values of the `Status` model attribute.
#[allow(missing_docs)]
pub mod code {
    pub const LOADED: i32 = 1;
    pub const OPTIMAL: i32 = 2;
    pub const INFEASIBLE: i32 = 3;
    pub const INF_OR_UNBD: i32 = 4;
    pub const UNBOUNDED: i32 = 5;
    pub const CUTOFF: i32 = 6;
    pub const ITERATION_LIMIT: i32 = 7;
    pub const NODE_LIMIT: i32 = 8;
    pub const TIME_LIMIT: i32 = 9;
    pub const SOLUTION_LIMIT: i32 = 10;
    pub const INTERRUPTED: i32 = 11;
    pub const NUMERIC: i32 = 12;
    pub const SUBOPTIMAL: i32 = 13;
    pub const INPROGRESS: i32 = 14;
    pub const USER_OBJ_LIMIT: i32 = 15;
}

/// Translation of the `Status` model attribute.
pub static STATUS: StatusTable = StatusTable::new(BACKEND, &[
    (code::LOADED, StatusTranslation::Status(Status::NoInformation)),
    (code::OPTIMAL, StatusTranslation::Status(Status::Optimal)),
    (code::INFEASIBLE, StatusTranslation::Status(Status::Infeasible)),
    (code::INF_OR_UNBD, StatusTranslation::Status(Status::InfeasibleOrUnbounded)),
    (code::UNBOUNDED, StatusTranslation::Status(Status::Unbounded)),
    (code::CUTOFF, StatusTranslation::Status(Status::Cutoff)),
    (code::ITERATION_LIMIT, StatusTranslation::Status(Status::IterationLimit)),
    (code::NODE_LIMIT, StatusTranslation::Status(Status::NodeLimit)),
    (code::TIME_LIMIT, StatusTranslation::Status(Status::TimeOut)),
    (code::SOLUTION_LIMIT, StatusTranslation::Status(Status::SolutionLimit)),
    (code::INTERRUPTED, StatusTranslation::Status(Status::Interrupted)),
    (code::NUMERIC, StatusTranslation::Status(Status::NumericFailure)),
    (code::SUBOPTIMAL, StatusTranslation::Status(Status::SuboptimalSolution)),
    (code::INPROGRESS, StatusTranslation::Status(Status::InProgress)),
    (code::USER_OBJ_LIMIT, StatusTranslation::Status(Status::UserObjectiveLimit)),
]);

/// Parameter names.
///
/// The objective sense is the `ModelSense` model attribute rather than a parameter, but it is set
/// the same way. Gurobi stores the iteration limit as a real number.
pub fn parameters() -> &'static ParameterTable {
    static TABLE: OnceLock<ParameterTable> = OnceLock::new();
    TABLE.get_or_init(|| ParameterTable::new(BACKEND, enum_map! {
        Parameter::ThreadCount => Some(ParameterKey::integer(NativeKey::Name("Threads"))),
        Parameter::ObjectiveSense => Some(ParameterKey::integer(NativeKey::Name("ModelSense"))),
        Parameter::Cutoff => Some(ParameterKey::real(NativeKey::Name("Cutoff"))),
        Parameter::TimeLimit => Some(ParameterKey::real(NativeKey::Name("TimeLimit"))),
        Parameter::Verbosity => Some(ParameterKey::integer(NativeKey::Name("OutputFlag"))),
        Parameter::PrimalOrDual => Some(ParameterKey::integer(NativeKey::Name("Method"))),
        Parameter::IterationLimit => Some(ParameterKey::integer_as_real(NativeKey::Name("IterationLimit"))),
        Parameter::Infinity | Parameter::ObjectiveLowerLimit | Parameter::ObjectiveUpperLimit => None,
    }))
}

/// Value of the `ModelSense` attribute.
#[must_use]
pub fn sense(optimization_type: OptimizationType) -> i32 {
    match optimization_type {
        OptimizationType::Minimize => 1,
        OptimizationType::Maximize => -1,
    }
}

/// Character of the `VType` variable attribute.
///
/// # Errors
///
/// Never, all variable types are supported.
pub fn variable_type(variable_type: VariableType) -> Result<u8, SolverError> {
    Ok(match variable_type {
        VariableType::Binary => b'B',
        VariableType::Integer => b'I',
        VariableType::Real => b'C',
        VariableType::SemiReal => b'S',
        VariableType::SemiInteger => b'N',
    })
}
