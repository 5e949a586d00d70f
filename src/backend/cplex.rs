//! # CPLEX
//!
//! Translation of CPLEX's native codes, as defined in `cplex.h`. Statuses of continuous and mixed
//! integer solves are distinct codes, both are covered.
use std::sync::OnceLock;

use enum_map::enum_map;

use crate::data::linear_program::elements::{OptimizationType, VariableType};
use crate::error::SolverError;
use crate::solver::parameter::{NativeKey, Parameter, ParameterKey, ParameterTable};
use crate::solver::status::{Status, StatusTable, StatusTranslation};

#[allow(missing_docs)]
pub const BACKEND: &str = "CPLEX";

/// Solution status codes, `CPX_STAT_*` and `CPXMIP_*`.
#[allow(missing_docs)]
pub mod code {
    pub const STAT_OPTIMAL: i32 = 1;
    pub const STAT_UNBOUNDED: i32 = 2;
    pub const STAT_INFEASIBLE: i32 = 3;
    pub const STAT_INF_OR_UNBD: i32 = 4;
    pub const STAT_OPTIMAL_INFEAS: i32 = 5;
    pub const STAT_NUM_BEST: i32 = 6;
    pub const STAT_ABORT_IT_LIM: i32 = 10;
    pub const STAT_ABORT_TIME_LIM: i32 = 11;
    pub const STAT_ABORT_OBJ_LIM: i32 = 12;
    pub const STAT_ABORT_USER: i32 = 13;
    pub const MIP_OPTIMAL: i32 = 101;
    pub const MIP_OPTIMAL_TOL: i32 = 102;
    pub const MIP_INFEASIBLE: i32 = 103;
    pub const MIP_SOL_LIM: i32 = 104;
    pub const MIP_NODE_LIM_FEAS: i32 = 105;
    pub const MIP_NODE_LIM_INFEAS: i32 = 106;
    pub const MIP_TIME_LIM_FEAS: i32 = 107;
    pub const MIP_TIME_LIM_INFEAS: i32 = 108;
    pub const MIP_FAIL_FEAS: i32 = 109;
    pub const MIP_FAIL_INFEAS: i32 = 110;
    pub const MIP_MEM_LIM_FEAS: i32 = 111;
    pub const MIP_MEM_LIM_INFEAS: i32 = 112;
    pub const MIP_ABORT_FEAS: i32 = 113;
    pub const MIP_ABORT_INFEAS: i32 = 114;
    pub const MIP_OPTIMAL_INFEAS: i32 = 115;
    pub const MIP_UNBOUNDED: i32 = 118;
    pub const MIP_INF_OR_UNBD: i32 = 119;
}

/// Translation of solution status codes.
pub static STATUS: StatusTable = StatusTable::new(BACKEND, &[
    (code::STAT_OPTIMAL, StatusTranslation::Status(Status::Optimal)),
    (code::STAT_UNBOUNDED, StatusTranslation::Status(Status::Unbounded)),
    (code::STAT_INFEASIBLE, StatusTranslation::Status(Status::Infeasible)),
    (code::STAT_INF_OR_UNBD, StatusTranslation::Status(Status::InfeasibleOrUnbounded)),
    (code::STAT_OPTIMAL_INFEAS, StatusTranslation::Status(Status::SuboptimalSolution)),
    (code::STAT_NUM_BEST, StatusTranslation::Status(Status::NumericFailure)),
    (code::STAT_ABORT_IT_LIM, StatusTranslation::Status(Status::IterationLimit)),
    (code::STAT_ABORT_TIME_LIM, StatusTranslation::Status(Status::TimeOut)),
    (code::STAT_ABORT_OBJ_LIM, StatusTranslation::Status(Status::UserObjectiveLimit)),
    (code::STAT_ABORT_USER, StatusTranslation::Status(Status::Interrupted)),
    (code::MIP_OPTIMAL, StatusTranslation::Status(Status::Optimal)),
    (code::MIP_OPTIMAL_TOL, StatusTranslation::Status(Status::Optimal)),
    (code::MIP_INFEASIBLE, StatusTranslation::Status(Status::Infeasible)),
    (code::MIP_SOL_LIM, StatusTranslation::Status(Status::SolutionLimit)),
    (code::MIP_NODE_LIM_FEAS, StatusTranslation::Status(Status::NodeLimit)),
    (code::MIP_NODE_LIM_INFEAS, StatusTranslation::Status(Status::NodeLimit)),
    (code::MIP_TIME_LIM_FEAS, StatusTranslation::Status(Status::TimeOut)),
    (code::MIP_TIME_LIM_INFEAS, StatusTranslation::Status(Status::TimeOut)),
    (code::MIP_FAIL_FEAS, StatusTranslation::Failure("mixed integer solve failed with an integer solution")),
    (code::MIP_FAIL_INFEAS, StatusTranslation::Failure("mixed integer solve failed without an integer solution")),
    (code::MIP_MEM_LIM_FEAS, StatusTranslation::Failure("memory limit reached with an integer solution")),
    (code::MIP_MEM_LIM_INFEAS, StatusTranslation::Failure("memory limit reached without an integer solution")),
    (code::MIP_ABORT_FEAS, StatusTranslation::Status(Status::Interrupted)),
    (code::MIP_ABORT_INFEAS, StatusTranslation::Status(Status::Interrupted)),
    (code::MIP_OPTIMAL_INFEAS, StatusTranslation::Status(Status::SuboptimalSolution)),
    (code::MIP_UNBOUNDED, StatusTranslation::Status(Status::Unbounded)),
    (code::MIP_INF_OR_UNBD, StatusTranslation::Status(Status::InfeasibleOrUnbounded)),
]);

/// Parameter numbers, `CPX_PARAM_*`.
pub fn parameters() -> &'static ParameterTable {
    static TABLE: OnceLock<ParameterTable> = OnceLock::new();
    TABLE.get_or_init(|| ParameterTable::new(BACKEND, enum_map! {
        Parameter::ThreadCount => Some(ParameterKey::integer(NativeKey::Id(1067))),
        Parameter::ObjectiveSense => Some(ParameterKey::integer(NativeKey::Name("CPXchgobjsen"))),
        Parameter::Cutoff => Some(ParameterKey::real(NativeKey::Id(2007))),
        Parameter::TimeLimit => Some(ParameterKey::real(NativeKey::Id(1039))),
        Parameter::ObjectiveLowerLimit => Some(ParameterKey::real(NativeKey::Id(1025))),
        Parameter::ObjectiveUpperLimit => Some(ParameterKey::real(NativeKey::Id(1026))),
        Parameter::Verbosity => Some(ParameterKey::integer(NativeKey::Id(1035))),
        Parameter::PrimalOrDual => Some(ParameterKey::integer(NativeKey::Id(1062))),
        Parameter::IterationLimit => Some(ParameterKey::integer(NativeKey::Id(1020))),
        Parameter::Infinity => None,
    }))
}

/// Argument of `CPXchgobjsen`.
#[must_use]
pub fn sense(optimization_type: OptimizationType) -> i32 {
    match optimization_type {
        OptimizationType::Minimize => 1,
        OptimizationType::Maximize => -1,
    }
}

/// Column type character, `CPX_BINARY` and friends.
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
