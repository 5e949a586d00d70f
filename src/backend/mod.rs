//! # Solver backends
//!
//! Each backend has a table translating its native status codes, a table of the parameters it
//! supports and a translation of variable types. Backends that run in process also implement the
//! solver traits.
use crate::data::linear_program::elements::VariableType;
use crate::solver::parameter::ParameterTable;
use crate::solver::status::StatusTable;

pub mod cplex;
pub mod gurobi;
#[cfg(feature = "microlp")]
pub mod microlp;
pub mod soplex;

/// Known backends.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Backend {
    Gurobi,
    Cplex,
    SoPlex,
    #[cfg(feature = "microlp")]
    MicroLp,
}

impl Backend {
    /// Name used in errors and logging.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Backend::Gurobi => gurobi::BACKEND,
            Backend::Cplex => cplex::BACKEND,
            Backend::SoPlex => soplex::BACKEND,
            #[cfg(feature = "microlp")]
            Backend::MicroLp => microlp::BACKEND,
        }
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn status_table(self) -> &'static StatusTable {
        match self {
            Backend::Gurobi => &gurobi::STATUS,
            Backend::Cplex => &cplex::STATUS,
            Backend::SoPlex => &soplex::STATUS,
            #[cfg(feature = "microlp")]
            Backend::MicroLp => &microlp::STATUS,
        }
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn parameter_table(self) -> &'static ParameterTable {
        match self {
            Backend::Gurobi => gurobi::parameters(),
            Backend::Cplex => cplex::parameters(),
            Backend::SoPlex => soplex::parameters(),
            #[cfg(feature = "microlp")]
            Backend::MicroLp => microlp::parameters(),
        }
    }

    /// Whether the backend can represent variables of this type.
    #[must_use]
    pub fn supports_variable_type(self, variable_type: VariableType) -> bool {
        match self {
            Backend::Gurobi => gurobi::variable_type(variable_type).is_ok(),
            Backend::Cplex => cplex::variable_type(variable_type).is_ok(),
            Backend::SoPlex => soplex::variable_type(variable_type).is_ok(),
            #[cfg(feature = "microlp")]
            Backend::MicroLp => microlp::variable_type(variable_type).is_ok(),
        }
    }
}
