use std::collections::HashSet;

use enum_map::Enum;

use lpint::backend::{gurobi, soplex, Backend};
use lpint::data::linear_program::elements::VariableType;
use lpint::error::SolverError;
use lpint::solver::parameter::{Parameter, ParameterKind};
use lpint::solver::status::{Status, StatusTranslation};

fn all_statuses() -> impl Iterator<Item = Status> {
    (0..Status::LENGTH).map(Status::from_usize)
}

#[test]
fn gurobi_covers_all_statuses() {
    let reached = gurobi::STATUS.codes()
        .filter_map(|code| gurobi::STATUS.translate(code).ok())
        .collect::<HashSet<_>>();
    for status in all_statuses() {
        assert!(reached.contains(&status), "{}", status);
    }
}

#[test]
fn soplex_failures_keep_native_code() {
    for code in soplex::STATUS.codes() {
        if let Some(StatusTranslation::Failure(description)) = soplex::STATUS.get(code) {
            assert_eq!(
                soplex::STATUS.translate(code),
                Err(SolverError::Backend { backend: "SoPlex", code, message: description.to_string() }),
            );
        }
    }
    assert_eq!(soplex::STATUS.translate(soplex::code::ABORT_ITER), Ok(Status::IterationLimit));
}

#[test]
fn time_limit_mappings() {
    for backend in [Backend::Gurobi, Backend::Cplex, Backend::SoPlex] {
        assert!(backend.parameter_table().supports(Parameter::TimeLimit, ParameterKind::Real));
    }
    #[cfg(feature = "microlp")]
    assert_eq!(
        Backend::MicroLp.parameter_table().lookup(Parameter::TimeLimit, ParameterKind::Real),
        Err(SolverError::UnsupportedParameter { parameter: Parameter::TimeLimit, kind: ParameterKind::Real }),
    );
}

#[test]
fn semi_continuous_types() {
    assert!(Backend::Cplex.supports_variable_type(VariableType::SemiInteger));
    assert!(!Backend::SoPlex.supports_variable_type(VariableType::SemiInteger));
    #[cfg(feature = "microlp")]
    assert!(!Backend::MicroLp.supports_variable_type(VariableType::SemiReal));
}
