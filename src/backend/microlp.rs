//! # microlp
//!
//! In-process backend over the pure Rust `microlp` engine.
//!
//! The engine builds its problem in one pass, so the held program doubles as the staging area for
//! raw data: bulk ingestion writes into it directly, and the native problem is rebuilt from it on
//! synchronization.
use std::sync::OnceLock;

use enum_map::enum_map;
use log::{debug, info, trace, warn};
use microlp::{ComparisonOp, OptimizationDirection, Problem};

use crate::data::linear_algebra::entry::Row;
use crate::data::linear_algebra::INFINITY;
use crate::data::linear_program::elements::{Constraint, OptimizationType, Variable, VariableType};
use crate::data::linear_program::general_form::GeneralForm;
use crate::data::linear_program::solution::Solution;
use crate::data::linear_program::LinearProgramHandle;
use crate::error::{InvalidInput, SolverError};
use crate::solver::parameter::{NativeKey, Parameter, ParameterKey, ParameterKind, ParameterTable};
use crate::solver::raw::{CompressedEntries, FlushRawData};
use crate::solver::status::{Status, StatusTable, StatusTranslation};
use crate::solver::{LinearProgramSolver, SolverState};

#[allow(missing_docs)]
pub const BACKEND: &str = "microlp";

/// Outcome of `Problem::solve`, encoded as a native code.
#[allow(missing_docs)]
pub mod code {
    pub const OPTIMAL: i32 = 0;
    pub const INFEASIBLE: i32 = 1;
    pub const UNBOUNDED: i32 = 2;
    pub const INTERNAL_ERROR: i32 = 3;
}

/// Translation of solve outcomes.
pub static STATUS: StatusTable = StatusTable::new(BACKEND, &[
    (code::OPTIMAL, StatusTranslation::Status(Status::Optimal)),
    (code::INFEASIBLE, StatusTranslation::Status(Status::Infeasible)),
    (code::UNBOUNDED, StatusTranslation::Status(Status::Unbounded)),
    (code::INTERNAL_ERROR, StatusTranslation::Failure("internal error")),
]);

/// The engine has no limits or algorithm choices, only the direction and the amount of logging
/// can be set.
pub fn parameters() -> &'static ParameterTable {
    static TABLE: OnceLock<ParameterTable> = OnceLock::new();
    TABLE.get_or_init(|| ParameterTable::new(BACKEND, enum_map! {
        Parameter::ObjectiveSense => Some(ParameterKey::integer(NativeKey::Name("direction"))),
        Parameter::Verbosity => Some(ParameterKey::integer(NativeKey::Name("verbosity"))),
        _ => None,
    }))
}

/// Value of the `ObjectiveSense` parameter, in the same encoding as Gurobi and CPLEX.
#[must_use]
pub fn sense(optimization_type: OptimizationType) -> i32 {
    match optimization_type {
        OptimizationType::Minimize => 1,
        OptimizationType::Maximize => -1,
    }
}

/// Whether the engine can represent variables of a type.
///
/// # Errors
///
/// `UnsupportedVariableType` for the semi continuous types.
pub fn variable_type(variable_type: VariableType) -> Result<(), SolverError> {
    match variable_type {
        VariableType::Binary | VariableType::Integer | VariableType::Real => Ok(()),
        other => Err(SolverError::UnsupportedVariableType(other)),
    }
}

fn direction(optimization_type: OptimizationType) -> OptimizationDirection {
    match optimization_type {
        OptimizationType::Minimize => OptimizationDirection::Minimize,
        OptimizationType::Maximize => OptimizationDirection::Maximize,
    }
}

/// Problem as handed to the engine.
struct NativeProblem {
    problem: Problem,
    variables: Vec<microlp::Variable>,
    objective: Vec<f64>,
    integer: Vec<bool>,
    /// A variable domain or a row that no point satisfies was found while building.
    infeasible: bool,
}

impl NativeProblem {
    fn build<P: LinearProgramHandle>(program: &P) -> Result<Self, SolverError> {
        let mut problem = Problem::new(direction(program.optimization_type()));
        let objective = program.objective();
        let mut infeasible = false;

        let mut variables = Vec::with_capacity(program.num_vars());
        for (j, ((bounds, &coefficient), &variable_type)) in program.variables().iter()
            .zip(objective.values())
            .zip(objective.variable_types())
            .enumerate() {
            let (variable, feasible) = Self::add_variable(&mut problem, j, coefficient, bounds, variable_type)?;
            if !feasible {
                debug!("{} variable {} has an empty domain", BACKEND, j);
                infeasible = true;
            }
            variables.push(variable);
        }

        for (i, constraint) in program.constraints().iter().enumerate() {
            let terms = constraint.row.iter()
                .map(|(j, &coefficient)| match variables.get(j) {
                    Some(&variable) => Ok((variable, coefficient)),
                    None => Err(SolverError::IndexOutOfRange { index: j, len: variables.len() }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            trace!("row {}: {}", i, constraint);
            if !Self::add_range(&mut problem, &terms, constraint.lower_bound, constraint.upper_bound) {
                debug!("{} row {} can't be satisfied", BACKEND, i);
                infeasible = true;
            }
        }

        Ok(Self {
            problem,
            variables,
            objective: objective.values().to_vec(),
            integer: objective.variable_types().iter().map(|variable_type| variable_type.is_integer()).collect(),
            infeasible,
        })
    }

    /// Add a variable, and report whether its domain is nonempty.
    fn add_variable(
        problem: &mut Problem,
        index: usize,
        coefficient: f64,
        bounds: &Variable,
        variable_type: VariableType,
    ) -> Result<(microlp::Variable, bool), SolverError> {
        let (lower, upper) = (bounds.lower_bound(), bounds.upper_bound());
        let (lower, upper) = match variable_type {
            VariableType::Real => return Ok((problem.add_var(coefficient, (lower, upper)), true)),
            VariableType::Integer => (lower, upper),
            VariableType::Binary => (lower.max(0.0), upper.min(1.0)),
            other => return Err(SolverError::UnsupportedVariableType(other)),
        };

        let lower = Self::integer_bound(index, lower, f64::ceil)?;
        let upper = Self::integer_bound(index, upper, f64::floor)?;
        if lower <= upper {
            Ok((problem.add_integer_var(coefficient, (lower, upper)), true))
        } else {
            Ok((problem.add_integer_var(coefficient, (0, 0)), false))
        }
    }

    /// Integer bound of the engine, infinite bounds become the extreme integers.
    fn integer_bound(index: usize, value: f64, round: fn(f64) -> f64) -> Result<i32, SolverError> {
        if value == -INFINITY {
            return Ok(i32::MIN);
        }
        if value == INFINITY {
            return Ok(i32::MAX);
        }

        let rounded = round(value);
        if rounded >= f64::from(i32::MIN) && rounded <= f64::from(i32::MAX) {
            Ok(rounded as i32)
        } else {
            Err(SolverError::UnrepresentableBound { index, value })
        }
    }

    /// Add a range row as one sided constraints or an equality.
    ///
    /// Returns `false` if the range can't be satisfied whatever the row's value.
    fn add_range(problem: &mut Problem, terms: &[(microlp::Variable, f64)], lower: f64, upper: f64) -> bool {
        if lower > upper || lower == INFINITY || upper == -INFINITY {
            return false;
        }
        if terms.is_empty() {
            return lower <= 0.0 && 0.0 <= upper;
        }

        if lower == upper {
            problem.add_constraint(terms.iter().copied(), ComparisonOp::Eq, lower);
            return true;
        }
        if lower.is_finite() {
            problem.add_constraint(terms.iter().copied(), ComparisonOp::Ge, lower);
        }
        if upper.is_finite() {
            problem.add_constraint(terms.iter().copied(), ComparisonOp::Le, upper);
        }
        true
    }

    /// Integer variables are rounded, and the objective value is that of the rounded point.
    fn solution(&self, solution: &microlp::Solution) -> Solution {
        let primal = self.variables.iter()
            .zip(&self.integer)
            .map(|(&variable, &integer)| {
                let value = *solution.var_value(variable);
                if integer { value.round() } else { value }
            })
            .collect::<Vec<_>>();

        let objective_value = if self.integer.contains(&true) {
            self.objective.iter().zip(&primal).map(|(coefficient, value)| coefficient * value).sum()
        } else {
            solution.objective()
        };

        Solution::new(primal, Vec::new(), objective_value)
    }
}

/// Backend over the `microlp` engine.
///
/// The engine doesn't report duals, solutions of this backend have an empty dual vector.
pub struct MicroLpSolver<P = GeneralForm> {
    program: P,
    native: Option<NativeProblem>,
    state: SolverState,
    status: Status,
    solution: Option<Solution>,
    verbosity: i32,
}

impl MicroLpSolver<GeneralForm> {
    /// Backend holding an empty program.
    #[must_use]
    pub fn new(optimization_type: OptimizationType) -> Self {
        Self::from_program(GeneralForm::new(optimization_type))
    }
}

impl<P: LinearProgramHandle> MicroLpSolver<P> {
    /// Backend holding a program built before.
    ///
    /// Pass an `Arc` to keep sharing the program with the caller.
    pub fn from_program(program: P) -> Self {
        let state = if program.is_initialized() {
            SolverState::Configured
        } else {
            SolverState::Unconfigured
        };

        Self {
            program,
            native: None,
            state,
            status: Status::NoInformation,
            solution: None,
            verbosity: 1,
        }
    }

    /// Give up the held program.
    pub fn into_program(self) -> P {
        self.program
    }

    fn program_changed(&mut self) {
        self.state = self.state.after_program_change();
        self.solution = None;
    }

    fn solve_native(&mut self) -> Result<Status, SolverError> {
        if !self.state.is_synchronized() {
            self.update_program()?;
        }
        let Some(native) = &self.native else {
            return Err(SolverError::NotInitialized);
        };

        let outcome = if native.infeasible {
            Err(microlp::Error::Infeasible)
        } else {
            native.problem.solve()
        };
        let solution = outcome.as_ref().ok().map(|solution| native.solution(solution));
        let (native_code, message) = match outcome {
            Ok(_) => (code::OPTIMAL, None),
            Err(microlp::Error::Infeasible) => (code::INFEASIBLE, None),
            Err(microlp::Error::Unbounded) => (code::UNBOUNDED, None),
            Err(microlp::Error::InternalError(message)) => (code::INTERNAL_ERROR, Some(message)),
        };

        let translated = STATUS.translate_with(native_code, |description| {
            message.unwrap_or_else(|| description.to_string())
        });
        match translated {
            Ok(status) => {
                if self.verbosity > 0 {
                    info!("{} finished: {}", BACKEND, status);
                }
                self.status = status;
                self.solution = solution;
                self.state = SolverState::Solved;
                Ok(status)
            },
            Err(error) => {
                warn!("{}", error);
                self.status = Status::NoInformation;
                self.solution = None;
                self.state = SolverState::Failed;
                Err(error)
            },
        }
    }
}

impl<P: LinearProgramHandle> LinearProgramSolver for MicroLpSolver<P> {
    type Program = P;

    fn backend(&self) -> &'static str {
        BACKEND
    }

    fn linear_program(&self) -> &P {
        &self.program
    }

    fn linear_program_mut(&mut self) -> &mut P {
        self.program_changed();
        &mut self.program
    }

    fn parameter_supported(&self, parameter: Parameter, kind: ParameterKind) -> bool {
        parameters().supports(parameter, kind)
    }

    fn set_int_parameter(&mut self, parameter: Parameter, value: i32) -> Result<(), SolverError> {
        parameters().lookup(parameter, ParameterKind::Integer)?;

        match parameter {
            Parameter::ObjectiveSense => {
                let sense = match value {
                    1 => OptimizationType::Minimize,
                    -1 => OptimizationType::Maximize,
                    _ => return Err(SolverError::InvalidParameterValue { parameter, value: value.to_string() }),
                };
                self.program.set_objective_sense(sense);
                self.program_changed();
            },
            Parameter::Verbosity => {
                self.verbosity = value;
                self.state = self.state.after_configuration();
                self.solution = None;
            },
            _ => return Err(SolverError::UnsupportedParameter { parameter, kind: ParameterKind::Integer }),
        }

        debug!("{} parameter {:?} set to {}", BACKEND, parameter, value);
        Ok(())
    }

    fn set_real_parameter(&mut self, parameter: Parameter, _value: f64) -> Result<(), SolverError> {
        parameters().lookup(parameter, ParameterKind::Real)?;
        // No real parameters are in the table.
        Err(SolverError::UnsupportedParameter { parameter, kind: ParameterKind::Real })
    }

    fn update_program(&mut self) -> Result<(), SolverError> {
        if !self.program.is_initialized() {
            return Err(SolverError::NotInitialized);
        }
        if self.state.is_synchronized() && self.native.is_some() {
            return Ok(());
        }

        self.solution = None;
        match NativeProblem::build(&self.program) {
            Ok(native) => {
                debug!(
                    "{} synchronized {} variables and {} constraints",
                    BACKEND, native.variables.len(), self.program.num_constraints(),
                );
                self.native = Some(native);
                self.state = SolverState::Synchronized;
                Ok(())
            },
            Err(error) => {
                warn!("{} synchronization failed: {}", BACKEND, error);
                self.native = None;
                self.state = SolverState::Failed;
                Err(error)
            },
        }
    }

    fn solve_primal(&mut self) -> Result<Status, SolverError> {
        self.solve_native()
    }

    /// The engine has a single algorithm, this is the same as `solve_primal`.
    fn solve_dual(&mut self) -> Result<Status, SolverError> {
        debug!("{} has no separate dual algorithm", BACKEND);
        self.solve_native()
    }

    fn solution_status(&self) -> Status {
        self.status
    }

    fn state(&self) -> SolverState {
        self.state
    }

    fn get_solution(&self) -> Result<&Solution, SolverError> {
        match &self.solution {
            Some(solution) if self.state == SolverState::Solved && self.status.has_solution() => Ok(solution),
            _ => Err(SolverError::ModelNotSolved),
        }
    }
}

/// Raw data is validated and written into the held program.
///
/// Column indices of rows are checked on synchronization, row indices of columns immediately.
impl<P: LinearProgramHandle> FlushRawData for MicroLpSolver<P> {
    fn add_rows(
        &mut self,
        values: Vec<f64>,
        row_start_offsets: Vec<usize>,
        col_indices: Vec<usize>,
        lower_bounds: Vec<f64>,
        upper_bounds: Vec<f64>,
    ) -> Result<(), SolverError> {
        let compressed = CompressedEntries::new(values, row_start_offsets, col_indices)?;
        compressed.check_bounds(&lower_bounds, &upper_bounds)?;

        let nr_rows = compressed.nr_segments();
        let constraints = compressed.into_entries().into_iter()
            .zip(lower_bounds.into_iter().zip(upper_bounds))
            .map(|(row, (lower, upper))| Constraint::new(Row::from(row), lower, upper))
            .collect();
        self.program.add_constraints(constraints);
        self.program_changed();

        debug!("{} received {} rows", BACKEND, nr_rows);
        Ok(())
    }

    fn add_columns(
        &mut self,
        values: Vec<f64>,
        col_start_offsets: Vec<usize>,
        row_indices: Vec<usize>,
        lower_bounds: Vec<f64>,
        upper_bounds: Vec<f64>,
    ) -> Result<(), SolverError> {
        let compressed = CompressedEntries::new(values, col_start_offsets, row_indices)?;
        compressed.check_bounds(&lower_bounds, &upper_bounds)?;
        let nr_rows = self.program.num_constraints();
        if let Some(index) = compressed.max_index().filter(|&index| index >= nr_rows) {
            return Err(SolverError::IndexOutOfRange { index, len: nr_rows });
        }
        let variables = lower_bounds.into_iter().zip(upper_bounds)
            .map(|(lower, upper)| Variable::new(lower, upper))
            .collect::<Result<Vec<_>, _>>()?;

        let first = self.program.num_vars();
        let constraints = self.program.constraints();
        for (k, (_, rows)) in compressed.segments().enumerate() {
            if rows.iter().any(|&i| constraints[i].row.get(first + k).is_some()) {
                return Err(InvalidInput::InvalidEntry { index: first + k }.into());
            }
        }

        let nr_columns = variables.len();
        self.program.add_variables(variables);
        let constraints = self.program.constraints_mut();
        for (k, (values, rows)) in compressed.segments().enumerate() {
            for (&i, &value) in rows.iter().zip(values) {
                constraints[i].row.push_unchecked(first + k, value);
            }
        }
        self.program_changed();

        debug!("{} received {} columns", BACKEND, nr_columns);
        Ok(())
    }

    fn add_variables(
        &mut self,
        objective_values: Vec<f64>,
        variable_types: Vec<VariableType>,
    ) -> Result<(), SolverError> {
        if objective_values.len() != variable_types.len() {
            return Err(InvalidInput::DimensionMismatch {
                expected: objective_values.len(),
                actual: variable_types.len(),
            }.into());
        }
        for &kind in &variable_types {
            variable_type(kind)?;
        }

        let nr_variables = objective_values.len();
        let mut objective = self.program.objective().clone();
        for (value, kind) in objective_values.into_iter().zip(variable_types) {
            objective.push(value, kind);
        }
        self.program.set_objective(objective)?;
        self.program_changed();

        debug!("{} received {} variables", BACKEND, nr_variables);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use approx::assert_abs_diff_eq;

    use crate::backend::microlp::{parameters, MicroLpSolver, STATUS};
    use crate::data::linear_algebra::entry::Row;
    use crate::data::linear_algebra::INFINITY;
    use crate::data::linear_program::elements::{Constraint, Objective, OptimizationType, Variable, VariableType};
    use crate::data::linear_program::general_form::GeneralForm;
    use crate::data::linear_program::LinearProgramHandle;
    use crate::error::{InvalidInput, SolverError};
    use crate::solver::parameter::{Parameter, ParameterKind};
    use crate::solver::raw::FlushRawData;
    use crate::solver::status::Status;
    use crate::solver::{LinearProgramSolver, SolverState};

    #[test]
    fn test_tables() {
        for native in STATUS.codes() {
            let _ = STATUS.translate(native);
        }
        assert!(parameters().supports(Parameter::Verbosity, ParameterKind::Integer));
        assert!(!parameters().supports(Parameter::TimeLimit, ParameterKind::Real));
    }

    #[test]
    fn test_states() {
        let mut solver = MicroLpSolver::new(OptimizationType::Minimize);
        assert_eq!(solver.state(), SolverState::Unconfigured);
        assert_eq!(solver.update_program(), Err(SolverError::NotInitialized));
        assert_eq!(solver.solution_status(), Status::NoInformation);

        solver.set_int_parameter(Parameter::Verbosity, 0).unwrap();
        assert_eq!(solver.state(), SolverState::Configured);

        solver.linear_program_mut().set_objective(Objective::new(vec![1.0])).unwrap();
        solver.linear_program_mut().add_constraints(vec![Constraint::less(Row::new(vec![1.0], vec![0]).unwrap(), 5.0)]);
        solver.update_program().unwrap();
        assert_eq!(solver.state(), SolverState::Synchronized);
        solver.update_program().unwrap();
        assert_eq!(solver.state(), SolverState::Synchronized);

        assert_eq!(solver.solve_primal(), Ok(Status::Optimal));
        assert_eq!(solver.state(), SolverState::Solved);
        assert!(solver.get_solution().is_ok());

        solver.linear_program_mut();
        assert_eq!(solver.state(), SolverState::Configured);
        assert_eq!(solver.get_solution(), Err(SolverError::ModelNotSolved));
    }

    #[test]
    fn test_parameters() {
        let mut solver = MicroLpSolver::new(OptimizationType::Minimize);
        assert_eq!(
            solver.set_real_parameter(Parameter::TimeLimit, 0.0),
            Err(SolverError::UnsupportedParameter { parameter: Parameter::TimeLimit, kind: ParameterKind::Real }),
        );
        assert_eq!(
            solver.set_real_parameter(Parameter::Verbosity, 0.0),
            Err(SolverError::UnsupportedParameter { parameter: Parameter::Verbosity, kind: ParameterKind::Real }),
        );
        assert!(matches!(
            solver.set_int_parameter(Parameter::ObjectiveSense, 0),
            Err(SolverError::InvalidParameterValue { .. }),
        ));
        solver.set_int_parameter(Parameter::ObjectiveSense, -1).unwrap();
        assert_eq!(solver.linear_program().optimization_type(), OptimizationType::Maximize);
    }

    #[test]
    fn test_unsupported_variable_type() {
        let mut program = GeneralForm::new(OptimizationType::Minimize);
        program.set_objective(Objective::with_types(vec![1.0], vec![VariableType::SemiReal]).unwrap()).unwrap();
        let mut solver = MicroLpSolver::from_program(program);
        assert_eq!(solver.update_program(), Err(SolverError::UnsupportedVariableType(VariableType::SemiReal)));
        assert_eq!(solver.state(), SolverState::Failed);

        assert_eq!(
            solver.add_variables(vec![1.0], vec![VariableType::SemiInteger]),
            Err(SolverError::UnsupportedVariableType(VariableType::SemiInteger)),
        );
    }

    #[test]
    fn test_index_out_of_range() {
        let program = GeneralForm::with_objective(
            OptimizationType::Minimize,
            vec![Constraint::greater(Row::new(vec![1.0], vec![3]).unwrap(), 1.0)],
            Objective::new(vec![1.0]),
        );
        let mut solver = MicroLpSolver::from_program(program);
        assert_eq!(solver.solve_primal(), Err(SolverError::IndexOutOfRange { index: 3, len: 1 }));
        assert_eq!(solver.state(), SolverState::Failed);
    }

    #[test]
    fn test_statuses() {
        // x >= 2 and x <= 1
        let program = GeneralForm::with_objective(
            OptimizationType::Minimize,
            vec![
                Constraint::greater(Row::new(vec![1.0], vec![0]).unwrap(), 2.0),
                Constraint::less(Row::new(vec![1.0], vec![0]).unwrap(), 1.0),
            ],
            Objective::new(vec![1.0]),
        );
        let mut solver = MicroLpSolver::from_program(program);
        solver.set_int_parameter(Parameter::Verbosity, 0).unwrap();
        assert_eq!(solver.solve(), Ok(Status::Infeasible));
        assert_eq!(solver.solution_status(), Status::Infeasible);
        assert_eq!(solver.get_solution(), Err(SolverError::ModelNotSolved));

        // Maximize x with x >= 1
        let program = GeneralForm::with_objective(
            OptimizationType::Maximize,
            vec![Constraint::greater(Row::new(vec![1.0], vec![0]).unwrap(), 1.0)],
            Objective::new(vec![1.0]),
        );
        let mut solver = MicroLpSolver::from_program(program);
        assert_eq!(solver.solve_dual(), Ok(Status::Unbounded));
        assert_eq!(solver.get_solution(), Err(SolverError::ModelNotSolved));
    }

    #[test]
    fn test_range_constraint() {
        // Minimize x with 2 <= x + y <= 3, y <= 1
        let mut program = GeneralForm::with_objective(
            OptimizationType::Minimize,
            vec![Constraint::new(Row::new(vec![1.0, 1.0], vec![0, 1]).unwrap(), 2.0, 3.0)],
            Objective::new(vec![1.0, 0.0]),
        );
        program.variables_mut()[1] = Variable::new(0.0, 1.0).unwrap();
        let mut solver = MicroLpSolver::from_program(program);
        assert_eq!(solver.solve(), Ok(Status::Optimal));
        let solution = solver.get_solution().unwrap();
        assert_abs_diff_eq!(solution.objective_value, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(solution.primal[0], 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(solution.primal[1], 1.0, epsilon = 1e-9);
        assert!(solution.dual.is_empty());
    }

    #[test]
    fn test_binary_bounds() {
        // Maximize x with x binary, fixed to zero
        let mut program = GeneralForm::with_objective(
            OptimizationType::Maximize,
            vec![Constraint::less(Row::new(vec![1.0], vec![0]).unwrap(), 5.0)],
            Objective::with_types(vec![1.0], vec![VariableType::Binary]).unwrap(),
        );
        program.variables_mut()[0] = Variable::new(0.0, 0.0).unwrap();
        let mut solver = MicroLpSolver::from_program(program);
        assert_eq!(solver.solve(), Ok(Status::Optimal));
        let solution = solver.get_solution().unwrap();
        assert_eq!(solution.primal, vec![0.0]);
        assert_abs_diff_eq!(solution.objective_value, 0.0, epsilon = 1e-9);

        // Minimize x with x binary and at least one half
        solver.linear_program_mut().set_objective_sense(OptimizationType::Minimize);
        solver.linear_program_mut().variables_mut()[0] = Variable::new(0.5, INFINITY).unwrap();
        assert_eq!(solver.solve(), Ok(Status::Optimal));
        assert_eq!(solver.get_solution().unwrap().primal, vec![1.0]);

        // No binary value lies in [2, 3]
        solver.linear_program_mut().variables_mut()[0] = Variable::new(2.0, 3.0).unwrap();
        assert_eq!(solver.solve(), Ok(Status::Infeasible));
        assert_eq!(solver.get_solution(), Err(SolverError::ModelNotSolved));
    }

    #[test]
    fn test_integer_bounds() {
        // Maximize 3x + y with x in [0, 2.5], y in [-3.7, -1.2], both integer
        let mut program = GeneralForm::with_objective(
            OptimizationType::Maximize,
            vec![Constraint::less(Row::new(vec![1.0, 1.0], vec![0, 1]).unwrap(), 100.0)],
            Objective::with_types(vec![3.0, 1.0], vec![VariableType::Integer; 2]).unwrap(),
        );
        program.variables_mut()[0] = Variable::new(0.0, 2.5).unwrap();
        program.variables_mut()[1] = Variable::new(-3.7, -1.2).unwrap();
        let mut solver = MicroLpSolver::from_program(program);
        assert_eq!(solver.solve(), Ok(Status::Optimal));
        let solution = solver.get_solution().unwrap();
        assert_eq!(solution.primal, vec![2.0, -2.0]);
        // The objective value is that of the rounded point.
        assert_eq!(solution.objective_value, 4.0);

        // No integer lies in [0.2, 0.8]
        solver.linear_program_mut().variables_mut()[0] = Variable::new(0.2, 0.8).unwrap();
        assert_eq!(solver.solve(), Ok(Status::Infeasible));
    }

    #[test]
    fn test_unrepresentable_bound() {
        let mut program = GeneralForm::with_objective(
            OptimizationType::Maximize,
            vec![Constraint::less(Row::new(vec![1.0], vec![0]).unwrap(), 1e10)],
            Objective::with_types(vec![1.0], vec![VariableType::Integer]).unwrap(),
        );
        program.variables_mut()[0] = Variable::new(0.0, 5e9).unwrap();
        let mut solver = MicroLpSolver::from_program(program);
        assert_eq!(solver.solve(), Err(SolverError::UnrepresentableBound { index: 0, value: 5e9 }));
        assert_eq!(solver.state(), SolverState::Failed);
        assert_eq!(solver.get_solution(), Err(SolverError::ModelNotSolved));

        // The same bound is fine on a real variable.
        solver.linear_program_mut().objective_mut().variable_types_mut()[0] = VariableType::Real;
        assert_eq!(solver.solve(), Ok(Status::Optimal));
        assert_abs_diff_eq!(solver.get_solution().unwrap().objective_value, 5e9, epsilon = 1.0);
    }

    #[test]
    fn test_unsatisfiable_rows() {
        let row = || Row::new(vec![1.0], vec![0]).unwrap();
        for constraint in [
            Constraint::greater(row(), INFINITY),
            Constraint::less(row(), -INFINITY),
            Constraint::new(row(), 2.0, 1.0),
            Constraint::new(Row::new(vec![], vec![]).unwrap(), 1.0, 2.0),
        ] {
            let program = GeneralForm::with_objective(
                OptimizationType::Minimize,
                vec![constraint],
                Objective::new(vec![1.0]),
            );
            let mut solver = MicroLpSolver::from_program(program);
            assert_eq!(solver.solve(), Ok(Status::Infeasible));
            assert_eq!(solver.get_solution(), Err(SolverError::ModelNotSolved));
        }
    }

    #[test]
    fn test_add_columns() {
        let mut solver = MicroLpSolver::new(OptimizationType::Minimize);
        solver.add_variables(vec![1.0, 2.0], vec![VariableType::Real; 2]).unwrap();
        // x0 + x1 >= 1
        solver.add_rows(vec![1.0, 1.0], vec![0, 2], vec![0, 1], vec![1.0], vec![INFINITY]).unwrap();
        // x2 in [0, 5], appears in row 0
        solver.add_columns(vec![2.0], vec![0, 1], vec![0], vec![0.0], vec![5.0]).unwrap();
        assert_eq!(solver.linear_program().num_vars(), 3);
        assert_eq!(solver.linear_program().constraint(0).row.at(2), 2.0);
        assert_eq!(solver.linear_program().objective().values(), &[1.0, 2.0, 0.0]);

        assert_eq!(
            solver.add_columns(vec![1.0], vec![0, 1], vec![4], vec![0.0], vec![1.0]),
            Err(SolverError::IndexOutOfRange { index: 4, len: 1 }),
        );
        assert_eq!(
            solver.add_columns(vec![1.0], vec![0, 1], vec![0], vec![1.0], vec![0.0]),
            Err(SolverError::InvalidInput(InvalidInput::InvalidVariableBounds { lower: 1.0, upper: 0.0 })),
        );
        assert_eq!(solver.linear_program().num_vars(), 3);

        // The new column is free in the objective, so it covers the row.
        assert_eq!(solver.solve(), Ok(Status::Optimal));
        assert_abs_diff_eq!(solver.get_solution().unwrap().objective_value, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_shared_program() {
        let program = Arc::new(GeneralForm::with_objective(
            OptimizationType::Maximize,
            vec![Constraint::less(Row::new(vec![1.0], vec![0]).unwrap(), 2.0)],
            Objective::new(vec![1.0]),
        ));
        let mut solver = MicroLpSolver::from_program(Arc::clone(&program));
        solver.linear_program_mut().add_constraints(vec![Constraint::less(Row::new(vec![1.0], vec![0]).unwrap(), 1.0)]);

        assert_eq!(program.num_constraints(), 1);
        assert_eq!(solver.linear_program().num_constraints(), 2);
        assert_eq!(solver.solve(), Ok(Status::Optimal));
        assert_abs_diff_eq!(solver.get_solution().unwrap().objective_value, 1.0, epsilon = 1e-9);
    }
}
