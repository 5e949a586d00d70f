use std::sync::Arc;

use approx::assert_abs_diff_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lpint::backend::microlp::MicroLpSolver;
use lpint::data::linear_algebra::entry::Row;
use lpint::data::linear_algebra::INFINITY;
use lpint::data::linear_program::elements::{Constraint, Objective, OptimizationType, Variable, VariableType};
use lpint::data::linear_program::general_form::GeneralForm;
use lpint::data::linear_program::LinearProgramHandle;
use lpint::error::SolverError;
use lpint::solver::parameter::Parameter;
use lpint::solver::raw::FlushRawData;
use lpint::solver::status::Status;
use lpint::solver::LinearProgramSolver;

#[test]
fn knapsack() {
    let program = GeneralForm::with_objective(
        OptimizationType::Maximize,
        vec![Constraint::less(Row::new(vec![5.0, 7.0, 4.0, 3.0], vec![0, 1, 2, 3]).unwrap(), 14.0)],
        Objective::with_types(vec![8.0, 11.0, 6.0, 4.0], vec![VariableType::Binary; 4]).unwrap(),
    );
    let mut solver = MicroLpSolver::from_program(program);
    solver.set_int_parameter(Parameter::Verbosity, 0).unwrap();

    assert_eq!(solver.solve(), Ok(Status::Optimal));
    let solution = solver.get_solution().unwrap();
    assert_abs_diff_eq!(solution.objective_value, 21.0, epsilon = 1e-9);
    assert_eq!(solution.primal, vec![0.0, 1.0, 1.0, 1.0]);
}

#[test]
fn integer() {
    let mut program = GeneralForm::new(OptimizationType::Maximize);
    program.add_variables(vec![Variable::new(0.0, 10.0).unwrap(); 2]);
    program.objective_mut().values_mut().copy_from_slice(&[1.0, 1.0]);
    program.add_constraints(vec![Constraint::less(Row::new(vec![2.0, 2.0], vec![0, 1]).unwrap(), 3.0)]);

    let mut solver = MicroLpSolver::from_program(program);
    // No objective was set, only coefficients changed.
    assert_eq!(solver.solve(), Err(SolverError::NotInitialized));

    let objective = Objective::with_types(vec![1.0, 1.0], vec![VariableType::Real; 2]).unwrap();
    solver.linear_program_mut().set_objective(objective).unwrap();
    assert_eq!(solver.solve(), Ok(Status::Optimal));
    assert_abs_diff_eq!(solver.get_solution().unwrap().objective_value, 1.5, epsilon = 1e-9);

    solver.linear_program_mut().objective_mut().variable_types_mut().fill(VariableType::Integer);
    assert_eq!(solver.solve(), Ok(Status::Optimal));
    assert_abs_diff_eq!(solver.get_solution().unwrap().objective_value, 1.0, epsilon = 1e-9);
    // Bounds are kept while synchronizing.
    assert_eq!(solver.linear_program().variable(1).upper_bound(), 10.0);
}

#[test]
fn bounded_integer() {
    // Minimize x + 2y with x + y >= 7, x integer in [0, 3]
    let mut program = GeneralForm::with_objective(
        OptimizationType::Minimize,
        vec![Constraint::greater(Row::new(vec![1.0, 1.0], vec![0, 1]).unwrap(), 7.0)],
        Objective::with_types(vec![1.0, 2.0], vec![VariableType::Integer; 2]).unwrap(),
    );
    program.variables_mut()[0] = Variable::new(0.0, 3.0).unwrap();
    program.variables_mut()[1] = Variable::new(0.0, 10.0).unwrap();
    let mut solver = MicroLpSolver::from_program(program);

    assert_eq!(solver.solve(), Ok(Status::Optimal));
    let solution = solver.get_solution().unwrap();
    assert_eq!(solution.primal, vec![3.0, 4.0]);
    assert_abs_diff_eq!(solution.objective_value, 11.0, epsilon = 1e-9);

    // A bound beyond the integers of the engine is reported, not clamped.
    solver.linear_program_mut().variables_mut()[1] = Variable::new(0.0, 1e12).unwrap();
    assert_eq!(solver.solve(), Err(SolverError::UnrepresentableBound { index: 1, value: 1e12 }));
}

#[test]
fn remove_variable() {
    // Maximize x + 3y + z with x + y + z <= 2, y <= 1
    let mut solver = MicroLpSolver::from_program(GeneralForm::with_objective(
        OptimizationType::Maximize,
        vec![
            Constraint::less(Row::new(vec![1.0, 1.0, 1.0], vec![0, 1, 2]).unwrap(), 2.0),
            Constraint::less(Row::new(vec![1.0], vec![1]).unwrap(), 1.0),
        ],
        Objective::new(vec![1.0, 3.0, 1.0]),
    ));
    assert_eq!(solver.solve(), Ok(Status::Optimal));
    assert_abs_diff_eq!(solver.get_solution().unwrap().objective_value, 4.0, epsilon = 1e-9);

    solver.linear_program_mut().remove_variable(1);
    assert_eq!(solver.linear_program().num_vars(), 2);
    // Row 1 no longer has any coefficients and restricts nothing.
    assert!(solver.linear_program().constraint(1).row.is_empty());
    assert_eq!(solver.solve(), Ok(Status::Optimal));
    let solution = solver.get_solution().unwrap();
    assert_abs_diff_eq!(solution.objective_value, 2.0, epsilon = 1e-9);
    assert_eq!(solution.primal.len(), 2);
}

#[test]
fn shared_program() {
    let program = Arc::new(GeneralForm::with_objective(
        OptimizationType::Minimize,
        vec![Constraint::greater(Row::new(vec![1.0, 1.0], vec![0, 1]).unwrap(), 2.0)],
        Objective::new(vec![1.0, 3.0]),
    ));

    let mut first = MicroLpSolver::from_program(Arc::clone(&program));
    let mut second = MicroLpSolver::from_program(Arc::clone(&program));
    second.linear_program_mut().objective_mut().values_mut()[1] = 0.5;

    assert_eq!(first.solve(), Ok(Status::Optimal));
    assert_eq!(second.solve(), Ok(Status::Optimal));
    assert_abs_diff_eq!(first.get_solution().unwrap().objective_value, 2.0, epsilon = 1e-9);
    assert_abs_diff_eq!(second.get_solution().unwrap().objective_value, 1.0, epsilon = 1e-9);
    assert_eq!(program.objective().values(), &[1.0, 3.0]);
}

#[test]
fn solve_on_separate_threads() {
    let handles = (1..=4)
        .map(|k| std::thread::spawn(move || {
            let mut solver = MicroLpSolver::from_program(GeneralForm::with_objective(
                OptimizationType::Maximize,
                vec![Constraint::less(Row::new(vec![1.0], vec![0]).unwrap(), k as f64)],
                Objective::new(vec![1.0]),
            ));
            solver.set_int_parameter(Parameter::Verbosity, 0).unwrap();
            solver.solve().map(|_| solver.get_solution().map(|solution| solution.objective_value))
        }))
        .collect::<Vec<_>>();

    for (k, handle) in (1..=4).zip(handles) {
        let objective_value = handle.join().unwrap().unwrap().unwrap();
        assert_abs_diff_eq!(objective_value, k as f64, epsilon = 1e-9);
    }
}

/// Random programs with nonnegative rows, nonnegative right hand sides and bounded variables are
/// feasible (at zero) and bounded.
#[test]
fn random_feasible() {
    let mut rng = StdRng::seed_from_u64(0x1b5);
    for _ in 0..25 {
        let nr_variables = rng.gen_range(1..8);
        let nr_constraints = rng.gen_range(1..6);

        let mut values = Vec::new();
        let mut offsets = vec![0];
        let mut indices = Vec::new();
        for _ in 0..nr_constraints {
            for j in 0..nr_variables {
                if rng.gen_bool(0.6) {
                    values.push(rng.gen_range(0.5..5.0));
                    indices.push(j);
                }
            }
            offsets.push(values.len());
        }
        let upper_bounds = (0..nr_constraints).map(|_| rng.gen_range(1.0..20.0)).collect::<Vec<f64>>();
        let objective = (0..nr_variables).map(|_| rng.gen_range(0.0..5.0)).collect::<Vec<f64>>();

        let mut solver = MicroLpSolver::new(OptimizationType::Maximize);
        solver.set_int_parameter(Parameter::Verbosity, 0).unwrap();
        solver.add_variables(objective.clone(), vec![VariableType::Real; nr_variables]).unwrap();
        for variable in solver.linear_program_mut().variables_mut() {
            *variable = Variable::new(0.0, 10.0).unwrap();
        }
        solver.add_rows(values, offsets, indices, vec![-INFINITY; nr_constraints], upper_bounds.clone()).unwrap();

        assert_eq!(solver.solve(), Ok(Status::Optimal));
        let solution = solver.get_solution().unwrap();
        let program = solver.linear_program();
        for (constraint, upper_bound) in program.constraints().iter().zip(&upper_bounds) {
            let activity = constraint.row.iter().map(|(j, value)| value * solution.primal[j]).sum::<f64>();
            assert!(activity <= upper_bound + 1e-6);
        }
        for value in &solution.primal {
            assert!(*value >= -1e-9 && *value <= 10.0 + 1e-9);
        }
        let objective_value = objective.iter().zip(&solution.primal).map(|(c, x)| c * x).sum::<f64>();
        assert_abs_diff_eq!(objective_value, solution.objective_value, epsilon = 1e-6);
    }
}
