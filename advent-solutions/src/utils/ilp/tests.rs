use super::simplex::{self, LpOutcome};
use super::*;
use proptest::prelude::*;

#[test]
fn relaxation_solves_equality_system() {
    // min x0 + x1  s.t.  x0 + x1 = 2
    let outcome = simplex::solve(&[vec![1.0, 1.0]], &[2.0], &[1.0, 1.0]);
    match outcome {
        LpOutcome::Optimal { x, objective } => {
            assert!((objective - 2.0).abs() < 1e-6);
            assert!((x[0] + x[1] - 2.0).abs() < 1e-6);
        }
        other => panic!("expected optimum, got {other:?}"),
    }
}

#[test]
fn relaxation_detects_infeasible() {
    // x0 + x1 = 3 and x0 + x1 = 4 cannot both hold.
    let outcome = simplex::solve(
        &[vec![1.0, 1.0], vec![1.0, 1.0]],
        &[3.0, 4.0],
        &[1.0, 1.0],
    );
    assert_eq!(outcome, LpOutcome::Infeasible);
}

#[test]
fn relaxation_detects_unbounded() {
    // min -x0  s.t.  x0 - x1 = 1: x0 grows with x1 without limit.
    let outcome = simplex::solve(&[vec![1.0, -1.0]], &[1.0], &[-1.0, 0.0]);
    assert_eq!(outcome, LpOutcome::Unbounded);
}

#[test]
fn relaxation_handles_redundant_rows() {
    // Duplicate constraint rows must not trip the phase transition.
    let outcome = simplex::solve(
        &[vec![1.0, 0.0], vec![1.0, 0.0]],
        &[2.0, 2.0],
        &[1.0, 1.0],
    );
    match outcome {
        LpOutcome::Optimal { x, objective } => {
            assert!((objective - 2.0).abs() < 1e-6);
            assert!((x[0] - 2.0).abs() < 1e-6);
        }
        other => panic!("expected optimum, got {other:?}"),
    }
}

#[test]
fn forced_single_variable() {
    let mut program = IntegerProgram::new(vec![1]);
    program.require_eq(vec![1], 3);
    let solution = program.minimize().unwrap();
    assert_eq!(solution.values, vec![3]);
    assert_eq!(solution.cost, 3);
}

#[test]
fn shared_variable_is_cheapest() {
    // x2 feeds both counters, so pressing it alone wins:
    //   x0 + x2 = 3, x1 + x2 = 3.
    let mut program = IntegerProgram::new(vec![1, 1, 1]);
    program.require_eq(vec![1, 0, 1], 3);
    program.require_eq(vec![0, 1, 1], 3);
    let solution = program.minimize().unwrap();
    assert_eq!(solution.cost, 3);
    assert_eq!(solution.values, vec![0, 0, 3]);
}

#[test]
fn fractional_relaxation_is_branched_to_integrality() {
    // LP optimum is x0 = 1.5 (cost 1.5); the integer optimum is
    // x0 = 1, x1 = 1 (cost 2).
    let mut program = IntegerProgram::new(vec![1, 1]);
    program.require_eq(vec![2, 1], 3);
    let solution = program.minimize().unwrap();
    assert_eq!(solution.cost, 2);
    assert_eq!(solution.values, vec![1, 1]);
}

#[test]
fn integrally_infeasible_system_is_rejected() {
    // 2·(x0 + x1) = 5 has real solutions but no integer ones.
    let mut program = IntegerProgram::new(vec![1, 1]);
    program.require_eq(vec![2, 2], 5);
    assert_eq!(program.minimize(), None);
}

#[test]
fn contradictory_constraints_are_rejected() {
    let mut program = IntegerProgram::new(vec![1, 1]);
    program.require_eq(vec![1, 1], 3);
    program.require_eq(vec![1, 1], 4);
    assert_eq!(program.minimize(), None);
}

#[test]
fn joltage_style_system_reaches_known_optimum() {
    // Five buttons against five counters; the optimum presses buttons
    // 0, 1, and 3 for 2, 5, and 5 times, twelve in total.
    let mut program = IntegerProgram::new(vec![1; 5]);
    program.require_eq(vec![1, 0, 1, 1, 0], 7);
    program.require_eq(vec![0, 0, 0, 1, 1], 5);
    program.require_eq(vec![1, 1, 0, 1, 1], 12);
    program.require_eq(vec![1, 1, 0, 0, 1], 7);
    program.require_eq(vec![1, 0, 1, 0, 1], 2);
    let solution = program.minimize().unwrap();
    assert_eq!(solution.cost, 12);
    assert!(program.satisfied_by(&solution.values));
}

proptest! {
    // Any planted press vector gives a feasible system, so the solver
    // must find something at least as cheap that round-trips exactly.
    #[test]
    fn planted_systems_round_trip(
        (coeffs, planted) in (1usize..=4, 1usize..=4).prop_flat_map(|(vars, rows)| {
            (
                prop::collection::vec(prop::collection::vec(0u64..=2, vars), rows),
                prop::collection::vec(0u64..=4, vars),
            )
        })
    ) {
        let vars = planted.len();
        let mut program = IntegerProgram::new(vec![1; vars]);
        for row in &coeffs {
            let rhs: u64 = row.iter().zip(&planted).map(|(a, x)| a * x).sum();
            program.require_eq(row.clone(), rhs);
        }

        let solution = program.minimize().expect("planted solution exists");
        prop_assert!(solution.cost <= planted.iter().sum());
        prop_assert!(program.satisfied_by(&solution.values));
        prop_assert_eq!(solution.cost, solution.values.iter().sum::<u64>());
    }
}
