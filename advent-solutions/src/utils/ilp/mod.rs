//! Exact non-negative integer linear programming.
//!
//! Minimizes `c·x` subject to `A·x = b` with every `x_j` a non-negative
//! integer: the LP relaxation is solved by a two-phase simplex
//! ([`simplex`]), and a depth-first branch-and-bound splits on
//! fractional variables until the optimum is integral. A relaxation
//! optimum is accepted as an incumbent only after the rounded vector
//! reproduces every constraint in exact integer arithmetic, so
//! floating-point residue never reaches a caller.

mod simplex;
#[cfg(test)]
mod tests;

use simplex::{EPS, LpOutcome};

/// Distance from the nearest integer below which a relaxed value is
/// treated as integral for branching purposes.
const INTEGRALITY_EPS: f64 = 1e-6;

/// Branching constraint on a single variable.
#[derive(Debug, Clone, Copy)]
enum Bound {
    AtMost(u64),
    AtLeast(u64),
}

/// `min c·x` subject to `A·x = b`, `x >= 0` integer.
#[derive(Debug, Clone, Default)]
pub struct IntegerProgram {
    objective: Vec<u64>,
    constraints: Vec<(Vec<u64>, u64)>,
}

/// A verified optimal assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub values: Vec<u64>,
    pub cost: u64,
}

impl IntegerProgram {
    /// `objective[j]` is the cost of one unit of variable `j`.
    pub fn new(objective: Vec<u64>) -> Self {
        Self {
            objective,
            constraints: Vec::new(),
        }
    }

    /// Require `coefficients · x == rhs` exactly.
    ///
    /// # Panics
    ///
    /// When `coefficients` does not match the variable count.
    pub fn require_eq(&mut self, coefficients: Vec<u64>, rhs: u64) {
        assert_eq!(
            coefficients.len(),
            self.objective.len(),
            "coefficient count mismatch"
        );
        self.constraints.push((coefficients, rhs));
    }

    /// The cheapest feasible assignment, or `None` when no non-negative
    /// integer vector satisfies every constraint.
    pub fn minimize(&self) -> Option<Solution> {
        let vars = self.objective.len();
        let mut stack: Vec<Vec<(usize, Bound)>> = vec![Vec::new()];
        let mut best: Option<Solution> = None;

        while let Some(bounds) = stack.pop() {
            let LpOutcome::Optimal { x, objective } = self.relax(&bounds) else {
                // Infeasible subproblem. Unbounded cannot occur with
                // non-negative costs but is equally a dead branch.
                continue;
            };

            // The objective is integral at every integer point, so the
            // relaxation bound rounds up before pruning.
            let lower = (objective - EPS).ceil().max(0.0) as u64;
            if let Some(incumbent) = &best {
                if lower >= incumbent.cost {
                    continue;
                }
            }

            match branch_variable(&x[..vars]) {
                Some(j) => push_branches(&mut stack, &bounds, j, x[j]),
                None => {
                    let values: Vec<u64> = x[..vars]
                        .iter()
                        .map(|&v| v.round().max(0.0) as u64)
                        .collect();
                    if self.satisfied_by(&values) {
                        let cost = dot(&self.objective, &values);
                        if best.as_ref().is_none_or(|b| cost < b.cost) {
                            best = Some(Solution { values, cost });
                        }
                    } else if let Some(j) = residual_variable(&x[..vars]) {
                        // Exact verification rejected the rounding; split
                        // on the variable carrying the largest residue.
                        push_branches(&mut stack, &bounds, j, x[j]);
                    }
                }
            }
        }

        best
    }

    /// Solve the LP relaxation under the given branching bounds.
    ///
    /// Each bound becomes an equality row with a fresh slack variable:
    /// `x_j + s = u` for an upper bound, `x_j - s = l` for a lower one.
    fn relax(&self, bounds: &[(usize, Bound)]) -> LpOutcome {
        let vars = self.objective.len();
        let total = vars + bounds.len();

        let mut a = Vec::with_capacity(self.constraints.len() + bounds.len());
        let mut b = Vec::with_capacity(self.constraints.len() + bounds.len());
        for (coeffs, rhs) in &self.constraints {
            let mut row = vec![0.0; total];
            for (j, &v) in coeffs.iter().enumerate() {
                row[j] = v as f64;
            }
            a.push(row);
            b.push(*rhs as f64);
        }
        for (k, &(var, bound)) in bounds.iter().enumerate() {
            let mut row = vec![0.0; total];
            row[var] = 1.0;
            match bound {
                Bound::AtMost(limit) => {
                    row[vars + k] = 1.0;
                    b.push(limit as f64);
                }
                Bound::AtLeast(limit) => {
                    row[vars + k] = -1.0;
                    b.push(limit as f64);
                }
            }
            a.push(row);
        }

        let mut c = vec![0.0; total];
        for (j, &cost) in self.objective.iter().enumerate() {
            c[j] = cost as f64;
        }

        simplex::solve(&a, &b, &c)
    }

    /// Exact integer check of `A·values == b`.
    fn satisfied_by(&self, values: &[u64]) -> bool {
        self.constraints.iter().all(|(coeffs, rhs)| {
            let sum: u128 = coeffs
                .iter()
                .zip(values)
                .map(|(&a, &x)| a as u128 * x as u128)
                .sum();
            sum == *rhs as u128
        })
    }
}

fn dot(costs: &[u64], values: &[u64]) -> u64 {
    costs.iter().zip(values).map(|(&c, &x)| c * x).sum()
}

/// Most fractional variable, or `None` when all are integral within
/// [`INTEGRALITY_EPS`].
fn branch_variable(x: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (j, &v) in x.iter().enumerate() {
        let frac = (v - v.round()).abs();
        if frac > INTEGRALITY_EPS && best.is_none_or(|(_, f)| frac > f) {
            best = Some((j, frac));
        }
    }
    best.map(|(j, _)| j)
}

/// Variable with the largest nonzero distance from an integer.
fn residual_variable(x: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (j, &v) in x.iter().enumerate() {
        let frac = (v - v.round()).abs();
        if frac > 0.0 && best.is_none_or(|(_, f)| frac > f) {
            best = Some((j, frac));
        }
    }
    best.map(|(j, _)| j)
}

fn push_branches(
    stack: &mut Vec<Vec<(usize, Bound)>>,
    bounds: &[(usize, Bound)],
    var: usize,
    value: f64,
) {
    let floor = value.max(0.0).floor() as u64;
    let mut high = bounds.to_vec();
    high.push((var, Bound::AtLeast(floor + 1)));
    stack.push(high);
    let mut low = bounds.to_vec();
    low.push((var, Bound::AtMost(floor)));
    stack.push(low);
}
