//! Two-phase dense simplex over the reals.
//!
//! Solves `min c·x` subject to `A·x = b`, `x >= 0`. Phase 1 minimizes
//! the sum of one artificial variable per row to find a basic feasible
//! solution; phase 2 minimizes the real objective from there. Pivoting
//! follows Bland's rule throughout, which rules out cycling and keeps
//! the result deterministic for a given input.

/// Comparison tolerance for reduced costs, ratios, and feasibility.
pub(super) const EPS: f64 = 1e-9;

/// Outcome of the relaxation solve.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum LpOutcome {
    /// No non-negative real vector satisfies the constraints.
    Infeasible,
    /// The objective decreases without limit over the feasible region.
    Unbounded,
    /// An optimal vertex.
    Optimal { x: Vec<f64>, objective: f64 },
}

/// Solve `min c·x` s.t. `A·x = b`, `x >= 0`.
pub(super) fn solve(a: &[Vec<f64>], b: &[f64], c: &[f64]) -> LpOutcome {
    let m = a.len();
    let n = c.len();
    debug_assert!(a.iter().all(|row| row.len() == n));
    debug_assert_eq!(b.len(), m);

    // Tableau layout: n structural columns, m artificial columns, rhs.
    let full = n + m;
    let mut rows: Vec<Vec<f64>> = Vec::with_capacity(m);
    for (i, coeffs) in a.iter().enumerate() {
        let mut row = vec![0.0; full + 1];
        // Rows are normalized to a non-negative rhs so the artificial
        // identity basis is feasible.
        let flip = if b[i] < 0.0 { -1.0 } else { 1.0 };
        for (j, &v) in coeffs.iter().enumerate() {
            row[j] = flip * v;
        }
        row[n + i] = 1.0;
        row[full] = flip * b[i];
        rows.push(row);
    }
    let mut basis: Vec<usize> = (n..full).collect();

    // Phase 1 cost row: with the all-artificial basis, the reduced cost
    // of a structural column is the negated column sum, an artificial's
    // is zero, and the rhs slot holds the negated objective.
    let mut cost = vec![0.0; full + 1];
    for (j, slot) in cost.iter_mut().enumerate() {
        if j < n || j == full {
            *slot = -rows.iter().map(|row| row[j]).sum::<f64>();
        }
    }

    if !pivot_to_optimum(&mut rows, &mut cost, &mut basis, full) {
        // The artificial sum is bounded below by zero; unbounded phase 1
        // would mean a broken tableau.
        return LpOutcome::Unbounded;
    }
    if -cost[full] > EPS {
        return LpOutcome::Infeasible;
    }

    // Drive leftover artificials out of the basis; rows that offer no
    // structural pivot are redundant constraints and are dropped.
    let mut i = 0;
    while i < rows.len() {
        if basis[i] >= n {
            if let Some(j) = (0..n).find(|&j| rows[i][j].abs() > EPS) {
                pivot(&mut rows, &mut cost, &mut basis, i, j);
            } else {
                rows.remove(i);
                basis.remove(i);
                continue;
            }
        }
        i += 1;
    }

    // Phase 2: drop the artificial columns and minimize the real
    // objective from the feasible basis.
    for row in rows.iter_mut() {
        row[n] = row[full];
        row.truncate(n + 1);
    }
    let mut cost = vec![0.0; n + 1];
    for (j, slot) in cost.iter_mut().enumerate() {
        let direct = if j < n { c[j] } else { 0.0 };
        let through_basis: f64 = rows
            .iter()
            .enumerate()
            .map(|(i, row)| c[basis[i]] * row[j])
            .sum();
        *slot = direct - through_basis;
    }

    if !pivot_to_optimum(&mut rows, &mut cost, &mut basis, n) {
        return LpOutcome::Unbounded;
    }

    let mut x = vec![0.0; n];
    for (i, &var) in basis.iter().enumerate() {
        x[var] = rows[i][n];
    }
    LpOutcome::Optimal {
        x,
        objective: -cost[n],
    }
}

/// Pivot until no reduced cost is negative.
///
/// Returns `false` when the objective is unbounded (an improving column
/// with no positive entry).
fn pivot_to_optimum(
    rows: &mut [Vec<f64>],
    cost: &mut [f64],
    basis: &mut [usize],
    rhs: usize,
) -> bool {
    loop {
        // Bland: entering column is the improving one of smallest index.
        let Some(enter) = (0..rhs).find(|&j| cost[j] < -EPS) else {
            return true;
        };

        // Ratio test; ties keep the smallest basis variable (Bland).
        let mut leave: Option<(usize, f64)> = None;
        for (i, row) in rows.iter().enumerate() {
            if row[enter] > EPS {
                let ratio = row[rhs] / row[enter];
                let better = match leave {
                    None => true,
                    Some((prev, prev_ratio)) => {
                        ratio < prev_ratio - EPS
                            || (ratio < prev_ratio + EPS && basis[i] < basis[prev])
                    }
                };
                if better {
                    leave = Some((i, ratio));
                }
            }
        }
        let Some((leave, _)) = leave else {
            return false;
        };

        pivot(rows, cost, basis, leave, enter);
    }
}

/// Gauss-Jordan step making `pivot_col` basic in `pivot_row`.
fn pivot(
    rows: &mut [Vec<f64>],
    cost: &mut [f64],
    basis: &mut [usize],
    pivot_row: usize,
    pivot_col: usize,
) {
    let factor = rows[pivot_row][pivot_col];
    for v in rows[pivot_row].iter_mut() {
        *v /= factor;
    }

    let pivot_vals = rows[pivot_row].clone();
    for (i, row) in rows.iter_mut().enumerate() {
        if i == pivot_row {
            continue;
        }
        let scale = row[pivot_col];
        if scale.abs() > EPS {
            for (v, p) in row.iter_mut().zip(&pivot_vals) {
                *v -= scale * p;
            }
        }
    }
    let scale = cost[pivot_col];
    if scale.abs() > EPS {
        for (v, p) in cost.iter_mut().zip(&pivot_vals) {
            *v -= scale * p;
        }
    }

    basis[pivot_row] = pivot_col;
}
