//! Day 10: Factory
//!
//! Each machine line describes indicator lights, toggle buttons, and
//! joltage targets: `[.##.] (3) (1,3) ... {3,5,4,7}`. Part 1 finds the
//! fewest button presses whose toggles XOR into the light pattern, a
//! linear system over GF(2) solved by Gaussian elimination with an
//! exhaustive sweep of the free variables for minimality. Part 2 finds
//! the fewest presses that hit every joltage counter exactly, an exact
//! integer linear program. A single unsolvable machine makes the whole
//! part unsolvable.

use crate::utils::ilp::IntegerProgram;
use advent_solver::{ParseError, Puzzle, SolveError};
use advent_solver_macros::AutoRegisterPuzzle;
use bitvec::prelude as bv;
use thiserror::Error;

#[derive(AutoRegisterPuzzle)]
#[puzzle(year = 2025, day = 10, tags = ["linear-algebra", "slow"])]
pub struct Solver;

/// Row widths are fixed, so oversized machines are rejected at parse
/// time rather than silently truncated. The free-variable sweep is
/// exponential in the worst case and relies on puzzle-scale inputs.
const MAX_LIGHTS: usize = 64;
const MAX_BUTTONS: usize = 64;
const COLS: usize = MAX_BUTTONS + 1;

type LightRow = bv::BitArr!(for MAX_LIGHTS);
type MatrixRow = bv::BitArr!(for COLS);

#[derive(Debug, Clone)]
pub struct Machine {
    lights: usize,
    target: LightRow,
    buttons: Vec<LightRow>,
    joltages: Vec<u64>,
}

#[derive(Debug, Error)]
enum MachineParseError {
    #[error("expected '[pattern] (button)... {{joltages}}'")]
    MissingSection,
    #[error("machine has no buttons")]
    NoButtons,
    #[error("light pattern must be '.' or '#' between brackets, got '{0}'")]
    BadPattern(String),
    #[error("machines support at most {MAX_LIGHTS} lights, found {0}")]
    TooManyLights(usize),
    #[error("machines support at most {MAX_BUTTONS} buttons, found {0}")]
    TooManyButtons(usize),
    #[error("button {0}: expected '(<index>,...)', got '{1}'")]
    BadButton(usize, String),
    #[error("button {0} toggles light {1}, but only {2} lights exist")]
    LightOutOfRange(usize, usize, usize),
    #[error("button {0} lists light {1} twice")]
    DuplicateToggle(usize, usize),
    #[error("joltage targets must be numbers between braces, got '{0}'")]
    BadJoltages(String),
    #[error("{0} joltage targets for {1} lights")]
    JoltageCountMismatch(usize, usize),
}

fn parse_pattern(input: &str) -> Result<(usize, LightRow), MachineParseError> {
    let inner = input
        .strip_prefix('[')
        .and_then(|s| s.strip_suffix(']'))
        .ok_or_else(|| MachineParseError::BadPattern(input.to_string()))?;
    if inner.is_empty() {
        return Err(MachineParseError::BadPattern(input.to_string()));
    }
    if inner.len() > MAX_LIGHTS {
        return Err(MachineParseError::TooManyLights(inner.len()));
    }

    let mut target = bv::bitarr![0; MAX_LIGHTS];
    for (i, c) in inner.chars().enumerate() {
        match c {
            '.' => {}
            '#' => target.set(i, true),
            _ => return Err(MachineParseError::BadPattern(input.to_string())),
        }
    }
    Ok((inner.len(), target))
}

fn parse_button(index: usize, input: &str, lights: usize) -> Result<LightRow, MachineParseError> {
    let inner = input
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| MachineParseError::BadButton(index, input.to_string()))?;

    let mut flips = bv::bitarr![0; MAX_LIGHTS];
    for part in inner.split(',') {
        let light: usize = part
            .parse()
            .map_err(|_| MachineParseError::BadButton(index, input.to_string()))?;
        if light >= lights {
            return Err(MachineParseError::LightOutOfRange(index, light, lights));
        }
        if flips[light] {
            return Err(MachineParseError::DuplicateToggle(index, light));
        }
        flips.set(light, true);
    }
    Ok(flips)
}

fn parse_joltages(input: &str) -> Result<Vec<u64>, MachineParseError> {
    let inner = input
        .strip_prefix('{')
        .and_then(|s| s.strip_suffix('}'))
        .ok_or_else(|| MachineParseError::BadJoltages(input.to_string()))?;
    inner
        .split(',')
        .map(|part| {
            part.parse()
                .map_err(|_| MachineParseError::BadJoltages(input.to_string()))
        })
        .collect()
}

impl Machine {
    fn parse(line: &str) -> Result<Self, MachineParseError> {
        let mut sections = line.split_whitespace();
        let pattern = sections.next().ok_or(MachineParseError::MissingSection)?;
        let joltage_section = sections.next_back().ok_or(MachineParseError::MissingSection)?;

        let (lights, target) = parse_pattern(pattern)?;
        let buttons = sections
            .enumerate()
            .map(|(i, s)| parse_button(i, s, lights))
            .collect::<Result<Vec<_>, _>>()?;
        if buttons.is_empty() {
            return Err(MachineParseError::NoButtons);
        }
        if buttons.len() > MAX_BUTTONS {
            return Err(MachineParseError::TooManyButtons(buttons.len()));
        }

        let joltages = parse_joltages(joltage_section)?;
        if joltages.len() != lights {
            return Err(MachineParseError::JoltageCountMismatch(
                joltages.len(),
                lights,
            ));
        }

        Ok(Self {
            lights,
            target,
            buttons,
            joltages,
        })
    }

    /// Cheapest set of buttons whose toggles XOR to the target pattern,
    /// or `None` when the target is outside the buttons' span.
    ///
    /// Gaussian elimination over GF(2) brings the augmented matrix (one
    /// row per light, one column per button plus the target) to reduced
    /// row echelon form. Columns without a pivot are free; all `2^F`
    /// assignments are swept and back-substituted, keeping the solution
    /// with the fewest presses. Puzzle inputs leave few columns free,
    /// so the exhaustive sweep stays small.
    fn minimal_light_solution(&self) -> Option<MatrixRow> {
        let n = self.buttons.len();

        let mut rows: Vec<MatrixRow> = (0..self.lights)
            .map(|light| {
                let mut row = bv::bitarr![0; COLS];
                for (b, button) in self.buttons.iter().enumerate() {
                    if button[light] {
                        row.set(b, true);
                    }
                }
                row.set(n, self.target[light]);
                row
            })
            .collect();

        // Row swaps and row XORs are invertible over GF(2), so the
        // solution set is preserved throughout.
        let mut pivot_cols: Vec<usize> = Vec::new();
        for col in 0..n {
            let current = pivot_cols.len();
            let Some(pivot) = (current..rows.len()).find(|&r| rows[r][col]) else {
                continue;
            };
            rows.swap(current, pivot);
            let pivot_row = rows[current];
            for (r, row) in rows.iter_mut().enumerate() {
                if r != current && row[col] {
                    *row ^= pivot_row;
                }
            }
            pivot_cols.push(col);
        }

        // A cleared coefficient row still demanding a toggle cannot be
        // satisfied.
        if rows[pivot_cols.len()..].iter().any(|row| row[n]) {
            return None;
        }

        let free: Vec<usize> = (0..n).filter(|c| !pivot_cols.contains(c)).collect();

        let mut best: Option<MatrixRow> = None;
        for mask in 0u128..1 << free.len() {
            let mut solution = bv::bitarr![0; COLS];
            for (bit, &col) in free.iter().enumerate() {
                if mask >> bit & 1 == 1 {
                    solution.set(col, true);
                }
            }
            // Back-substitution: in reduced form a pivot row only
            // overlaps the solution on free columns and its own pivot,
            // which is decided last.
            for (i, &col) in pivot_cols.iter().enumerate() {
                let mut overlap = rows[i];
                overlap &= solution;
                let parity = overlap.count_ones() % 2 == 1;
                solution.set(col, rows[i][n] != parity);
            }
            if best.is_none_or(|b| solution.count_ones() < b.count_ones()) {
                best = Some(solution);
            }
        }
        best
    }

    /// Fewest total presses meeting every joltage target exactly, where
    /// each press adds one to every counter the button covers.
    fn minimal_joltage_presses(&self) -> Option<u64> {
        let mut program = IntegerProgram::new(vec![1; self.buttons.len()]);
        for (light, &target) in self.joltages.iter().enumerate() {
            let coefficients = self.buttons.iter().map(|b| b[light] as u64).collect();
            program.require_eq(coefficients, target);
        }
        program.minimize().map(|solution| solution.cost)
    }
}

#[derive(Debug, Error)]
enum MachineError {
    #[error("no button combination lights machine {0}'s target pattern")]
    Lights(usize),
    #[error("no press counts reach machine {0}'s joltage targets")]
    Joltages(usize),
}

/// Machines are independent; the first unsolvable one fails the total.
fn total_light_presses(machines: &[Machine]) -> Result<u64, MachineError> {
    machines.iter().enumerate().try_fold(0u64, |acc, (i, m)| {
        let solution = m.minimal_light_solution().ok_or(MachineError::Lights(i))?;
        Ok(acc + solution.count_ones() as u64)
    })
}

fn total_joltage_presses(machines: &[Machine]) -> Result<u64, MachineError> {
    machines.iter().enumerate().try_fold(0u64, |acc, (i, m)| {
        Ok(acc + m.minimal_joltage_presses().ok_or(MachineError::Joltages(i))?)
    })
}

impl Puzzle for Solver {
    type Model<'a> = Vec<Machine>;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Model<'_>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(i, line)| {
                Machine::parse(line.trim())
                    .map_err(|e| ParseError::InvalidFormat(format!("line {}: {}", i + 1, e)))
            })
            .collect()
    }

    fn solve_part(model: &mut Self::Model<'_>, part: u8) -> Result<String, SolveError> {
        let total = match part {
            1 => total_light_presses(model),
            2 => total_joltage_presses(model),
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        total
            .map(|t| t.to_string())
            .map_err(|e| SolveError::Failed(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Puzzle;
    use proptest::prelude::*;

    const EXAMPLE: &str = "\
[.##.] (3) (1,3) (2) (2,3) (0,2) (0,1) {3,5,4,7}
[...#.] (0,2,3,4) (2,3) (0,4) (0,1,2) (1,2,3,4) {7,5,12,7,2}
[.###.#] (0,1,2,3,4) (0,3,4) (0,1,2,4,5) (1,2) {10,11,11,5,10,5}";

    /// Light pattern after pressing the buttons selected in `presses`.
    fn lights_after(machine: &Machine, presses: MatrixRow) -> LightRow {
        let mut state = bv::bitarr![0; MAX_LIGHTS];
        for (b, button) in machine.buttons.iter().enumerate() {
            if presses[b] {
                state ^= *button;
            }
        }
        state
    }

    #[test]
    fn example_totals() {
        let mut model = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut model, 1).unwrap(), "7");
        assert_eq!(Solver::solve_part(&mut model, 2).unwrap(), "33");
    }

    #[test]
    fn example_machines_individually() {
        let machines = Solver::parse(EXAMPLE).unwrap();
        let light_presses: Vec<usize> = machines
            .iter()
            .map(|m| m.minimal_light_solution().unwrap().count_ones())
            .collect();
        assert_eq!(light_presses, vec![2, 3, 2]);

        let joltage_presses: Vec<u64> = machines
            .iter()
            .map(|m| m.minimal_joltage_presses().unwrap())
            .collect();
        assert_eq!(joltage_presses, vec![10, 12, 11]);
    }

    #[test]
    fn minimal_solutions_reproduce_the_target() {
        let machines = Solver::parse(EXAMPLE).unwrap();
        for machine in &machines {
            let solution = machine.minimal_light_solution().unwrap();
            assert_eq!(lights_after(machine, solution), machine.target);
        }
    }

    #[test]
    fn solving_is_deterministic() {
        let machines = Solver::parse(EXAMPLE).unwrap();
        for machine in &machines {
            assert_eq!(
                machine.minimal_light_solution(),
                machine.minimal_light_solution()
            );
        }
    }

    #[test]
    fn dark_target_needs_no_presses() {
        let machines = Solver::parse("[....] (0,1) (2,3) {0,0,0,0}").unwrap();
        assert_eq!(
            machines[0].minimal_light_solution().unwrap().count_ones(),
            0
        );
        assert_eq!(machines[0].minimal_joltage_presses(), Some(0));
    }

    #[test]
    fn unreachable_pattern_is_infeasible() {
        // The only button never touches light 1.
        let machines = Solver::parse("[.#] (0) {1,0}").unwrap();
        assert_eq!(machines[0].minimal_light_solution(), None);
    }

    #[test]
    fn contradictory_joltages_are_infeasible() {
        // One button feeds both counters but the targets differ.
        let machines = Solver::parse("[..] (0,1) {1,2}").unwrap();
        assert_eq!(machines[0].minimal_joltage_presses(), None);
    }

    #[test]
    fn one_bad_machine_fails_the_whole_part() {
        let input = "[#] (0) {1}\n[.#] (0) {1,0}";
        let mut model = Solver::parse(input).unwrap();
        assert_eq!(Solver::solve_part(&mut model, 1).unwrap_err().to_string(),
            "solve failed: no button combination lights machine 1's target pattern");

        let mut model = Solver::parse("[#] (0) {1}\n[..] (0,1) {1,2}").unwrap();
        assert!(Solver::solve_part(&mut model, 2).is_err());
    }

    #[test]
    fn malformed_machines_are_parse_errors() {
        // Out-of-range light index.
        assert!(Solver::parse("[.#] (2) {1,0}").is_err());
        // Joltage count does not match the lights.
        assert!(Solver::parse("[.#] (0) {1}").is_err());
        // No buttons at all.
        assert!(Solver::parse("[.#] {1,0}").is_err());
        // Duplicate toggle in one button.
        assert!(Solver::parse("[.#] (0,0) {1,0}").is_err());
        // Unknown pattern character.
        assert!(Solver::parse("[.x] (0) {1,0}").is_err());
    }

    fn machine_from_bools(buttons: &[Vec<bool>], pressed: &[bool]) -> Machine {
        let lights = buttons[0].len();
        let button_rows: Vec<LightRow> = buttons
            .iter()
            .map(|toggles| {
                let mut row = bv::bitarr![0; MAX_LIGHTS];
                for (i, &t) in toggles.iter().enumerate() {
                    if t {
                        row.set(i, true);
                    }
                }
                row
            })
            .collect();
        let mut target = bv::bitarr![0; MAX_LIGHTS];
        for (row, &press) in button_rows.iter().zip(pressed) {
            if press {
                target ^= *row;
            }
        }
        Machine {
            lights,
            target,
            buttons: button_rows,
            joltages: vec![0; lights],
        }
    }

    proptest! {
        // A target built by pressing a known subset must be solvable
        // with at most that many presses, and the returned set must
        // reproduce it exactly.
        #[test]
        fn reachable_targets_round_trip(
            (buttons, pressed) in (1usize..=5, 1usize..=6).prop_flat_map(|(lights, count)| {
                (
                    prop::collection::vec(prop::collection::vec(any::<bool>(), lights), count),
                    prop::collection::vec(any::<bool>(), count),
                )
            })
        ) {
            let machine = machine_from_bools(&buttons, &pressed);
            let solution = machine.minimal_light_solution().expect("target is reachable");
            let planted = pressed.iter().filter(|&&p| p).count();
            prop_assert!(solution.count_ones() <= planted);
            prop_assert_eq!(lights_after(&machine, solution), machine.target);
        }
    }
}
