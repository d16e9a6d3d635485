//! Day 4: Printing Department
//!
//! Paper rolls (`@`) sit on a warehouse floor. A forklift can reach a
//! roll with fewer than four occupied neighbors (all eight directions).
//! Part 2 removes every reachable roll at once and repeats until the
//! pile stops shrinking.

use crate::utils::grid::{Grid, Pos};
use advent_solver::{ParseError, Puzzle, SolveError};
use advent_solver_macros::AutoRegisterPuzzle;
use thiserror::Error;

#[derive(AutoRegisterPuzzle)]
#[puzzle(year = 2025, day = 4, tags = ["grid"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Floor,
    Roll,
}

#[derive(Debug, Error)]
#[error("unsupported character '{0}', expected '.' or '@'")]
struct CellParseError(char);

impl Cell {
    fn parse(c: char) -> Result<Self, CellParseError> {
        match c {
            '.' => Ok(Cell::Floor),
            '@' => Ok(Cell::Roll),
            _ => Err(CellParseError(c)),
        }
    }
}

const ACCESS_LIMIT: usize = 4;

fn adjacent_rolls(grid: &Grid<Cell>, pos: Pos) -> usize {
    grid.neighbors8(pos)
        .filter(|&p| grid.get(p) == Some(&Cell::Roll))
        .count()
}

fn accessible_rolls(grid: &Grid<Cell>) -> Vec<Pos> {
    grid.positions()
        .filter(|&pos| {
            grid.get(pos) == Some(&Cell::Roll) && adjacent_rolls(grid, pos) < ACCESS_LIMIT
        })
        .collect()
}

/// Remove every accessible roll simultaneously until none remain.
fn clear_out(mut grid: Grid<Cell>) -> usize {
    let mut removed = 0;
    loop {
        let accessible = accessible_rolls(&grid);
        if accessible.is_empty() {
            return removed;
        }
        removed += accessible.len();
        for pos in accessible {
            if let Some(cell) = grid.get_mut(pos) {
                *cell = Cell::Floor;
            }
        }
    }
}

impl Puzzle for Solver {
    type Model<'a> = Grid<Cell>;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Model<'_>, ParseError> {
        Grid::parse(input, Cell::parse).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }

    fn solve_part(model: &mut Self::Model<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(accessible_rolls(model).len().to_string()),
            2 => Ok(clear_out(model.clone()).to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Puzzle;

    const EXAMPLE: &str = "@@.\n@@@\n.@@";

    #[test]
    fn counts_accessible_rolls() {
        let mut model = Solver::parse(EXAMPLE).unwrap();
        // Only the two diagonal corners have fewer than four neighbors.
        assert_eq!(Solver::solve_part(&mut model, 1).unwrap(), "2");
    }

    #[test]
    fn clears_the_whole_pile_in_waves() {
        let mut model = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut model, 2).unwrap(), "7");
    }

    #[test]
    fn dense_block_keeps_its_core() {
        // Only the four corners of a 3x3 block start accessible, but
        // the waves eventually peel everything away.
        let mut model = Solver::parse("@@@\n@@@\n@@@").unwrap();
        assert_eq!(Solver::solve_part(&mut model, 1).unwrap(), "4");
        assert_eq!(Solver::solve_part(&mut model, 2).unwrap(), "9");
    }

    #[test]
    fn rejects_unknown_characters() {
        assert!(Solver::parse("@#.").is_err());
    }
}
