//! Day 7: Laboratories
//!
//! A tachyon beam enters at `S` and travels straight down. A splitter
//! (`^`) stops the beam and emits two new downward beams from its left
//! and right neighbors. Part 1 counts splitter activations; part 2
//! counts the distinct timelines of a single particle under the
//! many-worlds reading.

use crate::utils::grid::{Grid, Pos};
use advent_solver::{ParseError, Puzzle, SolveError};
use advent_solver_macros::AutoRegisterPuzzle;
use std::collections::{HashMap, HashSet, VecDeque};
use thiserror::Error;

#[derive(AutoRegisterPuzzle)]
#[puzzle(year = 2025, day = 7, tags = ["grid", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Start,
    Splitter,
}

#[derive(Debug, Error)]
enum ManifoldParseError {
    #[error("unsupported character '{0}', expected '.', 'S' or '^'")]
    UnknownCell(char),
    #[error("manifold has no 'S' entry point")]
    NoStart,
}

impl Cell {
    fn parse(c: char) -> Result<Self, ManifoldParseError> {
        match c {
            '.' => Ok(Cell::Empty),
            'S' => Ok(Cell::Start),
            '^' => Ok(Cell::Splitter),
            _ => Err(ManifoldParseError::UnknownCell(c)),
        }
    }
}

#[derive(Debug)]
pub struct Model {
    grid: Grid<Cell>,
    start: Pos,
}

/// Count splitter activations; each splitter fires at most once per
/// incoming column thanks to the visited set.
fn count_splits(grid: &Grid<Cell>, start: Pos) -> u64 {
    let mut beams = VecDeque::from([start]);
    let mut visited: HashSet<Pos> = HashSet::new();
    let mut splits = 0;

    while let Some(pos) = beams.pop_front() {
        if !visited.insert(pos) {
            continue;
        }
        let below = Pos {
            row: pos.row + 1,
            col: pos.col,
        };
        match grid.get(below) {
            // The beam leaves the manifold.
            None => continue,
            Some(Cell::Splitter) => {
                splits += 1;
                if below.col > 0 {
                    beams.push_back(Pos {
                        row: below.row,
                        col: below.col - 1,
                    });
                }
                if below.col + 1 < grid.width() {
                    beams.push_back(Pos {
                        row: below.row,
                        col: below.col + 1,
                    });
                }
            }
            Some(_) => beams.push_back(below),
        }
    }

    splits
}

/// Timelines from `pos` to any exit; memoized since split branches
/// reconverge constantly.
fn timelines(grid: &Grid<Cell>, memo: &mut HashMap<Pos, u64>, pos: Pos) -> u64 {
    if let Some(&known) = memo.get(&pos) {
        return known;
    }
    let below = Pos {
        row: pos.row + 1,
        col: pos.col,
    };
    let count = match grid.get(below) {
        None => 1,
        Some(Cell::Splitter) => {
            let left = if below.col > 0 {
                timelines(
                    grid,
                    memo,
                    Pos {
                        row: below.row,
                        col: below.col - 1,
                    },
                )
            } else {
                0
            };
            let right = if below.col + 1 < grid.width() {
                timelines(
                    grid,
                    memo,
                    Pos {
                        row: below.row,
                        col: below.col + 1,
                    },
                )
            } else {
                0
            };
            left + right
        }
        Some(_) => timelines(grid, memo, below),
    };
    memo.insert(pos, count);
    count
}

impl Puzzle for Solver {
    type Model<'a> = Model;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Model<'_>, ParseError> {
        let grid =
            Grid::parse(input, Cell::parse).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let start = grid
            .positions()
            .find(|&pos| grid.get(pos) == Some(&Cell::Start))
            .ok_or_else(|| ParseError::InvalidFormat(ManifoldParseError::NoStart.to_string()))?;
        Ok(Model { grid, start })
    }

    fn solve_part(model: &mut Self::Model<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(count_splits(&model.grid, model.start).to_string()),
            2 => {
                let mut memo = HashMap::new();
                Ok(timelines(&model.grid, &mut memo, model.start).to_string())
            }
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Puzzle;

    const EXAMPLE: &str = ".S...\n.....\n.^...\n.....\n..^..";

    #[test]
    fn counts_each_splitter_once() {
        let mut model = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut model, 1).unwrap(), "2");
    }

    #[test]
    fn counts_timelines() {
        // The left branch exits; the right branch splits again.
        let mut model = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut model, 2).unwrap(), "3");
    }

    #[test]
    fn edge_splitters_drop_out_of_bounds_branches() {
        let mut model = Solver::parse("S....\n.....\n^....").unwrap();
        assert_eq!(Solver::solve_part(&mut model, 1).unwrap(), "1");
        assert_eq!(Solver::solve_part(&mut model, 2).unwrap(), "1");
    }

    #[test]
    fn rejects_missing_start() {
        assert!(Solver::parse("...\n.^.").is_err());
        assert!(Solver::parse(".S?\n...").is_err());
    }
}
