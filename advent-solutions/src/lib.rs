//! Advent of Code 2025 puzzle solutions with automatic registration
//!
//! One module per day under [`year_2025`], each exposing a `Solver` type
//! that implements `advent_solver::Puzzle` and registers itself through
//! the `AutoRegisterPuzzle` derive. Shared helpers (grid, disjoint-set
//! forest, exact integer programming) live under [`utils`].

pub mod utils;
pub mod year_2025;
