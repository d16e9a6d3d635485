//! Advent of Code solver framework
//!
//! Each puzzle is a type implementing [`Puzzle`]: it declares how raw input
//! is parsed into a model and how each part is solved from that model.
//! Solvers are collected into a [`PuzzleRegistry`] keyed by (year, day),
//! either explicitly through the builder or automatically through the
//! `inventory`-backed plugin system and the [`AutoRegisterPuzzle`] derive.
//!
//! The registry hands out type-erased [`DynPuzzle`] instances that carry
//! parse and solve timings, so a runner can report per-part durations
//! without knowing anything about the concrete solver.
//!
//! # Example
//!
//! ```
//! use advent_solver::{ParseError, Puzzle, RegistryBuilder, SolveError};
//!
//! struct Calibration;
//!
//! impl Puzzle for Calibration {
//!     type Model<'a> = Vec<i64>;
//!     const PARTS: u8 = 2;
//!
//!     fn parse(input: &str) -> Result<Self::Model<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.trim()
//!                     .parse()
//!                     .map_err(|_| ParseError::InvalidFormat(line.to_string()))
//!             })
//!             .collect()
//!     }
//!
//!     fn solve_part(model: &mut Self::Model<'_>, part: u8) -> Result<String, SolveError> {
//!         match part {
//!             1 => Ok(model.iter().sum::<i64>().to_string()),
//!             2 => Ok(model.iter().product::<i64>().to_string()),
//!             _ => Err(SolveError::PartNotImplemented(part)),
//!         }
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .with::<Calibration>(2025, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create(2025, 1, "2\n3\n4").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "9");
//! assert_eq!(solver.solve(2).unwrap().answer, "24");
//! ```

mod error;
mod instance;
mod registry;
mod solver;

pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynPuzzle, PuzzleInstance, SolveOutput};
pub use registry::{
    BASE_YEAR, DAYS_PER_YEAR, MAX_YEARS, PuzzleInfo, PuzzlePlugin, PuzzleRegistry,
    RegisterablePuzzle, RegistryBuilder,
};
pub use solver::{Puzzle, PuzzleExt};

// Re-exported for the derive macro's generated code.
pub use inventory;

pub use advent_solver_macros::AutoRegisterPuzzle;
