//! Core puzzle trait

use crate::error::{ParseError, SolveError};

/// A single year-day puzzle: input parsing plus per-part solving.
///
/// The model is a generic associated type so solvers can choose their
/// ownership strategy: an owned struct for transformed data, or a type
/// borrowing from the input (`&'a str`, `Vec<&'a str>`) when no
/// transformation is needed. `solve_part` takes the model mutably so
/// parts may cache intermediate results shared between them.
pub trait Puzzle {
    /// Parsed representation of the puzzle input.
    type Model<'a>;

    /// Number of parts this puzzle implements (1 or 2 for AoC).
    const PARTS: u8;

    /// Parse raw input into the model.
    fn parse(input: &str) -> Result<Self::Model<'_>, ParseError>;

    /// Solve one part of the puzzle.
    ///
    /// Returns the answer rendered as a string, or
    /// [`SolveError::PartNotImplemented`] for parts within range that
    /// have no implementation yet.
    fn solve_part(model: &mut Self::Model<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked solving, implemented for every [`Puzzle`].
pub trait PuzzleExt: Puzzle {
    /// Solve a part, rejecting part numbers outside `1..=PARTS`.
    fn solve_part_checked(model: &mut Self::Model<'_>, part: u8) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(model, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<P: Puzzle + ?Sized> PuzzleExt for P {}
