//! Type-erased puzzle instances with timing

use crate::error::{ParseError, SolveError};
use crate::solver::{Puzzle, PuzzleExt};
use chrono::{DateTime, TimeDelta, Utc};

/// Answer for one part, with the solve timestamps that produced it.
#[derive(Debug, Clone)]
pub struct SolveOutput {
    pub answer: String,
    pub solve_start: DateTime<Utc>,
    pub solve_end: DateTime<Utc>,
}

impl SolveOutput {
    pub fn duration(&self) -> TimeDelta {
        self.solve_end - self.solve_start
    }
}

/// A parsed puzzle ready to solve, holding the model and parse timestamps.
pub struct PuzzleInstance<'a, P: Puzzle> {
    year: u16,
    day: u8,
    model: P::Model<'a>,
    parse_start: DateTime<Utc>,
    parse_end: DateTime<Utc>,
}

impl<'a, P: Puzzle> PuzzleInstance<'a, P> {
    /// Parse `input` and record how long parsing took.
    pub fn new(year: u16, day: u8, input: &'a str) -> Result<Self, ParseError> {
        let parse_start = Utc::now();
        let model = P::parse(input)?;
        let parse_end = Utc::now();

        Ok(Self {
            year,
            day,
            model,
            parse_start,
            parse_end,
        })
    }
}

/// Uniform interface over puzzle instances of any concrete type.
///
/// The registry returns `Box<dyn DynPuzzle>` so runners can iterate
/// heterogeneous solvers, solve parts, and read timings through one
/// interface.
pub trait DynPuzzle {
    /// Solve the given part, timing the computation.
    fn solve(&mut self, part: u8) -> Result<SolveOutput, SolveError>;

    fn parse_start(&self) -> DateTime<Utc>;

    fn parse_end(&self) -> DateTime<Utc>;

    fn year(&self) -> u16;

    fn day(&self) -> u8;

    /// Number of parts the underlying solver implements.
    fn parts(&self) -> u8;

    fn parse_duration(&self) -> TimeDelta {
        self.parse_end() - self.parse_start()
    }
}

impl<'a, P: Puzzle> DynPuzzle for PuzzleInstance<'a, P> {
    fn solve(&mut self, part: u8) -> Result<SolveOutput, SolveError> {
        let solve_start = Utc::now();
        let answer = P::solve_part_checked(&mut self.model, part)?;
        let solve_end = Utc::now();

        Ok(SolveOutput {
            answer,
            solve_start,
            solve_end,
        })
    }

    fn parse_start(&self) -> DateTime<Utc> {
        self.parse_start
    }

    fn parse_end(&self) -> DateTime<Utc> {
        self.parse_end
    }

    fn year(&self) -> u16 {
        self.year
    }

    fn day(&self) -> u8 {
        self.day
    }

    fn parts(&self) -> u8 {
        P::PARTS
    }
}
