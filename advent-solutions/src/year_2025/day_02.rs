//! Day 2: Gift Shop
//!
//! Product id ranges hide invalid ids whose decimal digits are a block
//! repeated exactly twice (part 1) or at least twice (part 2).

use advent_solver::{ParseError, Puzzle, SolveError};
use advent_solver_macros::AutoRegisterPuzzle;
use thiserror::Error;

#[derive(AutoRegisterPuzzle)]
#[puzzle(year = 2025, day = 2, tags = ["digits"])]
pub struct Solver;

#[derive(Debug, Clone, Copy)]
pub struct IdRange {
    start: u64,
    end: u64,
}

#[derive(Debug, Error)]
enum RangeParseError {
    #[error("expected '<start>-<end>', got '{0}'")]
    WrongFormat(String),
    #[error("range end precedes start: '{0}-{1}'")]
    Reversed(u64, u64),
}

impl IdRange {
    fn parse(input: &str) -> Result<Self, RangeParseError> {
        let (start, end) = input
            .split_once('-')
            .ok_or_else(|| RangeParseError::WrongFormat(input.to_string()))?;
        let start = start
            .parse()
            .map_err(|_| RangeParseError::WrongFormat(input.to_string()))?;
        let end = end
            .parse()
            .map_err(|_| RangeParseError::WrongFormat(input.to_string()))?;
        if end < start {
            return Err(RangeParseError::Reversed(start, end));
        }
        Ok(Self { start, end })
    }

    fn ids(self) -> impl Iterator<Item = u64> {
        self.start..=self.end
    }
}

/// A digit block repeated exactly twice, e.g. 11 or 6464.
fn is_doubled(id: u64) -> bool {
    let digits = id.to_string();
    if digits.len() % 2 != 0 {
        return false;
    }
    let (head, tail) = digits.split_at(digits.len() / 2);
    head == tail
}

/// A digit block repeated two or more times, e.g. 111 or 1212121212.
fn is_repeated(id: u64) -> bool {
    let digits = id.to_string();
    let len = digits.len();
    (1..=len / 2)
        .filter(|block| len % block == 0)
        .any(|block| {
            let pattern = &digits.as_bytes()[..block];
            digits.as_bytes().chunks(block).all(|chunk| chunk == pattern)
        })
}

impl Puzzle for Solver {
    type Model<'a> = Vec<IdRange>;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Model<'_>, ParseError> {
        input
            .trim()
            .split(',')
            .map(|part| {
                IdRange::parse(part.trim()).map_err(|e| ParseError::InvalidFormat(e.to_string()))
            })
            .collect()
    }

    fn solve_part(model: &mut Self::Model<'_>, part: u8) -> Result<String, SolveError> {
        let invalid: fn(u64) -> bool = match part {
            1 => is_doubled,
            2 => is_repeated,
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        let total: u64 = model
            .iter()
            .flat_map(|range| range.ids())
            .filter(|&id| invalid(id))
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Puzzle;

    #[test]
    fn doubled_blocks() {
        assert!(is_doubled(11));
        assert!(is_doubled(6464));
        assert!(is_doubled(123123));
        assert!(!is_doubled(101));
        assert!(!is_doubled(111));
    }

    #[test]
    fn repeated_blocks() {
        assert!(is_repeated(11));
        assert!(is_repeated(111));
        assert!(is_repeated(123123123));
        assert!(is_repeated(1212121212));
        assert!(!is_repeated(101));
        assert!(!is_repeated(1213));
    }

    #[test]
    fn sums_invalid_ids_in_ranges() {
        let mut model = Solver::parse("95-115").unwrap();
        // Exactly twice: only 99. At least twice adds 111.
        assert_eq!(Solver::solve_part(&mut model, 1).unwrap(), "99");
        assert_eq!(Solver::solve_part(&mut model, 2).unwrap(), "210");
    }

    #[test]
    fn handles_multiple_ranges() {
        let mut model = Solver::parse("10-12, 20-22").unwrap();
        // 11 and 22 are doubled.
        assert_eq!(Solver::solve_part(&mut model, 1).unwrap(), "33");
    }

    #[test]
    fn rejects_reversed_and_garbled_ranges() {
        assert!(Solver::parse("12-3").is_err());
        assert!(Solver::parse("12:34").is_err());
    }
}
