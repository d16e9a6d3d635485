//! Day 5: Cafeteria
//!
//! Freshness is defined by inclusive id ranges. Part 1 checks the
//! delivered ingredient ids against them; part 2 counts every id the
//! merged ranges cover.

use advent_solver::{ParseError, Puzzle, SolveError};
use advent_solver_macros::AutoRegisterPuzzle;
use thiserror::Error;

#[derive(AutoRegisterPuzzle)]
#[puzzle(year = 2025, day = 5, tags = ["ranges"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FreshRange {
    start: u64,
    end: u64,
}

#[derive(Debug, Error)]
enum FreshRangeParseError {
    #[error("expected '<start>-<end>', got '{0}'")]
    WrongFormat(String),
    #[error("range end precedes start: '{0}-{1}'")]
    Reversed(u64, u64),
}

impl FreshRange {
    fn parse(input: &str) -> Result<Self, FreshRangeParseError> {
        let (start, end) = input
            .split_once('-')
            .ok_or_else(|| FreshRangeParseError::WrongFormat(input.to_string()))?;
        let start = start
            .parse()
            .map_err(|_| FreshRangeParseError::WrongFormat(input.to_string()))?;
        let end = end
            .parse()
            .map_err(|_| FreshRangeParseError::WrongFormat(input.to_string()))?;
        if end < start {
            return Err(FreshRangeParseError::Reversed(start, end));
        }
        Ok(Self { start, end })
    }

    fn contains(self, id: u64) -> bool {
        self.start <= id && id <= self.end
    }
}

#[derive(Debug)]
pub struct Model {
    ranges: Vec<FreshRange>,
    available: Vec<u64>,
}

/// Merge overlapping or adjacent ranges into disjoint ones.
fn merged(ranges: &[FreshRange]) -> Vec<FreshRange> {
    let mut sorted = ranges.to_vec();
    sorted.sort_unstable();

    let mut merged: Vec<FreshRange> = Vec::with_capacity(sorted.len());
    for range in sorted {
        match merged.last_mut() {
            Some(last) if range.start <= last.end.saturating_add(1) => {
                last.end = last.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }
    merged
}

impl Puzzle for Solver {
    type Model<'a> = Model;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Model<'_>, ParseError> {
        let (ranges, available) = input
            .trim()
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("expected ranges and ids blocks".into()))?;

        let ranges = ranges
            .lines()
            .map(|line| {
                FreshRange::parse(line.trim())
                    .map_err(|e| ParseError::InvalidFormat(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let available = available
            .lines()
            .map(|line| {
                line.trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("bad id '{}'", line.trim())))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Model { ranges, available })
    }

    fn solve_part(model: &mut Self::Model<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => {
                let fresh = model
                    .available
                    .iter()
                    .filter(|&&id| model.ranges.iter().any(|r| r.contains(id)))
                    .count();
                Ok(fresh.to_string())
            }
            2 => {
                let covered: u64 = merged(&model.ranges)
                    .iter()
                    .map(|r| r.end - r.start + 1)
                    .sum();
                Ok(covered.to_string())
            }
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Puzzle;

    const EXAMPLE: &str = "3-5\n10-14\n4-8\n\n1\n5\n9\n12";

    #[test]
    fn counts_fresh_deliveries() {
        let mut model = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut model, 1).unwrap(), "2");
    }

    #[test]
    fn merged_ranges_count_unique_ids() {
        let mut model = Solver::parse(EXAMPLE).unwrap();
        // 3-8 and 10-14.
        assert_eq!(Solver::solve_part(&mut model, 2).unwrap(), "11");
    }

    #[test]
    fn adjacent_ranges_merge() {
        let mut model = Solver::parse("1-2\n3-4\n\n1").unwrap();
        assert_eq!(Solver::solve_part(&mut model, 2).unwrap(), "4");
    }

    #[test]
    fn rejects_missing_blocks_and_bad_ranges() {
        assert!(Solver::parse("1-2\n3-4").is_err());
        assert!(Solver::parse("5-2\n\n1").is_err());
    }
}
