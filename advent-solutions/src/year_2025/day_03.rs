//! Day 3: Lobby
//!
//! Each battery bank is a string of digits. Turning on a fixed number of
//! batteries (two in part 1, twelve in part 2) reads their digits in
//! order as one number; the bank's joltage is the maximum achievable.

use advent_solver::{ParseError, Puzzle, SolveError};
use advent_solver_macros::AutoRegisterPuzzle;
use thiserror::Error;

#[derive(AutoRegisterPuzzle)]
#[puzzle(year = 2025, day = 3, tags = ["greedy"])]
pub struct Solver;

#[derive(Debug)]
pub struct BatteryBank {
    batteries: Vec<u8>,
}

#[derive(Debug, Error)]
#[error("expected a string of digits, got '{0}'")]
struct BankParseError(String);

impl BatteryBank {
    fn parse(input: &str) -> Result<Self, BankParseError> {
        let batteries = input
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or_else(|| BankParseError(input.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { batteries })
    }

    /// Largest number readable by turning on exactly `picks` batteries
    /// in their original order.
    ///
    /// Greedy per output digit: take the largest digit that still
    /// leaves enough batteries to fill the remaining positions; ties
    /// resolve to the leftmost occurrence, which can only widen later
    /// choices.
    fn best_joltage(&self, picks: usize) -> Option<u64> {
        if picks > self.batteries.len() {
            return None;
        }

        let mut value = 0u64;
        let mut start = 0;
        for remaining in (0..picks).rev() {
            let end = self.batteries.len() - remaining;
            let mut best_idx = start;
            for i in start..end {
                if self.batteries[i] > self.batteries[best_idx] {
                    best_idx = i;
                }
            }
            value = value * 10 + self.batteries[best_idx] as u64;
            start = best_idx + 1;
        }
        Some(value)
    }
}

impl Puzzle for Solver {
    type Model<'a> = Vec<BatteryBank>;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Model<'_>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(i, line)| {
                BatteryBank::parse(line.trim())
                    .map_err(|e| ParseError::InvalidFormat(format!("line {}: {}", i + 1, e)))
            })
            .collect()
    }

    fn solve_part(model: &mut Self::Model<'_>, part: u8) -> Result<String, SolveError> {
        let picks = match part {
            1 => 2,
            2 => 12,
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        let mut total = 0u64;
        for (i, bank) in model.iter().enumerate() {
            total += bank.best_joltage(picks).ok_or_else(|| {
                SolveError::Failed(
                    format!("bank {} has fewer than {} batteries", i + 1, picks).into(),
                )
            })?;
        }
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Puzzle;

    fn bank(digits: &str) -> BatteryBank {
        BatteryBank::parse(digits).unwrap()
    }

    #[test]
    fn greedy_keeps_order() {
        assert_eq!(bank("2914").best_joltage(2), Some(94));
        // Taking the early 9 beats saving room for the late 8s.
        assert_eq!(bank("39878").best_joltage(3), Some(988));
        assert_eq!(bank("987").best_joltage(2), Some(98));
    }

    #[test]
    fn short_banks_are_rejected() {
        assert_eq!(bank("5").best_joltage(2), None);
    }

    #[test]
    fn part1_sums_bank_joltages() {
        let mut model = Solver::parse("2914\n987").unwrap();
        assert_eq!(Solver::solve_part(&mut model, 1).unwrap(), "192");
    }

    #[test]
    fn part2_selects_twelve_digits() {
        let mut model = Solver::parse("111111111111").unwrap();
        assert_eq!(Solver::solve_part(&mut model, 2).unwrap(), "111111111111");

        let mut short = Solver::parse("123").unwrap();
        assert!(Solver::solve_part(&mut short, 2).is_err());
    }

    #[test]
    fn rejects_non_digit_banks() {
        assert!(Solver::parse("12a4").is_err());
    }
}
