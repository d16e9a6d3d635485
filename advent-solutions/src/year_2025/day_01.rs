//! Day 1: Secret Entrance
//!
//! A safe dial numbered 0-99 starts at 50 and follows `L`/`R` rotation
//! instructions. Part 1 counts how often the dial rests on 0 after a
//! rotation; part 2 counts every time it touches 0, including passes in
//! the middle of a rotation.

use advent_solver::{ParseError, Puzzle, SolveError};
use advent_solver_macros::AutoRegisterPuzzle;
use anyhow::anyhow;

#[derive(AutoRegisterPuzzle)]
#[puzzle(year = 2025, day = 1, tags = ["simulation"])]
pub struct Solver;

const DIAL_SIZE: i64 = 100;
const START: i64 = 50;

#[derive(Debug, Clone, Copy)]
enum Rotation {
    Left(i64),
    Right(i64),
}

impl Rotation {
    fn parse(line: &str) -> anyhow::Result<Self> {
        let bad = || anyhow!("expected '(L|R)<distance>', got '{line}'");
        let (dir, distance) = line.split_at_checked(1).ok_or_else(bad)?;
        let distance: i64 = distance.parse().map_err(|_| bad())?;
        if distance < 0 {
            return Err(bad());
        }
        match dir {
            "L" => Ok(Self::Left(distance)),
            "R" => Ok(Self::Right(distance)),
            _ => Err(bad()),
        }
    }
}

#[derive(Debug)]
pub struct Model {
    rotations: Vec<Rotation>,
    spun: Option<(u64, u64)>,
}

impl Puzzle for Solver {
    type Model<'a> = Model;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Model<'_>, ParseError> {
        let rotations = input
            .trim()
            .lines()
            .enumerate()
            .map(|(i, line)| {
                Rotation::parse(line.trim())
                    .map_err(|e| ParseError::InvalidFormat(format!("line {}: {}", i + 1, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Model {
            rotations,
            spun: None,
        })
    }

    fn solve_part(model: &mut Self::Model<'_>, part: u8) -> Result<String, SolveError> {
        let (rests, touches) = spun(model);
        match part {
            1 => Ok(rests.to_string()),
            2 => Ok(touches.to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

/// Both answers come from the same sweep, so it runs once per model.
fn spun(model: &mut Model) -> (u64, u64) {
    *model.spun.get_or_insert_with(|| spin(&model.rotations))
}

fn spin(rotations: &[Rotation]) -> (u64, u64) {
    let mut position = START;
    let mut rests = 0;
    let mut touches = 0;

    for &rotation in rotations {
        let distance = match rotation {
            Rotation::Left(d) | Rotation::Right(d) => d,
        };
        // Steps until the dial first points at zero in this direction.
        let to_zero = match rotation {
            Rotation::Left(_) if position == 0 => DIAL_SIZE,
            Rotation::Left(_) => position,
            Rotation::Right(_) => DIAL_SIZE - position,
        };
        if distance >= to_zero {
            touches += (1 + (distance - to_zero) / DIAL_SIZE) as u64;
        }

        position = match rotation {
            Rotation::Left(d) => (position - d).rem_euclid(DIAL_SIZE),
            Rotation::Right(d) => (position + d).rem_euclid(DIAL_SIZE),
        };
        if position == 0 {
            rests += 1;
        }
    }

    (rests, touches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Puzzle;

    fn answers(input: &str) -> (String, String) {
        let mut model = Solver::parse(input).unwrap();
        (
            Solver::solve_part(&mut model, 1).unwrap(),
            Solver::solve_part(&mut model, 2).unwrap(),
        )
    }

    #[test]
    fn rests_and_touches() {
        // 50 -L50-> 0 (touch, rest), -R50-> 50, -R100-> 50 passing 0,
        // -L25-> 25.
        let (rests, touches) = answers("L50\nR50\nR100\nL25");
        assert_eq!(rests, "1");
        assert_eq!(touches, "2");
    }

    #[test]
    fn long_rotations_wrap_repeatedly() {
        // 50 -R49-> 99, -R1-> 0 (touch, rest), -L200-> 0 again after two
        // full revolutions (two touches, one rest).
        let (rests, touches) = answers("R49\nR1\nL200");
        assert_eq!(rests, "2");
        assert_eq!(touches, "3");
    }

    #[test]
    fn rejects_malformed_rotation() {
        assert!(Solver::parse("L10\nX4").is_err());
        assert!(Solver::parse("L-3").is_err());
    }
}
