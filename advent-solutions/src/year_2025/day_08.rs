//! Day 8: Playground
//!
//! Junction boxes in 3D space are wired together shortest-distance
//! first, forming circuits tracked with a disjoint-set forest. Part 1
//! wires the 1000 closest pairs and multiplies the three largest
//! circuit sizes; part 2 keeps wiring until a single circuit remains.

use crate::utils::disjoint::DisjointSet;
use advent_solver::{ParseError, Puzzle, SolveError};
use advent_solver_macros::AutoRegisterPuzzle;
use itertools::Itertools;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(AutoRegisterPuzzle)]
#[puzzle(year = 2025, day = 8, tags = ["union-find"])]
pub struct Solver;

const CONNECTIONS: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    x: i64,
    y: i64,
    z: i64,
}

#[derive(Debug, Error)]
enum PointParseError {
    #[error("expected '<x>,<y>,<z>', got '{0}'")]
    WrongFormat(String),
    #[error("could not read coordinate in '{0}'")]
    NotANumber(String, #[source] ParseIntError),
}

impl Point {
    fn parse(input: &str) -> Result<Self, PointParseError> {
        let mut coords = input.split(',').map(|v| {
            v.trim()
                .parse::<i64>()
                .map_err(|e| PointParseError::NotANumber(input.to_string(), e))
        });
        match (coords.next(), coords.next(), coords.next(), coords.next()) {
            (Some(x), Some(y), Some(z), None) => Ok(Self {
                x: x?,
                y: y?,
                z: z?,
            }),
            _ => Err(PointParseError::WrongFormat(input.to_string())),
        }
    }

    /// Squared Euclidean distance; ordering matches the true distance
    /// without going through floats.
    fn distance_squared(self, other: Self) -> i64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        dx * dx + dy * dy + dz * dz
    }
}

/// All index pairs ordered by ascending distance.
fn sorted_pairs(points: &[Point]) -> Vec<(i64, usize, usize)> {
    let mut pairs: Vec<(i64, usize, usize)> = (0..points.len())
        .tuple_combinations()
        .map(|(i, j)| (points[i].distance_squared(points[j]), i, j))
        .collect();
    pairs.sort_unstable();
    pairs
}

/// Wire the `connections` closest pairs; product of the three largest
/// circuit sizes, or `None` with fewer than three circuits left.
fn largest_circuit_product(points: &[Point], connections: usize) -> Option<u64> {
    let pairs = sorted_pairs(points);
    let mut circuits = DisjointSet::new(points.len());
    for &(_, i, j) in pairs.iter().take(connections) {
        circuits.union(i, j);
    }

    let mut sizes = circuits.component_sizes();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    if sizes.len() < 3 {
        return None;
    }
    Some(sizes.iter().take(3).map(|&s| s as u64).product())
}

/// Keep wiring until one circuit remains; the answer multiplies the x
/// coordinates of the pair that closed it.
fn final_connection_product(points: &[Point]) -> Option<i64> {
    let pairs = sorted_pairs(points);
    let mut circuits = DisjointSet::new(points.len());
    for &(_, i, j) in &pairs {
        if circuits.union(i, j) && circuits.components() == 1 {
            return Some(points[i].x * points[j].x);
        }
    }
    None
}

impl Puzzle for Solver {
    type Model<'a> = Vec<Point>;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Model<'_>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(i, line)| {
                Point::parse(line.trim())
                    .map_err(|e| ParseError::InvalidFormat(format!("line {}: {}", i + 1, e)))
            })
            .collect()
    }

    fn solve_part(model: &mut Self::Model<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => largest_circuit_product(model, CONNECTIONS)
                .map(|p| p.to_string())
                .ok_or_else(|| {
                    SolveError::Failed("fewer than three circuits after wiring".into())
                }),
            2 => final_connection_product(model)
                .map(|p| p.to_string())
                .ok_or_else(|| SolveError::Failed("boxes never join into one circuit".into())),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Puzzle;

    // Three clusters on the x axis: sizes 3, 2, and 1.
    const EXAMPLE: &str = "0,0,0\n1,0,0\n2,0,0\n100,0,0\n101,0,0\n200,0,0";

    #[test]
    fn closest_connections_form_clusters() {
        let points = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(largest_circuit_product(&points, 3), Some(6));
    }

    #[test]
    fn too_few_circuits_is_reported() {
        let points = Solver::parse(EXAMPLE).unwrap();
        // Wiring every pair collapses everything into one circuit.
        assert_eq!(largest_circuit_product(&points, usize::MAX), None);
    }

    #[test]
    fn final_connection_multiplies_x_coordinates() {
        let mut model = Solver::parse(EXAMPLE).unwrap();
        // The single faraway box at x=200 joins last, via the box at
        // x=101.
        assert_eq!(Solver::solve_part(&mut model, 2).unwrap(), "20200");
    }

    #[test]
    fn rejects_malformed_points() {
        assert!(Solver::parse("1,2").is_err());
        assert!(Solver::parse("1,2,3,4").is_err());
        assert!(Solver::parse("1,a,3").is_err());
    }
}
