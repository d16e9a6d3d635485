//! Day 9: Movie Theater
//!
//! Red tiles are listed in order around a rectilinear polygon. Part 1
//! takes the largest bounding box spanned by any two tiles. Part 2
//! requires the whole rectangle to stay on red or green tiles (the
//! polygon boundary and interior): the floor is compressed into
//! elementary cells, interior cells are marked with a parity sweep,
//! and 2D prefix sums answer full-coverage queries per candidate pair.

use advent_solver::{ParseError, Puzzle, SolveError};
use advent_solver_macros::AutoRegisterPuzzle;
use itertools::Itertools;
use std::collections::HashMap;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(AutoRegisterPuzzle)]
#[puzzle(year = 2025, day = 9, tags = ["geometry"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    x: i64,
    y: i64,
}

#[derive(Debug, Error)]
enum TileParseError {
    #[error("expected '<x>,<y>', got '{0}'")]
    WrongFormat(String),
    #[error("could not read coordinate in '{0}'")]
    NotANumber(String, #[source] ParseIntError),
}

impl Tile {
    fn parse(input: &str) -> Result<Self, TileParseError> {
        let (x, y) = input
            .split_once(',')
            .ok_or_else(|| TileParseError::WrongFormat(input.to_string()))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<i64>()
                .map_err(|e| TileParseError::NotANumber(input.to_string(), e))
        };
        Ok(Self {
            x: parse(x)?,
            y: parse(y)?,
        })
    }
}

fn pair_area(a: Tile, b: Tile) -> u64 {
    ((a.x - b.x).unsigned_abs() + 1) * ((a.y - b.y).unsigned_abs() + 1)
}

fn largest_bounding_box(tiles: &[Tile]) -> u64 {
    tiles
        .iter()
        .tuple_combinations()
        .map(|(&a, &b)| pair_area(a, b))
        .max()
        .unwrap_or(0)
}

/// Largest pair rectangle lying entirely on red or green tiles.
///
/// Coordinates are doubled where midpoints are needed so every test
/// stays in integer arithmetic.
fn largest_contained_rectangle(tiles: &[Tile]) -> u64 {
    let n = tiles.len();
    if n < 2 {
        return 0;
    }

    let mut xs: Vec<i64> = tiles.iter().map(|t| t.x).collect();
    xs.sort_unstable();
    xs.dedup();
    let mut ys: Vec<i64> = tiles.iter().map(|t| t.y).collect();
    ys.sort_unstable();
    ys.dedup();
    let x_index: HashMap<i64, usize> = xs.iter().enumerate().map(|(i, &x)| (x, i)).collect();
    let y_index: HashMap<i64, usize> = ys.iter().enumerate().map(|(i, &y)| (y, i)).collect();
    let cell_w = xs.len() - 1;
    let cell_h = ys.len() - 1;

    // Vertical polygon edges as (x, y_min, y_max), sorted by x.
    let mut v_edges: Vec<(i64, i64, i64)> = Vec::new();
    for k in 0..n {
        let p1 = tiles[k];
        let p2 = tiles[(k + 1) % n];
        if p1.x == p2.x {
            v_edges.push((p1.x, p1.y.min(p2.y), p1.y.max(p2.y)));
        }
    }
    v_edges.sort_unstable();

    // Parity sweep through each elementary row: cells between crossing
    // pairs are interior.
    let mut inside = vec![vec![false; cell_w.max(1)]; cell_h.max(1)];
    for j in 0..cell_h {
        let y_mid2 = ys[j] + ys[j + 1];
        let crossings: Vec<i64> = v_edges
            .iter()
            .filter(|&&(_, lo, hi)| 2 * lo < y_mid2 && y_mid2 < 2 * hi)
            .map(|&(x, _, _)| x)
            .collect();
        for pair in crossings.chunks(2) {
            if let &[x_start, x_end] = pair {
                for i in x_index[&x_start]..x_index[&x_end] {
                    inside[j][i] = true;
                }
            }
        }
    }

    // Prefix sums over interior cells for O(1) coverage queries.
    let mut prefix = vec![vec![0u64; cell_w + 1]; cell_h + 1];
    for j in 0..cell_h {
        for i in 0..cell_w {
            prefix[j + 1][i + 1] =
                prefix[j][i + 1] + prefix[j + 1][i] - prefix[j][i] + inside[j][i] as u64;
        }
    }
    let covered_cells = |ix1: usize, iy1: usize, ix2: usize, iy2: usize| -> u64 {
        if ix1 >= ix2 || iy1 >= iy2 {
            return 0;
        }
        (prefix[iy2][ix2] + prefix[iy1][ix1]) - prefix[iy1][ix2] - prefix[iy2][ix1]
    };

    // Ray cast at doubled coordinates; non-horizontal edges are
    // vertical, so the crossing x is the edge's own.
    let inside_polygon = |px2: i64, py2: i64| -> bool {
        let mut crossings = 0;
        for k in 0..n {
            let p1 = tiles[k];
            let p2 = tiles[(k + 1) % n];
            if p1.y == p2.y {
                continue;
            }
            let (y_min, y_max) = (p1.y.min(p2.y), p1.y.max(p2.y));
            if 2 * y_min <= py2 && py2 < 2 * y_max && px2 < 2 * p1.x {
                crossings += 1;
            }
        }
        crossings % 2 == 1
    };

    let on_boundary = |px2: i64, py2: i64| -> bool {
        for k in 0..n {
            let p1 = tiles[k];
            let p2 = tiles[(k + 1) % n];
            if p1.y == p2.y && 2 * p1.y == py2 {
                let (lo, hi) = (p1.x.min(p2.x), p1.x.max(p2.x));
                if 2 * lo <= px2 && px2 <= 2 * hi {
                    return true;
                }
            } else if p1.x == p2.x && 2 * p1.x == px2 {
                let (lo, hi) = (p1.y.min(p2.y), p1.y.max(p2.y));
                if 2 * lo <= py2 && py2 <= 2 * hi {
                    return true;
                }
            }
        }
        false
    };

    let mut max_area = 0;
    for (i, &a) in tiles.iter().enumerate() {
        for &b in &tiles[i + 1..] {
            let area = pair_area(a, b);
            if area <= max_area {
                continue;
            }

            let valid = if a.x == b.x || a.y == b.y {
                // Degenerate rectangle: probe its midpoint.
                let (mx2, my2) = (a.x + b.x, a.y + b.y);
                inside_polygon(mx2, my2) || on_boundary(mx2, my2)
            } else {
                let (ix1, ix2) = {
                    let (lo, hi) = (x_index[&a.x], x_index[&b.x]);
                    (lo.min(hi), lo.max(hi))
                };
                let (iy1, iy2) = {
                    let (lo, hi) = (y_index[&a.y], y_index[&b.y]);
                    (lo.min(hi), lo.max(hi))
                };
                let expected = ((ix2 - ix1) * (iy2 - iy1)) as u64;
                covered_cells(ix1, iy1, ix2, iy2) == expected
            };

            if valid {
                max_area = area;
            }
        }
    }
    max_area
}

impl Puzzle for Solver {
    type Model<'a> = Vec<Tile>;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Model<'_>, ParseError> {
        let tiles: Vec<Tile> = input
            .trim()
            .lines()
            .enumerate()
            .map(|(i, line)| {
                Tile::parse(line.trim())
                    .map_err(|e| ParseError::InvalidFormat(format!("line {}: {}", i + 1, e)))
            })
            .collect::<Result<_, _>>()?;
        if tiles.len() < 2 {
            return Err(ParseError::MissingData(
                "need at least two red tiles".into(),
            ));
        }
        Ok(tiles)
    }

    fn solve_part(model: &mut Self::Model<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(largest_bounding_box(model).to_string()),
            2 => Ok(largest_contained_rectangle(model).to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}
