//! Dense character grid with typed per-cell parsing.

use thiserror::Error;

/// Row/column position inside a [`Grid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Error)]
pub enum GridParseError<E: std::error::Error> {
    #[error("input contains no grid rows")]
    Empty,
    #[error("row {0} differs in width from row 0")]
    Ragged(usize),
    #[error("invalid cell at row {0}, col {1}")]
    Cell(usize, usize, #[source] E),
}

/// Rectangular grid stored row-major.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

const NEIGHBORS_8: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl<T> Grid<T> {
    /// Parse one character per cell, rejecting ragged or empty input.
    pub fn parse<E, F>(input: &str, mut parse_cell: F) -> Result<Self, GridParseError<E>>
    where
        E: std::error::Error,
        F: FnMut(char) -> Result<T, E>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;

        for (row, line) in input.trim_end().lines().enumerate() {
            let start = cells.len();
            for (col, c) in line.chars().enumerate() {
                cells.push(parse_cell(c).map_err(|e| GridParseError::Cell(row, col, e))?);
            }
            let row_width = cells.len() - start;
            match width {
                None => width = Some(row_width),
                Some(w) if w != row_width => return Err(GridParseError::Ragged(row)),
                Some(_) => {}
            }
            height += 1;
        }

        match width {
            None | Some(0) => Err(GridParseError::Empty),
            Some(width) => Ok(Self {
                cells,
                width,
                height,
            }),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        (pos.row < self.height && pos.col < self.width)
            .then(|| &self.cells[pos.row * self.width + pos.col])
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
        (pos.row < self.height && pos.col < self.width)
            .then(|| &mut self.cells[pos.row * self.width + pos.col])
    }

    /// Every position, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |row| (0..width).map(move |col| Pos { row, col }))
    }

    /// Every `(position, cell)` pair, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &T)> {
        self.positions().map(|pos| (pos, &self.cells[pos.row * self.width + pos.col]))
    }

    /// The up-to-eight neighbors of `pos`, clipped to the grid bounds.
    pub fn neighbors8(&self, pos: Pos) -> impl Iterator<Item = Pos> {
        let (width, height) = (self.width, self.height);
        NEIGHBORS_8.iter().filter_map(move |&(dr, dc)| {
            let row = pos.row.checked_add_signed(dr)?;
            let col = pos.col.checked_add_signed(dc)?;
            (row < height && col < width).then_some(Pos { row, col })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn parse_bool(input: &str) -> Grid<bool> {
        Grid::parse(input, |c| Ok::<_, Infallible>(c == '#')).unwrap()
    }

    #[test]
    fn parses_rectangular_input() {
        let grid = parse_bool("#..\n.#.\n");
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.get(Pos { row: 1, col: 1 }), Some(&true));
        assert_eq!(grid.get(Pos { row: 2, col: 0 }), None);
    }

    #[test]
    fn rejects_ragged_rows() {
        let result = Grid::parse("##\n#\n", |c| Ok::<_, Infallible>(c));
        assert!(matches!(result, Err(GridParseError::Ragged(1))));
    }

    #[test]
    fn rejects_empty_input() {
        let result = Grid::parse("", |c| Ok::<_, Infallible>(c));
        assert!(matches!(result, Err(GridParseError::Empty)));
    }

    #[test]
    fn neighbor_counts_respect_bounds() {
        let grid = parse_bool("###\n###\n###");
        assert_eq!(grid.neighbors8(Pos { row: 0, col: 0 }).count(), 3);
        assert_eq!(grid.neighbors8(Pos { row: 0, col: 1 }).count(), 5);
        assert_eq!(grid.neighbors8(Pos { row: 1, col: 1 }).count(), 8);
    }
}
