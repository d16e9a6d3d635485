//! Day 6: Trash Compactor
//!
//! A worksheet of vertically arranged math problems, separated by blank
//! columns. Humans read each row of a problem as one number (part 1);
//! cephalopods read each column right-to-left as one number with its
//! digits stacked top-to-bottom (part 2). The operator sits on the
//! bottom row.

use advent_solver::{ParseError, Puzzle, SolveError};
use advent_solver_macros::AutoRegisterPuzzle;
use thiserror::Error;

#[derive(AutoRegisterPuzzle)]
#[puzzle(year = 2025, day = 6, tags = ["parsing"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Mul,
}

#[derive(Debug)]
struct Problem {
    numbers: Vec<u64>,
    op: Op,
}

impl Problem {
    fn evaluate(&self) -> u128 {
        match self.op {
            Op::Add => self.numbers.iter().map(|&n| n as u128).sum(),
            Op::Mul => self.numbers.iter().map(|&n| n as u128).product(),
        }
    }
}

#[derive(Debug, Error)]
enum WorksheetParseError {
    #[error("worksheet needs at least one number row and the operator row")]
    TooFewRows,
    #[error("worksheet contains no problems")]
    NoProblems,
    #[error("problem starting at column {0} has no '+' or '*' operator")]
    MissingOperator(usize),
    #[error("cannot read '{0}' as a number")]
    BadNumber(String),
}

#[derive(Debug)]
pub struct Model {
    by_rows: Vec<Problem>,
    by_columns: Vec<Problem>,
}

fn parse_worksheet(input: &str) -> Result<Model, WorksheetParseError> {
    let lines: Vec<&str> = input.trim_matches('\n').lines().collect();
    if lines.len() < 2 {
        return Err(WorksheetParseError::TooFewRows);
    }
    let width = lines.iter().map(|l| l.len()).max().unwrap_or(0);
    let rows: Vec<Vec<char>> = lines
        .iter()
        .map(|line| {
            let mut row: Vec<char> = line.chars().collect();
            row.resize(width, ' ');
            row
        })
        .collect();

    let mut by_rows = Vec::new();
    let mut by_columns = Vec::new();
    let blank = |col: usize| rows.iter().all(|row| row[col] == ' ');

    let mut col = 0;
    while col < width {
        if blank(col) {
            col += 1;
            continue;
        }
        let start = col;
        while col < width && !blank(col) {
            col += 1;
        }
        let (row_wise, column_wise) = parse_problem(&rows, start, col)?;
        by_rows.push(row_wise);
        by_columns.push(column_wise);
    }

    if by_rows.is_empty() {
        return Err(WorksheetParseError::NoProblems);
    }
    Ok(Model {
        by_rows,
        by_columns,
    })
}

/// Parse one problem block under both reading conventions.
fn parse_problem(
    rows: &[Vec<char>],
    start: usize,
    end: usize,
) -> Result<(Problem, Problem), WorksheetParseError> {
    let mut op = None;
    let mut row_numbers = Vec::new();
    for row in rows {
        let text: String = row[start..end].iter().collect();
        let text = text.trim();
        match text {
            "" => continue,
            "+" => op = Some(Op::Add),
            "*" => op = Some(Op::Mul),
            _ => row_numbers.push(
                text.parse()
                    .map_err(|_| WorksheetParseError::BadNumber(text.to_string()))?,
            ),
        }
    }
    let op = op.ok_or(WorksheetParseError::MissingOperator(start))?;

    // Cephalopod reading: rightmost column first, digits stacked with
    // the most significant on top; the operator row does not carry
    // digits.
    let mut column_numbers = Vec::new();
    for col in (start..end).rev() {
        let digits: String = rows[..rows.len() - 1]
            .iter()
            .map(|row| row[col])
            .filter(|c| c.is_ascii_digit())
            .collect();
        if !digits.is_empty() {
            column_numbers.push(
                digits
                    .parse()
                    .map_err(|_| WorksheetParseError::BadNumber(digits.clone()))?,
            );
        }
    }

    Ok((
        Problem {
            numbers: row_numbers,
            op,
        },
        Problem {
            numbers: column_numbers,
            op,
        },
    ))
}

impl Puzzle for Solver {
    type Model<'a> = Model;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Model<'_>, ParseError> {
        parse_worksheet(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }

    fn solve_part(model: &mut Self::Model<'_>, part: u8) -> Result<String, SolveError> {
        let problems = match part {
            1 => &model.by_rows,
            2 => &model.by_columns,
            _ => return Err(SolveError::PartNotImplemented(part)),
        };
        let total: u128 = problems.iter().map(Problem::evaluate).sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Puzzle;

    const EXAMPLE: &str = " 1  3\n12 45\n +  *";

    #[test]
    fn row_wise_reading() {
        let mut model = Solver::parse(EXAMPLE).unwrap();
        // (1 + 12) + (3 * 45)
        assert_eq!(Solver::solve_part(&mut model, 1).unwrap(), "148");
    }

    #[test]
    fn column_wise_reading() {
        let mut model = Solver::parse(EXAMPLE).unwrap();
        // (12 + 1) + (35 * 4)
        assert_eq!(Solver::solve_part(&mut model, 2).unwrap(), "153");
    }

    #[test]
    fn single_problem_products() {
        let mut model = Solver::parse("23\n 4\n *").unwrap();
        assert_eq!(Solver::solve_part(&mut model, 1).unwrap(), "92");
        // Columns right-to-left: 34, then 2.
        assert_eq!(Solver::solve_part(&mut model, 2).unwrap(), "68");
    }

    #[test]
    fn rejects_operatorless_blocks() {
        assert!(Solver::parse("12\n34").is_err());
        assert!(Solver::parse("1a\n +").is_err());
    }
}
