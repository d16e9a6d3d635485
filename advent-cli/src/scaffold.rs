//! Scaffolding for new solution days
//!
//! `advent scaffold --day N` drops a compiling solver skeleton into the
//! solutions directory and creates an empty input file. Existing files
//! are never touched.

use crate::error::ScaffoldError;
use crate::inputs::InputStore;
use std::fs;
use std::path::{Path, PathBuf};

/// Day-module skeleton; `YEAR_NUMBER`/`DAY_NUMBER` are substituted.
const TEMPLATE: &str = r#"//! Day DAY_NUMBER: (untitled)

use advent_solver::{ParseError, Puzzle, SolveError};
use advent_solver_macros::AutoRegisterPuzzle;

#[derive(AutoRegisterPuzzle)]
#[puzzle(year = YEAR_NUMBER, day = DAY_NUMBER, tags = ["wip"])]
pub struct Solver;

impl Puzzle for Solver {
    type Model<'a> = Vec<&'a str>;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Model<'_>, ParseError> {
        Ok(input.trim().lines().collect())
    }

    fn solve_part(_model: &mut Self::Model<'_>, part: u8) -> Result<String, SolveError> {
        Err(SolveError::PartNotImplemented(part))
    }
}
"#;

/// What `scaffold_day` did, for reporting
pub struct ScaffoldReport {
    pub module_name: String,
    pub solution_path: PathBuf,
    pub solution_created: bool,
    pub input_path: PathBuf,
    pub input_created: bool,
}

/// Create the solution module and empty input file for a day,
/// skipping whatever already exists.
pub fn scaffold_day(
    year: u16,
    day: u8,
    solutions_dir: &Path,
    inputs: &InputStore,
) -> Result<ScaffoldReport, ScaffoldError> {
    if !(1..=25).contains(&day) {
        return Err(ScaffoldError::DayOutOfRange(day));
    }

    let module_name = format!("day_{:02}", day);
    let solution_path = solutions_dir.join(format!("{}.rs", module_name));
    let solution_created = if solution_path.exists() {
        false
    } else {
        fs::create_dir_all(solutions_dir).map_err(|source| ScaffoldError::Write {
            path: solutions_dir.to_path_buf(),
            source,
        })?;
        let body = TEMPLATE
            .replace("YEAR_NUMBER", &year.to_string())
            .replace("DAY_NUMBER", &day.to_string());
        fs::write(&solution_path, body).map_err(|source| ScaffoldError::Write {
            path: solution_path.clone(),
            source,
        })?;
        true
    };

    let input_created = inputs.create_empty(year, day)?;

    Ok(ScaffoldReport {
        module_name,
        solution_path,
        solution_created,
        input_path: inputs.path(year, day),
        input_created,
    })
}

pub fn print_report(report: &ScaffoldReport, year: u16, day: u8) {
    if report.solution_created {
        println!("Created {}", report.solution_path.display());
    } else {
        println!(
            "Warning: {} already exists, skipping",
            report.solution_path.display()
        );
    }
    if report.input_created {
        println!("Created {}", report.input_path.display());
    } else {
        println!(
            "Warning: {} already exists, skipping",
            report.input_path.display()
        );
    }

    println!();
    println!("Day {} is ready. Next steps:", day);
    println!(
        "1. Add `pub mod {};` to the year's module list if it is missing",
        report.module_name
    );
    println!(
        "2. Paste the puzzle input into {}",
        report.input_path.display()
    );
    println!("3. Run it with: advent --year {} --day {}", year, day);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_module_and_input() {
        let temp = TempDir::new().unwrap();
        let solutions = temp.path().join("year_2025");
        let inputs = InputStore::new(temp.path().join("inputs"));

        let report = scaffold_day(2025, 7, &solutions, &inputs).unwrap();
        assert!(report.solution_created);
        assert!(report.input_created);
        assert_eq!(report.module_name, "day_07");

        let body = std::fs::read_to_string(&report.solution_path).unwrap();
        assert!(body.contains("year = 2025, day = 7"));
        assert!(body.contains("impl Puzzle for Solver"));
        assert!(!body.contains("DAY_NUMBER"));
        assert!(inputs.contains(2025, 7));
    }

    #[test]
    fn never_overwrites_existing_files() {
        let temp = TempDir::new().unwrap();
        let solutions = temp.path().join("year_2025");
        let inputs = InputStore::new(temp.path().join("inputs"));

        scaffold_day(2025, 7, &solutions, &inputs).unwrap();
        let path = solutions.join("day_07.rs");
        std::fs::write(&path, "// my solution\n").unwrap();

        let report = scaffold_day(2025, 7, &solutions, &inputs).unwrap();
        assert!(!report.solution_created);
        assert!(!report.input_created);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "// my solution\n"
        );
    }

    #[test]
    fn rejects_days_outside_the_calendar() {
        let temp = TempDir::new().unwrap();
        let inputs = InputStore::new(temp.path().join("inputs"));
        assert!(matches!(
            scaffold_day(2025, 26, temp.path(), &inputs),
            Err(ScaffoldError::DayOutOfRange(26))
        ));
    }
}
