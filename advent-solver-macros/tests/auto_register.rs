//! End-to-end check that the derive wires a solver into the plugin table.

use advent_solver::{
    AutoRegisterPuzzle, ParseError, Puzzle, PuzzlePlugin, RegistryBuilder, SolveError,
};

#[derive(AutoRegisterPuzzle)]
#[puzzle(year = 2016, day = 19, tags = ["test", "counting"])]
struct LineCounter;

impl Puzzle for LineCounter {
    type Model<'a> = Vec<&'a str>;
    const PARTS: u8 = 2;

    fn parse(input: &str) -> Result<Self::Model<'_>, ParseError> {
        Ok(input.lines().collect())
    }

    fn solve_part(model: &mut Self::Model<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(model.len().to_string()),
            2 => Ok(model.iter().map(|l| l.len()).sum::<usize>().to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

#[test]
fn derived_solver_is_collected_and_solvable() {
    let registry = RegistryBuilder::new()
        .register_plugins_where(|p| p.year == 2016 && p.day == 19)
        .unwrap()
        .build();

    let info = registry.get_info(2016, 19).expect("plugin registered");
    assert_eq!(info.parts, 2);

    let mut solver = registry.create(2016, 19, "ab\ncdef\ng").unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "3");
    assert_eq!(solver.solve(2).unwrap().answer, "7");
}

#[test]
fn derived_plugin_carries_tags() {
    let plugin = advent_solver::inventory::iter::<PuzzlePlugin>()
        .into_iter()
        .find(|p| p.year == 2016 && p.day == 19)
        .expect("plugin submitted");
    assert_eq!(plugin.tags, &["test", "counting"]);
    assert_eq!(plugin.solver.parts(), 2);
}
