//! Puzzle registry with flat (year, day) storage and plugin collection

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynPuzzle, PuzzleInstance};
use crate::solver::Puzzle;

/// First Advent of Code year.
pub const BASE_YEAR: u16 = 2015;
/// Number of years the flat storage covers.
pub const MAX_YEARS: usize = 20;
/// Puzzle days per year.
pub const DAYS_PER_YEAR: usize = 25;

const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Flat index for a year/day pair, `None` when out of range.
#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    Some((year - BASE_YEAR) as usize * DAYS_PER_YEAR + (day - 1) as usize)
}

/// Inverse of [`calc_index`].
#[inline]
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

/// Factory producing a parsed, type-erased puzzle instance from raw input.
pub type PuzzleFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynPuzzle + 'a>, ParseError> + Send + Sync>;

/// Metadata about one registered puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleInfo {
    pub year: u16,
    pub day: u8,
    /// Number of parts the solver implements.
    pub parts: u8,
}

struct Entry {
    factory: PuzzleFactory,
    parts: u8,
}

/// Builder assembling an immutable [`PuzzleRegistry`].
///
/// Registration is fallible: duplicate year/day pairs and dates outside
/// the supported range are rejected up front rather than surfacing as
/// shadowed solvers at run time.
pub struct RegistryBuilder {
    entries: Vec<Option<Entry>>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a factory with an explicit part count.
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynPuzzle + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let index = calc_index(year, day).ok_or(RegistrationError::OutOfRange(year, day))?;
        if self.entries[index].is_some() {
            return Err(RegistrationError::Duplicate(year, day));
        }
        self.entries[index] = Some(Entry {
            factory: Box::new(factory),
            parts,
        });
        Ok(self)
    }

    /// Register a [`Puzzle`] type directly.
    pub fn with<P>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        P: Puzzle + 'static,
    {
        self.register(year, day, P::PARTS, move |input: &str| {
            Ok(Box::new(PuzzleInstance::<P>::new(year, day, input)?))
        })
    }

    /// Register every plugin submitted via `inventory`.
    pub fn register_all_plugins(mut self) -> Result<Self, RegistrationError> {
        for plugin in inventory::iter::<PuzzlePlugin>() {
            self = plugin.solver.register_into(self, plugin.year, plugin.day)?;
        }
        Ok(self)
    }

    /// Register only the plugins matching `filter`.
    ///
    /// Useful for running a tag subset, e.g. everything tagged `"fast"`.
    pub fn register_plugins_where<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&PuzzlePlugin) -> bool,
    {
        for plugin in inventory::iter::<PuzzlePlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_into(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> PuzzleRegistry {
        PuzzleRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup table from (year, day) to puzzle factories.
pub struct PuzzleRegistry {
    entries: Vec<Option<Entry>>,
}

impl PuzzleRegistry {
    /// Iterate metadata for every registered puzzle, in (year, day) order.
    pub fn iter_info(&self) -> impl Iterator<Item = PuzzleInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = from_index(i);
                PuzzleInfo {
                    year,
                    day,
                    parts: e.parts,
                }
            })
        })
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<PuzzleInfo> {
        calc_index(year, day)
            .and_then(|i| self.entries[i].as_ref())
            .map(|e| PuzzleInfo {
                year,
                day,
                parts: e.parts,
            })
    }

    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }

    /// Parse `input` with the registered solver for `year`/`day`.
    pub fn create<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynPuzzle + 'a>, SolverError> {
        let index = calc_index(year, day).ok_or(SolverError::InvalidDate(year, day))?;
        let entry = self.entries[index]
            .as_ref()
            .ok_or(SolverError::NotFound(year, day))?;
        (entry.factory)(input).map_err(SolverError::Parse)
    }
}

/// Type-erased self-registration, implemented for every `Puzzle + Sync`.
///
/// The plugin table stores `&'static dyn RegisterablePuzzle` so solvers
/// of different concrete types can share one collection.
pub trait RegisterablePuzzle: Sync {
    fn register_into(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;

    fn parts(&self) -> u8;
}

impl<P> RegisterablePuzzle for P
where
    P: Puzzle + Sync + 'static,
{
    fn register_into(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.with::<P>(year, day)
    }

    fn parts(&self) -> u8 {
        P::PARTS
    }
}

/// One entry in the compile-time plugin table.
///
/// Submitted by the [`AutoRegisterPuzzle`](crate::AutoRegisterPuzzle)
/// derive; collected by [`RegistryBuilder::register_all_plugins`].
pub struct PuzzlePlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterablePuzzle,
    /// Free-form labels for filtering (e.g. `"slow"`, `"grid"`).
    pub tags: &'static [&'static str],
}

inventory::collect!(PuzzlePlugin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ParseError, SolveError};
    use proptest::prelude::*;

    struct Echo;

    impl Puzzle for Echo {
        type Model<'a> = &'a str;
        const PARTS: u8 = 1;

        fn parse(input: &str) -> Result<Self::Model<'_>, ParseError> {
            Ok(input.trim())
        }

        fn solve_part(model: &mut Self::Model<'_>, part: u8) -> Result<String, SolveError> {
            match part {
                1 => Ok(model.to_string()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    #[test]
    fn register_and_create() {
        let registry = RegistryBuilder::new().with::<Echo>(2025, 3).unwrap().build();

        assert_eq!(registry.len(), 1);
        assert!(registry.contains(2025, 3));
        assert_eq!(
            registry.get_info(2025, 3),
            Some(PuzzleInfo {
                year: 2025,
                day: 3,
                parts: 1
            })
        );

        let mut solver = registry.create(2025, 3, "  hello  ").unwrap();
        assert_eq!(solver.solve(1).unwrap().answer, "hello");
        assert!(matches!(
            solver.solve(2),
            Err(SolveError::PartOutOfRange(2))
        ));
    }

    #[test]
    fn duplicate_registration_rejected() {
        let result = RegistryBuilder::new()
            .with::<Echo>(2025, 3)
            .unwrap()
            .with::<Echo>(2025, 3);
        assert!(matches!(result, Err(RegistrationError::Duplicate(2025, 3))));
    }

    #[test]
    fn out_of_range_dates_rejected() {
        for (year, day) in [(2014, 1), (2035, 1), (2025, 0), (2025, 26)] {
            let result = RegistryBuilder::new().with::<Echo>(year, day);
            assert!(
                matches!(result, Err(RegistrationError::OutOfRange(y, d)) if y == year && d == day)
            );
        }
    }

    #[test]
    fn missing_solver_not_found() {
        let registry = RegistryBuilder::new().build();
        assert!(matches!(
            registry.create(2025, 1, ""),
            Err(SolverError::NotFound(2025, 1))
        ));
        assert!(matches!(
            registry.create(1999, 1, ""),
            Err(SolverError::InvalidDate(1999, 1))
        ));
    }

    #[test]
    fn info_iteration_is_ordered() {
        let registry = RegistryBuilder::new()
            .with::<Echo>(2025, 10)
            .unwrap()
            .with::<Echo>(2024, 1)
            .unwrap()
            .with::<Echo>(2025, 2)
            .unwrap()
            .build();

        let found: Vec<(u16, u8)> = registry.iter_info().map(|i| (i.year, i.day)).collect();
        assert_eq!(found, vec![(2024, 1), (2025, 2), (2025, 10)]);
    }

    proptest! {
        #[test]
        fn index_round_trips(
            year in BASE_YEAR..BASE_YEAR + MAX_YEARS as u16,
            day in 1u8..=DAYS_PER_YEAR as u8,
        ) {
            let index = calc_index(year, day).unwrap();
            prop_assert!(index < CAPACITY);
            prop_assert_eq!(from_index(index), (year, day));
        }
    }
}
