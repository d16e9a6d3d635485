//! Error types for the solver framework

use thiserror::Error;

/// Error produced while parsing puzzle input into a model.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input does not match the expected structure.
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from the input.
    #[error("missing data: {0}")]
    MissingData(String),
    /// Any other parsing failure.
    #[error("parse error: {0}")]
    Other(String),
}

/// Error produced while solving a single part.
#[derive(Debug, Error)]
pub enum SolveError {
    /// The part number is within range but has no implementation.
    #[error("part {0} is not implemented")]
    PartNotImplemented(u8),
    /// The part number exceeds the solver's declared part count.
    #[error("part {0} is out of range")]
    PartOutOfRange(u8),
    /// Solving ran but could not produce an answer.
    #[error("solve failed: {0}")]
    Failed(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Error produced by registry lookups and solver construction.
#[derive(Debug, Error)]
pub enum SolverError {
    /// No solver registered for the given year and day.
    #[error("no solver registered for {0} day {1}")]
    NotFound(u16, u8),
    /// The year/day pair lies outside the registry's supported range.
    #[error("year {0} day {1} is outside the supported range")]
    InvalidDate(u16, u8),
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("solve error: {0}")]
    Solve(#[from] SolveError),
}

/// Error produced while registering solvers.
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// A solver is already registered for this year and day.
    #[error("duplicate solver registration for {0} day {1}")]
    Duplicate(u16, u8),
    /// The year/day pair lies outside the registry's supported range.
    #[error("cannot register {0} day {1}: outside the supported range")]
    OutOfRange(u16, u8),
}
