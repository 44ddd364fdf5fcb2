//! Configuration error types.

use thiserror::Error;

use crate::domain::ExerciseKind;

/// Raised when a worksheet configuration is assembled with values the
/// generator cannot honor. Generation itself never fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Range bounds are inverted.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvertedRange { min: u32, max: u32 },

    /// Operands start at 1.
    #[error("invalid range: min must be at least 1, got {0}")]
    ZeroBound(u32),

    /// A worksheet needs at least one exercise.
    #[error("total exercise count must be positive")]
    EmptyWorksheet,

    /// Per-kind counts disagree with the declared total.
    #[error("kind counts sum to {actual}, expected {expected}")]
    CountMismatch { expected: usize, actual: usize },

    /// Kind counts add up past `usize::MAX`.
    #[error("kind counts overflow when summed")]
    CountOverflow,

    /// The same kind was declared twice.
    #[error("kind '{0}' declared more than once")]
    DuplicateKind(ExerciseKind),

    /// Layout needs at least one column.
    #[error("column count must be positive")]
    NoColumns,

    /// More columns than exercises to put in them.
    #[error("{columns} columns requested for only {total} exercises")]
    TooManyColumns { columns: usize, total: usize },

    /// Lookup of a preset that nobody registered.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
