//! Domain models: exercise kinds, operand ranges, and the exercise itself.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Which arithmetic operation does an exercise drill?
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseKind {
  Add,
  Sub,
  Mult,
  Div,
}

impl ExerciseKind {
  /// Operator glyph as printed on the sheet.
  pub fn symbol(self) -> &'static str {
    match self {
      ExerciseKind::Add => "+",
      ExerciseKind::Sub => "-",
      ExerciseKind::Mult => "×",
      ExerciseKind::Div => ":",
    }
  }

  pub fn as_str(self) -> &'static str {
    match self {
      ExerciseKind::Add => "add",
      ExerciseKind::Sub => "sub",
      ExerciseKind::Mult => "mult",
      ExerciseKind::Div => "div",
    }
  }
}

impl fmt::Display for ExerciseKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Inclusive operand bounds, `1 <= min <= max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct OperandRange {
  min: u32,
  max: u32,
}

impl OperandRange {
  pub fn new(min: u32, max: u32) -> Result<Self> {
    if min == 0 {
      return Err(ConfigError::ZeroBound(min));
    }
    if min > max {
      return Err(ConfigError::InvertedRange { min, max });
    }
    Ok(Self { min, max })
  }

  pub fn min(&self) -> u32 { self.min }
  pub fn max(&self) -> u32 { self.max }

  pub fn contains(&self, value: u64) -> bool {
    value >= u64::from(self.min) && value <= u64::from(self.max)
  }
}

/// One line of the worksheet. Never mutated once built.
///
/// `left`/`right` are the operands exactly as displayed: for division that is
/// `dividend` and `divisor`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Exercise {
  kind: ExerciseKind,
  display_text: String,
  dedup_key: String,
  left: u64,
  right: u64,
}

impl Exercise {
  pub(crate) fn new(kind: ExerciseKind, left: u64, right: u64) -> Self {
    let symbol = kind.symbol();
    Self {
      kind,
      display_text: format!("{} {} {} = ", left, symbol, right),
      dedup_key: format!("{}{}{}", left, symbol, right),
      left,
      right,
    }
  }

  pub fn kind(&self) -> ExerciseKind { self.kind }

  /// Expression as printed, ending in `"= "`.
  pub fn display_text(&self) -> &str { &self.display_text }

  /// Canonical operand pair used to spot repeats within one sheet.
  pub fn dedup_key(&self) -> &str { &self.dedup_key }

  pub fn left(&self) -> u64 { self.left }
  pub fn right(&self) -> u64 { self.right }
}
