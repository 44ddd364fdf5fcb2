//! Built-in presets: the two stock sheets every install ships with.

use crate::config::{KindQuota, Preset, PresetSource, WorksheetConfig};
use crate::domain::{ExerciseKind, OperandRange};
use crate::error::Result;

pub const ADDITION: &str = "addition";
pub const TABLES: &str = "tables";

/// "40 calculations in 5 minutes": half addition, half subtraction, numbers 1–99.
pub fn addition_preset() -> Result<Preset> {
  let range = OperandRange::new(1, 99)?;
  Ok(Preset {
    name: ADDITION.into(),
    columns: 2,
    source: PresetSource::Builtin,
    config: WorksheetConfig::new(40, vec![
      KindQuota { kind: ExerciseKind::Add, count: 20, range },
      KindQuota { kind: ExerciseKind::Sub, count: 20, range },
    ])?,
  })
}

/// "60 calculations in 5 minutes": times tables up to 11, 70% products / 30% quotients.
pub fn tables_preset() -> Result<Preset> {
  let range = OperandRange::new(1, 11)?;
  Ok(Preset {
    name: TABLES.into(),
    columns: 3,
    source: PresetSource::Builtin,
    config: WorksheetConfig::new(60, vec![
      KindQuota { kind: ExerciseKind::Mult, count: 42, range },
      KindQuota { kind: ExerciseKind::Div, count: 18, range },
    ])?,
  })
}

pub fn seed_presets() -> Result<Vec<Preset>> {
  Ok(vec![addition_preset()?, tables_preset()?])
}
