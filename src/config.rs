//! Worksheet configuration: the validated `WorksheetConfig` consumed by the
//! generator, plus loading extra presets from TOML.
//!
//! See `PresetFile` and `PresetCfg` for the expected file schema.

use std::path::Path;

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::{ExerciseKind, OperandRange};
use crate::error::{ConfigError, Result};

/// How many exercises of one kind a sheet carries, and their operand range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindQuota {
  pub kind: ExerciseKind,
  pub count: usize,
  pub range: OperandRange,
}

/// Immutable generator input. Quota order is the declaration order used to
/// lay out kind tags before shuffling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorksheetConfig {
  total_count: usize,
  quotas: Vec<KindQuota>,
}

impl WorksheetConfig {
  /// Validate and build. Fails fast on an empty sheet, a count mismatch or a
  /// kind declared twice; ranges were already checked by `OperandRange::new`.
  pub fn new(total_count: usize, quotas: Vec<KindQuota>) -> Result<Self> {
    if total_count == 0 {
      return Err(ConfigError::EmptyWorksheet);
    }
    for (i, q) in quotas.iter().enumerate() {
      if quotas[..i].iter().any(|p| p.kind == q.kind) {
        return Err(ConfigError::DuplicateKind(q.kind));
      }
    }
    let actual = sum_counts(&quotas)?;
    if actual != total_count {
      return Err(ConfigError::CountMismatch { expected: total_count, actual });
    }
    Ok(Self { total_count, quotas })
  }

  /// Convenience: total is the sum of the quota counts.
  pub fn from_quotas(quotas: Vec<KindQuota>) -> Result<Self> {
    let total = sum_counts(&quotas)?;
    Self::new(total, quotas)
  }

  pub fn total_count(&self) -> usize { self.total_count }
  pub fn quotas(&self) -> &[KindQuota] { &self.quotas }

  pub fn range_for(&self, kind: ExerciseKind) -> Option<OperandRange> {
    self.quotas.iter().find(|q| q.kind == kind).map(|q| q.range)
  }

  pub fn count_for(&self, kind: ExerciseKind) -> usize {
    self.quotas.iter().find(|q| q.kind == kind).map_or(0, |q| q.count)
  }
}

fn sum_counts(quotas: &[KindQuota]) -> Result<usize> {
  quotas
    .iter()
    .try_fold(0usize, |acc, q| acc.checked_add(q.count))
    .ok_or(ConfigError::CountOverflow)
}

/// Where did a preset come from?
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresetSource {
  Builtin,     // shipped with the crate
  File,        // from the user's TOML preset file
}

/// A named, ready-to-generate sheet layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preset {
  pub name: String,
  pub columns: usize,
  pub source: PresetSource,
  pub config: WorksheetConfig,
}

/// Root of the TOML preset file.
#[derive(Clone, Debug, Deserialize, Default)]
pub struct PresetFile {
  #[serde(default)]
  pub presets: Vec<PresetCfg>,
}

/// Preset entry accepted in TOML. `min`/`max` here are defaults for every kind
/// that does not set its own.
#[derive(Clone, Debug, Deserialize)]
pub struct PresetCfg {
  pub name: String,
  #[serde(default = "default_columns")] pub columns: usize,
  #[serde(default)] pub min: Option<u32>,
  #[serde(default)] pub max: Option<u32>,
  #[serde(default)] pub kinds: Vec<KindCfg>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct KindCfg {
  pub kind: ExerciseKind,
  pub count: usize,
  #[serde(default)] pub min: Option<u32>,
  #[serde(default)] pub max: Option<u32>,
}

fn default_columns() -> usize { 2 }

/// Range used when neither the kind nor the preset names one.
const FALLBACK_MIN: u32 = 1;
const FALLBACK_MAX: u32 = 10;

impl PresetCfg {
  /// Turn the loose TOML shape into a validated config.
  pub fn to_config(&self) -> Result<WorksheetConfig> {
    if self.columns == 0 {
      return Err(ConfigError::NoColumns);
    }
    let mut quotas = Vec::with_capacity(self.kinds.len());
    for k in &self.kinds {
      let min = k.min.or(self.min).unwrap_or(FALLBACK_MIN);
      let max = k.max.or(self.max).unwrap_or(FALLBACK_MAX);
      quotas.push(KindQuota { kind: k.kind, count: k.count, range: OperandRange::new(min, max)? });
    }
    let config = WorksheetConfig::from_quotas(quotas)?;
    if self.columns > config.total_count() {
      return Err(ConfigError::TooManyColumns { columns: self.columns, total: config.total_count() });
    }
    Ok(config)
  }
}

/// Parse a preset file body.
pub fn parse_preset_file(s: &str) -> std::result::Result<PresetFile, toml::de::Error> {
  toml::from_str::<PresetFile>(s)
}

/// Load presets from `path`. On any read/parse error, logs and returns None.
pub fn load_preset_file(path: &Path) -> Option<PresetFile> {
  let shown = path.display();
  match std::fs::read_to_string(path) {
    Ok(s) => match parse_preset_file(&s) {
      Ok(file) => {
        info!(target: "worksheet_gen", path = %shown, presets = file.presets.len(), "Loaded preset file (TOML)");
        Some(file)
      }
      Err(e) => {
        error!(target: "worksheet_gen", path = %shown, error = %e, "Failed to parse TOML preset file");
        None
      }
    },
    Err(e) => {
      error!(target: "worksheet_gen", path = %shown, error = %e, "Failed to read TOML preset file");
      None
    }
  }
}
