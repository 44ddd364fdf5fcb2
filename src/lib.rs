//! Worksheet Gen · printable arithmetic practice sheets
//!
//! - `generator`: the exercise set generator (shuffled kind tags, per-position retry dedup)
//! - `factory`: one exercise per kind; subtraction never negative, division always exact
//! - `config` / `seeds`: validated configurations, built-in presets, TOML preset files
//! - `protocol` / `labels`: serializable sheet envelope with localized labels

pub mod config;
pub mod domain;
pub mod error;
pub mod factory;
pub mod generator;
pub mod labels;
pub mod protocol;
pub mod random;
pub mod seeds;
pub mod state;
pub mod telemetry;
pub mod util;

pub use config::{KindQuota, Preset, PresetSource, WorksheetConfig};
pub use domain::{Exercise, ExerciseKind, OperandRange};
pub use error::ConfigError;
pub use generator::{generate, generate_with_rng, MAX_ATTEMPTS};
pub use labels::Lang;
pub use protocol::WorksheetOut;
pub use state::Catalog;
