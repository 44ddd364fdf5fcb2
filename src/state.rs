//! Preset catalog: built-in sheets plus any loaded from a TOML file, and the
//! entry point that turns a preset name into a freshly generated sheet.
//!
//! The catalog is built once at startup and never changes; every generation
//! request produces a brand new exercise set.

use std::collections::HashMap;
use std::path::Path;

use rand::Rng;
use tracing::{error, info, instrument, warn};

use crate::config::{load_preset_file, Preset, PresetFile, PresetSource};
use crate::error::{ConfigError, Result};
use crate::generator::generate_with_rng;
use crate::labels::Lang;
use crate::protocol::{to_out, WorksheetOut};
use crate::seeds::seed_presets;

#[derive(Clone, Debug)]
pub struct Catalog {
    by_name: HashMap<String, Preset>,
    order: Vec<String>,
}

impl Catalog {
    /// Built-in presets only.
    pub fn builtin() -> Result<Self> {
        let mut catalog = Self { by_name: HashMap::new(), order: Vec::new() };
        for p in seed_presets()? {
            catalog.insert(p);
        }
        Ok(catalog)
    }

    /// Built-ins, then the presets from `path` if given. File entries replace
    /// built-ins of the same name; invalid entries are skipped and logged.
    #[instrument(level = "info", skip_all)]
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut catalog = Self::builtin()?;
        if let Some(file) = path.and_then(load_preset_file) {
            catalog.merge_file(&file);
        }

        let mut count_by_source: HashMap<PresetSource, usize> = HashMap::new();
        for p in catalog.by_name.values() {
            *count_by_source.entry(p.source).or_default() += 1;
        }
        info!(
            target: "worksheet_gen",
            builtin = count_by_source.get(&PresetSource::Builtin).copied().unwrap_or(0),
            file = count_by_source.get(&PresetSource::File).copied().unwrap_or(0),
            "Startup preset inventory"
        );
        Ok(catalog)
    }

    pub fn merge_file(&mut self, file: &PresetFile) {
        for pc in &file.presets {
            match pc.to_config() {
                Ok(config) => {
                    if self.by_name.contains_key(&pc.name) {
                        warn!(target: "worksheet_gen", name = %pc.name, "Preset file overrides existing preset");
                    }
                    self.insert(Preset { name: pc.name.clone(), columns: pc.columns, source: PresetSource::File, config });
                }
                Err(e) => {
                    error!(target: "worksheet_gen", name = %pc.name, error = %e, "Skipping invalid preset");
                }
            }
        }
    }

    fn insert(&mut self, p: Preset) {
        if !self.by_name.contains_key(&p.name) {
            self.order.push(p.name.clone());
        }
        self.by_name.insert(p.name.clone(), p);
    }

    pub fn get(&self, name: &str) -> Result<&Preset> {
        self.by_name.get(name).ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))
    }

    /// Presets in registration order (built-ins first).
    pub fn presets(&self) -> impl Iterator<Item = &Preset> {
        self.order.iter().filter_map(|n| self.by_name.get(n))
    }

    /// Generate a fresh sheet for `name`. Used for the first sheet and every regenerate.
    #[instrument(level = "info", skip_all, fields(%name, %lang))]
    pub fn generate<R: Rng + ?Sized>(&self, name: &str, lang: Lang, rng: &mut R) -> Result<WorksheetOut> {
        let preset = self.get(name)?;
        let exercises = generate_with_rng(&preset.config, rng);
        let sheet = to_out(&preset.name, preset.columns, lang, &exercises);
        info!(target: "worksheet", preset = %preset.name, id = %sheet.id, total = sheet.total, "Worksheet generated");
        Ok(sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_preset_file;
    use crate::domain::ExerciseKind;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_builtin_catalog_lists_stock_presets() {
        let catalog = Catalog::builtin().unwrap();
        let names: Vec<_> = catalog.presets().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["addition", "tables"]);
    }

    #[test]
    fn test_unknown_preset_is_an_error() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            catalog.generate("fractions", Lang::Fr, &mut rng).unwrap_err(),
            ConfigError::UnknownPreset("fractions".into())
        );
    }

    #[test]
    fn test_file_presets_merge_and_override() {
        let mut catalog = Catalog::builtin().unwrap();
        let file = parse_preset_file(
            r#"
              [[presets]]
              name = "tables"
              columns = 1
              min = 1
              max = 5
              [[presets.kinds]]
              kind = "mult"
              count = 4

              [[presets]]
              name = "broken"
              min = 0
              [[presets.kinds]]
              kind = "add"
              count = 1

              [[presets]]
              name = "warmup"
              [[presets.kinds]]
              kind = "add"
              count = 3
            "#,
        )
        .unwrap();
        catalog.merge_file(&file);

        let names: Vec<_> = catalog.presets().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["addition", "tables", "warmup"]);

        let tables = catalog.get("tables").unwrap();
        assert_eq!(tables.source, PresetSource::File);
        assert_eq!(tables.config.count_for(ExerciseKind::Mult), 4);
        assert!(catalog.get("broken").is_err());
    }

    #[test]
    fn test_overflowing_file_preset_is_skipped() {
        let mut catalog = Catalog::builtin().unwrap();
        let file = parse_preset_file(
            r#"
              [[presets]]
              name = "overflow"
              [[presets.kinds]]
              kind = "add"
              count = 9223372036854775807
              [[presets.kinds]]
              kind = "sub"
              count = 9223372036854775807
              [[presets.kinds]]
              kind = "mult"
              count = 2

              [[presets]]
              name = "too-wide"
              columns = 4000000000
              [[presets.kinds]]
              kind = "add"
              count = 2
            "#,
        )
        .unwrap();
        catalog.merge_file(&file);

        assert_eq!(catalog.get("overflow").unwrap_err(), ConfigError::UnknownPreset("overflow".into()));
        assert!(catalog.get("too-wide").is_err());
        assert_eq!(catalog.presets().count(), 2);
    }

    #[test]
    fn test_generate_uses_preset_columns() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = StdRng::seed_from_u64(10);
        let sheet = catalog.generate("tables", Lang::En, &mut rng).unwrap();
        assert_eq!(sheet.total, 60);
        assert_eq!(sheet.columns.len(), 3);
        assert!(sheet.columns.iter().all(|c| c.len() == 20));
        assert_eq!(sheet.labels.title, "60 calculations in 5 minutes");
    }
}
