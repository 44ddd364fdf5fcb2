//! Worksheet Gen · command line
//!
//! - `generate`: print one or more freshly generated sheets (JSON or plain text)
//! - `presets`: list the built-in and file-provided presets
//!
//! Important env variables:
//!   WORKSHEET_CONFIG_PATH : path to a TOML preset file (extra/overriding presets)
//!   WORKSHEET_LANG        : label language, fr (default) | en | es | pt | de
//!   LOG_LEVEL             : tracing filter, e.g. "debug" or full directives
//!   LOG_FORMAT            : "pretty" (default) or "json"

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, instrument};

use worksheet_gen::protocol::to_plain_text;
use worksheet_gen::seeds::ADDITION;
use worksheet_gen::{Catalog, Lang};

#[derive(Parser)]
#[command(name = "worksheet-gen")]
#[command(author, version, about = "Generate printable arithmetic practice worksheets")]
#[command(propagate_version = true)]
struct Cli {
  /// TOML file with extra presets
  #[arg(long, global = true, env = "WORKSHEET_CONFIG_PATH")]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Generate fresh worksheets
  Generate {
    /// Preset name (e.g. addition, tables)
    #[arg(short, long, default_value = ADDITION)]
    preset: String,

    /// Label language
    #[arg(short, long, env = "WORKSHEET_LANG", default_value = "fr")]
    lang: Lang,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Seed for reproducible sheets; sheet k uses seed + k
    #[arg(long)]
    seed: Option<u64>,

    /// Number of sheets, each generated independently
    #[arg(long, default_value_t = 1)]
    sheets: u32,
  },

  /// List available presets
  Presets,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
  Json,
  Text,
}

#[instrument(level = "info", skip_all)]
fn main() -> Result<(), Box<dyn std::error::Error>> {
  worksheet_gen::telemetry::init_tracing();

  let cli = Cli::parse();
  let catalog = Catalog::load(cli.config.as_deref())?;

  match cli.command {
    Commands::Generate { preset, lang, format, seed, sheets } => {
      for k in 0..sheets {
        let sheet = match seed {
          Some(s) => catalog.generate(&preset, lang, &mut StdRng::seed_from_u64(s.wrapping_add(k.into())))?,
          None => catalog.generate(&preset, lang, &mut rand::thread_rng())?,
        };
        match format {
          Format::Json => println!("{}", serde_json::to_string_pretty(&sheet)?),
          Format::Text => println!("{}", to_plain_text(&sheet)),
        }
      }
      info!(target: "worksheet_gen", %preset, sheets, "Done");
    }
    Commands::Presets => {
      for p in catalog.presets() {
        let kinds: Vec<String> = p
          .config
          .quotas()
          .iter()
          .map(|q| format!("{} x{} [{}..={}]", q.kind, q.count, q.range.min(), q.range.max()))
          .collect();
        println!("{}\ttotal={}\tcolumns={}\t{}", p.name, p.config.total_count(), p.columns, kinds.join(", "));
      }
    }
  }
  Ok(())
}
