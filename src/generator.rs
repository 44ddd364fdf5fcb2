//! Exercise set generation.
//!
//! Flow:
//! 1) Lay out `count` kind tags per quota, in declaration order.
//! 2) Shuffle the tags so kinds land on unpredictable positions.
//! 3) Fill each position with an exercise of its kind, retrying a few times
//!    when the operand pair was already used on this sheet.
//!
//! Dedup is best-effort: after `MAX_ATTEMPTS` the last candidate is kept even if
//! it repeats. Small ranges (11×11 tables) can legitimately run out of pairs.

use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, instrument};

use crate::config::WorksheetConfig;
use crate::domain::{Exercise, ExerciseKind, OperandRange};
use crate::factory::make_exercise;
use crate::random::shuffle;

/// Attempts per position before a duplicate is accepted.
pub const MAX_ATTEMPTS: usize = 10;

/// Generate a fresh sheet using the thread-local RNG.
pub fn generate(config: &WorksheetConfig) -> Vec<Exercise> {
    generate_with_rng(config, &mut rand::thread_rng())
}

/// Generate a sheet drawing from `rng`. Each call owns its own used-key set.
#[instrument(level = "debug", skip_all, fields(total = config.total_count()))]
pub fn generate_with_rng<R: Rng + ?Sized>(config: &WorksheetConfig, rng: &mut R) -> Vec<Exercise> {
    let mut tags = kind_tags(config);
    shuffle(rng, &mut tags);

    let mut used: HashSet<String> = HashSet::with_capacity(tags.len());
    let mut exercises = Vec::with_capacity(tags.len());
    let mut duplicates = 0usize;

    for (position, (kind, range)) in tags.into_iter().enumerate() {
        let exercise = pick_fresh(&used, || make_exercise(kind, range, rng));

        if !used.insert(exercise.dedup_key().to_string()) {
            duplicates += 1;
            debug!(target: "worksheet", position, key = %exercise.dedup_key(), "Retry budget exhausted; keeping duplicate");
        }
        exercises.push(exercise);
    }

    debug!(target: "worksheet", generated = exercises.len(), duplicates, "Exercise set generated");
    exercises
}

/// Draw candidates until one has an unused key, giving up after
/// `MAX_ATTEMPTS` draws and returning the last one.
fn pick_fresh<F: FnMut() -> Exercise>(used: &HashSet<String>, mut draw: F) -> Exercise {
    let mut attempts = 0;
    loop {
        let candidate = draw();
        attempts += 1;
        if !used.contains(candidate.dedup_key()) || attempts >= MAX_ATTEMPTS {
            return candidate;
        }
    }
}

/// `count` copies of each kind with its range, quotas in declaration order.
fn kind_tags(config: &WorksheetConfig) -> Vec<(ExerciseKind, OperandRange)> {
    config
        .quotas()
        .iter()
        .flat_map(|q| std::iter::repeat((q.kind, q.range)).take(q.count))
        .collect()
}
