//! Public output structs (serde ready) handed to whatever presents the sheet.
//! Keep this small and stable so the core and its consumers evolve independently.

use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Exercise, ExerciseKind};
use crate::labels::{labels_for, Lang, Labels};
use crate::util::split_columns;

/// Placeholder printed after each exercise in plain-text output.
pub const ANSWER_BLANK: &str = "____";

/// DTO for a single exercise. Operands and dedup key stay internal.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct ExerciseOut {
    pub kind: ExerciseKind,
    pub text: String,
}

/// One generated sheet, ready to print.
#[derive(Clone, Debug, Serialize)]
pub struct WorksheetOut {
    pub id: Uuid,
    pub preset: String,
    pub lang: Lang,
    pub labels: Labels,
    pub total: usize,
    pub exercises: Vec<ExerciseOut>,
    /// Contiguous slices of `exercises`, one per printed column.
    pub columns: Vec<Vec<ExerciseOut>>,
}

pub fn exercise_out(e: &Exercise) -> ExerciseOut {
    ExerciseOut { kind: e.kind(), text: e.display_text().to_string() }
}

/// Convert a freshly generated exercise list into the public DTO.
pub fn to_out(preset: &str, columns: usize, lang: Lang, exercises: &[Exercise]) -> WorksheetOut {
    let items: Vec<ExerciseOut> = exercises.iter().map(exercise_out).collect();
    let columns = split_columns(&items, columns).into_iter().map(<[ExerciseOut]>::to_vec).collect();
    WorksheetOut {
        id: Uuid::new_v4(),
        preset: preset.to_string(),
        lang,
        labels: labels_for(lang, items.len()),
        total: items.len(),
        exercises: items,
        columns,
    }
}

/// Plain-text sheet: localized header, then each column with blank answer lines.
pub fn to_plain_text(sheet: &WorksheetOut) -> String {
    let l = &sheet.labels;
    let mut out = String::new();
    out.push_str(&l.title);
    out.push('\n');
    out.push_str(&format!("{}: {}   {}: {}\n", l.name_label, ANSWER_BLANK, l.date_label, ANSWER_BLANK));

    for (i, column) in sheet.columns.iter().enumerate() {
        if column.is_empty() {
            continue;
        }
        out.push_str(&format!("\n[{}]\n", i + 1));
        for ex in column {
            out.push_str(&ex.text);
            out.push_str(ANSWER_BLANK);
            out.push('\n');
        }
    }

    out.push_str(&format!("\n{}: {} / {}\n", l.score_label, ANSWER_BLANK, sheet.total));
    out
}
