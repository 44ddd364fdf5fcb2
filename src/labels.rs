//! Localized worksheet labels (title, header fields, button captions).
//!
//! The language is always passed in by the caller; nothing here remembers a
//! "current" language.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::util::fill_template;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Fr,
    En,
    Es,
    Pt,
    De,
}

impl Lang {
    pub const ALL: [Lang; 5] = [Lang::Fr, Lang::En, Lang::Es, Lang::Pt, Lang::De];

    pub fn code(self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::En => "en",
            Lang::Es => "es",
            Lang::Pt => "pt",
            Lang::De => "de",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Lang::ALL
            .into_iter()
            .find(|l| l.code() == lower)
            .ok_or_else(|| format!("unsupported language '{}' (expected one of fr, en, es, pt, de)", s))
    }
}

/// Raw strings for one language. `title_tpl` takes `{total}`.
struct Table {
    page_title: &'static str,
    generate_btn: &'static str,
    print_btn: &'static str,
    name_label: &'static str,
    date_label: &'static str,
    title_tpl: &'static str,
    score_label: &'static str,
}

fn table(lang: Lang) -> Table {
    match lang {
        Lang::Fr => Table {
            page_title: "Générateur de Feuilles d'Exercices",
            generate_btn: "Générer une nouvelle feuille",
            print_btn: "Imprimer",
            name_label: "Prénom",
            date_label: "Date",
            title_tpl: "{total} calculs en 5 minutes",
            score_label: "Mon score",
        },
        Lang::En => Table {
            page_title: "Math Worksheet Generator",
            generate_btn: "Generate New Worksheet",
            print_btn: "Print",
            name_label: "Name",
            date_label: "Date",
            title_tpl: "{total} calculations in 5 minutes",
            score_label: "My score",
        },
        Lang::Es => Table {
            page_title: "Generador de Hojas de Ejercicios",
            generate_btn: "Generar Nueva Hoja",
            print_btn: "Imprimir",
            name_label: "Nombre",
            date_label: "Fecha",
            title_tpl: "{total} cálculos en 5 minutos",
            score_label: "Mi puntuación",
        },
        Lang::Pt => Table {
            page_title: "Gerador de Folhas de Exercícios",
            generate_btn: "Gerar Nova Folha",
            print_btn: "Imprimir",
            name_label: "Nome",
            date_label: "Data",
            title_tpl: "{total} cálculos em 5 minutos",
            score_label: "Minha pontuação",
        },
        Lang::De => Table {
            page_title: "Mathe-Arbeitsblatt Generator",
            generate_btn: "Neues Arbeitsblatt erstellen",
            print_btn: "Drucken",
            name_label: "Name",
            date_label: "Datum",
            title_tpl: "{total} Rechnungen in 5 Minuten",
            score_label: "Meine Punktzahl",
        },
    }
}

/// Resolved labels for one sheet, serialized alongside the exercises.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Labels {
    pub page_title: String,
    pub generate_btn: String,
    pub print_btn: String,
    pub name_label: String,
    pub date_label: String,
    pub title: String,
    pub score_label: String,
}

pub fn labels_for(lang: Lang, total: usize) -> Labels {
    let t = table(lang);
    Labels {
        page_title: t.page_title.into(),
        generate_btn: t.generate_btn.into(),
        print_btn: t.print_btn.into(),
        name_label: t.name_label.into(),
        date_label: t.date_label.into(),
        title: fill_template(t.title_tpl, &[("total", &total.to_string())]),
        score_label: t.score_label.into(),
    }
}
