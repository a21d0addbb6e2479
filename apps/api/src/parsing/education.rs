//! Education entries.
//!
//! Every line of a block is cut into cells (pipe cells, or the text around a
//! date range) and each cell is classified as years, location, degree,
//! university or unknown. A second degree or a second university starts a
//! new entry.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::EducationEntry;
use crate::parsing::lines::{find_date_span, pipe_cells, trim_separators};
use crate::parsing::machine::RawEntry;

static DEGREE_WORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:bachelor|bachelors|master|masters|doctor|doctorate|associate|diploma|high school)\b")
        .unwrap()
});

const DEGREE_ABBRS: &str =
    r"mba|phd|ph\.d|b\.tech|m\.tech|btech|mtech|b\.sc|m\.sc|bsc|msc|b\.s|m\.s|b\.a|m\.a|b\.e|m\.e|bs|ms|ba";

/// Abbreviations also collide with state codes (`MA`), so places are ruled out first.
static DEGREE_ABBR: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)\b(?:{DEGREE_ABBRS})\b")).unwrap());

/// A whole cell that is only an abbreviation (`BS`, `M.S.`).
static DEGREE_ABBR_CELL: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)^(?:{DEGREE_ABBRS})\.?$")).unwrap());

static FIELD_OF_STUDY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:science|sciences|engineering|studies|arts|mathematics|physics|chemistry|biology|economics|business|administration|design|history|technology|computing|management|finance|psychology)\b",
    )
    .unwrap()
});

static UNIVERSITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:university|college|institute|school|academy|polytechnic|iit|mit)\b")
        .unwrap()
});

/// `City, ST` or `City, Country`.
static LOCATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Z][A-Za-z .'-]*,\s*(?:[A-Z]{2}|[A-Z][a-z]+(?: [A-Z][a-z]+)?)$").unwrap()
});

/// `2020`, `Expected 2025`, `Class of 2019`.
static YEAR_CELL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(?:expected|graduated|graduation|class of|since)?\s*(?:[a-z]{3,9}\.?\s+)?(?:19|20)\d{2}$")
        .unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
enum Cell {
    Years(String),
    Location(String),
    Degree(String),
    University(String),
    Unknown(String),
}

fn classify_cell(cell: &str) -> Cell {
    let cell = cell.to_string();
    if YEAR_CELL.is_match(&cell) {
        Cell::Years(cell)
    } else if DEGREE_WORD.is_match(&cell) || degree_after_comma(&cell) {
        Cell::Degree(cell)
    } else if LOCATION.is_match(&cell) {
        Cell::Location(cell)
    } else if DEGREE_ABBR.is_match(&cell) {
        Cell::Degree(cell)
    } else if UNIVERSITY.is_match(&cell) {
        Cell::University(cell)
    } else {
        Cell::Unknown(cell)
    }
}

/// `Physics, BS` or `Computer Science, MS`. A bare two-letter code reads as a
/// state (`Jackson, MS`) unless the text before the comma names a field.
fn degree_after_comma(cell: &str) -> bool {
    let Some((field, abbr)) = cell.rsplit_once(',') else {
        return false;
    };
    let abbr = abbr.trim();
    if !DEGREE_ABBR_CELL.is_match(abbr) {
        return false;
    }
    abbr.contains('.') || abbr.len() > 2 || FIELD_OF_STUDY.is_match(field)
}

fn push_cells(cells: &mut Vec<Cell>, text: &str) {
    let pieces = pipe_cells(text)
        .into_iter()
        .flat_map(|c| c.split(" — ").flat_map(|p| p.split(" – ")));
    for piece in pieces {
        let piece = trim_separators(piece);
        if !piece.is_empty() {
            cells.push(classify_cell(piece));
        }
    }
}

fn cells_of(line: &str) -> Vec<Cell> {
    let mut cells = Vec::new();
    match find_date_span(line) {
        Some(span) => {
            push_cells(&mut cells, &span.prefix);
            cells.push(Cell::Years(span.raw));
            push_cells(&mut cells, &span.suffix);
        }
        None => push_cells(&mut cells, line),
    }
    cells
}

#[derive(Default)]
struct Assembler {
    done: Vec<EducationEntry>,
    current: EducationEntry,
}

impl Assembler {
    fn flush(&mut self) {
        let entry = std::mem::take(&mut self.current);
        if !entry.is_empty() {
            self.done.push(entry);
        }
    }

    fn accept(&mut self, cell: Cell) {
        match cell {
            Cell::Degree(d) => {
                if !self.current.degree.is_empty() {
                    self.flush();
                }
                self.current.degree = d;
            }
            Cell::University(u) => {
                if !self.current.university.is_empty() {
                    self.flush();
                }
                self.current.university = u;
            }
            Cell::Years(y) => {
                if self.current.years.is_none() {
                    self.current.years = Some(y);
                }
            }
            Cell::Location(l) => {
                if self.current.location.is_none() {
                    self.current.location = Some(l);
                }
            }
            Cell::Unknown(text) => {
                if self.current.degree.is_empty() {
                    self.current.degree = text;
                } else if self.current.university.is_empty() {
                    self.current.university = text;
                }
            }
        }
    }
}

pub fn build_education<'a>(blocks: impl IntoIterator<Item = &'a RawEntry>) -> Vec<EducationEntry> {
    let mut asm = Assembler::default();
    for block in blocks {
        for line in block.head.iter().chain(&block.bullets) {
            for cell in cells_of(line) {
                asm.accept(cell);
            }
        }
        asm.flush();
    }
    asm.done
}
