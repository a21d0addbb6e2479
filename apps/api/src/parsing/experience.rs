//! Experience entries from segmented (head, bullets) blocks.

use crate::models::ExperienceEntry;
use crate::parsing::lines::{find_date_span, pipe_cells, trim_separators};
use crate::parsing::machine::RawEntry;

pub fn build_experience<'a>(blocks: impl IntoIterator<Item = &'a RawEntry>) -> Vec<ExperienceEntry> {
    blocks
        .into_iter()
        .map(build_entry)
        .filter(|e| !e.is_empty())
        .collect()
}

/// Head lines are read in order. The first dated line supplies the dates and
/// the text around the range; every other head line and cell fills `title`
/// first, then `company`. Text after the date range (usually a location) is
/// only used when nothing else named the role or employer.
fn build_entry(raw: &RawEntry) -> ExperienceEntry {
    let mut entry = ExperienceEntry::default();
    let mut fields: Vec<String> = Vec::new();
    let mut trailing: Vec<String> = Vec::new();
    let mut dated = false;

    for line in &raw.head {
        match find_date_span(line).filter(|_| !dated) {
            Some(span) => {
                dated = true;
                entry.start_date = span.start;
                entry.end_date = span.end;
                fields.extend(split_cells(&span.prefix));
                trailing.extend(split_cells(&span.suffix));
            }
            None => fields.extend(split_cells(line)),
        }
    }

    let mut slots = fields.into_iter().chain(trailing);
    entry.title = slots.next().unwrap_or_default();
    entry.company = slots.next().unwrap_or_default();
    entry.bullets = raw.bullets.clone();
    entry
}

/// Splits a head line on pipes, spaced dashes and a single ` at `.
fn split_cells(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    for cell in pipe_cells(line) {
        let parts = cell
            .split(" — ")
            .flat_map(|p| p.split(" – "))
            .flat_map(|p| p.split(" - "));
        for part in parts {
            match part.split_once(" at ") {
                Some((role, employer)) => {
                    push_cell(&mut cells, role);
                    push_cell(&mut cells, employer);
                }
                None => push_cell(&mut cells, part),
            }
        }
    }
    cells
}

fn push_cell(cells: &mut Vec<String>, raw: &str) {
    let cell = trim_separators(raw);
    if !cell.is_empty() {
        cells.push(cell.to_string());
    }
}
