//! Projects, achievements, certifications and summary sections.

use crate::models::ProjectEntry;
use crate::parsing::lines::{pipe_cells, DATE_RANGE, SINGLE_YEAR};
use crate::parsing::machine::{ListItem, RawEntry};

// ────────────────────────────────────────────────────────────────────────────
// Projects
// ────────────────────────────────────────────────────────────────────────────

const TECH_LABELS: &[&str] = &["tech stack", "technologies", "tech", "stack", "built with", "tools"];
const CONTRIBUTION_LABELS: &[&str] = &["contribution", "contributions", "role", "my role"];

/// A block with a title line becomes one project; a block of bare bullets
/// becomes one project per bullet.
pub fn build_projects<'a>(blocks: impl IntoIterator<Item = &'a RawEntry>) -> Vec<ProjectEntry> {
    let mut projects = Vec::new();
    for block in blocks {
        match block.head.split_first() {
            Some((title_line, rest)) => {
                projects.push(structured_project(title_line, rest.iter().chain(&block.bullets)));
            }
            None => projects.extend(block.bullets.iter().map(|b| project_from_line(b))),
        }
    }
    projects.retain(|p| !p.title.is_empty() || p.description.is_some());
    projects
}

fn structured_project<'a>(
    title_line: &str,
    body: impl Iterator<Item = &'a String>,
) -> ProjectEntry {
    let mut project = if title_line.contains('|') {
        let cells: Vec<&str> = pipe_cells(title_line)
            .into_iter()
            .filter(|c| !is_date_only(c))
            .collect();
        let (title, tech) = cells.split_first().map_or(("", &[][..]), |(t, r)| (*t, r));
        ProjectEntry {
            title: title.to_string(),
            tech_stack: (!tech.is_empty()).then(|| tech.join(", ")),
            ..Default::default()
        }
    } else {
        project_from_line(title_line)
    };

    let inline_description = project.description.take();
    let mut description: Vec<&str> = inline_description.as_deref().into_iter().collect();
    let mut contribution: Vec<&str> = Vec::new();
    for line in body {
        match labelled(line) {
            Some((Label::Tech, value)) if project.tech_stack.is_none() => {
                project.tech_stack = Some(value.to_string());
            }
            Some((Label::Contribution, value)) => contribution.push(value),
            _ => description.push(line),
        }
    }
    project.description = join_non_empty(&description);
    project.contribution = join_non_empty(&contribution);
    project
}

/// `Title: description`, `Title — description` or just `Title`.
fn project_from_line(line: &str) -> ProjectEntry {
    let split = line
        .split_once(": ")
        .or_else(|| line.split_once(" — "))
        .or_else(|| line.split_once(" – "))
        .or_else(|| line.split_once(" - "));
    match split {
        Some((title, description)) if title.split_whitespace().count() <= 8 => ProjectEntry {
            title: title.trim().to_string(),
            description: Some(description.trim().to_string()).filter(|d| !d.is_empty()),
            ..Default::default()
        },
        _ => ProjectEntry {
            title: line.trim().to_string(),
            ..Default::default()
        },
    }
}

enum Label {
    Tech,
    Contribution,
}

fn labelled(line: &str) -> Option<(Label, &str)> {
    let (label, value) = line.split_once(':')?;
    let label = label.trim().to_lowercase();
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if TECH_LABELS.contains(&label.as_str()) {
        Some((Label::Tech, value))
    } else if CONTRIBUTION_LABELS.contains(&label.as_str()) {
        Some((Label::Contribution, value))
    } else {
        None
    }
}

fn is_date_only(cell: &str) -> bool {
    let rest = DATE_RANGE.replace_all(cell, "");
    let rest = SINGLE_YEAR.replace_all(&rest, "");
    rest.trim().is_empty()
}

fn join_non_empty(parts: &[&str]) -> Option<String> {
    let joined = parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    (!joined.is_empty()).then_some(joined)
}

// ────────────────────────────────────────────────────────────────────────────
// List sections
// ────────────────────────────────────────────────────────────────────────────

/// One entry per item. A plain line directly followed by bullets is a titled
/// block: `Title: first; second`.
pub fn build_list<'a>(items: impl IntoIterator<Item = &'a ListItem>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    let mut open_title: Option<usize> = None;
    let mut attached = 0usize;

    for item in items {
        if !item.bulleted {
            out.push(item.text.clone());
            open_title = Some(out.len() - 1);
            attached = 0;
            continue;
        }
        match open_title {
            Some(idx) => {
                let sep = if attached == 0 { ": " } else { "; " };
                out[idx].push_str(sep);
                out[idx].push_str(&item.text);
                attached += 1;
            }
            None => out.push(item.text.clone()),
        }
    }
    out
}

pub fn build_summary<'a>(items: impl IntoIterator<Item = &'a ListItem>) -> String {
    items
        .into_iter()
        .map(|i| i.text.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
