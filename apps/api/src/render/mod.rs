//! Résumé formatter: renders an optimized record into the canonical
//! plain-text layout.
//!
//! Layout is fixed and deterministic. Sections with no content are omitted
//! entirely; absent optional fields never leave a dangling separator.

use crate::models::{EducationEntry, ExperienceEntry, OptimizedResume, ProjectEntry, SkillCategory};

/// Column width the name and contact lines are centered in.
pub const COLUMN_WIDTH: usize = 80;

const BULLET: &str = "  • ";
const CONTACT_SEPARATOR: &str = " | ";
/// Between the entry title and its date range.
const TITLE_DASH: &str = " — ";
/// Between start and end dates.
const RANGE_DASH: &str = " – ";

pub fn format(resume: &OptimizedResume) -> String {
    let mut blocks: Vec<Vec<String>> = Vec::new();

    let header = header_block(resume);
    if !header.is_empty() {
        blocks.push(header);
    }

    let sections = [
        ("SUMMARY", summary_lines(resume)),
        ("SKILLS", skill_lines(resume)),
        ("EXPERIENCE", entries(resume.experience.as_slice(), experience_lines)),
        ("EDUCATION", entries(resume.education.as_slice(), education_lines)),
        ("PROJECTS", entries(resume.projects.as_slice(), project_lines)),
        ("ACHIEVEMENTS", bullet_list(&resume.achievements)),
        ("CERTIFICATIONS", bullet_list(&resume.certifications)),
    ];
    for (label, body) in sections {
        if body.is_empty() {
            continue;
        }
        let mut block = vec![label.to_string()];
        block.extend(body);
        blocks.push(block);
    }

    if blocks.is_empty() {
        return String::new();
    }

    let mut out = blocks
        .into_iter()
        .map(|b| b.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n");
    out.push('\n');
    out
}

/// Left-pads `text` so it sits centered in [`COLUMN_WIDTH`]. Lines wider than
/// the column are returned unchanged; no trailing padding is added.
pub fn center(text: &str) -> String {
    let width = text.chars().count();
    if width >= COLUMN_WIDTH {
        return text.to_string();
    }
    let pad = (COLUMN_WIDTH - width) / 2;
    format!("{}{text}", " ".repeat(pad))
}

// ────────────────────────────────────────────────────────────────────────────
// Blocks
// ────────────────────────────────────────────────────────────────────────────

fn header_block(resume: &OptimizedResume) -> Vec<String> {
    let mut lines = Vec::new();
    let name = resume.name.trim();
    if !name.is_empty() {
        lines.push(center(&name.to_uppercase()));
    }
    let contact = resume.contact.present_fields();
    if !contact.is_empty() {
        lines.push(center(&contact.join(CONTACT_SEPARATOR)));
    }
    lines
}

fn summary_lines(resume: &OptimizedResume) -> Vec<String> {
    let summary = resume.summary.trim();
    if summary.is_empty() {
        Vec::new()
    } else {
        vec![summary.to_string()]
    }
}

fn skill_lines(resume: &OptimizedResume) -> Vec<String> {
    SkillCategory::ALL
        .into_iter()
        .filter_map(|category| {
            let terms = resume.skills.get(category);
            if terms.is_empty() {
                return None;
            }
            Some(format!("{}: {}", category.label(), terms.join(", ")))
        })
        .collect()
}

/// Renders each entry and separates them with a blank line. Entries that
/// render to nothing are skipped.
fn entries<T>(items: &[T], render: fn(&T) -> Vec<String>) -> Vec<String> {
    let mut lines = Vec::new();
    for item in items {
        let rendered = render(item);
        if rendered.is_empty() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.extend(rendered);
    }
    lines
}

fn experience_lines(entry: &ExperienceEntry) -> Vec<String> {
    let mut lines = Vec::new();
    let range = join_present(&[entry.start_date.as_str(), entry.end_date.as_str()], RANGE_DASH);
    let head = join_present(&[entry.title.as_str(), range.as_str()], TITLE_DASH);
    if !head.is_empty() {
        lines.push(head);
    }
    if !entry.company.trim().is_empty() {
        lines.push(entry.company.trim().to_uppercase());
    }
    lines.extend(bullet_list(&entry.bullets));
    lines
}

fn education_lines(entry: &EducationEntry) -> Vec<String> {
    let mut lines = Vec::new();
    let years = entry.years.as_deref().unwrap_or_default();
    let head = join_present(&[entry.degree.as_str(), years], TITLE_DASH);
    if !head.is_empty() {
        lines.push(head);
    }
    if !entry.university.trim().is_empty() {
        lines.push(entry.university.trim().to_string());
    }
    if let Some(location) = entry.location.as_deref().map(str::trim).filter(|l| !l.is_empty()) {
        lines.push(location.to_string());
    }
    lines
}

fn project_lines(project: &ProjectEntry) -> Vec<String> {
    let mut lines = Vec::new();
    let tech = project.tech_stack.as_deref().unwrap_or_default();
    let head = join_present(&[project.title.as_str(), tech], CONTACT_SEPARATOR);
    if !head.is_empty() {
        lines.push(head);
    }
    if let Some(description) = present(project.description.as_deref()) {
        lines.push(format!("{BULLET}{description}"));
    }
    if let Some(contribution) = present(project.contribution.as_deref()) {
        lines.push(format!("{BULLET}Contribution: {contribution}"));
    }
    lines
}

fn bullet_list(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|i| i.trim())
        .filter(|i| !i.is_empty())
        .map(|i| format!("{BULLET}{i}"))
        .collect()
}

fn join_present(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
