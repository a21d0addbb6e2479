//! Skills section: `Label: term, term` lines classified by explicit label.

use crate::models::{SkillCategory, Skills};
use crate::parsing::machine::ListItem;
use crate::vocabulary::VOCABULARY;

const TERM_DELIMITERS: &[char] = &[',', ';', '•', '·', '|', '▪', '●'];

pub fn build_skills<'a>(items: impl IntoIterator<Item = &'a ListItem>) -> Skills {
    let mut skills = Skills::default();
    for item in items {
        let (category, terms) = split_label(&item.text);
        for term in split_terms(terms) {
            skills.insert(category, term);
        }
    }
    skills
}

/// Resolves an explicit `Label:` prefix. Lines without a known label go to
/// `others` in full.
fn split_label(line: &str) -> (SkillCategory, &str) {
    if let Some((label, rest)) = line.split_once(':') {
        if let Some(category) = VOCABULARY.skill_label(&normalize_label(label)) {
            return (category, rest);
        }
        return (SkillCategory::Others, rest);
    }
    (SkillCategory::Others, line)
}

fn normalize_label(label: &str) -> String {
    label
        .replace('&', " and ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Splits on delimiters outside parentheses, so `Python (Django, Flask)` stays one term.
fn split_terms(text: &str) -> Vec<&str> {
    let mut terms = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in text.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            c if depth == 0 && TERM_DELIMITERS.contains(&c) => {
                push_term(&mut terms, &text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    push_term(&mut terms, &text[start..]);
    terms
}

fn push_term<'a>(terms: &mut Vec<&'a str>, raw: &'a str) {
    let term = raw.trim().trim_end_matches('.').trim();
    let term = term.strip_prefix("and ").unwrap_or(term).trim();
    if !term.is_empty() {
        terms.push(term);
    }
}
