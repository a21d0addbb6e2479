//! Line classification for the résumé state machine.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::vocabulary::VOCABULARY;

/// Résumé sections the parser recognises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Achievements,
    Certifications,
    /// Recognised as a boundary but its content is discarded.
    Ignored,
}

impl SectionKind {
    /// Sections whose content is grouped into header + bullets entries.
    pub fn has_entries(&self) -> bool {
        matches!(
            self,
            SectionKind::Experience | SectionKind::Education | SectionKind::Projects
        )
    }
}

/// A date range such as `2020 – Present`, `Jan 2019 - Mar 2021` or `06/2018 to 08/2019`.
const DATE_TOKEN: &str = r"(?:(?:january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sept|sep|oct|nov|dec)\.?,?\s+(?:19|20)\d{2}|\d{1,2}/(?:19|20)\d{2}|(?:19|20)\d{2})";

pub static DATE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?P<start>{DATE_TOKEN})\s*(?:-|–|—|\bto\b)\s*(?P<end>{DATE_TOKEN}|present|current|now|today|ongoing)\b"
    ))
    .unwrap()
});

pub static SINGLE_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

const BULLET_GLYPHS: &[char] = &[
    '•', '●', '▪', '◦', '‣', '∙', '·', '*', '-', '–', '○', '■', '□', '➢', '►', '✓', '➤', '◆',
];

/// The classification of a single résumé line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    Blank,
    Header(SectionKind),
    /// Bullet text with its glyph removed.
    Bullet(String),
    /// A non-bullet line containing a date range.
    Dated(String),
    /// A line starting with a lower-case letter; continues the previous line.
    Continuation(String),
    Text(String),
}

/// A date range found inside a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSpan {
    pub start: String,
    pub end: String,
    /// Text before the range, with trailing separators removed.
    pub prefix: String,
    /// Text after the range, with leading separators removed.
    pub suffix: String,
    /// The range exactly as written.
    pub raw: String,
}

pub fn classify(line: &str) -> LineClass {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineClass::Blank;
    }
    if let Some(text) = strip_bullet(trimmed) {
        return LineClass::Bullet(text.to_string());
    }
    if let Some(kind) = header_kind(trimmed) {
        return LineClass::Header(kind);
    }
    if DATE_RANGE.is_match(trimmed) {
        return LineClass::Dated(trimmed.to_string());
    }
    if trimmed.chars().next().is_some_and(char::is_lowercase) {
        return LineClass::Continuation(trimmed.to_string());
    }
    LineClass::Text(trimmed.to_string())
}

/// Normalizes a candidate header: strips surrounding punctuation and a
/// trailing colon, spells `&` as `AND`, collapses whitespace, upper-cases.
pub fn normalize_header(line: &str) -> String {
    line.trim_matches(|c: char| !c.is_alphanumeric())
        .replace('&', " AND ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}

fn header_kind(trimmed: &str) -> Option<SectionKind> {
    // Headers are short; skip the lookup for anything that reads like prose.
    if trimmed.len() > 40 {
        return None;
    }
    VOCABULARY.section_for_header(&normalize_header(trimmed))
}

/// Returns the bullet text when `line` starts with a bullet glyph.
pub fn strip_bullet(line: &str) -> Option<&str> {
    let mut chars = line.chars();
    let first = chars.next()?;
    if !BULLET_GLYPHS.contains(&first) {
        return None;
    }
    let rest = chars.as_str();
    // `-2020` or `*args` style lines are text, not bullets.
    if first == '-' && rest.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }
    let text = rest.trim_start_matches(BULLET_GLYPHS).trim();
    (!text.is_empty()).then_some(text)
}

/// Finds the first date range in `line`.
pub fn find_date_span(line: &str) -> Option<DateSpan> {
    let caps = DATE_RANGE.captures(line)?;
    let whole = caps.get(0)?;
    Some(DateSpan {
        start: collapse(&caps["start"]),
        end: collapse(&caps["end"]),
        prefix: trim_separators(&line[..whole.start()]).to_string(),
        suffix: trim_separators(&line[whole.end()..]).to_string(),
        raw: whole.as_str().to_string(),
    })
}

/// Trims whitespace and the separators that surround dates and pipe cells.
pub fn trim_separators(s: &str) -> &str {
    s.trim_matches(|c: char| {
        c.is_whitespace() || matches!(c, '|' | '—' | '–' | '-' | ',' | '(' | ')' | ':' | '@')
    })
}

fn collapse(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits a pipe-delimited line into its non-empty cells.
pub fn pipe_cells(line: &str) -> Vec<&str> {
    line.split('|')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect()
}
