//! Process-wide, read-only vocabulary shared by every pipeline stage.
//!
//! Built once on first use from the static tables in [`tables`] and never
//! mutated afterwards; concurrent callers share the same instance.

pub mod matching;
pub mod tables;

use std::cmp::Reverse;
use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::SkillCategory;
use crate::parsing::lines::SectionKind;
use matching::{find_term, is_bounded, normalize, split_words};
pub use tables::VOCABULARY_VERSION;

pub static VOCABULARY: Lazy<Vocabulary> = Lazy::new(Vocabulary::builtin);

/// A known skill: canonical spelling, category and every equivalent form.
#[derive(Debug)]
pub struct SkillTerm {
    pub canonical: &'static str,
    pub category: SkillCategory,
    pub forms: &'static [&'static str],
}

/// A compiled, case-insensitive pattern for one surface form of a skill.
#[derive(Debug)]
struct FormPattern {
    term: usize,
    form: &'static str,
    regex: Regex,
}

/// A bounded occurrence of a skill form inside a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMatch {
    pub term: usize,
    pub form: &'static str,
    pub start: usize,
    pub end: usize,
}

#[derive(Debug)]
pub struct Vocabulary {
    terms: Vec<SkillTerm>,
    /// Lower-cased form words joined by single spaces → term index.
    phrases: HashMap<String, usize>,
    max_phrase_words: usize,
    form_patterns: Vec<FormPattern>,
    /// Phrase key → the only casing under which that form counts.
    case_sensitive: HashMap<String, &'static str>,
    headers: HashMap<&'static str, SectionKind>,
    skill_labels: HashMap<&'static str, SkillCategory>,
    stop_words: HashSet<&'static str>,
    requirement_signals: Vec<Vec<String>>,
}

impl Vocabulary {
    fn builtin() -> Self {
        let mut terms = Vec::with_capacity(tables::SKILLS.len());
        let mut phrases = HashMap::new();
        let mut form_patterns = Vec::new();
        let mut max_phrase_words = 1;

        for (idx, row) in tables::SKILLS.iter().enumerate() {
            terms.push(SkillTerm {
                canonical: row.forms[0],
                category: row.category,
                forms: row.forms,
            });
            for &form in row.forms {
                let key = phrase_key(form);
                max_phrase_words = max_phrase_words.max(key.split(' ').count());
                phrases.entry(key).or_insert(idx);

                let flags = if tables::CASE_SENSITIVE_FORMS.contains(&form) {
                    ""
                } else {
                    "(?i)"
                };
                let regex = Regex::new(&format!("{flags}{}", regex::escape(form)))
                    .expect("escaped vocabulary form is a valid pattern");
                form_patterns.push(FormPattern {
                    term: idx,
                    form,
                    regex,
                });
            }
        }

        let case_sensitive = tables::CASE_SENSITIVE_FORMS
            .iter()
            .map(|form| (phrase_key(form), *form))
            .collect();
        let headers = tables::SECTION_HEADERS
            .iter()
            .flat_map(|(kind, names)| names.iter().map(move |n| (*n, *kind)))
            .collect();
        let skill_labels = tables::SKILL_LABELS
            .iter()
            .flat_map(|(cat, labels)| labels.iter().map(move |l| (*l, *cat)))
            .collect();
        let requirement_signals = tables::REQUIREMENT_SIGNALS
            .iter()
            .map(|s| phrase_key(s).split(' ').map(String::from).collect())
            .collect();

        Vocabulary {
            terms,
            phrases,
            max_phrase_words,
            form_patterns,
            case_sensitive,
            headers,
            skill_labels,
            stop_words: tables::STOP_WORDS.iter().copied().collect(),
            requirement_signals,
        }
    }

    pub fn version(&self) -> &'static str {
        VOCABULARY_VERSION
    }

    pub fn term(&self, idx: usize) -> &SkillTerm {
        &self.terms[idx]
    }

    pub fn max_phrase_words(&self) -> usize {
        self.max_phrase_words
    }

    /// Looks up a phrase given as lower-cased words joined by single spaces.
    pub fn phrase(&self, key: &str) -> Option<usize> {
        self.phrases.get(key).copied()
    }

    /// Like [`Vocabulary::phrase`], but for text as written: a form that is also
    /// an everyday word only resolves with its exact casing.
    pub fn phrase_as_written(&self, surface: &str) -> Option<usize> {
        let key = phrase_key(surface);
        let idx = self.phrase(&key)?;
        match self.case_sensitive.get(&key) {
            Some(form) if spaced(surface) != *form => None,
            _ => Some(idx),
        }
    }

    /// Resolves any surface form (`"postgres"`, `"Power  BI"`) to its skill.
    pub fn lookup(&self, surface: &str) -> Option<&SkillTerm> {
        self.phrase(&phrase_key(surface)).map(|idx| &self.terms[idx])
    }

    /// True when both strings name the same skill, either literally or
    /// through the synonym table.
    pub fn same_skill(&self, a: &str, b: &str) -> bool {
        if normalize(a) == normalize(b) {
            return true;
        }
        match (self.phrase(&phrase_key(a)), self.phrase(&phrase_key(b))) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Every bounded occurrence of any skill form in `text`, with offsets into
    /// `text` itself. Overlapping matches are all reported.
    pub fn find_forms(&self, text: &str) -> Vec<FormMatch> {
        let mut found = Vec::new();
        for pattern in &self.form_patterns {
            for m in pattern.regex.find_iter(text) {
                if is_bounded(text, m.start(), m.end()) {
                    found.push(FormMatch {
                        term: pattern.term,
                        form: pattern.form,
                        start: m.start(),
                        end: m.end(),
                    });
                }
            }
        }
        found
    }

    /// The first place `text` names `term`, as written in `text`. Known skills
    /// match through any of their forms; other terms match as bounded,
    /// case-insensitive text.
    pub fn find_mention<'t>(&self, text: &'t str, term: &str) -> Option<&'t str> {
        if let Some(idx) = self.phrase(&phrase_key(term)) {
            return self
                .find_forms(text)
                .into_iter()
                .filter(|m| m.term == idx)
                .min_by_key(|m| (m.start, Reverse(m.end - m.start)))
                .map(|m| &text[m.start..m.end]);
        }
        let needle = term.trim();
        let at = *find_term(text, needle).first()?;
        text.get(at..at + needle.len())
            .filter(|written| written.eq_ignore_ascii_case(needle))
    }

    pub fn mentions(&self, text: &str, term: &str) -> bool {
        self.find_mention(text, term).is_some()
    }

    /// Classifies an already-normalized header line.
    pub fn section_for_header(&self, normalized: &str) -> Option<SectionKind> {
        self.headers.get(normalized).copied()
    }

    /// Classifies a normalized skill-line label (`"programming languages"`).
    pub fn skill_label(&self, normalized: &str) -> Option<SkillCategory> {
        self.skill_labels.get(normalized).copied()
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Requirement-signal phrases as lower-cased word sequences.
    pub fn requirement_signals(&self) -> &[Vec<String>] {
        &self.requirement_signals
    }

    pub fn is_role_noun(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        let singular = word.strip_suffix('s').unwrap_or(&word);
        tables::ROLE_NOUNS
            .iter()
            .any(|noun| *noun == word || *noun == singular)
    }

    pub fn title_lead_ins(&self) -> &'static [&'static str] {
        tables::TITLE_LEAD_INS
    }
}

/// Lower-cased words of `text` joined by single spaces; the key space used for
/// phrase lookups.
pub fn phrase_key(text: &str) -> String {
    split_words(text)
        .into_iter()
        .map(|(_, w)| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Words of `text` joined by single spaces, casing kept.
fn spaced(text: &str) -> String {
    split_words(text)
        .into_iter()
        .map(|(_, w)| w)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_resolves_aliases_to_canonical() {
        let term = VOCABULARY.lookup("postgres").unwrap();
        assert_eq!(term.canonical, "PostgreSQL");
        assert_eq!(term.category, SkillCategory::Databases);
    }

    #[test]
    fn test_lookup_handles_multi_word_and_spacing() {
        let term = VOCABULARY.lookup("Power   BI").unwrap();
        assert_eq!(term.canonical, "Power BI");
        assert_eq!(term.category, SkillCategory::Tools);
    }

    #[test]
    fn test_lookup_unknown_term() {
        assert!(VOCABULARY.lookup("basket weaving").is_none());
    }

    #[test]
    fn test_same_skill_through_synonyms() {
        assert!(VOCABULARY.same_skill("Postgres", "PostgreSQL"));
        assert!(VOCABULARY.same_skill("k8s", "Kubernetes"));
        assert!(VOCABULARY.same_skill("Team Leadership", "team  leadership"));
        assert!(!VOCABULARY.same_skill("MySQL", "PostgreSQL"));
    }

    #[test]
    fn test_find_forms_reports_source_offsets() {
        let text = "Tuned Postgres and MySQL";
        let found = VOCABULARY.find_forms(text);
        let pg = found.iter().find(|m| m.form == "Postgres").unwrap();
        assert_eq!(&text[pg.start..pg.end], "Postgres");
        assert!(found.iter().any(|m| m.form == "MySQL"));
    }

    #[test]
    fn test_find_forms_skips_embedded_matches() {
        let found = VOCABULARY.find_forms("Wrote JavaScript");
        assert!(found.iter().all(|m| m.form != "Java"));
    }

    #[test]
    fn test_everyday_words_need_exact_casing() {
        assert!(VOCABULARY.phrase_as_written("Excel").is_some());
        assert!(VOCABULARY.phrase_as_written("excel").is_none());
        assert!(VOCABULARY.phrase_as_written("node").is_none());
        assert!(VOCABULARY.phrase_as_written("node.js").is_some());
        assert!(VOCABULARY.phrase_as_written("postgres").is_some());
        assert!(VOCABULARY.find_forms("rebalanced every node").is_empty());
    }

    #[test]
    fn test_find_mention_returns_text_as_written() {
        let text = "Tuned Postgres queries";
        assert_eq!(VOCABULARY.find_mention(text, "PostgreSQL"), Some("Postgres"));
        assert_eq!(
            VOCABULARY.find_mention("Deployed to Google Cloud Platform", "GCP"),
            Some("Google Cloud Platform")
        );
        assert_eq!(VOCABULARY.find_mention("Helped the team excel", "Excel"), None);
        assert_eq!(VOCABULARY.find_mention("Owned the ONBOARDING flow", "onboarding"), Some("ONBOARDING"));
        assert!(!VOCABULARY.mentions("Led standups", "Kafka"));
    }

    #[test]
    fn test_headers_and_labels() {
        assert_eq!(
            VOCABULARY.section_for_header("WORK EXPERIENCE"),
            Some(SectionKind::Experience)
        );
        assert_eq!(
            VOCABULARY.skill_label("programming languages"),
            Some(SkillCategory::Programming)
        );
        assert!(VOCABULARY.section_for_header("WORK").is_none());
    }

    #[test]
    fn test_role_nouns_accept_plurals() {
        assert!(VOCABULARY.is_role_noun("Engineer"));
        assert!(VOCABULARY.is_role_noun("developers"));
        assert!(!VOCABULARY.is_role_noun("team"));
    }

    #[test]
    fn test_every_form_has_a_phrase_key() {
        for row in tables::SKILLS {
            for form in row.forms {
                assert!(
                    VOCABULARY.lookup(form).is_some(),
                    "form {form} must resolve"
                );
            }
        }
    }
}
