//! Job-title extraction.

use crate::vocabulary::matching::split_words;
use crate::vocabulary::VOCABULARY;

/// Words inspected after a lead-in phrase.
const TITLE_WINDOW_WORDS: usize = 8;

/// Longest first line accepted by the fallback.
const FALLBACK_MAX_WORDS: usize = 8;

/// Filler skipped between a lead-in and the title itself.
const FILLER: &[&str] = &[
    "a", "an", "the", "is", "of", "for", "as", "our", "this", "to", "be", "are", "new",
];

/// Returns the first lead-in match that reaches a role noun, else the
/// fallback from the first line, else an empty string.
pub fn extract_title(text: &str) -> String {
    text.lines()
        .find_map(title_after_lead_in)
        .or_else(|| fallback_title(text))
        .unwrap_or_default()
}

fn title_after_lead_in(line: &str) -> Option<String> {
    let words = split_words(line);
    let lower: Vec<String> = words.iter().map(|(_, w)| w.to_lowercase()).collect();

    for i in 0..words.len() {
        for lead_in in VOCABULARY.title_lead_ins() {
            let parts: Vec<&str> = lead_in.split(' ').collect();
            let end = i + parts.len();
            if end > words.len() || lower[i..end].iter().map(String::as_str).ne(parts.iter().copied()) {
                continue;
            }
            if let Some(title) = title_in_window(line, &words[end..], &lower[end..]) {
                return Some(title);
            }
        }
    }
    None
}

/// Skips filler, then takes words up to the first role noun plus any role
/// nouns directly after it (`Lead Engineer`, `Engineer Intern`).
fn title_in_window(line: &str, words: &[(usize, &str)], lower: &[String]) -> Option<String> {
    let window = words.len().min(TITLE_WINDOW_WORDS);
    let first = (0..window).find(|&i| !FILLER.contains(&lower[i].as_str()))?;
    let noun = (first..window).find(|&i| VOCABULARY.is_role_noun(&lower[i]))?;
    let mut last = noun;
    while last + 1 < words.len() && VOCABULARY.is_role_noun(&lower[last + 1]) {
        last += 1;
    }
    let (start, _) = words[first];
    let (last_at, last_word) = words[last];
    Some(trim_title(&line[start..last_at + last_word.len()]))
}

fn fallback_title(text: &str) -> Option<String> {
    let first_line = text.lines().map(str::trim).find(|l| !l.is_empty())?;
    let cut = [" — ", " – ", " - ", "|", ":", ","]
        .iter()
        .filter_map(|sep| first_line.find(sep))
        .min()
        .map_or(first_line, |at| &first_line[..at]);
    let words = split_words(cut);
    let has_role_noun = words.iter().any(|(_, w)| VOCABULARY.is_role_noun(w));
    (has_role_noun && words.len() <= FALLBACK_MAX_WORDS).then(|| trim_title(cut))
}

fn trim_title(raw: &str) -> String {
    raw.trim_matches(|c: char| !c.is_alphanumeric() && c != '+' && c != '#')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lead_in_then_role_noun() {
        assert_eq!(
            extract_title("We are seeking a Senior Data Analyst to join our team."),
            "Senior Data Analyst"
        );
    }

    #[test]
    fn test_colon_lead_in() {
        assert_eq!(
            extract_title("About us\nPosition: Backend Developer (Remote)"),
            "Backend Developer"
        );
    }

    #[test]
    fn test_consecutive_role_nouns_are_kept() {
        assert_eq!(
            extract_title("We're hiring a Lead Engineer for payments"),
            "Lead Engineer"
        );
    }

    #[test]
    fn test_lead_in_without_role_noun_is_skipped() {
        let jd = "In this role you will build pipelines.\nLooking for a Machine Learning Engineer.";
        assert_eq!(extract_title(jd), "Machine Learning Engineer");
    }

    #[test]
    fn test_fallback_to_first_line() {
        assert_eq!(
            extract_title("Senior Rust Engineer — Core Infrastructure\nWe move fast."),
            "Senior Rust Engineer"
        );
    }

    #[test]
    fn test_no_title_found() {
        assert_eq!(extract_title("We build payment rails for small shops."), "");
        assert_eq!(extract_title(""), "");
    }
}
