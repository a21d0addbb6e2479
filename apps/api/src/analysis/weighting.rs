//! Keyword weighting.
//!
//! Each occurrence contributes 1.0, or [`BOOST`] when it sits in the front
//! zone (first [`FRONT_ZONE_LINES`] non-blank lines) or inside a requirement
//! window. The boost is applied at most once per occurrence.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::analysis::tokenizer::{tokenize, Token};
use crate::models::{KeywordCategory, WeightedKeyword};
use crate::parsing::lines::strip_bullet;
use crate::vocabulary::matching::split_words;
use crate::vocabulary::VOCABULARY;

pub const FRONT_ZONE_LINES: usize = 5;
pub const BOOST: f64 = 1.5;

/// Shortest out-of-vocabulary word kept in the requirements bucket.
const MIN_REQUIREMENT_CHARS: usize = 3;

/// Per-line boost layout: front-zone membership and where (if anywhere) the
/// requirement window starts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineZones {
    pub front: bool,
    /// Byte offset inside the line from which tokens are in a requirement window.
    pub window_from: Option<usize>,
}

impl LineZones {
    fn boosted(&self, token: &Token) -> bool {
        self.front || self.in_window(token)
    }

    fn in_window(&self, token: &Token) -> bool {
        self.window_from.is_some_and(|from| token.offset >= from)
    }
}

pub fn line_zones(text: &str) -> Vec<LineZones> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut zones = vec![LineZones::default(); lines.len()];

    let mut non_blank = 0;
    for (idx, line) in lines.iter().enumerate() {
        if !line.trim().is_empty() {
            non_blank += 1;
            zones[idx].front = non_blank <= FRONT_ZONE_LINES;
        }
    }

    let mut bullet_run = false;
    for (idx, line) in lines.iter().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let is_bullet = strip_bullet(trimmed).is_some();
        if bullet_run && is_bullet {
            zones[idx].window_from = Some(0);
        }
        if let Some(end) = signal_end(line) {
            zones[idx].window_from = Some(zones[idx].window_from.map_or(end, |w| w.min(end)));
            bullet_run = true;
        } else if !is_bullet {
            bullet_run = false;
        }
    }
    zones
}

/// End offset of the earliest requirement signal in `line`.
fn signal_end(line: &str) -> Option<usize> {
    let words: Vec<(usize, String)> = split_words(line)
        .into_iter()
        .map(|(at, w)| (at, w.to_lowercase()))
        .collect();

    let mut best: Option<(usize, usize)> = None;
    for signal in VOCABULARY.requirement_signals() {
        let n = signal.len();
        if n == 0 || n > words.len() {
            continue;
        }
        for i in 0..=words.len() - n {
            let matched = words[i..i + n].iter().map(|(_, w)| w).eq(signal.iter());
            if matched {
                let (start, _) = words[i];
                let (last_at, last) = &words[i + n - 1];
                let end = last_at + last.len();
                if best.map_or(true, |(s, _)| start < s) {
                    best = Some((start, end));
                }
                break;
            }
        }
    }
    best.map(|(_, end)| end)
}

#[derive(Debug)]
struct Tally {
    term: String,
    weight: f64,
    frequency: u32,
    first_offset: usize,
}

impl Tally {
    fn new(term: String, first_offset: usize) -> Self {
        Self {
            term,
            weight: 0.0,
            frequency: 0,
            first_offset,
        }
    }

    fn add(&mut self, boosted: bool) {
        self.weight += if boosted { BOOST } else { 1.0 };
        self.frequency += 1;
    }
}

/// Builds the per-category keyword profile of `text`. Categories without
/// keywords are left out of the map.
pub fn weigh(text: &str) -> BTreeMap<String, Vec<WeightedKeyword>> {
    let zones = line_zones(text);
    let signal_words: HashSet<&str> = VOCABULARY
        .requirement_signals()
        .iter()
        .flatten()
        .map(String::as_str)
        .collect();

    // Keyed by (category, lower-cased key) so a category never repeats a term.
    let mut tallies: HashMap<(KeywordCategory, String), Tally> = HashMap::new();

    for token in tokenize(text) {
        let zone = zones.get(token.line).copied().unwrap_or_default();

        let (category, key, display) = match token.term {
            Some(idx) => {
                let term = VOCABULARY.term(idx);
                (
                    KeywordCategory::Skill(term.category),
                    term.canonical.to_lowercase(),
                    term.canonical.to_string(),
                )
            }
            None if zone.in_window(&token) && is_requirement_word(&token, &signal_words) => (
                KeywordCategory::Requirements,
                token.key.clone(),
                token.surface.clone(),
            ),
            None => continue,
        };

        tallies
            .entry((category, key))
            .or_insert_with(|| Tally::new(display, token.global_offset))
            .add(zone.boosted(&token));
    }

    let mut grouped: BTreeMap<String, Vec<Tally>> = BTreeMap::new();
    for ((category, _), tally) in tallies {
        grouped.entry(category.as_str().to_string()).or_default().push(tally);
    }

    grouped
        .into_iter()
        .map(|(category, mut list)| {
            list.sort_by(|a, b| {
                b.weight
                    .total_cmp(&a.weight)
                    .then(a.first_offset.cmp(&b.first_offset))
            });
            let keywords = list
                .into_iter()
                .map(|t| WeightedKeyword {
                    term: t.term,
                    weight: t.weight,
                    frequency: t.frequency,
                })
                .collect();
            (category, keywords)
        })
        .collect()
}

fn is_requirement_word(token: &Token, signal_words: &HashSet<&str>) -> bool {
    token.key.chars().count() >= MIN_REQUIREMENT_CHARS
        && token.key.chars().any(char::is_alphabetic)
        && !VOCABULARY.is_stop_word(&token.key)
        && !signal_words.contains(token.key.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(map: &BTreeMap<String, Vec<WeightedKeyword>>, cat: &str) -> Vec<(String, f64)> {
        map.get(cat)
            .map(|v| v.iter().map(|k| (k.term.clone(), k.weight)).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_front_zone_is_first_five_non_blank_lines() {
        let zones = line_zones("a\n\nb\nc\nd\ne\nf");
        let front: Vec<bool> = zones.iter().map(|z| z.front).collect();
        assert_eq!(front, vec![true, false, true, true, true, true, false]);
    }

    #[test]
    fn test_requirement_window_starts_after_signal() {
        let line = "You will work with Go. Experience with Kafka";
        let zones = line_zones(line);
        let from = zones[0].window_from.unwrap();
        assert_eq!(&line[from..], " Kafka");
    }

    #[test]
    fn test_bullets_after_signal_line_are_in_window() {
        let zones = line_zones("Requirements:\n\n- Go\n* Rust\nAbout us\n- Snacks");
        let windows: Vec<Option<usize>> = zones.iter().map(|z| z.window_from).collect();
        assert_eq!(
            windows,
            vec![Some("Requirements".len()), None, Some(0), Some(0), None, None]
        );
    }

    #[test]
    fn test_occurrences_sum_with_single_boost() {
        let text = "l1\nl2\nl3\nl4\nl5\nWe use Docker daily.\nMust have Docker.\nDocker again.";
        let map = weigh(text);
        // plain + window + plain
        assert_eq!(weights(&map, "tools"), vec![("Docker".to_string(), 3.5)]);
        assert_eq!(map["tools"][0].frequency, 3);
    }

    #[test]
    fn test_front_and_window_boost_once() {
        let map = weigh("Must have Rust");
        assert_eq!(weights(&map, "programming"), vec![("Rust".to_string(), BOOST)]);
    }

    #[test]
    fn test_aliases_fold_into_canonical_term() {
        let map = weigh("Postgres, PostgreSQL and psql");
        let dbs = &map["databases"];
        assert_eq!(dbs.len(), 1);
        assert_eq!(dbs[0].term, "PostgreSQL");
        assert_eq!(dbs[0].frequency, 3);
    }

    #[test]
    fn test_requirements_bucket_collects_unknown_terms_in_window() {
        let text = "l1\nl2\nl3\nl4\nl5\nRequired: Terraform-free infra, Bazel builds\nWe like Bazel elsewhere";
        let map = weigh(text);
        let reqs = weights(&map, "requirements");
        assert!(reqs.iter().any(|(t, w)| t == "Bazel" && *w == BOOST));
        assert!(reqs.iter().all(|(t, _)| t != "elsewhere" && t != "like"));
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let map = weigh("l1\nl2\nl3\nl4\nl5\nMySQL then Redis");
        let terms: Vec<_> = weights(&map, "databases").into_iter().map(|(t, _)| t).collect();
        assert_eq!(terms, vec!["MySQL", "Redis"]);
    }

    #[test]
    fn test_empty_text_has_no_categories() {
        assert!(weigh("").is_empty());
        assert!(weigh("   \n\n").is_empty());
    }
}
