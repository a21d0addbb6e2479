//! Bullet ranking within a single experience entry.

use crate::optimization::profile::KeywordProfile;

/// Sum of the weights of every keyword whose term occurs in the bullet as a
/// case-insensitive substring.
pub fn bullet_score(bullet: &str, profile: &KeywordProfile) -> f64 {
    let haystack = bullet.to_lowercase();
    profile
        .all()
        .filter(|k| haystack.contains(&k.term.to_lowercase()))
        .map(|k| k.weight)
        .sum()
}

/// Stable sort by descending score; equal scores keep source order.
pub fn rank_bullets(bullets: Vec<String>, profile: &KeywordProfile) -> Vec<String> {
    let mut scored: Vec<(f64, String)> = bullets
        .into_iter()
        .map(|b| (bullet_score(&b, profile), b))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().map(|(_, b)| b).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{JDAnalysis, WeightedKeyword};

    fn profile(entries: &[(&str, &str, f64)]) -> KeywordProfile {
        let mut a = JDAnalysis::default();
        for (cat, term, weight) in entries {
            a.keywords_by_category
                .entry(cat.to_string())
                .or_default()
                .push(WeightedKeyword {
                    term: term.to_string(),
                    weight: *weight,
                    frequency: 1,
                });
        }
        KeywordProfile::from_analysis(&a).unwrap()
    }

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_score_sums_all_matching_keywords() {
        let p = profile(&[("databases", "PostgreSQL", 2.0), ("cloud", "AWS", 1.5), ("tools", "Git", 1.0)]);
        assert_eq!(bullet_score("Moved postgresql to aws", &p), 3.5);
        assert_eq!(bullet_score("Wrote docs", &p), 0.0);
    }

    #[test]
    fn test_rank_descending_and_stable() {
        let p = profile(&[("programming", "Rust", 2.0), ("tools", "Docker", 1.0)]);
        let ranked = rank_bullets(
            strings(&["Led standups", "Shipped Docker images", "Rewrote parser in Rust", "Hired two"]),
            &p,
        );
        assert_eq!(
            ranked,
            strings(&["Rewrote parser in Rust", "Shipped Docker images", "Led standups", "Hired two"])
        );
    }

    #[test]
    fn test_rank_keeps_cardinality() {
        let p = profile(&[("programming", "Go", 1.0)]);
        let input = strings(&["a", "b", "Go service", "c"]);
        let ranked = rank_bullets(input.clone(), &p);
        assert_eq!(ranked.len(), input.len());
        let mut sorted_in = input;
        let mut sorted_out = ranked;
        sorted_in.sort();
        sorted_out.sort();
        assert_eq!(sorted_in, sorted_out);
    }

    #[test]
    fn test_empty_profile_keeps_order() {
        let input = strings(&["x", "y", "z"]);
        assert_eq!(rank_bullets(input.clone(), &KeywordProfile::default()), input);
    }
}
