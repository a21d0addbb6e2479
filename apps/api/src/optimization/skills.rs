//! Skill reordering within each category.

use crate::models::{KeywordCategory, SkillCategory, Skills};
use crate::optimization::profile::{KeywordProfile, ProfileKeyword};
use crate::vocabulary::matching::contains_term;
use crate::vocabulary::VOCABULARY;

/// True when a résumé skill entry names the keyword, directly, through the
/// synonym table, or as a bounded term inside a longer entry.
pub fn skill_matches(entry: &str, keyword: &str) -> bool {
    VOCABULARY.same_skill(entry, keyword) || contains_term(entry, keyword)
}

/// Heaviest keyword the entry matches, or 0.
fn score<'a>(entry: &str, keywords: impl IntoIterator<Item = &'a ProfileKeyword>) -> f64 {
    keywords
        .into_iter()
        .filter(|k| skill_matches(entry, &k.term))
        .map(|k| k.weight)
        .fold(0.0, f64::max)
}

/// Moves matching entries to the front of each bucket, heaviest first. The
/// sort is stable so unmatched entries and equal scores keep source order.
/// Buckets never exchange entries and their relative order is fixed.
pub fn reorder_skills(skills: &mut Skills, profile: &KeywordProfile) {
    for category in SkillCategory::ALL {
        let bucket = skills.get_mut(category);
        let mut scored: Vec<(f64, String)> = bucket
            .drain(..)
            .map(|entry| {
                let s = match category {
                    // Unlabelled skills land in `others`, so any keyword may describe them.
                    SkillCategory::Others => score(&entry, profile.all()),
                    c => score(&entry, profile.category(KeywordCategory::Skill(c))),
                };
                (s, entry)
            })
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));
        bucket.extend(scored.into_iter().map(|(_, entry)| entry));
    }
}
