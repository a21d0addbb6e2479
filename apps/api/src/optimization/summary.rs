//! Summary synthesis for résumés that have none.
//!
//! The text only combines the JD title with skill terms the résumé already
//! lists (in `skills` or in experience bullets).

use crate::models::StructuredResume;
use crate::optimization::profile::KeywordProfile;
use crate::optimization::skills::skill_matches;
use crate::vocabulary::VOCABULARY;

pub const MAX_SUMMARY_SKILLS: usize = 5;

/// Top matched skills, heaviest first, spelled exactly as the résumé spells
/// them in its skills or experience bullets.
pub fn matched_skills(resume: &StructuredResume, profile: &KeywordProfile) -> Vec<String> {
    let mut found: Vec<(f64, String)> = Vec::new();
    let mut add = |weight: f64, term: &str| {
        if found.iter().any(|(_, t)| VOCABULARY.same_skill(t, term)) {
            return;
        }
        found.push((weight, term.to_string()));
    };

    for (_, entry) in resume.skills.iter_all() {
        let weight = profile
            .all()
            .filter(|k| skill_matches(entry, &k.term))
            .map(|k| k.weight)
            .fold(None, |acc: Option<f64>, w| Some(acc.map_or(w, |a| a.max(w))));
        if let Some(weight) = weight {
            add(weight, entry);
        }
    }

    for keyword in profile.skill_keywords() {
        let written = resume
            .experience
            .iter()
            .flat_map(|e| &e.bullets)
            .find_map(|b| VOCABULARY.find_mention(b, &keyword.term));
        if let Some(written) = written {
            add(keyword.weight, written);
        }
    }

    found.sort_by(|a, b| b.0.total_cmp(&a.0));
    found
        .into_iter()
        .take(MAX_SUMMARY_SKILLS)
        .map(|(_, t)| t)
        .collect()
}

/// A one-sentence summary, or `None` when no skill matches.
pub fn synthesize_summary(resume: &StructuredResume, profile: &KeywordProfile) -> Option<String> {
    let skills = matched_skills(resume, profile);
    if skills.is_empty() {
        return None;
    }
    let list = join_list(&skills);
    let title = profile.job_title();
    Some(if title.is_empty() {
        format!("Skilled in {list}.")
    } else {
        format!("Candidate for the {title} role with skills in {list}.")
    })
}

/// `A`, `A and B`, `A, B and C`.
fn join_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [rest @ .., last] => format!("{} and {last}", rest.join(", ")),
    }
}
