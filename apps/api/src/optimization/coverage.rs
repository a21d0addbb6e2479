//! Keyword coverage: which profile keywords a résumé already evidences.
//!
//! Score = Σ(weight of covered keywords) / Σ(weight of all keywords) × 100,
//! rounded. A profile with no weight scores 0.

use serde::{Deserialize, Serialize};

use crate::models::{KeywordCategory, StructuredResume};
use crate::optimization::profile::{KeywordProfile, ProfileKeyword};
use crate::optimization::skills::skill_matches;
use crate::vocabulary::VOCABULARY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeArea {
    Skills,
    Experience,
    Projects,
    Summary,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoveredKeyword {
    pub term: String,
    pub category: String,
    pub weight: f64,
    pub found_in: Vec<ResumeArea>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissingKeyword {
    pub term: String,
    pub category: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordCoverage {
    /// 0 – 100
    pub score: u32,
    pub covered: Vec<CoveredKeyword>,
    /// Heaviest first.
    pub missing: Vec<MissingKeyword>,
}

pub fn compute_coverage(resume: &StructuredResume, profile: &KeywordProfile) -> KeywordCoverage {
    let mut covered = Vec::new();
    let mut missing = Vec::new();
    let mut total_weight = 0.0_f64;
    let mut covered_weight = 0.0_f64;

    for keyword in profile.all() {
        total_weight += keyword.weight;
        let found_in = areas_with(resume, keyword);
        if found_in.is_empty() {
            missing.push(MissingKeyword {
                term: keyword.term.clone(),
                category: category_name(keyword.category),
                weight: keyword.weight,
            });
        } else {
            covered_weight += keyword.weight;
            covered.push(CoveredKeyword {
                term: keyword.term.clone(),
                category: category_name(keyword.category),
                weight: keyword.weight,
                found_in,
            });
        }
    }

    missing.sort_by(|a, b| b.weight.total_cmp(&a.weight));

    let score = if total_weight > 0.0 {
        ((covered_weight / total_weight) * 100.0).round() as u32
    } else {
        0
    };

    KeywordCoverage {
        score: score.min(100),
        covered,
        missing,
    }
}

fn areas_with(resume: &StructuredResume, keyword: &ProfileKeyword) -> Vec<ResumeArea> {
    let term = keyword.term.as_str();
    let mut areas = Vec::new();

    if resume.skills.iter_all().any(|(_, s)| skill_matches(s, term)) {
        areas.push(ResumeArea::Skills);
    }
    if resume
        .experience
        .iter()
        .flat_map(|e| &e.bullets)
        .any(|b| VOCABULARY.mentions(b, term))
    {
        areas.push(ResumeArea::Experience);
    }
    let in_projects = resume.projects.iter().any(|p| {
        [
            Some(p.title.as_str()),
            p.description.as_deref(),
            p.contribution.as_deref(),
            p.tech_stack.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|text| VOCABULARY.mentions(text, term))
    });
    if in_projects {
        areas.push(ResumeArea::Projects);
    }
    if VOCABULARY.mentions(&resume.summary, term) {
        areas.push(ResumeArea::Summary);
    }
    areas
}

fn category_name(category: KeywordCategory) -> String {
    category.as_str().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceEntry, JDAnalysis, ProjectEntry, Skills, WeightedKeyword};

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

    fn resume() -> StructuredResume {
        StructuredResume {
            summary: "Backend engineer".to_string(),
            skills: Skills {
                databases: vec!["Postgres".to_string()],
                ..Default::default()
            },
            experience: vec![ExperienceEntry {
                bullets: vec!["Ran Kafka consumers".to_string()],
                ..Default::default()
            }],
            projects: vec![ProjectEntry {
                title: "Ledger".to_string(),
                tech_stack: Some("Rust, Redis".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_coverage_score_and_areas() {
        let p = profile(&[
            ("databases", "PostgreSQL", 3.0),
            ("tools", "Kafka", 2.0),
            ("databases", "Redis", 1.0),
            ("cloud", "AWS", 4.0),
        ]);
        let report = compute_coverage(&resume(), &p);
        assert_eq!(report.score, 60);
        assert_eq!(report.covered.len(), 3);
        let pg = report.covered.iter().find(|c| c.term == "PostgreSQL").unwrap();
        assert_eq!(pg.found_in, vec![ResumeArea::Skills]);
        let redis = report.covered.iter().find(|c| c.term == "Redis").unwrap();
        assert_eq!(redis.found_in, vec![ResumeArea::Projects]);
        assert_eq!(report.missing.len(), 1);
        assert_eq!(report.missing[0].term, "AWS");
    }

    #[test]
    fn test_empty_profile_scores_zero() {
        let report = compute_coverage(&resume(), &KeywordProfile::default());
        assert_eq!(report.score, 0);
        assert!(report.covered.is_empty());
        assert!(report.missing.is_empty());
    }

    #[test]
    fn test_missing_sorted_heaviest_first() {
        let p = profile(&[("cloud", "GCP", 1.0), ("cloud", "Azure", 2.0)]);
        let report = compute_coverage(&resume(), &p);
        let terms: Vec<_> = report.missing.iter().map(|m| m.term.as_str()).collect();
        assert_eq!(terms, vec!["Azure", "GCP"]);
    }
}
