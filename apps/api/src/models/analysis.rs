//! Job-description keyword profile consumed by the optimizer.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::resume::SkillCategory;

/// Key under which out-of-vocabulary terms near requirement signals are kept.
pub const REQUIREMENTS_CATEGORY: &str = "requirements";

/// A category of the keyword profile: one of the five skill buckets or the
/// generic requirements bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeywordCategory {
    Skill(SkillCategory),
    Requirements,
}

impl KeywordCategory {
    pub const ALL: [KeywordCategory; 6] = [
        KeywordCategory::Skill(SkillCategory::Programming),
        KeywordCategory::Skill(SkillCategory::Tools),
        KeywordCategory::Skill(SkillCategory::Databases),
        KeywordCategory::Skill(SkillCategory::Cloud),
        KeywordCategory::Skill(SkillCategory::Others),
        KeywordCategory::Requirements,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            KeywordCategory::Skill(c) => c.as_str(),
            KeywordCategory::Requirements => REQUIREMENTS_CATEGORY,
        }
    }
}

impl fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeywordCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == REQUIREMENTS_CATEGORY {
            return Ok(KeywordCategory::Requirements);
        }
        s.parse::<SkillCategory>().map(KeywordCategory::Skill)
    }
}

/// A single keyword from the JD with its salience weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedKeyword {
    pub term: String,
    /// Sum of per-occurrence weights; never negative.
    pub weight: f64,
    /// Raw occurrence count in the JD.
    #[serde(default)]
    pub frequency: u32,
}

/// Output of the job-description analyzer.
///
/// Within each category keywords are sorted by descending weight, ties broken
/// by first occurrence in the JD text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JDAnalysis {
    pub job_title: String,
    pub keywords_by_category: BTreeMap<String, Vec<WeightedKeyword>>,
    pub vocabulary_version: String,
}

impl JDAnalysis {
    pub fn keywords(&self, category: KeywordCategory) -> &[WeightedKeyword] {
        self.keywords_by_category
            .get(category.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.keywords_by_category.values().all(Vec::is_empty)
    }

    pub fn keyword_count(&self) -> usize {
        self.keywords_by_category.values().map(Vec::len).sum()
    }
}
