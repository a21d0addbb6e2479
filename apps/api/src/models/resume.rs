//! Résumé records shared by the parser, optimizer and formatter.

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Skills
// ────────────────────────────────────────────────────────────────────────────

/// The five fixed skill buckets. Declaration order is the rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Programming,
    Tools,
    Databases,
    Cloud,
    Others,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::Programming,
        SkillCategory::Tools,
        SkillCategory::Databases,
        SkillCategory::Cloud,
        SkillCategory::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "programming",
            SkillCategory::Tools => "tools",
            SkillCategory::Databases => "databases",
            SkillCategory::Cloud => "cloud",
            SkillCategory::Others => "others",
        }
    }

    /// Label used on the rendered skills line.
    pub fn label(&self) -> &'static str {
        match self {
            SkillCategory::Programming => "Programming",
            SkillCategory::Tools => "Tools",
            SkillCategory::Databases => "Databases",
            SkillCategory::Cloud => "Cloud",
            SkillCategory::Others => "Others",
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SkillCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(())
    }
}

/// Skill terms per bucket. Each bucket keeps source insertion order and holds
/// no case-insensitive duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub programming: Vec<String>,
    pub tools: Vec<String>,
    pub databases: Vec<String>,
    pub cloud: Vec<String>,
    pub others: Vec<String>,
}

impl Skills {
    pub fn get(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::Programming => &self.programming,
            SkillCategory::Tools => &self.tools,
            SkillCategory::Databases => &self.databases,
            SkillCategory::Cloud => &self.cloud,
            SkillCategory::Others => &self.others,
        }
    }

    pub fn get_mut(&mut self, category: SkillCategory) -> &mut Vec<String> {
        match category {
            SkillCategory::Programming => &mut self.programming,
            SkillCategory::Tools => &mut self.tools,
            SkillCategory::Databases => &mut self.databases,
            SkillCategory::Cloud => &mut self.cloud,
            SkillCategory::Others => &mut self.others,
        }
    }

    /// Appends `term` unless the bucket already holds it (case-insensitive).
    /// Returns `true` if the term was inserted.
    pub fn insert(&mut self, category: SkillCategory, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }
        let bucket = self.get_mut(category);
        if bucket.iter().any(|t| t.eq_ignore_ascii_case(term)) {
            return false;
        }
        bucket.push(term.to_string());
        true
    }

    pub fn is_empty(&self) -> bool {
        SkillCategory::ALL.iter().all(|c| self.get(*c).is_empty())
    }

    /// All terms across buckets in rendering order.
    pub fn iter_all(&self) -> impl Iterator<Item = (SkillCategory, &String)> {
        SkillCategory::ALL
            .into_iter()
            .flat_map(move |c| self.get(c).iter().map(move |t| (c, t)))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Record sections
// ────────────────────────────────────────────────────────────────────────────

/// Contact block. `email` is attempted first and defaults to an empty string;
/// the remaining fields are present only when matched in the source text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
}

impl Contact {
    /// Present fields in rendering order.
    pub fn present_fields(&self) -> Vec<&str> {
        let email = Some(self.email.as_str()).filter(|e| !e.is_empty());
        [
            email,
            self.phone.as_deref(),
            self.linkedin.as_deref(),
            self.github.as_deref(),
            self.portfolio.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub bullets: Vec<String>,
}

impl ExperienceEntry {
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.company.is_empty()
            && self.start_date.is_empty()
            && self.end_date.is_empty()
            && self.bullets.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub university: String,
    pub years: Option<String>,
    pub location: Option<String>,
}

impl EducationEntry {
    pub fn is_empty(&self) -> bool {
        self.degree.is_empty()
            && self.university.is_empty()
            && self.years.is_none()
            && self.location.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProjectEntry {
    pub title: String,
    pub description: Option<String>,
    pub contribution: Option<String>,
    pub tech_stack: Option<String>,
}

/// The canonical résumé record produced by the parser.
///
/// Every field not positively identified in the source text stays at its
/// empty default; nothing here is ever synthesized by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredResume {
    pub name: String,
    pub contact: Contact,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Skills,
    pub projects: Vec<ProjectEntry>,
    pub achievements: Vec<String>,
    pub certifications: Vec<String>,
}

impl StructuredResume {
    /// True when no sequence or skill field carries content.
    pub fn has_no_sections(&self) -> bool {
        self.experience.is_empty()
            && self.education.is_empty()
            && self.skills.is_empty()
            && self.projects.is_empty()
            && self.achievements.is_empty()
            && self.certifications.is_empty()
    }
}

/// A résumé after optimization. Same shape as [`StructuredResume`]; only
/// bullet order and wording, skill order and the empty summary may differ
/// from the record it was derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptimizedResume(pub StructuredResume);

impl OptimizedResume {
    pub fn into_inner(self) -> StructuredResume {
        self.0
    }
}

impl Deref for OptimizedResume {
    type Target = StructuredResume;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
