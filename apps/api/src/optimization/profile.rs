//! Validated keyword profile.
//!
//! A [`JDAnalysis`] arriving from outside the analyzer is checked once here;
//! the rest of the optimizer works on the typed [`KeywordProfile`].

use std::collections::BTreeMap;

use thiserror::Error;

use crate::models::{JDAnalysis, KeywordCategory};

/// Caller-side contract violations. These indicate a malformed analysis, not
/// bad résumé or job-description text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContractError {
    #[error("unknown keyword category '{0}'")]
    UnknownCategory(String),

    #[error("keyword '{term}' in '{category}' has invalid weight {weight}")]
    InvalidWeight {
        category: String,
        term: String,
        weight: f64,
    },

    #[error("empty keyword term in '{0}'")]
    EmptyTerm(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileKeyword {
    pub category: KeywordCategory,
    pub term: String,
    pub weight: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordProfile {
    by_category: BTreeMap<KeywordCategory, Vec<ProfileKeyword>>,
    job_title: String,
}

impl KeywordProfile {
    pub fn from_analysis(analysis: &JDAnalysis) -> Result<Self, ContractError> {
        let mut by_category = BTreeMap::new();
        for (name, keywords) in &analysis.keywords_by_category {
            let category: KeywordCategory = name
                .parse()
                .map_err(|_| ContractError::UnknownCategory(name.clone()))?;

            let mut validated = Vec::with_capacity(keywords.len());
            for keyword in keywords {
                let term = keyword.term.trim();
                if term.is_empty() {
                    return Err(ContractError::EmptyTerm(name.clone()));
                }
                if !keyword.weight.is_finite() || keyword.weight < 0.0 {
                    return Err(ContractError::InvalidWeight {
                        category: name.clone(),
                        term: term.to_string(),
                        weight: keyword.weight,
                    });
                }
                validated.push(ProfileKeyword {
                    category,
                    term: term.to_string(),
                    weight: keyword.weight,
                });
            }
            by_category.insert(category, validated);
        }

        Ok(Self {
            by_category,
            job_title: analysis.job_title.trim().to_string(),
        })
    }

    pub fn category(&self, category: KeywordCategory) -> &[ProfileKeyword] {
        self.by_category
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every keyword, categories in fixed order, each in profile order.
    pub fn all(&self) -> impl Iterator<Item = &ProfileKeyword> {
        KeywordCategory::ALL
            .into_iter()
            .flat_map(move |c| self.category(c).iter())
    }

    /// Keywords of the five skill categories only.
    pub fn skill_keywords(&self) -> impl Iterator<Item = &ProfileKeyword> {
        self.all()
            .filter(|k| k.category != KeywordCategory::Requirements)
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.values().all(Vec::is_empty)
    }

    pub fn job_title(&self) -> &str {
        &self.job_title
    }
}
