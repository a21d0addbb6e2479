//! Job-description analyzer: raw JD text → [`JDAnalysis`].

pub mod title;
pub mod tokenizer;
pub mod weighting;

use tracing::debug;

use crate::models::JDAnalysis;
use crate::vocabulary::VOCABULARY;

/// Builds the keyword profile of a job description. Deterministic for a given
/// text and vocabulary version; an empty text yields an empty profile.
pub fn analyze(jd_text: &str) -> JDAnalysis {
    let keywords_by_category = weighting::weigh(jd_text);
    let job_title = title::extract_title(jd_text);

    let analysis = JDAnalysis {
        job_title,
        keywords_by_category,
        vocabulary_version: VOCABULARY.version().to_string(),
    };
    debug!(
        keywords = analysis.keyword_count(),
        categories = analysis.keywords_by_category.len(),
        has_title = !analysis.job_title.is_empty(),
        "analyzed job description"
    );
    analysis
}
