//! Résumé optimizer: reorders and rewords a parsed résumé against a JD
//! keyword profile.
//!
//! Pure and deterministic. Factual fields (names, companies, titles, dates,
//! degrees, certifications) pass through untouched; only skill order, bullet
//! order, bullet wording (same-skill synonyms) and an empty summary change.

pub mod bullets;
pub mod coverage;
pub mod profile;
pub mod skills;
pub mod summary;
pub mod synonyms;

use tracing::{debug, warn};

use crate::models::{JDAnalysis, OptimizedResume, StructuredResume};
pub use coverage::KeywordCoverage;
pub use profile::{ContractError, KeywordProfile};
use synonyms::PreferredForms;

pub fn optimize(
    resume: StructuredResume,
    analysis: &JDAnalysis,
    jd_text: &str,
) -> Result<OptimizedResume, ContractError> {
    let profile = KeywordProfile::from_analysis(analysis)?;
    if profile.is_empty() {
        warn!("empty keyword profile, resume left in source order");
        return Ok(OptimizedResume(resume));
    }

    let mut resume = resume;
    skills::reorder_skills(&mut resume.skills, &profile);

    // Built before any rewrite so it only quotes the source wording.
    let mut synthesized = false;
    if resume.summary.trim().is_empty() {
        if let Some(text) = summary::synthesize_summary(&resume, &profile) {
            resume.summary = text;
            synthesized = true;
        }
    }

    let preferred = PreferredForms::from_jd(jd_text);
    let mut rewritten = 0usize;
    for entry in &mut resume.experience {
        let bullets: Vec<String> = std::mem::take(&mut entry.bullets)
            .into_iter()
            .map(|b| {
                let new = preferred.rewrite(&b);
                if new != b {
                    rewritten += 1;
                }
                new
            })
            .collect();
        entry.bullets = bullets::rank_bullets(bullets, &profile);
    }

    debug!(
        keywords = profile.all().count(),
        rewritten_bullets = rewritten,
        synthesized_summary = synthesized,
        "optimized resume"
    );
    Ok(OptimizedResume(resume))
}

/// Coverage of the analysis keywords by `resume`.
pub fn keyword_coverage(
    resume: &StructuredResume,
    analysis: &JDAnalysis,
) -> Result<KeywordCoverage, ContractError> {
    let profile = KeywordProfile::from_analysis(analysis)?;
    Ok(coverage::compute_coverage(resume, &profile))
}
