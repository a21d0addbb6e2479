//! End-to-end tailoring: parse → analyze → optimize → coverage → format.

pub mod handlers;

use serde::Serialize;
use tracing::info;

use crate::analysis::analyze;
use crate::models::{JDAnalysis, OptimizedResume, StructuredResume};
use crate::optimization::{self, ContractError, KeywordCoverage};
use crate::parsing::parse;
use crate::render;

/// Every intermediate record of one tailoring run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TailoredResume {
    pub structured: StructuredResume,
    pub analysis: JDAnalysis,
    pub optimized: OptimizedResume,
    pub coverage: KeywordCoverage,
    pub rendered: String,
}

pub fn tailor(resume_text: &str, jd_text: &str) -> Result<TailoredResume, ContractError> {
    let structured = parse(resume_text);
    let analysis = analyze(jd_text);
    let optimized = optimization::optimize(structured.clone(), &analysis, jd_text)?;
    let coverage = optimization::keyword_coverage(&optimized, &analysis)?;
    let rendered = render::format(&optimized);

    info!(
        resume_chars = resume_text.chars().count(),
        jd_chars = jd_text.chars().count(),
        experience = optimized.experience.len(),
        keywords = analysis.keyword_count(),
        coverage = coverage.score,
        rendered_lines = rendered.lines().count(),
        "tailored resume"
    );

    Ok(TailoredResume {
        structured,
        analysis,
        optimized,
        coverage,
        rendered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = r#"Jane Doe
jane@example.com | github.com/janedoe

EXPERIENCE
Senior Engineer — 2020 – Present
ACME CORP
• Wrote onboarding docs
• Tuned Postgres queries for the billing service

SKILLS
Databases: MySQL, Postgres
Cloud: AWS
"#;

    const JD: &str = r#"We are hiring a Backend Engineer.
Requirements:
- Experience with PostgreSQL
- Must have AWS
"#;

    #[test]
    fn test_tailor_runs_every_stage() {
        let out = tailor(RESUME, JD).unwrap();
        assert_eq!(out.structured.experience.len(), 1);
        assert_eq!(out.analysis.job_title, "Backend Engineer");
        assert_eq!(
            out.optimized.experience[0].bullets,
            vec![
                "Tuned PostgreSQL queries for the billing service",
                "Wrote onboarding docs",
            ]
        );
        assert_eq!(out.optimized.skills.databases, vec!["Postgres", "MySQL"]);
        assert_eq!(out.coverage.score, 100);
        assert!(out.rendered.contains("EXPERIENCE\nSenior Engineer — 2020 – Present\nACME CORP"));
        assert!(out.rendered.ends_with('\n'));
    }

    #[test]
    fn test_tailor_keeps_structured_record_unoptimized() {
        let out = tailor(RESUME, JD).unwrap();
        assert_eq!(
            out.structured.experience[0].bullets[0],
            "Wrote onboarding docs"
        );
    }

    #[test]
    fn test_tailor_with_empty_inputs() {
        let out = tailor("", "").unwrap();
        assert_eq!(out.structured, StructuredResume::default());
        assert!(out.analysis.is_empty());
        assert_eq!(out.coverage.score, 0);
        assert_eq!(out.rendered, "");
    }
}
