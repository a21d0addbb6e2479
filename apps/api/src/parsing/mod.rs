//! Résumé parser: raw text → [`StructuredResume`].
//!
//! The parser never fails. Text with no recognisable section header degrades
//! to a record whose only populated field is a truncated `summary`.

pub mod contact;
pub mod education;
pub mod experience;
pub mod extras;
pub mod lines;
pub mod machine;
pub mod skills;

use tracing::{debug, warn};

use crate::models::StructuredResume;
use lines::SectionKind;
use machine::{segment, Document};

/// Maximum characters kept in the summary of a header-less résumé.
pub const FALLBACK_SUMMARY_CHARS: usize = 2000;

const MAX_NAME_WORDS: usize = 5;

pub fn parse(raw_text: &str) -> StructuredResume {
    let text = raw_text.trim();
    if text.is_empty() {
        return StructuredResume::default();
    }

    let doc = segment(text);
    if doc.sections.is_empty() {
        warn!(
            chars = text.chars().count(),
            "no section headers recognised, keeping text as summary"
        );
        return StructuredResume {
            summary: text.chars().take(FALLBACK_SUMMARY_CHARS).collect(),
            ..Default::default()
        };
    }

    let resume = assemble(&doc, text);
    debug!(
        experience = resume.experience.len(),
        education = resume.education.len(),
        projects = resume.projects.len(),
        skills = resume.skills.iter_all().count(),
        "parsed resume"
    );
    resume
}

fn assemble(doc: &Document, text: &str) -> StructuredResume {
    let entries = |kind| doc.sections_of(kind).flat_map(|s| &s.entries);
    let items = |kind| doc.sections_of(kind).flat_map(|s| &s.items);

    StructuredResume {
        name: detect_name(&doc.preamble),
        contact: contact::extract_contact(text),
        summary: extras::build_summary(items(SectionKind::Summary)),
        experience: experience::build_experience(entries(SectionKind::Experience)),
        education: education::build_education(entries(SectionKind::Education)),
        skills: skills::build_skills(items(SectionKind::Skills)),
        projects: extras::build_projects(entries(SectionKind::Projects)),
        achievements: extras::build_list(items(SectionKind::Achievements)),
        certifications: extras::build_list(items(SectionKind::Certifications)),
    }
}

/// The first preamble line, or its first `|` cell, when it reads like a name.
fn detect_name(preamble: &[String]) -> String {
    let Some(first) = preamble.first() else {
        return String::new();
    };
    let candidate = first.split('|').next().unwrap_or_default().trim();
    let looks_like_name = candidate.chars().any(char::is_alphabetic)
        && !candidate.chars().any(|c| c.is_ascii_digit() || c == '@' || c == '/')
        && !candidate.to_lowercase().contains("www.")
        && candidate.split_whitespace().count() <= MAX_NAME_WORDS;
    if looks_like_name {
        candidate.to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExperienceEntry;

    const RESUME: &str = r#"
Jane Doe | Backend Engineer
jane.doe@example.com | (555) 123-4567 | linkedin.com/in/janedoe | github.com/janedoe

PROFESSIONAL SUMMARY
Backend engineer with eight years of experience
building payment systems.

TECHNICAL SKILLS
Programming Languages: Python, Rust
Databases: MySQL, Postgres
Cloud: AWS
Agile, Mentoring

WORK EXPERIENCE
Senior Engineer — 2020 – Present
ACME CORP
• Built REST APIs in Rust
• Led a team of five engineers and
  mentored two interns
Software Engineer | Beta Inc | Jan 2016 - Dec 2019
- Migrated Postgres clusters

EDUCATION
B.S. Computer Science — 2012 – 2016
State University
| Boston, MA |

PROJECTS
Ledger | Rust | PostgreSQL
• Double-entry bookkeeping engine

HOBBIES
Chess, climbing

CERTIFICATIONS
• AWS Certified Developer
"#;

    #[test]
    fn test_parse_full_resume() {
        let r = parse(RESUME);
        assert_eq!(r.name, "Jane Doe");
        assert_eq!(r.contact.email, "jane.doe@example.com");
        assert_eq!(r.contact.phone.as_deref(), Some("(555) 123-4567"));
        assert_eq!(r.contact.github.as_deref(), Some("github.com/janedoe"));
        assert_eq!(
            r.summary,
            "Backend engineer with eight years of experience building payment systems."
        );

        assert_eq!(r.skills.programming, vec!["Python", "Rust"]);
        assert_eq!(r.skills.databases, vec!["MySQL", "Postgres"]);
        assert_eq!(r.skills.cloud, vec!["AWS"]);
        assert_eq!(r.skills.others, vec!["Agile", "Mentoring"]);

        assert_eq!(r.experience.len(), 2);
        assert_eq!(r.experience[0].title, "Senior Engineer");
        assert_eq!(r.experience[0].company, "ACME CORP");
        assert_eq!(
            r.experience[0].bullets,
            vec![
                "Built REST APIs in Rust",
                "Led a team of five engineers and mentored two interns"
            ]
        );
        assert_eq!(r.experience[1].company, "Beta Inc");
        assert_eq!(r.experience[1].start_date, "Jan 2016");
        assert_eq!(r.experience[1].end_date, "Dec 2019");

        assert_eq!(r.education.len(), 1);
        assert_eq!(r.education[0].degree, "B.S. Computer Science");
        assert_eq!(r.education[0].university, "State University");
        assert_eq!(r.education[0].location.as_deref(), Some("Boston, MA"));

        assert_eq!(r.projects.len(), 1);
        assert_eq!(r.projects[0].title, "Ledger");
        assert_eq!(r.projects[0].tech_stack.as_deref(), Some("Rust, PostgreSQL"));

        assert_eq!(r.certifications, vec!["AWS Certified Developer"]);
        assert!(r.achievements.is_empty());
    }

    #[test]
    fn test_parse_experience_scenario() {
        let r = parse("EXPERIENCE\nSenior Engineer — 2020 – Present\nACME CORP\n• Built APIs\n• Led team");
        assert_eq!(
            r.experience,
            vec![ExperienceEntry {
                title: "Senior Engineer".to_string(),
                company: "ACME CORP".to_string(),
                start_date: "2020".to_string(),
                end_date: "Present".to_string(),
                bullets: vec!["Built APIs".to_string(), "Led team".to_string()],
            }]
        );
    }

    #[test]
    fn test_parse_lowercase_title_and_company_attach_to_next_entry() {
        let r = parse(
            "EXPERIENCE\nBackend Engineer — 2020 – Present\nACME CORP\n• Built APIs\niOS Developer\neBay\nJan 2018 - Dec 2019\n• Shipped the app",
        );
        assert_eq!(r.experience.len(), 2);
        assert_eq!(r.experience[0].bullets, vec!["Built APIs"]);
        let second = &r.experience[1];
        assert_eq!(second.title, "iOS Developer");
        assert_eq!(second.company, "eBay");
        assert_eq!(second.start_date, "Jan 2018");
        assert_eq!(second.end_date, "Dec 2019");
        assert_eq!(second.bullets, vec!["Shipped the app"]);
    }

    #[test]
    fn test_parse_without_headers_falls_back_to_summary() {
        let text = "Just a paragraph about me. Email me at a@b.io";
        let r = parse(text);
        assert_eq!(r.summary, text);
        assert_eq!(r.name, "");
        assert_eq!(r.contact.email, "");
        assert!(r.has_no_sections());
    }

    #[test]
    fn test_parse_fallback_truncates() {
        let text = "word ".repeat(1000);
        let r = parse(&text);
        assert_eq!(r.summary.chars().count(), FALLBACK_SUMMARY_CHARS);
    }

    #[test]
    fn test_parse_only_ignored_headers_falls_back() {
        let r = parse("HOBBIES\nChess");
        assert_eq!(r.summary, "HOBBIES\nChess");
        assert!(r.has_no_sections());
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse("   \n  "), StructuredResume::default());
    }

    #[test]
    fn test_parse_is_deterministic() {
        assert_eq!(parse(RESUME), parse(RESUME));
    }

    #[test]
    fn test_detect_name_rejects_contact_lines() {
        assert_eq!(detect_name(&["jane@x.io".to_string()]), "");
        assert_eq!(detect_name(&["+1 555 123 4567".to_string()]), "");
        assert_eq!(
            detect_name(&["This line is clearly a sentence, not a name".to_string()]),
            ""
        );
        assert_eq!(detect_name(&["Ada Lovelace".to_string()]), "Ada Lovelace");
    }

    #[test]
    fn test_missing_sections_stay_empty() {
        let r = parse("SKILLS\nLanguages: Go");
        assert_eq!(r.summary, "");
        assert!(r.experience.is_empty());
        assert_eq!(r.name, "");
        assert_eq!(r.skills.programming, vec!["Go"]);
    }
}
