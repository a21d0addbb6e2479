//! Contact extraction over the whole résumé text. First match wins per field.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Contact;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

static PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\+?\(?\d[\d\s().-]{7,}\d").unwrap());

static LINKEDIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:[a-z]{2,3}\.)?linkedin\.com/[^\s|,;)]+").unwrap()
});

static GITHUB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:https?://)?(?:www\.)?github\.com/[^\s|,;)]+").unwrap());

/// Any other web address: either scheme/`www.` prefixed, or on a TLD that is
/// mostly used for personal sites.
static PORTFOLIO: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(?:https?://|www\.)[a-z0-9-]+(?:\.[a-z0-9-]+)+(?:/[^\s|,;)]*)?|\b[a-z0-9-]+(?:\.[a-z0-9-]+)*\.(?:io|dev|me|app|site|tech|page|design)\b(?:/[^\s|,;)]*)?",
    )
    .unwrap()
});

/// Phone numbers carry between 10 and 15 digits.
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 10..=15;

pub fn extract_contact(text: &str) -> Contact {
    let email = EMAIL
        .find(text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    let linkedin = first_url(&LINKEDIN, text);
    let github = first_url(&GITHUB, text);

    // Strip what is already claimed so the generic patterns cannot re-match it.
    let mut rest = EMAIL.replace_all(text, " ").into_owned();
    rest = LINKEDIN.replace_all(&rest, " ").into_owned();
    rest = GITHUB.replace_all(&rest, " ").into_owned();

    let portfolio = PORTFOLIO
        .find_iter(&rest)
        .map(|m| trim_url(m.as_str()))
        .find(|url| !url.is_empty())
        .map(String::from);

    let phone = PHONE
        .find_iter(&rest)
        .map(|m| m.as_str().trim())
        .find(|candidate| {
            let digits = candidate.chars().filter(char::is_ascii_digit).count();
            PHONE_DIGITS.contains(&digits)
        })
        .map(String::from);

    Contact {
        email,
        phone,
        linkedin,
        github,
        portfolio,
    }
}

fn first_url(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .find(text)
        .map(|m| trim_url(m.as_str()).to_string())
}

fn trim_url(url: &str) -> &str {
    url.trim_end_matches(['.', ',', ';', ':', '/'])
}
