//! Word splitting and term-boundary checks shared by every stage.
//!
//! A "word" is a run of alphanumerics plus `+` and `#` (so `C++` and `C#`
//! survive), joined across a single `.`, `-` or `/` when an alphanumeric
//! follows (`node.js`, `ci/cd`, `scikit-learn`). A leading `.` directly before
//! an alphanumeric also belongs to the word (`.net`).

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '+' || c == '#'
}

fn is_joiner(c: char) -> bool {
    matches!(c, '.' | '-' | '/')
}

/// Splits `text` into words, returning `(byte_offset, word)` pairs.
pub fn split_words(text: &str) -> Vec<(usize, &str)> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let next_is_alnum = |j: usize| chars.get(j).is_some_and(|&(_, n)| n.is_alphanumeric());

    let mut words = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i].1;
        let leading_dot = c == '.' && next_is_alnum(i + 1);
        if !is_word_char(c) && !leading_dot {
            i += 1;
            continue;
        }

        let start = chars[i].0;
        let mut j = i + 1;
        while j < chars.len() {
            let c = chars[j].1;
            if is_word_char(c) {
                j += 1;
            } else if is_joiner(c) && next_is_alnum(j + 1) {
                j += 2;
            } else {
                break;
            }
        }
        let end = chars.get(j).map(|&(p, _)| p).unwrap_or(text.len());
        words.push((start, &text[start..end]));
        i = j;
    }
    words
}

/// Whether the character next to a match (plus the one beyond it) continues
/// the word the match sits in.
fn continues_word(adjacent: Option<char>, beyond: Option<char>) -> bool {
    match adjacent {
        Some(c) if is_word_char(c) => true,
        Some(c) if is_joiner(c) => beyond.is_some_and(char::is_alphanumeric),
        _ => false,
    }
}

/// True when `text[start..end]` is not glued to a surrounding word.
pub fn is_bounded(text: &str, start: usize, end: usize) -> bool {
    let mut before = text[..start].chars().rev();
    let mut after = text[end..].chars();
    let (b1, b2) = (before.next(), before.next());
    let (a1, a2) = (after.next(), after.next());
    !continues_word(b1, b2) && !continues_word(a1, a2)
}

/// Byte offsets of every bounded, case-insensitive occurrence of `term` in
/// `text`. Both sides are lower-cased first, so offsets refer to
/// `text.to_lowercase()`.
pub fn find_term(text: &str, term: &str) -> Vec<usize> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }
    let haystack = text.to_lowercase();
    haystack
        .match_indices(term.as_str())
        .map(|(pos, _)| pos)
        .filter(|&pos| is_bounded(&haystack, pos, pos + term.len()))
        .collect()
}

/// True when `term` occurs as a bounded word or phrase in `text`.
pub fn contains_term(text: &str, term: &str) -> bool {
    !find_term(text, term).is_empty()
}

/// Lower-cases and collapses internal whitespace.
pub fn normalize(term: &str) -> String {
    term.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
