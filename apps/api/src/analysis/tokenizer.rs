//! Splits a job description into candidate terms.
//!
//! Words come from [`split_words`]; runs of up to `max_phrase_words` words
//! separated only by whitespace are matched greedily (longest first) against
//! the vocabulary, so `power bi` becomes a single term.

use crate::vocabulary::matching::split_words;
use crate::vocabulary::VOCABULARY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Index of the source line (0-based, blank lines included).
    pub line: usize,
    /// Byte offset of the token inside its line.
    pub offset: usize,
    /// Byte offset of the token inside the whole text.
    pub global_offset: usize,
    /// The token as written.
    pub surface: String,
    /// Lower-cased surface, words joined by single spaces.
    pub key: String,
    /// Vocabulary term index when the token is a known skill.
    pub term: Option<usize>,
}

/// Tokenizes every line of `text`.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut line_start = 0;
    for (line_idx, line) in text.split('\n').enumerate() {
        tokenize_line(line, line_idx, line_start, &mut tokens);
        line_start += line.len() + 1;
    }
    tokens
}

fn tokenize_line(line: &str, line_idx: usize, line_start: usize, out: &mut Vec<Token>) {
    let words = split_words(line);
    let max = VOCABULARY.max_phrase_words();
    let push = |start: usize, end: usize, term: Option<usize>, out: &mut Vec<Token>| {
        let surface = &line[start..end];
        out.push(Token {
            line: line_idx,
            offset: start,
            global_offset: line_start + start,
            surface: surface.to_string(),
            key: surface
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
                .to_lowercase(),
            term,
        });
    };

    let mut i = 0;
    while i < words.len() {
        let longest = (1..=max.min(words.len() - i))
            .rev()
            .find_map(|n| phrase_at(line, &words[i..i + n]).map(|term| (n, term)));

        match longest {
            Some((n, term)) => {
                let (start, _) = words[i];
                let (last_start, last) = words[i + n - 1];
                push(start, last_start + last.len(), Some(term), out);
                i += n;
            }
            None => {
                let (start, word) = words[i];
                split_compound(word, start, &mut |s, e, t| push(s, e, t, out));
                i += 1;
            }
        }
    }
}

/// Looks up a run of words when only whitespace separates them.
fn phrase_at(line: &str, run: &[(usize, &str)]) -> Option<usize> {
    let whitespace_gaps = run.windows(2).all(|pair| {
        let (a, wa) = pair[0];
        let (b, _) = pair[1];
        line[a + wa.len()..b].chars().all(char::is_whitespace)
    });
    if !whitespace_gaps {
        return None;
    }
    let (start, _) = run[0];
    let (last_at, last) = run[run.len() - 1];
    VOCABULARY.phrase_as_written(&line[start..last_at + last.len()])
}

/// An unknown word such as `PostgreSQL/MySQL` is split on `/` when every part
/// is itself a known term; otherwise it stays one token.
fn split_compound(word: &str, start: usize, emit: &mut dyn FnMut(usize, usize, Option<usize>)) {
    if word.contains('/') {
        let parts: Vec<(usize, &str)> = word
            .split('/')
            .scan(0usize, |pos, part| {
                let at = *pos;
                *pos += part.len() + 1;
                Some((at, part))
            })
            .collect();
        let terms: Vec<Option<usize>> = parts
            .iter()
            .map(|(_, p)| VOCABULARY.phrase_as_written(p))
            .collect();
        if terms.iter().all(Option::is_some) {
            for ((at, part), term) in parts.iter().zip(terms) {
                emit(start + at, start + at + part.len(), term);
            }
            return;
        }
    }
    emit(start, start + word.len(), None);
}
