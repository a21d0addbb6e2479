//! Synonym substitution in bullet text.
//!
//! Only forms of the same vocabulary row are ever exchanged, and only when
//! the job description itself uses one of that row's forms. The bullet must
//! already name the skill; no skill is ever introduced.

use std::collections::HashMap;

use crate::vocabulary::{FormMatch, VOCABULARY};

/// Preferred spelling per vocabulary term, as used by a job description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferredForms {
    by_term: HashMap<usize, &'static str>,
}

impl PreferredForms {
    /// For every skill the JD mentions, the form it uses most often; ties go
    /// to the form that appears first.
    pub fn from_jd(jd_text: &str) -> Self {
        // (term, form) → (count, first start)
        let mut counts: HashMap<(usize, &'static str), (usize, usize)> = HashMap::new();
        for m in non_overlapping(VOCABULARY.find_forms(jd_text)) {
            let slot = counts.entry((m.term, m.form)).or_insert((0, m.start));
            slot.0 += 1;
        }

        let mut best: HashMap<usize, (&'static str, usize, usize)> = HashMap::new();
        for ((term, form), (count, first)) in counts {
            let better = match best.get(&term) {
                None => true,
                Some(&(_, c, f)) => count > c || (count == c && first < f),
            };
            if better {
                best.insert(term, (form, count, first));
            }
        }

        Self {
            by_term: best
                .into_iter()
                .filter(|(term, _)| VOCABULARY.term(*term).forms.len() > 1)
                .map(|(term, (form, _, _))| (term, form))
                .collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.by_term.is_empty()
    }

    pub fn get(&self, term: usize) -> Option<&'static str> {
        self.by_term.get(&term).copied()
    }

    /// Rewrites every skill form in `bullet` whose JD-preferred spelling is a
    /// different form. Text outside replaced spans is left untouched.
    pub fn rewrite(&self, bullet: &str) -> String {
        if self.is_empty() {
            return bullet.to_string();
        }
        let mut out = String::with_capacity(bullet.len());
        let mut cursor = 0;
        for m in non_overlapping(VOCABULARY.find_forms(bullet)) {
            let Some(preferred) = self.get(m.term) else {
                continue;
            };
            if m.form == preferred {
                continue;
            }
            out.push_str(&bullet[cursor..m.start]);
            out.push_str(preferred);
            cursor = m.end;
        }
        out.push_str(&bullet[cursor..]);
        out
    }
}

/// Keeps the longest matches and drops any that overlap a kept one. The
/// result is ordered by start offset.
fn non_overlapping(mut matches: Vec<FormMatch>) -> Vec<FormMatch> {
    matches.sort_by(|a, b| {
        (b.end - b.start)
            .cmp(&(a.end - a.start))
            .then(a.start.cmp(&b.start))
            .then(a.term.cmp(&b.term))
    });
    let mut kept: Vec<FormMatch> = Vec::new();
    for m in matches {
        if kept.iter().all(|k| m.end <= k.start || m.start >= k.end) {
            kept.push(m);
        }
    }
    kept.sort_by_key(|m| m.start);
    kept
}
