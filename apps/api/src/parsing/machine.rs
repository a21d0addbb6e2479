//! Section state machine.
//!
//! Lines are classified by [`classify`] and fed through a fixed transition
//! table. The machine only segments the text: it groups lines into sections,
//! and within entry sections into (head lines, bullets) blocks. Interpreting
//! those blocks is left to the per-section builders.

use crate::parsing::lines::{classify, find_date_span, LineClass, SectionKind};

// ────────────────────────────────────────────────────────────────────────────
// Segmented document
// ────────────────────────────────────────────────────────────────────────────

/// A block inside an entry section: non-bullet head lines, then bullets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawEntry {
    pub head: Vec<String>,
    pub bullets: Vec<String>,
}

/// One line of a list section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub text: String,
    pub bulleted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection {
    pub kind: SectionKind,
    pub entries: Vec<RawEntry>,
    pub items: Vec<ListItem>,
}

impl RawSection {
    fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
            items: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// Lines before the first recognised header (name and contact block).
    pub preamble: Vec<String>,
    /// Recognised sections in source order. Ignored sections are not kept.
    pub sections: Vec<RawSection>,
}

impl Document {
    pub fn sections_of(&self, kind: SectionKind) -> impl Iterator<Item = &RawSection> {
        self.sections.iter().filter(move |s| s.kind == kind)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// States and actions
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Preamble,
    /// Inside an entry section, before its first entry.
    InSection(SectionKind),
    /// Inside a list section (one line per item).
    InList(SectionKind),
    /// Inside a section whose content is discarded.
    Skipping,
    /// Collecting head lines of an entry; `dated` once a date-range line was seen.
    EntryHeader { kind: SectionKind, dated: bool },
    /// Collecting bullets of an entry.
    EntryBody(SectionKind),
}

impl State {
    fn enter(kind: SectionKind) -> State {
        match kind {
            SectionKind::Ignored => State::Skipping,
            k if k.has_entries() => State::InSection(k),
            k => State::InList(k),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Skip,
    PushPreamble,
    StartSection(SectionKind),
    PushItem { bulleted: bool },
    ExtendItem,
    OpenEntryWithHead,
    OpenEntryWithBullet,
    PushHead,
    PushBullet,
    ExtendBullet,
}

/// The transition table.
pub fn transition(state: State, class: &LineClass) -> (State, Action) {
    use LineClass as L;
    use State as S;

    match (state, class) {
        (_, L::Header(kind)) => (S::enter(*kind), Action::StartSection(*kind)),
        (s, L::Blank) => (s, Action::Skip),

        (S::Preamble, _) => (S::Preamble, Action::PushPreamble),
        (S::Skipping, _) => (S::Skipping, Action::Skip),

        (S::InList(k), L::Bullet(_)) => (S::InList(k), Action::PushItem { bulleted: true }),
        (S::InList(k), L::Continuation(_)) => (S::InList(k), Action::ExtendItem),
        (S::InList(k), L::Dated(_) | L::Text(_)) => {
            (S::InList(k), Action::PushItem { bulleted: false })
        }

        (S::InSection(k), L::Bullet(_)) => (S::EntryBody(k), Action::OpenEntryWithBullet),
        (S::InSection(k), L::Dated(_)) => (
            S::EntryHeader { kind: k, dated: true },
            Action::OpenEntryWithHead,
        ),
        (S::InSection(k), L::Text(_) | L::Continuation(_)) => (
            S::EntryHeader { kind: k, dated: false },
            Action::OpenEntryWithHead,
        ),

        (S::EntryHeader { kind, .. }, L::Bullet(_)) => (S::EntryBody(kind), Action::PushBullet),
        (S::EntryHeader { kind, dated: false }, L::Dated(_)) => (
            S::EntryHeader { kind, dated: true },
            Action::PushHead,
        ),
        (S::EntryHeader { kind, dated: true }, L::Dated(_)) => (
            S::EntryHeader { kind, dated: true },
            Action::OpenEntryWithHead,
        ),
        (s @ S::EntryHeader { .. }, L::Text(_) | L::Continuation(_)) => (s, Action::PushHead),

        (S::EntryBody(k), L::Bullet(_)) => (S::EntryBody(k), Action::PushBullet),
        (S::EntryBody(k), L::Continuation(_)) => (S::EntryBody(k), Action::ExtendBullet),
        (S::EntryBody(k), L::Dated(_)) => (
            S::EntryHeader { kind: k, dated: true },
            Action::OpenEntryWithHead,
        ),
        (S::EntryBody(k), L::Text(_)) => (
            S::EntryHeader { kind: k, dated: false },
            Action::OpenEntryWithHead,
        ),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Driver
// ────────────────────────────────────────────────────────────────────────────

pub struct SectionMachine {
    state: State,
    doc: Document,
    /// Lower-case lines seen after bullets, not yet known to be wrapped
    /// bullet text or the head of the next entry (`iOS Developer`, `eBay`).
    pending: Vec<String>,
}

impl Default for SectionMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionMachine {
    pub fn new() -> Self {
        Self {
            state: State::Preamble,
            doc: Document::default(),
            pending: Vec::new(),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn feed(&mut self, line: &str) {
        let class = classify(line);
        match (&class, self.state) {
            (LineClass::Continuation(text), State::EntryBody(_)) => {
                self.pending.push(text.clone());
                return;
            }
            (LineClass::Blank, _) if !self.pending.is_empty() => return,
            _ => {}
        }
        if !self.pending.is_empty() {
            self.settle_pending(Some(&class));
        }
        let (next, action) = transition(self.state, &class);
        self.apply(action, &class);
        self.state = next;
    }

    pub fn finish(mut self) -> Document {
        if !self.pending.is_empty() {
            self.settle_pending(None);
        }
        self.doc
    }

    /// Resolves held lines once the following line (or end of text) is known.
    /// A bare date range takes them as its entry head unless the last bullet
    /// visibly runs on; any other line does so only after a closed sentence.
    fn settle_pending(&mut self, next: Option<&LineClass>) {
        let pending = std::mem::take(&mut self.pending);
        let State::EntryBody(kind) = self.state else {
            return;
        };
        let last = self
            .doc
            .sections
            .last()
            .and_then(|s| s.entries.last())
            .and_then(|e| e.bullets.last())
            .map(String::as_str)
            .unwrap_or_default();

        let starts_entry = match next {
            Some(LineClass::Dated(line)) => is_bare_range(line) && !runs_on(last),
            _ => is_closed(last),
        };

        if starts_entry {
            self.open_entry(RawEntry {
                head: pending,
                bullets: Vec::new(),
            });
            self.state = State::EntryHeader { kind, dated: false };
        } else {
            for line in pending {
                self.apply(Action::ExtendBullet, &LineClass::Continuation(line));
            }
        }
    }

    fn apply(&mut self, action: Action, class: &LineClass) {
        let text = payload(class);
        match action {
            Action::Skip => {}
            Action::PushPreamble => self.doc.preamble.push(text.to_string()),
            Action::StartSection(SectionKind::Ignored) => {}
            Action::StartSection(kind) => self.doc.sections.push(RawSection::new(kind)),
            Action::PushItem { bulleted } => {
                if let Some(section) = self.doc.sections.last_mut() {
                    section.items.push(ListItem {
                        text: text.to_string(),
                        bulleted,
                    });
                }
            }
            Action::ExtendItem => {
                if let Some(section) = self.doc.sections.last_mut() {
                    match section.items.last_mut() {
                        Some(item) => append_wrapped(&mut item.text, text),
                        None => section.items.push(ListItem {
                            text: text.to_string(),
                            bulleted: false,
                        }),
                    }
                }
            }
            Action::OpenEntryWithHead => self.open_entry(RawEntry {
                head: vec![text.to_string()],
                bullets: Vec::new(),
            }),
            Action::OpenEntryWithBullet => self.open_entry(RawEntry {
                head: Vec::new(),
                bullets: vec![text.to_string()],
            }),
            Action::PushHead => {
                if let Some(entry) = self.current_entry() {
                    entry.head.push(text.to_string());
                }
            }
            Action::PushBullet => {
                if let Some(entry) = self.current_entry() {
                    entry.bullets.push(text.to_string());
                }
            }
            Action::ExtendBullet => {
                if let Some(entry) = self.current_entry() {
                    match entry.bullets.last_mut() {
                        Some(bullet) => append_wrapped(bullet, text),
                        None => entry.bullets.push(text.to_string()),
                    }
                }
            }
        }
    }

    fn open_entry(&mut self, entry: RawEntry) {
        if let Some(section) = self.doc.sections.last_mut() {
            section.entries.push(entry);
        }
    }

    fn current_entry(&mut self) -> Option<&mut RawEntry> {
        self.doc.sections.last_mut()?.entries.last_mut()
    }
}

fn payload(class: &LineClass) -> &str {
    match class {
        LineClass::Bullet(t)
        | LineClass::Dated(t)
        | LineClass::Continuation(t)
        | LineClass::Text(t) => t,
        LineClass::Blank | LineClass::Header(_) => "",
    }
}

fn is_bare_range(line: &str) -> bool {
    find_date_span(line).is_some_and(|span| span.prefix.is_empty() && span.suffix.is_empty())
}

fn is_closed(bullet: &str) -> bool {
    bullet.trim_end().ends_with(['.', '!', '?', ';'])
}

/// Ends mid-phrase: a trailing comma, hyphen or connective word.
fn runs_on(bullet: &str) -> bool {
    const CONNECTIVES: &[&str] = &["and", "or", "of", "to", "with", "for", "the", "a", "an", "in", "on"];
    let bullet = bullet.trim_end();
    if bullet.ends_with([',', '-', '&']) {
        return true;
    }
    bullet
        .rsplit(char::is_whitespace)
        .next()
        .is_some_and(|w| CONNECTIVES.contains(&w.to_lowercase().as_str()))
}

fn append_wrapped(target: &mut String, continuation: &str) {
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(continuation);
}

/// Runs the machine over every line of `text`.
pub fn segment(text: &str) -> Document {
    let mut machine = SectionMachine::new();
    for line in text.lines() {
        machine.feed(line);
    }
    machine.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> LineClass {
        LineClass::Text(s.to_string())
    }

    fn dated(s: &str) -> LineClass {
        LineClass::Dated(s.to_string())
    }

    fn bullet(s: &str) -> LineClass {
        LineClass::Bullet(s.to_string())
    }

    #[test]
    fn test_header_always_starts_section() {
        let states = [
            State::Preamble,
            State::Skipping,
            State::InList(SectionKind::Skills),
            State::EntryBody(SectionKind::Experience),
            State::EntryHeader {
                kind: SectionKind::Projects,
                dated: true,
            },
        ];
        for s in states {
            let (next, action) = transition(s, &LineClass::Header(SectionKind::Education));
            assert_eq!(next, State::InSection(SectionKind::Education));
            assert_eq!(action, Action::StartSection(SectionKind::Education));
        }
    }

    #[test]
    fn test_ignored_header_enters_skipping() {
        let (next, _) = transition(State::Preamble, &LineClass::Header(SectionKind::Ignored));
        assert_eq!(next, State::Skipping);
        let (next, action) = transition(State::Skipping, &bullet("Chess"));
        assert_eq!((next, action), (State::Skipping, Action::Skip));
    }

    #[test]
    fn test_list_sections_take_every_line_as_item() {
        let (next, _) = transition(State::Preamble, &LineClass::Header(SectionKind::Skills));
        assert_eq!(next, State::InList(SectionKind::Skills));
        let (_, action) = transition(next, &text("Python, Rust"));
        assert_eq!(action, Action::PushItem { bulleted: false });
    }

    #[test]
    fn test_second_date_line_opens_new_entry() {
        let s = State::EntryHeader {
            kind: SectionKind::Education,
            dated: true,
        };
        let (_, action) = transition(s, &dated("M.S. — 2020 – 2022"));
        assert_eq!(action, Action::OpenEntryWithHead);
    }

    #[test]
    fn test_first_date_line_joins_pending_head() {
        let s = State::EntryHeader {
            kind: SectionKind::Experience,
            dated: false,
        };
        let (next, action) = transition(s, &dated("Jan 2020 - Present"));
        assert_eq!(action, Action::PushHead);
        assert_eq!(
            next,
            State::EntryHeader {
                kind: SectionKind::Experience,
                dated: true
            }
        );
    }

    #[test]
    fn test_text_after_bullets_opens_new_entry() {
        let (next, action) = transition(State::EntryBody(SectionKind::Projects), &text("Next"));
        assert_eq!(action, Action::OpenEntryWithHead);
        assert_eq!(
            next,
            State::EntryHeader {
                kind: SectionKind::Projects,
                dated: false
            }
        );
    }

    #[test]
    fn test_blank_lines_keep_state() {
        let s = State::EntryBody(SectionKind::Experience);
        assert_eq!(transition(s, &LineClass::Blank), (s, Action::Skip));
    }

    #[test]
    fn test_segment_experience_scenario() {
        let doc = segment(
            "EXPERIENCE\nSenior Engineer — 2020 – Present\nACME CORP\n• Built APIs\n• Led team",
        );
        assert!(doc.preamble.is_empty());
        assert_eq!(doc.sections.len(), 1);
        let entries = &doc.sections[0].entries;
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].head,
            vec!["Senior Engineer — 2020 – Present", "ACME CORP"]
        );
        assert_eq!(entries[0].bullets, vec!["Built APIs", "Led team"]);
    }

    #[test]
    fn test_segment_wrapped_bullet_is_joined() {
        let doc = segment("EXPERIENCE\nEngineer — 2019 – 2020\n• Migrated the billing\nservice to Rust");
        assert_eq!(
            doc.sections[0].entries[0].bullets,
            vec!["Migrated the billing service to Rust"]
        );
    }

    #[test]
    fn test_segment_lowercase_head_before_bare_dates_opens_entry() {
        let doc = segment(
            "EXPERIENCE\nBackend Engineer — 2020 – Present\nACME CORP\n• Built APIs\niOS Developer\neBay\nJan 2018 - Dec 2019\n• Shipped the app",
        );
        let entries = &doc.sections[0].entries;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].bullets, vec!["Built APIs"]);
        assert_eq!(
            entries[1].head,
            vec!["iOS Developer", "eBay", "Jan 2018 - Dec 2019"]
        );
        assert_eq!(entries[1].bullets, vec!["Shipped the app"]);
    }

    #[test]
    fn test_segment_run_on_bullet_keeps_wrapped_line_before_dates() {
        let doc = segment(
            "EXPERIENCE\nEngineer — 2019 – 2020\n• Led a team of five and\nmentored two interns\nJan 2016 - Dec 2018\n• Fixed bugs",
        );
        let entries = &doc.sections[0].entries;
        assert_eq!(entries[0].bullets, vec!["Led a team of five and mentored two interns"]);
        assert_eq!(entries[1].head, vec!["Jan 2016 - Dec 2018"]);
    }

    #[test]
    fn test_segment_lowercase_line_after_closed_bullet_starts_entry() {
        let doc = segment("PROJECTS\n• Wrote a parser.\nnpm-audit-lite\n• Audits lockfiles");
        let entries = &doc.sections[0].entries;
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].bullets, vec!["Wrote a parser."]);
        assert_eq!(entries[1].head, vec!["npm-audit-lite"]);
        assert_eq!(entries[1].bullets, vec!["Audits lockfiles"]);
    }

    #[test]
    fn test_segment_ignored_section_is_dropped() {
        let doc = segment("SKILLS\nRust\nHOBBIES\nChess\nEDUCATION\nB.S. Physics");
        let kinds: Vec<_> = doc.sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![SectionKind::Skills, SectionKind::Education]);
        assert_eq!(doc.sections[0].items.len(), 1);
    }

    #[test]
    fn test_segment_preamble_collects_until_first_header() {
        let doc = segment("Jane Doe\njane@x.io\n\nSUMMARY\nBuilder.");
        assert_eq!(doc.preamble, vec!["Jane Doe", "jane@x.io"]);
        assert_eq!(doc.sections[0].items[0].text, "Builder.");
    }
}
