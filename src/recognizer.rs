use std::sync::LazyLock;

use regex::Regex;

static NAME_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*([A-Z][a-z]+(?:\s+[A-Z][a-z]+){1,3})\s*$").unwrap());

// Lines that look like a name but are section headers
const HEADER_WORDS: &[&str] = &[
    "Curriculum",
    "Resume",
    "Objective",
    "Summary",
    "Education",
    "Experience",
    "Skills",
    "Professional",
    "Work",
    "Contact",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Person,
    Organization,
}

#[derive(Debug, Clone)]
pub struct Entity {
    pub text: String,
    pub kind: EntityKind,
}

/// Seam for named-entity recognition. The default implementation is a
/// capitalization heuristic; a smarter recognizer (or a test stub) can be
/// swapped in without touching the extractors.
pub trait EntityRecognizer: Send + Sync {
    fn entities(&self, text: &str) -> Vec<Entity>;
}

/// Regex heuristic: a line holding nothing but 2-4 capitalized words is a
/// person name, unless it starts with a section-header word or ends with a
/// company suffix.
pub struct HeuristicRecognizer;

impl EntityRecognizer for HeuristicRecognizer {
    fn entities(&self, text: &str) -> Vec<Entity> {
        NAME_LINE_RE
            .captures_iter(text)
            .filter_map(|caps| {
                let candidate = caps[1].to_string();
                let first = candidate.split_whitespace().next()?;
                if HEADER_WORDS.contains(&first) {
                    return None;
                }
                let kind = if candidate.ends_with("Inc")
                    || candidate.ends_with("Llc")
                    || candidate.ends_with("Corp")
                {
                    EntityKind::Organization
                } else {
                    EntityKind::Person
                };
                Some(Entity {
                    text: candidate,
                    kind,
                })
            })
            .collect()
    }
}

// ── Tests ──
