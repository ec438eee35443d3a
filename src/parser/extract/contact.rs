use std::sync::LazyLock;

use regex::Regex;

use crate::recognizer::{EntityKind, EntityRecognizer};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap()
});
// A word boundary cannot precede an optional "(", so the area code is an
// alternation instead
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+\d{1,2}\s?)?(?:\(\d{3}\)|\b\d{3})[\s.-]?\d{3}[\s.-]?\d{4}\b").unwrap()
});

/// Names sit at the top of a resume; only this many leading chars are scanned.
const NAME_WINDOW: usize = 200;

/// First person entity in the header region, per the recognizer's judgment.
pub fn name(text: &str, recognizer: &dyn EntityRecognizer) -> Option<String> {
    recognizer
        .entities(head_window(text, NAME_WINDOW))
        .into_iter()
        .find(|e| e.kind == EntityKind::Person)
        .map(|e| e.text)
}

pub fn email(text: &str) -> Option<String> {
    EMAIL_RE.find(text).map(|m| m.as_str().to_string())
}

/// North-American formats: optional country code, optional parens, -/./space
/// separators.
pub fn phone(text: &str) -> Option<String> {
    PHONE_RE.find(text).map(|m| m.as_str().to_string())
}

fn head_window(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::HeuristicRecognizer;

    #[test]
    fn email_basic() {
        let text = "Email: alice@example.com";
        assert_eq!(email(text).as_deref(), Some("alice@example.com"));
    }

    #[test]
    fn email_absent() {
        assert_eq!(email("no contact info here"), None);
    }

    #[test]
    fn phone_formats() {
        assert_eq!(phone("call (555) 123-4567 today").as_deref(), Some("(555) 123-4567"));
        assert_eq!(phone("+1 555.123.4567").as_deref(), Some("+1 555.123.4567"));
        assert_eq!(phone("555 123 4567").as_deref(), Some("555 123 4567"));
        assert_eq!(phone("no digits"), None);
    }

    #[test]
    fn name_only_in_header_window() {
        let r = HeuristicRecognizer;
        let header = "Jane Doe\njane@example.com\n";
        assert_eq!(name(header, &r).as_deref(), Some("Jane Doe"));

        // Same name past the 200-char window is out of reach
        let mut buried = "x".repeat(250);
        buried.push_str("\nJane Doe\n");
        assert_eq!(name(&buried, &r), None);
    }

    #[test]
    fn name_window_respects_char_boundaries() {
        let r = HeuristicRecognizer;
        let text = "é".repeat(300);
        // Must not panic slicing mid-codepoint
        assert_eq!(name(&text, &r), None);
    }
}
