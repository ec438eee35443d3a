use std::sync::LazyLock;

use regex::Regex;

static DEGREE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:bachelor|master|phd|associate)(?:\s+of\s+|\s+in\s+|\s+)(?:science|arts|engineering|business|[a-z]+)",
    )
    .unwrap()
});

/// Degree phrases, deduplicated on the exact matched string (case variants
/// stay distinct), first occurrence first.
pub fn extract(text: &str) -> Vec<String> {
    let mut degrees: Vec<String> = Vec::new();
    for m in DEGREE_RE.find_iter(text) {
        let degree = m.as_str().to_string();
        if !degrees.contains(&degree) {
            degrees.push(degree);
        }
    }
    degrees
}

// ── Tests ──
