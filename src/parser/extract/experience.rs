use std::sync::LazyLock;

use regex::Regex;

static EXPERIENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:(\d+)\+?\s+years?\s+(?:of\s+)?experience|experience:\s*(\d+)\+?\s+years?)")
        .unwrap()
});

static YEARS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").unwrap());

/// First "<N> years experience" / "experience: <N> years" phrase, normalized
/// to "<N> years". Later occurrences are ignored.
pub fn extract(text: &str) -> Option<String> {
    let caps = EXPERIENCE_RE.captures(text)?;
    let years = caps.get(1).or_else(|| caps.get(2))?;
    Some(format!("{} years", years.as_str()))
}

/// Leading integer of an experience value for averaging; anything unparseable
/// counts as zero years.
pub fn leading_years(value: &str) -> u32 {
    YEARS_RE
        .find(value)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years_before_keyword() {
        assert_eq!(extract("5 years of experience").as_deref(), Some("5 years"));
        assert_eq!(extract("12 years experience in ops").as_deref(), Some("12 years"));
        assert_eq!(extract("8+ years of experience").as_deref(), Some("8 years"));
    }

    #[test]
    fn keyword_before_years() {
        assert_eq!(extract("Experience: 7 years").as_deref(), Some("7 years"));
        assert_eq!(extract("experience: 3+ years").as_deref(), Some("3 years"));
    }

    #[test]
    fn only_first_occurrence_counts() {
        let text = "2 years of experience at Acme, then 9 years of experience at Globex";
        assert_eq!(extract(text).as_deref(), Some("2 years"));
    }

    #[test]
    fn absent_is_none() {
        assert_eq!(extract("experienced professional"), None);
    }

    #[test]
    fn leading_years_parse() {
        assert_eq!(leading_years("7 years"), 7);
        assert_eq!(leading_years("NA"), 0);
        assert_eq!(leading_years(""), 0);
    }
}
