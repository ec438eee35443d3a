use regex::Regex;

/// Closed vocabulary. Swappable via `extract_with` for testing or tuning;
/// matching is not extensible at runtime beyond the list handed in.
pub const DEFAULT_SKILLS: &[&str] = &[
    "python",
    "java",
    "c++",
    "javascript",
    "sql",
    "machine learning",
    "data analysis",
];

/// Subset of the default vocabulary present in the text, in list order.
pub fn extract(text: &str) -> Vec<String> {
    extract_with(text, DEFAULT_SKILLS)
}

pub fn extract_with(text: &str, vocabulary: &[&str]) -> Vec<String> {
    vocabulary
        .iter()
        .filter(|kw| keyword_re(kw).is_match(text))
        .map(|kw| kw.to_string())
        .collect()
}

/// Word boundaries only where the keyword edge is a word char, so "c++"
/// still matches mid-sentence.
fn keyword_re(keyword: &str) -> Regex {
    let mut pattern = String::from("(?i)");
    if keyword.starts_with(|c: char| c.is_alphanumeric()) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(keyword));
    if keyword.ends_with(|c: char| c.is_alphanumeric()) {
        pattern.push_str(r"\b");
    }
    Regex::new(&pattern).unwrap()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subset_in_vocabulary_order() {
        let text = "Expert in SQL and Python; some Machine Learning too.";
        assert_eq!(extract(text), vec!["python", "sql", "machine learning"]);
    }

    #[test]
    fn word_boundaries_hold() {
        // "javascript" must not count as "java"
        assert_eq!(extract("javascript only"), vec!["javascript"]);
    }

    #[test]
    fn plus_suffixed_keyword_matches() {
        assert_eq!(extract("10 years of C++ development"), vec!["c++"]);
    }

    #[test]
    fn no_hits_is_empty() {
        assert!(extract("fluent in haskell and prolog").is_empty());
    }

    #[test]
    fn custom_vocabulary() {
        let got = extract_with("Rust and Go services", &["rust", "go", "zig"]);
        assert_eq!(got, vec!["rust", "go"]);
    }
}
