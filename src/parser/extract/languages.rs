use std::sync::LazyLock;

use regex::Regex;

static LANGUAGES_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)languages?(?:\s+spoken)?:\s*((?:[a-z]+(?:,\s*|\s+and\s+)?)+)").unwrap()
});
static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)[a-z]+").unwrap());

/// Words of the first "Languages[ spoken]: ..." list, deduplicated, with the
/// "and" connector dropped. No such list means an empty result.
pub fn extract(text: &str) -> Vec<String> {
    let Some(caps) = LANGUAGES_RE.captures(text) else {
        return Vec::new();
    };

    let mut languages: Vec<String> = Vec::new();
    for m in WORD_RE.find_iter(&caps[1]) {
        let word = m.as_str();
        if word.eq_ignore_ascii_case("and") {
            continue;
        }
        if !languages.iter().any(|l| l == word) {
            languages.push(word.to_string());
        }
    }
    languages
}

// ── Tests ──
