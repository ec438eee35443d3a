use std::sync::LazyLock;

use regex::Regex;

use crate::record::BASE_FIELDS;

// Label = one or more capitalized words, then a colon and the rest of the line
static LABELED_LINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^([A-Z][a-z]+(?: [A-Z][a-z]+)*):\s*(.+)$").unwrap());

/// Ad-hoc `Label: value` lines whose normalized label is not a base field.
/// Labels are lower-cased with spaces turned into underscores, so
/// "Security Clearance: TS" yields ("security_clearance", "TS").
pub fn extract(text: &str) -> Vec<(String, String)> {
    LABELED_LINE_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let label = caps[1].to_lowercase().replace(' ', "_");
            if BASE_FIELDS.contains(&label.as_str()) {
                return None;
            }
            Some((label, caps[2].trim().to_string()))
        })
        .collect()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labeled_lines_become_fields() {
        let text = "Certifications: AWS, PMP\nSecurity Clearance: Top Secret\n";
        let got = extract(text);
        assert_eq!(
            got,
            vec![
                ("certifications".to_string(), "AWS, PMP".to_string()),
                ("security_clearance".to_string(), "Top Secret".to_string()),
            ]
        );
    }

    #[test]
    fn base_field_labels_are_skipped() {
        let text = "Email: a@b.com\nSkills: whittling\nHobbies: chess\n";
        let got = extract(text);
        assert_eq!(got, vec![("hobbies".to_string(), "chess".to_string())]);
    }

    #[test]
    fn label_must_start_the_line() {
        assert!(extract("see Certifications: AWS for details").is_empty());
    }

    #[test]
    fn valueless_label_is_not_a_match() {
        assert!(extract("References:\n").is_empty());
    }

    #[test]
    fn lowercase_label_is_not_a_match() {
        assert!(extract("hobbies: chess\n").is_empty());
    }
}
