pub mod contact;
pub mod dynamic;
pub mod education;
pub mod experience;
pub mod languages;
pub mod skills;

use crate::record::{FieldValue, ResumeRecord};
use crate::recognizer::EntityRecognizer;

/// Run every extractor over one document's text and merge the outputs into a
/// single record. Extractors are independent; a miss on one field never
/// affects another, and a miss is stored as absence rather than an error.
pub fn extract_all(
    file_name: &str,
    text: &str,
    recognizer: &dyn EntityRecognizer,
) -> ResumeRecord {
    let mut record = ResumeRecord::new(file_name);

    record.set("name", contact::name(text, recognizer).into());
    record.set("email", contact::email(text).into());
    record.set("phone", contact::phone(text).into());
    record.set("skills", joined(skills::extract(text)));
    record.set("education", joined(education::extract(text)));
    record.set("experience", experience::extract(text).into());
    record.set("languages", joined(languages::extract(text)));

    for (label, value) in dynamic::extract(text) {
        record.set(&label, FieldValue::Found(value));
    }

    record
}

/// Zero matches from a list extractor is absence, same as a scalar miss.
fn joined(items: Vec<String>) -> FieldValue {
    if items.is_empty() {
        FieldValue::Missing
    } else {
        FieldValue::Found(items.join(", "))
    }
}

// ── Tests ──
