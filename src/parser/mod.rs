pub mod extract;

use crate::record::ResumeRecord;
use crate::recognizer::EntityRecognizer;

/// Per-document pipeline: plain text in, exactly one record out. Partial
/// extraction is normal; a record with every field missing is still a record.
/// Only the upstream text-extraction step can fail a document.
pub fn parse_document(
    file_name: &str,
    text: &str,
    recognizer: &dyn EntityRecognizer,
) -> ResumeRecord {
    extract::extract_all(file_name, text, recognizer)
}
