use std::fs::File;
use std::io::Read;
use std::path::Path;

use quick_xml::events::Event;
use thiserror::Error;

/// Per-document failure. Any variant means the whole document is skipped by
/// the batch walker; extractors themselves never produce errors.
#[derive(Debug, Error)]
pub enum TextError {
    #[error("unsupported file format: .{0}")]
    UnsupportedFormat(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("pdf extraction failed: {0}")]
    Pdf(String),
    #[error("docx container error: {0}")]
    Docx(#[from] zip::result::ZipError),
    #[error("docx xml error: {0}")]
    Xml(String),
}

/// True for the extensions the batch walker picks up; anything else is
/// silently ignored rather than treated as an error.
pub fn is_supported(path: &Path) -> bool {
    matches!(extension_of(path).as_str(), "pdf" | "docx")
}

/// Dispatch on the file extension and pull plain text out of the document.
pub fn extract_text(path: &Path) -> Result<String, TextError> {
    match extension_of(path).as_str() {
        "pdf" => extract_pdf(path),
        "docx" => extract_docx(path),
        other => Err(TextError::UnsupportedFormat(other.to_string())),
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default()
}

fn extract_pdf(path: &Path) -> Result<String, TextError> {
    pdf_extract::extract_text(path).map_err(|e| TextError::Pdf(e.to_string()))
}

/// A .docx is a ZIP container; the document body lives in word/document.xml.
/// Text runs are concatenated per paragraph and paragraphs joined with
/// newlines so line-oriented extractors see paragraph boundaries.
fn extract_docx(path: &Path) -> Result<String, TextError> {
    let file = File::open(path)?;
    let mut archive = zip::ZipArchive::new(file)?;
    let mut xml = String::new();
    archive.by_name("word/document.xml")?.read_to_string(&mut xml)?;

    let mut reader = quick_xml::Reader::from_str(&xml);
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Text(e)) => {
                let text = e.unescape().map_err(|e| TextError::Xml(e.to_string()))?;
                current.push_str(&text);
            }
            Ok(Event::End(e)) if e.name().as_ref() == b"w:p" => {
                let para = current.trim().to_string();
                if !para.is_empty() {
                    paragraphs.push(para);
                }
                current.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(TextError::Xml(e.to_string())),
            _ => {}
        }
    }

    let tail = current.trim();
    if !tail.is_empty() {
        paragraphs.push(tail.to_string());
    }

    Ok(paragraphs.join("\n"))
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_dispatch() {
        assert!(is_supported(Path::new("cv.pdf")));
        assert!(is_supported(Path::new("CV.DOCX")));
        assert!(!is_supported(Path::new("notes.txt")));
        assert!(!is_supported(Path::new("no_extension")));
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let err = extract_text(Path::new("resume.odt")).unwrap_err();
        assert!(matches!(err, TextError::UnsupportedFormat(ref e) if e == "odt"));
    }

    #[test]
    fn missing_pdf_is_an_error() {
        assert!(extract_text(Path::new("does_not_exist.pdf")).is_err());
    }
}
