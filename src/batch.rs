use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use tracing::{info, warn};

use crate::parser;
use crate::record::{ResumeRecord, ResumeTable};
use crate::recognizer::EntityRecognizer;
use crate::text::{self, TextError};

/// Batch stats returned after aggregation.
pub struct BatchStats {
    pub total: usize,
    pub parsed: usize,
    pub skipped: usize,
}

/// Supported documents directly under `dir`, sorted by path so repeat runs
/// process in the same order. Unsupported extensions are dropped silently.
pub fn scan_documents(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("reading directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && text::is_supported(p))
        .collect();
    paths.sort();
    Ok(paths)
}

/// Parse every supported document under `dir` into one rectangular table.
///
/// Documents are parsed in parallel; a document that fails text extraction
/// is logged and skipped, getting no row at all. The field-universe union
/// and NA backfill run serially once every parse has finished.
pub fn parse_directory(
    dir: &Path,
    recognizer: &dyn EntityRecognizer,
) -> Result<(ResumeTable, BatchStats)> {
    let paths = scan_documents(dir)?;
    let total = paths.len();

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec})")?
            .progress_chars("=> "),
    );

    let mut records: Vec<ResumeRecord> = Vec::with_capacity(total);
    let mut skipped = 0usize;

    for chunk in paths.chunks(64) {
        let results: Vec<(&PathBuf, Result<ResumeRecord, TextError>)> = chunk
            .par_iter()
            .map(|path| (path, parse_one(path, recognizer)))
            .collect();

        for (path, result) in results {
            match result {
                Ok(record) => records.push(record),
                Err(e) => {
                    warn!("Skipping {}: {}", path.display(), e);
                    skipped += 1;
                }
            }
            pb.inc(1);
        }
    }

    pb.finish_and_clear();
    let parsed = records.len();
    info!("Parsed {} of {} documents ({} skipped)", parsed, total, skipped);

    Ok((
        ResumeTable::from_records(records),
        BatchStats {
            total,
            parsed,
            skipped,
        },
    ))
}

fn parse_one(
    path: &Path,
    recognizer: &dyn EntityRecognizer,
) -> Result<ResumeRecord, TextError> {
    let text = text::extract_text(path)?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    Ok(parser::parse_document(file_name, &text, recognizer))
}

// ── Tests ──
