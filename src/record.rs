use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// The seven always-attempted extraction targets, in canonical column order.
pub const BASE_FIELDS: [&str; 7] = [
    "name",
    "email",
    "phone",
    "skills",
    "education",
    "experience",
    "languages",
];

/// Rendered for absent fields at the CSV boundary.
pub const NA: &str = "NA";

/// A field is either found (possibly as an empty string, e.g. a skills scan
/// with zero keyword hits) or absent from the document entirely. The two are
/// distinct outcomes: only `Missing` renders as the NA sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Found(String),
    Missing,
}

impl FieldValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }

    pub fn as_csv(&self) -> &str {
        match self {
            FieldValue::Found(s) => s,
            FieldValue::Missing => NA,
        }
    }

    /// Inverse of `as_csv`. A genuine data value equal to "NA" is
    /// indistinguishable from the sentinel once it has been through a CSV
    /// round trip; that ambiguity lives only at this boundary.
    pub fn from_csv(s: &str) -> Self {
        if s == NA {
            FieldValue::Missing
        } else {
            FieldValue::Found(s.to_string())
        }
    }
}

impl From<Option<String>> for FieldValue {
    fn from(v: Option<String>) -> Self {
        match v {
            Some(s) => FieldValue::Found(s),
            None => FieldValue::Missing,
        }
    }
}

/// One parsed document: `file_name` plus a field map holding the seven base
/// fields and any dynamic fields discovered in that document.
#[derive(Debug, Clone)]
pub struct ResumeRecord {
    pub file_name: String,
    fields: BTreeMap<String, FieldValue>,
}

impl ResumeRecord {
    pub fn new(file_name: &str) -> Self {
        ResumeRecord {
            file_name: file_name.to_string(),
            fields: BTreeMap::new(),
        }
    }

    pub fn set(&mut self, field: &str, value: FieldValue) {
        self.fields.insert(field.to_string(), value);
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Insert `Missing` for every universe field this record has no entry for.
    pub fn backfill(&mut self, universe: &BTreeSet<String>) {
        for field in universe {
            self.fields
                .entry(field.clone())
                .or_insert(FieldValue::Missing);
        }
    }
}

/// Rectangular table: every row has a value for every column. Column order is
/// `file_name`, the base fields in canonical order, then dynamic fields
/// sorted by name, so repeat runs over the same inputs produce identical
/// headers.
#[derive(Debug)]
pub struct ResumeTable {
    pub columns: Vec<String>,
    pub rows: Vec<ResumeRecord>,
}

impl ResumeTable {
    /// Union every record's field set with the base fields, backfill each
    /// record to the union, and fix the column order. An empty batch still
    /// yields the base-field header.
    pub fn from_records(mut rows: Vec<ResumeRecord>) -> Self {
        let mut universe: BTreeSet<String> =
            BASE_FIELDS.iter().map(|f| f.to_string()).collect();
        for record in &rows {
            universe.extend(record.field_names().map(str::to_string));
        }

        for record in &mut rows {
            record.backfill(&universe);
        }

        ResumeTable {
            columns: column_order(&universe),
            rows,
        }
    }

    /// Dynamic columns: everything past `file_name` and the base fields.
    pub fn dynamic_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(String::as_str)
            .filter(|c| *c != "file_name" && !BASE_FIELDS.contains(c))
            .collect()
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(&self.columns)?;
        for record in &self.rows {
            let row: Vec<&str> = self
                .columns
                .iter()
                .map(|col| {
                    if col == "file_name" {
                        record.file_name.as_str()
                    } else {
                        // Backfill guarantees every column is present
                        record.get(col).map(FieldValue::as_csv).unwrap_or(NA)
                    }
                })
                .collect();
            wtr.write_record(&row)?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn write_csv_file(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("creating {}", path.display()))?;
        self.write_csv(file)
    }

    /// Load a table previously written by `write_csv`.
    pub fn read_csv_file(path: &Path) -> Result<Self> {
        let mut rdr = csv::Reader::from_path(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let columns: Vec<String> = rdr
            .headers()?
            .iter()
            .map(str::to_string)
            .collect();

        let mut rows = Vec::new();
        for result in rdr.records() {
            let row = result?;
            let mut record = ResumeRecord::new("");
            for (col, value) in columns.iter().zip(row.iter()) {
                if col == "file_name" {
                    record.file_name = value.to_string();
                } else {
                    record.set(col, FieldValue::from_csv(value));
                }
            }
            rows.push(record);
        }

        Ok(ResumeTable { columns, rows })
    }
}

fn column_order(universe: &BTreeSet<String>) -> Vec<String> {
    let mut columns = vec!["file_name".to_string()];
    columns.extend(BASE_FIELDS.iter().map(|f| f.to_string()));
    // BTreeSet iteration keeps the dynamic tail sorted
    columns.extend(
        universe
            .iter()
            .filter(|f| !BASE_FIELDS.contains(&f.as_str()))
            .cloned(),
    );
    columns
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn record(file: &str, fields: &[(&str, FieldValue)]) -> ResumeRecord {
        let mut r = ResumeRecord::new(file);
        for (name, value) in fields {
            r.set(name, value.clone());
        }
        r
    }

    #[test]
    fn table_is_rectangular_after_backfill() {
        let a = record(
            "a.pdf",
            &[
                ("email", FieldValue::Found("a@example.com".into())),
                ("certifications", FieldValue::Found("AWS, PMP".into())),
            ],
        );
        let b = record("b.pdf", &[("email", FieldValue::Missing)]);

        let table = ResumeTable::from_records(vec![a, b]);
        assert_eq!(table.columns[0], "file_name");
        assert!(table.columns.contains(&"certifications".to_string()));

        // The dynamic column exists on every row, NA where undiscovered
        let b_row = &table.rows[1];
        assert_eq!(b_row.get("certifications"), Some(&FieldValue::Missing));
        // All base fields backfilled on both rows
        for row in &table.rows {
            for field in BASE_FIELDS {
                assert!(row.get(field).is_some(), "row lacks {}", field);
            }
        }
    }

    #[test]
    fn empty_batch_has_base_header_and_no_rows() {
        let table = ResumeTable::from_records(vec![]);
        assert!(table.rows.is_empty());
        let expected: Vec<String> = std::iter::once("file_name".to_string())
            .chain(BASE_FIELDS.iter().map(|f| f.to_string()))
            .collect();
        assert_eq!(table.columns, expected);
    }

    #[test]
    fn found_empty_is_not_missing() {
        let found = FieldValue::Found(String::new());
        assert!(!found.is_missing());
        assert_eq!(found.as_csv(), "");
        assert_eq!(FieldValue::Missing.as_csv(), NA);
    }

    #[test]
    fn csv_round_trip_preserves_values_and_sentinel() {
        let a = record(
            "a.pdf",
            &[
                ("skills", FieldValue::Found("python, sql".into())),
                ("location", FieldValue::Found("Austin, TX".into())),
            ],
        );
        let table = ResumeTable::from_records(vec![a]);

        let mut buf = Vec::new();
        table.write_csv(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("file_name,name,email,phone,skills"));
        assert!(text.contains("\"python, sql\""));
        assert!(text.contains("NA"));
    }
}
