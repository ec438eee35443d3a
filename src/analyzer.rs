use std::fmt;

use chrono::Local;
use serde::Serialize;

use crate::parser::extract::experience;
use crate::record::{FieldValue, ResumeTable};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
}

/// Read-only batch summary. Derived from a finalized table; the table itself
/// is never mutated.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub generated_at: String,
    pub total_resumes: usize,
    pub top_skills: Vec<ValueCount>,
    pub average_experience_years: f64,
    pub top_education: Vec<ValueCount>,
    pub additional_fields: Vec<String>,
    pub na_fields: Vec<String>,
}

pub fn analyze(table: &ResumeTable) -> AnalysisReport {
    AnalysisReport {
        generated_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        total_resumes: table.rows.len(),
        top_skills: top_counts(table, "skills", 5),
        average_experience_years: average_experience(table),
        top_education: top_counts(table, "education", 3),
        additional_fields: table.dynamic_columns().iter().map(|s| s.to_string()).collect(),
        na_fields: na_fields(table),
    }
}

/// Split a delimited column across all rows and count occurrences. Ordering
/// is by count descending; the stable sort breaks ties in first-encountered
/// order.
fn top_counts(table: &ResumeTable, column: &str, top_n: usize) -> Vec<ValueCount> {
    let mut counts: Vec<ValueCount> = Vec::new();
    for row in &table.rows {
        let Some(FieldValue::Found(value)) = row.get(column) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        for item in value.split(", ") {
            match counts.iter_mut().find(|c| c.value == item) {
                Some(c) => c.count += 1,
                None => counts.push(ValueCount {
                    value: item.to_string(),
                    count: 1,
                }),
            }
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(top_n);
    counts
}

/// Mean of the leading year counts; absence counts as zero, and an empty
/// table averages to zero rather than dividing by it.
fn average_experience(table: &ResumeTable) -> f64 {
    if table.rows.is_empty() {
        return 0.0;
    }
    let total: u32 = table
        .rows
        .iter()
        .map(|row| match row.get("experience") {
            Some(FieldValue::Found(v)) => experience::leading_years(v),
            _ => 0,
        })
        .sum();
    f64::from(total) / table.rows.len() as f64
}

/// Columns holding the NA sentinel in at least one row. Detection is on the
/// field-value enum, so genuine data equal to the string "NA" does not
/// register here.
fn na_fields(table: &ResumeTable) -> Vec<String> {
    table
        .columns
        .iter()
        .filter(|col| {
            table
                .rows
                .iter()
                .any(|row| row.get(col).is_some_and(FieldValue::is_missing))
        })
        .cloned()
        .collect()
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Resume Analysis Report")?;
        writeln!(f, "Generated on: {}", self.generated_at)?;
        writeln!(f)?;
        writeln!(f, "Total Resumes Analyzed: {}", self.total_resumes)?;
        writeln!(f)?;
        writeln!(f, "Top 5 Skills:")?;
        write_counts(f, &self.top_skills)?;
        writeln!(f)?;
        writeln!(
            f,
            "Average Years of Experience: {:.2}",
            self.average_experience_years
        )?;
        writeln!(f)?;
        writeln!(f, "Top 3 Education Levels:")?;
        write_counts(f, &self.top_education)?;
        writeln!(f)?;
        writeln!(
            f,
            "Additional Fields Found: {}",
            join_or_none(&self.additional_fields)
        )?;
        writeln!(f)?;
        write!(f, "Fields with NA values: {}", join_or_none(&self.na_fields))
    }
}

fn write_counts(f: &mut fmt::Formatter<'_>, counts: &[ValueCount]) -> fmt::Result {
    if counts.is_empty() {
        return writeln!(f, "  (none)");
    }
    for c in counts {
        writeln!(f, "  {}: {}", c.value, c.count)?;
    }
    Ok(())
}

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

// ── Tests ──
