use std::io::Read;

use thiserror::Error;
use tracing::warn;

use crate::model::{DateInput, PhaseInput, PhaseStatus};

/// Structural problems that make a CSV source unusable. Bad individual rows
/// are skipped and counted instead.
#[derive(Debug, Error)]
pub enum CsvImportError {
    #[error("failed to read CSV source: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to read CSV headers: {0}")]
    Headers(csv::Error),
    #[error("CSV is missing required columns (found {found:?}); need phase id, name, start date, end date")]
    MissingColumns { found: Vec<String> },
}

/// Outcome of a CSV import: the phases that mapped to rows, plus how many
/// rows were skipped for missing an id or name.
#[derive(Debug, Clone)]
pub struct CsvImport {
    pub phases: Vec<PhaseInput>,
    pub skipped: usize,
}

/// Detect delimiter by checking the first line for common separators.
fn detect_delimiter(first_line: &str) -> u8 {
    let semicolons = first_line.matches(';').count();
    let commas = first_line.matches(',').count();
    let tabs = first_line.matches('\t').count();

    if semicolons >= commas && semicolons >= tabs {
        b';'
    } else if tabs >= commas {
        b'\t'
    } else {
        b','
    }
}

/// Normalize a header string to a canonical column key.
fn normalize_header(h: &str) -> String {
    h.trim().to_lowercase().replace([' ', '-', '_'], "")
}

/// Map a normalized header to our column index:
///   0 = id, 1 = name, 2 = start, 3 = end, 4 = status
fn header_to_col(normalized: &str) -> Option<usize> {
    match normalized {
        "id" | "phaseid" | "key" | "code" => Some(0),

        "name" | "phase" | "phasename" | "label" | "title" | "activity" => Some(1),

        "start" | "startdate" | "from" | "begin" | "begindate" => Some(2),

        "end" | "enddate" | "to" | "finish" | "finishdate" | "due" | "duedate" => Some(3),

        "status" | "state" | "stage" => Some(4),

        _ => None,
    }
}

/// Map free-form status text to a phase status. Unknown text falls back to
/// pending rather than failing the row.
fn parse_status(s: &str) -> PhaseStatus {
    match s.trim().to_lowercase().as_str() {
        "finished" | "done" | "complete" | "completed" => PhaseStatus::Completed,
        "in progress" | "in-progress" | "in_progress" | "active" | "started" => {
            PhaseStatus::InProgress
        }
        "delayed" | "late" | "behind" | "blocked" => PhaseStatus::Delayed,
        _ => PhaseStatus::Pending,
    }
}

/// Import phases from CSV data.
///
/// Auto-detects delimiter (comma, semicolon, tab) and matches column
/// headers flexibly (e.g. "Phase Name", "Start Date"). Date cells are kept
/// as raw text; resolving them is the layout pipeline's job, so a row with
/// a malformed date still imports and later counts as invalid.
pub fn phases_from_reader(mut source: impl Read) -> Result<CsvImport, CsvImportError> {
    // Read everything up front to detect the delimiter from the first line.
    let mut content = String::new();
    source.read_to_string(&mut content)?;

    let first_line = content.lines().next().unwrap_or("");
    let delimiter = detect_delimiter(first_line);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers().map_err(CsvImportError::Headers)?.clone();
    let col_map: Vec<Option<usize>> = headers
        .iter()
        .map(|h| header_to_col(&normalize_header(h)))
        .collect();

    let required = [0usize, 1, 2, 3];
    if required
        .iter()
        .any(|want| !col_map.iter().any(|c| *c == Some(*want)))
    {
        return Err(CsvImportError::MissingColumns {
            found: headers.iter().map(str::to_string).collect(),
        });
    }

    let mut phases = Vec::new();
    let mut skipped = 0usize;

    for (i, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                warn!(row = i + 2, error = %e, "skipping malformed CSV row");
                skipped += 1;
                continue;
            }
        };

        let mut id_val = None;
        let mut name_val = None;
        let mut start_val = None;
        let mut end_val = None;
        let mut status_val = None;

        for (col_idx, field) in record.iter().enumerate() {
            if col_idx < col_map.len() {
                match col_map[col_idx] {
                    Some(0) => id_val = Some(field.trim().to_string()),
                    Some(1) => name_val = Some(field.trim().to_string()),
                    Some(2) => start_val = Some(field.trim().to_string()),
                    Some(3) => end_val = Some(field.trim().to_string()),
                    Some(4) => status_val = Some(field.trim().to_string()),
                    _ => {}
                }
            }
        }

        let id = match id_val {
            Some(v) if !v.is_empty() => v,
            _ => {
                warn!(row = i + 2, "skipping CSV row without a phase id");
                skipped += 1;
                continue;
            }
        };
        let name = match name_val {
            Some(v) if !v.is_empty() => v,
            _ => {
                warn!(row = i + 2, "skipping CSV row without a phase name");
                skipped += 1;
                continue;
            }
        };

        phases.push(PhaseInput {
            id,
            name,
            start_date: start_val.filter(|s| !s.is_empty()).map(DateInput::Text),
            end_date: end_val.filter(|s| !s.is_empty()).map(DateInput::Text),
            status: status_val.as_deref().map(parse_status).unwrap_or_default(),
        });
    }

    Ok(CsvImport { phases, skipped })
}
