//! CSV parsing of the player dataset.
//!
//! The first row defines field names; subsequent rows map positionally onto
//! them. Blank lines are skipped and cells are whitespace-trimmed. Anything
//! the reader cannot tokenize surfaces as a `ParseError`; rows that tokenize
//! but lack required fields are kept here and left for the ranking engine to
//! discard, since field-level validation is its policy, not the parser's.

use crate::error::{CourtrankError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};

/// Column headers recognized in the dataset file.
pub const COL_PLAYER_ID: &str = "Player ID";
pub const COL_PLAYER_NAME: &str = "Player Name";
pub const COL_COUNTY: &str = "County";
pub const COL_YEAR: &str = "Year";
pub const COL_RANKING_POINTS: &str = "Ranking Points";

/// One parsed row, loosely typed.
///
/// `id` and `name` may be empty when the cell was missing; the ranking engine
/// filters those out. Optional fields are `None` when the column is absent or
/// the cell is empty, and a non-numeric points cell also maps to `None`
/// (treated as 0 downstream) rather than failing the whole parse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawPlayerRow {
    pub id: String,
    pub name: String,
    pub county: Option<String>,
    pub year: Option<String>,
    pub points: Option<f64>,
}

/// Column positions resolved from the header row.
struct ColumnMap {
    id: Option<usize>,
    name: Option<usize>,
    county: Option<usize>,
    year: Option<usize>,
    points: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Self {
        let position = |wanted: &str| headers.iter().position(|h| h == wanted);
        Self {
            id: position(COL_PLAYER_ID),
            name: position(COL_PLAYER_NAME),
            county: position(COL_COUNTY),
            year: position(COL_YEAR),
            points: position(COL_RANKING_POINTS),
        }
    }
}

/// Parse raw CSV text into rows.
///
/// Fails with `ParseError` if the header row or any record cannot be
/// tokenized; the error is propagated, never swallowed into a partial
/// dataset.
pub fn parse_rows(raw: &str) -> Result<Vec<RawPlayerRow>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(raw.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| CourtrankError::parse(format!("Failed to read CSV header: {}", e)))?
        .clone();
    let columns = ColumnMap::from_headers(&headers);

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result
            .map_err(|e| CourtrankError::parse(format!("Failed to parse row {}: {}", index + 1, e)))?;
        rows.push(row_from_record(&columns, &record));
    }

    log::debug!("parsed {} rows from {} columns", rows.len(), headers.len());
    Ok(rows)
}

fn row_from_record(columns: &ColumnMap, record: &StringRecord) -> RawPlayerRow {
    let cell = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("");
    let optional = |idx: Option<usize>| {
        let value = cell(idx);
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    };

    RawPlayerRow {
        id: cell(columns.id).to_string(),
        name: cell(columns.name).to_string(),
        county: optional(columns.county),
        year: optional(columns.year),
        points: cell(columns.points).parse::<f64>().ok(),
    }
}
