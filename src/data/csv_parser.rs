//! Comma-separated text parsing
//!
//! Parses delimited text into a [`Dataset`] with per-column type inference.
//! Fields are split on plain commas; quoted fields containing commas are not
//! supported.
//!
//! ## Memory Limits
//!
//! Sources with more than [`MAX_CSV_ROWS`] data rows are rejected with
//! [`ParseError::TooManyRows`].

use crate::constants::MAX_CSV_ROWS;
use crate::data::error::ParseError;
use crate::data::inference::{infer_kind, is_missing_value, parse_number};
use crate::types::{Cell, ColumnDescriptor, ColumnKind, Dataset, Row};

const DELIMITER: char = ',';

/// Parse delimited text into an unnamed dataset
pub fn parse(content: &str) -> Result<Dataset, ParseError> {
    parse_named(content, "Data")
}

/// Parse delimited text, naming the resulting dataset
///
/// The first non-blank line is the header. Blank lines are skipped; every
/// other line must have exactly as many fields as the header.
pub fn parse_named(content: &str, name: &str) -> Result<Dataset, ParseError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header_line) = lines.next().ok_or(ParseError::EmptySource)?;
    let headers = unique_names(split_line(header_line));

    let mut raw_rows: Vec<Vec<&str>> = Vec::new();
    for (line_number, line) in lines {
        if raw_rows.len() >= MAX_CSV_ROWS {
            return Err(ParseError::TooManyRows {
                rows: raw_rows.len() + 1,
                max_rows: MAX_CSV_ROWS,
            });
        }
        let fields = split_line(line);
        if fields.len() != headers.len() {
            return Err(ParseError::MalformedRow {
                line_number,
                expected: headers.len(),
                found: fields.len(),
            });
        }
        raw_rows.push(fields);
    }

    let columns: Vec<ColumnDescriptor> = headers
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let values: Vec<&str> = raw_rows.iter().map(|r| r[i]).collect();
            ColumnDescriptor::new(name, infer_kind(&values))
        })
        .collect();

    let rows: Vec<Row> = raw_rows
        .iter()
        .map(|fields| {
            Row::new(
                fields
                    .iter()
                    .zip(&columns)
                    .map(|(field, column)| to_cell(field, column.kind))
                    .collect(),
            )
        })
        .collect();

    tracing::debug!(
        name,
        rows = rows.len(),
        columns = columns.len(),
        "Parsed dataset"
    );

    // Header and rows are built with matching widths above
    Dataset::new(name, columns, rows).ok_or(ParseError::EmptySource)
}

/// Convert a raw field into a typed cell for its column
fn to_cell(field: &str, kind: ColumnKind) -> Cell {
    if is_missing_value(field) {
        return Cell::Missing;
    }
    match kind {
        ColumnKind::Numeric => parse_number(field)
            .map(|value| Cell::Number {
                value,
                raw: field.to_string(),
            })
            .unwrap_or(Cell::Missing),
        ColumnKind::Text => Cell::Text(field.to_string()),
    }
}

/// Split a line on commas, trimming each field
fn split_line(line: &str) -> Vec<&str> {
    line.split(DELIMITER).map(str::trim).collect()
}

/// Make header names unique by suffixing repeats with `.1`, `.2`, ...
fn unique_names(headers: Vec<&str>) -> Vec<String> {
    let mut names: Vec<String> = Vec::with_capacity(headers.len());
    for header in headers {
        let mut candidate = header.to_string();
        let mut suffix = 1;
        while names.contains(&candidate) {
            candidate = format!("{}.{}", header, suffix);
            suffix += 1;
        }
        names.push(candidate);
    }
    names
}

/// Convert a dataset back to comma-separated text
///
/// Missing cells are written as empty fields.
pub fn write_csv_content(dataset: &Dataset) -> String {
    let mut lines = Vec::with_capacity(dataset.row_count() + 1);

    let headers: Vec<&str> = dataset.columns().iter().map(|c| c.name.as_str()).collect();
    lines.push(headers.join(","));

    for row in dataset.rows() {
        let cells: Vec<String> = row.cells.iter().map(Cell::to_string).collect();
        lines.push(cells.join(","));
    }

    let mut content = lines.join("\n");
    content.push('\n');
    content
}
