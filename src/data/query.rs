//! Substring search over a text column

use crate::data::error::QueryError;
use crate::types::{Dataset, Row};

/// Find rows whose `key_column` text contains `query`, ignoring case
///
/// Matches are returned in dataset order. An empty query matches nothing;
/// numeric key values are compared in their text form.
pub fn search<'a>(dataset: &'a Dataset, key_column: &str, query: &str) -> Result<Vec<&'a Row>, QueryError> {
    let idx = dataset
        .column_index(key_column)
        .ok_or_else(|| QueryError::UnknownColumn(key_column.to_string()))?;

    if query.is_empty() {
        return Ok(Vec::new());
    }
    let needle = query.to_lowercase();

    Ok(dataset
        .rows()
        .iter()
        .filter(|row| {
            row.cells
                .get(idx)
                .and_then(|cell| cell.as_text())
                .is_some_and(|text| text.to_lowercase().contains(&needle))
        })
        .collect())
}
