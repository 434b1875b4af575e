//! Top-N selection on a numeric column

use crate::data::error::RankingError;
use crate::types::{Dataset, Row, SortDirection};
use std::cmp::Ordering;

/// Select up to `n` rows ordered by their value in `column`
///
/// Rows without a value are skipped and never count toward `n`. Equal
/// values keep dataset order, so repeated calls give identical output.
pub fn top_n<'a>(
    dataset: &'a Dataset,
    column: &str,
    n: usize,
    direction: SortDirection,
) -> Result<Vec<&'a Row>, RankingError> {
    let idx = dataset
        .column_index(column)
        .ok_or_else(|| RankingError::UnknownColumn(column.to_string()))?;

    if !dataset.columns()[idx].is_numeric() {
        return Err(RankingError::NotNumeric(column.to_string()));
    }

    let mut ranked: Vec<(f64, &Row)> = dataset
        .rows()
        .iter()
        .filter_map(|row| row.cells.get(idx).and_then(|c| c.as_number()).map(|v| (v, row)))
        .collect();

    // sort_by is stable: ties stay in dataset order. partial_cmp keeps
    // -0 and 0 equal; stored values are finite.
    match direction {
        SortDirection::Descending => ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal)),
        SortDirection::Ascending => ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal)),
    }

    Ok(ranked.into_iter().take(n).map(|(_, row)| row).collect())
}
