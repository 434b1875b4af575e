//! Chart data processing engine
//!
//! Turns ranked rows (or the whole dataset) into numeric series for the
//! three chart kinds. Validation happens here rather than in the render
//! path: the presentation layer only ever sees finite numbers.

use crate::data::error::ProjectionError;
use crate::types::{Dataset, ProjectionMode, Row};
use serde::Serialize;

/// Processed chart data ready for rendering
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartData {
    /// Label axis column name
    pub x_label: String,
    /// Value axis column name
    pub y_label: String,
    /// The projected series
    pub series: Series,
    /// Maximum value for scaling
    pub max_value: f64,
    /// Minimum value for scaling
    pub min_value: f64,
}

impl ChartData {
    /// Number of points in the series
    pub fn len(&self) -> usize {
        match &self.series {
            Series::Shares(s) => s.len(),
            Series::Magnitudes(m) => m.len(),
            Series::Sequence(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A chart-ready series, one variant per projection mode
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "mode", content = "points", rename_all = "snake_case")]
pub enum Series {
    Shares(Vec<ShareSlice>),
    Magnitudes(Vec<MagnitudeBar>),
    Sequence(Vec<SequencePoint>),
}

/// One wedge of a share-of-total chart
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ShareSlice {
    pub label: String,
    /// Fraction of the total, in [0, 1]
    pub share: f64,
}

/// One bar of a ranked magnitude chart
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MagnitudeBar {
    pub label: String,
    pub value: f64,
}

/// One point of a raw sequence chart
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SequencePoint {
    /// Row position in the dataset
    pub index: usize,
    pub value: f64,
}

/// Build the series for `mode` from `rows`
///
/// `rows` is normally the output of [`top_n`](crate::data::top_n) and its
/// order is preserved. [`ProjectionMode::RawSequence`] ignores `rows` and
/// walks the full dataset instead.
pub fn project(
    dataset: &Dataset,
    rows: &[&Row],
    key_column: &str,
    value_column: &str,
    mode: ProjectionMode,
) -> Result<ChartData, ProjectionError> {
    let key_idx = dataset
        .column_index(key_column)
        .ok_or_else(|| ProjectionError::UnknownColumn(key_column.to_string()))?;
    let value_idx = dataset
        .column_index(value_column)
        .ok_or_else(|| ProjectionError::UnknownColumn(value_column.to_string()))?;
    if !dataset.columns()[value_idx].is_numeric() {
        return Err(ProjectionError::NotNumeric(value_column.to_string()));
    }

    let label_of = |row: &Row| {
        row.cells
            .get(key_idx)
            .and_then(|c| c.as_text())
            .unwrap_or_default()
    };
    let value_of = |row: &Row| row.cells.get(value_idx).and_then(|c| c.as_number());

    let series = match mode {
        ProjectionMode::ShareOfTotal => {
            let present: Vec<(String, f64)> = rows
                .iter()
                .filter_map(|&row| value_of(row).map(|v| (label_of(row), v)))
                .collect();

            if let Some((label, value)) = present.iter().find(|(_, v)| *v < 0.0) {
                return Err(ProjectionError::NegativeValue {
                    label: label.clone(),
                    value: *value,
                });
            }

            let total: f64 = present.iter().map(|(_, v)| v).sum();
            // A sum of finite values can still overflow
            if total == 0.0 || !total.is_finite() {
                return Err(ProjectionError::DegenerateTotal {
                    column: value_column.to_string(),
                });
            }

            Series::Shares(
                present
                    .into_iter()
                    .map(|(label, value)| ShareSlice {
                        label,
                        share: value / total,
                    })
                    .collect(),
            )
        }
        ProjectionMode::Magnitude => Series::Magnitudes(
            rows.iter()
                .map(|&row| {
                    let label = label_of(row);
                    match value_of(row) {
                        Some(value) => Ok(MagnitudeBar { label, value }),
                        None => Err(ProjectionError::UnexpectedMissing { label }),
                    }
                })
                .collect::<Result<_, _>>()?,
        ),
        ProjectionMode::RawSequence => Series::Sequence(
            dataset
                .rows()
                .iter()
                .enumerate()
                .filter_map(|(index, row)| value_of(row).map(|value| SequencePoint { index, value }))
                .collect(),
        ),
    };

    let (min_value, max_value) = value_range(&series);

    Ok(ChartData {
        x_label: key_column.to_string(),
        y_label: value_column.to_string(),
        series,
        max_value,
        min_value,
    })
}

/// Min and max of the plotted values, (0, 0) for an empty series
fn value_range(series: &Series) -> (f64, f64) {
    let values: Vec<f64> = match series {
        Series::Shares(s) => s.iter().map(|p| p.share).collect(),
        Series::Magnitudes(m) => m.iter().map(|p| p.value).collect(),
        Series::Sequence(p) => p.iter().map(|p| p.value).collect(),
    };

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if values.is_empty() { (0.0, 0.0) } else { (min, max) }
}
