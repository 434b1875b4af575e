//! Core types for the statboard dataset model.
//!
//! A [`Dataset`] is built once per source and is immutable afterwards. Every
//! derived view (search results, rankings, chart series) borrows from it.

use serde::{Deserialize, Serialize};

// ============================================================================
// Dataset Types
// ============================================================================

/// An immutable, in-memory table loaded from a delimited source.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    /// Human-readable name (from filename or source id)
    pub name: String,
    /// Column definitions, in source order
    columns: Vec<ColumnDescriptor>,
    /// Data rows, in source order
    rows: Vec<Row>,
    /// Index of the designated key column
    key_index: usize,
}

impl Dataset {
    /// Build a dataset from already typed columns and rows.
    ///
    /// The first column becomes the key column. Returns `None` when the
    /// dataset has no columns or a row does not have one cell per column.
    pub fn new(name: impl Into<String>, columns: Vec<ColumnDescriptor>, rows: Vec<Row>) -> Option<Self> {
        if columns.is_empty() || rows.iter().any(|r| r.cells.len() != columns.len()) {
            return None;
        }
        Some(Self {
            name: name.into(),
            columns,
            rows,
            key_index: 0,
        })
    }

    /// Designate `name` as the key column. Returns `None` for unknown columns.
    pub fn with_key_column(mut self, name: &str) -> Option<Self> {
        self.key_index = self.column_index(name)?;
        Some(self)
    }

    pub fn columns(&self) -> &[ColumnDescriptor] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get the number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The designated key column
    pub fn key_column(&self) -> &ColumnDescriptor {
        &self.columns[self.key_index]
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Look up a row's cell by column name
    pub fn cell<'a>(&self, row: &'a Row, column: &str) -> Option<&'a Cell> {
        self.column_index(column).and_then(|i| row.cells.get(i))
    }

    /// Text label of a row's key cell (source text for numeric keys)
    pub fn key_label(&self, row: &Row) -> Option<String> {
        row.cells.get(self.key_index).and_then(Cell::as_text)
    }
}

/// Column metadata
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name/header, unique within a dataset
    pub name: String,
    /// Inferred once at load time
    pub kind: ColumnKind,
}

impl ColumnDescriptor {
    pub fn new(name: &str, kind: ColumnKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.kind == ColumnKind::Numeric
    }
}

/// Column kinds produced by type inference
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    Numeric,
    #[default]
    Text,
}

impl ColumnKind {
    pub fn label(&self) -> &'static str {
        match self {
            ColumnKind::Numeric => "numeric",
            ColumnKind::Text => "text",
        }
    }
}

/// A row of data cells, one per column
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }
}

/// A single cell value
///
/// Numbers keep the field text they were parsed from, so a numeric key
/// such as `007` still searches, labels and exports as `007`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Number { value: f64, raw: String },
    Text(String),
    Missing,
}

impl Cell {
    /// A number with no source text; whole values print without ".0"
    pub fn number(value: f64) -> Self {
        let raw = if value.fract() == 0.0 && value.abs() < 1e15 {
            format!("{}", value as i64)
        } else {
            value.to_string()
        };
        Cell::Number { value, raw }
    }

    /// Numeric value, if present
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number { value, .. } => Some(*value),
            _ => None,
        }
    }

    /// Text form of a present value; numbers give their source text
    pub fn as_text(&self) -> Option<String> {
        match self {
            Cell::Missing => None,
            other => Some(other.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Text(s) | Cell::Number { raw: s, .. } => f.write_str(s),
            Cell::Missing => Ok(()),
        }
    }
}

// ============================================================================
// Chart Types
// ============================================================================

/// Chart kinds offered by the dashboard
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartType {
    Pie,
    #[default]
    Bar,
    Line,
}

impl ChartType {
    /// The projection each chart kind is drawn from
    pub fn projection_mode(&self) -> ProjectionMode {
        match self {
            ChartType::Pie => ProjectionMode::ShareOfTotal,
            ChartType::Bar => ProjectionMode::Magnitude,
            ChartType::Line => ProjectionMode::RawSequence,
        }
    }

    /// Whether the chart shows a ranked top-N subset rather than the full column
    pub fn is_ranked(&self) -> bool {
        !matches!(self, ChartType::Line)
    }
}

/// How a set of rows is turned into a numeric series
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectionMode {
    /// Each value as a fraction of the total of the input rows
    ShareOfTotal,
    /// The (label, value) pairs of the input rows, unchanged
    Magnitude,
    /// Every present value of the full dataset, by row position
    RawSequence,
}

/// Ranking direction
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    /// High to low
    #[default]
    Descending,
    /// Low to high
    Ascending,
}
