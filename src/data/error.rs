//! Error types for data operations
//!
//! Each component has its own error enum so callers can match on exactly the
//! failures that component produces. [`DataError`] wraps them all for code
//! that spans several components, such as loading through the cache.

use thiserror::Error;

/// Errors from turning raw delimited text into a dataset
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Source has no header line
    #[error("Empty source")]
    EmptySource,

    /// A data line splits into a different number of fields than the header
    #[error("Malformed row at line {line_number}: expected {expected} fields, found {found}")]
    MalformedRow {
        line_number: usize,
        expected: usize,
        found: usize,
    },

    /// Too many rows for eager loading
    #[error("Too many rows: {rows} (max {max_rows})")]
    TooManyRows { rows: usize, max_rows: usize },
}

/// Errors from searching the key column
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),
}

/// Errors from top-N selection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RankingError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Column is not numeric: {0}")]
    NotNumeric(String),
}

/// Errors from building chart series
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    #[error("Column is not numeric: {0}")]
    NotNumeric(String),

    /// Total is zero, or there is nothing to sum
    #[error("No data to chart: total of {column} is zero")]
    DegenerateTotal { column: String },

    /// A row reached the projection without a value
    #[error("Missing value for {label}")]
    UnexpectedMissing { label: String },

    /// Shares cannot be drawn for negative values
    #[error("Negative value for {label}: {value}")]
    NegativeValue { label: String, value: f64 },
}

/// Errors that can occur during data operations
#[derive(Error, Debug)]
pub enum DataError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source could not be fetched
    #[error("Transport error: {0}")]
    Transport(String),

    /// File is too large for eager loading
    #[error("File too large: {size_mb}MB (max {max_mb}MB)")]
    TooLarge { size_mb: u64, max_mb: usize },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error(transparent)]
    Ranking(#[from] RankingError),

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

/// Result type alias for data operations
pub type DataResult<T> = Result<T, DataError>;
