//! Data parsing and query module
//!
//! Loads a delimited source into an immutable [`Dataset`](crate::types::Dataset)
//! and answers the questions the dashboard asks of it: substring search on
//! the key column, top-N ranking on a numeric column, and chart series.
//!
//! ## Error Handling
//!
//! Every component returns its own error type; [`DataError`] wraps them for
//! code that crosses components. Common errors include:
//! - `ParseError::MalformedRow`: a line has the wrong number of fields
//! - `RankingError::NotNumeric`: ranking on a text column
//! - `ProjectionError::DegenerateTotal`: nothing to put in a share chart
//! - `DataError::Transport`: the source could not be fetched

mod cache;
mod chart_engine;
mod csv_parser;
mod error;
mod inference;
mod query;
mod ranking;
mod source;

pub use cache::*;
pub use chart_engine::*;
pub use csv_parser::*;
pub use error::*;
pub use inference::*;
pub use query::*;
pub use ranking::*;
pub use source::*;
