//! Statboard: query, ranking and chart projection over a small statistics table.
//!
//! The [`data`] module is the engine (parsing, type inference, search, top-N,
//! projections, caching). [`dashboard::Dashboard`] applies the caller-side
//! policies on top of it, and [`table_view`] renders rows as text.

pub mod constants;
pub mod dashboard;
pub mod data;
pub mod logging;
pub mod settings;
pub mod table_view;
pub mod types;
