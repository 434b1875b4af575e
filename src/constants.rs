//! Application-wide constants.
//!
//! Centralizes limits and defaults so the parser, the settings layer and the
//! dashboard agree on them.

// ============================================================================
// Data Limits
// ============================================================================

/// Maximum CSV file size in MB for eager loading
pub const MAX_CSV_SIZE_MB: usize = 100;

/// Maximum number of data rows for eager loading
pub const MAX_CSV_ROWS: usize = 100_000;

/// Field values treated as Missing in addition to the empty string
pub const NULL_TOKENS: &[&str] = &["NA", "N/A", "NaN", "nan", "null", "NULL", "None"];

// ============================================================================
// Top-N Ranking
// ============================================================================

/// Smallest top-N a caller may request
pub const TOP_N_MIN: usize = 5;

/// Largest top-N a caller may request
pub const TOP_N_MAX: usize = 20;

/// Top-N used when none is given
pub const TOP_N_DEFAULT: usize = 10;

// ============================================================================
// Sources
// ============================================================================

/// Dataset loaded when no source is configured
pub const DEFAULT_SOURCE: &str = "covid_dataset/country_wise_latest.csv";

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "statboard";

/// Settings file name inside [`CONFIG_DIR_NAME`]
pub const SETTINGS_FILE_NAME: &str = "settings.json";
