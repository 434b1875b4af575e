//! Fetching raw source text
//!
//! The dataset cache never reads files itself: it is handed a loader built
//! from a [`SourceFetcher`] and the parser.

use crate::constants::MAX_CSV_SIZE_MB;
use crate::data::cache::DatasetCache;
use crate::data::csv_parser::parse_named;
use crate::data::error::{DataError, DataResult};
use crate::types::Dataset;
use std::path::Path;
use std::sync::Arc;

/// Produces the raw text of a source id
pub trait SourceFetcher {
    fn fetch(&self, source_id: &str) -> DataResult<String>;
}

/// Reads sources from the local filesystem
#[derive(Clone, Copy, Debug, Default)]
pub struct FileFetcher;

impl SourceFetcher for FileFetcher {
    fn fetch(&self, source_id: &str) -> DataResult<String> {
        if is_remote(source_id) {
            return Err(DataError::Transport(format!(
                "remote sources need a network fetcher: {}",
                source_id
            )));
        }

        // Check file size before reading
        let metadata = std::fs::metadata(source_id)?;
        let size_mb = metadata.len() / (1024 * 1024);
        if size_mb > MAX_CSV_SIZE_MB as u64 {
            return Err(DataError::TooLarge {
                size_mb,
                max_mb: MAX_CSV_SIZE_MB,
            });
        }

        Ok(std::fs::read_to_string(source_id)?)
    }
}

/// Whether a source id names a URL rather than a path
pub fn is_remote(source_id: &str) -> bool {
    let lower = source_id.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Fetch, parse and cache a dataset
///
/// The dataset is named after the file stem of `source_id`. Transport and
/// parse failures are returned as-is and are not cached.
pub fn load_dataset(
    cache: &DatasetCache,
    fetcher: &dyn SourceFetcher,
    source_id: &str,
) -> DataResult<Arc<Dataset>> {
    cache.get_or_load(source_id, || {
        let content = fetcher.fetch(source_id)?;
        let name = dataset_name(source_id);
        Ok(parse_named(&content, &name)?)
    })
}

/// Display name for a source: its file stem, or "Data"
fn dataset_name(source_id: &str) -> String {
    let trimmed = source_id.trim_end_matches('/');
    let last = trimmed.rsplit('/').next().unwrap_or(trimmed);
    Path::new(last)
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .unwrap_or("Data")
        .to_string()
}
