//! Dashboard facade - the caller side of the data engine.
//!
//! Holds one loaded dataset plus settings and applies the caller policies the
//! engine leaves open: an empty search means "no filter", top-N requests are
//! clamped to the configured range, and each chart kind picks its projection.

use crate::data::{
    ChartData, DataResult, DatasetCache, FileFetcher, QueryError, SourceFetcher, load_dataset,
    project, search, top_n, write_csv_content,
};
use crate::settings::Settings;
use crate::types::{ChartType, ColumnDescriptor, Dataset, Row, SortDirection};
use std::sync::Arc;

/// A loaded dataset ready to be viewed, searched, charted and exported
pub struct Dashboard {
    dataset: Arc<Dataset>,
    settings: Settings,
}

impl Dashboard {
    /// Load the configured source from disk through the process-wide cache
    pub fn open(settings: Settings) -> DataResult<Self> {
        Self::open_with(DatasetCache::global(), &FileFetcher, settings)
    }

    /// Load the configured source through a specific cache and fetcher
    pub fn open_with(
        cache: &DatasetCache,
        fetcher: &dyn SourceFetcher,
        settings: Settings,
    ) -> DataResult<Self> {
        let dataset = load_dataset(cache, fetcher, &settings.source)?;
        Ok(Self::from_dataset(dataset, settings)?)
    }

    /// Wrap an already loaded dataset
    ///
    /// A configured key column is designated on the dataset itself; the
    /// shared cached copy is left untouched. Fails if the column does not
    /// exist.
    pub fn from_dataset(dataset: Arc<Dataset>, settings: Settings) -> Result<Self, QueryError> {
        let dataset = match &settings.key_column {
            Some(name) if dataset.key_column().name == *name => dataset,
            Some(name) => Arc::new(
                Dataset::clone(&dataset)
                    .with_key_column(name)
                    .ok_or_else(|| QueryError::UnknownColumn(name.clone()))?,
            ),
            None => dataset,
        };

        Ok(Self { dataset, settings })
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn key_column(&self) -> &str {
        &self.dataset.key_column().name
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Search the key column
    ///
    /// Returns `None` for an empty query: no filter is applied.
    pub fn search(&self, query: &str) -> DataResult<Option<Vec<&Row>>> {
        if query.is_empty() {
            return Ok(None);
        }
        let matches = search(&self.dataset, self.key_column(), query)?;
        tracing::debug!(query, matches = matches.len(), "Search");
        Ok(Some(matches))
    }

    /// Columns that can be charted: numeric columns after the first one
    pub fn chartable_columns(&self) -> Vec<&ColumnDescriptor> {
        self.dataset
            .columns()
            .iter()
            .skip(1)
            .filter(|c| c.is_numeric() && c.name != self.key_column())
            .collect()
    }

    /// Build the series for one chart
    ///
    /// Pie and bar charts show the top `top_n` rows (clamped to the configured
    /// range, default from settings); line charts show the whole column.
    pub fn chart(&self, chart_type: ChartType, column: &str, top_n_request: Option<usize>) -> DataResult<ChartData> {
        let mode = chart_type.projection_mode();

        if !chart_type.is_ranked() {
            return Ok(project(&self.dataset, &[], self.key_column(), column, mode)?);
        }

        let requested = top_n_request.unwrap_or(self.settings.top_n);
        let n = self.settings.clamp_top_n(requested);
        if n != requested {
            tracing::warn!(requested, clamped = n, "Top-N outside allowed range");
        }

        let rows = top_n(&self.dataset, column, n, SortDirection::Descending)?;
        Ok(project(&self.dataset, &rows, self.key_column(), column, mode)?)
    }

    /// The dataset as comma-separated text
    pub fn export_csv(&self) -> String {
        write_csv_content(&self.dataset)
    }
}
