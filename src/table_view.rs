//! Plain-text table rendering with pagination.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut page = TablePage::new(rows.len());
//! page.set_page_size(25);
//! print!("{}", render_table(&dataset, &rows, &page));
//! ```

use crate::types::{Dataset, Row};

/// Page size options for pagination
pub const PAGE_SIZE_OPTIONS: &[usize] = &[10, 25, 50, 100];

/// Parse a requested page size, accepting only [`PAGE_SIZE_OPTIONS`]
pub fn parse_page_size(s: &str) -> Result<usize, String> {
    let size: usize = s.trim().parse().map_err(|_| format!("not a number: {}", s))?;
    if PAGE_SIZE_OPTIONS.contains(&size) {
        Ok(size)
    } else {
        Err(format!("page size must be one of {:?}", PAGE_SIZE_OPTIONS))
    }
}

/// Widest a column is allowed to render
const MAX_COLUMN_WIDTH: usize = 24;

/// Pagination state over a list of rows
#[derive(Clone, Debug)]
pub struct TablePage {
    /// Current page (0-indexed)
    pub current_page: usize,
    /// Rows per page
    pub page_size: usize,
    /// Total number of rows
    pub total_rows: usize,
}

impl TablePage {
    pub fn new(total_rows: usize) -> Self {
        Self {
            current_page: 0,
            page_size: 25,
            total_rows,
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.total_rows == 0 {
            1
        } else {
            self.total_rows.div_ceil(self.page_size)
        }
    }

    /// Jump to a page, clamped to the last page
    pub fn go_to(&mut self, page: usize) {
        self.current_page = page.min(self.total_pages().saturating_sub(1));
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        // Reset to first page when changing page size
        self.current_page = 0;
    }

    /// Get the range of rows to display for current page
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let start = (self.current_page * self.page_size).min(self.total_rows);
        let end = (start + self.page_size).min(self.total_rows);
        start..end
    }
}

/// Render the current page of `rows` as an aligned text table
///
/// Ends with a footer such as `Rows 1-25 of 187`.
pub fn render_table(dataset: &Dataset, rows: &[&Row], page: &TablePage) -> String {
    let range = page.visible_range();
    let visible = &rows[range.clone()];

    let headers: Vec<String> = dataset.columns().iter().map(|c| c.name.clone()).collect();
    let body: Vec<Vec<String>> = visible
        .iter()
        .map(|row| row.cells.iter().map(|c| truncate(&c.to_string())).collect())
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            body.iter()
                .map(|cells| cells[i].chars().count())
                .chain(std::iter::once(truncate(h).chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    out.push_str(&format_line(&headers.iter().map(|h| truncate(h)).collect::<Vec<_>>(), &widths));
    out.push_str(&format_line(
        &widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>(),
        &widths,
    ));
    for cells in &body {
        out.push_str(&format_line(cells, &widths));
    }
    out.push_str(&format_position(range.start, range.end, rows.len()));
    out.push('\n');
    out
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    let mut line = padded.join(" | ").trim_end().to_string();
    line.push('\n');
    line
}

fn truncate(s: &str) -> String {
    if s.chars().count() <= MAX_COLUMN_WIDTH {
        s.to_string()
    } else {
        let mut cut: String = s.chars().take(MAX_COLUMN_WIDTH - 1).collect();
        cut.push('…');
        cut
    }
}

/// Format row count for display (e.g., "1.2K rows")
pub fn format_row_count(count: usize) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M rows", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K rows", count as f64 / 1_000.0)
    } else {
        format!("{} rows", count)
    }
}

/// Format current position for display (e.g., "Rows 1-25 of 187")
pub fn format_position(start: usize, end: usize, total: usize) -> String {
    if total == 0 || start >= end {
        return format!("Rows 0 of {}", total);
    }
    // 1-indexed for users
    format!("Rows {}-{} of {}", start + 1, end.min(total), total)
}
