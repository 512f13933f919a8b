//! The in-memory stop table.
//!
//! The table is built once from the spreadsheet at startup and never
//! modified afterwards. The read-only queries are methods on [`StopTable`].

mod error;
mod loader;
mod query;
mod row;

use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::StopRecord;

pub use error::{LoadError, QueryError};
pub use loader::{METADATA_ROWS, read_rows, rows_from_range};
pub use query::{Overview, RouteStops, StopEntry};
pub use row::RawRow;

/// Row counts from a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadStats {
    /// Data rows read from the sheet (after the metadata and header rows).
    pub rows_read: usize,
    /// Rows that normalized into records.
    pub rows_kept: usize,
}

impl LoadStats {
    /// Rows dropped for a missing stop name or non-numeric route.
    pub fn rows_dropped(&self) -> usize {
        self.rows_read - self.rows_kept
    }
}

/// Result of loading the data file.
#[derive(Debug)]
pub enum LoadOutcome {
    /// The sheet was read. The table may still be empty.
    Loaded { table: StopTable, stats: LoadStats },
    /// The file was missing or unreadable.
    Unavailable(LoadError),
}

impl LoadOutcome {
    /// The loaded table, or an empty one if the file was unavailable.
    pub fn into_table(self) -> StopTable {
        match self {
            LoadOutcome::Loaded { table, .. } => table,
            LoadOutcome::Unavailable(_) => StopTable::empty(),
        }
    }
}

/// Normalized stop records in source-file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopTable {
    records: Vec<StopRecord>,
}

impl StopTable {
    /// Create a table from already-normalized records.
    pub fn new(records: Vec<StopRecord>) -> Self {
        Self { records }
    }

    /// A table with no records.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Normalize raw rows, dropping any that fail coercion.
    pub fn from_rows(rows: impl IntoIterator<Item = RawRow>) -> (Self, LoadStats) {
        let mut stats = LoadStats::default();
        let mut records = Vec::new();

        for row in rows {
            stats.rows_read += 1;
            match row.normalize() {
                Some(record) => records.push(record),
                None => debug!(
                    route_no = ?row.route_no,
                    stop_name = ?row.stop_name,
                    "dropping row"
                ),
            }
        }
        stats.rows_kept = records.len();

        (Self { records }, stats)
    }

    /// Load the table from a spreadsheet.
    ///
    /// Never fails: a missing or unreadable file is reported as
    /// [`LoadOutcome::Unavailable`] and logged.
    pub fn load(path: impl AsRef<Path>) -> LoadOutcome {
        let path = path.as_ref();

        match read_rows(path) {
            Ok(rows) => {
                let (table, stats) = Self::from_rows(rows);
                info!(
                    path = %path.display(),
                    rows_read = stats.rows_read,
                    rows_kept = stats.rows_kept,
                    rows_dropped = stats.rows_dropped(),
                    "loaded stop table"
                );
                LoadOutcome::Loaded { table, stats }
            }
            Err(e) => {
                warn!(error = %e, "stop data unavailable, serving an empty table");
                LoadOutcome::Unavailable(e)
            }
        }
    }

    /// All records in source order.
    pub fn records(&self) -> &[StopRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
