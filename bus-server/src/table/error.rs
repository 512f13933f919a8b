//! Table error types.

use std::path::PathBuf;

use crate::domain::RouteNo;

/// Reasons the spreadsheet could not be read.
///
/// None of these are fatal: the server falls back to an empty table.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The data file does not exist
    #[error("data file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The file exists but is not a readable workbook
    #[error("failed to open workbook {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    /// The workbook has no worksheets
    #[error("workbook {} has no worksheets", path.display())]
    NoWorksheet { path: PathBuf },

    /// The first worksheet could not be decoded
    #[error("failed to read worksheet: {0}")]
    Sheet(#[from] calamine::Error),
}

/// A query key with no matching records.
///
/// This is a normal outcome, not a failure of the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// No record has this stop name
    #[error("No routes found for stop: {0}")]
    StopNotFound(String),

    /// No record has this route number
    #[error("No data found for Route {0}")]
    RouteNotFound(RouteNo),
}
