//! Application state for the web layer.

use std::sync::Arc;

use crate::table::StopTable;

/// Shared application state.
///
/// The stop table is loaded once at startup and only ever read.
#[derive(Clone)]
pub struct AppState {
    /// Normalized stop records
    pub table: Arc<StopTable>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(table: StopTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }
}
