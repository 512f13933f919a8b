//! Web layer for the bus route finder.
//!
//! HTML pages for browsing stops and routes, plus a JSON mirror of the
//! same queries under `/api`.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{create_router, stop_path};
pub use state::AppState;
pub use templates::*;
