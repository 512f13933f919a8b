//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::RouteNo;
use crate::table::RouteStops;

/// Query string for the stop search form.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Stop name typed by the user
    pub stop_name: Option<String>,
}

/// Routes serving a stop.
#[derive(Debug, Serialize)]
pub struct StopRoutesResponse {
    /// Stop name as requested
    pub stop_name: String,

    /// Matching routes, ascending by route number
    pub routes: Vec<RouteStops>,
}

/// First stop of a route.
#[derive(Debug, Serialize)]
pub struct RouteStopResponse {
    /// Requested route number
    pub route_no: RouteNo,

    /// Name of the route's first stop
    pub stop_name: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
