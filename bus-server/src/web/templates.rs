//! Askama templates for the web frontend.

use askama::Template;

use crate::domain::RouteNo;
use crate::table::{Overview, RouteStops};

use super::routes::stop_path;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Home page with the stop search box and route list.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub stop_names: Vec<String>,
    pub route_numbers: Vec<RouteNo>,
}

impl From<Overview> for IndexTemplate {
    fn from(overview: Overview) -> Self {
        Self {
            stop_names: overview.stop_names,
            route_numbers: overview.route_numbers,
        }
    }
}

/// Route cards for every route serving a stop.
#[derive(Template)]
#[template(path = "stop_info.html")]
pub struct StopInfoTemplate {
    pub stop_name: String,
    pub routes: Vec<RouteCardView>,
}

impl StopInfoTemplate {
    /// Build the page for `stop_name` from query results.
    pub fn new(stop_name: &str, routes: &[RouteStops]) -> Self {
        Self {
            stop_name: stop_name.to_string(),
            routes: routes
                .iter()
                .map(|r| RouteCardView::from_route(r, stop_name))
                .collect(),
        }
    }
}

// ============================================================================
// Fragment Templates (no base.html)
// ============================================================================

/// Inline not-found message.
#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub message: String,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// One route card.
#[derive(Debug, Clone)]
pub struct RouteCardView {
    pub route_no: RouteNo,
    /// Empty when the route has no map.
    pub map_url: String,
    pub stops: Vec<StopRowView>,
}

impl RouteCardView {
    /// Create from a query result, marking the stops named `queried`.
    pub fn from_route(route: &RouteStops, queried: &str) -> Self {
        let queried = queried.to_lowercase();

        let stops = route
            .stops
            .iter()
            .enumerate()
            .map(|(i, stop)| StopRowView {
                position: i + 1,
                url: stop_path(&stop.stop_name),
                is_queried: stop.stop_name.to_lowercase() == queried,
                stop_name: stop.stop_name.clone(),
                stop_name_secondary: stop.stop_name_secondary.clone().unwrap_or_default(),
                fare: stop.fare.clone(),
                time: stop.time.clone(),
            })
            .collect();

        Self {
            route_no: route.route_no,
            map_url: route.map_url.clone().unwrap_or_default(),
            stops,
        }
    }

    /// End-to-end summary, e.g. "Central to Harbour (5 stops)".
    pub fn summary(&self) -> String {
        match self.stops.as_slice() {
            [] => String::new(),
            [only] => format!("{} (1 stop)", only.stop_name),
            [first, .., last] => format!(
                "{} to {} ({} stops)",
                first.stop_name,
                last.stop_name,
                self.stops.len()
            ),
        }
    }
}

/// One row of a route card's stop table.
#[derive(Debug, Clone)]
pub struct StopRowView {
    /// 1-based position along the route.
    pub position: usize,
    pub stop_name: String,
    /// Empty when the sheet has no secondary name.
    pub stop_name_secondary: String,
    pub fare: String,
    pub time: String,
    /// Link to this stop's own page.
    pub url: String,
    /// Whether this is the stop the user searched for.
    pub is_queried: bool,
}
