//! Normalized stop records.

use super::RouteNo;

/// One stop on one route, as held in the in-memory table.
///
/// Fare and time are display strings, formatted once at load time. An
/// empty string means the source cell was blank or not a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopRecord {
    pub route_no: RouteNo,
    pub stop_name: String,
    pub stop_name_secondary: Option<String>,
    pub fare: String,
    pub time: String,
    pub route_map_url: Option<String>,
}

impl StopRecord {
    /// Build a record, rejecting blank stop names.
    ///
    /// Names and the map URL are trimmed; blank optional fields become `None`.
    pub fn new(
        route_no: RouteNo,
        stop_name: &str,
        stop_name_secondary: Option<&str>,
        fare: String,
        time: String,
        route_map_url: Option<&str>,
    ) -> Option<Self> {
        // A whitespace-only name counts as missing and drops the row.
        let stop_name = stop_name.trim();
        if stop_name.is_empty() {
            return None;
        }

        Some(Self {
            route_no,
            stop_name: stop_name.to_string(),
            stop_name_secondary: non_blank(stop_name_secondary),
            fare,
            time,
            route_map_url: non_blank(route_map_url),
        })
    }

    /// Whether this record's stop name equals `name`, ignoring case.
    pub fn stop_name_matches(&self, name: &str) -> bool {
        self.stop_name.to_lowercase() == name.to_lowercase()
    }
}

fn non_blank(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}
