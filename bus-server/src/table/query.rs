//! Read-only queries over the stop table.

use serde::Serialize;

use crate::domain::{RouteNo, StopRecord};

use super::StopTable;
use super::error::QueryError;

/// Distinct stop names and route numbers, for the home page pickers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub stop_names: Vec<String>,
    pub route_numbers: Vec<RouteNo>,
}

/// Every stop on one route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteStops {
    pub route_no: RouteNo,
    /// Map link from the route's first record.
    pub map_url: Option<String>,
    /// Stops in source-file order.
    pub stops: Vec<StopEntry>,
}

/// One stop within a [`RouteStops`] listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopEntry {
    pub stop_name: String,
    pub stop_name_secondary: Option<String>,
    pub fare: String,
    pub time: String,
}

impl From<&StopRecord> for StopEntry {
    fn from(record: &StopRecord) -> Self {
        Self {
            stop_name: record.stop_name.clone(),
            stop_name_secondary: record.stop_name_secondary.clone(),
            fare: record.fare.clone(),
            time: record.time.clone(),
        }
    }
}

impl StopTable {
    /// Distinct stop names and route numbers, each sorted ascending.
    pub fn list_overview(&self) -> Overview {
        let mut stop_names: Vec<String> = self
            .records()
            .iter()
            .map(|r| r.stop_name.clone())
            .collect();
        stop_names.sort();
        stop_names.dedup();

        let mut route_numbers: Vec<RouteNo> = self.records().iter().map(|r| r.route_no).collect();
        route_numbers.sort();
        route_numbers.dedup();

        Overview {
            stop_names,
            route_numbers,
        }
    }

    /// All routes calling at `stop_name` (matched ignoring case), ascending
    /// by route number, each with its complete stop list.
    pub fn find_routes_for_stop(&self, stop_name: &str) -> Result<Vec<RouteStops>, QueryError> {
        let mut route_numbers: Vec<RouteNo> = self
            .records()
            .iter()
            .filter(|r| r.stop_name_matches(stop_name))
            .map(|r| r.route_no)
            .collect();
        route_numbers.sort();
        route_numbers.dedup();

        if route_numbers.is_empty() {
            return Err(QueryError::StopNotFound(stop_name.to_string()));
        }

        let routes = route_numbers
            .into_iter()
            .map(|route_no| {
                let records: Vec<&StopRecord> = self.route_records(route_no).collect();
                RouteStops {
                    route_no,
                    map_url: records.first().and_then(|r| r.route_map_url.clone()),
                    stops: records.into_iter().map(StopEntry::from).collect(),
                }
            })
            .collect();

        Ok(routes)
    }

    /// The first stop listed for `route_no`.
    pub fn resolve_route_to_stop(&self, route_no: RouteNo) -> Result<String, QueryError> {
        self.route_records(route_no)
            .next()
            .map(|r| r.stop_name.clone())
            .ok_or(QueryError::RouteNotFound(route_no))
    }

    fn route_records(&self, route_no: RouteNo) -> impl Iterator<Item = &StopRecord> {
        self.records().iter().filter(move |r| r.route_no == route_no)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(route: i64, stop: &str, map: Option<&str>) -> StopRecord {
        StopRecord::new(
            RouteNo::new(route),
            stop,
            None,
            "10".into(),
            "07:50".into(),
            map,
        )
        .unwrap()
    }

    /// Route 2: Main St -> Market -> Harbour
    /// Route 1: Depot -> Main St
    /// Route 3: Airport -> Harbour
    fn sample_table() -> StopTable {
        StopTable::new(vec![
            rec(2, "Main St", Some("https://maps.example/2")),
            rec(2, "Market", Some("https://maps.example/2")),
            rec(1, "Depot", None),
            rec(2, "Harbour", Some("https://maps.example/2")),
            rec(1, "Main St", None),
            rec(3, "Airport", Some("https://maps.example/3")),
            rec(3, "Harbour", Some("https://maps.example/3")),
        ])
    }

    #[test]
    fn overview_sorted_and_distinct() {
        let table = StopTable::new(vec![rec(2, "B", None), rec(1, "A", None), rec(2, "A", None)]);
        let overview = table.list_overview();

        assert_eq!(overview.stop_names, vec!["A", "B"]);
        assert_eq!(overview.route_numbers, vec![RouteNo::new(1), RouteNo::new(2)]);
    }

    #[test]
    fn overview_sorts_case_sensitively() {
        let table = StopTable::new(vec![rec(1, "bazaar", None), rec(1, "Zoo", None)]);
        assert_eq!(table.list_overview().stop_names, vec!["Zoo", "bazaar"]);
    }

    #[test]
    fn overview_routes_sort_numerically() {
        let table = StopTable::new(vec![rec(10, "A", None), rec(9, "A", None)]);
        assert_eq!(
            table.list_overview().route_numbers,
            vec![RouteNo::new(9), RouteNo::new(10)]
        );
    }

    #[test]
    fn overview_includes_negative_routes() {
        let table = StopTable::new(vec![rec(2, "A", None), rec(-3, "Depot", None)]);
        assert_eq!(
            table.list_overview().route_numbers,
            vec![RouteNo::new(-3), RouteNo::new(2)]
        );
        assert_eq!(table.resolve_route_to_stop(RouteNo::new(-3)).unwrap(), "Depot");
    }

    #[test]
    fn overview_of_empty_table() {
        assert_eq!(StopTable::empty().list_overview(), Overview::default());
    }

    #[test]
    fn find_routes_groups_full_route() {
        let routes = sample_table().find_routes_for_stop("Main St").unwrap();

        assert_eq!(routes.len(), 2);

        assert_eq!(routes[0].route_no, RouteNo::new(1));
        assert_eq!(routes[0].map_url, None);
        let names: Vec<&str> = routes[0].stops.iter().map(|s| s.stop_name.as_str()).collect();
        assert_eq!(names, vec!["Depot", "Main St"]);

        assert_eq!(routes[1].route_no, RouteNo::new(2));
        assert_eq!(routes[1].map_url.as_deref(), Some("https://maps.example/2"));
        let names: Vec<&str> = routes[1].stops.iter().map(|s| s.stop_name.as_str()).collect();
        assert_eq!(names, vec!["Main St", "Market", "Harbour"]);
    }

    #[test]
    fn find_routes_ignores_case() {
        let table = sample_table();
        let upper = table.find_routes_for_stop("MAIN ST").unwrap();
        let lower = table.find_routes_for_stop("main st").unwrap();

        assert_eq!(upper, lower);
        assert_eq!(upper.len(), 2);
    }

    #[test]
    fn find_routes_carries_display_fields() {
        let routes = sample_table().find_routes_for_stop("airport").unwrap();
        let stop = &routes[0].stops[0];

        assert_eq!(stop.fare, "10");
        assert_eq!(stop.time, "07:50");
        assert_eq!(stop.stop_name_secondary, None);
    }

    #[test]
    fn find_routes_unknown_stop_is_not_found() {
        let err = sample_table().find_routes_for_stop("Nowhere").unwrap_err();
        assert_eq!(err, QueryError::StopNotFound("Nowhere".into()));
    }

    #[test]
    fn find_routes_on_empty_table_is_not_found() {
        assert!(StopTable::empty().find_routes_for_stop("Main St").is_err());
    }

    #[test]
    fn find_routes_is_repeatable() {
        let table = sample_table();
        let first = table.find_routes_for_stop("Harbour");
        let second = table.find_routes_for_stop("Harbour");

        assert_eq!(first, second);
        assert_eq!(table, sample_table());
    }

    #[test]
    fn map_url_comes_from_first_record() {
        let table = StopTable::new(vec![
            rec(4, "North", None),
            rec(4, "South", Some("https://maps.example/4")),
        ]);
        let routes = table.find_routes_for_stop("South").unwrap();

        assert_eq!(routes[0].map_url, None);
    }

    #[test]
    fn resolve_route_gives_first_stop() {
        let table = sample_table();
        assert_eq!(table.resolve_route_to_stop(RouteNo::new(2)).unwrap(), "Main St");
        assert_eq!(table.resolve_route_to_stop(RouteNo::new(1)).unwrap(), "Depot");
    }

    #[test]
    fn resolve_unknown_route_is_not_found() {
        let err = sample_table().resolve_route_to_stop(RouteNo::new(42)).unwrap_err();
        assert_eq!(err, QueryError::RouteNotFound(RouteNo::new(42)));
    }
}
