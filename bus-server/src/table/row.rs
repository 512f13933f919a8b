//! Positional spreadsheet rows and their normalization.

use calamine::Data;

use crate::domain::{RouteNo, StopRecord, format_fare, format_time};

/// Column positions in the source sheet. Columns 3 to 6 are unused.
const ROUTE_NO_COL: usize = 0;
const STOP_NAME_COL: usize = 1;
const STOP_NAME_SECONDARY_COL: usize = 2;
const FARE_COL: usize = 7;
const TIME_COL: usize = 8;
const ROUTE_MAP_URL_COL: usize = 9;

/// The cells of one data row that the table cares about.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawRow {
    pub route_no: Data,
    pub stop_name: Data,
    pub stop_name_secondary: Data,
    pub fare: Data,
    pub time: Data,
    pub route_map_url: Data,
}

impl RawRow {
    /// Pick cells out of a sheet row by position.
    ///
    /// `first_col` is the sheet column of `cells[0]`; the used range of a
    /// sheet need not start at column A. Missing cells read as empty.
    pub fn from_cells(cells: &[Data], first_col: usize) -> Self {
        let cell = |col: usize| -> Data {
            col.checked_sub(first_col)
                .and_then(|idx| cells.get(idx))
                .cloned()
                .unwrap_or(Data::Empty)
        };

        Self {
            route_no: cell(ROUTE_NO_COL),
            stop_name: cell(STOP_NAME_COL),
            stop_name_secondary: cell(STOP_NAME_SECONDARY_COL),
            fare: cell(FARE_COL),
            time: cell(TIME_COL),
            route_map_url: cell(ROUTE_MAP_URL_COL),
        }
    }

    /// Coerce this row into a [`StopRecord`].
    ///
    /// Returns `None` when the route number is not numeric or the stop name
    /// is missing; such rows are dropped from the table.
    pub fn normalize(&self) -> Option<StopRecord> {
        let route_no = as_number(&self.route_no).and_then(|v| RouteNo::from_numeric(v).ok())?;
        let stop_name = as_text(&self.stop_name)?;

        StopRecord::new(
            route_no,
            &stop_name,
            as_text(&self.stop_name_secondary).as_deref(),
            format_fare(as_number(&self.fare)),
            format_time(as_number(&self.time)),
            as_text(&self.route_map_url).as_deref(),
        )
    }
}

/// Numeric value of a cell. Numeric text is parsed; anything else is `None`.
fn as_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Int(i) => Some(*i as f64),
        Data::Float(f) => Some(*f),
        Data::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Text value of a cell. Numbers are rendered without a trailing `.0`.
fn as_text(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) | Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(f.to_string()),
        Data::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
