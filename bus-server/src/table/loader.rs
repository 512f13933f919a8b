//! Spreadsheet reading.

use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};

use super::error::LoadError;
use super::row::RawRow;

/// Title and metadata rows above the header row.
pub const METADATA_ROWS: usize = 4;

/// Read the data rows of the first worksheet in `path`.
///
/// Any format calamine recognises (xlsx, xls, xlsb, ods) is accepted.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let mut workbook = open_workbook_auto(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| LoadError::NoWorksheet {
            path: path.to_path_buf(),
        })??;

    Ok(rows_from_range(&range))
}

/// Skip the metadata rows and the header row, then pick out data rows.
///
/// Row and column positions are sheet positions, so a used range that
/// starts below row 1 or right of column A is handled.
pub fn rows_from_range(range: &Range<Data>) -> Vec<RawRow> {
    let Some((first_row, first_col)) = range.start() else {
        return Vec::new();
    };

    range
        .rows()
        .enumerate()
        .filter(|(i, _)| first_row as usize + i > METADATA_ROWS)
        .map(|(_, cells)| RawRow::from_cells(cells, first_col as usize))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn s(v: &str) -> Data {
        Data::String(v.to_string())
    }

    /// Sheet with a title block, header row, and three data rows.
    fn sample_range() -> Range<Data> {
        let mut range = Range::new((0, 0), (7, 9));
        range.set_value((0, 0), s("City Bus Timetable"));
        range.set_value((1, 0), s("Effective from 1 June"));
        range.set_value((4, 0), s("Route No"));
        range.set_value((4, 1), s("Stop Name"));

        range.set_value((5, 0), Data::Float(1.0));
        range.set_value((5, 1), s("Central"));
        range.set_value((5, 7), Data::Float(15.0));
        range.set_value((5, 8), Data::Float(6.3));

        range.set_value((6, 0), s("n/a"));
        range.set_value((6, 1), s("Ghost"));

        range.set_value((7, 0), Data::Float(1.0));
        range.set_value((7, 1), s("Harbour"));
        range
    }

    #[test]
    fn skips_metadata_and_header() {
        let rows = rows_from_range(&sample_range());

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].stop_name, s("Central"));
        assert_eq!(rows[1].stop_name, s("Ghost"));
        assert_eq!(rows[2].stop_name, s("Harbour"));
    }

    #[test]
    fn offset_range_uses_sheet_positions() {
        // Used range starts at B3: one metadata row is blank, and column A
        // (the route number) is empty throughout.
        let mut range = Range::new((2, 1), (6, 9));
        range.set_value((2, 1), s("Title"));
        range.set_value((4, 1), s("Stop Name"));
        range.set_value((5, 1), s("Central"));
        range.set_value((6, 1), s("Harbour"));

        let rows = rows_from_range(&range);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].route_no, Data::Empty);
        assert_eq!(rows[0].stop_name, s("Central"));
    }

    #[test]
    fn empty_range_has_no_rows() {
        let range: Range<Data> = Range::empty();
        assert!(rows_from_range(&range).is_empty());
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bus_data.xlsx");

        let err = read_rows(&path).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn corrupt_file_fails_to_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bus_data.xlsx");
        std::fs::write(&path, "not a workbook").unwrap();

        let err = read_rows(&path).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
    }
}
