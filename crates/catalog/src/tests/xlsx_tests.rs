// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use calamine::{Data, Range};
use import_cost_domain::{AgeBand, CatalogIndex, CatalogRecord, DomainError};
use rust_decimal::Decimal;

use crate::{CatalogError, CatalogSource, XlsxFileSource, read_sheet};

/// Builds a sheet from rows of cells, padding short rows with empty cells.
fn sheet(rows: &[Vec<Data>]) -> Range<Data> {
    let width: usize = rows.iter().map(Vec::len).max().unwrap();
    let height: u32 = u32::try_from(rows.len()).unwrap();
    let mut range: Range<Data> =
        Range::new((0, 0), (height - 1, u32::try_from(width).unwrap() - 1));
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            range.set_value(
                (u32::try_from(r).unwrap(), u32::try_from(c).unwrap()),
                cell.clone(),
            );
        }
    }
    range
}

fn text(value: &str) -> Data {
    Data::String(value.to_string())
}

fn header_row() -> Vec<Data> {
    let mut headers: Vec<Data> = vec![text("MODELO"), text("DESDE"), text("HASTA"), text("POTENCIA")];
    headers.extend((0..=12).map(|band: i32| text(&band.to_string())));
    headers
}

#[test]
fn test_read_sheet_with_numeric_cells() {
    let mut row: Vec<Data> = vec![
        text("911"),
        Data::Float(2015.0),
        Data::Float(2019.0),
        Data::Int(400),
    ];
    row.extend((0..=12).map(|band: i32| Data::Float(f64::from(56000 - band * 2000))));

    let index: CatalogIndex = read_sheet(&sheet(&[header_row(), row])).unwrap();
    let record: &CatalogRecord = &index.records()[0];

    assert_eq!(record.label().value(), "911 | 2015–2019 | 400 CV");
    assert_eq!(
        record.fiscal_value(AgeBand::new(3).unwrap()),
        Some(Decimal::from(50000))
    );
    assert_eq!(record.fiscal_values().len(), 13);
}

#[test]
fn test_empty_cells_are_absent() {
    let row: Vec<Data> = vec![
        text("Cayenne"),
        Data::Empty,
        Data::Empty,
        Data::Float(340.0),
        Data::Float(80000.0),
        Data::Empty,
        Data::Float(76000.5),
    ];

    let index: CatalogIndex = read_sheet(&sheet(&[header_row(), row])).unwrap();
    let record: &CatalogRecord = &index.records()[0];

    assert_eq!(record.label().value(), "Cayenne | 340 CV");
    assert_eq!(record.fiscal_value(AgeBand::new(1).unwrap()), None);
    assert_eq!(
        record.fiscal_value(AgeBand::new(2).unwrap()),
        Some(Decimal::new(760_005, 1))
    );
}

#[test]
fn test_sheet_without_model_header() {
    let rows: Vec<Vec<Data>> = vec![vec![text("NOMBRE"), text("0")], vec![text("911"), Data::Int(1)]];
    let err: CatalogError = read_sheet(&sheet(&rows)).unwrap_err();

    assert!(matches!(err, CatalogError::MissingColumn("MODELO")));
    assert!(matches!(
        DomainError::from(err),
        DomainError::CatalogUnavailable { .. }
    ));
}

#[test]
fn test_empty_sheet_has_no_model_header() {
    let range: Range<Data> = Range::empty();
    assert!(matches!(
        read_sheet(&range),
        Err(CatalogError::MissingColumn("MODELO"))
    ));
}

#[test]
fn test_text_in_numeric_column_reports_cell() {
    let rows: Vec<Vec<Data>> = vec![
        vec![text("MODELO"), text("POTENCIA")],
        vec![text("911"), text("mucha")],
    ];
    assert!(matches!(
        read_sheet(&sheet(&rows)),
        Err(CatalogError::InvalidCell { row: 1, .. })
    ));
}

#[test]
fn test_missing_workbook_is_a_spreadsheet_error() {
    let source: XlsxFileSource = XlsxFileSource::new("/nonexistent/tablas.xlsx");
    assert_eq!(source.describe(), "xlsx file /nonexistent/tablas.xlsx");
    assert!(matches!(
        source.load(),
        Err(CatalogError::Spreadsheet { .. })
    ));
}
