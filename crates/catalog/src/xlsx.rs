// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Spreadsheet catalogs. The first worksheet holds the table, headers in its
//! first row, with the same columns as the CSV form.

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use csv::StringRecord;
use import_cost_domain::CatalogIndex;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::CatalogError;
use crate::reader::{MODEL_COLUMN, parse_records};
use crate::source::CatalogSource;

/// An `.xlsx` workbook on disk.
#[derive(Debug, Clone)]
pub struct XlsxFileSource {
    path: PathBuf,
}

impl XlsxFileSource {
    /// Creates a source for the given workbook.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the workbook path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for XlsxFileSource {
    fn load(&self) -> Result<CatalogIndex, CatalogError> {
        debug!(path = %self.path.display(), "Reading catalog workbook");
        let spreadsheet_error = |source: calamine::XlsxError| CatalogError::Spreadsheet {
            path: self.path.clone(),
            source,
        };

        let mut workbook: Xlsx<BufReader<File>> =
            open_workbook(&self.path).map_err(spreadsheet_error)?;
        let range: Range<Data> = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| CatalogError::EmptyWorkbook {
                path: self.path.clone(),
            })?
            .map_err(spreadsheet_error)?;

        read_sheet(&range)
    }

    fn describe(&self) -> String {
        format!("xlsx file {}", self.path.display())
    }
}

/// Renders a cell the way the row parser expects it.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => value.to_string(),
        other => other.to_string(),
    }
}

fn row_record(row: &[Data]) -> StringRecord {
    row.iter().map(cell_text).collect()
}

/// Parses a worksheet range into an index, keeping rows in sheet order.
///
/// # Errors
///
/// Returns an error if the sheet is empty, the `MODELO` header is missing,
/// or a numeric cell cannot be parsed.
pub fn read_sheet(range: &Range<Data>) -> Result<CatalogIndex, CatalogError> {
    let mut rows = range.rows();
    let Some(header_row) = rows.next() else {
        return Err(CatalogError::MissingColumn(MODEL_COLUMN));
    };

    parse_records(&row_record(header_row), rows.map(|row| Ok(row_record(row))))
}
