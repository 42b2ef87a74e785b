// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use import_cost_domain::DomainError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading the vehicle catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be opened.
    #[error("Failed to open catalog file '{}': {source}", path.display())]
    Io {
        /// The file that was opened.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The workbook could not be opened or read.
    #[error("Failed to read catalog workbook '{}': {source}", path.display())]
    Spreadsheet {
        /// The workbook that was read.
        path: PathBuf,
        /// The underlying spreadsheet error.
        #[source]
        source: calamine::XlsxError,
    },
    /// The workbook has no worksheet.
    #[error("Catalog workbook '{}' has no worksheet", path.display())]
    EmptyWorkbook {
        /// The workbook that was read.
        path: PathBuf,
    },
    /// The CSV stream is malformed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// A required header is absent.
    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),
    /// A cell could not be parsed.
    #[error("Row {row}, column '{column}': invalid value '{value}' ({reason})")]
    InvalidCell {
        /// The 1-based data row number, header excluded.
        row: usize,
        /// The column header.
        column: String,
        /// The raw cell content.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },
    /// A row parsed but violates a record rule.
    #[error("Row {row}: {source}")]
    InvalidRecord {
        /// The 1-based data row number, header excluded.
        row: usize,
        /// The violated rule.
        #[source]
        source: DomainError,
    },
}

impl From<CatalogError> for DomainError {
    fn from(err: CatalogError) -> Self {
        Self::CatalogUnavailable {
            reason: err.to_string(),
        }
    }
}
