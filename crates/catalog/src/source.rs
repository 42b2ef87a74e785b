// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Where catalog rows come from.

use import_cost_domain::CatalogIndex;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::CatalogError;
use crate::reader::read_catalog;

/// Default CSV field delimiter.
pub const DEFAULT_DELIMITER: u8 = b',';

/// A readable catalog source.
///
/// Implementations must return a complete, consistent set of rows on every
/// call; partial reads are reported as errors.
pub trait CatalogSource: Send + Sync {
    /// Reads the full catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or parsed.
    fn load(&self) -> Result<CatalogIndex, CatalogError>;

    /// Human-readable description for logs.
    fn describe(&self) -> String;
}

/// A CSV file on disk.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
    delimiter: u8,
}

impl CsvFileSource {
    /// Creates a source for the given file using the default delimiter.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Overrides the field delimiter, e.g. `b';'` for spreadsheet exports
    /// using a decimal comma locale.
    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for CsvFileSource {
    fn load(&self) -> Result<CatalogIndex, CatalogError> {
        debug!(path = %self.path.display(), "Reading catalog file");
        let file: File = File::open(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        read_catalog(BufReader::new(file), self.delimiter)
    }

    fn describe(&self) -> String {
        format!("csv file {}", self.path.display())
    }
}

/// CSV content held in memory. Used for tests and embedded catalogs.
#[derive(Debug, Clone)]
pub struct CsvTextSource {
    content: String,
}

impl CsvTextSource {
    /// Wraps CSV text.
    #[must_use]
    pub fn new(content: &str) -> Self {
        Self {
            content: content.to_string(),
        }
    }
}

impl CatalogSource for CsvTextSource {
    fn load(&self) -> Result<CatalogIndex, CatalogError> {
        read_catalog(self.content.as_bytes(), DEFAULT_DELIMITER)
    }

    fn describe(&self) -> String {
        String::from("in-memory csv")
    }
}
