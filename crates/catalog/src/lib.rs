// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog source layer for vehicle import quotes.
//!
//! This crate reads the vehicle catalog (model rows with per-age fiscal
//! values) from CSV or an `.xlsx` workbook and keeps it as an immutable
//! snapshot that is only replaced on explicit reload.
//!
//! ## Snapshot Consistency
//!
//! - A request takes one snapshot and uses it for listing, resolution and
//!   valuation
//! - Reloads never mutate a snapshot in place
//! - A failed reload leaves the previous snapshot active

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod error;
mod reader;
mod source;
mod store;
mod xlsx;

#[cfg(test)]
mod tests;

pub use error::CatalogError;
pub use reader::{MODEL_COLUMN, POWER_COLUMN, YEAR_FROM_COLUMN, YEAR_TO_COLUMN, read_catalog};
pub use source::{CatalogSource, CsvFileSource, CsvTextSource, DEFAULT_DELIMITER};
pub use store::{CatalogSnapshot, CatalogStore};
pub use xlsx::{XlsxFileSource, read_sheet};
