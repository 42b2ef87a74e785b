// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row parsing of the vehicle catalog.
//!
//! Expected headers (whitespace-trimmed, case-sensitive):
//! `MODELO`, optional `DESDE`, `HASTA`, `POTENCIA`, and one column per age
//! band named `0` to `12`. Unknown columns are ignored. Empty cells are
//! treated as absent values.

use csv::StringRecord;
use import_cost_domain::{AgeBand, CatalogIndex, CatalogRecord, YearRange};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::collections::{BTreeMap, HashMap};
use std::io::Read;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::CatalogError;

/// Model name column.
pub const MODEL_COLUMN: &str = "MODELO";
/// First production year column.
pub const YEAR_FROM_COLUMN: &str = "DESDE";
/// Last production year column.
pub const YEAR_TO_COLUMN: &str = "HASTA";
/// Power rating column.
pub const POWER_COLUMN: &str = "POTENCIA";

/// Builds the header lookup, keyed by trimmed header text.
fn header_positions(headers: &StringRecord) -> Result<HashMap<String, usize>, CatalogError> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    for (idx, header) in headers.iter().enumerate() {
        // First occurrence wins on duplicated headers.
        positions.entry(header.trim().to_string()).or_insert(idx);
    }

    if !positions.contains_key(MODEL_COLUMN) {
        return Err(CatalogError::MissingColumn(MODEL_COLUMN));
    }

    Ok(positions)
}

/// Reads one trimmed, non-empty cell.
fn cell<'r>(
    record: &'r StringRecord,
    positions: &HashMap<String, usize>,
    column: &str,
) -> Option<&'r str> {
    positions
        .get(column)
        .and_then(|&idx| record.get(idx))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn parse_decimal_cell(row: usize, column: &str, value: &str) -> Result<Decimal, CatalogError> {
    Decimal::from_str(value).map_err(|e| CatalogError::InvalidCell {
        row,
        column: column.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

/// Parses a whole-number cell. Spreadsheet exports often write integers as
/// `2015.0`, so any decimal is accepted and truncated.
fn parse_integer_cell<T>(
    row: usize,
    column: &str,
    value: &str,
    convert: impl Fn(&Decimal) -> Option<T>,
) -> Result<T, CatalogError> {
    let number: Decimal = parse_decimal_cell(row, column, value)?;
    convert(&number.trunc()).ok_or_else(|| CatalogError::InvalidCell {
        row,
        column: column.to_string(),
        value: value.to_string(),
        reason: String::from("out of range"),
    })
}

/// Parses a single data row into a catalog record.
///
/// Returns `Ok(None)` for rows without a model name.
fn parse_row(
    row: usize,
    record: &StringRecord,
    positions: &HashMap<String, usize>,
) -> Result<Option<CatalogRecord>, CatalogError> {
    let Some(model_name) = cell(record, positions, MODEL_COLUMN) else {
        debug!(row, "Skipping catalog row without a model name");
        return Ok(None);
    };

    let year_from: Option<i32> = cell(record, positions, YEAR_FROM_COLUMN)
        .map(|v| parse_integer_cell(row, YEAR_FROM_COLUMN, v, <Decimal as ToPrimitive>::to_i32))
        .transpose()?;
    let year_to: Option<i32> = cell(record, positions, YEAR_TO_COLUMN)
        .map(|v| parse_integer_cell(row, YEAR_TO_COLUMN, v, <Decimal as ToPrimitive>::to_i32))
        .transpose()?;

    if year_from.is_some() != year_to.is_some() {
        debug!(
            row,
            model = model_name,
            "Ignoring incomplete year range on catalog row"
        );
    }

    let power_rating: Option<u32> = cell(record, positions, POWER_COLUMN)
        .map(|v| parse_integer_cell(row, POWER_COLUMN, v, <Decimal as ToPrimitive>::to_u32))
        .transpose()?;

    let mut fiscal_values: BTreeMap<AgeBand, Decimal> = BTreeMap::new();
    for band in AgeBand::all() {
        let column: String = band.column_name();
        if let Some(value) = cell(record, positions, &column) {
            fiscal_values.insert(band, parse_decimal_cell(row, &column, value)?);
        }
    }

    let record: CatalogRecord = CatalogRecord::new(
        model_name,
        YearRange::from_bounds(year_from, year_to),
        power_rating,
        fiscal_values,
    )
    .map_err(|source| CatalogError::InvalidRecord { row, source })?;

    Ok(Some(record))
}

/// Parses a CSV catalog into an index, keeping rows in file order.
///
/// # Errors
///
/// Returns an error if the CSV is malformed, the `MODELO` header is missing,
/// or a numeric cell cannot be parsed.
pub fn read_catalog<R: Read>(input: R, delimiter: u8) -> Result<CatalogIndex, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(input);

    let headers: StringRecord = reader.headers()?.clone();
    parse_records(
        &headers,
        reader.records().map(|r| r.map_err(CatalogError::from)),
    )
}

/// Builds an index from a header row and data rows, whatever format they
/// were read from.
pub(crate) fn parse_records(
    headers: &StringRecord,
    rows: impl Iterator<Item = Result<StringRecord, CatalogError>>,
) -> Result<CatalogIndex, CatalogError> {
    let positions: HashMap<String, usize> = header_positions(headers)?;

    let missing_bands: Vec<String> = AgeBand::all()
        .map(AgeBand::column_name)
        .filter(|c| !positions.contains_key(c))
        .collect();
    if !missing_bands.is_empty() {
        warn!(
            missing = %missing_bands.join(", "),
            "Catalog has no column for some age bands"
        );
    }

    let mut records: Vec<CatalogRecord> = Vec::new();
    for (idx, result) in rows.enumerate() {
        let row: usize = idx + 1;
        let record: StringRecord = result?;
        if let Some(parsed) = parse_row(row, &record, &positions)? {
            records.push(parsed);
        }
    }

    Ok(CatalogIndex::new(records))
}
