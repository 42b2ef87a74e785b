// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tabular export of a cost breakdown.

use import_cost_domain::{CostBreakdown, CostLine};

use crate::error::{ApiError, translate_domain_error};

/// File name offered for downloaded exports.
pub const EXPORT_FILE_NAME: &str = "coste_importacion.csv";

/// Header row of the export.
pub const EXPORT_HEADERS: [&str; 2] = ["Concepto", "Importe (€)"];

/// Writes the breakdown as CSV, one row per line in breakdown order.
///
/// # Errors
///
/// Returns an error if there is nothing to export, if the lines do not end
/// with both totals, or if writing fails.
pub fn export_breakdown(lines: Vec<CostLine>) -> Result<Vec<u8>, ApiError> {
    if lines.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("breakdown"),
            message: String::from("no data to export"),
        });
    }

    let breakdown: CostBreakdown = CostBreakdown::try_from(lines).map_err(translate_domain_error)?;
    write_breakdown_csv(&breakdown)
}

/// Writes an already validated breakdown as CSV.
///
/// Amounts are written without trailing fractional zeros.
///
/// # Errors
///
/// Returns an error if the CSV writer fails.
pub fn write_breakdown_csv(breakdown: &CostBreakdown) -> Result<Vec<u8>, ApiError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let internal = |e: csv::Error| ApiError::Internal {
        message: format!("Failed to write export: {e}"),
    };

    writer.write_record(EXPORT_HEADERS).map_err(internal)?;
    for line in breakdown.lines() {
        let amount: String = line.amount.normalize().to_string();
        writer
            .write_record([line.label.as_str(), amount.as_str()])
            .map_err(internal)?;
    }

    writer.into_inner().map_err(|e| ApiError::Internal {
        message: format!("Failed to flush export: {e}"),
    })
}
