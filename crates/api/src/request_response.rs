// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use import_cost_domain::{CostBreakdown, CostLine, ModelLabel};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// API request to compute an import quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// The selected model label, or the "not in catalog" label.
    pub model: String,
    /// First registration date, `YYYY-MM-DD`.
    pub registration_date: String,
    /// Raw amounts keyed by component label, origin price included.
    #[serde(default)]
    pub costs: BTreeMap<String, String>,
}

/// API response for a computed quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// The label the quote was computed for.
    pub model: String,
    /// Whether the catalog was bypassed.
    pub not_in_catalog: bool,
    /// Whole years since first registration.
    pub age_years: u32,
    /// The age band used for the catalog lookup (age clamped to 12).
    pub age_band: u8,
    /// The value the registration tax was computed on.
    pub fiscal_base_value: Decimal,
    /// The computed registration tax.
    pub registration_tax: Decimal,
    /// Snapshot version the quote was computed against.
    pub catalog_version: u64,
    /// The itemized breakdown followed by both totals.
    pub breakdown: CostBreakdown,
}

/// API response listing selectable models.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListModelsResponse {
    /// Distinct labels in ascending order, then the sentinel if enabled.
    pub models: Vec<ModelLabel>,
    /// Snapshot version the list was taken from.
    pub catalog_version: u64,
}

/// API request to export a previously computed breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    /// The breakdown lines as returned by a quote.
    #[serde(default)]
    pub breakdown: Vec<CostLine>,
}

/// API response for a catalog reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReloadResponse {
    /// Version of the snapshot now in use.
    pub version: u64,
    /// Number of records in the new snapshot.
    pub records: usize,
    /// Where the catalog was read from.
    pub source: String,
}
