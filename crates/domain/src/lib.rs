// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod age;
mod breakdown;
mod catalog_index;
mod error;
mod layout;
mod valuation;

#[cfg(test)]
mod tests;

pub use age::{AgeBand, AgeYears, DAYS_PER_YEAR, parse_registration_date};
pub use breakdown::{
    CUSTOMER_TOTAL_LABEL, CostBreakdown, CostLine, IMPORT_COSTS_TOTAL_LABEL, ROUNDING_STEP,
    TAX_RATE, compute_tax, parse_amount, round_up_to_step,
};
pub use catalog_index::{
    CatalogIndex, CatalogRecord, LABEL_SEPARATOR, LABEL_SPLIT, ModelLabel, NOT_IN_CATALOG_LABEL,
    POWER_UNIT, YearRange,
};
pub use error::DomainError;
pub use layout::{
    BreakdownComponent, BreakdownLayout, ComponentKind, ORIGIN_PRICE_LABEL,
    REGISTRATION_TAX_LABEL, build_breakdown,
};
pub use valuation::{ModelSelection, ValuationSource, resolve_base_value};
