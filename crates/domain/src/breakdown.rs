// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Registration tax and cost aggregation.
//!
//! This module provides pure, deterministic aggregation of itemized import
//! costs into an ordered breakdown. The customer total is always rounded up
//! to the next multiple of [`ROUNDING_STEP`], never to the nearest cent.

use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Registration tax rate applied to the fiscal base value (14.75 %).
pub const TAX_RATE: Decimal = Decimal::from_parts(1475, 0, 0, false, 4);

/// Granularity of the customer total.
pub const ROUNDING_STEP: Decimal = Decimal::ONE_HUNDRED;

/// Label of the sum of every cost except the origin price.
pub const IMPORT_COSTS_TOTAL_LABEL: &str = "TOTAL DE COSTES DE IMPORTACIÓN";

/// Label of the rounded amount quoted to the customer.
pub const CUSTOMER_TOTAL_LABEL: &str = "TOTAL DE COSTE PARA CLIENTE";

/// Field name reported when the computed tax overflows.
const REGISTRATION_TAX_FIELD: &str = "registration_tax";

fn too_large(field: &str) -> DomainError {
    DomainError::InvalidNumericInput {
        field: field.to_string(),
        reason: String::from("amount is out of the supported range"),
    }
}

/// Computes the registration tax for a fiscal base value. No rounding.
///
/// # Errors
///
/// Returns `InvalidNumericInput` if the product overflows.
pub fn compute_tax(base_value: Decimal) -> Result<Decimal, DomainError> {
    base_value
        .checked_mul(TAX_RATE)
        .ok_or_else(|| too_large(REGISTRATION_TAX_FIELD))
}

/// Rounds an amount up to the next multiple of [`ROUNDING_STEP`].
///
/// # Errors
///
/// Returns `InvalidNumericInput` if the rounded amount overflows.
pub fn round_up_to_step(amount: Decimal) -> Result<Decimal, DomainError> {
    amount
        .checked_div(ROUNDING_STEP)
        .map(|steps| steps.ceil())
        .and_then(|steps| steps.checked_mul(ROUNDING_STEP))
        .ok_or_else(|| too_large(CUSTOMER_TOTAL_LABEL))
}

/// Parses a user-supplied monetary amount.
///
/// # Errors
///
/// Returns `InvalidNumericInput` if the value is not a decimal number or is
/// negative.
pub fn parse_amount(field: &str, raw: &str) -> Result<Decimal, DomainError> {
    let trimmed: &str = raw.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidNumericInput {
            field: field.to_string(),
            reason: String::from("value is empty"),
        });
    }

    let amount: Decimal =
        Decimal::from_str(trimmed).map_err(|e| DomainError::InvalidNumericInput {
            field: field.to_string(),
            reason: format!("'{trimmed}' is not a number ({e})"),
        })?;

    ensure_non_negative(field, amount)?;
    Ok(amount)
}

fn ensure_non_negative(field: &str, amount: Decimal) -> Result<(), DomainError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(DomainError::InvalidNumericInput {
            field: field.to_string(),
            reason: format!("{amount} is negative"),
        });
    }
    Ok(())
}

/// A single labelled amount in a breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostLine {
    /// The cost concept.
    pub label: String,
    /// The amount in currency units.
    pub amount: Decimal,
}

impl CostLine {
    /// Creates a cost line.
    #[must_use]
    pub fn new(label: &str, amount: Decimal) -> Self {
        Self {
            label: label.to_string(),
            amount,
        }
    }
}

/// Ordered cost breakdown ending with the import-costs total and the
/// customer total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CostLine>", into = "Vec<CostLine>")]
pub struct CostBreakdown {
    lines: Vec<CostLine>,
}

impl CostBreakdown {
    /// Aggregates itemized costs into a breakdown.
    ///
    /// The first item is the origin price. Every other item contributes to
    /// the import-costs total; the origin price is only added back for the
    /// customer total.
    ///
    /// # Errors
    ///
    /// Returns an error if no items are given, if any amount is negative, or
    /// if a total overflows.
    pub fn from_itemized(itemized: Vec<CostLine>) -> Result<Self, DomainError> {
        let Some(origin) = itemized.first() else {
            return Err(DomainError::InvalidBreakdownLayout(String::from(
                "a breakdown requires an origin price line",
            )));
        };

        for line in &itemized {
            ensure_non_negative(&line.label, line.amount)?;
        }

        let origin_price: Decimal = origin.amount;
        let total_costs: Decimal = itemized
            .iter()
            .skip(1)
            .try_fold(Decimal::ZERO, |acc, l| acc.checked_add(l.amount))
            .ok_or_else(|| too_large(IMPORT_COSTS_TOTAL_LABEL))?;
        let customer_total: Decimal = origin_price
            .checked_add(total_costs)
            .ok_or_else(|| too_large(CUSTOMER_TOTAL_LABEL))
            .and_then(round_up_to_step)?;

        let mut lines: Vec<CostLine> = itemized;
        lines.push(CostLine::new(IMPORT_COSTS_TOTAL_LABEL, total_costs));
        lines.push(CostLine::new(CUSTOMER_TOTAL_LABEL, customer_total));

        Ok(Self { lines })
    }

    /// Returns every line in presentation order, totals included.
    #[must_use]
    pub fn lines(&self) -> &[CostLine] {
        &self.lines
    }

    /// Returns the itemized lines, without the two trailing totals.
    #[must_use]
    pub fn itemized(&self) -> &[CostLine] {
        &self.lines[..self.lines.len() - 2]
    }

    /// Returns the amount for a label, if present.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<Decimal> {
        self.lines
            .iter()
            .find(|l| l.label == label)
            .map(|l| l.amount)
    }

    /// Returns the origin price (first line).
    #[must_use]
    pub fn origin_price(&self) -> Decimal {
        self.lines[0].amount
    }

    /// Returns the sum of every cost except the origin price.
    #[must_use]
    pub fn total_costs(&self) -> Decimal {
        self.lines[self.lines.len() - 2].amount
    }

    /// Returns the rounded customer total.
    #[must_use]
    pub fn customer_total(&self) -> Decimal {
        self.lines[self.lines.len() - 1].amount
    }
}

impl TryFrom<Vec<CostLine>> for CostBreakdown {
    type Error = DomainError;

    /// Accepts a previously computed breakdown, e.g. one handed back for
    /// export. Amounts are taken as given; only the shape is checked.
    fn try_from(lines: Vec<CostLine>) -> Result<Self, Self::Error> {
        let [.., import_total, customer_total] = lines.as_slice() else {
            return Err(DomainError::MalformedBreakdown(String::from(
                "a breakdown needs at least the two total lines",
            )));
        };

        if lines.len() < 3 {
            return Err(DomainError::MalformedBreakdown(String::from(
                "a breakdown needs an origin price line before the totals",
            )));
        }

        if import_total.label != IMPORT_COSTS_TOTAL_LABEL
            || customer_total.label != CUSTOMER_TOTAL_LABEL
        {
            return Err(DomainError::MalformedBreakdown(format!(
                "the last two lines must be '{IMPORT_COSTS_TOTAL_LABEL}' and '{CUSTOMER_TOTAL_LABEL}'"
            )));
        }

        Ok(Self { lines })
    }
}

impl From<CostBreakdown> for Vec<CostLine> {
    fn from(breakdown: CostBreakdown) -> Self {
        breakdown.lines
    }
}
