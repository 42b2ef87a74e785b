// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fiscal base value selection.

use crate::age::{AgeBand, AgeYears};
use crate::catalog_index::{CatalogRecord, ModelLabel};
use crate::error::DomainError;
use rust_decimal::Decimal;

/// What the user picked from the model list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSelection {
    /// The sentinel entry: tax the stated origin price directly.
    NotInCatalog,
    /// A catalog label, to be resolved against the catalog.
    Catalog(ModelLabel),
}

impl ModelSelection {
    /// Interprets a submitted label.
    ///
    /// The label only counts as the sentinel when a sentinel is enabled and
    /// the label equals it exactly. Otherwise it is treated as a catalog label.
    #[must_use]
    pub fn from_label(label: &str, sentinel: Option<&ModelLabel>) -> Self {
        match sentinel {
            Some(sentinel) if sentinel.value() == label => Self::NotInCatalog,
            _ => Self::Catalog(ModelLabel::new(label)),
        }
    }

    /// Returns whether this is the sentinel selection.
    #[must_use]
    pub const fn is_not_in_catalog(&self) -> bool {
        matches!(self, Self::NotInCatalog)
    }
}

/// Where the fiscal base value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuationSource<'a> {
    /// Bypass the catalog and use the fallback price.
    NotInCatalog,
    /// Look the value up on a resolved record.
    Record(&'a CatalogRecord),
}

/// Selects the fiscal base value used to compute registration tax.
///
/// For a catalog record the age is clamped to [`AgeBand::MAX`] and the stored
/// value for that band is returned unchanged. For the sentinel source the
/// fallback price is returned unchanged and no catalog lookup happens.
///
/// # Errors
///
/// Returns `MissingAgeColumn` if the record has no value for the clamped band.
pub fn resolve_base_value(
    source: ValuationSource<'_>,
    age: AgeYears,
    fallback_price: Decimal,
) -> Result<Decimal, DomainError> {
    match source {
        ValuationSource::NotInCatalog => Ok(fallback_price),
        ValuationSource::Record(record) => {
            let band: AgeBand = age.band();
            record
                .fiscal_value(band)
                .ok_or_else(|| DomainError::MissingAgeColumn {
                    model: record.model_name().to_string(),
                    age: band.value(),
                })
        }
    }
}
