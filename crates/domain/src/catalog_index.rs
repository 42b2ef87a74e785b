// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalog records, display labels and label resolution.
//!
//! A label carries the model name followed by optional year range and power
//! suffixes for display. Resolution only looks at the leading model name, so
//! two rows sharing a name but differing by years or power resolve to the
//! first of them in catalog order.

use crate::age::AgeBand;
use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Separator placed between label segments.
pub const LABEL_SEPARATOR: &str = " | ";

/// Character on which a label is split when resolving it back to a model name.
pub const LABEL_SPLIT: char = '|';

/// Unit suffix for the power rating segment.
pub const POWER_UNIT: &str = "CV";

/// Default sentinel label meaning "model not present in the catalog".
pub const NOT_IN_CATALOG_LABEL: &str = "NO ESTÁ EN TABLAS";

/// An inclusive production year range. Only ever present as a complete pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    from: i32,
    to: i32,
}

impl YearRange {
    /// Creates a year range.
    #[must_use]
    pub const fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }

    /// Builds a range from two optional bounds.
    ///
    /// Returns `None` unless both bounds are present.
    #[must_use]
    pub const fn from_bounds(from: Option<i32>, to: Option<i32>) -> Option<Self> {
        match (from, to) {
            (Some(from), Some(to)) => Some(Self { from, to }),
            _ => None,
        }
    }

    /// Returns the first production year.
    #[must_use]
    pub const fn from(&self) -> i32 {
        self.from
    }

    /// Returns the last production year.
    #[must_use]
    pub const fn to(&self) -> i32 {
        self.to
    }
}

/// One row of the vehicle catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    model_name: String,
    years: Option<YearRange>,
    power_rating: Option<u32>,
    fiscal_values: BTreeMap<AgeBand, Decimal>,
}

impl CatalogRecord {
    /// Creates a catalog record.
    ///
    /// The model name is trimmed.
    ///
    /// # Errors
    ///
    /// Returns an error if the trimmed model name is empty.
    pub fn new(
        model_name: &str,
        years: Option<YearRange>,
        power_rating: Option<u32>,
        fiscal_values: BTreeMap<AgeBand, Decimal>,
    ) -> Result<Self, DomainError> {
        let model_name: &str = model_name.trim();
        if model_name.is_empty() {
            return Err(DomainError::InvalidModelName(String::from(
                "Model name cannot be empty",
            )));
        }

        Ok(Self {
            model_name: model_name.to_string(),
            years,
            power_rating,
            fiscal_values,
        })
    }

    /// Returns the trimmed model name.
    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Returns the production year range, if known.
    #[must_use]
    pub const fn years(&self) -> Option<YearRange> {
        self.years
    }

    /// Returns the power rating, if known.
    #[must_use]
    pub const fn power_rating(&self) -> Option<u32> {
        self.power_rating
    }

    /// Returns the stored fiscal value for an age band.
    #[must_use]
    pub fn fiscal_value(&self, band: AgeBand) -> Option<Decimal> {
        self.fiscal_values.get(&band).copied()
    }

    /// Returns every stored fiscal value keyed by age band.
    #[must_use]
    pub const fn fiscal_values(&self) -> &BTreeMap<AgeBand, Decimal> {
        &self.fiscal_values
    }

    /// Builds the display label for this record.
    #[must_use]
    pub fn label(&self) -> ModelLabel {
        let mut parts: Vec<String> = vec![self.model_name.clone()];

        if let Some(years) = self.years {
            parts.push(format!("{}–{}", years.from(), years.to()));
        }

        if let Some(power) = self.power_rating {
            parts.push(format!("{power} {POWER_UNIT}"));
        }

        ModelLabel(parts.join(LABEL_SEPARATOR))
    }
}

/// A display label for a catalog model, as offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelLabel(String);

impl ModelLabel {
    /// Wraps a label string as received from the user.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Returns the full label text.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }

    /// Returns the trimmed leading segment used for catalog matching.
    #[must_use]
    pub fn model_name(&self) -> &str {
        self.0.split(LABEL_SPLIT).next().unwrap_or_default().trim()
    }
}

impl std::fmt::Display for ModelLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Read access over a single catalog snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogIndex {
    records: Vec<CatalogRecord>,
}

impl CatalogIndex {
    /// Creates an index over records in catalog order.
    #[must_use]
    pub const fn new(records: Vec<CatalogRecord>) -> Self {
        Self { records }
    }

    /// Returns the records in catalog order.
    #[must_use]
    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the catalog has no records.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lists the distinct record labels sorted ascending, followed by the
    /// sentinel label when one is given.
    #[must_use]
    pub fn list_labels(&self, sentinel: Option<&ModelLabel>) -> Vec<ModelLabel> {
        let distinct: BTreeSet<ModelLabel> =
            self.records.iter().map(CatalogRecord::label).collect();

        let mut labels: Vec<ModelLabel> = distinct.into_iter().collect();
        if let Some(sentinel) = sentinel {
            labels.push(sentinel.clone());
        }
        labels
    }

    /// Resolves a label to the first record whose model name equals the
    /// label's leading segment.
    ///
    /// # Errors
    ///
    /// Returns `ModelNotFound` if no record carries that model name.
    pub fn resolve(&self, label: &ModelLabel) -> Result<&CatalogRecord, DomainError> {
        let model_name: &str = label.model_name();
        self.records
            .iter()
            .find(|r| r.model_name() == model_name)
            .ok_or_else(|| DomainError::ModelNotFound {
                model: model_name.to_string(),
            })
    }
}
