// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_911, depreciating_values};
use crate::{
    AgeBand, AgeYears, CatalogRecord, DomainError, ModelLabel, ModelSelection,
    NOT_IN_CATALOG_LABEL, ValuationSource, resolve_base_value,
};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

#[test]
fn test_resolve_base_value_reads_age_column() {
    let record: CatalogRecord = create_911();
    let value: Decimal = resolve_base_value(
        ValuationSource::Record(&record),
        AgeYears::new(3),
        Decimal::ZERO,
    )
    .unwrap();
    assert_eq!(value, Decimal::from(50000));
}

#[test]
fn test_resolve_base_value_clamps_old_vehicles() {
    let record: CatalogRecord = create_911();
    let at_twelve: Decimal = resolve_base_value(
        ValuationSource::Record(&record),
        AgeYears::new(12),
        Decimal::ZERO,
    )
    .unwrap();

    for years in [13, 20, 50, 400] {
        let value: Decimal = resolve_base_value(
            ValuationSource::Record(&record),
            AgeYears::new(years),
            Decimal::ZERO,
        )
        .unwrap();
        assert_eq!(value, at_twelve, "years = {years}");
    }
}

#[test]
fn test_resolve_base_value_sentinel_returns_fallback() {
    let value: Decimal = resolve_base_value(
        ValuationSource::NotInCatalog,
        AgeYears::new(7),
        Decimal::from(45000),
    )
    .unwrap();
    assert_eq!(value, Decimal::from(45000));
}

#[test]
fn test_resolve_base_value_returns_stored_value_unrounded() {
    let mut values: BTreeMap<AgeBand, Decimal> = BTreeMap::new();
    values.insert(AgeBand::new(0).unwrap(), Decimal::new(1_234_567, 2));
    let record: CatalogRecord = CatalogRecord::new("Taycan", None, None, values).unwrap();

    let value: Decimal = resolve_base_value(
        ValuationSource::Record(&record),
        AgeYears::new(0),
        Decimal::ZERO,
    )
    .unwrap();
    assert_eq!(value, Decimal::new(1_234_567, 2));
}

#[test]
fn test_resolve_base_value_missing_age_column() {
    let mut values: BTreeMap<AgeBand, Decimal> = depreciating_values(60000);
    values.remove(&AgeBand::new(12).unwrap());
    let record: CatalogRecord = CatalogRecord::new("Panamera", None, None, values).unwrap();

    let result: Result<Decimal, DomainError> = resolve_base_value(
        ValuationSource::Record(&record),
        AgeYears::new(15),
        Decimal::ZERO,
    );
    assert_eq!(
        result,
        Err(DomainError::MissingAgeColumn {
            model: String::from("Panamera"),
            age: 12,
        })
    );
}

#[test]
fn test_model_selection_recognizes_enabled_sentinel() {
    let sentinel: ModelLabel = ModelLabel::new(NOT_IN_CATALOG_LABEL);
    assert_eq!(
        ModelSelection::from_label(NOT_IN_CATALOG_LABEL, Some(&sentinel)),
        ModelSelection::NotInCatalog
    );
}

#[test]
fn test_model_selection_sentinel_disabled_is_a_label() {
    let selection: ModelSelection = ModelSelection::from_label(NOT_IN_CATALOG_LABEL, None);
    assert!(!selection.is_not_in_catalog());
    assert_eq!(
        selection,
        ModelSelection::Catalog(ModelLabel::new(NOT_IN_CATALOG_LABEL))
    );
}

#[test]
fn test_model_selection_regular_label() {
    let sentinel: ModelLabel = ModelLabel::new(NOT_IN_CATALOG_LABEL);
    let selection: ModelSelection = ModelSelection::from_label("911 | 400 CV", Some(&sentinel));
    assert_eq!(
        selection,
        ModelSelection::Catalog(ModelLabel::new("911 | 400 CV"))
    );
}
