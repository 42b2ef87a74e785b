// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_911, create_cayenne, create_test_index, depreciating_values};
use crate::{
    CatalogIndex, CatalogRecord, DomainError, ModelLabel, NOT_IN_CATALOG_LABEL, YearRange,
};
use std::collections::BTreeMap;

#[test]
fn test_label_with_years_and_power() {
    assert_eq!(create_911().label().value(), "911 | 2015–2019 | 400 CV");
}

#[test]
fn test_label_with_power_only() {
    assert_eq!(create_cayenne().label().value(), "Cayenne | 340 CV");
}

#[test]
fn test_label_with_name_only() {
    let record: CatalogRecord = CatalogRecord::new("Boxster", None, None, BTreeMap::new()).unwrap();
    assert_eq!(record.label().value(), "Boxster");
}

#[test]
fn test_year_range_requires_both_bounds() {
    assert_eq!(YearRange::from_bounds(Some(2015), None), None);
    assert_eq!(YearRange::from_bounds(None, Some(2019)), None);
    assert_eq!(
        YearRange::from_bounds(Some(2015), Some(2019)),
        Some(YearRange::new(2015, 2019))
    );
}

#[test]
fn test_record_trims_model_name() {
    let record: CatalogRecord =
        CatalogRecord::new("  Taycan  ", None, None, BTreeMap::new()).unwrap();
    assert_eq!(record.model_name(), "Taycan");
}

#[test]
fn test_record_rejects_blank_model_name() {
    let result: Result<CatalogRecord, DomainError> =
        CatalogRecord::new("   ", None, None, BTreeMap::new());
    assert!(matches!(result, Err(DomainError::InvalidModelName(_))));
}

#[test]
fn test_list_labels_sorted_ascending() {
    let index: CatalogIndex = create_test_index();
    let labels: Vec<String> = index
        .list_labels(None)
        .iter()
        .map(|l| l.value().to_string())
        .collect();

    assert_eq!(
        labels,
        vec![
            "911 | 2015–2019 | 400 CV",
            "Cayenne | 340 CV",
            "Macan | 2014–2018",
        ]
    );
}

#[test]
fn test_list_labels_drops_duplicates() {
    let index: CatalogIndex = CatalogIndex::new(vec![create_911(), create_cayenne(), create_911()]);
    assert_eq!(index.len(), 3);
    assert_eq!(index.list_labels(None).len(), 2);
}

#[test]
fn test_list_labels_keeps_rows_differing_by_power() {
    let base: CatalogRecord = create_911();
    let turbo: CatalogRecord = CatalogRecord::new(
        "911",
        Some(YearRange::new(2015, 2019)),
        Some(540),
        depreciating_values(90000),
    )
    .unwrap();
    let index: CatalogIndex = CatalogIndex::new(vec![base, turbo]);
    assert_eq!(index.list_labels(None).len(), 2);
}

#[test]
fn test_list_labels_appends_sentinel_last() {
    let index: CatalogIndex = create_test_index();
    let sentinel: ModelLabel = ModelLabel::new(NOT_IN_CATALOG_LABEL);
    let labels: Vec<ModelLabel> = index.list_labels(Some(&sentinel));

    assert_eq!(labels.len(), 4);
    assert_eq!(labels.last(), Some(&sentinel));
}

#[test]
fn test_empty_catalog_lists_only_sentinel() {
    let index: CatalogIndex = CatalogIndex::default();
    assert!(index.is_empty());
    assert!(index.list_labels(None).is_empty());

    let sentinel: ModelLabel = ModelLabel::new(NOT_IN_CATALOG_LABEL);
    assert_eq!(index.list_labels(Some(&sentinel)), vec![sentinel]);
}

#[test]
fn test_resolve_uses_leading_segment() {
    let index: CatalogIndex = create_test_index();
    let record: &CatalogRecord = index
        .resolve(&ModelLabel::new("911 | 2015–2019 | 400 CV"))
        .unwrap();
    assert_eq!(record.model_name(), "911");
}

#[test]
fn test_resolve_accepts_bare_model_name() {
    let index: CatalogIndex = create_test_index();
    assert!(index.resolve(&ModelLabel::new("  Cayenne ")).is_ok());
}

#[test]
fn test_resolve_first_match_wins_on_shared_name() {
    let first: CatalogRecord = create_911();
    let second: CatalogRecord = CatalogRecord::new(
        "911",
        Some(YearRange::new(2020, 2024)),
        Some(450),
        depreciating_values(120_000),
    )
    .unwrap();
    let index: CatalogIndex = CatalogIndex::new(vec![first.clone(), second]);

    let resolved: &CatalogRecord = index
        .resolve(&ModelLabel::new("911 | 2020–2024 | 450 CV"))
        .unwrap();
    assert_eq!(resolved, &first);
}

#[test]
fn test_resolve_unknown_model_fails() {
    let index: CatalogIndex = create_test_index();
    let result: Result<&CatalogRecord, DomainError> =
        index.resolve(&ModelLabel::new("Unknown Model | 2000–2005"));

    assert_eq!(
        result,
        Err(DomainError::ModelNotFound {
            model: String::from("Unknown Model"),
        })
    );
}

#[test]
fn test_resolve_is_case_sensitive() {
    let index: CatalogIndex = create_test_index();
    assert!(index.resolve(&ModelLabel::new("cayenne")).is_err());
}

#[test]
fn test_every_listed_label_resolves() {
    let index: CatalogIndex = CatalogIndex::new(vec![
        create_911(),
        create_cayenne(),
        create_911(),
        CatalogRecord::new("718 Cayman", None, None, BTreeMap::new()).unwrap(),
    ]);

    for label in index.list_labels(None) {
        assert!(index.resolve(&label).is_ok(), "label = {label}");
    }
}
