// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Shared catalog fixtures.

use crate::{AgeBand, CatalogIndex, CatalogRecord, YearRange};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Fiscal values for every band, decreasing by 2000 per year from `new_value`.
pub fn depreciating_values(new_value: i64) -> BTreeMap<AgeBand, Decimal> {
    AgeBand::all()
        .map(|band| {
            let value: i64 = new_value - i64::from(band.value()) * 2000;
            (band, Decimal::from(value))
        })
        .collect()
}

pub fn create_911() -> CatalogRecord {
    let mut values: BTreeMap<AgeBand, Decimal> = depreciating_values(56000);
    values.insert(AgeBand::new(3).unwrap(), Decimal::from(50000));
    CatalogRecord::new(
        "911",
        Some(YearRange::new(2015, 2019)),
        Some(400),
        values,
    )
    .unwrap()
}

pub fn create_cayenne() -> CatalogRecord {
    CatalogRecord::new("Cayenne", None, Some(340), depreciating_values(80000)).unwrap()
}

pub fn create_macan() -> CatalogRecord {
    CatalogRecord::new(
        "Macan",
        Some(YearRange::new(2014, 2018)),
        None,
        depreciating_values(45000),
    )
    .unwrap()
}

pub fn create_test_index() -> CatalogIndex {
    CatalogIndex::new(vec![create_macan(), create_911(), create_cayenne()])
}
