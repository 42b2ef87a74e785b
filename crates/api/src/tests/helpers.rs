// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use import_cost_catalog::{CatalogSnapshot, CatalogStore};
use std::collections::BTreeMap;
use std::sync::Arc;
use time::Date;
use time::macros::date;

use crate::QuoteRequest;

pub const TEST_CATALOG: &str = "\
MODELO,DESDE,HASTA,POTENCIA,0,1,2,3,4,5,6,7,8,9,10,11,12
911,2015,2019,400,56000,54000,52000,50000,48000,46000,44000,42000,40000,38000,36000,34000,32000
Cayenne,,,340,80000,78000,76000,74000,72000,70000,68000,66000,64000,62000,60000,58000,56000
Boxster,2016,2020,300,40000,38000
";

/// Reference date used by every quote test.
pub const TODAY: Date = date!(2024 - 06 - 15);

pub fn create_test_store() -> CatalogStore {
    CatalogStore::new_in_memory(TEST_CATALOG).unwrap()
}

pub fn create_test_snapshot() -> Arc<CatalogSnapshot> {
    create_test_store().snapshot()
}

/// The eight user-supplied amounts of the full layout.
pub fn full_costs(origin_price: &str) -> BTreeMap<String, String> {
    [
        ("PRECIO EN ORIGEN", origin_price),
        ("COSTE DE GESTIÓN EN ORIGEN", "400"),
        ("COSTE DE REVISIÓN EN ORIGEN", "250"),
        ("COSTE DE TRANSPORTE", "1200"),
        ("OTROS COSTES EN ORIGEN", "150"),
        ("PROCESO DE MATRICULACIÓN", "300"),
        ("REVISION POST COMPRA", "200"),
        ("HONORARIOS DE GESTIÓN", "500"),
    ]
    .into_iter()
    .map(|(label, value)| (label.to_string(), value.to_string()))
    .collect()
}

/// A request for a three-year-old vehicle as of [`TODAY`].
pub fn create_quote_request(model: &str, origin_price: &str) -> QuoteRequest {
    QuoteRequest {
        model: model.to_string(),
        registration_date: String::from("2021-06-01"),
        costs: full_costs(origin_price),
    }
}
