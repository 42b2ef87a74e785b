// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Quote orchestration over one catalog snapshot.

use import_cost_catalog::{CatalogSnapshot, CatalogStore};
use import_cost_domain::{
    AgeYears, BreakdownComponent, BreakdownLayout, CatalogRecord, CostBreakdown, DomainError,
    ModelLabel, ModelSelection, ValuationSource, build_breakdown, compute_tax, parse_amount,
    parse_registration_date, resolve_base_value,
};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::sync::Arc;
use time::Date;
use tracing::{debug, info};

use crate::config::QuoteConfig;
use crate::error::{ApiError, translate_domain_error};
use crate::request_response::{ListModelsResponse, QuoteRequest, QuoteResponse, ReloadResponse};

/// Lists the selectable model labels of a snapshot.
#[must_use]
pub fn list_models(snapshot: &CatalogSnapshot, config: &QuoteConfig) -> ListModelsResponse {
    let sentinel: Option<ModelLabel> = config.sentinel();
    ListModelsResponse {
        models: snapshot.index().list_labels(sentinel.as_ref()),
        catalog_version: snapshot.version(),
    }
}

/// Parses the submitted amounts for every input component of the layout.
///
/// Keys that are not part of the layout are ignored. A blank optional field
/// counts as absent.
fn parse_inputs(
    layout: &BreakdownLayout,
    raw: &BTreeMap<String, String>,
) -> Result<BTreeMap<String, Decimal>, ApiError> {
    for key in raw.keys() {
        if !layout.components().iter().any(|c| &c.label == key) {
            debug!(field = %key, "Ignoring unknown cost field");
        }
    }

    let mut inputs: BTreeMap<String, Decimal> = BTreeMap::new();
    for component in layout.input_components() {
        let BreakdownComponent {
            label, required, ..
        } = component;
        match raw.get(label) {
            Some(value) if !*required && value.trim().is_empty() => {}
            Some(value) => {
                let amount: Decimal = parse_amount(label, value).map_err(translate_domain_error)?;
                inputs.insert(label.clone(), amount);
            }
            None => {}
        }
    }
    Ok(inputs)
}

/// Computes a quote against one catalog snapshot.
///
/// `today` is the reference date for the vehicle age. The snapshot is used
/// for the whole computation, so a concurrent reload cannot mix catalogs.
///
/// # Errors
///
/// Returns an error if the date or an amount is invalid, a required amount
/// is missing, the model cannot be resolved, or the resolved model has no
/// fiscal value for the vehicle's age band.
pub fn calculate_quote(
    snapshot: &CatalogSnapshot,
    config: &QuoteConfig,
    request: &QuoteRequest,
    today: Date,
) -> Result<QuoteResponse, ApiError> {
    let registration: Date =
        parse_registration_date(&request.registration_date).map_err(translate_domain_error)?;
    let age: AgeYears = AgeYears::between(registration, today).map_err(translate_domain_error)?;

    let layout: &BreakdownLayout = &config.components;
    let inputs: BTreeMap<String, Decimal> = parse_inputs(layout, &request.costs)?;

    let origin_label: &str = layout.origin_price_label();
    let origin_price: Decimal = inputs.get(origin_label).copied().ok_or_else(|| {
        translate_domain_error(DomainError::MissingCostComponent {
            label: origin_label.to_string(),
        })
    })?;

    let sentinel: Option<ModelLabel> = config.sentinel();
    let selection: ModelSelection = ModelSelection::from_label(&request.model, sentinel.as_ref());

    let fiscal_base_value: Decimal = match &selection {
        ModelSelection::NotInCatalog => {
            resolve_base_value(ValuationSource::NotInCatalog, age, origin_price)
        }
        ModelSelection::Catalog(label) => {
            let record: &CatalogRecord = snapshot
                .index()
                .resolve(label)
                .map_err(translate_domain_error)?;
            resolve_base_value(ValuationSource::Record(record), age, origin_price)
        }
    }
    .map_err(translate_domain_error)?;

    let registration_tax: Decimal =
        compute_tax(fiscal_base_value).map_err(translate_domain_error)?;
    let breakdown: CostBreakdown =
        build_breakdown(layout, &inputs, registration_tax).map_err(translate_domain_error)?;

    info!(
        model = %request.model,
        not_in_catalog = selection.is_not_in_catalog(),
        age = age.years(),
        band = %age.band(),
        base = %fiscal_base_value,
        customer_total = %breakdown.customer_total(),
        catalog_version = snapshot.version(),
        "Computed quote"
    );

    Ok(QuoteResponse {
        model: request.model.clone(),
        not_in_catalog: selection.is_not_in_catalog(),
        age_years: age.years(),
        age_band: age.band().value(),
        fiscal_base_value,
        registration_tax,
        catalog_version: snapshot.version(),
        breakdown,
    })
}

/// Re-reads the catalog source and reports the new snapshot.
///
/// # Errors
///
/// Returns `ServiceUnavailable` if the source cannot be read; the previous
/// snapshot stays active.
pub fn reload_catalog(store: &CatalogStore) -> Result<ReloadResponse, ApiError> {
    let snapshot: Arc<CatalogSnapshot> = store.reload()?;
    Ok(ReloadResponse {
        version: snapshot.version(),
        records: snapshot.index().len(),
        source: store.describe(),
    })
}
