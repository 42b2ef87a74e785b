// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Configurable set and order of itemized cost components.

use crate::breakdown::{CUSTOMER_TOTAL_LABEL, CostBreakdown, CostLine, IMPORT_COSTS_TOTAL_LABEL};
use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Label of the origin price component in the default layouts.
pub const ORIGIN_PRICE_LABEL: &str = "PRECIO EN ORIGEN";

/// Label of the registration tax component in the default layouts.
pub const REGISTRATION_TAX_LABEL: &str = "IMPUESTO DE MATRICULACIÓN";

/// The role a component plays in the breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    /// The purchase price in the origin market. Always first.
    OriginPrice,
    /// Slot filled with the computed registration tax.
    RegistrationTax,
    /// Any other user-supplied cost.
    #[default]
    Cost,
}

const fn default_required() -> bool {
    true
}

/// One entry of the breakdown layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownComponent {
    /// The label shown in the breakdown and used as the input key.
    pub label: String,
    /// The role of the component.
    #[serde(default)]
    pub kind: ComponentKind,
    /// Whether the caller must supply a value. Optional costs default to zero.
    #[serde(default = "default_required")]
    pub required: bool,
}

impl BreakdownComponent {
    /// Creates a required cost component.
    #[must_use]
    pub fn cost(label: &str) -> Self {
        Self {
            label: label.to_string(),
            kind: ComponentKind::Cost,
            required: true,
        }
    }

    /// Creates the origin price component.
    #[must_use]
    pub fn origin_price(label: &str) -> Self {
        Self {
            label: label.to_string(),
            kind: ComponentKind::OriginPrice,
            required: true,
        }
    }

    /// Creates the registration tax slot.
    #[must_use]
    pub fn registration_tax(label: &str) -> Self {
        Self {
            label: label.to_string(),
            kind: ComponentKind::RegistrationTax,
            required: true,
        }
    }
}

/// Ordered list of breakdown components.
///
/// Structural rules:
/// - exactly one origin price component, in first position
/// - exactly one registration tax slot
/// - labels are non-empty, unique and distinct from the total labels
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BreakdownComponent>", into = "Vec<BreakdownComponent>")]
pub struct BreakdownLayout {
    components: Vec<BreakdownComponent>,
}

impl BreakdownLayout {
    /// Creates a layout after checking its structural rules.
    ///
    /// Labels are stored trimmed, so they match trimmed input keys.
    ///
    /// # Errors
    ///
    /// Returns `InvalidBreakdownLayout` describing the first violated rule.
    pub fn new(components: Vec<BreakdownComponent>) -> Result<Self, DomainError> {
        let components: Vec<BreakdownComponent> = components
            .into_iter()
            .map(|component| BreakdownComponent {
                label: component.label.trim().to_string(),
                ..component
            })
            .collect();

        match components.first() {
            Some(first) if first.kind == ComponentKind::OriginPrice => {}
            _ => {
                return Err(DomainError::InvalidBreakdownLayout(String::from(
                    "the first component must be the origin price",
                )));
            }
        }

        let count_of = |kind: ComponentKind| components.iter().filter(|c| c.kind == kind).count();
        if count_of(ComponentKind::OriginPrice) != 1 {
            return Err(DomainError::InvalidBreakdownLayout(String::from(
                "exactly one origin price component is allowed",
            )));
        }
        if count_of(ComponentKind::RegistrationTax) != 1 {
            return Err(DomainError::InvalidBreakdownLayout(String::from(
                "exactly one registration tax component is required",
            )));
        }

        let mut seen: HashSet<&str> = HashSet::new();
        for component in &components {
            let label: &str = &component.label;
            if label.is_empty() {
                return Err(DomainError::InvalidBreakdownLayout(String::from(
                    "component labels cannot be empty",
                )));
            }
            if label == IMPORT_COSTS_TOTAL_LABEL || label == CUSTOMER_TOTAL_LABEL {
                return Err(DomainError::InvalidBreakdownLayout(format!(
                    "'{label}' is reserved for a computed total"
                )));
            }
            if !seen.insert(label) {
                return Err(DomainError::InvalidBreakdownLayout(format!(
                    "duplicate component label '{label}'"
                )));
            }
        }

        Ok(Self { components })
    }

    /// The full layout: origin price, four origin-side costs, the tax slot and
    /// three destination-side costs.
    #[must_use]
    pub fn full() -> Self {
        Self {
            components: vec![
                BreakdownComponent::origin_price(ORIGIN_PRICE_LABEL),
                BreakdownComponent::cost("COSTE DE GESTIÓN EN ORIGEN"),
                BreakdownComponent::cost("COSTE DE REVISIÓN EN ORIGEN"),
                BreakdownComponent::cost("COSTE DE TRANSPORTE"),
                BreakdownComponent::cost("OTROS COSTES EN ORIGEN"),
                BreakdownComponent::registration_tax(REGISTRATION_TAX_LABEL),
                BreakdownComponent::cost("PROCESO DE MATRICULACIÓN"),
                BreakdownComponent::cost("REVISION POST COMPRA"),
                BreakdownComponent::cost("HONORARIOS DE GESTIÓN"),
            ],
        }
    }

    /// The minimal layout: origin price and registration tax only.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            components: vec![
                BreakdownComponent::origin_price(ORIGIN_PRICE_LABEL),
                BreakdownComponent::registration_tax(REGISTRATION_TAX_LABEL),
            ],
        }
    }

    /// Returns the components in order.
    #[must_use]
    pub fn components(&self) -> &[BreakdownComponent] {
        &self.components
    }

    /// Returns the label of the origin price component.
    #[must_use]
    pub fn origin_price_label(&self) -> &str {
        // Validated at construction: the first component is the origin price.
        &self.components[0].label
    }

    /// Returns the components the caller supplies values for, tax slot excluded.
    pub fn input_components(&self) -> impl Iterator<Item = &BreakdownComponent> {
        self.components
            .iter()
            .filter(|c| c.kind != ComponentKind::RegistrationTax)
    }

    /// Lays out the inputs and the computed tax in component order.
    ///
    /// Inputs whose label is not part of the layout are ignored.
    ///
    /// # Errors
    ///
    /// Returns `MissingCostComponent` if a required input is absent.
    pub fn assemble(
        &self,
        inputs: &BTreeMap<String, Decimal>,
        tax_amount: Decimal,
    ) -> Result<Vec<CostLine>, DomainError> {
        self.components
            .iter()
            .map(|component| {
                let amount: Decimal = match component.kind {
                    ComponentKind::RegistrationTax => tax_amount,
                    ComponentKind::OriginPrice | ComponentKind::Cost => {
                        match inputs.get(&component.label) {
                            Some(amount) => *amount,
                            None if component.required => {
                                return Err(DomainError::MissingCostComponent {
                                    label: component.label.clone(),
                                });
                            }
                            None => Decimal::ZERO,
                        }
                    }
                };
                Ok(CostLine::new(&component.label, amount))
            })
            .collect()
    }
}

impl Default for BreakdownLayout {
    fn default() -> Self {
        Self::full()
    }
}

impl TryFrom<Vec<BreakdownComponent>> for BreakdownLayout {
    type Error = DomainError;

    fn try_from(components: Vec<BreakdownComponent>) -> Result<Self, Self::Error> {
        Self::new(components)
    }
}

impl From<BreakdownLayout> for Vec<BreakdownComponent> {
    fn from(layout: BreakdownLayout) -> Self {
        layout.components
    }
}

/// Builds the breakdown for the given inputs and computed tax, in layout order.
///
/// # Errors
///
/// Returns an error if a required input is missing or any amount is negative.
pub fn build_breakdown(
    layout: &BreakdownLayout,
    inputs: &BTreeMap<String, Decimal>,
    tax_amount: Decimal,
) -> Result<CostBreakdown, DomainError> {
    let itemized: Vec<CostLine> = layout.assemble(inputs, tax_amount)?;
    CostBreakdown::from_itemized(itemized)
}
