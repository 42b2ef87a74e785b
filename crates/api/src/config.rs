// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Quote settings.

use import_cost_domain::{BreakdownLayout, ModelLabel, NOT_IN_CATALOG_LABEL};
use serde::Deserialize;

const fn default_include_sentinel() -> bool {
    true
}

fn default_sentinel_label() -> String {
    NOT_IN_CATALOG_LABEL.to_string()
}

/// Settings that shape how quotes are computed.
///
/// Every field has a default, so an empty configuration source is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuoteConfig {
    /// Whether the "not in catalog" entry is offered and honoured.
    #[serde(default = "default_include_sentinel")]
    pub include_sentinel: bool,
    /// Label of the "not in catalog" entry.
    #[serde(default = "default_sentinel_label")]
    pub sentinel_label: String,
    /// Itemized components in breakdown order.
    #[serde(default)]
    pub components: BreakdownLayout,
}

impl QuoteConfig {
    /// Returns the sentinel label when it is enabled.
    #[must_use]
    pub fn sentinel(&self) -> Option<ModelLabel> {
        self.include_sentinel
            .then(|| ModelLabel::new(&self.sentinel_label))
    }
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            include_sentinel: default_include_sentinel(),
            sentinel_label: default_sentinel_label(),
            components: BreakdownLayout::default(),
        }
    }
}
