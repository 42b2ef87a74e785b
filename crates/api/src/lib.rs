// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod config;
mod error;
mod export;
mod handlers;
mod request_response;

#[cfg(test)]
mod tests;

pub use config::QuoteConfig;
pub use error::{ApiError, translate_domain_error};
pub use export::{EXPORT_FILE_NAME, EXPORT_HEADERS, export_breakdown, write_breakdown_csv};
pub use handlers::{calculate_quote, list_models, reload_catalog};
pub use request_response::{
    ExportRequest, ListModelsResponse, QuoteRequest, QuoteResponse, ReloadResponse,
};
