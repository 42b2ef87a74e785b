// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Date;

/// Errors that can occur while valuing a vehicle or aggregating its costs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The catalog source could not be read or its header is malformed.
    CatalogUnavailable {
        /// Description of the underlying failure.
        reason: String,
    },
    /// No catalog row matches the leading model name of a label.
    ModelNotFound {
        /// The trimmed model name that was looked up.
        model: String,
    },
    /// A resolved catalog row has no fiscal value for the requested age band.
    MissingAgeColumn {
        /// The model whose row is incomplete.
        model: String,
        /// The clamped age band that was requested.
        age: u8,
    },
    /// A monetary input is not a number or is negative.
    InvalidNumericInput {
        /// The label of the offending input.
        field: String,
        /// Description of the problem.
        reason: String,
    },
    /// A catalog model name is empty.
    InvalidModelName(String),
    /// An age band outside `0..=12`.
    InvalidAgeBand(u32),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// The first registration date lies after the reference date.
    RegistrationDateInFuture {
        /// The registration date supplied.
        registration: Date,
        /// The reference date used as "today".
        today: Date,
    },
    /// A required cost component was not supplied.
    MissingCostComponent {
        /// The label of the missing component.
        label: String,
    },
    /// The configured component layout violates its structural rules.
    InvalidBreakdownLayout(String),
    /// A breakdown handed back for export does not end with the two totals.
    MalformedBreakdown(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CatalogUnavailable { reason } => write!(f, "Catalog unavailable: {reason}"),
            Self::ModelNotFound { model } => write!(f, "Model '{model}' not found in catalog"),
            Self::MissingAgeColumn { model, age } => {
                write!(f, "Model '{model}' has no fiscal value for age {age}")
            }
            Self::InvalidNumericInput { field, reason } => {
                write!(f, "Invalid amount for '{field}': {reason}")
            }
            Self::InvalidModelName(msg) => write!(f, "Invalid model name: {msg}"),
            Self::InvalidAgeBand(age) => {
                write!(f, "Invalid age band: {age}. Must be between 0 and 12")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::RegistrationDateInFuture {
                registration,
                today,
            } => {
                write!(
                    f,
                    "Registration date {registration} is after the reference date {today}"
                )
            }
            Self::MissingCostComponent { label } => {
                write!(f, "Missing required cost component '{label}'")
            }
            Self::InvalidBreakdownLayout(msg) => write!(f, "Invalid breakdown layout: {msg}"),
            Self::MalformedBreakdown(msg) => write!(f, "Malformed breakdown: {msg}"),
        }
    }
}

impl std::error::Error for DomainError {}
