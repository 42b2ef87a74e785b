// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use import_cost_catalog::CatalogError;
use import_cost_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The catalog could not be read.
    ServiceUnavailable {
        /// A description of the failure.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::ServiceUnavailable { message } => {
                write!(f, "Service unavailable: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        translate_domain_error(err.into())
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::CatalogUnavailable { reason } => ApiError::ServiceUnavailable {
            message: format!("Catalog unavailable: {reason}"),
        },
        DomainError::ModelNotFound { model } => ApiError::ResourceNotFound {
            resource_type: String::from("Model"),
            message: format!("Model '{model}' does not exist in the catalog"),
        },
        DomainError::MissingAgeColumn { model, age } => ApiError::DomainRuleViolation {
            rule: String::from("fiscal_value_for_age"),
            message: format!("Model '{model}' has no fiscal value for age {age}"),
        },
        DomainError::InvalidNumericInput { field, reason } => ApiError::InvalidInput {
            field,
            message: reason,
        },
        DomainError::InvalidModelName(msg) => ApiError::InvalidInput {
            field: String::from("model"),
            message: msg,
        },
        DomainError::InvalidAgeBand(age) => ApiError::InvalidInput {
            field: String::from("age_band"),
            message: format!("{age} is outside 0..=12"),
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("registration_date"),
            message: format!("'{date_string}' is not a YYYY-MM-DD date: {error}"),
        },
        DomainError::RegistrationDateInFuture {
            registration,
            today,
        } => ApiError::InvalidInput {
            field: String::from("registration_date"),
            message: format!("{registration} is after today ({today})"),
        },
        DomainError::MissingCostComponent { label } => ApiError::InvalidInput {
            field: label,
            message: String::from("a value is required"),
        },
        DomainError::MalformedBreakdown(msg) => ApiError::InvalidInput {
            field: String::from("breakdown"),
            message: msg,
        },
        DomainError::InvalidBreakdownLayout(msg) => ApiError::Internal {
            message: format!("Configured breakdown layout is invalid: {msg}"),
        },
    }
}
