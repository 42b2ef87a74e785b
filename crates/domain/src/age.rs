// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vehicle age derivation.
//!
//! Age is a plain truncated division of elapsed days by 365. There is no
//! calendar-aware leap-year adjustment, so a vehicle can reach age N a few
//! days before its Nth registration anniversary.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;
use time::macros::format_description;

/// Days per year used by the age approximation.
pub const DAYS_PER_YEAR: i64 = 365;

/// Whole years since first registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgeYears(u32);

impl AgeYears {
    /// Creates an age from a whole number of years.
    #[must_use]
    pub const fn new(years: u32) -> Self {
        Self(years)
    }

    /// Computes the age of a vehicle registered on `registration` as seen on `today`.
    ///
    /// # Errors
    ///
    /// Returns an error if `registration` is after `today`.
    pub fn between(registration: Date, today: Date) -> Result<Self, DomainError> {
        let elapsed_days: i64 = (today - registration).whole_days();
        if elapsed_days < 0 {
            return Err(DomainError::RegistrationDateInFuture {
                registration,
                today,
            });
        }

        // Date spans are bounded well below u32::MAX years.
        let years: u32 = u32::try_from(elapsed_days / DAYS_PER_YEAR).unwrap_or(u32::MAX);
        Ok(Self(years))
    }

    /// Returns the number of whole years.
    #[must_use]
    pub const fn years(self) -> u32 {
        self.0
    }

    /// Returns the catalog age band for this age, clamped to [`AgeBand::MAX`].
    #[must_use]
    pub fn band(self) -> AgeBand {
        AgeBand(u8::try_from(self.0).map_or(AgeBand::MAX, |a| a.min(AgeBand::MAX)))
    }
}

impl std::fmt::Display for AgeYears {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog age column, `0..=12`. Band 12 covers every older vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgeBand(u8);

impl AgeBand {
    /// The oldest band stored in the catalog.
    pub const MAX: u8 = 12;

    /// Creates an age band.
    ///
    /// # Errors
    ///
    /// Returns an error if `age` is greater than [`AgeBand::MAX`].
    pub fn new(age: u32) -> Result<Self, DomainError> {
        u8::try_from(age)
            .ok()
            .filter(|a| *a <= Self::MAX)
            .map(Self)
            .ok_or(DomainError::InvalidAgeBand(age))
    }

    /// Returns the band value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns the catalog column header holding this band, e.g. `"3"`.
    #[must_use]
    pub fn column_name(self) -> String {
        self.0.to_string()
    }

    /// Iterates over every band from 0 to [`AgeBand::MAX`].
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=Self::MAX).map(Self)
    }
}

impl std::fmt::Display for AgeBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a first-registration date in `YYYY-MM-DD` form.
///
/// # Errors
///
/// Returns an error if the string is not a valid ISO calendar date.
pub fn parse_registration_date(date_string: &str) -> Result<Date, DomainError> {
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(date_string.trim(), format).map_err(|e| DomainError::DateParseError {
        date_string: date_string.to_string(),
        error: e.to_string(),
    })
}
