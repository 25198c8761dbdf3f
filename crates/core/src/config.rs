// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::FlowError;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use yado_domain::{GuestCount, RateCard, Yen};

/// Tunables for a booking flow.
///
/// Every field has a default, so a partial JSON document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingConfig {
    /// Price per night.
    pub nightly_rate: Yen,
    /// Tax rate in basis points (1000 = 10%).
    pub tax_rate_basis_points: u32,
    /// Guest count preselected on the form.
    pub default_guests: u8,
    /// Where the host navigates after a successful submission.
    pub confirmation_path: String,
    /// Upper bound for a coupon lookup, in milliseconds.
    pub lookup_timeout_ms: Option<u64>,
    /// Upper bound for a submission, in milliseconds.
    pub submit_timeout_ms: Option<u64>,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            nightly_rate: Yen::new(35_000),
            tax_rate_basis_points: 1_000,
            default_guests: 2,
            confirmation_path: String::from("processing.html"),
            lookup_timeout_ms: None,
            submit_timeout_ms: None,
        }
    }
}

impl BookingConfig {
    /// Checks that the configuration can drive a flow.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidConfig` if the nightly rate is negative,
    /// the default guest count is zero, or the confirmation path is empty.
    pub fn validate(&self) -> Result<(), FlowError> {
        self.rate_card()?;
        self.default_guest_count()?;

        if self.confirmation_path.trim().is_empty() {
            return Err(FlowError::InvalidConfig {
                reason: String::from("confirmation path must not be empty"),
            });
        }

        Ok(())
    }

    /// Builds the rate card described by this config.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidConfig` if the nightly rate is negative.
    pub fn rate_card(&self) -> Result<RateCard, FlowError> {
        RateCard::new(self.nightly_rate, self.tax_rate_basis_points).map_err(|e| {
            FlowError::InvalidConfig {
                reason: e.to_string(),
            }
        })
    }

    /// Returns the preselected guest count.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidConfig` if the configured count is zero.
    pub fn default_guest_count(&self) -> Result<GuestCount, FlowError> {
        GuestCount::new(self.default_guests).map_err(|e| FlowError::InvalidConfig {
            reason: e.to_string(),
        })
    }

    /// Returns the coupon lookup timeout, if any.
    #[must_use]
    pub fn lookup_timeout(&self) -> Option<Duration> {
        self.lookup_timeout_ms.map(Duration::from_millis)
    }

    /// Returns the submission timeout, if any.
    #[must_use]
    pub fn submit_timeout(&self) -> Option<Duration> {
        self.submit_timeout_ms.map(Duration::from_millis)
    }
}
