// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use time::Date;
use yado_domain::{GuestCount, GuestInfo, PriceSummary};

/// Everything a submission service needs to place a booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSnapshot {
    /// Check-in date.
    pub checkin: Option<Date>,
    /// Check-out date.
    pub checkout: Option<Date>,
    /// Number of guests.
    pub guests: GuestCount,
    /// Guest details captured on the second step.
    pub guest_info: Option<GuestInfo>,
    /// Applied coupon code.
    pub coupon_code: Option<String>,
    /// Derived pricing.
    pub summary: PriceSummary,
}

/// Failure reported by a submission service.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct SubmissionError {
    /// Why the submission failed.
    pub reason: String,
}

impl SubmissionError {
    /// Creates a new error.
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Places a booking once the form is complete.
#[async_trait(?Send)]
pub trait SubmissionService {
    /// Submits `booking`.
    ///
    /// # Errors
    ///
    /// Returns a `SubmissionError` if the booking could not be placed.
    async fn submit(&self, booking: &BookingSnapshot) -> Result<(), SubmissionError>;
}
