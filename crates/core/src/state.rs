// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::submission::BookingSnapshot;
use time::Date;
use yado_domain::{
    GuestCount, GuestInfo, PriceSummary, RateCard, Step, Yen, compute_summary, nights_between,
};

/// Where a booking flow is in its lifecycle.
///
/// Valid transitions are:
/// - `Step(n)` → `Step(n + 1)` after validation
/// - `Step(n)` → `Step(m)` for any `m < n`
/// - `Step(Payment)` or `Failed` → `Submitting`
/// - `Submitting` → `Completed` or `Failed`
/// - `Failed` → `Step(m)` for any `m < Payment`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowPhase {
    /// Editing one of the steps.
    Step(Step),
    /// Waiting for the submission service.
    Submitting,
    /// The booking was placed.
    Completed,
    /// The last submission failed; the payment step is shown again.
    Failed {
        /// Reason reported by the submission service.
        reason: String,
    },
}

impl FlowPhase {
    /// Returns the step shown to the guest in this phase.
    #[must_use]
    pub const fn step(&self) -> Step {
        match self {
            Self::Step(step) => *step,
            Self::Submitting | Self::Completed | Self::Failed { .. } => Step::Payment,
        }
    }

    /// Returns whether edits and step changes are refused in this phase.
    #[must_use]
    pub const fn is_locked(&self) -> bool {
        matches!(self, Self::Submitting | Self::Completed)
    }

    /// Returns the phase name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Step(_) => "editing",
            Self::Submitting => "submitting",
            Self::Completed => "completed",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Primary and derived booking data for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingState {
    /// Lifecycle phase, including the current step.
    pub phase: FlowPhase,
    /// Check-in date.
    pub checkin: Option<Date>,
    /// Check-out date.
    pub checkout: Option<Date>,
    /// Number of guests.
    pub guests: GuestCount,
    /// Guest details, set once the second step validates.
    pub guest_info: Option<GuestInfo>,
    /// Applied coupon code.
    pub coupon_code: Option<String>,
    /// Discount granted by the applied coupon.
    pub discount: Yen,
    /// Derived pricing.
    pub summary: PriceSummary,
}

impl BookingState {
    /// Creates the state of a fresh session on the first step.
    #[must_use]
    pub fn new(guests: GuestCount) -> Self {
        Self {
            phase: FlowPhase::Step(Step::Dates),
            checkin: None,
            checkout: None,
            guests,
            guest_info: None,
            coupon_code: None,
            discount: Yen::ZERO,
            summary: PriceSummary::default(),
        }
    }

    /// Returns the step shown to the guest.
    #[must_use]
    pub const fn current_step(&self) -> Step {
        self.phase.step()
    }

    /// Computes the derived summary from the primary fields.
    ///
    /// This does not modify the state.
    #[must_use]
    pub fn derive_summary(&self, rates: &RateCard) -> PriceSummary {
        compute_summary(
            rates,
            nights_between(self.checkin, self.checkout),
            self.discount,
        )
    }

    /// Captures the data handed to a submission service.
    #[must_use]
    pub fn snapshot(&self) -> BookingSnapshot {
        BookingSnapshot {
            checkin: self.checkin,
            checkout: self.checkout,
            guests: self.guests,
            guest_info: self.guest_info.clone(),
            coupon_code: self.coupon_code.clone(),
            summary: self.summary,
        }
    }
}
