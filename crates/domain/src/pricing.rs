// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Stay length and price calculation.
//!
//! ## Invariants
//!
//! - Nights are counted in whole days and are never negative
//! - Taxes are rounded toward negative infinity
//! - `total = base_price - discount + taxes` whenever at least one night is booked
//! - With no nights booked every derived amount is zero
//!
//! Pricing is flat per night and does not depend on the guest count.

use crate::error::DomainError;
use crate::types::Yen;
use serde::{Deserialize, Serialize};
use time::Date;

const BASIS_POINTS_PER_UNIT: i64 = 10_000;

/// Nightly rate and tax rate used to price a stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateCard {
    nightly_rate: Yen,
    tax_rate_basis_points: u32,
}

impl RateCard {
    /// Creates a new `RateCard`.
    ///
    /// # Arguments
    ///
    /// * `nightly_rate` - Price per night
    /// * `tax_rate_basis_points` - Tax rate in basis points (1000 = 10%)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRateCard` if the nightly rate is negative.
    pub fn new(nightly_rate: Yen, tax_rate_basis_points: u32) -> Result<Self, DomainError> {
        if nightly_rate.amount() < 0 {
            return Err(DomainError::InvalidRateCard {
                reason: format!("nightly rate must not be negative, got {nightly_rate}"),
            });
        }
        Ok(Self {
            nightly_rate,
            tax_rate_basis_points,
        })
    }

    /// Returns the price per night.
    #[must_use]
    pub const fn nightly_rate(&self) -> Yen {
        self.nightly_rate
    }

    /// Returns the tax rate in basis points.
    #[must_use]
    pub const fn tax_rate_basis_points(&self) -> u32 {
        self.tax_rate_basis_points
    }
}

/// The derived pricing fields of a booking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceSummary {
    /// Number of nights booked.
    pub nights: u32,
    /// Nightly rate times nights.
    pub base_price: Yen,
    /// Coupon discount applied.
    pub discount: Yen,
    /// Taxes on the base price.
    pub taxes: Yen,
    /// Amount due.
    pub total: Yen,
}

/// Counts the nights between two optional dates.
///
/// Returns 0 when either date is missing or when `checkout` is not after
/// `checkin`.
#[must_use]
pub fn nights_between(checkin: Option<Date>, checkout: Option<Date>) -> u32 {
    let (Some(checkin), Some(checkout)) = (checkin, checkout) else {
        return 0;
    };

    // Calendar dates differ by whole days, so ceil is exact here.
    let days: i64 = (checkout - checkin).whole_days();
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}

/// Computes the price summary for a stay.
///
/// This function is pure: the same inputs always produce the same summary.
///
/// # Arguments
///
/// * `rates` - The nightly and tax rates
/// * `nights` - Number of nights booked
/// * `discount` - Coupon discount to subtract
#[must_use]
pub fn compute_summary(rates: &RateCard, nights: u32, discount: Yen) -> PriceSummary {
    if nights == 0 {
        return PriceSummary {
            nights: 0,
            base_price: Yen::ZERO,
            discount,
            taxes: Yen::ZERO,
            total: Yen::ZERO,
        };
    }

    let base: i64 = rates.nightly_rate.amount().saturating_mul(i64::from(nights));
    // Base is never negative, so integer division floors.
    let taxes: i64 =
        base.saturating_mul(i64::from(rates.tax_rate_basis_points)) / BASIS_POINTS_PER_UNIT;
    let total: i64 = base
        .saturating_sub(discount.amount())
        .saturating_add(taxes);

    PriceSummary {
        nights,
        base_price: Yen::new(base),
        discount,
        taxes: Yen::new(taxes),
        total: Yen::new(total),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use time::macros::date;

    fn reference_rates() -> RateCard {
        RateCard::new(Yen::new(35_000), 1_000).unwrap()
    }

    #[test]
    fn test_nights_between_missing_dates() {
        assert_eq!(nights_between(None, None), 0);
        assert_eq!(nights_between(Some(date!(2026 - 11 - 03)), None), 0);
        assert_eq!(nights_between(None, Some(date!(2026 - 11 - 03))), 0);
    }

    #[test]
    fn test_nights_between_valid_range() {
        assert_eq!(
            nights_between(Some(date!(2026 - 11 - 03)), Some(date!(2026 - 11 - 06))),
            3
        );
        assert_eq!(
            nights_between(Some(date!(2026 - 12 - 31)), Some(date!(2027 - 01 - 01))),
            1
        );
    }

    #[test]
    fn test_nights_between_reversed_range_is_zero() {
        assert_eq!(
            nights_between(Some(date!(2026 - 11 - 06)), Some(date!(2026 - 11 - 03))),
            0
        );
        assert_eq!(
            nights_between(Some(date!(2026 - 11 - 06)), Some(date!(2026 - 11 - 06))),
            0
        );
    }

    #[test]
    fn test_compute_summary_three_nights() {
        let summary: PriceSummary = compute_summary(&reference_rates(), 3, Yen::ZERO);
        assert_eq!(summary.base_price, Yen::new(105_000));
        assert_eq!(summary.taxes, Yen::new(10_500));
        assert_eq!(summary.total, Yen::new(115_500));
    }

    #[test]
    fn test_compute_summary_with_discount() {
        let summary: PriceSummary = compute_summary(&reference_rates(), 3, Yen::new(5_000));
        assert_eq!(summary.discount, Yen::new(5_000));
        assert_eq!(summary.total, Yen::new(110_500));
    }

    #[test]
    fn test_compute_summary_floors_taxes() {
        let rates: RateCard = RateCard::new(Yen::new(999), 1_000).unwrap();
        let summary: PriceSummary = compute_summary(&rates, 1, Yen::ZERO);
        assert_eq!(summary.taxes, Yen::new(99));
        assert_eq!(summary.total, Yen::new(1_098));
    }

    #[test]
    fn test_compute_summary_zero_nights_is_zero() {
        let summary: PriceSummary = compute_summary(&reference_rates(), 0, Yen::new(5_000));
        assert_eq!(summary.base_price, Yen::ZERO);
        assert_eq!(summary.taxes, Yen::ZERO);
        assert_eq!(summary.total, Yen::ZERO);
    }

    #[test]
    fn test_compute_summary_is_idempotent() {
        let first: PriceSummary = compute_summary(&reference_rates(), 4, Yen::new(2_000));
        let second: PriceSummary = compute_summary(&reference_rates(), 4, Yen::new(2_000));
        assert_eq!(first, second);
    }

    #[test]
    fn test_rate_card_rejects_negative_rate() {
        let result = RateCard::new(Yen::new(-1), 1_000);
        assert!(matches!(result, Err(DomainError::InvalidRateCard { .. })));
    }
}
