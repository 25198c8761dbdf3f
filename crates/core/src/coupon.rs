// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use yado_domain::Yen;

/// Message shown when a lookup rejects a code without giving a reason.
pub const INVALID_COUPON_MESSAGE: &str = "無効なクーポンコードです";

/// Answer of a coupon lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CouponVerdict {
    /// The code is valid and grants a flat discount.
    Accepted {
        /// Discount granted by the code.
        discount: Yen,
    },
    /// The code is not valid.
    Rejected {
        /// Optional explanation for the guest.
        message: Option<String>,
    },
}

/// Resolves coupon codes to discounts.
///
/// Codes are passed already trimmed and uppercased.
#[async_trait(?Send)]
pub trait CouponLookup {
    /// Looks up `code`.
    async fn lookup(&self, code: &str) -> CouponVerdict;
}

/// A fixed in-memory coupon table with simulated latency.
#[derive(Debug, Clone, Default)]
pub struct StaticCouponTable {
    coupons: HashMap<String, Yen>,
    latency: Duration,
}

impl StaticCouponTable {
    /// Creates an empty table that answers immediately.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo coupons offered on the booking page.
    #[must_use]
    pub fn reference() -> Self {
        Self::new()
            .with_coupon("WELCOME10", Yen::new(3_500))
            .with_coupon("KYOTO2024", Yen::new(5_000))
            .with_coupon("FIRST", Yen::new(2_000))
            .with_latency(Duration::from_millis(500))
    }

    /// Adds a code. Codes are stored uppercased.
    #[must_use]
    pub fn with_coupon(mut self, code: &str, discount: Yen) -> Self {
        self.coupons.insert(code.trim().to_uppercase(), discount);
        self
    }

    /// Sets how long every lookup takes.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

#[async_trait(?Send)]
impl CouponLookup for StaticCouponTable {
    async fn lookup(&self, code: &str) -> CouponVerdict {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        match self.coupons.get(code) {
            Some(&discount) => {
                debug!(code, discount = discount.amount(), "Coupon found");
                CouponVerdict::Accepted { discount }
            }
            None => {
                debug!(code, "Coupon not found");
                CouponVerdict::Rejected {
                    message: Some(String::from(INVALID_COUPON_MESSAGE)),
                }
            }
        }
    }
}
