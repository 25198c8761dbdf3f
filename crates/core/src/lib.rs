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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod config;
mod coupon;
mod error;
mod flow;
mod host;
mod messages;
mod state;
mod submission;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use config::BookingConfig;
pub use coupon::{CouponLookup, CouponVerdict, INVALID_COUPON_MESSAGE, StaticCouponTable};
pub use error::FlowError;
pub use flow::{BookingFlow, Completion};
pub use host::{FormHost, NoticeTone, SubmitControl, SummaryField};
pub use messages::{
    COUPON_EMPTY_MESSAGE, COUPON_TIMEOUT_MESSAGE, SUBMISSION_ERROR_MESSAGE, SUBMIT_BUSY_LABEL,
    SUBMIT_READY_LABEL, coupon_applied_message,
};
pub use state::{BookingState, FlowPhase};
pub use submission::{BookingSnapshot, SubmissionError, SubmissionService};
