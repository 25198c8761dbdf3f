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

mod display;
mod error;
mod pricing;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use display::{
    PLACEHOLDER, format_display_date, format_guests, format_input_date, format_nights,
    parse_input_date,
};
pub use error::DomainError;
pub use pricing::{PriceSummary, RateCard, compute_summary, nights_between};

// Re-export public types
pub use types::{DateField, FieldRef, GuestCount, GuestField, GuestInfo, Step, Yen};
pub use validation::{
    IssueKind, ValidationIssue, is_valid_email, validate_guest_field, validate_guest_info,
    validate_stay_dates, validate_terms,
};
