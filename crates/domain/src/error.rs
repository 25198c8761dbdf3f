// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur while constructing domain values.
///
/// Validation failures of the booking form itself are not errors in this
/// sense; they are reported as [`crate::ValidationIssue`] values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Guest count must be a positive integer.
    #[error("Invalid guest count: {count}. Must be at least 1")]
    InvalidGuestCount {
        /// The rejected count.
        count: u8,
    },
    /// Step number outside of the booking sequence.
    #[error("Invalid step: {number}. Must be between 1 and {max}")]
    InvalidStep {
        /// The rejected step number.
        number: u8,
        /// The number of steps in the sequence.
        max: u8,
    },
    /// The rate card cannot be used for pricing.
    #[error("Invalid rate card: {reason}")]
    InvalidRateCard {
        /// Description of the problem.
        reason: String,
    },
    /// Failed to parse a date input value.
    #[error("Failed to parse date '{date_string}': {error}")]
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
}
