// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// One screen of the booking sequence.
///
/// Steps are strictly ordered: dates, then guest details, then payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Step {
    /// Check-in / check-out selection.
    Dates,
    /// Guest contact details.
    GuestDetails,
    /// Payment and terms acceptance.
    Payment,
}

impl Step {
    /// Number of steps in the booking sequence.
    pub const TOTAL: u8 = 3;

    /// Creates a step from its 1-based number.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStep` if `number` is not between 1 and 3.
    pub const fn from_number(number: u8) -> Result<Self, DomainError> {
        match number {
            1 => Ok(Self::Dates),
            2 => Ok(Self::GuestDetails),
            3 => Ok(Self::Payment),
            _ => Err(DomainError::InvalidStep {
                number,
                max: Self::TOTAL,
            }),
        }
    }

    /// Returns the 1-based step number.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Dates => 1,
            Self::GuestDetails => 2,
            Self::Payment => 3,
        }
    }

    /// Returns the step that follows this one, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Dates => Some(Self::GuestDetails),
            Self::GuestDetails => Some(Self::Payment),
            Self::Payment => None,
        }
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "step {}", self.number())
    }
}

/// An amount of Japanese yen.
///
/// JPY has no minor unit, so amounts are whole integers.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Yen(i64);

impl Yen {
    /// Zero yen.
    pub const ZERO: Self = Self(0);

    /// Creates a new amount.
    #[must_use]
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// Returns the raw amount.
    #[must_use]
    pub const fn amount(self) -> i64 {
        self.0
    }
}

/// Formats as `¥105,000`, or `-¥5,000` for negative amounts.
impl std::fmt::Display for Yen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let digits: String = self.0.unsigned_abs().to_string();
        let mut grouped: String = String::with_capacity(digits.len() + digits.len() / 3);
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        if self.0 < 0 {
            write!(f, "-¥{grouped}")
        } else {
            write!(f, "¥{grouped}")
        }
    }
}

/// Number of guests staying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GuestCount(u8);

impl GuestCount {
    /// Creates a new `GuestCount`.
    ///
    /// # Arguments
    ///
    /// * `count` - The number of guests (must be at least 1)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidGuestCount` if `count` is zero.
    pub const fn new(count: u8) -> Result<Self, DomainError> {
        if count >= 1 {
            Ok(Self(count))
        } else {
            Err(DomainError::InvalidGuestCount { count })
        }
    }

    /// Returns the number of guests.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Default for GuestCount {
    fn default() -> Self {
        Self(2)
    }
}

impl TryFrom<u8> for GuestCount {
    type Error = DomainError;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<GuestCount> for u8 {
    fn from(count: GuestCount) -> Self {
        count.0
    }
}

/// An input on the guest details form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuestField {
    /// Family name.
    LastName,
    /// Given name.
    FirstName,
    /// Family name in katakana.
    LastNameKana,
    /// Given name in katakana.
    FirstNameKana,
    /// Contact email address.
    Email,
    /// Contact phone number.
    Phone,
    /// Free-form special requests.
    Requests,
}

impl GuestField {
    /// Every guest field, in form order.
    pub const ALL: [Self; 7] = [
        Self::LastName,
        Self::FirstName,
        Self::LastNameKana,
        Self::FirstNameKana,
        Self::Email,
        Self::Phone,
        Self::Requests,
    ];

    /// Returns whether the field must be filled in.
    #[must_use]
    pub const fn is_required(self) -> bool {
        !matches!(self, Self::Requests)
    }

    /// Returns the host element identifier for this field.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::LastName => "guest-lastname",
            Self::FirstName => "guest-firstname",
            Self::LastNameKana => "guest-lastname-kana",
            Self::FirstNameKana => "guest-firstname-kana",
            Self::Email => "guest-email",
            Self::Phone => "guest-phone",
            Self::Requests => "guest-requests",
        }
    }
}

/// A date input on the first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateField {
    /// Check-in date.
    Checkin,
    /// Check-out date.
    Checkout,
}

impl DateField {
    /// Returns the host element identifier for this field.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Checkin => "checkin-date",
            Self::Checkout => "checkout-date",
        }
    }
}

/// Any form control a validation message can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldRef {
    /// A date input.
    Date(DateField),
    /// A guest details input.
    Guest(GuestField),
    /// The terms acceptance checkbox.
    Terms,
}

impl FieldRef {
    /// Returns the host element identifier for this control.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Date(field) => field.element_id(),
            Self::Guest(field) => field.element_id(),
            Self::Terms => "terms-agree",
        }
    }
}

/// Guest contact details as entered on the second step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestInfo {
    /// Family name.
    pub last_name: String,
    /// Given name.
    pub first_name: String,
    /// Family name in katakana.
    pub last_name_kana: String,
    /// Given name in katakana.
    pub first_name_kana: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Free-form special requests.
    pub requests: String,
}

impl GuestInfo {
    /// Builds guest details by reading each field from `read`.
    pub fn from_fields(mut read: impl FnMut(GuestField) -> String) -> Self {
        Self {
            last_name: read(GuestField::LastName),
            first_name: read(GuestField::FirstName),
            last_name_kana: read(GuestField::LastNameKana),
            first_name_kana: read(GuestField::FirstNameKana),
            email: read(GuestField::Email),
            phone: read(GuestField::Phone),
            requests: read(GuestField::Requests),
        }
    }

    /// Returns the raw value of `field`.
    #[must_use]
    pub fn value(&self, field: GuestField) -> &str {
        match field {
            GuestField::LastName => &self.last_name,
            GuestField::FirstName => &self.first_name,
            GuestField::LastNameKana => &self.last_name_kana,
            GuestField::FirstNameKana => &self.first_name_kana,
            GuestField::Email => &self.email,
            GuestField::Phone => &self.phone,
            GuestField::Requests => &self.requests,
        }
    }
}
