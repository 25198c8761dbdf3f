// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{DateField, FieldRef, GuestField, GuestInfo};
use serde::{Deserialize, Serialize};
use time::Date;

/// The kind of problem found on a form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueKind {
    /// A required value is absent or blank.
    MissingField,
    /// Check-out is not after check-in.
    InvalidRange,
    /// A value is present but malformed.
    InvalidFormat,
    /// The terms were not accepted.
    MissingAcknowledgment,
}

/// A validation failure attached to a single form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// The control the issue belongs to.
    pub field: FieldRef,
    /// What is wrong with it.
    pub kind: IssueKind,
}

impl ValidationIssue {
    /// Creates a new issue.
    #[must_use]
    pub const fn new(field: FieldRef, kind: IssueKind) -> Self {
        Self { field, kind }
    }

    /// Returns the message shown next to the control.
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match (self.field, self.kind) {
            (FieldRef::Date(DateField::Checkin), IssueKind::MissingField) => {
                "チェックイン日を選択してください"
            }
            (FieldRef::Date(DateField::Checkout), IssueKind::MissingField) => {
                "チェックアウト日を選択してください"
            }
            (_, IssueKind::InvalidRange) => "チェックアウト日はチェックイン日より後にしてください",
            (_, IssueKind::InvalidFormat) => "有効なメールアドレスを入力してください",
            (_, IssueKind::MissingAcknowledgment) => "利用規約に同意してください",
            (_, IssueKind::MissingField) => "この項目は必須です",
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} on '{}': {}",
            self.kind,
            self.field.element_id(),
            self.message()
        )
    }
}

/// Validates the date selection step.
///
/// Checks run in order and the first failure wins:
/// 1. check-in must be set
/// 2. check-out must be set
/// 3. check-out must be strictly after check-in
///
/// # Errors
///
/// Returns the first failing issue.
pub fn validate_stay_dates(
    checkin: Option<Date>,
    checkout: Option<Date>,
) -> Result<(), ValidationIssue> {
    let Some(checkin) = checkin else {
        return Err(ValidationIssue::new(
            FieldRef::Date(DateField::Checkin),
            IssueKind::MissingField,
        ));
    };
    let Some(checkout) = checkout else {
        return Err(ValidationIssue::new(
            FieldRef::Date(DateField::Checkout),
            IssueKind::MissingField,
        ));
    };

    if checkout <= checkin {
        return Err(ValidationIssue::new(
            FieldRef::Date(DateField::Checkout),
            IssueKind::InvalidRange,
        ));
    }

    Ok(())
}

/// Validates a single guest field in isolation.
///
/// # Errors
///
/// Returns `MissingField` for a blank required field and `InvalidFormat`
/// for a malformed email address.
pub fn validate_guest_field(field: GuestField, value: &str) -> Result<(), ValidationIssue> {
    let trimmed: &str = value.trim();

    if field.is_required() && trimmed.is_empty() {
        return Err(ValidationIssue::new(
            FieldRef::Guest(field),
            IssueKind::MissingField,
        ));
    }

    if field == GuestField::Email && !trimmed.is_empty() && !is_valid_email(value) {
        return Err(ValidationIssue::new(
            FieldRef::Guest(field),
            IssueKind::InvalidFormat,
        ));
    }

    Ok(())
}

/// Validates every guest field.
///
/// Unlike the other steps, all failing fields are reported.
///
/// # Errors
///
/// Returns one issue per failing field, in form order.
pub fn validate_guest_info(info: &GuestInfo) -> Result<(), Vec<ValidationIssue>> {
    let issues: Vec<ValidationIssue> = GuestField::ALL
        .iter()
        .filter_map(|&field| validate_guest_field(field, info.value(field)).err())
        .collect();

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

/// Validates the payment step.
///
/// # Errors
///
/// Returns `MissingAcknowledgment` if the terms were not accepted.
pub const fn validate_terms(accepted: bool) -> Result<(), ValidationIssue> {
    if accepted {
        Ok(())
    } else {
        Err(ValidationIssue::new(
            FieldRef::Terms,
            IssueKind::MissingAcknowledgment,
        ))
    }
}

/// Checks for a `local@domain.tld` shaped address.
///
/// Neither part may contain whitespace or a second `@`, and the domain must
/// contain a dot with at least one character on each side.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    let is_clean = |part: &str| !part.is_empty() && !part.contains(|c: char| c == '@' || c.is_whitespace());
    if !is_clean(local) || !is_clean(domain) {
        return false;
    }

    domain
        .char_indices()
        .any(|(index, c)| c == '.' && index > 0 && index + 1 < domain.len())
}
