// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Text formatting for the booking summary and date inputs.

use crate::error::DomainError;
use crate::types::GuestCount;
use time::Date;
use time::macros::format_description;

const WEEKDAYS: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

/// Placeholder shown for values that are not selected yet.
pub const PLACEHOLDER: &str = "—";

/// Parses a date input value.
///
/// An empty (or blank) value means the input is unset.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the value is not `YYYY-MM-DD`.
pub fn parse_input_date(value: &str) -> Result<Option<Date>, DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    Date::parse(trimmed, format_description!("[year]-[month]-[day]"))
        .map(Some)
        .map_err(|e| DomainError::DateParseError {
            date_string: value.to_string(),
            error: e.to_string(),
        })
}

/// Formats a date as a date input value, e.g. `2026-11-03`.
#[must_use]
pub fn format_input_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Formats a date for the summary, e.g. `2026年11月3日(火)`.
#[must_use]
pub fn format_display_date(date: Option<Date>) -> String {
    date.map_or_else(
        || PLACEHOLDER.to_string(),
        |d| {
            let weekday: &str = WEEKDAYS[usize::from(d.weekday().number_days_from_sunday())];
            format!(
                "{}年{}月{}日({weekday})",
                d.year(),
                u8::from(d.month()),
                d.day()
            )
        },
    )
}

/// Formats a night count, e.g. `3泊`, or `—泊` when no stay is selected.
#[must_use]
pub fn format_nights(nights: u32) -> String {
    if nights == 0 {
        format!("{PLACEHOLDER}泊")
    } else {
        format!("{nights}泊")
    }
}

/// Formats a guest count, e.g. `2名`.
#[must_use]
pub fn format_guests(guests: GuestCount) -> String {
    format!("{}名", guests.value())
}
