// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DomainError, GuestCount, format_display_date, format_guests, format_input_date,
    format_nights, parse_input_date,
};
use time::macros::date;

#[test]
fn test_parse_input_date_accepts_iso_dates() {
    assert_eq!(
        parse_input_date("2026-11-03").unwrap(),
        Some(date!(2026 - 11 - 03))
    );
}

#[test]
fn test_parse_input_date_treats_blank_as_unset() {
    assert_eq!(parse_input_date("").unwrap(), None);
    assert_eq!(parse_input_date("   ").unwrap(), None);
}

#[test]
fn test_parse_input_date_rejects_other_formats() {
    assert!(matches!(
        parse_input_date("11/03/2026"),
        Err(DomainError::DateParseError { .. })
    ));
}

#[test]
fn test_format_input_date_pads() {
    assert_eq!(format_input_date(date!(2026 - 01 - 05)), "2026-01-05");
}

#[test]
fn test_format_display_date_includes_weekday() {
    // 2026-11-03 is a Tuesday.
    assert_eq!(
        format_display_date(Some(date!(2026 - 11 - 03))),
        "2026年11月3日(火)"
    );
    // 2026-11-08 is a Sunday.
    assert_eq!(
        format_display_date(Some(date!(2026 - 11 - 08))),
        "2026年11月8日(日)"
    );
    assert_eq!(format_display_date(None), "—");
}

#[test]
fn test_format_nights_and_guests() {
    assert_eq!(format_nights(0), "—泊");
    assert_eq!(format_nights(3), "3泊");
    assert_eq!(format_guests(GuestCount::new(2).unwrap()), "2名");
}
