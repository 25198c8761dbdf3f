// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DateField, FieldRef, GuestField, GuestInfo, IssueKind, ValidationIssue, is_valid_email,
    validate_guest_field, validate_guest_info, validate_stay_dates, validate_terms,
};
use time::macros::date;

fn create_valid_guest_info() -> GuestInfo {
    GuestInfo {
        last_name: String::from("山田"),
        first_name: String::from("花子"),
        last_name_kana: String::from("ヤマダ"),
        first_name_kana: String::from("ハナコ"),
        email: String::from("hanako@example.jp"),
        phone: String::from("075-000-0000"),
        requests: String::new(),
    }
}

#[test]
fn test_validate_stay_dates_accepts_valid_range() {
    let result = validate_stay_dates(Some(date!(2026 - 11 - 03)), Some(date!(2026 - 11 - 04)));
    assert!(result.is_ok());
}

#[test]
fn test_validate_stay_dates_requires_checkin_first() {
    let result = validate_stay_dates(None, None);
    assert_eq!(
        result,
        Err(ValidationIssue::new(
            FieldRef::Date(DateField::Checkin),
            IssueKind::MissingField
        ))
    );

    let result = validate_stay_dates(None, Some(date!(2026 - 11 - 04)));
    assert_eq!(result.unwrap_err().field, FieldRef::Date(DateField::Checkin));
}

#[test]
fn test_validate_stay_dates_requires_checkout() {
    let result = validate_stay_dates(Some(date!(2026 - 11 - 03)), None);
    assert_eq!(
        result,
        Err(ValidationIssue::new(
            FieldRef::Date(DateField::Checkout),
            IssueKind::MissingField
        ))
    );
}

#[test]
fn test_validate_stay_dates_rejects_same_day() {
    let result = validate_stay_dates(Some(date!(2026 - 11 - 03)), Some(date!(2026 - 11 - 03)));
    assert_eq!(result.unwrap_err().kind, IssueKind::InvalidRange);
}

#[test]
fn test_validate_guest_info_accepts_complete_form() {
    assert!(validate_guest_info(&create_valid_guest_info()).is_ok());
}

#[test]
fn test_validate_guest_info_reports_every_missing_field() {
    let info: GuestInfo = GuestInfo {
        first_name: String::from("   "),
        phone: String::new(),
        ..create_valid_guest_info()
    };

    let issues: Vec<ValidationIssue> = validate_guest_info(&info).unwrap_err();
    assert_eq!(
        issues,
        vec![
            ValidationIssue::new(
                FieldRef::Guest(GuestField::FirstName),
                IssueKind::MissingField
            ),
            ValidationIssue::new(FieldRef::Guest(GuestField::Phone), IssueKind::MissingField),
        ]
    );
}

#[test]
fn test_validate_guest_info_reports_bad_email_alongside_missing_fields() {
    let info: GuestInfo = GuestInfo {
        last_name: String::new(),
        email: String::from("hanako@example"),
        ..create_valid_guest_info()
    };

    let issues: Vec<ValidationIssue> = validate_guest_info(&info).unwrap_err();
    assert_eq!(issues.len(), 2);
    assert_eq!(issues[1].kind, IssueKind::InvalidFormat);
    assert_eq!(issues[1].field, FieldRef::Guest(GuestField::Email));
}

#[test]
fn test_blank_email_is_missing_not_malformed() {
    let result = validate_guest_field(GuestField::Email, "  ");
    assert_eq!(result.unwrap_err().kind, IssueKind::MissingField);
}

#[test]
fn test_requests_may_be_blank() {
    assert!(validate_guest_field(GuestField::Requests, "").is_ok());
}

#[test]
fn test_validate_terms() {
    assert!(validate_terms(true).is_ok());
    assert_eq!(
        validate_terms(false).unwrap_err().kind,
        IssueKind::MissingAcknowledgment
    );
}

#[test]
fn test_is_valid_email() {
    assert!(is_valid_email("a@b.c"));
    assert!(is_valid_email("hanako.yamada@mail.example.jp"));
    assert!(!is_valid_email(""));
    assert!(!is_valid_email("hanako"));
    assert!(!is_valid_email("@example.jp"));
    assert!(!is_valid_email("hanako@"));
    assert!(!is_valid_email("hanako@example"));
    assert!(!is_valid_email("hanako@.jp"));
    assert!(!is_valid_email("hanako@example."));
    assert!(!is_valid_email("hana ko@example.jp"));
    assert!(!is_valid_email("hanako@@example.jp"));
}

#[test]
fn test_issue_messages() {
    let issue = ValidationIssue::new(FieldRef::Date(DateField::Checkin), IssueKind::MissingField);
    assert_eq!(issue.message(), "チェックイン日を選択してください");

    let issue = ValidationIssue::new(FieldRef::Guest(GuestField::Phone), IssueKind::MissingField);
    assert_eq!(issue.message(), "この項目は必須です");

    let issue = ValidationIssue::new(FieldRef::Terms, IssueKind::MissingAcknowledgment);
    assert_eq!(issue.message(), "利用規約に同意してください");
}
