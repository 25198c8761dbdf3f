// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The rendering surface a booking flow reads from and writes to.
//!
//! The flow never touches a page directly. Everything it needs to know about
//! the form, and everything it wants to show, goes through [`FormHost`].

use time::Date;
use yado_domain::{DateField, FieldRef, GuestField, Step};

/// A text slot in the booking summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SummaryField {
    /// Check-in date.
    Checkin,
    /// Check-out date.
    Checkout,
    /// Guest count.
    Guests,
    /// Number of nights.
    Nights,
    /// Base price.
    BasePrice,
    /// Coupon discount.
    Discount,
    /// Taxes.
    Taxes,
    /// Amount due.
    Total,
}

impl SummaryField {
    /// Returns the host element identifier for this slot.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Checkin => "summary-checkin",
            Self::Checkout => "summary-checkout",
            Self::Guests => "summary-guests",
            Self::Nights => "summary-nights",
            Self::BasePrice => "summary-base-price",
            Self::Discount => "summary-discount",
            Self::Taxes => "summary-taxes",
            Self::Total => "summary-total",
        }
    }
}

/// Styling of the coupon message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeTone {
    /// The coupon was applied.
    Success,
    /// The coupon was not applied.
    Error,
}

/// State of the submit button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitControl {
    /// Enabled, with its resting label.
    Ready {
        /// Button label.
        label: &'static str,
    },
    /// Disabled while a submission is outstanding.
    Busy {
        /// Button label.
        label: &'static str,
    },
}

/// Page-side collaborator of a booking flow.
///
/// Reads return the current raw value of a control. Writes are fire and
/// forget; a host that cannot render something simply ignores it.
pub trait FormHost {
    /// Returns the current raw value of a guest field.
    fn field_value(&self, field: GuestField) -> String;

    /// Returns whether the terms checkbox is ticked.
    fn terms_accepted(&self) -> bool;

    /// Sets the earliest selectable date of a date input.
    fn set_date_min(&self, field: DateField, min: Date);

    /// Overwrites the value of a date input (`None` clears it).
    fn set_date_value(&self, field: DateField, value: Option<Date>);

    /// Writes the text of a summary slot.
    fn set_summary_text(&self, field: SummaryField, text: &str);

    /// Marks a control as invalid and shows `message` next to it.
    fn show_field_error(&self, field: FieldRef, message: &str);

    /// Removes any error marker and message from a control.
    fn clear_field_error(&self, field: FieldRef);

    /// Shows `step` and updates the progress indicator.
    fn show_step(&self, step: Step);

    /// Shows the coupon message.
    fn show_coupon_message(&self, message: &str, tone: NoticeTone);

    /// Shows or hides the discount row of the summary.
    fn set_discount_row_visible(&self, visible: bool);

    /// Updates the submit button.
    fn set_submit_control(&self, control: SubmitControl);

    /// Shows a payment-level error below the submit button.
    fn show_submission_error(&self, message: &str);
}
