// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use time::Date;
use tracing::{debug, info, warn};
use yado::{FormHost, NoticeTone, SubmitControl, SummaryField};
use yado_domain::{DateField, FieldRef, GuestField, Step, format_input_date};

/// A form host that keeps field values in memory and logs every render.
#[derive(Debug, Default)]
pub struct ConsoleHost {
    fields: RefCell<HashMap<GuestField, String>>,
    terms: Cell<bool>,
}

impl ConsoleHost {
    /// Types `value` into a guest field.
    pub fn fill(&self, field: GuestField, value: &str) {
        self.fields.borrow_mut().insert(field, value.to_string());
    }

    /// Ticks or unticks the terms checkbox.
    pub fn set_terms(&self, accepted: bool) {
        self.terms.set(accepted);
    }
}

impl FormHost for ConsoleHost {
    fn field_value(&self, field: GuestField) -> String {
        self.fields.borrow().get(&field).cloned().unwrap_or_default()
    }

    fn terms_accepted(&self) -> bool {
        self.terms.get()
    }

    fn set_date_min(&self, field: DateField, min: Date) {
        debug!(
            element = field.element_id(),
            min = %format_input_date(min),
            "Date minimum set"
        );
    }

    fn set_date_value(&self, field: DateField, value: Option<Date>) {
        let value: String = value.map(format_input_date).unwrap_or_default();
        info!(element = field.element_id(), %value, "Date input overwritten");
    }

    fn set_summary_text(&self, field: SummaryField, text: &str) {
        debug!(element = field.element_id(), text, "Summary updated");
    }

    fn show_field_error(&self, field: FieldRef, message: &str) {
        warn!(element = field.element_id(), message, "Field error");
    }

    fn clear_field_error(&self, field: FieldRef) {
        debug!(element = field.element_id(), "Field error cleared");
    }

    fn show_step(&self, step: Step) {
        info!(step = step.number(), "Showing step");
    }

    fn show_coupon_message(&self, message: &str, tone: NoticeTone) {
        match tone {
            NoticeTone::Success => info!(message, "Coupon"),
            NoticeTone::Error => warn!(message, "Coupon"),
        }
    }

    fn set_discount_row_visible(&self, visible: bool) {
        debug!(visible, "Discount row");
    }

    fn set_submit_control(&self, control: SubmitControl) {
        match control {
            SubmitControl::Ready { label } => debug!(label, enabled = true, "Submit button"),
            SubmitControl::Busy { label } => debug!(label, enabled = false, "Submit button"),
        }
    }

    fn show_submission_error(&self, message: &str) {
        warn!(message, "Submission error");
    }
}
