// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    BookingConfig, BookingFlow, BookingSnapshot, CouponLookup, CouponVerdict, FormHost,
    NoticeTone, StaticCouponTable, SubmissionError, SubmissionService, SubmitControl,
    SummaryField,
};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;
use std::time::Duration;
use time::Date;
use time::macros::date;
use tokio::sync::Notify;
use yado_domain::{DateField, FieldRef, GuestField, Step};

pub const TODAY: Date = date!(2026 - 10 - 19);
pub const CHECKIN: Date = date!(2026 - 11 - 03);
pub const CHECKOUT: Date = date!(2026 - 11 - 06);

/// A form host that records everything written to it.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub fields: RefCell<HashMap<GuestField, String>>,
    pub terms: Cell<bool>,
    pub date_mins: RefCell<HashMap<DateField, Date>>,
    pub date_values: RefCell<HashMap<DateField, Option<Date>>>,
    pub summary: RefCell<HashMap<SummaryField, String>>,
    pub errors: RefCell<HashMap<FieldRef, String>>,
    pub shown_steps: RefCell<Vec<Step>>,
    pub coupon_message: RefCell<Option<(String, NoticeTone)>>,
    pub discount_row_visible: Cell<bool>,
    pub submit_control: Cell<Option<SubmitControl>>,
    pub submission_error: RefCell<Option<String>>,
}

impl RecordingHost {
    pub fn fill(&self, field: GuestField, value: &str) {
        self.fields.borrow_mut().insert(field, value.to_string());
    }

    pub fn fill_valid_guest(&self) {
        self.fill(GuestField::LastName, "山田");
        self.fill(GuestField::FirstName, "花子");
        self.fill(GuestField::LastNameKana, "ヤマダ");
        self.fill(GuestField::FirstNameKana, "ハナコ");
        self.fill(GuestField::Email, "hanako@example.jp");
        self.fill(GuestField::Phone, "075-000-0000");
        self.fill(GuestField::Requests, "");
    }

    pub fn summary_text(&self, field: SummaryField) -> String {
        self.summary.borrow().get(&field).cloned().unwrap_or_default()
    }

    pub fn error(&self, field: FieldRef) -> Option<String> {
        self.errors.borrow().get(&field).cloned()
    }

    pub fn last_step(&self) -> Option<Step> {
        self.shown_steps.borrow().last().copied()
    }
}

impl FormHost for RecordingHost {
    fn field_value(&self, field: GuestField) -> String {
        self.fields.borrow().get(&field).cloned().unwrap_or_default()
    }

    fn terms_accepted(&self) -> bool {
        self.terms.get()
    }

    fn set_date_min(&self, field: DateField, min: Date) {
        self.date_mins.borrow_mut().insert(field, min);
    }

    fn set_date_value(&self, field: DateField, value: Option<Date>) {
        self.date_values.borrow_mut().insert(field, value);
    }

    fn set_summary_text(&self, field: SummaryField, text: &str) {
        self.summary.borrow_mut().insert(field, text.to_string());
    }

    fn show_field_error(&self, field: FieldRef, message: &str) {
        self.errors.borrow_mut().insert(field, message.to_string());
    }

    fn clear_field_error(&self, field: FieldRef) {
        self.errors.borrow_mut().remove(&field);
    }

    fn show_step(&self, step: Step) {
        self.shown_steps.borrow_mut().push(step);
    }

    fn show_coupon_message(&self, message: &str, tone: NoticeTone) {
        *self.coupon_message.borrow_mut() = Some((message.to_string(), tone));
    }

    fn set_discount_row_visible(&self, visible: bool) {
        self.discount_row_visible.set(visible);
    }

    fn set_submit_control(&self, control: SubmitControl) {
        self.submit_control.set(Some(control));
    }

    fn show_submission_error(&self, message: &str) {
        *self.submission_error.borrow_mut() = Some(message.to_string());
    }
}

/// A submission service that replays scripted outcomes and counts calls.
#[derive(Debug, Default)]
pub struct ScriptedSubmission {
    pub calls: Rc<Cell<usize>>,
    outcomes: RefCell<VecDeque<Result<(), SubmissionError>>>,
    gate: Option<Rc<Notify>>,
}

impl ScriptedSubmission {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn with_outcomes(outcomes: Vec<Result<(), SubmissionError>>) -> Self {
        Self {
            outcomes: RefCell::new(outcomes.into()),
            ..Self::default()
        }
    }

    /// Every call waits for `gate` before answering.
    pub fn gated(gate: Rc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }
}

#[async_trait(?Send)]
impl SubmissionService for ScriptedSubmission {
    async fn submit(&self, _booking: &BookingSnapshot) -> Result<(), SubmissionError> {
        self.calls.set(self.calls.get() + 1);
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.outcomes.borrow_mut().pop_front().unwrap_or(Ok(()))
    }
}

/// A submission service that never answers.
#[derive(Debug, Default)]
pub struct StalledSubmission;

#[async_trait(?Send)]
impl SubmissionService for StalledSubmission {
    async fn submit(&self, _booking: &BookingSnapshot) -> Result<(), SubmissionError> {
        std::future::pending().await
    }
}

/// The reference coupons, answering until `gated_code` is looked up, which
/// waits for `gate`.
#[derive(Debug)]
pub struct GatedLookup {
    table: StaticCouponTable,
    gated_code: String,
    gate: Rc<Notify>,
}

impl GatedLookup {
    pub fn new(gated_code: &str, gate: Rc<Notify>) -> Self {
        Self {
            table: instant_coupons(),
            gated_code: gated_code.to_string(),
            gate,
        }
    }
}

#[async_trait(?Send)]
impl CouponLookup for GatedLookup {
    async fn lookup(&self, code: &str) -> CouponVerdict {
        if code == self.gated_code {
            self.gate.notified().await;
        }
        self.table.lookup(code).await
    }
}

/// A coupon lookup that never answers.
#[derive(Debug, Default)]
pub struct StalledLookup;

#[async_trait(?Send)]
impl CouponLookup for StalledLookup {
    async fn lookup(&self, _code: &str) -> CouponVerdict {
        std::future::pending().await
    }
}

pub fn instant_coupons() -> StaticCouponTable {
    StaticCouponTable::reference().with_latency(Duration::ZERO)
}

pub fn create_flow_with<C, S>(
    config: BookingConfig,
    coupons: C,
    submitter: S,
) -> BookingFlow<RecordingHost, C, S>
where
    C: CouponLookup,
    S: SubmissionService,
{
    BookingFlow::new(config, RecordingHost::default(), coupons, submitter, TODAY).unwrap()
}

pub fn create_test_flow() -> BookingFlow<RecordingHost, StaticCouponTable, ScriptedSubmission> {
    create_flow_with(
        BookingConfig::default(),
        instant_coupons(),
        ScriptedSubmission::succeeding(),
    )
}

/// Fills every step with valid data and moves the flow to the payment step.
pub fn advance_to_payment<C, S>(flow: &BookingFlow<RecordingHost, C, S>)
where
    C: CouponLookup,
    S: SubmissionService,
{
    flow.set_checkin(Some(CHECKIN)).unwrap();
    flow.set_checkout(Some(CHECKOUT)).unwrap();
    flow.advance(Step::GuestDetails).unwrap();
    flow.host().fill_valid_guest();
    flow.advance(Step::Payment).unwrap();
    flow.host().terms.set(true);
}
