// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The booking flow state machine.
//!
//! ## Invariants
//!
//! - The step only changes through `advance` and `retreat`, or through
//!   `submit` falling back to the first step when the stay dates became invalid
//! - `advance` moves exactly one step forward and only after the current step validates
//! - `retreat` moves to any earlier step without validation
//! - The derived summary is recomputed after every change to dates, guests or discount
//! - At most one submission is outstanding; re-entrant submits are rejected
//! - A booking is never submitted unless both its stay dates and terms validate
//! - Nothing in the booking changes while submitting or after completion
//! - At most one coupon lookup is outstanding; a newer lookup cancels the older one
//!
//! ## Concurrency
//!
//! The flow is single-threaded. Every operation takes `&self`, so several
//! pending futures may share one flow, and state lives behind a `RefCell`
//! whose borrows are never held across an `.await`.

use crate::config::BookingConfig;
use crate::coupon::{CouponLookup, CouponVerdict, INVALID_COUPON_MESSAGE};
use crate::error::FlowError;
use crate::host::{FormHost, NoticeTone, SubmitControl, SummaryField};
use crate::messages::{
    COUPON_EMPTY_MESSAGE, COUPON_TIMEOUT_MESSAGE, SUBMISSION_ERROR_MESSAGE, SUBMIT_BUSY_LABEL,
    SUBMIT_READY_LABEL, coupon_applied_message,
};
use crate::state::{BookingState, FlowPhase};
use crate::submission::{BookingSnapshot, SubmissionError, SubmissionService};
use futures::future::{AbortHandle, Abortable};
use std::cell::RefCell;
use time::Date;
use tracing::{debug, info, warn};
use yado_domain::{
    DateField, FieldRef, GuestCount, GuestField, GuestInfo, IssueKind, PriceSummary, RateCard,
    Step, ValidationIssue, Yen, format_display_date, format_guests, format_nights,
    validate_guest_info, validate_stay_dates, validate_terms,
};

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Where the host should navigate next.
    pub destination: String,
    /// The booking that was submitted.
    pub booking: BookingSnapshot,
}

/// Drives the three-step booking sequence.
///
/// The flow owns the booking state and talks to the page only through its
/// [`FormHost`]. Coupon resolution and submission are delegated to the
/// injected collaborators.
pub struct BookingFlow<H, C, S> {
    config: BookingConfig,
    rates: RateCard,
    host: H,
    coupons: C,
    submitter: S,
    state: RefCell<BookingState>,
    pending_lookup: RefCell<Option<AbortHandle>>,
}

impl<H, C, S> BookingFlow<H, C, S>
where
    H: FormHost,
    C: CouponLookup,
    S: SubmissionService,
{
    /// Starts a booking session on the first step.
    ///
    /// Date input minimums are set relative to `today`, and the initial
    /// summary is rendered.
    ///
    /// # Arguments
    ///
    /// * `config` - Rates and tunables
    /// * `host` - The page the flow renders to
    /// * `coupons` - Coupon code resolver
    /// * `submitter` - Service that places the booking
    /// * `today` - The earliest selectable check-in date
    ///
    /// # Errors
    ///
    /// Returns `FlowError::InvalidConfig` if `config` does not validate.
    pub fn new(
        config: BookingConfig,
        host: H,
        coupons: C,
        submitter: S,
        today: Date,
    ) -> Result<Self, FlowError> {
        config.validate()?;
        let rates: RateCard = config.rate_card()?;
        let guests: GuestCount = config.default_guest_count()?;

        let flow: Self = Self {
            config,
            rates,
            host,
            coupons,
            submitter,
            state: RefCell::new(BookingState::new(guests)),
            pending_lookup: RefCell::new(None),
        };

        flow.host.set_date_min(DateField::Checkin, today);
        if let Some(tomorrow) = today.next_day() {
            flow.host.set_date_min(DateField::Checkout, tomorrow);
        }
        flow.host.show_step(Step::Dates);
        flow.host.set_discount_row_visible(false);
        flow.host.set_submit_control(SubmitControl::Ready {
            label: SUBMIT_READY_LABEL,
        });
        flow.recompute_summary();

        debug!(%today, guests = guests.value(), "Booking flow started");
        Ok(flow)
    }

    /// Returns the host.
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Returns the configuration.
    pub const fn config(&self) -> &BookingConfig {
        &self.config
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> BookingState {
        self.state.borrow().clone()
    }

    /// Returns the current lifecycle phase.
    pub fn phase(&self) -> FlowPhase {
        self.state.borrow().phase.clone()
    }

    /// Returns the step shown to the guest.
    pub fn current_step(&self) -> Step {
        self.state.borrow().current_step()
    }

    /// Returns the last computed summary.
    pub fn summary(&self) -> PriceSummary {
        self.state.borrow().summary
    }

    /// Returns the data a submission would carry right now.
    pub fn snapshot(&self) -> BookingSnapshot {
        self.state.borrow().snapshot()
    }

    /// Sets or clears the check-in date.
    ///
    /// The check-out minimum moves to the day after check-in, and a check-out
    /// that is no longer after check-in is cleared.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::FlowLocked` while submitting or after completion.
    pub fn set_checkin(&self, date: Option<Date>) -> Result<(), FlowError> {
        self.ensure_unlocked()?;
        let cleared: bool = {
            let mut state = self.state.borrow_mut();
            state.checkin = date;
            match (date, state.checkout) {
                (Some(checkin), Some(checkout)) if checkout <= checkin => {
                    state.checkout = None;
                    true
                }
                _ => false,
            }
        };

        if let Some(min) = date.and_then(Date::next_day) {
            self.host.set_date_min(DateField::Checkout, min);
        }
        if cleared {
            debug!("Check-out no longer after check-in, clearing it");
            self.host.set_date_value(DateField::Checkout, None);
        }

        self.recompute_summary();
        Ok(())
    }

    /// Sets or clears the check-out date.
    ///
    /// Ranges are not checked here; the first step rejects them on `advance`
    /// and `submit` checks them again.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::FlowLocked` while submitting or after completion.
    pub fn set_checkout(&self, date: Option<Date>) -> Result<(), FlowError> {
        self.ensure_unlocked()?;
        self.state.borrow_mut().checkout = date;
        self.recompute_summary();
        Ok(())
    }

    /// Sets the number of guests.
    ///
    /// # Errors
    ///
    /// Returns `FlowError::FlowLocked` while submitting or after completion.
    pub fn set_guest_count(&self, guests: GuestCount) -> Result<(), FlowError> {
        self.ensure_unlocked()?;
        self.state.borrow_mut().guests = guests;
        self.recompute_summary();
        Ok(())
    }

    /// Recomputes the derived summary and renders it.
    ///
    /// Calling this twice without changing the state yields the same summary.
    pub fn recompute_summary(&self) -> PriceSummary {
        let (summary, checkin, checkout, guests) = {
            let mut state = self.state.borrow_mut();
            let summary: PriceSummary = state.derive_summary(&self.rates);
            state.summary = summary;
            (summary, state.checkin, state.checkout, state.guests)
        };

        let texts: [(SummaryField, String); 8] = [
            (SummaryField::Checkin, format_display_date(checkin)),
            (SummaryField::Checkout, format_display_date(checkout)),
            (SummaryField::Guests, format_guests(guests)),
            (SummaryField::Nights, format_nights(summary.nights)),
            (SummaryField::BasePrice, summary.base_price.to_string()),
            (SummaryField::Discount, format!("-{}", summary.discount)),
            (SummaryField::Taxes, summary.taxes.to_string()),
            (SummaryField::Total, summary.total.to_string()),
        ];
        for (field, text) in &texts {
            self.host.set_summary_text(*field, text);
        }

        summary
    }

    /// Validates `step` against the current form contents.
    ///
    /// Issues are rendered next to their controls and controls that passed
    /// have their error cleared. The first and third steps stop at the first
    /// issue; the second step reports every failing field. When the second
    /// step passes, the guest details are captured.
    ///
    /// # Errors
    ///
    /// - `FlowError::FlowLocked` while submitting or after completion
    /// - `FlowError::StepRejected` with the issues found
    pub fn validate_step(&self, step: Step) -> Result<(), FlowError> {
        self.ensure_unlocked()?;
        self.check_step(step)
            .map_err(|issues| FlowError::StepRejected { step, issues })
    }

    fn check_step(&self, step: Step) -> Result<(), Vec<ValidationIssue>> {
        match step {
            Step::Dates => {
                let (checkin, checkout) = {
                    let state = self.state.borrow();
                    (state.checkin, state.checkout)
                };
                self.host
                    .clear_field_error(FieldRef::Date(DateField::Checkin));
                self.host
                    .clear_field_error(FieldRef::Date(DateField::Checkout));
                validate_stay_dates(checkin, checkout).map_err(|issue| {
                    self.show_issue(&issue);
                    vec![issue]
                })
            }
            Step::GuestDetails => {
                let info: GuestInfo = GuestInfo::from_fields(|field| self.host.field_value(field));
                let result: Result<(), Vec<ValidationIssue>> = validate_guest_info(&info);
                let issues: &[ValidationIssue] = match &result {
                    Ok(()) => &[],
                    Err(issues) => issues,
                };

                for field in GuestField::ALL {
                    let control: FieldRef = FieldRef::Guest(field);
                    match issues.iter().find(|issue| issue.field == control) {
                        Some(issue) => self.show_issue(issue),
                        None => self.host.clear_field_error(control),
                    }
                }

                if result.is_ok() {
                    self.state.borrow_mut().guest_info = Some(info);
                }
                result
            }
            Step::Payment => {
                self.host.clear_field_error(FieldRef::Terms);
                validate_terms(self.host.terms_accepted()).map_err(|issue| {
                    self.show_issue(&issue);
                    vec![issue]
                })
            }
        }
    }

    /// Moves one step forward after validating the current step.
    ///
    /// # Errors
    ///
    /// - `FlowError::FlowLocked` while submitting or after completion
    /// - `FlowError::InvalidTransition` if `target` is not the next step
    /// - `FlowError::StepRejected` if the current step does not validate;
    ///   the step is left unchanged
    pub fn advance(&self, target: Step) -> Result<Step, FlowError> {
        let current: Step = self.unlocked_step()?;
        if current.next() != Some(target) {
            return Err(FlowError::InvalidTransition {
                from: current,
                to: target,
            });
        }

        self.check_step(current)
            .map_err(|issues| FlowError::StepRejected {
                step: current,
                issues,
            })?;

        self.enter_step(target);
        info!(from = %current, to = %target, "Advanced booking step");
        Ok(target)
    }

    /// Moves back to an earlier step without validating anything.
    ///
    /// # Errors
    ///
    /// - `FlowError::FlowLocked` while submitting or after completion
    /// - `FlowError::InvalidTransition` if `target` is not before the current step
    pub fn retreat(&self, target: Step) -> Result<Step, FlowError> {
        let current: Step = self.unlocked_step()?;
        if target >= current {
            return Err(FlowError::InvalidTransition {
                from: current,
                to: target,
            });
        }

        self.enter_step(target);
        debug!(from = %current, to = %target, "Retreated booking step");
        Ok(target)
    }

    /// Re-checks a guest field when it loses focus.
    ///
    /// Only the required-field rule is applied here; the email format is
    /// checked when the step is validated.
    pub fn field_blurred(&self, field: GuestField) {
        let control: FieldRef = FieldRef::Guest(field);
        if field.is_required() && self.host.field_value(field).trim().is_empty() {
            self.show_issue(&ValidationIssue::new(control, IssueKind::MissingField));
        } else {
            self.host.clear_field_error(control);
        }
    }

    /// Clears a guest field's error as soon as it is edited.
    pub fn field_edited(&self, field: GuestField) {
        self.host.clear_field_error(FieldRef::Guest(field));
    }

    /// Applies a coupon code.
    ///
    /// The code is trimmed and uppercased before the lookup. Starting a new
    /// lookup cancels one that is still outstanding.
    ///
    /// # Returns
    ///
    /// The discount granted by the code.
    ///
    /// # Errors
    ///
    /// - `FlowError::FlowLocked` while submitting or after completion
    /// - `FlowError::EmptyInput` if the code is blank
    /// - `FlowError::LookupRejected` if the lookup rejects the code; any
    ///   previously applied discount is removed
    /// - `FlowError::CouponSuperseded` if a newer lookup cancelled this one
    /// - `FlowError::LookupTimedOut` if the configured timeout elapsed
    #[allow(clippy::future_not_send)]
    pub async fn apply_coupon(&self, code: &str) -> Result<Yen, FlowError> {
        self.ensure_unlocked()?;

        let code: String = code.trim().to_uppercase();
        if code.is_empty() {
            self.host
                .show_coupon_message(COUPON_EMPTY_MESSAGE, NoticeTone::Error);
            return Err(FlowError::EmptyInput);
        }

        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.pending_lookup.replace(Some(handle)) {
            debug!(%code, "Cancelling outstanding coupon lookup");
            previous.abort();
        }

        let lookup = Abortable::new(self.coupons.lookup(&code), registration);
        let outcome = match self.config.lookup_timeout() {
            Some(limit) => {
                if let Ok(outcome) = tokio::time::timeout(limit, lookup).await {
                    outcome
                } else {
                    self.pending_lookup.replace(None);
                    warn!(%code, ?limit, "Coupon lookup timed out");
                    self.host
                        .show_coupon_message(COUPON_TIMEOUT_MESSAGE, NoticeTone::Error);
                    return Err(FlowError::LookupTimedOut { code });
                }
            }
            None => lookup.await,
        };

        let Ok(verdict) = outcome else {
            debug!(%code, "Coupon lookup superseded");
            return Err(FlowError::CouponSuperseded { code });
        };
        self.pending_lookup.replace(None);

        // A submission may have started while the lookup was outstanding.
        self.ensure_unlocked()?;

        match verdict {
            CouponVerdict::Accepted { discount } => {
                {
                    let mut state = self.state.borrow_mut();
                    state.discount = discount;
                    state.coupon_code = Some(code.clone());
                }
                self.host.show_coupon_message(
                    &coupon_applied_message(discount),
                    NoticeTone::Success,
                );
                self.host.set_discount_row_visible(true);
                self.recompute_summary();
                info!(%code, discount = discount.amount(), "Coupon applied");
                Ok(discount)
            }
            CouponVerdict::Rejected { message } => {
                let message: String =
                    message.unwrap_or_else(|| String::from(INVALID_COUPON_MESSAGE));
                {
                    let mut state = self.state.borrow_mut();
                    state.discount = Yen::ZERO;
                    state.coupon_code = None;
                }
                self.host.show_coupon_message(&message, NoticeTone::Error);
                self.host.set_discount_row_visible(false);
                self.recompute_summary();
                debug!(%code, "Coupon rejected");
                Err(FlowError::LookupRejected { code, message })
            }
        }
    }

    /// Submits the booking.
    ///
    /// The terms must be accepted. While the submission service works the
    /// flow is `Submitting` and refuses edits; on success it is `Completed`,
    /// on failure it is `Failed` and may be submitted again.
    ///
    /// # Errors
    ///
    /// - `FlowError::SubmissionInProgress` if a submission is outstanding;
    ///   the service is not called again
    /// - `FlowError::FlowLocked` after completion
    /// - `FlowError::InvalidTransition` if the flow is not on the payment step
    /// - `FlowError::StepRejected` if the stay dates no longer form a valid
    ///   range (the flow returns to the first step) or the terms are not
    ///   accepted
    /// - `FlowError::SubmissionFailed` if the service reports a failure
    #[allow(clippy::future_not_send)]
    pub async fn submit(&self) -> Result<Completion, FlowError> {
        let phase: FlowPhase = self.phase();
        match phase {
            FlowPhase::Submitting => {
                debug!("Submission already in progress, rejecting");
                return Err(FlowError::SubmissionInProgress);
            }
            FlowPhase::Completed => {
                return Err(FlowError::FlowLocked {
                    phase: phase.as_str(),
                });
            }
            FlowPhase::Step(step) if step != Step::Payment => {
                return Err(FlowError::InvalidTransition {
                    from: step,
                    to: Step::Payment,
                });
            }
            FlowPhase::Step(_) | FlowPhase::Failed { .. } => {}
        }

        if let Err(issues) = self.check_step(Step::Dates) {
            warn!("Stay dates changed to an invalid range, returning to first step");
            self.enter_step(Step::Dates);
            return Err(FlowError::StepRejected {
                step: Step::Dates,
                issues,
            });
        }

        self.check_step(Step::Payment)
            .map_err(|issues| FlowError::StepRejected {
                step: Step::Payment,
                issues,
            })?;

        let booking: BookingSnapshot = {
            let mut state = self.state.borrow_mut();
            state.phase = FlowPhase::Submitting;
            state.snapshot()
        };
        self.host.set_submit_control(SubmitControl::Busy {
            label: SUBMIT_BUSY_LABEL,
        });
        info!(total = booking.summary.total.amount(), "Submitting booking");

        let outcome: Result<(), SubmissionError> = match self.config.submit_timeout() {
            Some(limit) => tokio::time::timeout(limit, self.submitter.submit(&booking))
                .await
                .unwrap_or_else(|_| Err(SubmissionError::new("submission timed out"))),
            None => self.submitter.submit(&booking).await,
        };

        match outcome {
            Ok(()) => {
                self.state.borrow_mut().phase = FlowPhase::Completed;
                info!(destination = %self.config.confirmation_path, "Booking completed");
                Ok(Completion {
                    destination: self.config.confirmation_path.clone(),
                    booking,
                })
            }
            Err(e) => {
                self.state.borrow_mut().phase = FlowPhase::Failed {
                    reason: e.reason.clone(),
                };
                self.host.set_submit_control(SubmitControl::Ready {
                    label: SUBMIT_READY_LABEL,
                });
                self.host.show_submission_error(SUBMISSION_ERROR_MESSAGE);
                warn!(reason = %e.reason, "Booking submission failed");
                Err(FlowError::SubmissionFailed { reason: e.reason })
            }
        }
    }

    fn ensure_unlocked(&self) -> Result<(), FlowError> {
        self.unlocked_step().map(|_| ())
    }

    fn unlocked_step(&self) -> Result<Step, FlowError> {
        let state = self.state.borrow();
        if state.phase.is_locked() {
            return Err(FlowError::FlowLocked {
                phase: state.phase.as_str(),
            });
        }
        Ok(state.current_step())
    }

    fn enter_step(&self, step: Step) {
        self.state.borrow_mut().phase = FlowPhase::Step(step);
        self.host.show_step(step);
    }

    fn show_issue(&self, issue: &ValidationIssue) {
        self.host.show_field_error(issue.field, issue.message());
    }
}
