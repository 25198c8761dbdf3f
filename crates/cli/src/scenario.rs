// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Scripted guest sessions.
//!
//! A scenario is a JSON document listing what a guest does on the booking
//! page, in order. Actions the flow refuses are logged and the script moves
//! on, the same way a guest would keep clicking.

use crate::host::ConsoleHost;
use serde::Deserialize;
use time::Date;
use tracing::{info, warn};
use yado::{BookingFlow, Completion, CouponLookup, SubmissionService};
use yado_domain::{DomainError, GuestCount, GuestField, Step, parse_input_date};

/// A scripted guest session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Scenario {
    /// Actions performed in order.
    pub actions: Vec<Action>,
}

/// One thing the guest does on the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Picks a check-in date. An empty string clears the input.
    SetCheckin { date: String },
    /// Picks a check-out date. An empty string clears the input.
    SetCheckout { date: String },
    /// Picks the number of guests.
    SetGuests { count: u8 },
    /// Types into a guest field.
    Fill { field: GuestField, value: String },
    /// Leaves a guest field.
    Blur { field: GuestField },
    /// Ticks or unticks the terms checkbox.
    AcceptTerms {
        #[serde(default = "ticked")]
        accepted: bool,
    },
    /// Presses a "next" button.
    Advance { to: u8 },
    /// Presses a "back" button.
    Retreat { to: u8 },
    /// Presses the coupon button.
    ApplyCoupon { code: String },
    /// Presses the submit button.
    Submit,
}

const fn ticked() -> bool {
    true
}

/// Parses a scenario document.
///
/// # Errors
///
/// Returns an error if `json` is not a valid scenario.
pub fn parse_scenario(json: &str) -> Result<Scenario, serde_json::Error> {
    serde_json::from_str(json)
}

/// Plays `scenario` against `flow`.
///
/// Returns the completion once a submission succeeds; later actions are not
/// played.
///
/// # Errors
///
/// Returns a `DomainError` if an action carries a malformed date, step, or
/// guest count.
#[allow(clippy::future_not_send)]
pub async fn play<C, S>(
    flow: &BookingFlow<ConsoleHost, C, S>,
    scenario: &Scenario,
) -> Result<Option<Completion>, DomainError>
where
    C: CouponLookup,
    S: SubmissionService,
{
    for (index, action) in scenario.actions.iter().enumerate() {
        info!(index, ?action, "Playing action");
        match action {
            Action::SetCheckin { date } => {
                let date: Option<Date> = parse_input_date(date)?;
                if let Err(err) = flow.set_checkin(date) {
                    warn!(%err, "Check-in not changed");
                }
            }
            Action::SetCheckout { date } => {
                let date: Option<Date> = parse_input_date(date)?;
                if let Err(err) = flow.set_checkout(date) {
                    warn!(%err, "Check-out not changed");
                }
            }
            Action::SetGuests { count } => {
                if let Err(err) = flow.set_guest_count(GuestCount::new(*count)?) {
                    warn!(%err, "Guest count not changed");
                }
            }
            Action::Fill { field, value } => {
                flow.host().fill(*field, value);
                flow.field_edited(*field);
            }
            Action::Blur { field } => flow.field_blurred(*field),
            Action::AcceptTerms { accepted } => flow.host().set_terms(*accepted),
            Action::Advance { to } => {
                if let Err(err) = flow.advance(Step::from_number(*to)?) {
                    warn!(%err, "Advance refused");
                }
            }
            Action::Retreat { to } => {
                if let Err(err) = flow.retreat(Step::from_number(*to)?) {
                    warn!(%err, "Retreat refused");
                }
            }
            Action::ApplyCoupon { code } => {
                if let Err(err) = flow.apply_coupon(code).await {
                    warn!(%err, "Coupon not applied");
                }
            }
            Action::Submit => match flow.submit().await {
                Ok(completion) => return Ok(Some(completion)),
                Err(err) => warn!(%err, "Submission refused"),
            },
        }
    }

    Ok(None)
}
