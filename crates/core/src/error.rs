// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;
use yado_domain::{DomainError, Step, ValidationIssue};

/// Errors returned by booking flow operations.
///
/// None of these are fatal: the flow stays usable after any of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    DomainViolation(#[from] DomainError),
    /// The current step did not pass validation.
    #[error("{step} rejected with {} issue(s)", .issues.len())]
    StepRejected {
        /// The step that was validated.
        step: Step,
        /// Every reported issue, in the order it was found.
        issues: Vec<ValidationIssue>,
    },
    /// The requested step change is not a single forward or any backward move.
    #[error("Cannot move from {from} to {to}")]
    InvalidTransition {
        /// The current step.
        from: Step,
        /// The requested step.
        to: Step,
    },
    /// The flow is submitting or already completed.
    #[error("Booking is {phase} and can no longer be edited")]
    FlowLocked {
        /// Name of the phase that holds the lock.
        phase: &'static str,
    },
    /// The coupon code was blank.
    #[error("Coupon code is empty")]
    EmptyInput,
    /// The coupon lookup rejected the code.
    #[error("Coupon '{code}' rejected: {message}")]
    LookupRejected {
        /// The normalized code that was looked up.
        code: String,
        /// The lookup's message.
        message: String,
    },
    /// A newer coupon lookup replaced this one before it finished.
    #[error("Coupon lookup for '{code}' was superseded")]
    CouponSuperseded {
        /// The code whose lookup was cancelled.
        code: String,
    },
    /// The coupon lookup did not answer in time.
    #[error("Coupon lookup for '{code}' timed out")]
    LookupTimedOut {
        /// The code that was being looked up.
        code: String,
    },
    /// A submission is already outstanding.
    #[error("A submission is already in progress")]
    SubmissionInProgress,
    /// The submission service reported a failure. The booking may be resubmitted.
    #[error("Submission failed: {reason}")]
    SubmissionFailed {
        /// The reason reported by the service.
        reason: String,
    },
    /// The configuration cannot be used.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },
}
