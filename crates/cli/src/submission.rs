// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use async_trait::async_trait;
use std::cell::Cell;
use std::time::Duration;
use tracing::info;
use yado::{BookingSnapshot, SubmissionError, SubmissionService};

/// Accepts bookings after a delay, optionally failing the first few.
#[derive(Debug)]
pub struct SimulatedSubmission {
    latency: Duration,
    failures_remaining: Cell<u32>,
}

impl SimulatedSubmission {
    /// Creates a service that waits `latency` per call and fails the first
    /// `failures` calls.
    pub const fn new(latency: Duration, failures: u32) -> Self {
        Self {
            latency,
            failures_remaining: Cell::new(failures),
        }
    }
}

#[async_trait(?Send)]
impl SubmissionService for SimulatedSubmission {
    async fn submit(&self, booking: &BookingSnapshot) -> Result<(), SubmissionError> {
        tokio::time::sleep(self.latency).await;

        let remaining: u32 = self.failures_remaining.get();
        if remaining > 0 {
            self.failures_remaining.set(remaining - 1);
            return Err(SubmissionError::new("simulated payment failure"));
        }

        info!(
            nights = booking.summary.nights,
            total = booking.summary.total.amount(),
            "Reservation accepted"
        );
        Ok(())
    }
}
