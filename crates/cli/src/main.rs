// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod host;
mod scenario;
mod submission;

#[cfg(test)]
mod tests;

use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Result, eyre::Context};
use host::ConsoleHost;
use scenario::{Scenario, parse_scenario, play};
use std::path::PathBuf;
use std::time::Duration;
use submission::SimulatedSubmission;
use time::{Date, OffsetDateTime};
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;
use yado::{BookingConfig, BookingFlow, StaticCouponTable};
use yado_domain::parse_input_date;

/// Yado - play a scripted guest session against the booking flow
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON scenario to play.
    #[arg(short, long)]
    scenario: PathBuf,

    /// Path to a JSON booking configuration. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Date treated as today (YYYY-MM-DD). Defaults to the current UTC date.
    #[arg(long)]
    today: Option<String>,

    /// Simulated coupon lookup latency in milliseconds
    #[arg(long, default_value_t = 500)]
    coupon_latency_ms: u64,

    /// Simulated submission latency in milliseconds
    #[arg(long, default_value_t = 2000)]
    submission_latency_ms: u64,

    /// Number of submissions that fail before one succeeds
    #[arg(long, default_value_t = 0)]
    fail_submissions: u32,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    fn load_config(&self) -> Result<BookingConfig> {
        let Some(path) = &self.config else {
            return Ok(BookingConfig::default());
        };
        let raw: String = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&raw).wrap_err_with(|| format!("parsing config {}", path.display()))
    }

    fn load_scenario(&self) -> Result<Scenario> {
        let raw: String = std::fs::read_to_string(&self.scenario)
            .wrap_err_with(|| format!("reading scenario {}", self.scenario.display()))?;
        parse_scenario(&raw)
            .wrap_err_with(|| format!("parsing scenario {}", self.scenario.display()))
    }

    fn today(&self) -> Result<Date> {
        let parsed: Option<Date> = match &self.today {
            Some(raw) => parse_input_date(raw)?,
            None => None,
        };
        Ok(parsed.unwrap_or_else(|| OffsetDateTime::now_utc().date()))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level().to_string())),
        )
        .init();

    let config: BookingConfig = args.load_config()?;
    let scenario: Scenario = args.load_scenario()?;
    let today: Date = args.today()?;

    let coupons: StaticCouponTable = StaticCouponTable::reference()
        .with_latency(Duration::from_millis(args.coupon_latency_ms));
    let submitter: SimulatedSubmission = SimulatedSubmission::new(
        Duration::from_millis(args.submission_latency_ms),
        args.fail_submissions,
    );

    let flow: BookingFlow<ConsoleHost, StaticCouponTable, SimulatedSubmission> =
        BookingFlow::new(config, ConsoleHost::default(), coupons, submitter, today)?;

    info!(actions = scenario.actions.len(), %today, "Playing scenario");
    match play(&flow, &scenario).await? {
        Some(completion) => {
            info!(destination = %completion.destination, "Booking complete");
            println!("{}", serde_json::to_string_pretty(&completion.booking)?);
        }
        None => {
            warn!(phase = flow.phase().as_str(), "Scenario ended without a booking");
            println!("{}", serde_json::to_string_pretty(&flow.snapshot())?);
        }
    }

    Ok(())
}
