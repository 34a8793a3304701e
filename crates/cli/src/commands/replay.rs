// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `pxb replay <file>` - Drive a bridge from a timed scenario

use crate::scenario::{self, Op, Step};
use crate::transcript::Transcript;
use anyhow::{Context, Result};
use clap::Args;
use pxb_adapters::TracedConsumer;
use pxb_bridge::{Bridge, BridgeConfig, ExpiryTimer, Registration, TokioTimer};
use pxb_core::{Clock, PendingAction, SystemClock};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};

#[derive(Args)]
pub struct ReplayArgs {
    /// Scenario file, one JSON step per line
    pub file: PathBuf,

    /// How long an event waits for its consumer (milliseconds)
    #[arg(long, default_value_t = 3000)]
    pub expiry_window_ms: u64,

    /// Slack after the expiry window before the final flush (milliseconds)
    #[arg(long, default_value_t = 1000)]
    pub grace_ms: u64,

    /// Extra wait after quiescence before printing the summary (milliseconds)
    #[arg(long, default_value_t = 250)]
    pub settle_ms: u64,
}

pub async fn handle(args: ReplayArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("cannot read scenario {}", args.file.display()))?;
    let steps = scenario::parse(&text)
        .with_context(|| format!("invalid scenario {}", args.file.display()))?;

    let config = BridgeConfig::default()
        .with_expiry_window(Duration::from_millis(args.expiry_window_ms))
        .with_grace(Duration::from_millis(args.grace_ms));
    let bridge = Bridge::with_config(SystemClock, TokioTimer::current()?, config);
    let transcript = Transcript::new();

    info!(file = %args.file.display(), steps = steps.len(), "replaying scenario");
    let end = settle_offset(&steps, config, Duration::from_millis(args.settle_ms));

    let start = Instant::now();
    for step in steps {
        sleep_until(start + Duration::from_millis(step.at_ms)).await;
        apply(&bridge, &transcript, step.op);
    }
    sleep_until(start + end).await;

    let tally = transcript.tally();
    println!(
        "summary delivered={} fired={} pending={} state={}",
        tally.delivered,
        tally.fired,
        bridge.pending_len(),
        bridge.state()
    );
    Ok(())
}

/// When to print the summary, relative to the start of the replay
///
/// The quiescence timer is armed by the first submission, so the final flush
/// happens one quiescence window after it.
fn settle_offset(steps: &[Step], config: BridgeConfig, settle: Duration) -> Duration {
    let last = steps.last().map_or(0, |s| s.at_ms);
    let flush = steps
        .iter()
        .find(|s| matches!(s.op, Op::Submit { .. }))
        .map_or(Duration::ZERO, |s| {
            Duration::from_millis(s.at_ms) + config.quiescence()
        });
    Duration::from_millis(last).max(flush) + settle
}

fn apply<C: Clock, T: ExpiryTimer>(bridge: &Bridge<C, T>, transcript: &Transcript, op: Op) {
    match op {
        Op::Submit {
            category,
            payload,
            action,
        } => {
            let action = action.map(|id| PendingAction::new(transcript.action(id)));
            let submission = bridge.submit(category, payload, action);
            debug!(?submission, "submitted");
        }
        Op::Register {
            category,
            display,
            consumer,
            framing,
        } => {
            let label = consumer.unwrap_or_else(|| category.to_string());
            let consumer = TracedConsumer::new(transcript.consumer(label));
            bridge.install(
                Registration::new(category, Arc::new(consumer), display).with_framing(framing),
            );
        }
    }
}
