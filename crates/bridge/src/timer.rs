// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One-shot timers that close the quiescence window

use crate::error::TimerError;
use std::time::Duration;
use tokio::runtime::Handle;

/// Callback run when a timer fires
pub type TimerCallback = Box<dyn FnOnce() + Send + 'static>;

/// Runs a callback once after a delay
///
/// The bridge arms at most one timer per lifetime; implementations do not
/// need to support cancellation.
pub trait ExpiryTimer: Send + Sync + 'static {
    fn arm(&self, delay: Duration, on_fire: TimerCallback);
}

/// Timer backed by a tokio runtime
///
/// The callback drives consumer delivery, which may block, so it runs on the
/// blocking pool rather than a runtime worker.
#[derive(Clone, Debug)]
pub struct TokioTimer {
    handle: Handle,
}

impl TokioTimer {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Timer on the runtime of the calling task
    pub fn current() -> Result<Self, TimerError> {
        Ok(Self::new(Handle::try_current()?))
    }
}

impl ExpiryTimer for TokioTimer {
    fn arm(&self, delay: Duration, on_fire: TimerCallback) {
        tracing::debug!(delay_ms = delay.as_millis() as u64, "expiry timer armed");
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = tokio::task::spawn_blocking(on_fire).await {
                tracing::error!(error = %e, "expiry callback failed");
            }
        });
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use manual::ManualTimer;

#[cfg(any(test, feature = "test-support"))]
mod manual {
    #![cfg_attr(coverage_nightly, coverage(off))]

    use super::{ExpiryTimer, TimerCallback};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Default)]
    struct Armed {
        callbacks: Vec<TimerCallback>,
        delays: Vec<Duration>,
    }

    /// Timer that only fires when the test says so
    #[derive(Clone, Default)]
    pub struct ManualTimer {
        armed: Arc<Mutex<Armed>>,
    }

    impl ManualTimer {
        pub fn new() -> Self {
            Self::default()
        }

        /// Delays of every arm() call so far
        pub fn delays(&self) -> Vec<Duration> {
            self.armed
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .delays
                .clone()
        }

        pub fn armed_count(&self) -> usize {
            self.armed
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .delays
                .len()
        }

        /// Run every armed callback that has not fired yet; returns how many ran
        pub fn fire(&self) -> usize {
            let callbacks = std::mem::take(
                &mut self
                    .armed
                    .lock()
                    .unwrap_or_else(|e| e.into_inner())
                    .callbacks,
            );
            let count = callbacks.len();
            for callback in callbacks {
                callback();
            }
            count
        }
    }

    impl ExpiryTimer for ManualTimer {
        fn arm(&self, delay: Duration, on_fire: TimerCallback) {
            let mut armed = self.armed.lock().unwrap_or_else(|e| e.into_inner());
            armed.delays.push(delay);
            armed.callbacks.push(on_fire);
        }
    }
}

#[cfg(test)]
#[path = "timer_tests.rs"]
mod tests;
