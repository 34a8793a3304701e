// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bridge timing

use std::time::Duration;

/// How long an event may wait in the queue for a consumer
pub const EXPIRY_WINDOW: Duration = Duration::from_millis(3000);

/// Extra slack after the expiry window before the queue is flushed
pub const GRACE: Duration = Duration::from_millis(1000);

/// Timing used by a bridge instance
///
/// Production bridges use the defaults; the builders exist so tests can run
/// against shorter windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeConfig {
    pub expiry_window: Duration,
    pub grace: Duration,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            expiry_window: EXPIRY_WINDOW,
            grace: GRACE,
        }
    }
}

impl BridgeConfig {
    pub fn with_expiry_window(self, expiry_window: Duration) -> Self {
        Self {
            expiry_window,
            ..self
        }
    }

    pub fn with_grace(self, grace: Duration) -> Self {
        Self { grace, ..self }
    }

    /// Delay between the first submission and the final flush
    pub fn quiescence(&self) -> Duration {
        self.expiry_window + self.grace
    }
}
