// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! pxb-bridge: buffering and delivery of proximity events
//!
//! Events submitted before their consumer registers are held for a short
//! window. A consumer that arrives in time receives them; otherwise the
//! default action fires on its own. After the quiescence window closes,
//! every submission is delivered immediately.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod feed;
pub mod queue;
pub mod registry;
pub mod timer;

pub use config::{BridgeConfig, EXPIRY_WINDOW, GRACE};
pub use dispatcher::{Bridge, Submission};
pub use error::{DeliveryError, TimerError};
pub use feed::ProximityFeed;
pub use queue::{BridgeState, EventQueue};
pub use registry::{ConsumerRegistry, Registration};
pub use timer::{ExpiryTimer, TimerCallback, TokioTimer};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use timer::ManualTimer;
