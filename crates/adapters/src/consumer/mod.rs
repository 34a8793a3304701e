// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Consumer sinks that receive delivered events

mod channel;
mod noop;

pub use channel::{ChannelConsumer, Delivery, DeliveryReceiver, DeliverySender};
pub use noop::NoOpConsumer;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeConsumer;

use pxb_core::{Category, Envelope};
use thiserror::Error;

/// Errors from delivering to a consumer
#[derive(Debug, Error)]
pub enum ConsumerError {
    #[error("consumer channel closed")]
    Closed,
    #[error("delivery rejected: {0}")]
    Rejected(String),
    #[error("consumer panicked during delivery")]
    Panicked,
}

/// An externally registered sink for one event category
///
/// `deliver` is called from whichever thread drives delivery (the producer's
/// callback thread or the expiry timer) and blocks that thread for as long as
/// it runs. Implementations should hand the envelope off and return.
pub trait Consumer: Send + Sync + 'static {
    /// Receive one envelope
    fn deliver(&self, envelope: &Envelope) -> Result<(), ConsumerError>;

    /// Called once after the registration is installed
    fn on_registered(&self, _category: &Category) {}

    /// Name used in logs
    fn label(&self) -> &str {
        "consumer"
    }
}
