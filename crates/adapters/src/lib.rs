// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters at the consumer and action seams

pub mod action;
pub mod consumer;
pub mod traced;

pub use action::FnAction;
pub use consumer::{
    ChannelConsumer, Consumer, ConsumerError, Delivery, DeliveryReceiver, DeliverySender,
    NoOpConsumer,
};
pub use traced::TracedConsumer;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use action::FakeAction;
#[cfg(any(test, feature = "test-support"))]
pub use consumer::FakeConsumer;
