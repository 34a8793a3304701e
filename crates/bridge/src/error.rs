// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the bridge

use pxb_adapters::ConsumerError;
use pxb_core::PayloadError;
use thiserror::Error;

/// Why a delivery attempt failed
///
/// Never returned to producers: a failed delivery counts as "not consumed"
/// and the event's default action still fires.
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("payload error: {0}")]
    Payload(#[from] PayloadError),
    #[error("consumer error: {0}")]
    Consumer(#[from] ConsumerError),
}

/// Errors constructing a timer
#[derive(Debug, Error)]
pub enum TimerError {
    #[error("no tokio runtime available: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}
