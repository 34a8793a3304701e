// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Channel-backed consumer
//!
//! Sending on an unbounded channel never blocks, so delivery returns as soon
//! as the envelope is queued for the receiving task.

use super::{Consumer, ConsumerError};
use pxb_core::Envelope;
use tokio::sync::mpsc;

/// An envelope tagged with the consumer it was delivered to
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub consumer: String,
    pub envelope: Envelope,
}

/// Sender half shared by channel consumers
pub type DeliverySender = mpsc::UnboundedSender<Delivery>;
/// Receiver for deliveries
pub type DeliveryReceiver = mpsc::UnboundedReceiver<Delivery>;

/// Forwards every envelope to an mpsc channel
#[derive(Clone, Debug)]
pub struct ChannelConsumer {
    label: String,
    tx: DeliverySender,
}

impl ChannelConsumer {
    /// Consumer sending into an existing channel
    ///
    /// Several consumers may share one sender; the receiver then sees
    /// deliveries across all of them in delivery order.
    pub fn new(label: impl Into<String>, tx: DeliverySender) -> Self {
        Self {
            label: label.into(),
            tx,
        }
    }

    /// Consumer with its own channel
    pub fn channel(label: impl Into<String>) -> (Self, DeliveryReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(label, tx), rx)
    }
}

impl Consumer for ChannelConsumer {
    fn deliver(&self, envelope: &Envelope) -> Result<(), ConsumerError> {
        self.tx
            .send(Delivery {
                consumer: self.label.clone(),
                envelope: envelope.clone(),
            })
            .map_err(|_| ConsumerError::Closed)
    }

    fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
