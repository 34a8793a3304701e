// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op consumer for categories that should be swallowed.

use super::{Consumer, ConsumerError};
use pxb_core::Envelope;

/// Consumer that accepts and discards every envelope.
///
/// Registering it with `display = true` suppresses a category's default
/// actions without forwarding anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpConsumer;

impl NoOpConsumer {
    pub fn new() -> Self {
        Self
    }
}

impl Consumer for NoOpConsumer {
    fn deliver(&self, _envelope: &Envelope) -> Result<(), ConsumerError> {
        Ok(())
    }

    fn label(&self) -> &str {
        "noop"
    }
}
