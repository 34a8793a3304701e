// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced consumer wrapper for consistent observability

use crate::consumer::{Consumer, ConsumerError};
use pxb_core::{Category, Envelope};

/// Wrapper that adds tracing to any Consumer
#[derive(Clone)]
pub struct TracedConsumer<C> {
    inner: C,
}

impl<C> TracedConsumer<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Consumer> Consumer for TracedConsumer<C> {
    fn deliver(&self, envelope: &Envelope) -> Result<(), ConsumerError> {
        let span = tracing::info_span!(
            "consumer.deliver",
            consumer = self.inner.label(),
            category = %envelope.category,
            event_id = %envelope.event_id,
        );
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.deliver(envelope);
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::debug!(
                elapsed_ms = elapsed.as_millis() as u64,
                "delivered"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "delivery failed"
            ),
        }

        result
    }

    fn on_registered(&self, category: &Category) {
        tracing::info!(consumer = self.inner.label(), %category, "consumer registered");
        self.inner.on_registered(category);
    }

    fn label(&self) -> &str {
        self.inner.label()
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
