// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake consumer for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{Consumer, ConsumerError};
use pxb_core::{Category, Envelope};
use std::sync::{Arc, Mutex};

type Hook = Arc<dyn Fn(&Envelope) + Send + Sync>;

#[derive(Default)]
struct FakeState {
    received: Vec<Envelope>,
    registrations: Vec<Category>,
    fail_with: Option<String>,
}

/// Fake consumer that records what it receives
#[derive(Clone, Default)]
pub struct FakeConsumer {
    label: String,
    state: Arc<Mutex<FakeState>>,
    hook: Option<Hook>,
}

impl FakeConsumer {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Run `hook` inside every delivery, before recording it
    pub fn with_hook(mut self, hook: impl Fn(&Envelope) + Send + Sync + 'static) -> Self {
        self.hook = Some(Arc::new(hook));
        self
    }

    /// Make subsequent deliveries fail with the given reason
    pub fn fail_with(&self, reason: impl Into<String>) {
        self.state.lock().unwrap_or_else(|e| e.into_inner()).fail_with = Some(reason.into());
    }

    /// All envelopes received, in delivery order
    pub fn received(&self) -> Vec<Envelope> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .received
            .clone()
    }

    /// Event ids received, in delivery order
    pub fn received_ids(&self) -> Vec<u64> {
        self.received().iter().map(|e| e.event_id.0).collect()
    }

    /// Categories this consumer was registered for
    pub fn registrations(&self) -> Vec<Category> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .registrations
            .clone()
    }
}

impl Consumer for FakeConsumer {
    fn deliver(&self, envelope: &Envelope) -> Result<(), ConsumerError> {
        if let Some(reason) = self
            .state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .fail_with
            .clone()
        {
            return Err(ConsumerError::Rejected(reason));
        }
        // Hook runs without the state lock held so it may re-enter the bridge
        if let Some(hook) = &self.hook {
            hook(envelope);
        }
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .received
            .push(envelope.clone());
        Ok(())
    }

    fn on_registered(&self, category: &Category) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .registrations
            .push(category.clone());
    }

    fn label(&self) -> &str {
        &self.label
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
