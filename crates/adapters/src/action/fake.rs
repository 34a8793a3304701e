// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake action for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use pxb_core::{Action, PendingAction};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Action that counts how often it fired
#[derive(Debug, Default)]
pub struct FakeAction {
    id: String,
    fired: AtomicUsize,
}

impl FakeAction {
    pub fn new(id: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            id: id.into(),
            fired: AtomicUsize::new(0),
        })
    }

    pub fn fire_count(&self) -> usize {
        self.fired.load(Ordering::SeqCst)
    }

    /// Wrap a shared fake as the bridge-owned handle
    pub fn pending(self: &Arc<Self>) -> PendingAction {
        PendingAction::new(self.clone())
    }
}

impl Action for FakeAction {
    fn id(&self) -> &str {
        &self.id
    }

    fn fire(&self) -> bool {
        self.fired.fetch_add(1, Ordering::SeqCst);
        true
    }
}
