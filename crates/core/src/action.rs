// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deferred side-effects bound to events
//!
//! The detection engine hands over an action (show an alert, open a URL)
//! together with the event that triggered it. The bridge owns it until it is
//! either fired or relinquished to a consumer that handles it itself.

use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// A native side-effect that can be executed
pub trait Action: Send + Sync {
    /// Identifier for logs
    fn id(&self) -> &str;

    /// Run the platform's default behavior; returns whether it ran
    fn fire(&self) -> bool;
}

const OWNED: u8 = 0;
const FIRED: u8 = 1;
const RELINQUISHED: u8 = 2;

/// Settlement of a pending action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionState {
    /// Still owned, not yet fired
    Owned,
    Fired,
    /// Ownership passed to a consumer; will never fire
    Relinquished,
}

/// An action the bridge still owns
///
/// Clones share settlement state, so the action fires at most once no matter
/// how many handles exist.
#[derive(Clone)]
pub struct PendingAction {
    action: Arc<dyn Action>,
    state: Arc<AtomicU8>,
}

impl PendingAction {
    pub fn new(action: Arc<dyn Action>) -> Self {
        Self {
            action,
            state: Arc::new(AtomicU8::new(OWNED)),
        }
    }

    pub fn id(&self) -> &str {
        self.action.id()
    }

    /// Fire the action if nobody has settled it yet
    ///
    /// Returns true only for the call that actually fired it.
    pub fn fire(&self) -> bool {
        if self.settle(FIRED) {
            let ran = self.action.fire();
            tracing::debug!(action_id = self.id(), ran, "action fired");
            true
        } else {
            tracing::trace!(action_id = self.id(), state = ?self.state(), "action already settled");
            false
        }
    }

    /// Give up the action without firing it
    pub fn relinquish(&self) -> bool {
        let settled = self.settle(RELINQUISHED);
        if settled {
            tracing::debug!(action_id = self.id(), "action relinquished to consumer");
        }
        settled
    }

    pub fn state(&self) -> ActionState {
        match self.state.load(Ordering::Acquire) {
            OWNED => ActionState::Owned,
            FIRED => ActionState::Fired,
            _ => ActionState::Relinquished,
        }
    }

    fn settle(&self, to: u8) -> bool {
        self.state
            .compare_exchange(OWNED, to, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

impl fmt::Debug for PendingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingAction")
            .field("id", &self.id())
            .field("state", &self.state())
            .finish()
    }
}

#[cfg(test)]
#[path = "action_tests.rs"]
mod tests;
