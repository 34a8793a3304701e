// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pending events awaiting a consumer or expiry

use crate::registry::ConsumerRegistry;
use pxb_core::Event;
use std::collections::VecDeque;
use std::fmt;
use std::time::Instant;

/// Lifecycle of the event subsystem
///
/// Starts in `Buffering` and moves to `Draining` exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    Buffering,
    Draining,
}

impl fmt::Display for BridgeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BridgeState::Buffering => f.write_str("buffering"),
            BridgeState::Draining => f.write_str("draining"),
        }
    }
}

/// Ordered buffer of events, in arrival order
#[derive(Debug)]
pub struct EventQueue {
    state: BridgeState,
    pending: VecDeque<Event>,
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl EventQueue {
    pub fn new() -> Self {
        Self {
            state: BridgeState::Buffering,
            pending: VecDeque::new(),
        }
    }

    pub fn state(&self) -> BridgeState {
        self.state
    }

    pub fn is_buffering(&self) -> bool {
        self.state == BridgeState::Buffering
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn push(&mut self, event: Event) {
        self.pending.push_back(event);
    }

    /// Partial drain: remove events that now have a consumer or have expired
    ///
    /// Removed events are returned in arrival order; the rest keep their
    /// relative order.
    pub fn take_ready(&mut self, registry: &ConsumerRegistry, now: Instant) -> Vec<Event> {
        let (ready, kept): (Vec<Event>, Vec<Event>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|event| registry.contains(&event.category) || event.is_expired(now));
        self.pending = kept.into();
        ready
    }

    /// Unconditional drain of every pending event
    pub fn take_all(&mut self) -> Vec<Event> {
        self.pending.drain(..).collect()
    }

    /// Leave the buffering state; returns false if already draining
    pub fn quiesce(&mut self) -> bool {
        if self.state == BridgeState::Draining {
            return false;
        }
        self.state = BridgeState::Draining;
        true
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
