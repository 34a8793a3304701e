// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! A single detected occurrence awaiting delivery

use crate::action::PendingAction;
use crate::category::Category;
use crate::payload::Payload;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Arrival sequence number, unique per bridge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "evt-{}", self.0)
    }
}

/// Immutable record of one occurrence
#[derive(Debug, Clone)]
pub struct Event {
    pub id: EventId,
    pub category: Category,
    pub payload: Payload,
    /// Side-effect still owned by the bridge; absent for pure notifications
    pub action: Option<PendingAction>,
    pub created_at: Instant,
    pub expires_at: Instant,
}

impl Event {
    /// Stamp a new event; it expires `window` after `now`
    pub fn new(
        id: EventId,
        category: Category,
        payload: Payload,
        action: Option<PendingAction>,
        now: Instant,
        window: Duration,
    ) -> Self {
        Self {
            id,
            category,
            payload,
            action,
            created_at: now,
            expires_at: now + window,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }
}
