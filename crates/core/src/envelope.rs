// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Consumer-facing framing of a delivered event

use crate::category::Category;
use crate::event::EventId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// How a consumer's transport expects the payload framed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Framing {
    /// `{ "detail": payload }`, as event-object transports require
    #[default]
    Detail,
    /// The payload JSON alone
    Bare,
}

/// One delivery to one consumer
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub event_id: EventId,
    pub category: Category,
    pub detail: Value,
    pub framing: Framing,
}

impl Envelope {
    pub fn new(event_id: EventId, category: Category, detail: Value, framing: Framing) -> Self {
        Self {
            event_id,
            category,
            detail,
            framing,
        }
    }

    /// Event name the consumer listens for
    pub fn name(&self) -> String {
        self.category.dom_event_name()
    }

    /// The message body as the transport sends it
    pub fn to_json(&self) -> Value {
        match self.framing {
            Framing::Detail => json!({ "detail": self.detail }),
            Framing::Bare => self.detail.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(framing: Framing) -> Envelope {
        Envelope::new(
            EventId(1),
            Category::from("openUrl"),
            json!({"openUrl": "https://example.com"}),
            framing,
        )
    }

    #[test]
    fn detail_framing_wraps_payload() {
        assert_eq!(
            envelope(Framing::Detail).to_json(),
            json!({"detail": {"openUrl": "https://example.com"}})
        );
    }

    #[test]
    fn bare_framing_sends_payload_alone() {
        assert_eq!(
            envelope(Framing::Bare).to_json(),
            json!({"openUrl": "https://example.com"})
        );
    }

    #[test]
    fn name_is_dom_event_name() {
        assert_eq!(envelope(Framing::Detail).name(), "moca.openurl");
    }
}
