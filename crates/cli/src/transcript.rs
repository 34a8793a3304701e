// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Replay output
//!
//! Deliveries and fired actions happen on whichever thread drives the
//! bridge, including the timer's blocking task. Every line goes through one
//! lock so stdout shows them in the order they happened.

use pxb_adapters::{Consumer, ConsumerError, FnAction};
use pxb_core::{Action, Envelope};
use std::io::Write;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub delivered: usize,
    pub fired: usize,
}

/// Ordered, shared sink for replay output lines
#[derive(Clone, Default)]
pub struct Transcript {
    tally: Arc<Mutex<Tally>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tally(&self) -> Tally {
        *self.tally.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Consumer that records each envelope it receives
    pub fn consumer(&self, label: impl Into<String>) -> TranscriptConsumer {
        TranscriptConsumer {
            label: label.into(),
            transcript: self.clone(),
        }
    }

    /// Action that records when it fires
    pub fn action(&self, id: impl Into<String>) -> Arc<dyn Action> {
        let id = id.into();
        let transcript = self.clone();
        let line_id = id.clone();
        Arc::new(FnAction::new(id, move || {
            transcript.emit(|tally| {
                tally.fired += 1;
                format!("fire {}", line_id)
            })
        }))
    }

    fn emit(&self, line: impl FnOnce(&mut Tally) -> String) -> bool {
        let mut tally = self.tally.lock().unwrap_or_else(|e| e.into_inner());
        let line = line(&mut tally);
        let mut stdout = std::io::stdout().lock();
        match writeln!(stdout, "{}", line).and_then(|()| stdout.flush()) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "cannot write transcript");
                false
            }
        }
    }
}

/// Consumer printing `deliver <label> <event-name> <json>`
pub struct TranscriptConsumer {
    label: String,
    transcript: Transcript,
}

impl Consumer for TranscriptConsumer {
    fn deliver(&self, envelope: &Envelope) -> Result<(), ConsumerError> {
        let written = self.transcript.emit(|tally| {
            tally.delivered += 1;
            format!("deliver {} {} {}", self.label, envelope.name(), envelope.to_json())
        });
        if written {
            Ok(())
        } else {
            Err(ConsumerError::Closed)
        }
    }

    fn label(&self) -> &str {
        &self.label
    }
}
