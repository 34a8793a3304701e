// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Replay scenarios: one JSON step per line
//!
//! ```text
//! {"at_ms":0,"op":"submit","category":"displayAlert","payload":{"kind":"text","value":"hi"},"action":"A1"}
//! {"at_ms":500,"op":"register","category":"displayAlert","display":false}
//! ```

use pxb_core::{Category, Framing, Payload};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}: at_ms {at_ms} is earlier than the previous step ({previous})")]
    OutOfOrder { line: usize, at_ms: u64, previous: u64 },
}

/// One timed step
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Step {
    /// Offset from the start of the replay
    pub at_ms: u64,
    #[serde(flatten)]
    pub op: Op,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    /// Producer submits an event, optionally carrying an action
    Submit {
        category: Category,
        payload: Payload,
        #[serde(default)]
        action: Option<String>,
    },
    /// A consumer registers for a category
    Register {
        category: Category,
        #[serde(default)]
        display: bool,
        #[serde(default)]
        consumer: Option<String>,
        #[serde(default)]
        framing: Framing,
    },
}

/// Parse a scenario, skipping blank lines and `#` comments
pub fn parse(text: &str) -> Result<Vec<Step>, ScenarioError> {
    let mut steps: Vec<Step> = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let step: Step =
            serde_json::from_str(trimmed).map_err(|source| ScenarioError::Parse { line, source })?;
        if let Some(previous) = steps.last().map(|s| s.at_ms) {
            if step.at_ms < previous {
                return Err(ScenarioError::OutOfOrder {
                    line,
                    at_ms: step.at_ms,
                    previous,
                });
            }
        }
        steps.push(step);
    }
    Ok(steps)
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
