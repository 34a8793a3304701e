// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event payloads and their JSON mapping

use crate::category::Category;
use crate::proximity::{Beacon, Place, Proximity, Stamped, Zone};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors turning a payload into its consumer-facing JSON
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("cannot convert {kind} payload to a JSON object")]
    Unsupported { kind: &'static str },
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// What an event carries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Payload {
    Beacon(Beacon),
    Place(Place),
    Zone(Zone),
    /// A primitive string such as a URL or alert message
    Text(String),
    /// Pre-built structured data
    Raw(Value),
}

impl Payload {
    /// Beacon moved between distance bands
    pub fn proximity_change(
        beacon: &Beacon,
        prev: Proximity,
        cur: Proximity,
    ) -> Result<Self, PayloadError> {
        let mut fields = Map::new();
        fields.insert("beacon".to_string(), serde_json::to_value(beacon)?);
        fields.insert("prevProximity".to_string(), Value::String(prev.to_string()));
        fields.insert("curProximity".to_string(), Value::String(cur.to_string()));
        Ok(Payload::Raw(Value::Object(fields)))
    }

    /// Tag assignment requested by a campaign
    pub fn tag(name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert("tagName".to_string(), Value::String(name.into()));
        fields.insert("tagValue".to_string(), Value::String(value.into()));
        Payload::Raw(Value::Object(fields))
    }

    /// Registry of beacons loaded from the cloud or local cache
    pub fn beacon_list(beacons: &[Beacon]) -> Result<Self, PayloadError> {
        Ok(Payload::Raw(serde_json::to_value(beacons)?))
    }

    /// Short name of the variant, for logs
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Beacon(_) => "beacon",
            Payload::Place(_) => "place",
            Payload::Zone(_) => "zone",
            Payload::Text(_) => "text",
            Payload::Raw(value) => raw_kind(value),
        }
    }

    /// JSON handed to consumers
    ///
    /// Descriptors become tagged objects stamped with `timestamp`. Strings and
    /// arrays are keyed by the category name. Raw objects pass through.
    pub fn to_detail(&self, category: &Category, timestamp: i64) -> Result<Value, PayloadError> {
        match self {
            Payload::Beacon(b) => Ok(serde_json::to_value(Stamped::new("beacon", b, timestamp))?),
            Payload::Place(p) => Ok(serde_json::to_value(Stamped::new("place", p, timestamp))?),
            Payload::Zone(z) => Ok(serde_json::to_value(Stamped::new("zone", z, timestamp))?),
            Payload::Text(s) => Ok(keyed(category, Value::String(s.clone()))),
            Payload::Raw(Value::Object(map)) => Ok(Value::Object(map.clone())),
            Payload::Raw(value @ (Value::String(_) | Value::Array(_))) => {
                Ok(keyed(category, value.clone()))
            }
            Payload::Raw(other) => Err(PayloadError::Unsupported {
                kind: raw_kind(other),
            }),
        }
    }
}

fn keyed(category: &Category, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(category.as_str().to_string(), value);
    Value::Object(map)
}

fn raw_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
