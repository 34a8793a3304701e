// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Proximity descriptors reported by the detection engine
//!
//! Each descriptor serializes to a `type` tag, its identifying fields, and a
//! `timestamp` (epoch millis) taken at serialization time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance band of a ranged beacon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Proximity {
    #[default]
    Unknown,
    Immediate,
    Near,
    Far,
}

impl fmt::Display for Proximity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Proximity::Unknown => "Unknown",
            Proximity::Immediate => "Immediate",
            Proximity::Near => "Near",
            Proximity::Far => "Far",
        };
        f.write_str(name)
    }
}

/// A BLE beacon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beacon {
    pub id: String,
    pub uuid: String,
    pub major: u16,
    pub minor: u16,
    pub name: String,
    #[serde(default)]
    pub proximity: Proximity,
}

/// Circular geofence around a place
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoFence {
    pub lat: f64,
    pub lon: f64,
    pub accuracy: f64,
}

/// A geofenced place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub geofence: GeoFence,
}

/// A zone inside a place
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
}

/// Wire form of a descriptor: type tag, fields, timestamp
#[derive(Serialize)]
pub(crate) struct Stamped<'a, T: Serialize> {
    #[serde(rename = "type")]
    kind: &'static str,
    #[serde(flatten)]
    fields: &'a T,
    timestamp: i64,
}

impl<'a, T: Serialize> Stamped<'a, T> {
    pub(crate) fn new(kind: &'static str, fields: &'a T, timestamp: i64) -> Self {
        Self {
            kind,
            fields,
            timestamp,
        }
    }
}

#[cfg(test)]
#[path = "proximity_tests.rs"]
mod tests;
