// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event categories shared between producers and consumer registrations

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an occurrence kind, e.g. `enterBeacon` or `displayAlert`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

// Proximity events
pub const ENTER_BEACON: &str = "enterBeacon";
pub const EXIT_BEACON: &str = "exitBeacon";
pub const BEACON_PROXIMITY_CHANGE: &str = "beaconProximityChange";
pub const ENTER_PLACE: &str = "enterPlace";
pub const EXIT_PLACE: &str = "exitPlace";
pub const ENTER_ZONE: &str = "enterZone";
pub const EXIT_ZONE: &str = "exitZone";
pub const BEACONS_LOADED: &str = "didLoadedBeaconsData";

// Action triggers
pub const DISPLAY_ALERT: &str = "displayAlert";
pub const OPEN_URL: &str = "openUrl";
pub const SHOW_EMBEDDED_HTML: &str = "showEmbeddedHtml";
pub const PLAY_VIDEO: &str = "playVideo";
pub const SHOW_IMAGE: &str = "showImage";
pub const ADD_PASSBOOK: &str = "addPassbook";
pub const ADD_TAG: &str = "addTag";
pub const PLAY_SOUND: &str = "playSound";
pub const CUSTOM_ACTION: &str = "customAction";

/// Every category the detection engine is known to emit
pub const KNOWN: [&str; 17] = [
    ENTER_BEACON,
    EXIT_BEACON,
    BEACON_PROXIMITY_CHANGE,
    ENTER_PLACE,
    EXIT_PLACE,
    ENTER_ZONE,
    EXIT_ZONE,
    BEACONS_LOADED,
    DISPLAY_ALERT,
    OPEN_URL,
    SHOW_EMBEDDED_HTML,
    PLAY_VIDEO,
    SHOW_IMAGE,
    ADD_PASSBOOK,
    ADD_TAG,
    PLAY_SOUND,
    CUSTOM_ACTION,
];

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the detection engine ever emits this category
    pub fn is_known(&self) -> bool {
        KNOWN.contains(&self.0.as_str())
    }

    /// Name of the event consumers listen for, e.g. `moca.enterbeacon`
    pub fn dom_event_name(&self) -> String {
        match self.0.as_str() {
            BEACONS_LOADED => "moca.dataready".to_string(),
            other => format!("moca.{}", other.to_lowercase()),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[cfg(test)]
#[path = "category_tests.rs"]
mod tests;
