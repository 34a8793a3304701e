// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Producer adapter for the detection engine
//!
//! The engine calls one listener method per occurrence. Each method maps to
//! a category and payload and submits it to the bridge. Action methods
//! return whether the bridge took ownership; when they return true the
//! engine must not run its own default behavior.

use crate::dispatcher::{Bridge, Submission};
use crate::timer::ExpiryTimer;
use pxb_core::category::{
    ADD_PASSBOOK, ADD_TAG, BEACONS_LOADED, BEACON_PROXIMITY_CHANGE, CUSTOM_ACTION, DISPLAY_ALERT,
    ENTER_BEACON, ENTER_PLACE, ENTER_ZONE, EXIT_BEACON, EXIT_PLACE, EXIT_ZONE, OPEN_URL,
    PLAY_SOUND, PLAY_VIDEO, SHOW_EMBEDDED_HTML, SHOW_IMAGE,
};
use pxb_core::{Action, Beacon, Clock, Payload, PendingAction, Place, Proximity, Zone};
use std::sync::Arc;

/// Listener surface the detection engine reports to
#[derive(Clone)]
pub struct ProximityFeed<C, T> {
    bridge: Bridge<C, T>,
}

impl<C: Clock, T: ExpiryTimer> ProximityFeed<C, T> {
    pub fn new(bridge: Bridge<C, T>) -> Self {
        Self { bridge }
    }

    pub fn bridge(&self) -> &Bridge<C, T> {
        &self.bridge
    }

    pub fn did_enter_range(&self, beacon: &Beacon, proximity: Proximity) -> Submission {
        let beacon = Beacon {
            proximity,
            ..beacon.clone()
        };
        self.bridge.submit(ENTER_BEACON, Payload::Beacon(beacon), None)
    }

    pub fn did_exit_range(&self, beacon: &Beacon) -> Submission {
        self.bridge
            .submit(EXIT_BEACON, Payload::Beacon(beacon.clone()), None)
    }

    pub fn did_beacon_proximity_change(
        &self,
        beacon: &Beacon,
        prev: Proximity,
        cur: Proximity,
    ) -> Submission {
        match Payload::proximity_change(beacon, prev, cur) {
            Ok(payload) => self.bridge.submit(BEACON_PROXIMITY_CHANGE, payload, None),
            Err(e) => {
                tracing::error!(
                    beacon = %beacon.id,
                    error = %e,
                    "cannot serialize proximity change"
                );
                Submission::Dropped
            }
        }
    }

    pub fn did_enter_place(&self, place: &Place) -> Submission {
        self.bridge
            .submit(ENTER_PLACE, Payload::Place(place.clone()), None)
    }

    pub fn did_exit_place(&self, place: &Place) -> Submission {
        self.bridge
            .submit(EXIT_PLACE, Payload::Place(place.clone()), None)
    }

    pub fn did_enter_zone(&self, zone: &Zone) -> Submission {
        self.bridge
            .submit(ENTER_ZONE, Payload::Zone(zone.clone()), None)
    }

    pub fn did_exit_zone(&self, zone: &Zone) -> Submission {
        self.bridge
            .submit(EXIT_ZONE, Payload::Zone(zone.clone()), None)
    }

    /// Beacon registry finished loading
    pub fn did_load_beacons(&self, beacons: &[Beacon]) -> Submission {
        match Payload::beacon_list(beacons) {
            Ok(payload) => self.bridge.submit(BEACONS_LOADED, payload, None),
            Err(e) => {
                tracing::error!(count = beacons.len(), error = %e, "cannot serialize beacon list");
                Submission::Dropped
            }
        }
    }

    pub fn display_alert(&self, action: Arc<dyn Action>, message: &str) -> bool {
        self.act(DISPLAY_ALERT, Payload::Text(message.to_string()), action)
    }

    pub fn open_url(&self, action: Arc<dyn Action>, url: &str) -> bool {
        self.act(OPEN_URL, Payload::Text(url.to_string()), action)
    }

    pub fn show_html(&self, action: Arc<dyn Action>, html: &str) -> bool {
        self.act(SHOW_EMBEDDED_HTML, Payload::Text(html.to_string()), action)
    }

    pub fn play_video(&self, action: Arc<dyn Action>, url: &str) -> bool {
        self.act(PLAY_VIDEO, Payload::Text(url.to_string()), action)
    }

    pub fn show_image(&self, action: Arc<dyn Action>, url: &str) -> bool {
        self.act(SHOW_IMAGE, Payload::Text(url.to_string()), action)
    }

    pub fn add_passbook(&self, action: Arc<dyn Action>, url: &str) -> bool {
        self.act(ADD_PASSBOOK, Payload::Text(url.to_string()), action)
    }

    pub fn add_tag(&self, action: Arc<dyn Action>, name: &str, value: &str) -> bool {
        self.act(ADD_TAG, Payload::tag(name, value), action)
    }

    pub fn play_sound(&self, action: Arc<dyn Action>, url: &str) -> bool {
        self.act(PLAY_SOUND, Payload::Text(url.to_string()), action)
    }

    pub fn custom_action(&self, action: Arc<dyn Action>, argument: &str) -> bool {
        self.act(CUSTOM_ACTION, Payload::Text(argument.to_string()), action)
    }

    /// Custom triggers are left to the engine
    pub fn handle_custom_trigger(&self, _trigger: &str) -> bool {
        false
    }

    fn act(&self, category: &str, payload: Payload, action: Arc<dyn Action>) -> bool {
        self.bridge
            .submit(category, payload, Some(PendingAction::new(action)))
            .took_ownership()
    }
}

#[cfg(test)]
#[path = "feed_tests.rs"]
mod tests;
