// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    enter_beacon = { ENTER_BEACON, "moca.enterbeacon" },
    proximity_change = { BEACON_PROXIMITY_CHANGE, "moca.beaconproximitychange" },
    exit_zone = { EXIT_ZONE, "moca.exitzone" },
    custom_action = { CUSTOM_ACTION, "moca.customaction" },
    beacons_loaded = { BEACONS_LOADED, "moca.dataready" },
)]
fn dom_event_names(category: &str, expected: &str) {
    assert_eq!(Category::from(category).dom_event_name(), expected);
}

#[test]
fn all_constants_are_known() {
    for name in KNOWN {
        assert!(Category::from(name).is_known(), "{} should be known", name);
    }
}

#[test]
fn unknown_category_is_not_known() {
    assert!(!Category::from("enterGalaxy").is_known());
    // Matching is case sensitive
    assert!(!Category::from("enterbeacon").is_known());
}

#[test]
fn category_serializes_as_plain_string() {
    let json = serde_json::to_string(&Category::from(OPEN_URL)).unwrap();
    assert_eq!(json, "\"openUrl\"");
}
