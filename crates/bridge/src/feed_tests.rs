// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::timer::ManualTimer;
use pxb_adapters::{Consumer, FakeAction, FakeConsumer};
use pxb_core::{FakeClock, GeoFence};
use serde_json::json;
use yare::parameterized;

fn feed() -> (ProximityFeed<FakeClock, ManualTimer>, ManualTimer) {
    let timer = ManualTimer::new();
    let bridge = Bridge::new(FakeClock::new(), timer.clone());
    (ProximityFeed::new(bridge), timer)
}

fn listen(feed: &ProximityFeed<FakeClock, ManualTimer>, category: &str) -> FakeConsumer {
    let fake = FakeConsumer::new(category);
    let shared: Arc<dyn Consumer> = Arc::new(fake.clone());
    feed.bridge().register(category, shared, false);
    fake
}

fn beacon() -> Beacon {
    Beacon {
        id: "b-1".to_string(),
        uuid: "f7826da6-4fa2-4e98-8024-bc5b71e0893e".to_string(),
        major: 1,
        minor: 7,
        name: "Entrance".to_string(),
        proximity: Proximity::Unknown,
    }
}

#[test]
fn enter_range_stamps_reported_proximity() {
    let (feed, _timer) = feed();
    let consumer = listen(&feed, ENTER_BEACON);

    feed.did_enter_range(&beacon(), Proximity::Near);

    let detail = &consumer.received()[0].detail;
    assert_eq!(detail["type"], "beacon");
    assert_eq!(detail["proximity"], "Near");
    assert_eq!(detail["minor"], 7);
}

#[test]
fn proximity_change_carries_both_bands() {
    let (feed, _timer) = feed();
    let consumer = listen(&feed, BEACON_PROXIMITY_CHANGE);

    feed.did_beacon_proximity_change(&beacon(), Proximity::Far, Proximity::Immediate);

    let detail = &consumer.received()[0].detail;
    assert_eq!(detail["prevProximity"], "Far");
    assert_eq!(detail["curProximity"], "Immediate");
    assert_eq!(detail["beacon"]["id"], "b-1");
}

#[test]
fn place_and_zone_events_use_their_categories() {
    let (feed, _timer) = feed();
    let places = listen(&feed, EXIT_PLACE);
    let zones = listen(&feed, ENTER_ZONE);
    let place = Place {
        id: "p-1".to_string(),
        name: "Store".to_string(),
        geofence: GeoFence {
            lat: 48.85,
            lon: 2.35,
            accuracy: 25.0,
        },
    };

    feed.did_exit_place(&place);
    feed.did_enter_zone(&Zone {
        id: "z-1".to_string(),
        name: "Checkout".to_string(),
    });

    assert_eq!(places.received()[0].detail["type"], "place");
    assert_eq!(places.received()[0].detail["geofence"]["accuracy"], 25.0);
    assert_eq!(zones.received()[0].detail["name"], "Checkout");
}

#[test]
fn loaded_beacons_are_keyed_by_category() {
    let (feed, _timer) = feed();
    let consumer = listen(&feed, BEACONS_LOADED);

    feed.did_load_beacons(&[beacon()]);

    let envelope = &consumer.received()[0];
    assert_eq!(envelope.name(), "moca.dataready");
    assert_eq!(envelope.detail[BEACONS_LOADED][0]["id"], "b-1");
}

#[parameterized(
    alert = { DISPLAY_ALERT },
    url = { OPEN_URL },
    html = { SHOW_EMBEDDED_HTML },
    video = { PLAY_VIDEO },
    image = { SHOW_IMAGE },
    passbook = { ADD_PASSBOOK },
    sound = { PLAY_SOUND },
    custom = { CUSTOM_ACTION },
)]
fn text_actions_are_owned_while_buffering(category: &str) {
    let (feed, _timer) = feed();
    let action = FakeAction::new("A");
    let native: Arc<dyn Action> = action.clone();

    let owned = match category {
        DISPLAY_ALERT => feed.display_alert(native, "hello"),
        OPEN_URL => feed.open_url(native, "hello"),
        SHOW_EMBEDDED_HTML => feed.show_html(native, "hello"),
        PLAY_VIDEO => feed.play_video(native, "hello"),
        SHOW_IMAGE => feed.show_image(native, "hello"),
        ADD_PASSBOOK => feed.add_passbook(native, "hello"),
        PLAY_SOUND => feed.play_sound(native, "hello"),
        _ => feed.custom_action(native, "hello"),
    };

    assert!(owned);
    assert_eq!(action.fire_count(), 0);
    assert_eq!(feed.bridge().pending_len(), 1);

    let consumer = listen(&feed, category);
    assert_eq!(consumer.received()[0].detail, json!({ category: "hello" }));
    assert_eq!(action.fire_count(), 1);
}

#[test]
fn add_tag_sends_name_and_value() {
    let (feed, _timer) = feed();
    let consumer = listen(&feed, ADD_TAG);

    assert!(feed.add_tag(FakeAction::new("T"), "segment", "gold"));

    assert_eq!(
        consumer.received()[0].detail,
        json!({"tagName": "segment", "tagValue": "gold"})
    );
}

#[test]
fn action_after_quiescence_without_consumer_is_still_owned() {
    let (feed, timer) = feed();
    feed.did_exit_zone(&Zone {
        id: "z".to_string(),
        name: "z".to_string(),
    });
    timer.fire();
    let action = FakeAction::new("A");

    assert!(feed.open_url(action.clone(), "https://x"));
    assert_eq!(action.fire_count(), 1);
}

#[test]
fn event_after_quiescence_without_consumer_is_dropped() {
    let (feed, timer) = feed();
    feed.did_exit_range(&beacon());
    timer.fire();

    assert_eq!(feed.did_exit_range(&beacon()), Submission::Dropped);
}

#[test]
fn custom_triggers_are_not_handled() {
    let (feed, _timer) = feed();
    assert!(!feed.handle_custom_trigger("anything"));
    assert_eq!(feed.bridge().pending_len(), 0);
}
