// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use pxb_adapters::FakeConsumer;

fn registration(category: &str, label: &str, display: bool) -> Registration {
    Registration::new(category, Arc::new(FakeConsumer::new(label)), display)
}

#[test]
fn lookup_missing_category_is_none() {
    let registry = ConsumerRegistry::new();
    assert!(registry.lookup(&Category::from("enterBeacon")).is_none());
    assert!(registry.is_empty());
}

#[test]
fn register_then_lookup() {
    let mut registry = ConsumerRegistry::new();
    assert!(registry
        .register(registration("enterBeacon", "app", true))
        .is_none());

    let found = registry.lookup(&Category::from("enterBeacon")).unwrap();
    assert_eq!(found.consumer.label(), "app");
    assert!(found.display);
    assert_eq!(found.framing, Framing::Detail);
}

#[test]
fn later_registration_replaces_earlier() {
    let mut registry = ConsumerRegistry::new();
    registry.register(registration("exitZone", "first", false));

    let replaced = registry
        .register(registration("exitZone", "second", true))
        .unwrap();

    assert_eq!(replaced.consumer.label(), "first");
    assert_eq!(registry.len(), 1);
    let current = registry.lookup(&Category::from("exitZone")).unwrap();
    assert_eq!(current.consumer.label(), "second");
    assert!(current.display);
}

#[test]
fn categories_are_sorted() {
    let mut registry = ConsumerRegistry::new();
    registry.register(registration("openUrl", "a", false));
    registry.register(registration("enterBeacon", "b", false));
    registry.register(registration("displayAlert", "c", false));

    assert_eq!(
        registry.categories(),
        vec![
            Category::from("displayAlert"),
            Category::from("enterBeacon"),
            Category::from("openUrl"),
        ]
    );
}

#[test]
fn framing_can_be_overridden() {
    let reg = registration("openUrl", "a", false).with_framing(Framing::Bare);
    assert_eq!(reg.framing, Framing::Bare);
}
