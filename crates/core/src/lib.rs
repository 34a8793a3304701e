// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! pxb-core: data model for the proximity event bridge
//!
//! This crate provides:
//! - Proximity descriptors and the tagged `Payload` they travel in
//! - `Event`, the unit buffered and delivered by the bridge
//! - `Action` and the at-most-once `PendingAction` guard
//! - Clock abstraction for deterministic expiry in tests

pub mod action;
pub mod category;
pub mod clock;
pub mod envelope;
pub mod event;
pub mod payload;
pub mod proximity;

pub use action::{Action, ActionState, PendingAction};
pub use category::Category;
pub use clock::{Clock, FakeClock, SystemClock};
pub use envelope::{Envelope, Framing};
pub use event::{Event, EventId};
pub use payload::{Payload, PayloadError};
pub use proximity::{Beacon, GeoFence, Place, Proximity, Zone};
