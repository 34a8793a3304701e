// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event dispatch: buffering, drain passes, and the action-firing protocol
//!
//! Producers may start emitting before any consumer has registered. Events
//! are buffered until a consumer for their category shows up, they expire,
//! or the quiescence window closes; after that, submissions are delivered
//! immediately.
//!
//! All shared state lives behind one mutex. Consumers are never invoked
//! while it is held: events chosen for delivery move to an outbox, and a
//! single deliverer at a time empties it in order. A consumer that submits
//! or registers from inside its own delivery therefore appends to the outbox
//! instead of deadlocking.

use crate::config::BridgeConfig;
use crate::error::DeliveryError;
use crate::queue::{BridgeState, EventQueue};
use crate::registry::{ConsumerRegistry, Registration};
use crate::timer::ExpiryTimer;
use pxb_adapters::{Consumer, ConsumerError};
use pxb_core::{Category, Clock, Envelope, Event, EventId, Payload, PendingAction};
use std::collections::VecDeque;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// What happened to a submitted event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Buffered; the queue now owns the action
    Queued,
    /// Another delivery is in progress, on this thread or another, and will
    /// deliver this event in order; the consumer's answer is not reported
    Deferred,
    /// Delivered synchronously
    Delivered { consumed: bool },
    /// No consumer and nothing to fire
    Dropped,
}

impl Submission {
    /// Whether the bridge took responsibility for the event's side-effect
    ///
    /// When true the producer must not run its own default behavior.
    pub fn took_ownership(&self) -> bool {
        !matches!(self, Submission::Dropped)
    }
}

/// Result of one delivery attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// Consumer registered with `display`; the action is dropped
    Consumed,
    /// Consumer notified; the action fires
    Notified,
    /// No consumer registered
    Unclaimed,
    /// Delivery failed; treated as not consumed
    Failed,
}

impl Outcome {
    fn consumed(self) -> bool {
        self == Outcome::Consumed
    }

    fn into_submission(self, had_action: bool) -> Submission {
        match self {
            Outcome::Unclaimed if !had_action => Submission::Dropped,
            outcome => Submission::Delivered {
                consumed: outcome.consumed(),
            },
        }
    }
}

struct Shared {
    queue: EventQueue,
    registry: ConsumerRegistry,
    timer_armed: bool,
    /// Events chosen for delivery, in order
    outbox: VecDeque<Event>,
    /// Some thread is currently emptying the outbox
    delivering: bool,
}

impl Shared {
    /// Move ready events from the queue to the outbox; returns how many moved
    fn drain_ready(&mut self, now: Instant) -> usize {
        let ready = self.queue.take_ready(&self.registry, now);
        let count = ready.len();
        self.outbox.extend(ready);
        count
    }

    fn drain_all(&mut self) -> usize {
        let all = self.queue.take_all();
        let count = all.len();
        self.outbox.extend(all);
        count
    }

    /// Become the deliverer if there is work and nobody else is delivering
    fn claim_outbox(&mut self) -> bool {
        if self.delivering || self.outbox.is_empty() {
            return false;
        }
        self.delivering = true;
        true
    }
}

struct Inner<C, T> {
    shared: Mutex<Shared>,
    clock: C,
    timer: T,
    config: BridgeConfig,
    next_id: AtomicU64,
}

/// The event bridge between the detection engine and its consumers
///
/// Cheap to clone; clones share state. Construct one per process and hand it
/// to both the producer adapter and the registration surface.
pub struct Bridge<C, T> {
    inner: Arc<Inner<C, T>>,
}

impl<C, T> Clone for Bridge<C, T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Clock, T: ExpiryTimer> Bridge<C, T> {
    pub fn new(clock: C, timer: T) -> Self {
        Self::with_config(clock, timer, BridgeConfig::default())
    }

    pub fn with_config(clock: C, timer: T, config: BridgeConfig) -> Self {
        debug!(
            expiry_window_ms = config.expiry_window.as_millis() as u64,
            grace_ms = config.grace.as_millis() as u64,
            "bridge started, buffering"
        );
        Self {
            inner: Arc::new(Inner {
                shared: Mutex::new(Shared {
                    queue: EventQueue::new(),
                    registry: ConsumerRegistry::new(),
                    timer_armed: false,
                    outbox: VecDeque::new(),
                    delivering: false,
                }),
                clock,
                timer,
                config,
                next_id: AtomicU64::new(1),
            }),
        }
    }

    /// Submit one occurrence from the detection engine
    ///
    /// While buffering the event is queued and the producer must not fire
    /// the action itself. Afterwards it is delivered before returning,
    /// unless a delivery is already running, either further up this stack
    /// or on another thread. That deliverer takes the event instead.
    pub fn submit(
        &self,
        category: impl Into<Category>,
        payload: Payload,
        action: Option<PendingAction>,
    ) -> Submission {
        let now = self.inner.clock.now();
        let id = EventId(self.inner.next_id.fetch_add(1, Ordering::Relaxed));
        let event = Event::new(
            id,
            category.into(),
            payload,
            action,
            now,
            self.inner.config.expiry_window,
        );
        let had_action = event.has_action();

        let span = tracing::debug_span!("bridge.submit", event_id = %id, category = %event.category);
        let _guard = span.enter();

        let (state, arm, claimed) = {
            let mut shared = self.lock();
            let state = shared.queue.state();
            let mut arm = false;
            match state {
                BridgeState::Buffering => {
                    shared.queue.push(event);
                    let ready = shared.drain_ready(now);
                    debug!(ready, pending = shared.queue.len(), "queued while buffering");
                    arm = !shared.timer_armed;
                    shared.timer_armed = true;
                }
                BridgeState::Draining => {
                    let stragglers = shared.drain_all();
                    if stragglers > 0 {
                        debug!(stragglers, "flushing stragglers before delivery");
                    }
                    shared.outbox.push_back(event);
                }
            }
            (state, arm, shared.claim_outbox())
        };

        if arm {
            self.arm_timer();
        }

        let own = if claimed { self.run_outbox(Some(id)) } else { None };

        match (state, own) {
            (BridgeState::Buffering, _) => Submission::Queued,
            (BridgeState::Draining, None) => {
                debug!("delivery in progress elsewhere; deferred");
                Submission::Deferred
            }
            (BridgeState::Draining, Some(outcome)) => outcome.into_submission(had_action),
        }
    }

    /// Register `consumer` for `category`, replacing any earlier registration
    ///
    /// `display` is the consumer's standing answer for every delivery: true
    /// suppresses the default action, false lets it fire after notification.
    pub fn register(&self, category: impl Into<Category>, consumer: Arc<dyn Consumer>, display: bool) {
        self.install(Registration::new(category, consumer, display));
    }

    /// Register with full control over the registration
    ///
    /// While buffering, events already queued for the category are delivered
    /// before this returns.
    pub fn install(&self, registration: Registration) {
        let category = registration.category.clone();
        let consumer = Arc::clone(&registration.consumer);
        let shows = registration.display;
        if !category.is_known() {
            warn!(%category, "registering consumer for unknown category");
        }

        let now = self.inner.clock.now();
        let claimed = {
            let mut shared = self.lock();
            if let Some(previous) = shared.registry.register(registration) {
                debug!(%category, previous = previous.consumer.label(), "replaced registration");
            }
            if shared.queue.is_buffering() {
                let ready = shared.drain_ready(now);
                if ready > 0 {
                    debug!(%category, ready, "late registration releases queued events");
                }
            }
            shared.claim_outbox()
        };

        info!(%category, consumer = consumer.label(), display = shows, "registered");
        consumer.on_registered(&category);

        if claimed {
            self.run_outbox(None);
        }
    }

    pub fn state(&self) -> BridgeState {
        self.lock().queue.state()
    }

    /// Events buffered and not yet chosen for delivery
    pub fn pending_len(&self) -> usize {
        self.lock().queue.len()
    }

    pub fn is_timer_armed(&self) -> bool {
        self.lock().timer_armed
    }

    /// Categories with a registered consumer
    pub fn categories(&self) -> Vec<Category> {
        self.lock().registry.categories()
    }

    pub fn config(&self) -> BridgeConfig {
        self.inner.config
    }

    fn lock(&self) -> MutexGuard<'_, Shared> {
        self.inner.shared.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn arm_timer(&self) {
        let weak = Arc::downgrade(&self.inner);
        self.inner.timer.arm(
            self.inner.config.quiescence(),
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    Bridge { inner }.quiesce();
                }
            }),
        );
    }

    /// Close the quiescence window and flush everything still queued
    fn quiesce(&self) {
        let (flushed, claimed) = {
            let mut shared = self.lock();
            if !shared.queue.quiesce() {
                return;
            }
            let flushed = shared.drain_all();
            (flushed, shared.claim_outbox())
        };
        info!(flushed, "quiescence window closed, draining");
        if claimed {
            self.run_outbox(None);
        }
    }

    /// Deliver outbox events until it is empty; caller must hold the claim
    ///
    /// Returns the outcome for `own` if this call delivered it.
    fn run_outbox(&self, own: Option<EventId>) -> Option<Outcome> {
        let mut claim = OutboxClaim {
            shared: &self.inner.shared,
            held: true,
        };
        let mut own_outcome = None;
        loop {
            let next = {
                let mut shared = self.lock();
                match shared.outbox.pop_front() {
                    Some(event) => event,
                    None => {
                        shared.delivering = false;
                        claim.held = false;
                        break;
                    }
                }
            };
            let id = next.id;
            let outcome = self.deliver(next);
            if own == Some(id) {
                own_outcome = Some(outcome);
            }
        }
        own_outcome
    }

    /// Deliver one event and settle its action
    fn deliver(&self, event: Event) -> Outcome {
        let registration = self.lock().registry.lookup(&event.category).cloned();

        let span = tracing::debug_span!("bridge.deliver", event_id = %event.id, category = %event.category);
        let _guard = span.enter();

        let outcome = match registration {
            None => Outcome::Unclaimed,
            Some(registration) => match self.invoke(&registration, &event) {
                Ok(()) if registration.display => Outcome::Consumed,
                Ok(()) => Outcome::Notified,
                Err(e) => {
                    error!(
                        consumer = registration.consumer.label(),
                        payload = event.payload.kind(),
                        error = %e,
                        "delivery failed, default action proceeds"
                    );
                    Outcome::Failed
                }
            },
        };

        match (&event.action, outcome) {
            (Some(action), Outcome::Consumed) => {
                action.relinquish();
            }
            (Some(action), _) => {
                if outcome == Outcome::Unclaimed {
                    debug!(action_id = action.id(), "no consumer, firing default action");
                }
                action.fire();
            }
            (None, Outcome::Unclaimed) => {
                warn!("no consumer registered, event dropped");
            }
            (None, _) => {}
        }

        debug!(?outcome, "delivered");
        outcome
    }

    fn invoke(&self, registration: &Registration, event: &Event) -> Result<(), DeliveryError> {
        let detail = event
            .payload
            .to_detail(&event.category, self.inner.clock.epoch_millis())?;
        let envelope = Envelope::new(
            event.id,
            event.category.clone(),
            detail,
            registration.framing,
        );
        let delivered = panic::catch_unwind(AssertUnwindSafe(|| {
            registration.consumer.deliver(&envelope)
        }))
        .unwrap_or(Err(ConsumerError::Panicked));
        delivered?;
        Ok(())
    }
}

/// Releases the deliverer role if delivery unwinds
struct OutboxClaim<'a> {
    shared: &'a Mutex<Shared>,
    held: bool,
}

impl Drop for OutboxClaim<'_> {
    fn drop(&mut self) {
        if self.held {
            self.shared
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .delivering = false;
        }
    }
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
