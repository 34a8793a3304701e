// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Category to consumer mapping

use pxb_adapters::Consumer;
use pxb_core::{Category, Framing};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A consumer registered for one category
#[derive(Clone)]
pub struct Registration {
    pub category: Category,
    pub consumer: Arc<dyn Consumer>,
    /// True when the consumer displays/handles events itself, suppressing
    /// the default action; false when it only wants to be notified
    pub display: bool,
    pub framing: Framing,
}

impl Registration {
    pub fn new(category: impl Into<Category>, consumer: Arc<dyn Consumer>, display: bool) -> Self {
        Self {
            category: category.into(),
            consumer,
            display,
            framing: Framing::default(),
        }
    }

    pub fn with_framing(self, framing: Framing) -> Self {
        Self { framing, ..self }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("category", &self.category)
            .field("consumer", &self.consumer.label())
            .field("display", &self.display)
            .field("framing", &self.framing)
            .finish()
    }
}

/// At most one registration per category; the last one wins
///
/// Not synchronized on its own: the bridge keeps it behind the same lock as
/// the pending queue.
#[derive(Debug, Default, Clone)]
pub struct ConsumerRegistry {
    entries: HashMap<Category, Registration>,
}

impl ConsumerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace; returns the registration that was replaced
    pub fn register(&mut self, registration: Registration) -> Option<Registration> {
        self.entries
            .insert(registration.category.clone(), registration)
    }

    pub fn lookup(&self, category: &Category) -> Option<&Registration> {
        self.entries.get(category)
    }

    pub fn contains(&self, category: &Category) -> bool {
        self.entries.contains_key(category)
    }

    /// Registered categories, sorted
    pub fn categories(&self) -> Vec<Category> {
        let mut categories: Vec<_> = self.entries.keys().cloned().collect();
        categories.sort();
        categories
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
