// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Action implementations

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeAction;

use pxb_core::Action;

/// Action backed by a closure
pub struct FnAction<F> {
    id: String,
    run: F,
}

impl<F> FnAction<F>
where
    F: Fn() -> bool + Send + Sync,
{
    pub fn new(id: impl Into<String>, run: F) -> Self {
        Self { id: id.into(), run }
    }
}

impl<F> Action for FnAction<F>
where
    F: Fn() -> bool + Send + Sync,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn fire(&self) -> bool {
        (self.run)()
    }
}
