// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake cache sink for testing.
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{CacheSink, FinalizeRecord};
use parking_lot::Mutex;
use std::sync::Arc;

/// Alias kept for call-site readability in tests.
pub type FinalizeCall = FinalizeRecord;

/// Records every finalize record for test assertions.
#[derive(Clone, Default)]
pub struct FakeCacheSink {
    calls: Arc<Mutex<Vec<FinalizeRecord>>>,
}

impl FakeCacheSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<FinalizeRecord> {
        self.calls.lock().clone()
    }
}

impl CacheSink for FakeCacheSink {
    fn finalize_async(&self, record: FinalizeRecord) {
        self.calls.lock().push(record);
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
