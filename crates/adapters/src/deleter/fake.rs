// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake `PathDeleter` for testing.
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{DeleteError, PathDeleter};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One recorded call to `delete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteCall {
    pub path: PathBuf,
}

struct FakeState {
    calls: Vec<DeleteCall>,
    /// Paths that should fail the next N delete attempts before succeeding.
    fail_remaining: HashMap<PathBuf, u32>,
}

/// Records every delete call; can be configured to fail a specific path a
/// fixed number of times before succeeding, to exercise the engine's
/// re-sweep-retries-on-a-later-event behavior.
#[derive(Clone)]
pub struct FakeDeleter {
    inner: Arc<Mutex<FakeState>>,
}

impl Default for FakeDeleter {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeState {
                calls: Vec::new(),
                fail_remaining: HashMap::new(),
            })),
        }
    }
}

impl FakeDeleter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next `times` delete attempts against `path` fail.
    pub fn fail_next(&self, path: impl Into<PathBuf>, times: u32) {
        self.inner
            .lock()
            .fail_remaining
            .insert(path.into(), times);
    }

    pub fn calls(&self) -> Vec<DeleteCall> {
        self.inner.lock().calls.clone()
    }

    pub fn call_count(&self, path: impl AsRef<Path>) -> usize {
        self.calls()
            .iter()
            .filter(|c| c.path == path.as_ref())
            .count()
    }
}

impl PathDeleter for FakeDeleter {
    fn delete(&self, path: &Path) -> Result<(), DeleteError> {
        let mut state = self.inner.lock();
        state.calls.push(DeleteCall {
            path: path.to_path_buf(),
        });
        if let Some(remaining) = state.fail_remaining.get_mut(path) {
            if *remaining > 0 {
                *remaining -= 1;
                return Err(DeleteError::Io {
                    path: path.display().to_string(),
                    source: std::io::Error::other("injected failure"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
