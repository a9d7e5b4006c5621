// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `process-closed`: a process has finished emitting tasks. Closing the
//! last open consumer of a task's process is what lets that task's
//! working directory become deletable.

use crate::engine::CleanupEngine;
use crate::error::EngineError;
use reap_adapters::{CacheSink, PathDeleter};
use reap_core::Clock;

impl<D, K, C> CleanupEngine<D, K, C>
where
    D: PathDeleter,
    K: CacheSink,
    C: Clock,
{
    pub fn process_closed(&self, process: &str) -> Result<(), EngineError> {
        if process.is_empty() {
            return Err(EngineError::EmptyProcessName);
        }
        {
            let mut state = self.state.lock();
            let process_state = state
                .processes
                .get_mut(process)
                .ok_or_else(|| EngineError::UnknownProcess(process.to_string()))?;
            process_state.closed = true;
        }
        self.sweep();
        Ok(())
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
