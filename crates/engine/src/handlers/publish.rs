// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `file-published`: the publish subsystem finished copying or linking
//! one output out of the working directory. May arrive before the
//! producing task's `task-complete`, in which case it is only recorded
//! for later reconciliation.

use crate::engine::CleanupEngine;
use crate::error::EngineError;
use reap_adapters::{CacheSink, PathDeleter};
use reap_core::Clock;
use std::path::Path;

impl<D, K, C> CleanupEngine<D, K, C>
where
    D: PathDeleter,
    K: CacheSink,
    C: Clock,
{
    /// `destination` is the user-visible published location; the engine
    /// never tracks it, since only `source` (the working-directory path)
    /// appears in `PathState`.
    pub fn file_published(&self, _destination: &Path, source: &Path) -> Result<(), EngineError> {
        if source.as_os_str().is_empty() {
            return Err(EngineError::EmptyPath);
        }

        let mut known = false;
        {
            let mut state = self.state.lock();
            if let Some(path_state) = state.paths.get_mut(source) {
                path_state.published = true;
                let producer = path_state.task.clone();
                if let Some(task_state) = state.tasks.get_mut(&producer) {
                    task_state.publish_outputs.remove(source);
                }
                known = true;
            } else {
                state.published_outputs.insert(source.to_path_buf());
            }
        }

        if known {
            self.sweep();
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "publish_tests.rs"]
mod tests;
