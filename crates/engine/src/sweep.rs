// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The deletion predicates and the single-pass sweep. A sweep looks at
//! every tracked task once and every tracked path once; it is not a
//! fixed-point loop, because no single event can make more than one
//! generation of new deletions available.

use crate::engine::CleanupEngine;
use crate::state::State;
use reap_adapters::{CacheSink, FinalizeRecord, PathDeleter};
use reap_core::{Clock, TaskId};
use std::path::PathBuf;

fn process_consumers_closed(state: &State, process: &str) -> bool {
    match state.processes.get(process) {
        Some(p) => p
            .consumers
            .iter()
            .all(|c| state.processes.get(c).map(|cp| cp.closed).unwrap_or(false)),
        None => false,
    }
}

fn task_deletable(state: &State, id: &TaskId) -> bool {
    let Some(task) = state.tasks.get(id) else {
        return false;
    };
    if task.deleted || !task.completed {
        return false;
    }
    if !task.publish_outputs.is_empty() {
        return false;
    }
    if !process_consumers_closed(state, &task.process) {
        return false;
    }
    task.consumers
        .iter()
        .all(|c| state.tasks.get(c).map(|t| t.completed).unwrap_or(false))
}

fn path_deletable(state: &State, path: &PathBuf) -> bool {
    let Some(path_state) = state.paths.get(path) else {
        return false;
    };
    if path_state.deleted || !path_state.published {
        return false;
    }
    let Some(task) = state.tasks.get(&path_state.task) else {
        return false;
    };
    if !process_consumers_closed(state, &task.process) {
        return false;
    }
    path_state
        .consumers
        .iter()
        .all(|c| state.tasks.get(c).map(|t| t.completed).unwrap_or(false))
}

impl<D, K, C> CleanupEngine<D, K, C>
where
    D: PathDeleter,
    K: CacheSink,
    C: Clock,
{
    /// Run one sweep pass: every deletable task's working directory, then
    /// every deletable path not already covered by a task deletion.
    pub(crate) fn sweep(&self) {
        let mut state = self.state.lock();

        let deletable_tasks: Vec<TaskId> = state
            .tasks
            .keys()
            .filter(|id| task_deletable(&state, id))
            .cloned()
            .collect();
        for id in deletable_tasks {
            self.delete_task(&mut state, &id);
        }

        let deletable_paths: Vec<PathBuf> = state
            .paths
            .keys()
            .filter(|p| path_deletable(&state, p))
            .cloned()
            .collect();
        for path in deletable_paths {
            self.delete_path(&mut state, &path);
        }
    }

    fn delete_task(&self, state: &mut State, id: &TaskId) {
        let Some(task) = state.tasks.get(id).cloned() else {
            return;
        };
        match self.deleter.delete(&task.work_dir) {
            Ok(()) => {
                if let Some(t) = state.tasks.get_mut(id) {
                    t.deleted = true;
                }
                let consumer_hashes: Vec<String> = task
                    .consumers
                    .iter()
                    .filter(|c| state.tasks.get(*c).map(|t| t.success).unwrap_or(false))
                    .filter_map(|c| state.task_hash.get(c).cloned())
                    .collect();
                let task_hash = state.task_hash.get(id).cloned().unwrap_or_default();
                self.cache.finalize_async(FinalizeRecord {
                    task_hash,
                    consumer_hashes,
                });
                tracing::debug!(task_id = %id, "deleted task working directory");
            }
            Err(error) => {
                tracing::warn!(
                    task_id = %id,
                    %error,
                    "failed to delete task working directory; will retry on a later sweep"
                );
            }
        }
    }

    fn delete_path(&self, state: &mut State, path: &PathBuf) {
        let Some(path_state) = state.paths.get(path).cloned() else {
            return;
        };
        let producer_deleted = state
            .tasks
            .get(&path_state.task)
            .map(|t| t.deleted)
            .unwrap_or(false);
        if producer_deleted {
            if let Some(p) = state.paths.get_mut(path) {
                p.deleted = true;
            }
            return;
        }
        match self.deleter.delete(path) {
            Ok(()) => {
                if let Some(p) = state.paths.get_mut(path) {
                    p.deleted = true;
                }
                tracing::debug!(path = %path.display(), "deleted intermediate file");
            }
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    %error,
                    "failed to delete intermediate file; will retry on a later sweep"
                );
            }
        }
    }
}

#[cfg(test)]
#[path = "sweep_tests.rs"]
mod tests;
