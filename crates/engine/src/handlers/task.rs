// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `task-pending` and `task-complete`: the two events that grow the
//! engine's view of the dynamic task graph and, on success, hand it the
//! produced paths to track.

use crate::engine::CleanupEngine;
use crate::error::EngineError;
use reap_adapters::{CacheSink, PathDeleter};
use reap_core::{Clock, PathState, TaskDescriptor, TaskState};
use std::collections::HashSet;
use std::path::PathBuf;

impl<D, K, C> CleanupEngine<D, K, C>
where
    D: PathDeleter,
    K: CacheSink,
    C: Clock,
{
    /// Register a task about to run. Links the task as a consumer of
    /// every input path the engine already knows about, and as a
    /// consumer of that path's producing task.
    pub fn task_pending(&self, task: &TaskDescriptor) -> Result<(), EngineError> {
        if task.id.as_str().is_empty() {
            return Err(EngineError::EmptyTaskId);
        }

        let mut state = self.state.lock();
        for input_path in task.inputs.values() {
            if let Some(path_state) = state.paths.get_mut(input_path) {
                path_state.consumers.insert(task.id.clone());
                let producer = path_state.task.clone();
                if let Some(producer_state) = state.tasks.get_mut(&producer) {
                    producer_state.consumers.insert(task.id.clone());
                }
            }
        }

        state.task_hash.insert(task.id.clone(), task.hash.clone());
        state.tasks.insert(
            task.id.clone(),
            TaskState::new(task.id.clone(), task.process.clone(), task.work_dir.clone()),
        );
        Ok(())
    }

    /// Report a task's terminal outcome. On failure, the task is marked
    /// completed and contributes no outputs. On success, reconciles any
    /// early `file-published` notifications, runs a sweep, then starts
    /// tracking each declared output as a `PathState`.
    pub fn task_complete(&self, task: &TaskDescriptor) -> Result<(), EngineError> {
        if task.id.as_str().is_empty() {
            return Err(EngineError::EmptyTaskId);
        }

        if !task.success {
            let mut state = self.state.lock();
            let task_state = state
                .tasks
                .get_mut(&task.id)
                .ok_or_else(|| EngineError::UnknownTask(task.id.as_str().to_string()))?;
            task_state.completed = true;
            task_state.success = false;
            return Ok(());
        }

        let mut remaining_publish_outputs = task.publish_outputs();
        let mut early_published: HashSet<PathBuf> = HashSet::new();
        {
            let mut state = self.state.lock();
            if !state.tasks.contains_key(&task.id) {
                return Err(EngineError::UnknownTask(task.id.as_str().to_string()));
            }

            let matched: Vec<PathBuf> = remaining_publish_outputs
                .iter()
                .filter(|path| state.published_outputs.contains(*path))
                .cloned()
                .collect();
            for path in matched {
                remaining_publish_outputs.remove(&path);
                state.published_outputs.remove(&path);
                early_published.insert(path);
            }

            if let Some(task_state) = state.tasks.get_mut(&task.id) {
                task_state.publish_outputs = remaining_publish_outputs;
                task_state.completed = true;
                task_state.success = true;
            }
        }

        self.sweep();

        {
            let mut state = self.state.lock();
            for output in &task.outputs {
                let published_from_start =
                    output.publish_target.is_none() || early_published.contains(&output.path);
                state
                    .paths
                    .entry(output.path.clone())
                    .or_insert_with(|| {
                        PathState::new(output.path.clone(), task.id.clone(), published_from_start)
                    });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
