// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The `Task` handle the executor hands to the engine, and the mutable
//! `TaskState` the engine derives from it.

use crate::dag::PublishMode;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

crate::define_id! {
    /// Stable identity of one task (one execution of a process on a
    /// specific input binding).
    pub struct TaskId;
}

/// One declared output file of a task, tagged with the publish mode the
/// process configuration assigns it (absent when the output is never
/// published at all).
#[derive(Debug, Clone)]
pub struct TaskOutput {
    pub path: PathBuf,
    pub publish_target: Option<PublishMode>,
}

/// A read-only snapshot of everything the engine needs to know about one
/// task, handed in by the executor on `task-pending` and `task-complete`.
///
/// This is deliberately a plain value, not a trait object: the engine
/// only ever reads it, and ownership passes by value into the event
/// handler, so there is no indirection to model.
#[derive(Debug, Clone)]
pub struct TaskDescriptor {
    pub id: TaskId,
    /// Content hash used for cache keys and the TaskGraph display label.
    pub hash: String,
    /// Human-readable name, e.g. `"alignReads (sample1)"`.
    pub name: String,
    pub process: String,
    pub work_dir: PathBuf,
    pub inputs: HashMap<String, PathBuf>,
    pub outputs: Vec<TaskOutput>,
    pub success: bool,
}

impl TaskDescriptor {
    /// All declared output paths, file-typed only.
    pub fn output_paths(&self) -> HashSet<PathBuf> {
        self.outputs.iter().map(|o| o.path.clone()).collect()
    }

    /// The subset of outputs the publish subsystem is expected to emit.
    pub fn publish_outputs(&self) -> HashSet<PathBuf> {
        self.outputs
            .iter()
            .filter(|o| o.publish_target.is_some())
            .map(|o| o.path.clone())
            .collect()
    }
}

/// Engine-side mutable state for one task.
#[derive(Debug, Clone)]
pub struct TaskState {
    pub task_id: TaskId,
    pub process: String,
    pub work_dir: PathBuf,
    /// Downstream tasks that declared this task's outputs as an input.
    pub consumers: HashSet<TaskId>,
    /// Outputs still awaiting a `file-published` notification.
    pub publish_outputs: HashSet<PathBuf>,
    pub completed: bool,
    pub success: bool,
    pub deleted: bool,
}

impl TaskState {
    pub fn new(task_id: TaskId, process: String, work_dir: PathBuf) -> Self {
        Self {
            task_id,
            process,
            work_dir,
            consumers: HashSet::new(),
            publish_outputs: HashSet::new(),
            completed: false,
            success: false,
            deleted: false,
        }
    }
}

#[cfg(test)]
#[path = "task_tests.rs"]
mod tests;
