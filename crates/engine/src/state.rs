// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The three state maps `CleanupEngine` mutates under its single mutex,
//! plus the early-publication reconciliation set.

use crate::warnings::Warning;
use reap_core::{PathState, ProcessState, TaskId, TaskState};
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

#[derive(Default)]
pub(crate) struct State {
    pub processes: HashMap<String, ProcessState>,
    pub tasks: HashMap<TaskId, TaskState>,
    pub paths: HashMap<PathBuf, PathState>,
    /// `file-published` notifications that arrived before their producing
    /// task reported `task-complete`.
    pub published_outputs: HashSet<PathBuf>,
    /// Content hash of each task, kept alongside `TaskState` so delete
    /// actions can build cache-finalize records without a second lookup.
    pub task_hash: HashMap<TaskId, String>,
    pub warnings: Vec<Warning>,
}
