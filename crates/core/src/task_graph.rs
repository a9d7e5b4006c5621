// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Append-only record of the dynamic task-level dataflow, consumed by the
//! cache layer and by resume/reporting tooling.

use crate::error::TaskGraphError;
use crate::id::ShortId;
use crate::task::{TaskDescriptor, TaskId};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;

/// One vertex of the task graph: everything known about a task at the
/// point it was added, plus its outputs once they become known.
#[derive(Debug, Clone)]
pub struct TaskVertex {
    pub index: usize,
    pub label: String,
    pub inputs: HashMap<String, PathBuf>,
    pub outputs: HashSet<PathBuf>,
}

#[derive(Default)]
struct Inner {
    vertices: HashMap<TaskId, TaskVertex>,
    order: Vec<TaskId>,
    reverse_index: HashMap<PathBuf, TaskId>,
}

/// The dynamic task-level dataflow graph.
///
/// All write operations are serialized by an internal mutex; reads may
/// observe any consistent snapshot but need not be linearized with
/// writers.
pub struct TaskGraph {
    inner: Mutex<Inner>,
}

impl Default for TaskGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskGraph {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Record a new vertex for `task`. Inputs are captured by value: later
    /// mutation of the descriptor's source map does not affect the
    /// recorded state, since `TaskDescriptor` is consumed here, not
    /// borrowed for the vertex's lifetime.
    pub fn add_task(&self, task: &TaskDescriptor) -> Result<(), TaskGraphError> {
        if task.id.as_str().is_empty() {
            return Err(TaskGraphError::EmptyTaskId);
        }
        let mut inner = self.inner.lock();
        let index = inner.order.len();
        let label = format!(
            "[{}/{}] {}",
            task.hash.short(2),
            task.hash.get(2..8).unwrap_or(task.hash.short(8)),
            task.name
        );
        let vertex = TaskVertex {
            index,
            label,
            inputs: task.inputs.clone(),
            outputs: HashSet::new(),
        };
        if inner.vertices.insert(task.id.clone(), vertex).is_none() {
            inner.order.push(task.id.clone());
        }
        Ok(())
    }

    /// Record `task`'s file-typed outputs and update the path -> producer
    /// reverse index. A path that was already registered to a different
    /// task has its producer overwritten -- the later registration wins --
    /// but this is logged as a workflow-shape warning since it almost
    /// always indicates two tasks declared the same output path.
    pub fn add_task_outputs(&self, task: &TaskDescriptor) -> Result<(), TaskGraphError> {
        if task.id.as_str().is_empty() {
            return Err(TaskGraphError::EmptyTaskId);
        }
        let outputs = task.output_paths();
        for path in &outputs {
            if path.as_os_str().is_empty() {
                return Err(TaskGraphError::EmptyPath);
            }
        }
        let mut inner = self.inner.lock();
        if !inner.vertices.contains_key(&task.id) {
            return Err(TaskGraphError::UnknownTask(task.id.as_str().to_string()));
        }
        for path in &outputs {
            if let Some(existing) = inner.reverse_index.get(path) {
                if existing != &task.id {
                    tracing::warn!(
                        path = %path.display(),
                        previous_task = %existing,
                        new_task = %task.id,
                        "output path registered to a different task than before; \
                         likely a workflow bug (two tasks declare the same output)"
                    );
                }
            }
            inner.reverse_index.insert(path.clone(), task.id.clone());
        }
        if let Some(vertex) = inner.vertices.get_mut(&task.id) {
            vertex.outputs = outputs;
        }
        Ok(())
    }

    /// The task that produced `path`, if known.
    pub fn producer_task(&self, path: &PathBuf) -> Option<TaskId> {
        self.inner.lock().reverse_index.get(path).cloned()
    }

    /// The full vertex of the task that produced `path`, if known.
    pub fn producer_vertex(&self, path: &PathBuf) -> Option<TaskVertex> {
        let inner = self.inner.lock();
        let task_id = inner.reverse_index.get(path)?;
        inner.vertices.get(task_id).cloned()
    }

    /// Snapshot of all vertices, in insertion order.
    pub fn vertices(&self) -> Vec<TaskVertex> {
        let inner = self.inner.lock();
        inner
            .order
            .iter()
            .filter_map(|id| inner.vertices.get(id).cloned())
            .collect()
    }
}

#[cfg(test)]
#[path = "task_graph_tests.rs"]
mod tests;
