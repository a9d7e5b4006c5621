// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `workflow-begin` and `process-created`: the two events that feed
//! static-DAG shape into the engine before any task ever runs.

use crate::engine::CleanupEngine;
use crate::warnings::Warning;
use reap_adapters::{CacheSink, PathDeleter};
use reap_core::{Clock, DagVertex, ProcessConfig, ProcessState, StaticDag};

fn check_process_config(process: &str, config: &ProcessConfig) -> Vec<Warning> {
    let mut warnings = Vec::new();
    if config.reexports_input {
        warnings.push(Warning::ReexportsInput {
            process: process.to_string(),
        });
    }
    if let Some(mode) = &config.publish_mode {
        if mode.is_symlink_like() {
            warnings.push(Warning::SymlinkLikePublish {
                process: process.to_string(),
            });
        }
    }
    warnings
}

impl<D, K, C> CleanupEngine<D, K, C>
where
    D: PathDeleter,
    K: CacheSink,
    C: Clock,
{
    /// Seed `ProcessState` for every process vertex in the static DAG and
    /// derive each one's process-level consumer set. Returns every
    /// workflow-shape warning the static configuration already implies.
    pub fn workflow_begin(&self, dag: &dyn StaticDag) -> Vec<Warning> {
        let consumers_by_process = reap_core::compute_process_consumers(dag);
        let mut warnings = Vec::new();
        let mut state = self.state.lock();
        for vertex in dag.vertices() {
            let DagVertex::Process { name, config } = vertex else {
                continue;
            };
            let consumers = consumers_by_process.get(name).cloned().unwrap_or_default();
            state
                .processes
                .insert(name.clone(), ProcessState::new(name.clone(), consumers));
            for warning in check_process_config(name, config) {
                tracing::warn!(%warning, "workflow-shape warning at workflow-begin");
                warnings.push(warning);
            }
        }
        state.warnings.extend(warnings.clone());
        warnings
    }

    /// A process joined the workflow after `workflow-begin` (e.g. a
    /// dynamically-included module). Only the config-shape checks apply;
    /// the engine does not track a `ProcessState` for it until it appears
    /// in a task's `process` field, since it never contributes a task
    /// without one.
    pub fn process_created(&self, process: &str, config: &ProcessConfig) -> Vec<Warning> {
        let warnings = check_process_config(process, config);
        for warning in &warnings {
            tracing::warn!(%warning, "workflow-shape warning at process-created");
        }
        self.state.lock().warnings.extend(warnings.clone());
        warnings
    }
}

#[cfg(test)]
#[path = "workflow_tests.rs"]
mod tests;
