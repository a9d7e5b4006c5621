// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The static, compile-time process graph and the publication-mode value
//! it carries on each process's file outputs.

use std::collections::{HashMap, HashSet, VecDeque};

/// Publication mode for a process's output parameter.
///
/// Only three values are meaningful to eager cleanup: each one means the
/// publish step hands out a reference to the working-directory file
/// instead of an independent copy, so deleting the working directory
/// would silently break the published artifact. Every other mode is an
/// opaque value the engine never inspects beyond "not one of these three".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishMode {
    CopyNoFollow,
    RelativeLink,
    SymbolicLink,
    Other(String),
}

impl PublishMode {
    /// True for the three modes that are incompatible with eager deletion
    /// of the task's working directory.
    pub fn is_symlink_like(&self) -> bool {
        matches!(
            self,
            PublishMode::CopyNoFollow | PublishMode::RelativeLink | PublishMode::SymbolicLink
        )
    }
}

/// The parts of a process's configuration eager cleanup cares about.
#[derive(Debug, Clone, Default)]
pub struct ProcessConfig {
    /// True when a declared file-output parameter re-exports one of the
    /// process's own inputs verbatim (same path in and out).
    pub reexports_input: bool,
    /// Publish mode of the process's file outputs, if it publishes at all.
    pub publish_mode: Option<PublishMode>,
}

/// A node of the static workflow graph.
#[derive(Debug, Clone)]
pub enum DagVertex {
    /// A workflow process: spawns tasks, is a terminal point for the
    /// consumer-derivation walk.
    Process { name: String, config: ProcessConfig },
    /// A transparent routing node (e.g. a channel operator): never
    /// spawns tasks, never terminates the consumer-derivation walk.
    Operator { name: String },
}

impl DagVertex {
    pub fn name(&self) -> &str {
        match self {
            DagVertex::Process { name, .. } => name,
            DagVertex::Operator { name } => name,
        }
    }

    pub fn is_process(&self) -> bool {
        matches!(self, DagVertex::Process { .. })
    }
}

/// A directed edge between two vertices, named by vertex name.
#[derive(Debug, Clone)]
pub struct DagEdge {
    pub from: String,
    pub to: String,
}

/// Read-only access to the compile-time workflow graph.
pub trait StaticDag {
    fn vertices(&self) -> &[DagVertex];
    fn edges(&self) -> &[DagEdge];
}

/// An in-memory static DAG, built once at workflow start.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStaticDag {
    vertices: Vec<DagVertex>,
    edges: Vec<DagEdge>,
}

impl InMemoryStaticDag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_process(mut self, name: impl Into<String>, config: ProcessConfig) -> Self {
        self.vertices.push(DagVertex::Process {
            name: name.into(),
            config,
        });
        self
    }

    pub fn with_operator(mut self, name: impl Into<String>) -> Self {
        self.vertices.push(DagVertex::Operator { name: name.into() });
        self
    }

    pub fn with_edge(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.edges.push(DagEdge {
            from: from.into(),
            to: to.into(),
        });
        self
    }
}

impl StaticDag for InMemoryStaticDag {
    fn vertices(&self) -> &[DagVertex] {
        &self.vertices
    }

    fn edges(&self) -> &[DagEdge] {
        &self.edges
    }
}

/// For every process vertex in `dag`, compute its process-level consumer
/// set: the processes directly reachable by walking forward edges,
/// treating operator vertices as transparent transit points and process
/// vertices as terminal for the walk (we never walk past a downstream
/// process to find *its* consumers here -- each process's own
/// `workflow_begin` call derives that independently).
///
/// A process with no downstream process consumers gets a set containing
/// only itself, so "every process consumer closed" is trivially satisfied
/// once the process itself closes.
pub fn compute_process_consumers(dag: &dyn StaticDag) -> HashMap<String, HashSet<String>> {
    let mut forward: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in dag.edges() {
        forward
            .entry(edge.from.as_str())
            .or_default()
            .push(edge.to.as_str());
    }
    let vertex_by_name: HashMap<&str, &DagVertex> =
        dag.vertices().iter().map(|v| (v.name(), v)).collect();

    let mut result = HashMap::new();
    for vertex in dag.vertices() {
        if !vertex.is_process() {
            continue;
        }
        let mut consumers = HashSet::new();
        let mut queue: VecDeque<&str> = forward.get(vertex.name()).cloned().unwrap_or_default().into();
        let mut visited: HashSet<&str> = HashSet::new();
        while let Some(next) = queue.pop_front() {
            if !visited.insert(next) {
                continue;
            }
            match vertex_by_name.get(next) {
                Some(DagVertex::Process { name, .. }) => {
                    consumers.insert(name.clone());
                }
                Some(DagVertex::Operator { .. }) => {
                    for downstream in forward.get(next).cloned().unwrap_or_default() {
                        queue.push_back(downstream);
                    }
                }
                None => {}
            }
        }
        if consumers.is_empty() {
            consumers.insert(vertex.name().to_string());
        }
        result.insert(vertex.name().to_string(), consumers);
    }
    result
}

#[cfg(test)]
#[path = "dag_tests.rs"]
mod tests;
