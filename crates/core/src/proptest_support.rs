// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test-fixture builders, gated behind `#[cfg(any(test, feature =
//! "test-support"))]` so downstream crates' tests (and `reap-specs`) can
//! build `TaskDescriptor`s and DAGs without repeating the field list.

use crate::dag::{InMemoryStaticDag, ProcessConfig, PublishMode};
use crate::task::{TaskDescriptor, TaskId, TaskOutput};
use proptest::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

/// Build a minimal successful task descriptor for `process`, with no
/// inputs or outputs. Chain `.with_input`/`.with_output` via the plain
/// struct-update syntax when a test needs more.
pub fn sample_task(id: &str, process: &str, hash: &str) -> TaskDescriptor {
    TaskDescriptor {
        id: TaskId::new(id),
        hash: hash.to_string(),
        name: format!("{process} ({id})"),
        process: process.to_string(),
        work_dir: PathBuf::from(format!("/work/{id}")),
        inputs: HashMap::new(),
        outputs: Vec::new(),
        success: true,
    }
}

pub fn unpublished_output(path: impl Into<PathBuf>) -> TaskOutput {
    TaskOutput {
        path: path.into(),
        publish_target: None,
    }
}

pub fn published_output(path: impl Into<PathBuf>, mode: PublishMode) -> TaskOutput {
    TaskOutput {
        path: path.into(),
        publish_target: Some(mode),
    }
}

/// A linear two-process DAG, `A -> B`.
pub fn linear_dag() -> InMemoryStaticDag {
    InMemoryStaticDag::new()
        .with_process("A", ProcessConfig::default())
        .with_process("B", ProcessConfig::default())
        .with_edge("A", "B")
}

/// A diamond DAG: `A -> B, A -> C, B -> D, C -> D`.
pub fn diamond_dag() -> InMemoryStaticDag {
    InMemoryStaticDag::new()
        .with_process("A", ProcessConfig::default())
        .with_process("B", ProcessConfig::default())
        .with_process("C", ProcessConfig::default())
        .with_process("D", ProcessConfig::default())
        .with_edge("A", "B")
        .with_edge("A", "C")
        .with_edge("B", "D")
        .with_edge("C", "D")
}

/// Strategy generating a random lowercase hex content hash of `len` chars.
pub fn arb_hex_hash(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..16, len).prop_map(|digits| {
        digits
            .into_iter()
            .map(|d| std::char::from_digit(d as u32, 16).unwrap_or('0'))
            .collect()
    })
}
