// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! reap-core: data model for the eager intermediate-file cleanup engine.
//!
//! Defines the four long-lived entities (`ProcessState`, `TaskState`,
//! `PathState`, the `TaskGraph` vertex), the `TaskGraph` itself, the
//! static process-DAG types the engine walks at `workflow-begin`, and the
//! ambient `Clock`/id abstractions shared by `reap-engine`.

#[macro_use]
pub mod id;
pub mod clock;
pub mod dag;
pub mod error;
pub mod path_state;
pub mod process_state;
pub mod task;
pub mod task_graph;

#[cfg(any(test, feature = "test-support"))]
pub mod proptest_support;

pub use clock::{Clock, FakeClock, SystemClock};
pub use dag::{compute_process_consumers, DagEdge, DagVertex, InMemoryStaticDag, ProcessConfig, PublishMode, StaticDag};
pub use error::TaskGraphError;
pub use id::ShortId;
pub use path_state::PathState;
pub use process_state::ProcessState;
pub use task::{TaskDescriptor, TaskId, TaskOutput, TaskState};
pub use task_graph::{TaskGraph, TaskVertex};
