// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Programmer-contract violations surfaced by `TaskGraph`.
//!
//! The only failure mode here is a caller bug (a null task or path);
//! these are fatal configuration errors, not something to retry.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskGraphError {
    #[error("task id must not be empty")]
    EmptyTaskId,
    #[error("output path must not be empty")]
    EmptyPath,
    #[error("task {0} has no recorded vertex; addTaskOutputs called before addTask")]
    UnknownTask(String),
}
