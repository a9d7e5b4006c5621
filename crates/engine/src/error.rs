// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors the engine surfaces to the executor. Only programmer-contract
//! violations become an `Err`; deleter failures and workflow-shape
//! warnings are logged and handled in place instead.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("task id must not be empty")]
    EmptyTaskId,
    #[error("process name must not be empty")]
    EmptyProcessName,
    #[error("output path must not be empty")]
    EmptyPath,
    #[error("process-closed for unknown process: {0}")]
    UnknownProcess(String),
    #[error("task-complete for unknown task: {0}")]
    UnknownTask(String),
}
