// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The filesystem deletion boundary the engine calls through for both
//! task working directories and individual intermediate files.

mod fake;
mod fs;

pub use fake::{DeleteCall, FakeDeleter};
pub use fs::FsPathDeleter;

use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeleteError {
    #[error("failed to delete {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Removes a file or recursively removes a directory. Must be
/// idempotent-safe: deleting a path that is already gone is success, not
/// an error, since the engine may retry a prior partial failure.
pub trait PathDeleter: Send + Sync + 'static {
    fn delete(&self, path: &Path) -> Result<(), DeleteError>;
}
