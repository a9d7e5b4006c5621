// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Production `PathDeleter`: plain `std::fs` removal.

use super::{DeleteError, PathDeleter};
use std::path::Path;

/// Deletes files and directories from the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsPathDeleter;

impl FsPathDeleter {
    pub fn new() -> Self {
        Self
    }
}

impl PathDeleter for FsPathDeleter {
    fn delete(&self, path: &Path) -> Result<(), DeleteError> {
        let metadata = match std::fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => {
                return Err(DeleteError::Io {
                    path: path.display().to_string(),
                    source: e,
                })
            }
        };

        let result = if metadata.is_dir() {
            std::fs::remove_dir_all(path)
        } else {
            std::fs::remove_file(path)
        };

        match result {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DeleteError::Io {
                path: path.display().to_string(),
                source: e,
            }),
        }
    }
}

#[cfg(test)]
#[path = "fs_tests.rs"]
mod tests;
