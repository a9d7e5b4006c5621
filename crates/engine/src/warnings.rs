// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Workflow-shape warnings: informational, never fatal. Surfaced to the
//! executor for logging but never turned into an `Err`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A process declares a file-output parameter that re-exports one of
    /// its own inputs. Eager deletion cannot tell the republished input
    /// apart from a produced output, so the input's lifetime would be
    /// tied to the wrong task.
    ReexportsInput { process: String },
    /// A process publishes with a symlink-like mode (copy-no-follow,
    /// relative-link, or symbolic-link): the published artifact still
    /// points at the working directory, so deleting it early would break
    /// the publication.
    SymlinkLikePublish { process: String },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::ReexportsInput { process } => write!(
                f,
                "process '{process}' re-exports an input as an output; incompatible with eager cleanup"
            ),
            Warning::SymlinkLikePublish { process } => write!(
                f,
                "process '{process}' publishes with a symlink-like mode; incompatible with eager cleanup"
            ),
        }
    }
}
