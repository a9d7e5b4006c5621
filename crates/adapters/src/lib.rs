// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Injected collaborators for the cleanup engine: the filesystem deletion
//! boundary and the cache-finalize sink. Production and fake
//! implementations of each, following the same adapter-plus-fake split as
//! the rest of the workspace's I/O boundaries.

pub mod cache;
pub mod deleter;

pub use cache::{CacheSink, ChannelCacheSink, FinalizeRecord, NoOpCacheSink};
pub use deleter::{DeleteError, FsPathDeleter, PathDeleter};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use cache::{FakeCacheSink, FinalizeCall};
#[cfg(any(test, feature = "test-support"))]
pub use deleter::{DeleteCall, FakeDeleter};
