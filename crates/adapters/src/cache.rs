// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The cache-finalize sink: fire-and-forget recording of which tasks
//! consumed a completed task's outputs, for the cache database's resume
//! logic. The cache database itself lives elsewhere -- this is only the
//! boundary through which the engine hands it records.

mod fake;
mod noop;

pub use fake::{FakeCacheSink, FinalizeCall};
pub use noop::NoOpCacheSink;

/// One finalize record: a completed task's content hash, and the content
/// hashes of the (successful) tasks that consumed its outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizeRecord {
    pub task_hash: String,
    pub consumer_hashes: Vec<String>,
}

/// Fire-and-forget recorder of finalize records.
pub trait CacheSink: Send + Sync + 'static {
    fn finalize_async(&self, record: FinalizeRecord);
}

/// Hands finalize records to a caller-owned channel for the cache
/// subsystem to drain on its own schedule. The send never blocks the
/// engine: an unbounded sender's `send` only fails if every receiver has
/// been dropped, at which point there is nothing left to finalize into.
#[derive(Clone)]
pub struct ChannelCacheSink {
    tx: tokio::sync::mpsc::UnboundedSender<FinalizeRecord>,
}

impl ChannelCacheSink {
    pub fn new(tx: tokio::sync::mpsc::UnboundedSender<FinalizeRecord>) -> Self {
        Self { tx }
    }
}

impl CacheSink for ChannelCacheSink {
    fn finalize_async(&self, record: FinalizeRecord) {
        if self.tx.send(record).is_err() {
            tracing::warn!("cache finalize channel has no receiver; dropping record");
        }
    }
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
