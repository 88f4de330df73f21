//! The set of channels currently under observation.
//!
//! Shared as `Arc<WatchList>` between the command path (writers) and the
//! reaction path (readers). Every operation takes the lock exactly once, so
//! a reader never sees a half-applied mutation.

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::types::ChannelId;

/// Thread-safe set of monitored channel ids. Created empty, lives in memory only.
#[derive(Debug, Default)]
pub struct WatchList {
    channels: RwLock<HashSet<ChannelId>>,
}

impl WatchList {
    /// Create an empty watch-list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start monitoring `id`. Returns `false` if it was already monitored.
    pub fn add(&self, id: ChannelId) -> bool {
        self.write().insert(id)
    }

    /// Stop monitoring `id`. Returns `false` if it was not monitored.
    pub fn remove(&self, id: ChannelId) -> bool {
        self.write().remove(&id)
    }

    /// Whether `id` is currently monitored.
    pub fn contains(&self, id: ChannelId) -> bool {
        self.read().contains(&id)
    }

    /// Number of monitored channels.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether no channel is monitored.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Sorted copy of the monitored ids.
    pub fn snapshot(&self) -> Vec<ChannelId> {
        let mut ids: Vec<ChannelId> = self.read().iter().copied().collect();
        ids.sort_unstable();
        ids
    }

    // A panic while holding the lock cannot leave a HashSet half-inserted,
    // so a poisoned lock is safe to keep using.
    fn read(&self) -> RwLockReadGuard<'_, HashSet<ChannelId>> {
        self.channels.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashSet<ChannelId>> {
        self.channels.write().unwrap_or_else(PoisonError::into_inner)
    }
}
