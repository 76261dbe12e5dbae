//! Cache controller: policy selection, page admission, and snapshots.
//!
//! [`FrameCache`] is the single mutating entry point over a fixed pool of
//! page frames. The replacement policy is chosen from a closed set at
//! construction and dispatched through one enum, so the frame-table contract
//! (lookup before insert, occupancy never above capacity, one frame per
//! resident page) is written once.
//!
//! ## Example
//!
//! ```
//! use framekit::engine::{FrameCache, ReplacementPolicy};
//! use framekit::page::PageId;
//!
//! let mut cache = FrameCache::new(ReplacementPolicy::Lru, 4).unwrap();
//! for raw in 1..=4u64 {
//!     assert!(cache.load_page(PageId::new(raw)).is_miss());
//! }
//! assert!(cache.load_page(PageId::new(2)).is_hit());
//!
//! // Snapshots are read-only; the engine performs no I/O itself.
//! let resident: Vec<_> = cache.snapshot().iter().filter_map(|f| f.page()).collect();
//! assert_eq!(resident[0], PageId::new(2));
//! ```

use crate::error::{ConfigError, PageIdError};
use crate::page::PageId;
use crate::policy::{ClockPolicy, LfuPolicy, LruPolicy};
use crate::snapshot::FrameSnapshot;
use crate::traits::{Access, FramePolicy};

/// The closed set of replacement policies an engine can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplacementPolicy {
    /// Least Frequently Used: evicts the minimum-frequency frame, ties won
    /// by the most recently inserted of the tied frames.
    Lfu,
    /// Least Recently Used: evicts the tail of a strict recency order.
    Lru,
    /// Clock (second chance): approximates LRU with reference bits and a
    /// sweeping hand.
    Clock,
}

#[derive(Debug)]
enum FrameCacheInner {
    Lfu(LfuPolicy),
    Lru(LruPolicy),
    Clock(ClockPolicy),
}

/// Fixed-capacity page-frame cache with a policy chosen at construction.
#[derive(Debug)]
pub struct FrameCache {
    inner: FrameCacheInner,
}

impl FrameCache {
    /// Creates an engine with `capacity` empty frames under `policy`.
    ///
    /// Fails with [`ConfigError`] if `capacity` is zero; no partially-built
    /// engine is returned. All frame storage is allocated here, so the
    /// steady-state operations allocate nothing.
    pub fn new(policy: ReplacementPolicy, capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("frame capacity must be greater than zero"));
        }
        let inner = match policy {
            ReplacementPolicy::Lfu => FrameCacheInner::Lfu(LfuPolicy::new(capacity)),
            ReplacementPolicy::Lru => FrameCacheInner::Lru(LruPolicy::new(capacity)),
            ReplacementPolicy::Clock => FrameCacheInner::Clock(ClockPolicy::new(capacity)),
        };
        Ok(Self { inner })
    }

    /// Loads `page`: touch on hit, evict-and-admit on miss.
    ///
    /// Returns whether the page was resident before this call.
    pub fn load_page(&mut self, page: PageId) -> Access {
        match &mut self.inner {
            FrameCacheInner::Lfu(lfu) => lfu.load(page),
            FrameCacheInner::Lru(lru) => lru.load(page),
            FrameCacheInner::Clock(clock) => clock.load(page),
        }
    }

    /// Validates a raw signed trace value, then loads it.
    ///
    /// Negative values (the original trace format's empty marker) are
    /// rejected before any engine state is mutated.
    pub fn load_raw(&mut self, raw: i64) -> Result<Access, PageIdError> {
        let page = PageId::try_from(raw)?;
        Ok(self.load_page(page))
    }

    /// Returns a read-only view of every frame in the active policy's
    /// enumeration order: head→tail for LRU and LFU, slot index order
    /// (empty frames included) for Clock.
    pub fn snapshot(&self) -> Vec<FrameSnapshot> {
        match &self.inner {
            FrameCacheInner::Lfu(lfu) => lfu.snapshot(),
            FrameCacheInner::Lru(lru) => lru.snapshot(),
            FrameCacheInner::Clock(clock) => clock.snapshot(),
        }
    }

    /// Returns `true` if `page` is resident. Does not touch.
    pub fn contains(&self, page: PageId) -> bool {
        match &self.inner {
            FrameCacheInner::Lfu(lfu) => lfu.contains(page),
            FrameCacheInner::Lru(lru) => lru.contains(page),
            FrameCacheInner::Clock(clock) => clock.contains(page),
        }
    }

    /// Returns the number of occupied frames.
    pub fn len(&self) -> usize {
        match &self.inner {
            FrameCacheInner::Lfu(lfu) => lfu.len(),
            FrameCacheInner::Lru(lru) => lru.len(),
            FrameCacheInner::Clock(clock) => clock.len(),
        }
    }

    /// Returns `true` if no frame is occupied.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the fixed frame-table capacity.
    pub fn capacity(&self) -> usize {
        match &self.inner {
            FrameCacheInner::Lfu(lfu) => lfu.capacity(),
            FrameCacheInner::Lru(lru) => lru.capacity(),
            FrameCacheInner::Clock(clock) => clock.capacity(),
        }
    }

    /// Returns the active replacement policy.
    pub fn policy(&self) -> ReplacementPolicy {
        match &self.inner {
            FrameCacheInner::Lfu(_) => ReplacementPolicy::Lfu,
            FrameCacheInner::Lru(_) => ReplacementPolicy::Lru,
            FrameCacheInner::Clock(_) => ReplacementPolicy::Clock,
        }
    }

    /// Returns the frame the active policy would evict on the next full
    /// miss, or `None` while an empty frame would be claimed first.
    pub fn peek_victim(&self) -> Option<PageId> {
        match &self.inner {
            FrameCacheInner::Lfu(lfu) => lfu.peek_victim(),
            FrameCacheInner::Lru(lru) => lru.peek_victim(),
            FrameCacheInner::Clock(clock) => clock.peek_victim(),
        }
    }

    /// Returns the Clock hand position; `None` for LRU and LFU engines.
    pub fn clock_hand(&self) -> Option<usize> {
        match &self.inner {
            FrameCacheInner::Clock(clock) => Some(clock.hand()),
            _ => None,
        }
    }

    /// Empties every frame, restoring the freshly constructed state.
    pub fn clear(&mut self) {
        match &mut self.inner {
            FrameCacheInner::Lfu(lfu) => lfu.clear(),
            FrameCacheInner::Lru(lru) => lru.clear(),
            FrameCacheInner::Clock(clock) => clock.clear(),
        }
    }
}
