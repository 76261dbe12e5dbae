//! LRU (Least Recently Used) replacement policy.
//!
//! Maintains a strict total recency order over the occupied frames: head is
//! the most recently used page, tail the least. A hit moves the page to the
//! head; a miss on a full table evicts the tail. Ties are impossible because
//! the order is total.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │                         LruPolicy                            │
//!   │                                                              │
//!   │   index: FxHashMap<PageId, NodeId>  (page -> list node)      │
//!   │                                                              │
//!   │   order: FrameList<PageId>                                   │
//!   │   head (MRU) ─► [4] ◄──► [3] ◄──► [2] ◄──► [1] ◄── tail (LRU)│
//!   │                                                              │
//!   │   Hit:  move node to head            O(1) via NodeId          │
//!   │   Miss: pop tail (if full), push head                        │
//!   └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Snapshot enumeration order is head→tail (most recent first).

use rustc_hash::FxHashMap;

use crate::ds::{FrameList, NodeId};
use crate::page::PageId;
use crate::snapshot::{FrameMeta, FrameSnapshot};
use crate::traits::{Access, FramePolicy};

/// LRU replacement over a fixed pool of frames.
#[derive(Debug)]
pub struct LruPolicy {
    order: FrameList<PageId>,
    index: FxHashMap<PageId, NodeId>,
    capacity: usize,
}

impl LruPolicy {
    /// Creates an LRU policy with `capacity` frames, all empty.
    pub fn new(capacity: usize) -> Self {
        Self {
            order: FrameList::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            capacity,
        }
    }

    fn evict_lru(&mut self) -> Option<PageId> {
        let victim = self.order.pop_back()?;
        self.index.remove(&victim);
        Some(victim)
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert!(self.order.len() <= self.capacity);
        assert_eq!(self.order.len(), self.index.len());
        for (page, &id) in &self.index {
            assert_eq!(self.order.get(id), Some(page));
        }
        self.order.debug_validate_invariants();
    }
}

impl FramePolicy for LruPolicy {
    /// On a hit the page is promoted to the head of the recency order; on a
    /// miss the tail is evicted first if the table is full, then the page is
    /// inserted at the head.
    fn load(&mut self, page: PageId) -> Access {
        if let Some(&id) = self.index.get(&page) {
            self.order.move_to_front(id);
            return Access::Hit;
        }

        if self.capacity == 0 {
            return Access::Miss;
        }
        if self.order.len() == self.capacity {
            self.evict_lru();
        }
        let id = self.order.push_front(page);
        self.index.insert(page, id);
        Access::Miss
    }

    fn contains(&self, page: PageId) -> bool {
        self.index.contains_key(&page)
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    /// The tail of the recency order, the strictly least recently used page.
    fn peek_victim(&self) -> Option<PageId> {
        if self.order.len() < self.capacity {
            return None;
        }
        self.order.back().copied()
    }

    fn snapshot(&self) -> Vec<FrameSnapshot> {
        self.order
            .iter()
            .map(|&page| FrameSnapshot::new(Some(page), FrameMeta::Lru))
            .collect()
    }

    fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }
}
