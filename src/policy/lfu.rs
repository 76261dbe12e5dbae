//! LFU (Least Frequently Used) replacement policy.
//!
//! Each occupied frame carries a frequency counter: 1 on insertion, +1 per
//! hit, never decayed while resident. Victim selection scans the frames in
//! insertion order (most recently inserted first) and keeps the running
//! minimum, replacing it only on a **strictly lower** frequency.
//!
//! ## Tie-break
//!
//! Because candidates are replaced only on strictly-lower comparisons and
//! new frames are inserted at the head of the scan order, the first-scanned
//! frame wins a tie — i.e. the most recently inserted of the tied frames.
//! A brand-new page at frequency 1 can itself be the victim of the very next
//! miss if nothing has a strictly lower count. Classic LFU breaks ties toward
//! the oldest frame; this policy deliberately does not, and the trace tests
//! pin that choice.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │                         LfuPolicy                            │
//!   │                                                              │
//!   │   index: FxHashMap<PageId, NodeId>  (page -> list node)      │
//!   │                                                              │
//!   │   order: FrameList<LfuEntry>   (head = newest insertion)     │
//!   │   head ─► [5:1] ◄──► [3:2] ◄──► [2:2] ◄──► [1:3] ◄── tail    │
//!   │                                                              │
//!   │   Hit:  frequency += 1, position unchanged                   │
//!   │   Miss: scan head→tail for strict minimum, remove, push head │
//!   └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Snapshot enumeration order is the same head→tail scan order.

use rustc_hash::FxHashMap;

use crate::ds::{FrameList, NodeId};
use crate::page::PageId;
use crate::snapshot::{FrameMeta, FrameSnapshot};
use crate::traits::{Access, FramePolicy};

#[derive(Debug)]
struct LfuEntry {
    page: PageId,
    frequency: u64,
}

/// LFU replacement over a fixed pool of frames.
#[derive(Debug)]
pub struct LfuPolicy {
    order: FrameList<LfuEntry>,
    index: FxHashMap<PageId, NodeId>,
    capacity: usize,
}

impl LfuPolicy {
    /// Creates an LFU policy with `capacity` frames, all empty.
    pub fn new(capacity: usize) -> Self {
        Self {
            order: FrameList::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            capacity,
        }
    }

    /// Returns the frequency counter for `page`, if resident.
    pub fn frequency(&self, page: PageId) -> Option<u64> {
        let id = *self.index.get(&page)?;
        self.order.get(id).map(|entry| entry.frequency)
    }

    fn min_frequency_node(&self) -> Option<NodeId> {
        let mut victim: Option<(NodeId, u64)> = None;
        for (id, entry) in self.order.iter_entries() {
            let replace = match victim {
                None => true,
                // Strictly lower only: on a tie the earlier-scanned
                // (head-most) frame stays the candidate.
                Some((_, min)) => entry.frequency < min,
            };
            if replace {
                victim = Some((id, entry.frequency));
            }
        }
        victim.map(|(id, _)| id)
    }

    fn evict_lfu(&mut self) -> Option<PageId> {
        let id = self.min_frequency_node()?;
        let entry = self.order.remove(id)?;
        self.index.remove(&entry.page);
        Some(entry.page)
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert!(self.order.len() <= self.capacity);
        assert_eq!(self.order.len(), self.index.len());
        for (page, &id) in &self.index {
            let entry = self.order.get(id).expect("index points to missing node");
            assert_eq!(entry.page, *page);
            assert!(entry.frequency >= 1);
        }
        self.order.debug_validate_invariants();
    }
}

impl FramePolicy for LfuPolicy {
    /// On a hit the frequency counter is incremented and the frame keeps its
    /// position in the scan order; on a miss the minimum-frequency frame is
    /// evicted first if the table is full, then the page is inserted at the
    /// head with frequency 1.
    fn load(&mut self, page: PageId) -> Access {
        if let Some(&id) = self.index.get(&page) {
            if let Some(entry) = self.order.get_mut(id) {
                entry.frequency = entry.frequency.saturating_add(1);
            }
            return Access::Hit;
        }

        if self.capacity == 0 {
            return Access::Miss;
        }
        if self.order.len() == self.capacity {
            self.evict_lfu();
        }
        let id = self.order.push_front(LfuEntry { page, frequency: 1 });
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

    /// The frame the strict-minimum scan would evict on the next full miss.
    fn peek_victim(&self) -> Option<PageId> {
        if self.order.len() < self.capacity {
            return None;
        }
        let id = self.min_frequency_node()?;
        self.order.get(id).map(|entry| entry.page)
    }

    fn snapshot(&self) -> Vec<FrameSnapshot> {
        self.order
            .iter()
            .map(|entry| {
                FrameSnapshot::new(
                    Some(entry.page),
                    FrameMeta::Lfu {
                        frequency: entry.frequency,
                    },
                )
            })
            .collect()
    }

    fn clear(&mut self) {
        self.order.clear();
        self.index.clear();
    }
}
