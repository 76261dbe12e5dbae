//! Clock (second-chance) replacement policy.
//!
//! Approximates LRU over a fixed slot array: a hit sets the frame's
//! reference bit without touching any ordering structure, and a miss runs
//! the [`ClockRing`] sweep, which clears reference bits from the hand
//! forward until it can claim an empty or unreferenced frame in place.
//!
//! Unlike LRU and LFU, Clock never removes a frame out-of-place, so
//! eviction and admission are a single combined step. The sweep visits at
//! most `2 * capacity` frames before claiming one.
//!
//! Snapshot enumeration order is fixed slot index order 0..N-1, empty
//! frames included.

use crate::ds::ClockRing;
use crate::page::PageId;
use crate::snapshot::{FrameMeta, FrameSnapshot};
use crate::traits::{Access, FramePolicy};

/// Clock replacement over a fixed pool of frames.
#[derive(Debug)]
pub struct ClockPolicy {
    ring: ClockRing,
}

impl ClockPolicy {
    /// Creates a Clock policy with `capacity` frames and the hand at slot 0.
    pub fn new(capacity: usize) -> Self {
        Self {
            ring: ClockRing::new(capacity),
        }
    }

    /// Returns the current hand position.
    pub fn hand(&self) -> usize {
        self.ring.hand()
    }

    /// Returns the reference bit for `page`, if resident.
    pub fn referenced(&self, page: PageId) -> Option<bool> {
        self.ring.referenced(page)
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.ring.debug_validate_invariants();
    }
}

impl FramePolicy for ClockPolicy {
    /// On a hit the reference bit is set and the hand stays put; on a miss
    /// the sweep claims a frame (evicting its occupant if any) and leaves
    /// the hand one past the claimed slot.
    fn load(&mut self, page: PageId) -> Access {
        if self.ring.touch(page) {
            return Access::Hit;
        }
        self.ring.admit(page);
        Access::Miss
    }

    fn contains(&self, page: PageId) -> bool {
        self.ring.contains(page)
    }

    fn len(&self) -> usize {
        self.ring.len()
    }

    fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// The occupied frame the sweep would claim next, or `None` while an
    /// empty frame would be claimed first.
    fn peek_victim(&self) -> Option<PageId> {
        self.ring.peek_victim()
    }

    fn snapshot(&self) -> Vec<FrameSnapshot> {
        self.ring
            .iter_slots()
            .map(|(page, referenced)| FrameSnapshot::new(page, FrameMeta::Clock { referenced }))
            .collect()
    }

    fn clear(&mut self) {
        self.ring.clear();
    }
}
