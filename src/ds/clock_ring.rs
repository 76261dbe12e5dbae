//! Clock-sweep ring over a fixed set of page frames.
//!
//! A fixed slot array with one reference bit per frame and a hand cursor.
//! Hits set the reference bit; a miss runs the second-chance sweep from the
//! hand, clearing bits until it reaches a frame that is empty or
//! unreferenced, and claims that frame in place.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │                         ClockRing                            │
//!   │                                                              │
//!   │   index: FxHashMap<PageId, usize>  (page -> slot index)      │
//!   │                                                              │
//!   │   slots (fixed, in place):                                   │
//!   │    [0]        [1]        [2]        [3]                      │
//!   │   ┌────┐     ┌────┐     ┌────┐     ┌────┐                    │
//!   │   │ p1 │     │ p2 │     │ p3 │     │    │                    │
//!   │   │ref │     │    │     │ref │     │    │                    │
//!   │   └────┘     └────┘     └────┘     └────┘                    │
//!   │                ▲                                             │
//!   │                hand                                          │
//!   │                                                              │
//!   │   Sweep: ref=1 → clear, advance; empty or ref=0 → claim,     │
//!   │   set ref=1, advance past the claimed slot.                  │
//!   └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Notes
//! - The sweep terminates within `2 * capacity` steps: one full pass clears
//!   every reference bit, so the second pass must find an unreferenced slot.
//! - The hand starts at 0 and is only ever advanced modulo the capacity.
//! - `debug_validate_invariants()` is available in debug/test builds.

use rustc_hash::FxHashMap;

use crate::page::PageId;

#[derive(Debug, Clone, Copy)]
struct Slot {
    page: Option<PageId>,
    referenced: bool,
}

/// Fixed-size ring of page frames implementing the CLOCK (second-chance) sweep.
#[derive(Debug)]
pub struct ClockRing {
    slots: Vec<Slot>,
    index: FxHashMap<PageId, usize>,
    hand: usize,
    len: usize,
}

impl ClockRing {
    /// Creates a new ring with `capacity` empty frames and the hand at 0.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: vec![
                Slot {
                    page: None,
                    referenced: false,
                };
                capacity
            ],
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            hand: 0,
            len: 0,
        }
    }

    /// Returns the configured capacity (number of frames).
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied frames.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no frame is occupied.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current hand position.
    pub fn hand(&self) -> usize {
        self.hand
    }

    /// Returns `true` if `page` is resident.
    pub fn contains(&self, page: PageId) -> bool {
        self.index.contains_key(&page)
    }

    /// Sets the reference bit for `page`; returns `false` if not resident.
    ///
    /// The hand does not move on a touch.
    pub fn touch(&mut self, page: PageId) -> bool {
        let idx = match self.index.get(&page) {
            Some(idx) => *idx,
            None => return false,
        };
        self.slots[idx].referenced = true;
        true
    }

    /// Returns the reference bit for `page`, if resident.
    pub fn referenced(&self, page: PageId) -> Option<bool> {
        let idx = *self.index.get(&page)?;
        Some(self.slots[idx].referenced)
    }

    /// Claims a frame for `page` with the second-chance sweep.
    ///
    /// Starting at the hand, referenced frames lose their bit and are passed
    /// over; the first empty or unreferenced frame is overwritten in place
    /// with `page` (reference bit set), and the hand stops one past it.
    /// Returns the evicted page, or `None` if an empty frame was claimed.
    ///
    /// The caller must ensure `page` is not already resident. Rings with
    /// zero capacity reject the claim.
    pub fn admit(&mut self, page: PageId) -> Option<PageId> {
        debug_assert!(!self.contains(page), "page already resident");
        if self.capacity() == 0 {
            return None;
        }

        loop {
            let idx = self.hand;
            let slot = &mut self.slots[idx];
            if slot.page.is_none() || !slot.referenced {
                let evicted = slot.page.take();
                slot.page = Some(page);
                slot.referenced = true;
                match evicted {
                    Some(old) => {
                        self.index.remove(&old);
                    }
                    None => self.len += 1,
                }
                self.index.insert(page, idx);
                self.advance_hand();
                return evicted;
            }
            slot.referenced = false;
            self.advance_hand();
        }
    }

    /// Returns the page the next sweep would evict, without mutating state.
    ///
    /// `None` means the next claim lands on an empty frame (no victim).
    pub fn peek_victim(&self) -> Option<PageId> {
        let cap = self.capacity();
        if cap == 0 {
            return None;
        }
        for offset in 0..cap {
            let slot = &self.slots[(self.hand + offset) % cap];
            match slot.page {
                None => return None,
                Some(page) if !slot.referenced => return Some(page),
                Some(_) => {}
            }
        }
        // Full ring, every bit set: the sweep clears them all and claims
        // the frame the hand started on.
        self.slots[self.hand].page
    }

    /// Returns `(page, referenced)` per frame in slot index order 0..N-1.
    pub fn iter_slots(&self) -> impl Iterator<Item = (Option<PageId>, bool)> + '_ {
        self.slots.iter().map(|slot| (slot.page, slot.referenced))
    }

    /// Empties every frame and returns the hand to 0.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.page = None;
            slot.referenced = false;
        }
        self.index.clear();
        self.hand = 0;
        self.len = 0;
    }

    fn advance_hand(&mut self) {
        self.hand = (self.hand + 1) % self.capacity();
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        let occupied = self.slots.iter().filter(|slot| slot.page.is_some()).count();
        assert_eq!(self.len, occupied);
        assert_eq!(self.len, self.index.len());

        if self.capacity() == 0 {
            assert_eq!(self.hand, 0);
        } else {
            assert!(self.hand < self.capacity());
        }

        for (page, &idx) in &self.index {
            assert!(idx < self.slots.len());
            assert_eq!(self.slots[idx].page, Some(*page));
        }
    }
}
