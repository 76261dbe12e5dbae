//! Read-only views of frame state.
//!
//! [`FrameSnapshot`] is the observability surface of the engine: a
//! non-mutating description of one frame (resident page, occupancy, and
//! policy-specific metadata) returned by
//! [`FrameCache::snapshot`](crate::engine::FrameCache::snapshot). The
//! presentation layer renders these; the engine itself performs no I/O.
//!
//! Enumeration order is policy-defined: head→tail (most-recent /
//! most-recently-inserted first) for LRU and LFU, slot index order 0..N-1
//! (including empty slots) for Clock.

use crate::page::PageId;

/// Policy-specific per-frame metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameMeta {
    /// LRU carries no per-frame counters; recency is the snapshot position.
    Lru,
    /// LFU access-frequency counter (1 on insertion, +1 per hit).
    Lfu { frequency: u64 },
    /// Clock reference bit ("used since last swept by the hand").
    Clock { referenced: bool },
}

/// One frame's state as seen at snapshot time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSnapshot {
    page: Option<PageId>,
    meta: FrameMeta,
}

impl FrameSnapshot {
    /// Creates a snapshot entry for a frame.
    #[inline]
    pub fn new(page: Option<PageId>, meta: FrameMeta) -> Self {
        Self { page, meta }
    }

    /// Returns the resident page id, or `None` for an empty frame.
    #[inline]
    pub fn page(&self) -> Option<PageId> {
        self.page
    }

    /// Returns `true` if the frame holds a page.
    #[inline]
    pub fn occupied(&self) -> bool {
        self.page.is_some()
    }

    /// Returns the policy-specific metadata.
    #[inline]
    pub fn meta(&self) -> FrameMeta {
        self.meta
    }

    /// Returns the LFU frequency counter, if this is an LFU frame.
    #[inline]
    pub fn frequency(&self) -> Option<u64> {
        match self.meta {
            FrameMeta::Lfu { frequency } => Some(frequency),
            _ => None,
        }
    }

    /// Returns the Clock reference bit, if this is a Clock frame.
    #[inline]
    pub fn referenced(&self) -> Option<bool> {
        match self.meta {
            FrameMeta::Clock { referenced } => Some(referenced),
            _ => None,
        }
    }
}
