//! Core traits and shared result types for replacement policies.
//!
//! Every policy implements [`FramePolicy`]: the touch-on-hit /
//! evict-and-admit-on-miss contract the controller delegates to. The Clock
//! policy never removes a frame out-of-place, so eviction and admission are a
//! single combined step inside `load` rather than separate trait methods.

use crate::page::PageId;
use crate::snapshot::FrameSnapshot;

/// Outcome of a load: whether the page was resident before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// The page was already resident; the policy's touch ran, occupancy unchanged.
    Hit,
    /// The page was admitted, evicting a victim first if the table was full.
    Miss,
}

impl Access {
    /// Returns `true` for [`Access::Hit`].
    #[inline]
    pub fn is_hit(self) -> bool {
        matches!(self, Access::Hit)
    }

    /// Returns `true` for [`Access::Miss`].
    #[inline]
    pub fn is_miss(self) -> bool {
        matches!(self, Access::Miss)
    }
}

/// Replacement policy over a fixed-capacity frame table.
///
/// Implementations own both the frame table and their bookkeeping metadata
/// (recency order, frequency counters, or reference bits plus hand). All
/// methods are single-threaded and deterministic given the access sequence.
pub trait FramePolicy {
    /// Loads `page`: touch on hit, evict (if full) and admit on miss.
    fn load(&mut self, page: PageId) -> Access;

    /// Returns `true` if `page` is resident. Does not touch.
    fn contains(&self, page: PageId) -> bool;

    /// Returns the number of occupied frames.
    fn len(&self) -> usize;

    /// Returns `true` if no frame is occupied.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the fixed frame-table capacity.
    fn capacity(&self) -> usize;

    /// Returns the occupied frame the policy would evict on the next full
    /// miss, or `None` if the next miss claims an empty frame.
    fn peek_victim(&self) -> Option<PageId>;

    /// Returns a non-mutating view of every frame in the policy's
    /// enumeration order.
    fn snapshot(&self) -> Vec<FrameSnapshot>;

    /// Empties every frame, restoring the freshly constructed state.
    fn clear(&mut self);
}
