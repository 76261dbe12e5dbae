//! Page identifiers.
//!
//! A [`PageId`] is the opaque identifier a caller asks the engine to make
//! resident. Frame vacancy is modeled with `Option<PageId>`, so no id value
//! is reserved as an "empty" sentinel; the original trace format's `-1`
//! marker is rejected at the conversion boundary instead.

use std::fmt;

use crate::error::PageIdError;

/// Identifier of a virtual page requested by a caller.
///
/// Page ids are non-negative integers. Construct one directly from a `u64`,
/// or fallibly from a raw signed trace value via `TryFrom<i64>`.
///
/// # Example
///
/// ```
/// use framekit::page::PageId;
///
/// let page = PageId::new(7);
/// assert_eq!(page.as_u64(), 7);
///
/// // Raw trace values are validated: -1 is the trace's empty marker.
/// assert!(PageId::try_from(3i64).is_ok());
/// assert!(PageId::try_from(-1i64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(u64);

impl PageId {
    /// Creates a page id from a non-negative integer.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the underlying integer value.
    #[inline]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for PageId {
    #[inline]
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl TryFrom<i64> for PageId {
    type Error = PageIdError;

    /// Converts a raw signed trace value, rejecting negatives.
    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        if raw < 0 {
            return Err(PageIdError::new(format!(
                "page id must be non-negative, got {raw}"
            )));
        }
        Ok(Self(raw as u64))
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
