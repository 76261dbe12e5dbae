//! Error types for the framekit library.
//!
//! ## Key Components
//!
//! - [`ConfigError`]: Returned when engine configuration parameters are
//!   invalid (e.g. zero capacity).
//! - [`PageIdError`]: Returned when a raw page value from an access trace is
//!   outside the valid domain (negative, the trace format's empty marker).
//!
//! ## Example Usage
//!
//! ```
//! use framekit::engine::{FrameCache, ReplacementPolicy};
//! use framekit::error::ConfigError;
//!
//! // Fallible constructor for user-configurable parameters
//! let cache = FrameCache::new(ReplacementPolicy::Lru, 4);
//! assert!(cache.is_ok());
//!
//! // Zero capacity is caught without panicking
//! let bad: Result<FrameCache, ConfigError> = FrameCache::new(ReplacementPolicy::Lru, 0);
//! assert!(bad.is_err());
//! ```

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Error returned when engine configuration parameters are invalid.
///
/// Produced by [`FrameCache::new`](crate::engine::FrameCache::new). Carries a
/// human-readable description of which parameter failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl ConfigError {
    /// Creates a new `ConfigError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ConfigError {}

// ---------------------------------------------------------------------------
// PageIdError
// ---------------------------------------------------------------------------

/// Error returned when a raw page value cannot be used as a
/// [`PageId`](crate::page::PageId).
///
/// Produced by `PageId::try_from` and
/// [`FrameCache::load_raw`](crate::engine::FrameCache::load_raw) before any
/// engine state is mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageIdError(String);

impl PageIdError {
    /// Creates a new `PageIdError` with the given description.
    #[inline]
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }

    /// Returns the error description.
    #[inline]
    pub fn message(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for PageIdError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- ConfigError ------------------------------------------------------

    #[test]
    fn config_display_shows_message() {
        let err = ConfigError::new("capacity must be > 0");
        assert_eq!(err.to_string(), "capacity must be > 0");
    }

    #[test]
    fn config_debug_includes_message() {
        let err = ConfigError::new("bad capacity");
        let dbg = format!("{:?}", err);
        assert!(dbg.contains("bad capacity"));
    }

    #[test]
    fn config_message_accessor() {
        let err = ConfigError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn config_clone_and_eq() {
        let a = ConfigError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn config_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<ConfigError>();
    }

    // -- PageIdError ------------------------------------------------------

    #[test]
    fn page_id_display_shows_message() {
        let err = PageIdError::new("page id must be non-negative, got -1");
        assert_eq!(err.to_string(), "page id must be non-negative, got -1");
    }

    #[test]
    fn page_id_message_accessor() {
        let err = PageIdError::new("test");
        assert_eq!(err.message(), "test");
    }

    #[test]
    fn page_id_clone_and_eq() {
        let a = PageIdError::new("x");
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn page_id_implements_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PageIdError>();
    }
}
