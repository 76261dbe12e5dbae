//! framekit: fixed-capacity page-frame cache with pluggable replacement policies.
//!
//! The [`engine::FrameCache`] controller owns a bounded pool of frames and
//! delegates touch-on-hit and evict-on-miss decisions to one of three
//! replacement policies: LFU, LRU, or Clock (second chance).

pub mod ds;
pub mod engine;
pub mod error;
pub mod page;
pub mod policy;
pub mod prelude;
pub mod snapshot;
pub mod traits;
