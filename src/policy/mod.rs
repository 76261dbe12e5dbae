//! Replacement policies over the fixed-capacity frame table.

pub mod clock;
pub mod lfu;
pub mod lru;

pub use clock::ClockPolicy;
pub use lfu::LfuPolicy;
pub use lru::LruPolicy;
