pub use crate::ds::{ClockRing, FrameList, NodeId};
pub use crate::engine::{FrameCache, ReplacementPolicy};
pub use crate::error::{ConfigError, PageIdError};
pub use crate::page::PageId;
pub use crate::policy::{ClockPolicy, LfuPolicy, LruPolicy};
pub use crate::snapshot::{FrameMeta, FrameSnapshot};
pub use crate::traits::{Access, FramePolicy};
