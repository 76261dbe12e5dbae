pub mod clock_ring;
pub mod frame_list;

pub use clock_ring::ClockRing;
pub use frame_list::{FrameList, NodeId};
