//! Geometry module - landmark data model and vector math
//!
//! Re-exports only. All logic in submodules.

mod extension;
mod landmarks;
mod vectors;

pub use extension::is_extended;
pub use landmarks::{
    Finger, Hand, Landmark, INDEX_DIP, INDEX_MCP, INDEX_PIP, INDEX_TIP, LANDMARK_COUNT,
    MIDDLE_DIP, MIDDLE_MCP, MIDDLE_PIP, MIDDLE_TIP, PINKY_DIP, PINKY_MCP, PINKY_PIP, PINKY_TIP,
    RING_DIP, RING_MCP, RING_PIP, RING_TIP, THUMB_CMC, THUMB_IP, THUMB_MCP, THUMB_TIP, WRIST,
};
pub use vectors::distance;
