//! Classifier module - static sign recognition and debounce
//!
//! Re-exports only. All logic in submodules.

mod rules;
mod sign;
mod stability;

pub use rules::{classify, classify_metrics, HandMetrics};
pub use sign::{Sign, SIGN_ALPHABET};
pub use stability::{FrameUpdate, StabilityTracker, Status, HOLD_FRAMES};
