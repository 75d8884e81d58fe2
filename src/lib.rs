//! Fingerspell Web - hand sign to text translation
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules

mod bridge;
mod classifier;
mod geometry;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    clear_transcript, get_current_sign, get_debug_info, get_status, get_transcript,
    update_hand_landmarks,
};

// Re-export the core for non-browser consumers and tests
pub use classifier::{
    classify, classify_metrics, FrameUpdate, HandMetrics, Sign, StabilityTracker, Status,
    HOLD_FRAMES, SIGN_ALPHABET,
};
pub use geometry::{distance, is_extended, Finger, Hand, Landmark};

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
