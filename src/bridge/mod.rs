//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod hand_landmarks;
mod translator;

pub use hand_landmarks::{parse_first_hand, VALUES_PER_HAND};
pub use translator::{
    clear_transcript, get_current_sign, get_debug_info, get_status, get_transcript,
    update_hand_landmarks,
};
