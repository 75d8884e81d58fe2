//! Translator state and JS API
//!
//! Owns the session tracker and exposes the per-frame entry point plus the
//! string getters the page renders transcript and status text from.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use super::hand_landmarks::parse_first_hand;
use crate::classifier::{classify, Sign, StabilityTracker, Status};

struct TranslatorState {
    tracker: StabilityTracker,
    current_sign: Sign,
    last_status: Status,
}

impl Default for TranslatorState {
    fn default() -> Self {
        Self {
            tracker: StabilityTracker::new(),
            current_sign: Sign::Unknown,
            last_status: Status::NoHand,
        }
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static TRANSLATOR_STATE: RefCell<TranslatorState> = RefCell::new(TranslatorState::default());
}

// ============================================================================
// WASM API
// ============================================================================

/// Called from JavaScript once per detector frame with a flat Float32Array
/// (21 landmarks x 3 coordinates per detected hand) and the hand count.
/// Pass num_hands = 0 for a frame with no detection.
///
/// Returns the letter committed by this frame, if the held sign just
/// crossed the stability threshold.
#[wasm_bindgen]
pub fn update_hand_landmarks(flat_data: &[f32], num_hands: usize) -> Option<String> {
    let hand = parse_first_hand(flat_data, num_hands);
    if num_hands > 0 && hand.is_none() {
        web_sys::console::warn_1(
            &format!(
                "Rejected landmark frame: {} values for {} hand(s)",
                flat_data.len(),
                num_hands
            )
            .into(),
        );
    }

    let sign = classify(hand.as_ref());

    TRANSLATOR_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        let update = state.tracker.update(sign);
        state.current_sign = sign;
        state.last_status = update.status;

        if let Some(letter) = update.committed {
            web_sys::console::log_1(
                &format!("✍️ Committed '{}' → \"{}\"", letter, state.tracker.transcript()).into(),
            );
        }

        update.committed.map(|letter| letter.to_string())
    })
}

/// Label of this frame's classification ("A".."L", or "?" for no match)
#[wasm_bindgen]
pub fn get_current_sign() -> String {
    TRANSLATOR_STATE.with(|state_cell| state_cell.borrow().current_sign.name().to_string())
}

/// Tracker status for this frame ("no hand" / "holding" / "changed" / "committed")
#[wasm_bindgen]
pub fn get_status() -> String {
    TRANSLATOR_STATE.with(|state_cell| state_cell.borrow().last_status.name().to_string())
}

/// Letters committed so far
#[wasm_bindgen]
pub fn get_transcript() -> String {
    TRANSLATOR_STATE.with(|state_cell| state_cell.borrow().tracker.transcript().to_string())
}

/// Clear transcript and debounce state (the page's "clear" button)
#[wasm_bindgen]
pub fn clear_transcript() {
    TRANSLATOR_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        state.tracker.reset();
        state.current_sign = Sign::Unknown;
        state.last_status = Status::NoHand;
    });
    web_sys::console::log_1(&"🧹 Transcript cleared".into());
}

/// One-line state dump for the debug overlay
#[wasm_bindgen]
pub fn get_debug_info() -> String {
    TRANSLATOR_STATE.with(|state_cell| {
        let state = state_cell.borrow();
        format!(
            "sign={} status={} streak={} transcript_len={}",
            state.current_sign.name(),
            state.last_status.name(),
            state.tracker.run_length(),
            state.tracker.transcript().len()
        )
    })
}
