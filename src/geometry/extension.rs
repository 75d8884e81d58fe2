//! Finger extension test
//!
//! Decides whether a finger is straightened or curled from raw landmark
//! positions. This is the only geometric judgement the sign rules build on.

use super::landmarks::{Finger, Hand};
use super::vectors::distance;

/// Thumb counts as extended when the tip has reached this far past the MCP,
/// measured from the CMC base
const THUMB_REACH_RATIO: f32 = 1.5;

/// Is this finger straightened?
///
/// Non-thumb fingers use the y axis only: the tip must sit above both the
/// PIP and the MCP joint (y grows downward). A finger pointing sideways
/// therefore reads as curled.
///
/// The thumb extends sideways, so it gets its own test: the tip must be
/// nearer the camera than its MCP and have reached `THUMB_REACH_RATIO`
/// times the CMC-to-MCP span away from the CMC.
pub fn is_extended(hand: &Hand, finger: Finger) -> bool {
    let [base, mid, _above, tip] = finger.joints();
    match finger {
        Finger::Thumb => {
            let cmc = hand[base];
            let mcp = hand[mid];
            let tip = hand[tip];

            let span = distance(cmc, mcp);
            // Degenerate base segment: can't judge reach
            if span < 1e-4 {
                return false;
            }

            let tip_forward = tip.z < mcp.z;
            let reach = distance(cmc, tip) / span;
            reach > THUMB_REACH_RATIO && tip_forward
        }
        _ => {
            let mcp = hand[base];
            let pip = hand[mid];
            let tip = hand[tip];
            tip.y < pip.y && tip.y < mcp.y
        }
    }
}
