//! Sign classification rules
//!
//! Maps one frame's hand landmarks to a sign. The rules form an ordered
//! decision list: the first matching rule wins and later rules are never
//! consulted. A fallthrough is Unknown, never an error.

use super::sign::Sign;
use crate::geometry::{
    distance, is_extended, Finger, Hand, INDEX_MCP, INDEX_TIP, PINKY_MCP, PINKY_TIP, THUMB_TIP,
    WRIST,
};

/// Max thumb-to-index-tip gap for the F pinch.
/// Absolute image-space distance; every other gate scales with hand size.
const PINCH_MAX: f32 = 0.08;

/// Max thumb-tip-to-index-MCP gap for B, as a fraction of hand size
const TUCK_MAX_FRAC: f32 = 0.25;

/// Min index-tip-to-pinky-tip spread for C, as a fraction of hand size
const SPREAD_MIN_FRAC: f32 = 0.5;

/// Min thumb-tip-to-index-MCP gap for C, as a fraction of hand size
const GAP_MIN_FRAC: f32 = 0.15;

/// Per-frame measurements the rules are evaluated against
#[derive(Clone, Copy, Debug)]
pub struct HandMetrics {
    pub thumb_extended: bool,
    pub index_extended: bool,
    pub middle_extended: bool,
    pub ring_extended: bool,
    pub pinky_extended: bool,

    /// Wrist to pinky MCP: the per-frame normalization unit, so the
    /// fractional thresholds hold across hand sizes and camera distances
    pub hand_size: f32,
    /// Index tip to pinky tip
    pub tip_spread: f32,
    /// Thumb tip to index tip
    pub pinch_dist: f32,
    /// Thumb tip to index MCP
    pub thumb_tuck: f32,
}

impl HandMetrics {
    /// Measure one hand: all five extension flags plus the derived scalars
    pub fn measure(hand: &Hand) -> Self {
        Self {
            thumb_extended: is_extended(hand, Finger::Thumb),
            index_extended: is_extended(hand, Finger::Index),
            middle_extended: is_extended(hand, Finger::Middle),
            ring_extended: is_extended(hand, Finger::Ring),
            pinky_extended: is_extended(hand, Finger::Pinky),
            hand_size: distance(hand[WRIST], hand[PINKY_MCP]),
            tip_spread: distance(hand[INDEX_TIP], hand[PINKY_TIP]),
            pinch_dist: distance(hand[THUMB_TIP], hand[INDEX_TIP]),
            thumb_tuck: distance(hand[THUMB_TIP], hand[INDEX_MCP]),
        }
    }

    /// Middle, ring and pinky all curled
    fn back_three_curled(&self) -> bool {
        !self.middle_extended && !self.ring_extended && !self.pinky_extended
    }
}

// ============================================================================
// RULES (order-dependent)
// ============================================================================

/// L: thumb and index out, the rest curled
fn matches_l(m: &HandMetrics) -> bool {
    m.thumb_extended && m.index_extended && m.back_three_curled()
}

/// F: thumb-index pinch closed, the other three fingers up
fn matches_f(m: &HandMetrics) -> bool {
    m.pinch_dist < PINCH_MAX && m.middle_extended && m.ring_extended && m.pinky_extended
}

/// B: flat hand, thumb folded across the palm
fn matches_b(m: &HandMetrics) -> bool {
    m.index_extended
        && m.middle_extended
        && m.ring_extended
        && m.pinky_extended
        && m.thumb_tuck < m.hand_size * TUCK_MAX_FRAC
}

/// C: fingers curled into a wide arc, thumb held away from the palm
fn matches_c(m: &HandMetrics) -> bool {
    !m.index_extended
        && m.back_three_curled()
        && m.tip_spread > m.hand_size * SPREAD_MIN_FRAC
        && m.thumb_tuck > m.hand_size * GAP_MIN_FRAC
}

/// A: fist. Fallback once C's stricter arc geometry is ruled out.
fn matches_a(m: &HandMetrics) -> bool {
    !m.index_extended && m.back_three_curled()
}

/// First matching rule wins. C must stay ahead of A: every C hand is also
/// an A hand, so swapping them makes C unreachable.
const RULES: [(Sign, fn(&HandMetrics) -> bool); 5] = [
    (Sign::L, matches_l),
    (Sign::F, matches_f),
    (Sign::B, matches_b),
    (Sign::C, matches_c),
    (Sign::A, matches_a),
];

/// Classify one frame's hand, or the absence of one.
///
/// Total: an absent hand is Unknown, an unmatched hand is Unknown.
pub fn classify(hand: Option<&Hand>) -> Sign {
    match hand {
        Some(hand) => classify_metrics(&HandMetrics::measure(hand)),
        None => Sign::Unknown,
    }
}

/// Run the decision list over already-measured metrics
pub fn classify_metrics(metrics: &HandMetrics) -> Sign {
    for (sign, rule) in RULES.iter() {
        if rule(metrics) {
            return *sign;
        }
    }
    Sign::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Landmark, LANDMARK_COUNT};

    // Synthetic hands share one skeleton: wrist at (0.5, 0.9), the MCP row
    // at y = 0.7, pinky column at x = 0.5, so hand_size is exactly 0.2.

    fn set(hand: &mut Hand, idx: usize, x: f32, y: f32, z: f32) {
        hand[idx] = Landmark::new(x, y, z);
    }

    fn base_hand() -> Hand {
        let mut hand = [Landmark::default(); LANDMARK_COUNT];
        set(&mut hand, WRIST, 0.5, 0.9, 0.0);
        hand
    }

    /// Finger pointing straight up from its column
    fn extend_finger(hand: &mut Hand, finger: Finger, x: f32) {
        let [mcp, pip, dip, tip] = finger.joints();
        set(hand, mcp, x, 0.70, 0.0);
        set(hand, pip, x, 0.60, 0.0);
        set(hand, dip, x, 0.55, 0.0);
        set(hand, tip, x, 0.50, 0.0);
    }

    /// Finger folded back down, tip below both reference joints
    fn curl_finger(hand: &mut Hand, finger: Finger, x: f32) {
        let [mcp, pip, dip, tip] = finger.joints();
        set(hand, mcp, x, 0.70, 0.0);
        set(hand, pip, x, 0.64, 0.0);
        set(hand, dip, x, 0.66, 0.0);
        set(hand, tip, x, 0.72, 0.0);
    }

    /// Thumb out to the side, tip toward the camera
    fn extend_thumb(hand: &mut Hand) {
        let [cmc, mcp, ip, tip] = Finger::Thumb.joints();
        set(hand, cmc, 0.44, 0.86, 0.0);
        set(hand, mcp, 0.40, 0.80, 0.0);
        set(hand, ip, 0.36, 0.75, -0.02);
        set(hand, tip, 0.32, 0.70, -0.04);
    }

    /// Thumb folded in, tip parked at the given spot (pushed slightly away
    /// from the camera so the depth gate reads it as curled)
    fn curl_thumb_to(hand: &mut Hand, x: f32, y: f32) {
        let [cmc, mcp, ip, tip] = Finger::Thumb.joints();
        set(hand, cmc, 0.44, 0.86, 0.0);
        set(hand, mcp, 0.40, 0.80, 0.0);
        set(hand, ip, 0.42, 0.76, 0.01);
        set(hand, tip, x, y, 0.005);
    }

    fn l_hand() -> Hand {
        let mut hand = base_hand();
        extend_thumb(&mut hand);
        extend_finger(&mut hand, Finger::Index, 0.38);
        curl_finger(&mut hand, Finger::Middle, 0.42);
        curl_finger(&mut hand, Finger::Ring, 0.46);
        curl_finger(&mut hand, Finger::Pinky, 0.50);
        hand
    }

    fn cupped_hand() -> Hand {
        // Curled tips straddle the palm: spread 0.12 (0.6 x hand size),
        // thumb tip 0.04 from the index MCP (0.2 x hand size)
        let mut hand = base_hand();
        curl_finger(&mut hand, Finger::Index, 0.38);
        curl_finger(&mut hand, Finger::Middle, 0.42);
        curl_finger(&mut hand, Finger::Ring, 0.46);
        curl_finger(&mut hand, Finger::Pinky, 0.50);
        curl_thumb_to(&mut hand, 0.38, 0.74);
        hand
    }

    #[test]
    fn test_l_sign() {
        assert_eq!(classify(Some(&l_hand())), Sign::L);
    }

    #[test]
    fn test_f_sign() {
        let mut hand = base_hand();
        curl_finger(&mut hand, Finger::Index, 0.38);
        extend_finger(&mut hand, Finger::Middle, 0.42);
        extend_finger(&mut hand, Finger::Ring, 0.46);
        extend_finger(&mut hand, Finger::Pinky, 0.50);
        // Thumb tip pinched against the curled index tip
        curl_thumb_to(&mut hand, 0.40, 0.70);

        let m = HandMetrics::measure(&hand);
        assert!(m.pinch_dist < PINCH_MAX);
        assert_eq!(classify_metrics(&m), Sign::F);
    }

    #[test]
    fn test_b_sign() {
        let mut hand = base_hand();
        extend_finger(&mut hand, Finger::Index, 0.38);
        extend_finger(&mut hand, Finger::Middle, 0.42);
        extend_finger(&mut hand, Finger::Ring, 0.46);
        extend_finger(&mut hand, Finger::Pinky, 0.50);
        // Thumb folded across the palm, tip next to the index MCP
        curl_thumb_to(&mut hand, 0.40, 0.72);

        let m = HandMetrics::measure(&hand);
        assert!(m.thumb_tuck < m.hand_size * TUCK_MAX_FRAC);
        assert_eq!(classify_metrics(&m), Sign::B);
    }

    #[test]
    fn test_c_sign() {
        let m = HandMetrics::measure(&cupped_hand());
        assert!((m.tip_spread - 0.6 * m.hand_size).abs() < 1e-3);
        assert!((m.thumb_tuck - 0.2 * m.hand_size).abs() < 1e-3);
        assert_eq!(classify_metrics(&m), Sign::C);
    }

    #[test]
    fn test_narrow_fist_is_a_not_c() {
        // Same fist, columns pulled together: spread 0.06 (0.3 x hand size)
        let mut hand = base_hand();
        curl_finger(&mut hand, Finger::Index, 0.44);
        curl_finger(&mut hand, Finger::Middle, 0.46);
        curl_finger(&mut hand, Finger::Ring, 0.48);
        curl_finger(&mut hand, Finger::Pinky, 0.50);
        curl_thumb_to(&mut hand, 0.44, 0.74);

        let m = HandMetrics::measure(&hand);
        assert!((m.tip_spread - 0.3 * m.hand_size).abs() < 1e-3);
        assert_eq!(classify_metrics(&m), Sign::A);
    }

    #[test]
    fn test_tucked_thumb_fist_is_a_not_c() {
        // Wide spread but thumb flat against the index MCP
        let mut hand = cupped_hand();
        curl_thumb_to(&mut hand, 0.385, 0.71);

        let m = HandMetrics::measure(&hand);
        assert!(m.thumb_tuck < m.hand_size * GAP_MIN_FRAC);
        assert_eq!(classify_metrics(&m), Sign::A);
    }

    #[test]
    fn test_rule_order_c_shadows_a() {
        // Every C hand also satisfies the A fallback; the table order is
        // what keeps C reachable
        let m = HandMetrics::measure(&cupped_hand());
        assert!(matches_a(&m));
        assert!(matches_c(&m));
        assert_eq!(classify_metrics(&m), Sign::C);
    }

    #[test]
    fn test_unmatched_hand_is_unknown() {
        // Two fingers up, two down: no rule covers it
        let mut hand = base_hand();
        extend_finger(&mut hand, Finger::Index, 0.38);
        extend_finger(&mut hand, Finger::Middle, 0.42);
        curl_finger(&mut hand, Finger::Ring, 0.46);
        curl_finger(&mut hand, Finger::Pinky, 0.50);
        curl_thumb_to(&mut hand, 0.40, 0.78);

        assert_eq!(classify(Some(&hand)), Sign::Unknown);
    }

    #[test]
    fn test_absent_hand_is_unknown() {
        assert_eq!(classify(None), Sign::Unknown);
    }

    #[test]
    fn test_classify_is_deterministic() {
        let hand = l_hand();
        let first = classify(Some(&hand));
        for _ in 0..10 {
            assert_eq!(classify(Some(&hand)), first);
        }
    }
}
