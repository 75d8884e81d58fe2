//! Stability tracking - debounced sign commits
//!
//! Per-frame classifications jitter. A sign only reaches the transcript
//! after it has been observed on enough consecutive frames, so a letter is
//! typed deliberately and a single frame of noise types nothing.
//!
//! The tracker is an owned value with no internal synchronization; one
//! caller feeds it frames in arrival order.

use super::sign::Sign;

/// Consecutive stable frames required before a sign is committed (~0.7s at 30Hz)
pub const HOLD_FRAMES: u32 = 20;

/// Per-frame tracker verdict
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// No hand, or no confident sign this frame
    NoHand,
    /// Same sign as last frame, streak still below the commit threshold
    Holding,
    /// A different sign than last frame; streak restarted
    Changed,
    /// Streak reached the threshold; one letter was appended
    Committed,
}

impl Status {
    /// Display label for UI status text
    pub fn name(&self) -> &'static str {
        match self {
            Status::NoHand => "no hand",
            Status::Holding => "holding",
            Status::Changed => "changed",
            Status::Committed => "committed",
        }
    }
}

/// Result of feeding one frame's sign to the tracker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameUpdate {
    pub status: Status,
    /// The letter appended to the transcript this frame, if any
    pub committed: Option<char>,
}

/// Debounce state machine between the classifier and the transcript
pub struct StabilityTracker {
    last_sign: Sign,
    run_length: u32,
    transcript: String,
    hold_frames: u32,
}

impl StabilityTracker {
    pub fn new() -> Self {
        Self::with_hold_frames(HOLD_FRAMES)
    }

    /// Tracker with a custom commit threshold
    pub fn with_hold_frames(hold_frames: u32) -> Self {
        Self {
            last_sign: Sign::Unknown,
            run_length: 0,
            transcript: String::new(),
            hold_frames,
        }
    }

    /// Feed one frame's classification, in frame-arrival order.
    ///
    /// Unknown always clears the streak. A repeated sign extends it, and on
    /// the frame the streak reaches the threshold the sign's letter is
    /// appended to the transcript. After a commit the counter restarts at 1,
    /// not 0: the committing frame still counts as a stable observation, so
    /// the same held sign needs `hold_frames - 1` further frames before it
    /// can commit again.
    pub fn update(&mut self, observed: Sign) -> FrameUpdate {
        if observed == Sign::Unknown {
            self.last_sign = Sign::Unknown;
            self.run_length = 0;
            return FrameUpdate {
                status: Status::NoHand,
                committed: None,
            };
        }

        if observed == self.last_sign {
            self.run_length += 1;
            if self.run_length == self.hold_frames {
                self.run_length = 1;
                if let Some(letter) = observed.letter() {
                    self.transcript.push(letter);
                }
                return FrameUpdate {
                    status: Status::Committed,
                    committed: observed.letter(),
                };
            }
            FrameUpdate {
                status: Status::Holding,
                committed: None,
            }
        } else {
            self.last_sign = observed;
            self.run_length = 0;
            FrameUpdate {
                status: Status::Changed,
                committed: None,
            }
        }
    }

    /// Clear transcript and streak. Explicit external operation; nothing in
    /// the frame path triggers it.
    pub fn reset(&mut self) {
        self.last_sign = Sign::Unknown;
        self.run_length = 0;
        self.transcript.clear();
    }

    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    pub fn last_sign(&self) -> Sign {
        self.last_sign
    }

    pub fn run_length(&self) -> u32 {
        self.run_length
    }
}

impl Default for StabilityTracker {
    fn default() -> Self {
        Self::new()
    }
}
