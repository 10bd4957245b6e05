//! Tick-driven wing-flap animation for the bird.
//!
//! The bird has three wing frames played as a ping-pong cycle
//! (up, level, down, level, up). Each frame holds for `FRAME_TICKS` ticks.
//! Frame selection matters to the simulation, not just the picture: the
//! collision mask is taken from whichever frame is current.

/// Ticks each frame is held before moving on.
pub const FRAME_TICKS: u32 = 5;

/// Number of distinct wing frames.
pub const FRAME_COUNT: usize = 3;

/// Tilt at or below which the bird is diving and the wings stay level.
pub const DIVE_TILT: i32 = -80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlapAnimation {
    counter: u32,
    frame: usize,
}

impl FlapAnimation {
    pub fn new() -> Self {
        FlapAnimation {
            counter: 0,
            frame: 0,
        }
    }

    /// Index of the current wing frame, always `< FRAME_COUNT`.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// Advances one tick.
    ///
    /// Counts 1..=5 show frame 0, 6..=10 frame 1, 11..=15 frame 2,
    /// 16..=20 frame 1, and count 21 shows frame 0 again and restarts the
    /// cycle. While diving the level frame is pinned and the counter parked
    /// at its start so the cycle resumes there when the bird climbs.
    pub fn advance(&mut self, tilt: i32) {
        self.counter += 1;

        self.frame = match self.counter {
            c if c <= FRAME_TICKS => 0,
            c if c <= FRAME_TICKS * 2 => 1,
            c if c <= FRAME_TICKS * 3 => 2,
            c if c <= FRAME_TICKS * 4 => 1,
            _ => {
                self.counter = 0;
                0
            }
        };

        if tilt <= DIVE_TILT {
            self.frame = 1;
            self.counter = FRAME_TICKS * 2;
        }
    }
}

impl Default for FlapAnimation {
    fn default() -> Self {
        Self::new()
    }
}
