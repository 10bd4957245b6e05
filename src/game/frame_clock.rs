// Fixed-rate tick pacing
//
// The simulation is step-based, so pacing only has to make each tick take
// at least its share of a second. A slow tick is not made up for later.

use std::time::{Duration, Instant};

pub const TICKS_PER_SECOND: u32 = 30;

pub struct FrameClock {
    budget: Duration,
    tick_start: Instant,
}

impl FrameClock {
    pub fn new(ticks_per_second: u32) -> Self {
        FrameClock {
            budget: Duration::from_secs(1) / ticks_per_second.max(1),
            tick_start: Instant::now(),
        }
    }

    /// Time left in a tick that has already taken `elapsed`.
    pub fn remaining(&self, elapsed: Duration) -> Duration {
        self.budget.saturating_sub(elapsed)
    }

    /// Sleeps out the rest of the current tick and starts the next one.
    pub fn wait(&mut self) {
        let remaining = self.remaining(self.tick_start.elapsed());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.tick_start = Instant::now();
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TICKS_PER_SECOND)
    }
}
