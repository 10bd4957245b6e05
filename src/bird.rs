use crate::animation::FlapAnimation;

/// Displacement (in pixels) for `tick_count` ticks after a jump, before any
/// clamping. Velocity is negative while climbing.
pub fn displacement(velocity: f32, tick_count: u32) -> f32 {
    let n = tick_count as f32;
    velocity * n + Bird::GRAVITY * n * n
}

/// The player-controlled bird.
///
/// The bird never moves horizontally; the world scrolls past it. Vertical
/// motion follows a quadratic curve restarted at every jump.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: i32,
    pub y: f32,
    pub velocity: f32,
    pub tick_count: u32,
    pub tilt: i32,
    pub reference_height: f32,
    animation: FlapAnimation,
}

impl Bird {
    pub const MAX_ROTATION: i32 = 20;
    pub const TILT_FLOOR: i32 = -60;
    pub const TILT_STEP: i32 = 40;
    pub const JUMP_VELOCITY: f32 = -10.5;
    pub const GRAVITY: f32 = 1.5;
    /// Displacements at or above this are replaced by `TERMINAL_DISPLACEMENT`.
    pub const TERMINAL_THRESHOLD: f32 = 16.0;
    pub const TERMINAL_DISPLACEMENT: f32 = 20.0;
    /// Extra lift applied on every climbing tick.
    pub const CLIMB_BOOST: f32 = 2.0;

    pub fn new(x: i32, y: f32) -> Self {
        Bird {
            x,
            y,
            velocity: 0.0,
            tick_count: 0,
            tilt: 0,
            reference_height: y,
            animation: FlapAnimation::new(),
        }
    }

    pub fn jump(&mut self) {
        self.velocity = Self::JUMP_VELOCITY;
        self.tick_count = 0;
        self.reference_height = self.y;
    }

    /// Runs one physics tick.
    pub fn advance(&mut self) {
        self.tick_count += 1;

        let mut d = displacement(self.velocity, self.tick_count);

        // Terminal fall speed: anything from 16 up becomes exactly 20
        if d >= Self::TERMINAL_THRESHOLD {
            d = Self::TERMINAL_DISPLACEMENT;
        }

        if d < 0.0 {
            d -= Self::CLIMB_BOOST;
        }

        self.y += d;

        if d < 0.0 || self.y < self.reference_height + 10.0 {
            if self.tilt < Self::MAX_ROTATION {
                self.tilt = Self::MAX_ROTATION;
            }
        } else if self.tilt > Self::TILT_FLOOR {
            self.tilt -= Self::TILT_STEP;
        }
    }

    /// Moves the wing animation on by one tick.
    pub fn animate(&mut self) {
        self.animation.advance(self.tilt);
    }

    /// Index of the wing frame currently shown (and used for collision).
    pub fn frame(&self) -> usize {
        self.animation.frame()
    }

    /// Vertical position rounded the way pixel offsets are computed.
    pub fn pixel_y(&self) -> i32 {
        self.y.round_ties_even() as i32
    }
}
