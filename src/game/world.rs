// World state and obstacle bookkeeping
//
// The World owns every simulated entity (bird, pipes, base) plus the score
// and the random source used for pipe heights. Entities never reference
// each other; everything that involves two of them (collision, passing a
// pipe, hitting the floor) is decided here.

use crate::base::Base;
use crate::bird::Bird;
use crate::collision::{self, SpriteMasks};
use crate::pipe::Pipe;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::DeathReason;

pub const BIRD_START_X: i32 = 200;
pub const BIRD_START_Y: f32 = 150.0;
pub const BASE_Y: i32 = 730;
/// The bird dies once its bottom edge goes below this line.
pub const FLOOR_Y: i32 = BASE_Y;
pub const PIPE_SPAWN_X: i32 = 700;

/// World encapsulates all game entities and the score
pub struct World<'m> {
    pub bird: Bird,
    /// Active pipes in spawn order, which is also left-to-right order.
    pub pipes: Vec<Pipe>,
    pub base: Base,
    pub score: u32,
    masks: &'m SpriteMasks,
    rng: StdRng,
}

impl<'m> World<'m> {
    pub fn new(masks: &'m SpriteMasks) -> Self {
        Self::with_rng(masks, StdRng::from_entropy())
    }

    /// A world whose pipe heights are reproducible.
    #[cfg(test)]
    pub fn seeded(masks: &'m SpriteMasks, seed: u64) -> Self {
        Self::with_rng(masks, StdRng::seed_from_u64(seed))
    }

    fn with_rng(masks: &'m SpriteMasks, mut rng: StdRng) -> Self {
        let first_pipe = Pipe::spawn(PIPE_SPAWN_X, masks.pipe_height(), &mut rng);
        let mut world = World {
            bird: Bird::new(BIRD_START_X, BIRD_START_Y),
            pipes: vec![first_pipe],
            base: Base::new(BASE_Y, masks.base_width()),
            score: 0,
            masks,
            rng,
        };
        world.prime_bird();
        world
    }

    /// Puts every entity and the score back to their starting state.
    ///
    /// The random source carries on, so the new run gets fresh pipe heights.
    pub fn reset(&mut self) {
        self.bird = Bird::new(BIRD_START_X, BIRD_START_Y);
        self.prime_bird();
        self.base = Base::new(BASE_Y, self.masks.base_width());
        self.pipes.clear();
        self.pipes
            .push(Pipe::spawn(PIPE_SPAWN_X, self.masks.pipe_height(), &mut self.rng));
        self.score = 0;
    }

    /// A new run starts one tick into the bird's fall.
    fn prime_bird(&mut self) {
        self.bird.tick_count += 1;
    }

    /// Advances the simulation by one tick.
    ///
    /// Order: bird physics, then each pipe (move, collide, despawn, pass),
    /// then score and new pipes, then the floor check, then the ground
    /// scroll and the wing animation. Returns the cause of death if the bird
    /// died this tick; the rest of the tick is skipped in that case.
    pub fn tick(&mut self) -> Option<DeathReason> {
        self.bird.advance();

        let pipe_width = self.masks.pipe_width();
        let mut newly_passed = 0;

        for pipe in self.pipes.iter_mut() {
            pipe.advance();

            if collision::collides(&self.bird, pipe, self.masks) {
                debug!("Bird hit pipe at x={}", pipe.x);
                return Some(DeathReason::PipeCollision);
            }

            if !pipe.passed && pipe.x < self.bird.x {
                pipe.passed = true;
                newly_passed += 1;
            }
        }

        for _ in 0..newly_passed {
            self.score += 1;
            let pipe = Pipe::spawn(PIPE_SPAWN_X, self.masks.pipe_height(), &mut self.rng);
            debug!(
                "Score {}, spawned pipe with gap at {}",
                self.score, pipe.gap_center_height
            );
            self.pipes.push(pipe);
        }

        let before = self.pipes.len();
        self.pipes.retain(|pipe| !pipe.is_off_screen(pipe_width));
        if self.pipes.len() < before {
            debug!("Despawned {} pipe(s)", before - self.pipes.len());
        }

        let bird_height = self.masks.bird_height(self.bird.frame());
        if self.bird.y + bird_height as f32 > FLOOR_Y as f32 {
            return Some(DeathReason::GroundCollision);
        }

        self.base.advance();
        self.bird.animate();

        None
    }
}
