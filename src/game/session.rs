// Game loop state machine
//
// A Session drives one World through input, simulation and the
// RUNNING -> TERMINATED transition. It never restarts itself: the outer loop
// sees the terminated state and decides whether to call `restart` or exit.

use crate::collision::SpriteMasks;
use crate::input_system::GameAction;
use log::info;

use super::{GameState, Termination, World};

pub struct Session<'m> {
    world: World<'m>,
    state: GameState,
    runs: u32,
    best_score: u32,
}

impl<'m> Session<'m> {
    pub fn new(masks: &'m SpriteMasks) -> Self {
        Self::from_world(World::new(masks))
    }

    pub fn from_world(world: World<'m>) -> Self {
        Session {
            world,
            state: GameState::Running,
            runs: 1,
            best_score: 0,
        }
    }

    pub fn world(&self) -> &World<'m> {
        &self.world
    }

    /// Number of runs started, counting the current one.
    pub fn runs(&self) -> u32 {
        self.runs
    }

    /// Highest score reached in any run of this process.
    pub fn best_score(&self) -> u32 {
        self.best_score.max(self.world.score)
    }

    /// Runs one tick: apply this tick's input, then advance the world.
    ///
    /// Does nothing once the session has terminated.
    pub fn step(&mut self, actions: &[GameAction]) -> GameState {
        if !self.state.is_running() {
            return self.state;
        }

        for action in actions {
            match action {
                GameAction::Jump => self.world.bird.jump(),
                GameAction::Quit => {
                    self.state = GameState::Terminated(Termination::Quit);
                    return self.state;
                }
            }
        }

        if let Some(reason) = self.world.tick() {
            self.state = GameState::Terminated(Termination::Restart(reason));
        }

        self.state
    }

    /// Rebuilds the world after a death and resumes running.
    ///
    /// Quitting is final; a quit session stays terminated.
    pub fn restart(&mut self) {
        if let GameState::Terminated(Termination::Restart(reason)) = self.state {
            info!(
                "Run {} over: {} with score {}",
                self.runs, reason, self.world.score
            );
            self.best_score = self.best_score();
            self.world.reset();
            self.runs += 1;
            self.state = GameState::Running;
        }
    }
}
