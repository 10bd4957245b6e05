// Shared enums for the game loop state machine

use std::fmt;

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathReason {
    PipeCollision,
    GroundCollision,
}

impl fmt::Display for DeathReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DeathReason::PipeCollision => write!(f, "hit a pipe"),
            DeathReason::GroundCollision => write!(f, "hit the ground"),
        }
    }
}

/// How the loop leaves the running state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The bird died; the world is rebuilt from scratch.
    Restart(DeathReason),
    /// The player asked to close the game.
    Quit,
}

/// Game state tracked by the loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Running,
    Terminated(Termination),
}

impl GameState {
    pub fn is_running(&self) -> bool {
        matches!(self, GameState::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_death_reason_display() {
        assert_eq!(DeathReason::PipeCollision.to_string(), "hit a pipe");
        assert_eq!(DeathReason::GroundCollision.to_string(), "hit the ground");
    }

    #[test]
    fn test_is_running() {
        assert!(GameState::Running.is_running());
        assert!(!GameState::Terminated(Termination::Quit).is_running());
        assert!(
            !GameState::Terminated(Termination::Restart(DeathReason::GroundCollision)).is_running()
        );
    }
}
