// Game module - simulation state and the loop that drives it
//
// This module contains:
// - types.rs: Loop states, termination and death reasons
// - world.rs: World struct, pipe lifecycle and scoring
// - session.rs: Per-tick state machine over a World
// - frame_clock.rs: Fixed-rate tick pacing

pub mod frame_clock;
pub mod session;
pub mod types;
pub mod world;

// Re-export types for convenience
pub use frame_clock::FrameClock;
pub use session::Session;
pub use types::*;
pub use world::World;
