use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

/// Actions the player can perform in the game
///
/// Raw SDL2 events are translated into these before the game loop sees
/// them, so the simulation never depends on SDL types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Jump,
    Quit,
}

/// InputSystem processes SDL2 events and produces GameActions
///
/// Polled once per tick. Every event queued since the previous poll is
/// delivered exactly once; events with no meaning in the game are dropped.
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Drain pending SDL2 events and return the actions they map to, in order.
    pub fn poll_events(&self, event_pump: &mut EventPump) -> Vec<GameAction> {
        event_pump
            .poll_iter()
            .filter_map(|event| self.action_for_event(&event))
            .collect()
    }

    pub fn action_for_event(&self, event: &Event) -> Option<GameAction> {
        match event {
            Event::Quit { .. } => Some(GameAction::Quit),
            Event::KeyDown {
                keycode: Some(key), ..
            } => self.action_for_key(*key),
            _ => None,
        }
    }

    /// Space jumps, Q quits; every other key is ignored.
    pub fn action_for_key(&self, key: Keycode) -> Option<GameAction> {
        match key {
            Keycode::Space => Some(GameAction::Jump),
            Keycode::Q => Some(GameAction::Quit),
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}
