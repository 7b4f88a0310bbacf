use crate::input::{Key, KeyState};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::EventPump;

/// Host-level actions triggered by input
///
/// Movement keys never appear here: they only change the held-key state the
/// simulation reads. These are the one-shot commands the game loop handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Window closed or Escape pressed
    Quit,
    /// Rebuild player and enemies from the level (R)
    Restart,
    /// Outline the tiles the player overlaps (B)
    ToggleCollisionBoxes,
}

/// InputSystem translates SDL2 events into held keys and GameActions
///
/// Input processing happens in two halves:
/// 1. Key-down/key-up of movement keys update the `KeyState`
/// 2. Key-down of command keys (and window close) produce `GameAction`s
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Drains all pending SDL2 events.
    pub fn poll_events(&self, event_pump: &mut EventPump, keys: &mut KeyState) -> Vec<GameAction> {
        let mut actions = Vec::new();

        for event in event_pump.poll_iter() {
            if let Some(action) = self.handle_event(&event, keys) {
                actions.push(action);
            }
        }

        actions
    }

    /// Applies a single event to the key state and returns any resulting action.
    pub fn handle_event(&self, event: &Event, keys: &mut KeyState) -> Option<GameAction> {
        match event {
            Event::Quit { .. } => Some(GameAction::Quit),
            Event::KeyDown {
                keycode: Some(keycode),
                repeat,
                ..
            } => {
                if let Some(key) = map_keycode(*keycode) {
                    keys.press(key);
                    return None;
                }
                if *repeat {
                    return None;
                }
                match *keycode {
                    Keycode::Escape => Some(GameAction::Quit),
                    Keycode::R => Some(GameAction::Restart),
                    Keycode::B => Some(GameAction::ToggleCollisionBoxes),
                    _ => None,
                }
            }
            Event::KeyUp {
                keycode: Some(keycode),
                ..
            } => {
                if let Some(key) = map_keycode(*keycode) {
                    keys.release(key);
                }
                None
            }
            // Held keys would stay stuck if their key-up went to another window
            Event::Window {
                win_event: sdl2::event::WindowEvent::FocusLost,
                ..
            } => {
                keys.clear();
                None
            }
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps SDL keycodes to the simulation's movement keys.
pub fn map_keycode(keycode: Keycode) -> Option<Key> {
    match keycode {
        Keycode::Left => Some(Key::ArrowLeft),
        Keycode::Right => Some(Key::ArrowRight),
        Keycode::Up => Some(Key::ArrowUp),
        Keycode::A => Some(Key::A),
        Keycode::D => Some(Key::D),
        Keycode::Space => Some(Key::Space),
        _ => None,
    }
}
