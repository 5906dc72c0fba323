//! Frame-based keyboard state tracking
//!
//! Scenes poll key state each update instead of reacting to events; this
//! tracker folds the display's event stream into held/pressed sets that are
//! valid for one frame at a time.

use std::collections::HashSet;

use sdl2::keyboard::Keycode;

use crate::display::InputEvent;

#[derive(Default)]
pub struct InputState {
    held: HashSet<Keycode>,
    pressed: HashSet<Keycode>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the per-frame pressed set. Call once before feeding the frame's
    /// events.
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
    }

    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                // Key repeat delivers KeyDown while held; only the first
                // transition counts as a press
                if self.held.insert(*key) {
                    self.pressed.insert(*key);
                }
            },
            InputEvent::KeyUp(key) => {
                self.held.remove(key);
            },
            InputEvent::Quit => {},
        }
    }

    /// Key currently held down
    pub fn is_held(&self, key: Keycode) -> bool {
        self.held.contains(&key)
    }

    /// Key went down this frame
    pub fn was_pressed(&self, key: Keycode) -> bool {
        self.pressed.contains(&key)
    }
}
