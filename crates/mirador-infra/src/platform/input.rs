// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Keyboard state built from backend-agnostic input events.

use mirador_core::platform::{CameraKey, InputEvent, InputState};
use std::collections::HashSet;

/// Tracks which camera keys are currently held.
///
/// Feed it every [`InputEvent`] the windowing layer produces; keys that do not
/// drive the camera are ignored.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    held: HashSet<CameraKey>,
}

impl KeyboardState {
    /// Creates a state with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a state holding the keys named by `key_codes`.
    ///
    /// Unknown codes are skipped with a warning.
    pub fn holding<'a>(key_codes: impl IntoIterator<Item = &'a str>) -> Self {
        let mut state = Self::new();
        for code in key_codes {
            match CameraKey::from_key_code(code) {
                Some(key) => state.press(key),
                None => log::warn!("Ignoring unknown key code '{code}'"),
            }
        }
        state
    }

    /// Applies one input event.
    pub fn handle_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyPressed { key_code } => {
                if let Some(key) = CameraKey::from_key_code(key_code) {
                    self.press(key);
                }
            }
            InputEvent::KeyReleased { key_code } => {
                if let Some(key) = CameraKey::from_key_code(key_code) {
                    self.release(key);
                }
            }
        }
    }

    /// Marks `key` as held.
    pub fn press(&mut self, key: CameraKey) {
        self.held.insert(key);
    }

    /// Marks `key` as released.
    pub fn release(&mut self, key: CameraKey) {
        self.held.remove(&key);
    }

    /// Releases every key, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

impl InputState for KeyboardState {
    fn is_held(&self, key: CameraKey) -> bool {
        self.held.contains(&key)
    }
}
