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

//! Backend-agnostic input contracts.

/// An engine-internal representation of a keyboard event.
///
/// Key codes use the physical key names of common windowing backends
/// (`"KeyW"`, `"ArrowUp"`, ...), so a backend adapter only needs to stringify
/// its own key enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A keyboard key was pressed.
    KeyPressed {
        /// A string representation of the physical key code.
        key_code: String,
    },
    /// A keyboard key was released.
    KeyReleased {
        /// A string representation of the physical key code.
        key_code: String,
    },
}

/// The logical keys used to fly a camera around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraKey {
    /// Pitch the camera up.
    TurnUp,
    /// Pitch the camera down.
    TurnDown,
    /// Yaw the camera left.
    TurnLeft,
    /// Yaw the camera right.
    TurnRight,
    /// Move along the camera's local +Z axis.
    Forward,
    /// Move along the camera's local -Z axis.
    Backward,
    /// Move along the camera's local -X axis.
    Left,
    /// Move along the camera's local +X axis.
    Right,
}

impl CameraKey {
    /// Every camera key, in a stable order.
    pub const ALL: [CameraKey; 8] = [
        CameraKey::TurnUp,
        CameraKey::TurnDown,
        CameraKey::TurnLeft,
        CameraKey::TurnRight,
        CameraKey::Forward,
        CameraKey::Backward,
        CameraKey::Left,
        CameraKey::Right,
    ];

    /// Maps a physical key code to the camera key it drives, if any.
    ///
    /// Arrow keys turn, `W`/`A`/`S`/`D` move.
    pub fn from_key_code(key_code: &str) -> Option<Self> {
        match key_code {
            "ArrowUp" => Some(CameraKey::TurnUp),
            "ArrowDown" => Some(CameraKey::TurnDown),
            "ArrowLeft" => Some(CameraKey::TurnLeft),
            "ArrowRight" => Some(CameraKey::TurnRight),
            "KeyW" => Some(CameraKey::Forward),
            "KeyS" => Some(CameraKey::Backward),
            "KeyA" => Some(CameraKey::Left),
            "KeyD" => Some(CameraKey::Right),
            _ => None,
        }
    }
}

/// A polled view of which keys are currently held.
pub trait InputState {
    /// Returns `true` while `key` is held down.
    fn is_held(&self, key: CameraKey) -> bool;
}

/// An input source where nothing is ever held.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputState for NoInput {
    fn is_held(&self, _key: CameraKey) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_code_mapping() {
        assert_eq!(CameraKey::from_key_code("ArrowUp"), Some(CameraKey::TurnUp));
        assert_eq!(CameraKey::from_key_code("KeyD"), Some(CameraKey::Right));
        assert_eq!(CameraKey::from_key_code("Space"), None);
    }

    #[test]
    fn test_no_input_holds_nothing() {
        assert!(CameraKey::ALL.iter().all(|k| !NoInput.is_held(*k)));
    }
}
