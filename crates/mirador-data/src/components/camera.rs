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

use super::Transform;
use mirador_core::math::{Mat4, Vec3, FRAC_PI_3};
use mirador_core::platform::{CameraKey, InputState};

/// Default vertical field of view: 60 degrees.
pub const CAMERA_FOV_Y: f32 = FRAC_PI_3;

/// A perspective viewer.
///
/// Only the position and the pitch/yaw of the transform are meaningful; roll
/// is stored but the camera never rolls and scale is ignored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Placement of the eye. `rotation.x` is pitch (positive looks down),
    /// `rotation.y` is yaw.
    pub transform: Transform,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Width / height of the target the camera renders into.
    pub aspect_ratio: f32,
    /// Distance to the near clipping plane.
    pub z_near: f32,
    /// Distance to the far clipping plane.
    pub z_far: f32,
}

impl Camera {
    /// Creates a camera at `position` with Euler `rotation` (radians).
    pub fn new(position: Vec3, rotation: Vec3, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            transform: Transform::new(position, rotation, Vec3::ONE),
            fov_y: CAMERA_FOV_Y,
            aspect_ratio,
            z_near,
            z_far,
        }
    }

    /// World position of the eye.
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Eye-to-world matrix, without scale.
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.transform.position) * self.transform.rotation_matrix()
    }

    /// World-to-view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        self.world_matrix().inverse()
    }

    /// Left-handed perspective projection with a `[0, 1]` depth range.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_lh(self.fov_y, self.aspect_ratio, self.z_near, self.z_far)
    }

    /// `projection * view`.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Updates the aspect ratio from a target size. Ignores a zero height.
    pub fn set_aspect_ratio(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect_ratio = width as f32 / height as f32;
        }
    }

    /// Turns the camera to look at `target`.
    pub fn face_target(&mut self, target: Vec3) {
        self.transform.face_target(target);
    }

    /// Applies one frame of free-fly control.
    ///
    /// Turn keys change pitch and yaw at `turn_speed` radians per second; move
    /// keys translate along the camera's own X and Z axes at `move_speed` units
    /// per second.
    pub fn control(&mut self, dt: f32, input: &dyn InputState, turn_speed: f32, move_speed: f32) {
        let turn = turn_speed * dt;
        let step = move_speed * dt;

        if input.is_held(CameraKey::TurnUp) {
            self.transform.rotation.x -= turn;
        }
        if input.is_held(CameraKey::TurnDown) {
            self.transform.rotation.x += turn;
        }
        if input.is_held(CameraKey::TurnLeft) {
            self.transform.rotation.y -= turn;
        }
        if input.is_held(CameraKey::TurnRight) {
            self.transform.rotation.y += turn;
        }

        let forward = self.transform.forward();
        let right = self.transform.right();
        if input.is_held(CameraKey::Forward) {
            self.transform.position += forward * step;
        }
        if input.is_held(CameraKey::Backward) {
            self.transform.position -= forward * step;
        }
        if input.is_held(CameraKey::Right) {
            self.transform.position += right * step;
        }
        if input.is_held(CameraKey::Left) {
            self.transform.position -= right * step;
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ZERO, 16.0 / 9.0, 0.1, 1000.0)
    }
}
