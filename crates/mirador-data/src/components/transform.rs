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

use mirador_core::math::{Mat4, Vec3};

/// Position, Euler rotation and scale of an entity in world space.
///
/// There is no hierarchy: every transform is relative to the world origin.
/// The world matrix is always derived on demand so it can never go stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World position.
    pub position: Vec3,
    /// Euler angles in radians, applied X first, then Y, then Z.
    pub rotation: Vec3,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Transform {
    /// Creates a new `Transform` with a given position, rotation, and scale.
    pub fn new(position: Vec3, rotation: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Creates a `Transform` at `position` with no rotation and unit scale.
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Creates a new identity `Transform`. This represents the origin.
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }

    /// Replaces the rotation.
    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Replaces the scale.
    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the same scale on all three axes.
    pub fn set_uniform_scale(&mut self, scale: f32) {
        self.scale = Vec3::splat(scale);
    }

    /// The rotation part alone: `Rz * Ry * Rx`.
    pub fn rotation_matrix(&self) -> Mat4 {
        Mat4::from_rotation_z(self.rotation.z)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_x(self.rotation.x)
    }

    /// Object-to-world matrix: scale, then rotate X, Y, Z, then translate.
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * self.rotation_matrix() * Mat4::from_scale(self.scale)
    }

    /// The object's local +X axis in world space (unit length).
    pub fn right(&self) -> Vec3 {
        self.rotation_matrix().x_axis.truncate()
    }

    /// The object's local +Y axis in world space (unit length).
    pub fn up(&self) -> Vec3 {
        self.rotation_matrix().y_axis.truncate()
    }

    /// The object's local +Z axis in world space (unit length).
    pub fn forward(&self) -> Vec3 {
        self.rotation_matrix().z_axis.truncate()
    }

    /// Rotates so the local +Z axis points at `target`. Roll is reset, scale kept.
    ///
    /// Does nothing when `target` coincides with the position.
    pub fn face_target(&mut self, target: Vec3) {
        let Some(dir) = (target - self.position).try_normalize() else {
            return;
        };
        let pitch = (-dir.y).clamp(-1.0, 1.0).asin();
        let yaw = dir.x.atan2(dir.z);
        self.rotation = Vec3::new(pitch, yaw, 0.0);
    }
}

impl Default for Transform {
    /// Returns the identity `Transform`.
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_world_matrix_applies_scale_before_translation() {
        let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0)).with_scale(Vec3::splat(2.0));
        let p = t.world_matrix().transform_point3(Vec3::X);
        assert_relative_eq!(p.x, 3.0);
        assert_relative_eq!(p.y, 2.0);
        assert_relative_eq!(p.z, 3.0);
    }

    #[test]
    fn test_world_matrix_rotates_x_before_y() {
        // Pitch 90 deg turns +Z into -Y; yaw then leaves -Y alone.
        let t = Transform::identity().with_rotation(Vec3::new(FRAC_PI_2, FRAC_PI_2, 0.0));
        let p = t.world_matrix().transform_vector3(Vec3::Z);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(p.y, -1.0, epsilon = 1e-6);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_world_matrix_is_recomputed_after_mutation() {
        let mut t = Transform::identity();
        let before = t.world_matrix();
        t.position.x = 5.0;
        assert_ne!(before, t.world_matrix());
    }

    #[test]
    fn test_face_target_points_forward_axis_at_target() {
        let mut t = Transform::from_position(Vec3::new(-70.0, 30.0, -100.0))
            .with_scale(Vec3::new(3.0, 3.0, 0.1));
        let target = Vec3::new(30.0, 5.0, -20.0);
        t.face_target(target);

        let expected = (target - t.position).normalize();
        let forward = t.forward();
        assert_relative_eq!(forward.x, expected.x, epsilon = 1e-5);
        assert_relative_eq!(forward.y, expected.y, epsilon = 1e-5);
        assert_relative_eq!(forward.z, expected.z, epsilon = 1e-5);
        assert_eq!(t.scale, Vec3::new(3.0, 3.0, 0.1));
        assert_eq!(t.rotation.z, 0.0);
    }

    #[test]
    fn test_face_target_ignores_coincident_target() {
        let mut t = Transform::identity().with_rotation(Vec3::new(0.1, 0.2, 0.3));
        t.face_target(Vec3::ZERO);
        assert_eq!(t.rotation, Vec3::new(0.1, 0.2, 0.3));
    }
}
