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

//! Math primitives used across the workspace.
//!
//! Vectors and matrices come from `glam`. All angular functions operate in
//! **radians** unless explicitly specified otherwise.

/// A small constant for floating-point comparisons.
pub const EPSILON: f32 = 1e-5;

pub use glam::{Mat4, Vec2, Vec3, Vec4};
pub use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, PI, TAU};

/// The factor to convert degrees to radians (PI / 180.0).
pub const DEG_TO_RAD: f32 = PI / 180.0;

/// Converts an angle from degrees to radians.
///
/// # Examples
///
/// ```
/// use mirador_core::math::{degrees_to_radians, PI};
/// assert_eq!(degrees_to_radians(180.0), PI);
/// ```
#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * DEG_TO_RAD
}

/// Converts Euler angles given in degrees to a radian vector.
#[inline]
pub fn degrees_vec(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z) * DEG_TO_RAD
}

/// A linear RGBA color used for clears and tints.
///
/// Kept as a plain `Vec4` alias; components are in `[0, 1]` for clears but
/// light colors are unbounded.
pub type LinearRgba = Vec4;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degrees_to_radians() {
        assert_relative_eq!(degrees_to_radians(90.0), FRAC_PI_2);
        assert_relative_eq!(degrees_to_radians(0.0), 0.0);
    }

    #[test]
    fn test_degrees_vec() {
        let v = degrees_vec(30.0, 215.0, 0.0);
        assert_relative_eq!(v.x, 30.0_f32.to_radians());
        assert_relative_eq!(v.y, 215.0_f32.to_radians());
        assert_eq!(v.z, 0.0);
    }
}
