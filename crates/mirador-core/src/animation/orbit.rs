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

//! Circular motion around a moving center.

use crate::math::Vec3;

/// Generates positions on a horizontal circle around a center point.
///
/// The angle accumulator starts at zero and *decreases* by `speed * dt` every
/// step, before the position is computed. The center is supplied on every call
/// so an orbiter follows its target when the target moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitDriver {
    angle: f32,
    speed: f32,
    radius: f32,
    height: f32,
}

impl OrbitDriver {
    /// Creates an orbit of the given radius, angular speed (radians per second)
    /// and vertical offset above the center.
    pub fn new(radius: f32, speed: f32, height: f32) -> Self {
        Self {
            angle: 0.0,
            speed,
            radius,
            height,
        }
    }

    /// Steps the orbit by `dt` seconds and returns the new world position.
    pub fn advance(&mut self, center: Vec3, dt: f32) -> Vec3 {
        self.angle -= self.speed * dt;
        self.position(center)
    }

    /// The position for the current angle without stepping.
    pub fn position(&self, center: Vec3) -> Vec3 {
        center
            + Vec3::new(
                self.radius * self.angle.cos(),
                self.height,
                self.radius * self.angle.sin(),
            )
    }

    /// The accumulated angle in radians. Always `<= 0` for a positive speed.
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// The orbit radius.
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// The angular speed in radians per second.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// The vertical offset above the center.
    pub fn height(&self) -> f32 {
        self.height
    }
}
