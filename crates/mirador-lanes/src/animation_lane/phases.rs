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

use mirador_core::animation::Oscillator;
use mirador_core::math::Vec3;

/// Rate of the vertex wiggle phase, in radians per second.
const WIGGLE_RATE: f32 = 6.0;

/// Time-varying values read by shaders through the per-model constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShaderPhases {
    /// Vertex wiggle phase. Grows without bound.
    pub wiggle: f32,
    /// Rotation phase. Grows without bound.
    pub rotation: f32,
    /// Drives the two-texture cross-fade between 0 and 1.
    pub lerp: Oscillator,
}

impl ShaderPhases {
    /// Advances every phase by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.wiggle += WIGGLE_RATE * dt;
        self.rotation += dt;
        self.lerp.advance(dt);
    }

    /// The current cross-fade factor.
    pub fn lerp_factor(&self) -> f32 {
        self.lerp.value()
    }
}

impl Default for ShaderPhases {
    fn default() -> Self {
        Self {
            wiggle: 0.0,
            rotation: 0.0,
            lerp: Oscillator::new(0.0, 1.0, 0.0, 1.0),
        }
    }
}

/// Accumulated spin of the blended cubes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpinAngles {
    /// Angle about X, radians.
    pub x: f32,
    /// Angle about Y, radians.
    pub y: f32,
    /// Angle about Z, radians.
    pub z: f32,
}

impl SpinAngles {
    /// Advances each axis by half a radian per second.
    pub fn advance(&mut self, dt: f32) {
        let step = dt / 2.0;
        self.x += step;
        self.y += step;
        self.z += step;
    }

    /// Rotation with the X axis left out.
    pub fn without_x(&self) -> Vec3 {
        Vec3::new(0.0, self.y, self.z)
    }

    /// Rotation with the Y axis left out.
    pub fn without_y(&self) -> Vec3 {
        Vec3::new(self.x, 0.0, self.z)
    }

    /// Rotation with the Z axis left out.
    pub fn without_z(&self) -> Vec3 {
        Vec3::new(self.x, self.y, 0.0)
    }
}
