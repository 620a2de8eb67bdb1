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

//! Point lights and their animation configuration.
//!
//! A light is drawn as a glowing marker model. Its position is the marker's
//! position, so moving the light means moving the marker.

use super::Model;
use crate::store::ModelId;
use mirador_core::animation::{OrbitDriver, Oscillator};
use mirador_core::math::Vec3;

/// Red and green channels drifting independently; blue stays fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorDrift {
    /// Drives the red channel.
    pub red: Oscillator,
    /// Drives the green channel.
    pub green: Oscillator,
    /// The constant blue channel.
    pub blue: f32,
}

impl ColorDrift {
    /// The color for the current oscillator values.
    pub fn color(&self) -> Vec3 {
        Vec3::new(self.red.value(), self.green.value(), self.blue)
    }
}

/// An orbit around another model of the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LightOrbit {
    /// The model whose current position is the orbit center.
    pub center: ModelId,
    /// The circular motion.
    pub driver: OrbitDriver,
}

/// Which animations apply to a light. Any combination may be present.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LightAnimation {
    /// Strength pulse. The marker is scaled to half the strength.
    pub pulse: Option<Oscillator>,
    /// Color drift.
    pub drift: Option<ColorDrift>,
    /// Orbit around a model.
    pub orbit: Option<LightOrbit>,
}

/// A point light with a visible marker.
#[derive(Debug, Clone)]
pub struct Light {
    /// The glowing marker. Its position is the light position.
    pub marker: Model,
    /// Base color. Channels are unbounded positive values.
    pub color: Vec3,
    /// Intensity multiplier.
    pub strength: f32,
    /// Animations applied every tick.
    pub animation: LightAnimation,
}

impl Light {
    /// Creates a static light. The marker is scaled to the strength.
    pub fn new(mut marker: Model, color: Vec3, strength: f32) -> Self {
        marker.transform.set_uniform_scale(strength);
        Self {
            marker,
            color,
            strength,
            animation: LightAnimation::default(),
        }
    }

    /// Attaches animations.
    pub fn with_animation(mut self, animation: LightAnimation) -> Self {
        self.animation = animation;
        self
    }

    /// World position of the light.
    pub fn position(&self) -> Vec3 {
        self.marker.transform.position
    }

    /// The color shaders receive: `color * strength`.
    pub fn emitted_color(&self) -> Vec3 {
        self.color * self.strength
    }
}
