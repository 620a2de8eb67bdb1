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

//! The two tiers of shader-visible constants.
//!
//! Both records follow 16-byte packing: every `Vec3` is followed by a scalar
//! that completes its row. Shaders bind [`PerFrameConstants`] at slot 0 and
//! [`PerModelConstants`] at slot 1.
//!
//! ```text
//! PerFrameConstants (400 bytes)       PerModelConstants (96 bytes)
//!   view            mat4                world          mat4
//!   projection      mat4                object_color   vec3 | wiggle
//!   view_projection mat4                rotation | lerp | pad | pad
//!   lights[5]       vec3 | pad
//!                   vec3 | pad
//!   ambient         vec3 | specular_power
//!   camera_position vec3 | pad
//!   outline_color   vec3 | outline_thickness
//! ```

use crate::math::{Mat4, Vec3};
use bytemuck::{Pod, Zeroable};

/// The number of point lights the shaders read.
pub const MAX_LIGHTS: usize = 5;

/// Slot the per-frame buffer is bound to.
pub const PER_FRAME_SLOT: u32 = 0;

/// Slot the per-model buffer is bound to.
pub const PER_MODEL_SLOT: u32 = 1;

/// The color a model is drawn with when nothing overrides it.
pub const DEFAULT_OBJECT_COLOR: Vec3 = Vec3::ONE;

/// One point light as seen by shaders.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct LightConstants {
    /// Emitted color, already multiplied by strength.
    pub color: Vec3,
    /// Padding.
    pub _pad0: f32,
    /// World position.
    pub position: Vec3,
    /// Padding.
    pub _pad1: f32,
}

impl LightConstants {
    /// Creates a light entry.
    pub fn new(color: Vec3, position: Vec3) -> Self {
        Self {
            color,
            _pad0: 0.0,
            position,
            _pad1: 0.0,
        }
    }
}

/// Constants that stay fixed for a whole pass.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PerFrameConstants {
    /// World to view.
    pub view: Mat4,
    /// View to clip.
    pub projection: Mat4,
    /// `projection * view`.
    pub view_projection: Mat4,
    /// The scene's point lights.
    pub lights: [LightConstants; MAX_LIGHTS],
    /// Ambient light color.
    pub ambient_color: Vec3,
    /// Specular exponent.
    pub specular_power: f32,
    /// World position of the viewer, for specular.
    pub camera_position: Vec3,
    /// Padding.
    pub _pad0: f32,
    /// Color of cell-shading outlines.
    pub outline_color: Vec3,
    /// Thickness of cell-shading outlines, in object units.
    pub outline_thickness: f32,
}

impl Default for PerFrameConstants {
    fn default() -> Self {
        Self {
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            view_projection: Mat4::IDENTITY,
            lights: [LightConstants::default(); MAX_LIGHTS],
            ambient_color: Vec3::ZERO,
            specular_power: 1.0,
            camera_position: Vec3::ZERO,
            _pad0: 0.0,
            outline_color: Vec3::ZERO,
            outline_thickness: 0.0,
        }
    }
}

/// Constants rewritten before every draw.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PerModelConstants {
    /// Object to world.
    pub world: Mat4,
    /// Tint applied by the pixel shader.
    pub object_color: Vec3,
    /// Vertex wiggle phase.
    pub wiggle: f32,
    /// Rotation phase.
    pub rotation: f32,
    /// Cross-fade factor between two textures.
    pub lerp: f32,
    /// Padding.
    pub _pad: [f32; 2],
}

impl Default for PerModelConstants {
    fn default() -> Self {
        Self {
            world: Mat4::IDENTITY,
            object_color: DEFAULT_OBJECT_COLOR,
            wiggle: 0.0,
            rotation: 0.0,
            lerp: 0.0,
            _pad: [0.0; 2],
        }
    }
}
