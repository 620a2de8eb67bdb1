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

//! Fixed-function state vocabulary.
//!
//! Each enum names one state object the renderer creates up front and binds per
//! draw. Backends decide how a variant maps onto their native state.

use std::fmt;

/// How a draw's output is combined with what is already in the color target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// Source replaces destination.
    None,
    /// `dst + src`. Used for glowing objects.
    Additive,
    /// `dst * src`. Darkens what is behind.
    Multiplicative,
    /// `src * a + dst * (1 - a)`.
    Alpha,
}

impl BlendMode {
    /// Every blend mode.
    pub const ALL: [BlendMode; 4] = [
        BlendMode::None,
        BlendMode::Additive,
        BlendMode::Multiplicative,
        BlendMode::Alpha,
    ];
}

/// Whether a draw writes depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthMode {
    /// Depth test and depth write.
    ReadWrite,
    /// Depth test only. Used for transparent sprites that must not occlude.
    ReadOnly,
}

impl DepthMode {
    /// Every depth mode.
    pub const ALL: [DepthMode; 2] = [DepthMode::ReadWrite, DepthMode::ReadOnly];
}

/// Which triangle faces are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CullMode {
    /// Cull back faces (the usual).
    Back,
    /// Cull front faces. Used for inflated outline shells.
    Front,
    /// Draw both sides.
    None,
}

impl CullMode {
    /// Every cull mode.
    pub const ALL: [CullMode; 3] = [CullMode::Back, CullMode::Front, CullMode::None];
}

/// Texture sampling configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplerKind {
    /// Trilinear with 4x anisotropy, wrapping.
    Anisotropic4x,
    /// Nearest-neighbour, clamped. Used for ramp lookups.
    Point,
}

impl SamplerKind {
    /// Every sampler kind.
    pub const ALL: [SamplerKind; 2] = [SamplerKind::Anisotropic4x, SamplerKind::Point];
}

/// A vertex + pixel shader pair implementing one surface look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderTechnique {
    /// Per-pixel Blinn-Phong with a diffuse/specular map.
    PixelLighting,
    /// Per-pixel lighting with alpha taken from the diffuse map.
    Alpha,
    /// Per-pixel lighting with a tangent-space normal map in slot 1.
    NormalMapping,
    /// Inflated back-face shell drawn in the outline color.
    CellShadingOutline,
    /// Toon lighting quantised through a ramp texture in slot 1.
    CellShading,
    /// Vertices displaced by the wiggle phase.
    Wiggle,
    /// Cross-fade between two textures by the lerp factor.
    FadeTwoTextures,
    /// Unlit billboard tinted by the object color.
    LightModel,
}

impl ShaderTechnique {
    /// Every technique, in the order the shader library creates them.
    pub const ALL: [ShaderTechnique; 8] = [
        ShaderTechnique::PixelLighting,
        ShaderTechnique::Alpha,
        ShaderTechnique::NormalMapping,
        ShaderTechnique::CellShadingOutline,
        ShaderTechnique::CellShading,
        ShaderTechnique::Wiggle,
        ShaderTechnique::FadeTwoTextures,
        ShaderTechnique::LightModel,
    ];

    /// The base name of this technique's shader sources.
    pub fn name(self) -> &'static str {
        match self {
            ShaderTechnique::PixelLighting => "PixelLighting",
            ShaderTechnique::Alpha => "Alpha",
            ShaderTechnique::NormalMapping => "NormalMapping",
            ShaderTechnique::CellShadingOutline => "CellShadingOutline",
            ShaderTechnique::CellShading => "CellShading",
            ShaderTechnique::Wiggle => "Wiggle",
            ShaderTechnique::FadeTwoTextures => "FadeTwoTextures",
            ShaderTechnique::LightModel => "LightModel",
        }
    }
}

impl fmt::Display for ShaderTechnique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A rectangular region of the render target, in pixels, with a depth range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
    /// Minimum depth, usually `0.0`.
    pub min_depth: f32,
    /// Maximum depth, usually `1.0`.
    pub max_depth: f32,
}

impl Viewport {
    /// A full-target viewport covering `width` x `height` pixels with a `[0, 1]` depth range.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: width as f32,
            height: height as f32,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }

    /// Width divided by height. Returns `1.0` for a degenerate viewport.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_full() {
        let vp = Viewport::full(1024, 768);
        assert_eq!(vp.width, 1024.0);
        assert_eq!(vp.height, 768.0);
        assert_eq!(vp.max_depth, 1.0);
        assert_eq!(vp.aspect_ratio(), 1024.0 / 768.0);
    }

    #[test]
    fn test_viewport_degenerate_aspect() {
        assert_eq!(Viewport::full(10, 0).aspect_ratio(), 1.0);
    }

    #[test]
    fn test_technique_names_are_unique() {
        let mut names: Vec<_> = ShaderTechnique::ALL.iter().map(|t| t.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), ShaderTechnique::ALL.len());
    }
}
