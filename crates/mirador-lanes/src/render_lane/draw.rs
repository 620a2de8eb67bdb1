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

//! Declarative description of one draw call.

use mirador_core::math::Vec3;
use mirador_core::renderer::{
    BlendMode, CullMode, DepthMode, SamplerKind, ShaderTechnique, TextureViewId,
};
use mirador_data::{LightId, ModelId};

/// Number of pixel shader texture slots the executor tracks.
pub const MAX_TEXTURE_SLOTS: usize = 2;

/// Where a texture binding gets its view from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureSource {
    /// A texture loaded at init.
    Asset(TextureViewId),
    /// The color output of the portal pass.
    PortalColor,
}

/// One texture + sampler bound to a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureBinding {
    /// Pixel shader slot.
    pub slot: u32,
    /// The view to bind.
    pub source: TextureSource,
    /// The sampler bound to the same slot.
    pub sampler: SamplerKind,
}

/// What a draw renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawSubject {
    /// A model of the entity store, tinted with its own color if any.
    Model(ModelId),
    /// A light's marker, tinted with the light's color.
    Light(LightId),
}

/// Everything needed to issue one draw: state, inputs and subject.
///
/// State the descriptor names is bound before the draw; anything it does not
/// name (a texture slot it leaves out) keeps whatever was bound last.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawDescriptor {
    /// Debug name.
    pub label: &'static str,
    /// Shader pair.
    pub technique: ShaderTechnique,
    /// Blend mode.
    pub blend: BlendMode,
    /// Depth mode.
    pub depth: DepthMode,
    /// Cull mode.
    pub cull: CullMode,
    /// Texture inputs.
    pub textures: Vec<TextureBinding>,
    /// Explicit tint, taking precedence over the subject's own color.
    pub tint: Option<Vec3>,
    /// What is drawn.
    pub subject: DrawSubject,
}

impl DrawDescriptor {
    /// A draw with one anisotropically sampled texture in slot 0.
    pub fn textured(
        label: &'static str,
        technique: ShaderTechnique,
        subject: DrawSubject,
        texture: TextureSource,
    ) -> Self {
        Self {
            label,
            technique,
            blend: BlendMode::None,
            depth: DepthMode::ReadWrite,
            cull: CullMode::Back,
            textures: vec![TextureBinding {
                slot: 0,
                source: texture,
                sampler: SamplerKind::Anisotropic4x,
            }],
            tint: None,
            subject,
        }
    }

    /// A draw that binds no textures.
    pub fn untextured(
        label: &'static str,
        technique: ShaderTechnique,
        subject: DrawSubject,
    ) -> Self {
        Self {
            textures: Vec::new(),
            ..Self::textured(label, technique, subject, TextureSource::PortalColor)
        }
    }

    /// Sets the blend mode.
    pub fn blend(mut self, blend: BlendMode) -> Self {
        self.blend = blend;
        self
    }

    /// Sets the depth mode.
    pub fn depth(mut self, depth: DepthMode) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the cull mode.
    pub fn cull(mut self, cull: CullMode) -> Self {
        self.cull = cull;
        self
    }

    /// Adds a texture binding.
    pub fn with_texture(mut self, slot: u32, source: TextureSource, sampler: SamplerKind) -> Self {
        self.textures.push(TextureBinding {
            slot,
            source,
            sampler,
        });
        self
    }

    /// Whether any binding samples the portal output.
    pub fn reads_portal(&self) -> bool {
        self.textures
            .iter()
            .any(|t| t.source == TextureSource::PortalColor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let d = DrawDescriptor::textured(
            "floor",
            ShaderTechnique::PixelLighting,
            DrawSubject::Model(ModelId(0)),
            TextureSource::Asset(TextureViewId(3)),
        );
        assert_eq!(d.blend, BlendMode::None);
        assert_eq!(d.depth, DepthMode::ReadWrite);
        assert_eq!(d.cull, CullMode::Back);
        assert_eq!(d.textures.len(), 1);
        assert!(!d.reads_portal());
    }

    #[test]
    fn test_untextured_has_no_bindings() {
        let d = DrawDescriptor::untextured(
            "outline",
            ShaderTechnique::CellShadingOutline,
            DrawSubject::Model(ModelId(1)),
        )
        .cull(CullMode::Front);
        assert!(d.textures.is_empty());
        assert!(!d.reads_portal());
        assert_eq!(d.cull, CullMode::Front);
    }

    #[test]
    fn test_reads_portal() {
        let d = DrawDescriptor::textured(
            "portal",
            ShaderTechnique::PixelLighting,
            DrawSubject::Model(ModelId(9)),
            TextureSource::PortalColor,
        );
        assert!(d.reads_portal());
    }
}
