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

//! The command log recorded by the headless device.

use mirador_core::math::LinearRgba;
use mirador_core::renderer::{
    BlendMode, BufferId, CullMode, DepthMode, SamplerKind, ShaderTechnique, TextureId,
    TextureViewId, Viewport,
};

/// What a texture holds, as far as the headless device can tell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TextureContents {
    /// Never written.
    Undefined,
    /// Filled with texels at creation.
    Uploaded,
    /// Cleared to a color (or a depth value, in the first channel).
    Cleared(LinearRgba),
    /// Rendered into by `draws` draw calls since the last clear.
    Drawn {
        /// Draws since the last clear.
        draws: u32,
    },
}

/// One texture a draw sampled, with the contents it had at that moment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledInput {
    /// Pixel shader slot.
    pub slot: u32,
    /// The texture behind the bound view.
    pub texture: TextureId,
    /// Its contents when the draw was issued.
    pub contents: TextureContents,
}

/// A context operation, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub enum DeviceCommand {
    /// Color and depth targets bound.
    SetRenderTargets {
        /// Color target view.
        color: TextureViewId,
        /// Depth target view.
        depth: TextureViewId,
    },
    /// A color target cleared.
    ClearRenderTarget {
        /// The cleared view.
        view: TextureViewId,
        /// The clear color.
        color: LinearRgba,
    },
    /// A depth target cleared.
    ClearDepth {
        /// The cleared view.
        view: TextureViewId,
        /// The clear depth.
        depth: f32,
    },
    /// Viewport set.
    SetViewport(Viewport),
    /// Shader pair bound.
    SetShaderPair(ShaderTechnique),
    /// Blend state bound.
    SetBlendState(BlendMode),
    /// Depth state bound.
    SetDepthState(DepthMode),
    /// Rasterizer state bound.
    SetRasterizerState(CullMode),
    /// Texture bound to a pixel shader slot.
    SetTexture {
        /// Slot.
        slot: u32,
        /// View.
        view: TextureViewId,
    },
    /// Sampler bound to a pixel shader slot.
    SetSampler {
        /// Slot.
        slot: u32,
        /// Sampler kind.
        kind: SamplerKind,
    },
    /// Buffer contents replaced.
    UpdateBuffer {
        /// The buffer.
        buffer: BufferId,
        /// Bytes written.
        size: usize,
    },
    /// Constant buffer bound to both shader stages.
    BindConstantBuffer {
        /// Slot.
        slot: u32,
        /// The buffer.
        buffer: BufferId,
    },
    /// A mesh drawn.
    Draw {
        /// Mesh label.
        mesh: String,
        /// The color target texture written.
        target: Option<TextureId>,
        /// Textures bound at draw time.
        inputs: Vec<SampledInput>,
    },
    /// The back buffer presented.
    Present,
}

impl DeviceCommand {
    /// Whether this is a draw call.
    pub fn is_draw(&self) -> bool {
        matches!(self, DeviceCommand::Draw { .. })
    }
}
