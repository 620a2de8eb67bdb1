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

use crate::math::LinearRgba;
use crate::renderer::api::{
    BlendMode, BlendStateId, BufferDescriptor, BufferId, CullMode, DepthMode, DepthStateId, Mesh,
    RasterizerStateId, ResourceId, SamplerId, SamplerKind, ShaderPairId, ShaderTechnique,
    TextureDescriptor, TextureId, TextureViewId, TextureViewKind, Viewport,
};
use crate::renderer::error::ResourceError;

/// Defines the trait for a graphics device and its immediate context.
///
/// This is the main abstraction the renderer talks to. It is split in two
/// halves:
///
/// * **Resource creation**, which can fail and returns a [`ResourceError`].
///   Every object it hands out must eventually be passed to [`release`].
/// * **Context operations** (binding, clearing, drawing, presenting), which
///   are assumed to succeed. A backend that receives an unknown handle logs a
///   warning and ignores the call.
///
/// Context state is *sticky*: a binding stays in effect until the next call
/// that replaces it, across draws and across passes. Callers that care about
/// redundant state changes track what they bound themselves.
///
/// All methods take `&self`; implementations use interior mutability. The
/// device is driven from a single thread.
///
/// [`release`]: GraphicsDevice::release
pub trait GraphicsDevice: std::fmt::Debug {
    // --- Resource creation ---

    /// Creates a GPU buffer, optionally filled with `data`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::OutOfBounds`] if `data` is larger than `descriptor.size`.
    fn create_buffer(
        &self,
        descriptor: &BufferDescriptor,
        data: Option<&[u8]>,
    ) -> Result<BufferId, ResourceError>;

    /// Creates a texture, optionally filled with mip-0 texels.
    fn create_texture(
        &self,
        descriptor: &TextureDescriptor,
        data: Option<&[u8]>,
    ) -> Result<TextureId, ResourceError>;

    /// Creates a view onto `texture` for the given use.
    fn create_texture_view(
        &self,
        texture: TextureId,
        kind: TextureViewKind,
    ) -> Result<TextureViewId, ResourceError>;

    /// Loads and compiles the vertex + pixel shaders of a technique.
    fn create_shader_pair(&self, technique: ShaderTechnique)
        -> Result<ShaderPairId, ResourceError>;

    /// Creates a blend state object.
    fn create_blend_state(&self, mode: BlendMode) -> Result<BlendStateId, ResourceError>;

    /// Creates a depth-stencil state object.
    fn create_depth_state(&self, mode: DepthMode) -> Result<DepthStateId, ResourceError>;

    /// Creates a rasterizer state object.
    fn create_rasterizer_state(&self, mode: CullMode)
        -> Result<RasterizerStateId, ResourceError>;

    /// Creates a sampler state object.
    fn create_sampler(&self, kind: SamplerKind) -> Result<SamplerId, ResourceError>;

    /// Releases a previously created object.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::InvalidHandle`] if the object is unknown or
    /// was already released.
    fn release(&self, id: ResourceId) -> Result<(), ResourceError>;

    // --- Display surface ---

    /// The color target view of the display's back buffer.
    fn back_buffer(&self) -> TextureViewId;

    /// The depth target view paired with the back buffer.
    fn main_depth_stencil(&self) -> TextureViewId;

    /// The display size in pixels, `(width, height)`.
    fn surface_size(&self) -> (u32, u32);

    // --- Context operations ---

    /// Binds a color target and a depth target for subsequent draws.
    fn set_render_targets(&self, color: TextureViewId, depth: TextureViewId);

    /// Fills a color target with `color`.
    fn clear_render_target(&self, view: TextureViewId, color: LinearRgba);

    /// Fills a depth target with `depth`.
    fn clear_depth(&self, view: TextureViewId, depth: f32);

    /// Sets the viewport transform.
    fn set_viewport(&self, viewport: Viewport);

    /// Binds a shader pair.
    fn set_shader_pair(&self, shaders: ShaderPairId);

    /// Binds a blend state.
    fn set_blend_state(&self, state: BlendStateId);

    /// Binds a depth-stencil state.
    fn set_depth_state(&self, state: DepthStateId);

    /// Binds a rasterizer state.
    fn set_rasterizer_state(&self, state: RasterizerStateId);

    /// Binds a shader-resource view to a pixel shader texture slot.
    fn set_texture(&self, slot: u32, view: TextureViewId);

    /// Binds a sampler to a pixel shader sampler slot.
    fn set_sampler(&self, slot: u32, sampler: SamplerId);

    /// Overwrites the whole contents of a buffer.
    fn update_buffer(&self, buffer: BufferId, data: &[u8]);

    /// Binds a constant buffer to both shader stages at `slot`.
    fn bind_constant_buffer(&self, slot: u32, buffer: BufferId);

    /// Binds the mesh's vertex and index streams and issues an indexed draw.
    fn draw_mesh(&self, mesh: &Mesh);

    /// Presents the back buffer to the display.
    fn present(&self);
}
