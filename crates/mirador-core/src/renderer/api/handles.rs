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

//! Opaque handles to GPU objects.
//!
//! Handles are plain indices owned by the backend that created them. They carry
//! no lifetime; releasing a handle twice or using a released handle is reported
//! by the backend as [`ResourceError::InvalidHandle`](crate::renderer::ResourceError).

/// An opaque handle to a GPU buffer (vertex, index or constant).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(pub usize);

/// An opaque handle to a GPU texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(pub usize);

/// An opaque handle to a view onto a texture.
///
/// Depending on how it was created, a view is bound as a shader input, a color
/// target or a depth target. See [`TextureViewKind`](super::TextureViewKind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureViewId(pub usize);

/// An opaque handle to a compiled vertex + pixel shader pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderPairId(pub usize);

/// An opaque handle to a blend state object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlendStateId(pub usize);

/// An opaque handle to a depth-stencil state object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepthStateId(pub usize);

/// An opaque handle to a rasterizer state object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RasterizerStateId(pub usize);

/// An opaque handle to a sampler state object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplerId(pub usize);

/// Any releasable GPU object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceId {
    /// A buffer.
    Buffer(BufferId),
    /// A texture.
    Texture(TextureId),
    /// A texture view.
    TextureView(TextureViewId),
    /// A shader pair.
    ShaderPair(ShaderPairId),
    /// A blend state.
    BlendState(BlendStateId),
    /// A depth-stencil state.
    DepthState(DepthStateId),
    /// A rasterizer state.
    RasterizerState(RasterizerStateId),
    /// A sampler.
    Sampler(SamplerId),
}

macro_rules! impl_into_resource_id {
    ($($id:ident => $variant:ident),* $(,)?) => {
        $(
            impl From<$id> for ResourceId {
                fn from(id: $id) -> Self {
                    ResourceId::$variant(id)
                }
            }
        )*
    };
}

impl_into_resource_id! {
    BufferId => Buffer,
    TextureId => Texture,
    TextureViewId => TextureView,
    ShaderPairId => ShaderPair,
    BlendStateId => BlendState,
    DepthStateId => DepthState,
    RasterizerStateId => RasterizerState,
    SamplerId => Sampler,
}
