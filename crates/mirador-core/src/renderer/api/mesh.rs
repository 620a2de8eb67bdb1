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

//! Buffer and mesh data structures.

use super::handles::BufferId;
use bytemuck::{Pod, Zeroable};
use std::borrow::Cow;

/// How a buffer is going to be bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferUsage {
    /// Bound as a vertex stream.
    Vertex,
    /// Bound as a 32-bit index stream.
    Index,
    /// Bound as a shader constant buffer and rewritten from the CPU.
    Constant,
}

/// A descriptor used to create a [`BufferId`].
#[derive(Debug, Clone)]
pub struct BufferDescriptor<'a> {
    /// An optional debug label for the buffer.
    pub label: Option<Cow<'a, str>>,
    /// The total size of the buffer in bytes.
    pub size: u64,
    /// How the buffer will be bound.
    pub usage: BufferUsage,
}

/// The vertex layout shared by every shader technique.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Object-space normal.
    pub normal: [f32; 3],
    /// Object-space tangent, used by normal mapping.
    pub tangent: [f32; 3],
    /// Texture coordinates.
    pub uv: [f32; 2],
}

/// CPU-side mesh geometry produced by a mesh repository.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    /// The vertices.
    pub vertices: Vec<Vertex>,
    /// Triangle-list indices into `vertices`.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// The number of triangles described by the index list.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// An immutable mesh resident on the GPU.
///
/// Shared between models through `Rc`; it must outlive every model that
/// references it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mesh {
    /// Debug label, usually the source file name.
    pub label: String,
    /// The vertex buffer.
    pub vertex_buffer: BufferId,
    /// The index buffer.
    pub index_buffer: BufferId,
    /// The number of indices to draw.
    pub index_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_tightly_packed() {
        assert_eq!(std::mem::size_of::<Vertex>(), 44);
    }
}
