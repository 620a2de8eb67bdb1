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

//! Moves decoded assets onto the GPU.
//!
//! Every object created here is registered with the caller's scope the moment
//! it exists, so a failure half-way through leaves nothing unowned.

use crate::renderer::{
    BufferDescriptor, BufferUsage, Mesh, MeshData, ResourceError, ResourceScope, TextureData,
    TextureDescriptor, TextureFormat, TextureViewId, TextureViewKind,
};
use std::borrow::Cow;

/// Uploads `data` as a vertex buffer and an index buffer.
pub fn upload_mesh(
    scope: &mut ResourceScope,
    label: &str,
    data: &MeshData,
) -> Result<Mesh, ResourceError> {
    let device = scope.device().clone();
    let vertex_bytes: &[u8] = bytemuck::cast_slice(&data.vertices);
    let index_bytes: &[u8] = bytemuck::cast_slice(&data.indices);

    let vertex_buffer = scope.track(device.create_buffer(
        &BufferDescriptor {
            label: Some(Cow::Owned(format!("{label} vertices"))),
            size: vertex_bytes.len() as u64,
            usage: BufferUsage::Vertex,
        },
        Some(vertex_bytes),
    )?);
    let index_buffer = scope.track(device.create_buffer(
        &BufferDescriptor {
            label: Some(Cow::Owned(format!("{label} indices"))),
            size: index_bytes.len() as u64,
            usage: BufferUsage::Index,
        },
        Some(index_bytes),
    )?);

    log::debug!(
        "Uploaded mesh '{}' ({} vertices, {} triangles)",
        label,
        data.vertices.len(),
        data.triangle_count()
    );

    Ok(Mesh {
        label: label.to_string(),
        vertex_buffer,
        index_buffer,
        index_count: data.indices.len() as u32,
    })
}

/// Uploads `data` as a sampled RGBA8 texture and returns its shader-resource view.
pub fn upload_texture(
    scope: &mut ResourceScope,
    label: &str,
    data: &TextureData,
) -> Result<TextureViewId, ResourceError> {
    if !data.is_well_formed() {
        return Err(ResourceError::OutOfBounds);
    }
    let device = scope.device().clone();
    let texture = scope.track(device.create_texture(
        &TextureDescriptor {
            label: Some(Cow::Borrowed(label)),
            width: data.width,
            height: data.height,
            format: TextureFormat::Rgba8Unorm,
            render_attachment: false,
            sampled: true,
        },
        Some(&data.rgba),
    )?);
    let view = scope.track(device.create_texture_view(texture, TextureViewKind::ShaderResource)?);
    Ok(view)
}
