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

use mirador_core::math::LinearRgba;
use mirador_core::renderer::{
    ResourceError, ResourceScope, TextureDescriptor, TextureFormat, TextureId, TextureViewId,
    TextureViewKind, Viewport,
};
use std::borrow::Cow;

/// The off-screen color and depth targets the portal camera renders into.
///
/// Created once at a fixed size, independent of the display, and never
/// resized. The color texture has two views: a render-target view written by
/// the portal pass and a shader-resource view read by the main pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PortalTargets {
    width: u32,
    height: u32,
    color_texture: TextureId,
    render_target: TextureViewId,
    shader_resource: TextureViewId,
    depth_texture: TextureId,
    depth_stencil: TextureViewId,
}

impl PortalTargets {
    /// Creates the targets and clears them, so a main pass that runs before
    /// any portal pass samples `clear_color` rather than undefined memory.
    pub fn create(
        scope: &mut ResourceScope,
        width: u32,
        height: u32,
        clear_color: LinearRgba,
    ) -> Result<Self, ResourceError> {
        if width == 0 || height == 0 {
            return Err(ResourceError::Creation {
                kind: "portal texture",
                reason: format!("invalid size {width}x{height}"),
            });
        }
        let device = scope.device().clone();

        let color_texture = scope.track(device.create_texture(
            &TextureDescriptor {
                label: Some(Cow::Borrowed("Portal Color")),
                width,
                height,
                format: TextureFormat::Rgba8Unorm,
                render_attachment: true,
                sampled: true,
            },
            None,
        )?);
        let render_target = scope.track(
            device.create_texture_view(color_texture, TextureViewKind::RenderTarget)?,
        );
        let shader_resource = scope.track(
            device.create_texture_view(color_texture, TextureViewKind::ShaderResource)?,
        );

        let depth_texture = scope.track(device.create_texture(
            &TextureDescriptor {
                label: Some(Cow::Borrowed("Portal Depth")),
                width,
                height,
                format: TextureFormat::Depth32Float,
                render_attachment: true,
                sampled: false,
            },
            None,
        )?);
        let depth_stencil = scope.track(
            device.create_texture_view(depth_texture, TextureViewKind::DepthStencil)?,
        );

        device.clear_render_target(render_target, clear_color);
        device.clear_depth(depth_stencil, 1.0);
        log::info!("Created {width}x{height} portal render targets");

        Ok(Self {
            width,
            height,
            color_texture,
            render_target,
            shader_resource,
            depth_texture,
            depth_stencil,
        })
    }

    /// The shader-resource view the main pass samples.
    pub fn color_texture(&self) -> TextureViewId {
        self.shader_resource
    }

    /// The color view the portal pass writes.
    pub fn render_target_view(&self) -> TextureViewId {
        self.render_target
    }

    /// The depth view the portal pass writes.
    pub fn depth_stencil_view(&self) -> TextureViewId {
        self.depth_stencil
    }

    /// The texture behind the color views.
    pub fn color_texture_id(&self) -> TextureId {
        self.color_texture
    }

    /// The texture behind the depth view.
    pub fn depth_texture_id(&self) -> TextureId {
        self.depth_texture
    }

    /// `(width, height)` in texels.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// A viewport covering the whole target.
    pub fn viewport(&self) -> Viewport {
        Viewport::full(self.width, self.height)
    }
}
