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

//! Texture descriptors and CPU-side image data.

use std::borrow::Cow;

/// The pixel format of a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// 8-bit RGBA, normalised.
    Rgba8Unorm,
    /// 32-bit float depth.
    Depth32Float,
}

impl TextureFormat {
    /// Bytes per texel.
    pub fn bytes_per_pixel(self) -> u32 {
        4
    }
}

/// A descriptor used to create a [`TextureId`](super::TextureId).
#[derive(Debug, Clone)]
pub struct TextureDescriptor<'a> {
    /// An optional debug label.
    pub label: Option<Cow<'a, str>>,
    /// Width in texels.
    pub width: u32,
    /// Height in texels.
    pub height: u32,
    /// Pixel format.
    pub format: TextureFormat,
    /// Whether the texture can be rendered into.
    pub render_attachment: bool,
    /// Whether the texture can be sampled by shaders.
    pub sampled: bool,
}

impl TextureDescriptor<'_> {
    /// The expected size in bytes of the full mip-0 image.
    pub fn byte_size(&self) -> u64 {
        self.width as u64 * self.height as u64 * self.format.bytes_per_pixel() as u64
    }
}

/// How a view onto a texture is going to be bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureViewKind {
    /// Read by shaders.
    ShaderResource,
    /// Written as a color target.
    RenderTarget,
    /// Written as a depth target.
    DepthStencil,
}

/// A decoded RGBA8 image, produced by a texture loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Tightly packed RGBA8 rows, top to bottom.
    pub rgba: Vec<u8>,
}

impl TextureData {
    /// A `width` x `height` image filled with one color.
    pub fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Self {
        let texels = (width * height) as usize;
        Self {
            width,
            height,
            rgba: rgba.repeat(texels),
        }
    }

    /// Whether `rgba` holds exactly `width * height` texels.
    pub fn is_well_formed(&self) -> bool {
        self.rgba.len() == self.width as usize * self.height as usize * 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solid_texture_size() {
        let tex = TextureData::solid(4, 2, [255, 0, 0, 255]);
        assert_eq!(tex.rgba.len(), 32);
        assert!(tex.is_well_formed());
        assert_eq!(&tex.rgba[28..], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_descriptor_byte_size() {
        let desc = TextureDescriptor {
            label: None,
            width: 1024,
            height: 1024,
            format: TextureFormat::Depth32Float,
            render_attachment: true,
            sampled: false,
        };
        assert_eq!(desc.byte_size(), 4 * 1024 * 1024);
    }
}
