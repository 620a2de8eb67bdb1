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

//! Image files decoded with the `image` crate.

use mirador_core::asset::{LoadError, TextureLoader};
use mirador_core::renderer::TextureData;
use std::path::{Path, PathBuf};

/// Loads PNG, JPEG, BMP, TGA and the other formats `image` understands,
/// converted to RGBA8.
#[derive(Debug, Clone)]
pub struct ImageTextureLoader {
    root: PathBuf,
}

impl ImageTextureLoader {
    /// Creates a loader resolving relative paths against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TextureLoader for ImageTextureLoader {
    fn load_texture(&self, path: &Path) -> Result<TextureData, LoadError> {
        let full = self.root.join(path);
        if !full.is_file() {
            return Err(LoadError::Missing { path: full });
        }

        let img = image::open(&full).map_err(|e| LoadError::Malformed {
            path: full.clone(),
            reason: e.to_string(),
        })?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::debug!("Decoded '{}' ({width}x{height})", full.display());

        Ok(TextureData {
            width,
            height,
            rgba: rgba.into_raw(),
        })
    }
}
