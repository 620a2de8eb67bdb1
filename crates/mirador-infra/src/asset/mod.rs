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

//! Mesh and texture sources.

mod geometry;
mod image_texture;
mod obj_mesh;
mod synthetic;

pub use self::geometry::{cube, plane, sphere};
pub use self::image_texture::ImageTextureLoader;
pub use self::obj_mesh::ObjMeshRepository;
pub use self::synthetic::SyntheticAssets;

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Resolves the media directory given on the command line or in the
/// configuration.
///
/// # Errors
///
/// Fails when the path does not exist or is not a directory.
pub fn resolve_media_dir(path: &Path) -> Result<PathBuf> {
    let resolved = path
        .canonicalize()
        .with_context(|| format!("Media directory '{}' is not accessible", path.display()))?;
    if !resolved.is_dir() {
        bail!("Media path '{}' is not a directory", resolved.display());
    }
    log::info!("Using media directory '{}'", resolved.display());
    Ok(resolved)
}
