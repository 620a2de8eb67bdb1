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

//! Procedural stand-ins for media files.

use super::geometry;
use mirador_core::asset::{LoadError, MeshRepository, TextureLoader};
use mirador_core::renderer::{MeshData, TextureData};
use std::cell::Cell;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Serves every mesh and texture request from generated data.
///
/// Meshes are picked from the file stem: names containing `ground`, `floor`
/// or `plane` give a flat square, `sphere` gives a UV sphere, `light` a small
/// quad, anything else a cube. Textures are small solid images whose color is
/// derived from the file name, so distinct files stay distinguishable.
#[derive(Debug, Default)]
pub struct SyntheticAssets {
    missing: HashSet<PathBuf>,
    loads: Cell<usize>,
}

impl SyntheticAssets {
    /// Creates a source that can serve every path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretends `path` does not exist.
    pub fn with_missing(mut self, path: impl Into<PathBuf>) -> Self {
        self.missing.insert(path.into());
        self
    }

    /// Number of successful loads so far.
    pub fn load_count(&self) -> usize {
        self.loads.get()
    }

    fn check(&self, path: &Path) -> Result<String, LoadError> {
        if self.missing.contains(path) {
            return Err(LoadError::Missing {
                path: path.to_path_buf(),
            });
        }
        self.loads.set(self.loads.get() + 1);
        Ok(path
            .file_stem()
            .map(|s| s.to_string_lossy().to_lowercase())
            .unwrap_or_default())
    }
}

impl MeshRepository for SyntheticAssets {
    fn load_mesh(&self, path: &Path) -> Result<MeshData, LoadError> {
        let stem = self.check(path)?;
        let mesh = if ["ground", "floor", "plane"].iter().any(|k| stem.contains(k)) {
            geometry::plane(100.0)
        } else if stem.contains("sphere") {
            geometry::sphere(5.0, 16, 24)
        } else if stem.contains("light") {
            geometry::plane(0.5)
        } else {
            geometry::cube(5.0)
        };
        log::debug!(
            "Synthesised mesh for '{}' ({} triangles)",
            path.display(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }
}

impl TextureLoader for SyntheticAssets {
    fn load_texture(&self, path: &Path) -> Result<TextureData, LoadError> {
        let stem = self.check(path)?;
        // FNV-1a over the name.
        let hash = stem.bytes().fold(0x811c_9dc5_u32, |h, b| {
            (h ^ b as u32).wrapping_mul(0x0100_0193)
        });
        let [r, g, b, _] = hash.to_le_bytes();
        Ok(TextureData::solid(4, 4, [r, g, b, 255]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_shape_follows_name() {
        let assets = SyntheticAssets::new();
        let ground = assets.load_mesh(Path::new("Ground.obj")).unwrap();
        let cube = assets.load_mesh(Path::new("Cube.obj")).unwrap();
        let sphere = assets.load_mesh(Path::new("Sphere.obj")).unwrap();
        assert_eq!(ground.triangle_count(), 2);
        assert_eq!(cube.triangle_count(), 12);
        assert!(sphere.triangle_count() > 12);
        assert_eq!(assets.load_count(), 3);
    }

    #[test]
    fn test_textures_differ_by_name() {
        let assets = SyntheticAssets::new();
        let wood = assets.load_texture(Path::new("Wood.jpg")).unwrap();
        let brick = assets.load_texture(Path::new("Brick.jpg")).unwrap();
        assert!(wood.is_well_formed());
        assert_ne!(wood.rgba, brick.rgba);
        assert_eq!(wood, assets.load_texture(Path::new("Wood.jpg")).unwrap());
    }

    #[test]
    fn test_missing_path() {
        let assets = SyntheticAssets::new().with_missing("media/Troll.obj");
        let err = assets.load_mesh(Path::new("media/Troll.obj")).unwrap_err();
        assert_eq!(err.path(), &PathBuf::from("media/Troll.obj"));
        assert_eq!(assets.load_count(), 0);
    }
}
