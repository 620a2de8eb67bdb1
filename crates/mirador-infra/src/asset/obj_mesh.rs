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

//! Wavefront OBJ meshes, decoded with `tobj`.

use super::geometry::{compute_normals, compute_tangents};
use mirador_core::asset::{LoadError, MeshRepository};
use mirador_core::renderer::{MeshData, Vertex};
use std::path::{Path, PathBuf};

/// Loads `.obj` files relative to a media directory.
///
/// All models in a file are merged into one mesh. Missing normals are
/// reconstructed; tangents are always computed from the UVs.
#[derive(Debug, Clone)]
pub struct ObjMeshRepository {
    root: PathBuf,
}

impl ObjMeshRepository {
    /// Creates a repository resolving relative paths against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The media directory.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl MeshRepository for ObjMeshRepository {
    fn load_mesh(&self, path: &Path) -> Result<MeshData, LoadError> {
        let full = self.root.join(path);
        if !full.is_file() {
            return Err(LoadError::Missing { path: full });
        }

        let (models, _materials) = tobj::load_obj(
            &full,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: true,
                ..Default::default()
            },
        )
        .map_err(|e| LoadError::Malformed {
            path: full.clone(),
            reason: e.to_string(),
        })?;

        if models.is_empty() {
            return Err(LoadError::Malformed {
                path: full,
                reason: "no models found in OBJ file".to_string(),
            });
        }

        let mut data = MeshData::default();
        let mut needs_normals = false;
        for model in &models {
            let mesh = &model.mesh;
            let base = data.vertices.len() as u32;
            let count = mesh.positions.len() / 3;
            needs_normals |= mesh.normals.len() != mesh.positions.len();

            for i in 0..count {
                let position = [
                    mesh.positions[3 * i],
                    mesh.positions[3 * i + 1],
                    mesh.positions[3 * i + 2],
                ];
                let normal = mesh
                    .normals
                    .get(3 * i..3 * i + 3)
                    .map_or([0.0; 3], |n| [n[0], n[1], n[2]]);
                // OBJ puts v = 0 at the bottom, textures put row 0 at the top.
                let uv = mesh
                    .texcoords
                    .get(2 * i..2 * i + 2)
                    .map_or([0.0; 2], |t| [t[0], 1.0 - t[1]]);
                data.vertices.push(Vertex {
                    position,
                    normal,
                    tangent: [0.0; 3],
                    uv,
                });
            }
            data.indices
                .extend(mesh.indices.iter().map(|index| base + index));
        }

        if needs_normals {
            compute_normals(&mut data.vertices, &data.indices);
        }
        compute_tangents(&mut data.vertices, &data.indices);

        log::info!(
            "Loaded OBJ '{}' ({} models, {} vertices, {} triangles)",
            full.display(),
            models.len(),
            data.vertices.len(),
            data.triangle_count()
        );
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const QUAD: &str = "\
v -1 0 -1
v -1 0 1
v 1 0 1
v 1 0 -1
vt 0 0
vt 0 1
vt 1 1
vt 1 0
f 1/1 2/2 3/3 4/4
";

    #[test]
    fn test_load_quad_is_triangulated() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("quad.obj"), QUAD).unwrap();

        let repo = ObjMeshRepository::new(dir.path());
        let mesh = repo.load_mesh(Path::new("quad.obj")).unwrap();
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        // Normals were reconstructed.
        for v in &mesh.vertices {
            assert!((v.normal[1].abs() - 1.0).abs() < 1e-5);
        }
        // V is flipped.
        assert_eq!(mesh.vertices[0].uv, [0.0, 1.0]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let repo = ObjMeshRepository::new(dir.path());
        let err = repo.load_mesh(Path::new("Teapot.obj")).unwrap_err();
        assert_eq!(
            err,
            LoadError::Missing {
                path: dir.path().join("Teapot.obj")
            }
        );
    }

    #[test]
    fn test_garbage_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("bad.obj"), "v one 0 0\nf 1 1 1\n").unwrap();
        let repo = ObjMeshRepository::new(dir.path());
        let err = repo.load_mesh(Path::new("bad.obj")).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }
}
