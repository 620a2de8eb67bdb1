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

//! Vertex attribute reconstruction and procedural shapes.

use mirador_core::math::{Vec2, Vec3, TAU};
use mirador_core::renderer::{MeshData, Vertex};

/// Fills in smooth normals by averaging the face normals around each vertex.
pub(crate) fn compute_normals(vertices: &mut [Vertex], indices: &[u32]) {
    let mut sums = vec![Vec3::ZERO; vertices.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let (pa, pb, pc) = (
            Vec3::from(vertices[a].position),
            Vec3::from(vertices[b].position),
            Vec3::from(vertices[c].position),
        );
        // Left-handed, clockwise front faces.
        let face = (pb - pa).cross(pc - pa);
        for i in [a, b, c] {
            sums[i] += face;
        }
    }
    for (vertex, sum) in vertices.iter_mut().zip(sums) {
        vertex.normal = sum.try_normalize().unwrap_or(Vec3::Y).to_array();
    }
}

/// Computes per-vertex tangents from positions and texture coordinates.
///
/// Vertices without usable UVs get any unit vector perpendicular to their
/// normal.
pub(crate) fn compute_tangents(vertices: &mut [Vertex], indices: &[u32]) {
    let mut sums = vec![Vec3::ZERO; vertices.len()];
    for tri in indices.chunks_exact(3) {
        let [a, b, c] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let e1 = Vec3::from(vertices[b].position) - Vec3::from(vertices[a].position);
        let e2 = Vec3::from(vertices[c].position) - Vec3::from(vertices[a].position);
        let d1 = Vec2::from(vertices[b].uv) - Vec2::from(vertices[a].uv);
        let d2 = Vec2::from(vertices[c].uv) - Vec2::from(vertices[a].uv);
        let det = d1.x * d2.y - d2.x * d1.y;
        if det.abs() < f32::EPSILON {
            continue;
        }
        let tangent = (e1 * d2.y - e2 * d1.y) / det;
        for i in [a, b, c] {
            sums[i] += tangent;
        }
    }
    for (vertex, sum) in vertices.iter_mut().zip(sums) {
        let normal = Vec3::from(vertex.normal);
        // Gram-Schmidt against the normal.
        let tangent = (sum - normal * normal.dot(sum))
            .try_normalize()
            .unwrap_or_else(|| normal.any_orthonormal_vector());
        vertex.tangent = tangent.to_array();
    }
}

fn vertex(position: Vec3, normal: Vec3, uv: Vec2) -> Vertex {
    Vertex {
        position: position.to_array(),
        normal: normal.to_array(),
        tangent: [0.0; 3],
        uv: uv.to_array(),
    }
}

/// Appends a quad spanned by `u` and `v` around `center`, facing `normal`.
fn push_quad(data: &mut MeshData, center: Vec3, u: Vec3, v: Vec3, normal: Vec3) {
    let base = data.vertices.len() as u32;
    let corners = [(-1.0, -1.0), (-1.0, 1.0), (1.0, 1.0), (1.0, -1.0)];
    for (s, t) in corners {
        data.vertices.push(vertex(
            center + u * s + v * t,
            normal,
            Vec2::new((s + 1.0) / 2.0, (1.0 - t) / 2.0),
        ));
    }
    data.indices
        .extend([base, base + 1, base + 2, base, base + 2, base + 3]);
}

/// A cube of half-extent `half`, centered on the origin, 24 vertices.
pub fn cube(half: f32) -> MeshData {
    let mut data = MeshData::default();
    let faces = [
        (Vec3::X, Vec3::Z, Vec3::Y),
        (-Vec3::X, -Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::Z),
        (-Vec3::Y, Vec3::X, -Vec3::Z),
        (Vec3::Z, -Vec3::X, Vec3::Y),
        (-Vec3::Z, Vec3::X, Vec3::Y),
    ];
    for (normal, u, v) in faces {
        push_quad(&mut data, normal * half, u * half, v * half, normal);
    }
    compute_tangents(&mut data.vertices, &data.indices);
    data
}

/// A flat square of half-extent `half` in the XZ plane, facing +Y.
pub fn plane(half: f32) -> MeshData {
    let mut data = MeshData::default();
    push_quad(&mut data, Vec3::ZERO, Vec3::X * half, Vec3::Z * half, Vec3::Y);
    compute_tangents(&mut data.vertices, &data.indices);
    data
}

/// A UV sphere with `rings` latitude bands and `segments` longitude slices.
pub fn sphere(radius: f32, rings: u32, segments: u32) -> MeshData {
    let rings = rings.max(2);
    let segments = segments.max(3);
    let mut data = MeshData::default();
    for ring in 0..=rings {
        let v = ring as f32 / rings as f32;
        let theta = v * TAU / 2.0;
        for seg in 0..=segments {
            let u = seg as f32 / segments as f32;
            let phi = u * TAU;
            let normal = Vec3::new(theta.sin() * phi.cos(), theta.cos(), theta.sin() * phi.sin());
            data.vertices
                .push(vertex(normal * radius, normal, Vec2::new(u, v)));
        }
    }
    let stride = segments + 1;
    for ring in 0..rings {
        for seg in 0..segments {
            let a = ring * stride + seg;
            let b = a + stride;
            data.indices.extend([a, a + 1, b, a + 1, b + 1, b]);
        }
    }
    compute_tangents(&mut data.vertices, &data.indices);
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cube_shape() {
        let cube = cube(1.0);
        assert_eq!(cube.vertices.len(), 24);
        assert_eq!(cube.triangle_count(), 12);
        for v in &cube.vertices {
            let p = Vec3::from(v.position);
            assert_relative_eq!(p.abs().max_element(), 1.0);
            let n = Vec3::from(v.normal);
            let t = Vec3::from(v.tangent);
            assert_relative_eq!(t.length(), 1.0, epsilon = 1e-5);
            assert_relative_eq!(n.dot(t), 0.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let sphere = sphere(2.0, 8, 12);
        assert_eq!(sphere.vertices.len(), 9 * 13);
        assert_eq!(sphere.triangle_count(), 8 * 12 * 2);
        for v in &sphere.vertices {
            assert_relative_eq!(Vec3::from(v.position).length(), 2.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_computed_normals_point_outwards_of_plane() {
        let mut plane = plane(1.0);
        for v in &mut plane.vertices {
            v.normal = [0.0; 3];
        }
        compute_normals(&mut plane.vertices, &plane.indices);
        for v in &plane.vertices {
            assert_relative_eq!(v.normal[1].abs(), 1.0, epsilon = 1e-5);
        }
    }
}
