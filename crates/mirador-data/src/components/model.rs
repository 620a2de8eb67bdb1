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

use super::Transform;
use mirador_core::math::{Mat4, Vec3};
use mirador_core::renderer::Mesh;
use std::rc::Rc;

/// A placed instance of a mesh.
///
/// Many models may share one [`Mesh`]; the `Rc` keeps the mesh alive for as
/// long as any model references it.
#[derive(Debug, Clone)]
pub struct Model {
    /// Debug name.
    pub name: String,
    /// The shared geometry.
    pub mesh: Rc<Mesh>,
    /// Placement in the world.
    pub transform: Transform,
    /// Per-instance tint. `None` draws with the default color.
    pub color: Option<Vec3>,
}

impl Model {
    /// Creates an untinted model at the identity transform.
    pub fn new(name: impl Into<String>, mesh: Rc<Mesh>) -> Self {
        Self {
            name: name.into(),
            mesh,
            transform: Transform::identity(),
            color: None,
        }
    }

    /// Replaces the transform.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// World position shortcut.
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Object-to-world matrix for the current transform.
    pub fn world_matrix(&self) -> Mat4 {
        self.transform.world_matrix()
    }

    /// Turns the model so its local +Z axis points at `target`.
    pub fn face_target(&mut self, target: Vec3) {
        self.transform.face_target(target);
    }
}
