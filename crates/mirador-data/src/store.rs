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

//! Dense storage of every entity in the scene.

use crate::components::{Camera, Light, Model};

/// Index of a [`Model`] in an [`EntityStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModelId(pub u32);

/// Index of a [`Camera`] in an [`EntityStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CameraId(pub u32);

/// Index of a [`Light`] in an [`EntityStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LightId(pub u32);

/// Owns the models, cameras and lights of a scene.
///
/// Entities are appended and never removed individually; ids are stable
/// indices into dense vectors. [`clear`](EntityStore::clear) drops everything
/// at once, which also drops the store's references to shared meshes.
///
/// The typed accessors (`model`, `camera`, `light` and their `_mut` forms)
/// index directly and panic on an id that did not come from this store.
#[derive(Debug, Default)]
pub struct EntityStore {
    models: Vec<Model>,
    cameras: Vec<Camera>,
    lights: Vec<Light>,
}

impl EntityStore {
    /// Creates a new, empty `EntityStore`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a model and returns its id.
    pub fn add_model(&mut self, model: Model) -> ModelId {
        let id = ModelId(self.models.len() as u32);
        log::trace!("EntityStore: model {:?} = '{}'", id, model.name);
        self.models.push(model);
        id
    }

    /// Adds a camera and returns its id.
    pub fn add_camera(&mut self, camera: Camera) -> CameraId {
        let id = CameraId(self.cameras.len() as u32);
        self.cameras.push(camera);
        id
    }

    /// Adds a light and returns its id.
    pub fn add_light(&mut self, light: Light) -> LightId {
        let id = LightId(self.lights.len() as u32);
        log::trace!("EntityStore: light {:?} = '{}'", id, light.marker.name);
        self.lights.push(light);
        id
    }

    /// The model for `id`.
    pub fn model(&self, id: ModelId) -> &Model {
        &self.models[id.0 as usize]
    }

    /// The model for `id`, mutably.
    pub fn model_mut(&mut self, id: ModelId) -> &mut Model {
        &mut self.models[id.0 as usize]
    }

    /// The model for `id`, if it exists.
    pub fn get_model(&self, id: ModelId) -> Option<&Model> {
        self.models.get(id.0 as usize)
    }

    /// The camera for `id`.
    pub fn camera(&self, id: CameraId) -> &Camera {
        &self.cameras[id.0 as usize]
    }

    /// The camera for `id`, mutably.
    pub fn camera_mut(&mut self, id: CameraId) -> &mut Camera {
        &mut self.cameras[id.0 as usize]
    }

    /// The light for `id`.
    pub fn light(&self, id: LightId) -> &Light {
        &self.lights[id.0 as usize]
    }

    /// The light for `id`, mutably.
    pub fn light_mut(&mut self, id: LightId) -> &mut Light {
        &mut self.lights[id.0 as usize]
    }

    /// All models in insertion order.
    pub fn models(&self) -> &[Model] {
        &self.models
    }

    /// All lights in insertion order.
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// All lights, mutably.
    pub fn lights_mut(&mut self) -> &mut [Light] {
        &mut self.lights
    }

    /// All cameras in insertion order.
    pub fn cameras(&self) -> &[Camera] {
        &self.cameras
    }

    /// Total number of entities of every kind.
    pub fn len(&self) -> usize {
        self.models.len() + self.cameras.len() + self.lights.len()
    }

    /// Whether the store holds no entity at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every entity.
    pub fn clear(&mut self) {
        self.models.clear();
        self.cameras.clear();
        self.lights.clear();
    }
}
