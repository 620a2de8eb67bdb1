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

use mirador_core::math::Vec3;
use mirador_core::renderer::{BufferId, Mesh};
use mirador_data::{Camera, EntityStore, Light, Model, Transform};
use std::rc::Rc;

fn cube() -> Rc<Mesh> {
    Rc::new(Mesh {
        label: "Cube".into(),
        vertex_buffer: BufferId(1),
        index_buffer: BufferId(2),
        index_count: 36,
    })
}

#[test]
fn test_models_share_one_mesh() {
    let mesh = cube();
    let mut store = EntityStore::new();
    let a = store.add_model(Model::new("a", mesh.clone()));
    let b = store.add_model(
        Model::new("b", mesh.clone())
            .with_transform(Transform::from_position(Vec3::new(100.0, 15.0, -40.0))),
    );
    assert_eq!(Rc::strong_count(&mesh), 3);
    assert!(Rc::ptr_eq(&store.model(a).mesh, &store.model(b).mesh));
    assert_eq!(store.model(b).position(), Vec3::new(100.0, 15.0, -40.0));

    store.clear();
    assert!(store.is_empty());
    assert_eq!(Rc::strong_count(&mesh), 1);
}

#[test]
fn test_ids_are_per_kind_and_stable() {
    let mut store = EntityStore::new();
    let m0 = store.add_model(Model::new("floor", cube()));
    let l0 = store.add_light(Light::new(Model::new("light", cube()), Vec3::ONE, 20.0));
    let c0 = store.add_camera(Camera::default());
    let m1 = store.add_model(Model::new("teapot", cube()));

    assert_eq!(m0.0, 0);
    assert_eq!(m1.0, 1);
    assert_eq!(l0.0, 0);
    assert_eq!(c0.0, 0);
    assert_eq!(store.len(), 4);
    assert_eq!(store.model(m1).name, "teapot");
    assert!(store.get_model(mirador_data::ModelId(7)).is_none());
}

#[test]
fn test_mutation_through_store() {
    let mut store = EntityStore::new();
    let light = store.add_light(Light::new(Model::new("light", cube()), Vec3::ONE, 10.0));
    store.light_mut(light).strength = 20.0;
    store.light_mut(light).marker.transform.position = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(store.light(light).emitted_color(), Vec3::splat(20.0));
    assert_eq!(store.lights()[0].position(), Vec3::new(1.0, 2.0, 3.0));
}
