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

use mirador_core::asset::{upload_mesh, upload_texture, MeshRepository, TextureLoader};
use mirador_core::renderer::{GraphicsDevice, ResourceId, ResourceScope};
use mirador_infra::graphics::headless::{ResourceKind, TextureContents};
use mirador_infra::{HeadlessDevice, SyntheticAssets};
use std::path::Path;
use std::rc::Rc;

#[test]
fn test_uploaded_assets_are_released_in_reverse_order() {
    let device = Rc::new(HeadlessDevice::new(320, 240));
    let assets = SyntheticAssets::new();
    let mut scope = ResourceScope::new(device.clone(), "Assets");

    let cube = assets.load_mesh(Path::new("Cube.obj")).unwrap();
    let mesh = upload_mesh(&mut scope, "Cube", &cube).unwrap();
    let wood = assets.load_texture(Path::new("Wood.jpg")).unwrap();
    let view = upload_texture(&mut scope, "Wood", &wood).unwrap();

    assert_eq!(device.live_objects(), 4);
    let texture = device.view_texture(view).unwrap();
    assert_eq!(
        device.texture_contents(texture),
        Some(TextureContents::Uploaded)
    );
    assert_eq!(
        device.buffer_contents(mesh.index_buffer).map(|b| b.len()),
        Some(36 * 4)
    );

    drop(scope);
    assert_eq!(device.live_objects(), 0);
    assert_eq!(
        device.released(),
        vec![
            ResourceId::TextureView(view),
            ResourceId::Texture(texture),
            ResourceId::Buffer(mesh.index_buffer),
            ResourceId::Buffer(mesh.vertex_buffer),
        ]
    );
}

#[test]
fn test_failed_view_leaves_texture_owned() {
    let device = Rc::new(HeadlessDevice::new(320, 240));
    device.fail(ResourceKind::TextureView);
    let mut scope = ResourceScope::new(device.clone(), "Assets");

    let tex = SyntheticAssets::new()
        .load_texture(Path::new("Stone.jpg"))
        .unwrap();
    assert!(upload_texture(&mut scope, "Stone", &tex).is_err());
    assert_eq!(scope.len(), 1);

    scope.release_all();
    assert_eq!(device.live_objects(), 0);
}

#[test]
fn test_surface_is_always_available() {
    let device = HeadlessDevice::new(320, 240);
    assert_eq!(device.surface_size(), (320, 240));
    assert_ne!(device.back_buffer(), device.main_depth_stencil());
    assert_eq!(device.live_objects(), 0);
}
