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

use mirador_core::platform::{CameraKey, NoInput};
use mirador_core::renderer::{ResourceId, TextureFormat};
use mirador_data::LightId;
use mirador_infra::graphics::headless::{DeviceCommand, ResourceKind, TextureContents};
use mirador_infra::{HeadlessDevice, KeyboardState, SyntheticAssets};
use mirador_sdk::{InitError, PortalScene, SceneConfig};
use std::io::Write;
use std::rc::Rc;

/// GPU objects a fully initialised scene owns: 8 meshes, 8 shader pairs,
/// 2 constant buffers, 14 textures, the portal targets, 9 states and 2
/// samplers.
const SCENE_OBJECTS: usize = 8 * 2 + 8 + 2 + 14 * 2 + 5 + 9 + 2;

fn session(device: &Rc<HeadlessDevice>, assets: SyntheticAssets, config: SceneConfig) -> PortalScene {
    let assets = Rc::new(assets);
    PortalScene::new(device.clone(), assets.clone(), assets, config)
}

fn ready(device: &Rc<HeadlessDevice>, config: SceneConfig) -> PortalScene {
    let mut scene = session(device, SyntheticAssets::new(), config);
    scene.init_geometry().unwrap();
    scene.init_scene().unwrap();
    scene
}

/// Draw commands grouped by pass.
fn draws_per_pass(commands: &[DeviceCommand]) -> Vec<Vec<&DeviceCommand>> {
    let mut passes: Vec<Vec<&DeviceCommand>> = Vec::new();
    for command in commands {
        match command {
            DeviceCommand::SetRenderTargets { .. } => passes.push(Vec::new()),
            DeviceCommand::Draw { .. } => passes
                .last_mut()
                .expect("draw before any target")
                .push(command),
            _ => {}
        }
    }
    passes
}

#[test]
fn test_full_init_owns_every_object() {
    let device = Rc::new(HeadlessDevice::new(800, 600));
    let scene = ready(&device, SceneConfig::default());

    assert_eq!(scene.resource_count(), SCENE_OBJECTS);
    assert_eq!(device.live_objects(), SCENE_OBJECTS);
    assert_eq!(scene.draws().len(), 17);
    assert!(scene.last_error().is_none());

    let portal = scene.portal_targets().unwrap();
    assert_eq!(
        device.texture_info(portal.color_texture_id()),
        Some(((1024, 1024), TextureFormat::Rgba8Unorm))
    );
}

#[test]
fn test_frame_renders_portal_before_main() {
    let device = Rc::new(HeadlessDevice::new(800, 600));
    let mut scene = ready(&device, SceneConfig::default());
    device.take_commands();

    scene.update_scene(1.0 / 60.0, &NoInput);
    let stats = scene.render_scene().unwrap();
    let portal_stats = stats.portal.unwrap();
    assert_eq!(portal_stats.draws, 16);
    assert_eq!(portal_stats.skipped, 1);
    assert_eq!(stats.main.draws, 17);
    assert_eq!(device.present_count(), 1);
    assert_eq!(device.hazard_count(), 0);
    assert_eq!(device.invalid_handle_count(), 0);

    let commands = device.take_commands();
    assert_eq!(commands.last(), Some(&DeviceCommand::Present));
    let passes = draws_per_pass(&commands);
    assert_eq!(passes.len(), 2);
    assert_eq!(passes[0].len(), 16);
    assert_eq!(passes[1].len(), 17);

    let portal_texture = scene.portal_targets().unwrap().color_texture_id();
    let portal_draw = passes[1]
        .iter()
        .find_map(|command| match command {
            DeviceCommand::Draw { mesh, inputs, .. } if mesh == "Portal" => Some(inputs),
            _ => None,
        })
        .expect("main pass draws the portal");
    assert_eq!(portal_draw[0].texture, portal_texture);
    assert_eq!(
        portal_draw[0].contents,
        TextureContents::Drawn { draws: 16 }
    );
    assert!(passes[0].iter().all(|command| !matches!(
        command,
        DeviceCommand::Draw { mesh, .. } if mesh == "Portal"
    )));
}

#[test]
fn test_robot_samples_the_sticky_portal_binding() {
    let device = Rc::new(HeadlessDevice::new(800, 600));
    let mut scene = ready(&device, SceneConfig::default());
    device.take_commands();

    scene.update_scene(1.0 / 60.0, &NoInput);
    scene.render_scene().unwrap();
    let commands = device.take_commands();
    let main_start = commands
        .iter()
        .rposition(|command| matches!(command, DeviceCommand::SetRenderTargets { .. }))
        .unwrap();
    let main = &commands[main_start..];
    let draw_index = |name: &str| {
        main.iter()
            .position(|command| matches!(command, DeviceCommand::Draw { mesh, .. } if mesh == name))
            .unwrap()
    };
    let (portal, robot) = (draw_index("Portal"), draw_index("Robot"));
    assert!(main[portal..robot]
        .iter()
        .all(|command| !matches!(command, DeviceCommand::SetTexture { .. })));

    let DeviceCommand::Draw { inputs, .. } = &main[robot] else {
        unreachable!()
    };
    let slot0 = inputs.iter().find(|input| input.slot == 0).unwrap();
    assert_eq!(
        slot0.texture,
        scene.portal_targets().unwrap().color_texture_id()
    );
    assert_eq!(device.hazard_count(), 0);
}

#[test]
fn test_disabled_portal_shows_cleared_texture() {
    let device = Rc::new(HeadlessDevice::new(800, 600));
    let config = SceneConfig {
        portal_enabled: false,
        ..SceneConfig::default()
    };
    let mut scene = ready(&device, config.clone());
    device.take_commands();

    for _ in 0..3 {
        scene.update_scene(0.1, &NoInput);
        let stats = scene.render_scene().unwrap();
        assert!(stats.portal.is_none());
    }
    let commands = device.take_commands();
    let passes = draws_per_pass(&commands);
    assert_eq!(passes.len(), 3);
    for pass in passes {
        let inputs = pass
            .iter()
            .find_map(|command| match command {
                DeviceCommand::Draw { mesh, inputs, .. } if mesh == "Portal" => Some(inputs),
                _ => None,
            })
            .unwrap();
        assert_eq!(
            inputs[0].contents,
            TextureContents::Cleared(config.background_color)
        );
    }
}

#[test]
fn test_portal_can_be_toggled_at_runtime() {
    let device = Rc::new(HeadlessDevice::new(800, 600));
    let mut scene = ready(&device, SceneConfig::default());
    scene.render_scene();
    scene.set_portal_enabled(false);
    assert!(scene.render_scene().unwrap().portal.is_none());
    scene.set_portal_enabled(true);
    assert!(scene.render_scene().unwrap().portal.is_some());
}

#[test]
fn test_zero_step_after_init_changes_nothing() {
    let device = Rc::new(HeadlessDevice::new(800, 600));
    let mut scene = ready(&device, SceneConfig::default());
    let pose = |scene: &PortalScene| {
        let store = scene.store();
        let models: Vec<_> = store
            .models()
            .iter()
            .map(|m| (m.transform.position, m.transform.rotation, m.transform.scale))
            .collect();
        let lights: Vec<_> = store
            .lights()
            .iter()
            .map(|l| (l.position(), l.emitted_color(), l.marker.transform.scale))
            .collect();
        (models, lights)
    };
    let before = pose(&scene);
    scene.update_scene(0.0, &NoInput);
    assert_eq!(pose(&scene), before);
}

#[test]
fn test_keyboard_moves_main_camera_only() {
    let device = Rc::new(HeadlessDevice::new(800, 600));
    let mut scene = ready(&device, SceneConfig::default());
    let layout = *scene.layout().unwrap();
    let start = scene.store().camera(layout.main_camera).position();

    let mut keys = KeyboardState::new();
    keys.press(CameraKey::Forward);
    scene.update_scene(0.1, &keys);
    let moved = scene.store().camera(layout.main_camera).position();
    assert!((moved - start).length() > 4.99);

    scene.render_scene();
    let per_frame = scene.renderer().unwrap().per_frame();
    assert_eq!(per_frame.camera_position, moved);
}

#[test]
fn test_window_title_carries_frame_report() {
    let device = Rc::new(HeadlessDevice::new(800, 600));
    let mut scene = ready(&device, SceneConfig::default());
    assert_eq!(scene.window_title(), "Mirador");

    let mut reports = 0;
    for _ in 0..33 {
        if scene.update_scene(1.0 / 64.0, &NoInput).is_some() {
            reports += 1;
        }
    }
    assert_eq!(reports, 1);
    assert_eq!(scene.last_frame_report().unwrap().fps, 64);
    let title = scene.window_title();
    assert!(title.starts_with("Mirador - Frame Time: "));
    assert!(title.ends_with("FPS: 64"));
}

#[test]
fn test_missing_mesh_fails_first() {
    let device = Rc::new(HeadlessDevice::new(800, 600));
    let assets = SyntheticAssets::new().with_missing("media/Teapot.obj");
    let mut scene = session(&device, assets, SceneConfig::default());

    let err = scene.init_geometry().unwrap_err();
    assert!(matches!(err, InitError::ResourceLoad { context: "Error loading meshes", .. }));
    assert!(scene.last_error().unwrap().starts_with("Error loading meshes"));
    // Light, portal and ground were uploaded before the failure.
    assert_eq!(scene.resource_count(), 6);

    scene.release_resources();
    assert_eq!(device.live_objects(), 0);
}

#[test]
fn test_shader_failure_stops_before_textures() {
    let device = Rc::new(HeadlessDevice::new(800, 600));
    device.fail_after(ResourceKind::ShaderPair, 3);
    let assets = Rc::new(SyntheticAssets::new());
    let mut scene = PortalScene::new(
        device.clone(),
        assets.clone(),
        assets.clone(),
        SceneConfig::default(),
    );

    let err = scene.init_geometry().unwrap_err();
    assert_eq!(err.context(), Some("Error loading shaders"));
    assert_eq!(assets.load_count(), 8);
    assert_eq!(scene.resource_count(), 16 + 3);
    assert!(scene.init_scene().is_err());
    assert!(scene.render_scene().is_none());
}

#[test]
fn test_portal_failure_is_reported() {
    let device = Rc::new(HeadlessDevice::new(800, 600));
    device.fail_after(ResourceKind::Texture, 14);
    let mut scene = session(&device, SyntheticAssets::new(), SceneConfig::default());
    let err = scene.init_geometry().unwrap_err();
    assert_eq!(err.context(), Some("Error creating portal texture"));
    assert_eq!(
        scene.last_error(),
        Some(err.to_string().as_str())
    );
}

#[test]
fn test_scene_needs_geometry() {
    let device = Rc::new(HeadlessDevice::new(800, 600));
    let mut scene = session(&device, SyntheticAssets::new(), SceneConfig::default());
    let err = scene.init_scene().unwrap_err();
    assert!(matches!(err, InitError::NotReady { .. }));
    assert!(scene.last_error().is_some());
    assert!(scene.update_scene(0.1, &NoInput).is_none());
    assert!(scene.render_scene().is_none());
    assert!(device.commands().is_empty());

    scene.init_geometry().unwrap();
    scene.init_scene().unwrap();
    assert!(scene.last_error().is_none());
}

#[test]
fn test_release_is_reverse_and_idempotent() {
    let device = Rc::new(HeadlessDevice::new(800, 600));
    let mut scene = ready(&device, SceneConfig::default());
    let first_buffer = scene.store().light(LightId(0)).marker.mesh.vertex_buffer;

    scene.release_resources();
    let released = device.released();
    assert_eq!(released.len(), SCENE_OBJECTS);
    assert!(matches!(released[0], ResourceId::Sampler(_)));
    assert_eq!(released.last(), Some(&ResourceId::Buffer(first_buffer)));
    assert_eq!(device.live_objects(), 0);
    assert!(scene.store().is_empty());
    assert!(scene.layout().is_none());

    scene.release_resources();
    assert_eq!(device.released().len(), SCENE_OBJECTS);
    assert!(scene.render_scene().is_none());
}

#[test]
fn test_dropping_the_session_releases_everything() {
    let device = Rc::new(HeadlessDevice::new(800, 600));
    let scene = ready(&device, SceneConfig::default());
    drop(scene);
    assert_eq!(device.live_objects(), 0);
}

#[test]
fn test_config_file_drives_the_scene() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "(portal_size: (64, 32), title: \"Portal Test\", media_dir: \"assets\")"
    )
    .unwrap();
    let config = SceneConfig::load(file.path()).unwrap();

    let device = Rc::new(HeadlessDevice::new(320, 240));
    let assets = SyntheticAssets::new().with_missing("media/Cube.obj");
    let mut scene = session(&device, assets, config);
    scene.init_geometry().unwrap();
    scene.init_scene().unwrap();

    let portal = scene.portal_targets().unwrap();
    assert_eq!(portal.size(), (64, 32));
    let layout = *scene.layout().unwrap();
    assert_eq!(scene.store().camera(layout.portal_camera).aspect_ratio, 2.0);
    assert_eq!(scene.window_title(), "Portal Test");
}
