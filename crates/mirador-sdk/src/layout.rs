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

//! The portal scene's content: which entities exist, where they start, how
//! they move and in which order they are drawn.

use crate::config::SceneConfig;
use mirador_core::animation::{OrbitDriver, Oscillator};
use mirador_core::math::{degrees_vec, Vec3};
use mirador_core::renderer::{
    BlendMode, CullMode, DepthMode, Mesh, SamplerKind, ShaderTechnique, TextureViewId,
};
use mirador_data::{
    Camera, CameraId, ColorDrift, EntityStore, Light, LightAnimation, LightId, LightOrbit, Model,
    ModelId, Transform,
};
use mirador_lanes::animation_lane::{CameraControl, PortalRig, SceneAnimator, SpinTargets};
use mirador_lanes::render_lane::{DrawDescriptor, DrawSubject, TextureSource};
use std::rc::Rc;

/// Uploaded meshes, one per mesh file.
#[derive(Debug, Clone)]
pub struct SceneMeshes {
    pub light: Rc<Mesh>,
    pub portal: Rc<Mesh>,
    pub floor: Rc<Mesh>,
    pub teapot: Rc<Mesh>,
    pub sphere: Rc<Mesh>,
    pub cube: Rc<Mesh>,
    pub troll: Rc<Mesh>,
    pub robot: Rc<Mesh>,
}

/// Shader-resource views of the loaded textures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneTextures {
    pub light: TextureViewId,
    pub floor: TextureViewId,
    pub teapot: TextureViewId,
    pub sphere: TextureViewId,
    pub brick: TextureViewId,
    pub tiles: TextureViewId,
    pub additive: TextureViewId,
    pub glass: TextureViewId,
    pub moogle: TextureViewId,
    pub pattern: TextureViewId,
    pub pattern_normal: TextureViewId,
    pub troll: TextureViewId,
    pub cell_gradient: TextureViewId,
    /// Loaded with the scene but never bound: the robot draw samples the
    /// sticky slot-0 texture.
    pub robot: TextureViewId,
}

/// Keys of every entity of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneLayout {
    pub floor: ModelId,
    pub teapot: ModelId,
    pub sphere: ModelId,
    pub two_texture_cube: ModelId,
    pub additive_cube: ModelId,
    pub multiplicative_cube: ModelId,
    pub alpha_cube: ModelId,
    pub normal_map_cube: ModelId,
    pub troll: ModelId,
    pub portal: ModelId,
    pub robot: ModelId,
    pub lights: [LightId; 5],
    pub main_camera: CameraId,
    pub portal_camera: CameraId,
}

fn place(
    store: &mut EntityStore,
    name: &str,
    mesh: &Rc<Mesh>,
    position: Vec3,
    rotation: Vec3,
    scale: Vec3,
) -> ModelId {
    store.add_model(
        Model::new(name, mesh.clone())
            .with_transform(Transform::new(position, rotation, scale)),
    )
}

fn light(
    store: &mut EntityStore,
    index: usize,
    mesh: &Rc<Mesh>,
    position: Vec3,
    color: Vec3,
    strength: f32,
    animation: LightAnimation,
) -> LightId {
    let marker = Model::new(format!("Light {}", index + 1), mesh.clone())
        .with_transform(Transform::from_position(position));
    store.add_light(Light::new(marker, color, strength).with_animation(animation))
}

fn orbit(center: ModelId, radius: f32, speed: f32, height: f32) -> Option<LightOrbit> {
    Some(LightOrbit {
        center,
        driver: OrbitDriver::new(radius, speed, height),
    })
}

/// Adds the initial models, lights and cameras to `store`.
///
/// `display_aspect` is the main camera's aspect ratio. Poses are the raw
/// initial values; the animator's `settle` brings the animated ones in line.
pub fn populate(
    store: &mut EntityStore,
    meshes: &SceneMeshes,
    config: &SceneConfig,
    display_aspect: f32,
) -> SceneLayout {
    let zero = Vec3::ZERO;
    let one = Vec3::ONE;

    let floor = place(store, "Floor", &meshes.floor, zero, zero, one);
    let teapot = place(store, "Teapot", &meshes.teapot, Vec3::new(-10.0, 0.0, 0.0), zero, one);
    let sphere = place(store, "Sphere", &meshes.sphere, Vec3::new(15.0, 15.0, 50.0), zero, one);
    let two_texture_cube = place(
        store,
        "Two Texture Cube",
        &meshes.cube,
        Vec3::new(30.0, 5.0, -20.0),
        zero,
        one,
    );
    let additive_cube = place(
        store,
        "Additive Cube",
        &meshes.cube,
        Vec3::new(100.0, 15.0, -40.0),
        zero,
        one,
    );
    let multiplicative_cube = place(
        store,
        "Multiplicative Cube",
        &meshes.cube,
        Vec3::new(100.0, 15.0, -60.0),
        zero,
        one,
    );
    let alpha_cube = place(
        store,
        "Alpha Cube",
        &meshes.cube,
        Vec3::new(100.0, 15.0, -80.0),
        zero,
        one,
    );
    let normal_map_cube = place(
        store,
        "Normal Map Cube",
        &meshes.cube,
        Vec3::new(30.0, 20.0, -100.0),
        zero,
        one,
    );
    let troll = place(
        store,
        "Troll",
        &meshes.troll,
        Vec3::new(-70.0, 10.0, -120.0),
        degrees_vec(0.0, 60.0, 0.0),
        Vec3::splat(10.0),
    );
    let portal = place(
        store,
        "Portal",
        &meshes.portal,
        Vec3::new(-70.0, 30.0, -100.0),
        zero,
        Vec3::new(3.0, 3.0, 0.1),
    );
    let robot = place(
        store,
        "Robot",
        &meshes.robot,
        Vec3::new(-50.0, 0.0, -40.0),
        degrees_vec(0.0, 110.0, 0.0),
        Vec3::splat(4.0),
    );

    let lights = [
        light(
            store,
            0,
            &meshes.light,
            Vec3::new(40.0, 20.0, 0.0),
            Vec3::new(1.0, 0.8, 0.2),
            10.0,
            LightAnimation {
                pulse: Some(Oscillator::new(10.0, 10.0, 1.0, 30.0)),
                ..Default::default()
            },
        ),
        light(
            store,
            1,
            &meshes.light,
            Vec3::new(-10.0, 10.0, 0.0),
            Vec3::ONE,
            10.0,
            LightAnimation {
                drift: Some(ColorDrift {
                    red: Oscillator::new(0.1, 0.2, 0.2, 0.99),
                    green: Oscillator::new(0.0, 0.2, 0.2, 0.99),
                    blue: 1.0,
                }),
                orbit: orbit(teapot, 20.0, 0.7, 10.0),
                ..Default::default()
            },
        ),
        light(
            store,
            2,
            &meshes.light,
            Vec3::new(150.0, 50.0, -60.0),
            Vec3::ONE,
            20.0,
            LightAnimation {
                orbit: orbit(multiplicative_cube, 40.0, 1.0, 5.0),
                ..Default::default()
            },
        ),
        light(
            store,
            3,
            &meshes.light,
            Vec3::new(30.0, 30.0, -200.0),
            Vec3::new(0.0, 0.164, 0.839),
            10.0,
            LightAnimation {
                orbit: orbit(normal_map_cube, 20.0, 1.0, 0.0),
                ..Default::default()
            },
        ),
        light(
            store,
            4,
            &meshes.light,
            Vec3::new(150.0, 20.0, -250.0),
            Vec3::ONE,
            10.0,
            LightAnimation {
                orbit: orbit(troll, 30.0, 1.0, 5.0),
                ..Default::default()
            },
        ),
    ];

    let main_camera = store.add_camera(Camera::new(
        Vec3::new(15.0, 45.0, -75.0),
        degrees_vec(30.0, 0.0, 0.0),
        display_aspect,
        0.1,
        100_000.0,
    ));
    let portal_camera = store.add_camera(Camera::new(
        Vec3::new(45.0, 45.0, 85.0),
        degrees_vec(20.0, 215.0, 0.0),
        config.portal_aspect(),
        1.0,
        100_000.0,
    ));

    SceneLayout {
        floor,
        teapot,
        sphere,
        two_texture_cube,
        additive_cube,
        multiplicative_cube,
        alpha_cube,
        normal_map_cube,
        troll,
        portal,
        robot,
        lights,
        main_camera,
        portal_camera,
    }
}

/// The animator for a populated scene.
pub fn animator(layout: &SceneLayout, config: &SceneConfig) -> SceneAnimator {
    SceneAnimator::new(
        SpinTargets {
            additive: layout.additive_cube,
            multiplicative: layout.multiplicative_cube,
            alpha: layout.alpha_cube,
        },
        PortalRig {
            model: layout.portal,
            camera: layout.portal_camera,
            center: layout.two_texture_cube,
            orbit: OrbitDriver::new(80.0, 0.5, 40.0),
        },
        CameraControl {
            camera: layout.main_camera,
            turn_speed: config.turn_speed,
            move_speed: config.move_speed,
        },
        config.report_interval,
    )
}

/// The ordered draw list both passes execute.
pub fn draw_list(layout: &SceneLayout, textures: &SceneTextures) -> Vec<DrawDescriptor> {
    use DrawSubject::Model as M;
    use ShaderTechnique as T;
    use TextureSource::Asset;

    let mut draws = vec![
        DrawDescriptor::textured("Floor", T::PixelLighting, M(layout.floor), Asset(textures.floor)),
        DrawDescriptor::textured(
            "Teapot",
            T::PixelLighting,
            M(layout.teapot),
            Asset(textures.teapot),
        ),
        DrawDescriptor::textured(
            "Additive Cube",
            T::PixelLighting,
            M(layout.additive_cube),
            Asset(textures.additive),
        )
        .blend(BlendMode::Additive)
        .cull(CullMode::None),
        DrawDescriptor::textured(
            "Multiplicative Cube",
            T::PixelLighting,
            M(layout.multiplicative_cube),
            Asset(textures.glass),
        )
        .blend(BlendMode::Multiplicative)
        .cull(CullMode::None),
        DrawDescriptor::textured("Alpha Cube", T::Alpha, M(layout.alpha_cube), Asset(textures.moogle))
            .blend(BlendMode::Alpha)
            .cull(CullMode::None),
        // Blend stays alpha from the previous draw.
        DrawDescriptor::textured(
            "Normal Map Cube",
            T::NormalMapping,
            M(layout.normal_map_cube),
            Asset(textures.pattern),
        )
        .blend(BlendMode::Alpha)
        .cull(CullMode::None)
        .with_texture(1, Asset(textures.pattern_normal), SamplerKind::Anisotropic4x),
        DrawDescriptor::untextured("Troll Outline", T::CellShadingOutline, M(layout.troll))
            .cull(CullMode::Front),
        DrawDescriptor::textured("Troll", T::CellShading, M(layout.troll), Asset(textures.troll))
            .with_texture(1, Asset(textures.cell_gradient), SamplerKind::Point),
        DrawDescriptor::textured("Sphere", T::Wiggle, M(layout.sphere), Asset(textures.sphere)),
        DrawDescriptor::textured(
            "Two Texture Cube",
            T::FadeTwoTextures,
            M(layout.two_texture_cube),
            Asset(textures.brick),
        )
        .with_texture(1, Asset(textures.tiles), SamplerKind::Point),
    ];

    draws.extend(layout.lights.iter().map(|&light| {
        DrawDescriptor::textured(
            "Light",
            T::LightModel,
            DrawSubject::Light(light),
            Asset(textures.light),
        )
        .blend(BlendMode::Additive)
        .depth(DepthMode::ReadOnly)
        .cull(CullMode::None)
    }));

    draws.push(DrawDescriptor::textured(
        "Portal",
        T::PixelLighting,
        M(layout.portal),
        TextureSource::PortalColor,
    ));
    // Slot 0 keeps whatever the previous draw left bound.
    draws.push(DrawDescriptor::untextured("Robot", T::PixelLighting, M(layout.robot)));
    draws
}
