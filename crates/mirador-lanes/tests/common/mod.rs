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

//! Shared fixtures for lane tests: a command-recording mock device and a
//! small scene.

#![allow(dead_code)]

use mirador_core::animation::{OrbitDriver, Oscillator};
use mirador_core::math::{LinearRgba, Vec3};
use mirador_core::renderer::*;
use mirador_data::{
    Camera, CameraId, ColorDrift, EntityStore, Light, LightAnimation, LightOrbit, Model, ModelId,
    Transform,
};
use mirador_lanes::animation_lane::{CameraControl, PortalRig, SceneAnimator, SpinTargets};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// A device call, as observed by the mock.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    SetTargets(TextureViewId, TextureViewId),
    ClearColor(TextureViewId),
    ClearDepth(TextureViewId),
    Viewport(Viewport),
    Shader(ShaderPairId),
    Blend(BlendStateId),
    Depth(DepthStateId),
    Raster(RasterizerStateId),
    Texture(u32, TextureViewId),
    Sampler(u32, SamplerId),
    Update(BufferId),
    BindConstants(u32, BufferId),
    Draw { mesh: String, per_model: Option<Vec<u8>> },
    Present,
}

/// A mock graphics device that records every context call.
#[derive(Debug, Default)]
pub struct MockGraphicsDevice {
    next_id: Cell<usize>,
    pub calls: RefCell<Vec<Call>>,
    pub buffers: RefCell<HashMap<BufferId, Vec<u8>>>,
    pub constant_buffers: RefCell<Vec<BufferId>>,
    pub blend: RefCell<HashMap<BlendStateId, BlendMode>>,
    pub shaders: RefCell<HashMap<ShaderPairId, ShaderTechnique>>,
    pub views: RefCell<HashMap<TextureViewId, (TextureId, TextureViewKind)>>,
    per_model_slot: Cell<Option<BufferId>>,
}

impl MockGraphicsDevice {
    fn next(&self) -> usize {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        id
    }

    pub fn take_calls(&self) -> Vec<Call> {
        std::mem::take(&mut *self.calls.borrow_mut())
    }

    pub fn draws(&self) -> Vec<(String, PerModelConstants)> {
        self.calls
            .borrow()
            .iter()
            .filter_map(|c| match c {
                Call::Draw {
                    mesh,
                    per_model: Some(bytes),
                } => Some((mesh.clone(), bytemuck::pod_read_unaligned(bytes))),
                _ => None,
            })
            .collect()
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_buffer(
        &self,
        d: &BufferDescriptor,
        data: Option<&[u8]>,
    ) -> Result<BufferId, ResourceError> {
        let id = BufferId(self.next());
        let mut contents = vec![0u8; d.size as usize];
        if let Some(data) = data {
            contents[..data.len()].copy_from_slice(data);
        }
        self.buffers.borrow_mut().insert(id, contents);
        if d.usage == BufferUsage::Constant {
            self.constant_buffers.borrow_mut().push(id);
        }
        Ok(id)
    }
    fn create_texture(
        &self,
        _d: &TextureDescriptor,
        _data: Option<&[u8]>,
    ) -> Result<TextureId, ResourceError> {
        Ok(TextureId(self.next()))
    }
    fn create_texture_view(
        &self,
        t: TextureId,
        k: TextureViewKind,
    ) -> Result<TextureViewId, ResourceError> {
        let id = TextureViewId(self.next());
        self.views.borrow_mut().insert(id, (t, k));
        Ok(id)
    }
    fn create_shader_pair(&self, t: ShaderTechnique) -> Result<ShaderPairId, ResourceError> {
        let id = ShaderPairId(self.next());
        self.shaders.borrow_mut().insert(id, t);
        Ok(id)
    }
    fn create_blend_state(&self, m: BlendMode) -> Result<BlendStateId, ResourceError> {
        let id = BlendStateId(self.next());
        self.blend.borrow_mut().insert(id, m);
        Ok(id)
    }
    fn create_depth_state(&self, _m: DepthMode) -> Result<DepthStateId, ResourceError> {
        Ok(DepthStateId(self.next()))
    }
    fn create_rasterizer_state(&self, _m: CullMode) -> Result<RasterizerStateId, ResourceError> {
        Ok(RasterizerStateId(self.next()))
    }
    fn create_sampler(&self, _k: SamplerKind) -> Result<SamplerId, ResourceError> {
        Ok(SamplerId(self.next()))
    }
    fn release(&self, _id: ResourceId) -> Result<(), ResourceError> {
        Ok(())
    }
    fn back_buffer(&self) -> TextureViewId {
        TextureViewId(10_000)
    }
    fn main_depth_stencil(&self) -> TextureViewId {
        TextureViewId(10_001)
    }
    fn surface_size(&self) -> (u32, u32) {
        (800, 600)
    }
    fn set_render_targets(&self, c: TextureViewId, d: TextureViewId) {
        self.calls.borrow_mut().push(Call::SetTargets(c, d));
    }
    fn clear_render_target(&self, v: TextureViewId, _c: LinearRgba) {
        self.calls.borrow_mut().push(Call::ClearColor(v));
    }
    fn clear_depth(&self, v: TextureViewId, _d: f32) {
        self.calls.borrow_mut().push(Call::ClearDepth(v));
    }
    fn set_viewport(&self, v: Viewport) {
        self.calls.borrow_mut().push(Call::Viewport(v));
    }
    fn set_shader_pair(&self, s: ShaderPairId) {
        self.calls.borrow_mut().push(Call::Shader(s));
    }
    fn set_blend_state(&self, s: BlendStateId) {
        self.calls.borrow_mut().push(Call::Blend(s));
    }
    fn set_depth_state(&self, s: DepthStateId) {
        self.calls.borrow_mut().push(Call::Depth(s));
    }
    fn set_rasterizer_state(&self, s: RasterizerStateId) {
        self.calls.borrow_mut().push(Call::Raster(s));
    }
    fn set_texture(&self, slot: u32, v: TextureViewId) {
        self.calls.borrow_mut().push(Call::Texture(slot, v));
    }
    fn set_sampler(&self, slot: u32, s: SamplerId) {
        self.calls.borrow_mut().push(Call::Sampler(slot, s));
    }
    fn update_buffer(&self, b: BufferId, data: &[u8]) {
        self.buffers.borrow_mut().insert(b, data.to_vec());
        self.calls.borrow_mut().push(Call::Update(b));
    }
    fn bind_constant_buffer(&self, slot: u32, b: BufferId) {
        if slot == 1 {
            self.per_model_slot.set(Some(b));
        }
        self.calls.borrow_mut().push(Call::BindConstants(slot, b));
    }
    fn draw_mesh(&self, m: &Mesh) {
        let per_model = self
            .per_model_slot
            .get()
            .and_then(|b| self.buffers.borrow().get(&b).cloned());
        self.calls.borrow_mut().push(Call::Draw {
            mesh: m.label.clone(),
            per_model,
        });
    }
    fn present(&self) {
        self.calls.borrow_mut().push(Call::Present);
    }
}

pub fn mesh(label: &str, id: usize) -> Rc<Mesh> {
    Rc::new(Mesh {
        label: label.to_string(),
        vertex_buffer: BufferId(90_000 + id),
        index_buffer: BufferId(91_000 + id),
        index_count: 36,
    })
}

/// Ids of the fixture scene.
pub struct Fixture {
    pub store: EntityStore,
    pub animator: SceneAnimator,
    pub teapot: ModelId,
    pub plain: ModelId,
    pub tinted: ModelId,
    pub portal: ModelId,
    pub main_camera: CameraId,
    pub portal_camera: CameraId,
}

/// A scene with a pulsing light, a drifting orbiting light, a few models and
/// a portal rig.
pub fn fixture() -> Fixture {
    let cube = mesh("Cube", 1);
    let mut store = EntityStore::new();

    let teapot = store.add_model(
        Model::new("teapot", mesh("Teapot", 2))
            .with_transform(Transform::from_position(Vec3::new(-10.0, 0.0, 0.0))),
    );
    let plain = store.add_model(
        Model::new("plain", cube.clone())
            .with_transform(Transform::from_position(Vec3::new(100.0, 15.0, -40.0))),
    );
    let mut tinted_model = Model::new("tinted", cube.clone())
        .with_transform(Transform::from_position(Vec3::new(100.0, 15.0, -60.0)));
    tinted_model.color = Some(Vec3::new(1.0, 0.0, 0.0));
    let tinted = store.add_model(tinted_model);
    let alpha = store.add_model(
        Model::new("alpha", cube.clone())
            .with_transform(Transform::from_position(Vec3::new(100.0, 15.0, -80.0))),
    );
    let portal = store.add_model(
        Model::new("portal", cube.clone()).with_transform(
            Transform::from_position(Vec3::new(-70.0, 30.0, -100.0))
                .with_scale(Vec3::new(3.0, 3.0, 0.1)),
        ),
    );

    let marker = |pos: Vec3| {
        Model::new("light", mesh("Light", 3)).with_transform(Transform::from_position(pos))
    };
    store.add_light(
        Light::new(marker(Vec3::new(40.0, 20.0, 0.0)), Vec3::new(1.0, 0.8, 0.2), 10.0)
            .with_animation(LightAnimation {
                pulse: Some(Oscillator::new(10.0, 10.0, 1.0, 30.0)),
                ..Default::default()
            }),
    );
    store.add_light(
        Light::new(marker(Vec3::new(-10.0, 10.0, 0.0)), Vec3::ONE, 10.0).with_animation(
            LightAnimation {
                drift: Some(ColorDrift {
                    red: Oscillator::new(0.1, 0.2, 0.2, 0.99),
                    green: Oscillator::new(0.0, 0.2, 0.2, 0.99),
                    blue: 1.0,
                }),
                orbit: Some(LightOrbit {
                    center: teapot,
                    driver: OrbitDriver::new(20.0, 0.7, 10.0),
                }),
                ..Default::default()
            },
        ),
    );

    let main_camera = store.add_camera(Camera::new(
        Vec3::new(15.0, 45.0, -75.0),
        mirador_core::math::degrees_vec(30.0, 0.0, 0.0),
        800.0 / 600.0,
        0.1,
        100000.0,
    ));
    let portal_camera = store.add_camera(Camera::new(
        Vec3::new(45.0, 45.0, 85.0),
        mirador_core::math::degrees_vec(20.0, 215.0, 0.0),
        1.0,
        1.0,
        100000.0,
    ));

    let animator = SceneAnimator::new(
        SpinTargets {
            additive: plain,
            multiplicative: tinted,
            alpha,
        },
        PortalRig {
            model: portal,
            camera: portal_camera,
            center: teapot,
            orbit: OrbitDriver::new(80.0, 0.5, 40.0),
        },
        CameraControl {
            camera: main_camera,
            turn_speed: 2.0,
            move_speed: 50.0,
        },
        0.5,
    );

    Fixture {
        store,
        animator,
        teapot,
        plain,
        tinted,
        portal,
        main_camera,
        portal_camera,
    }
}
