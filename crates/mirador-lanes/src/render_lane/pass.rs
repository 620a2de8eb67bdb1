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

//! One full scene pass over the draw list.

use super::constant_buffer::ConstantBuffer;
use super::draw::{DrawDescriptor, DrawSubject, TextureSource, MAX_TEXTURE_SLOTS};
use super::libraries::{SamplerLibrary, ShaderLibrary, StateLibrary};
use crate::animation_lane::ShaderPhases;
use mirador_core::math::{LinearRgba, Mat4, Vec3};
use mirador_core::renderer::constants::{DEFAULT_OBJECT_COLOR, PER_FRAME_SLOT, PER_MODEL_SLOT};
use mirador_core::renderer::{
    BlendStateId, DepthStateId, GraphicsDevice, Mesh, PerFrameConstants, PerModelConstants,
    RasterizerStateId, SamplerId, ShaderPairId, TextureViewId, Viewport,
};
use mirador_data::{Camera, EntityStore};

/// Shared, pass-independent rendering resources.
#[derive(Debug, Clone, Copy)]
pub struct PassContext<'a> {
    /// The device commands go to.
    pub device: &'a dyn GraphicsDevice,
    /// Blend, depth and rasterizer states.
    pub states: &'a StateLibrary,
    /// Samplers.
    pub samplers: &'a SamplerLibrary,
    /// Shader pairs.
    pub shaders: &'a ShaderLibrary,
    /// What [`TextureSource::PortalColor`] resolves to.
    pub portal_color: TextureViewId,
}

/// Where and from which viewpoint a pass renders.
#[derive(Debug, Clone, Copy)]
pub struct PassTarget<'a> {
    /// Debug name of the pass.
    pub label: &'static str,
    /// The viewpoint.
    pub camera: &'a Camera,
    /// Color target.
    pub color: TextureViewId,
    /// Depth target.
    pub depth: TextureViewId,
    /// Viewport, sized to the target.
    pub viewport: Viewport,
    /// Color the target is cleared to.
    pub clear_color: LinearRgba,
    /// The shader-resource view of the color target, when it has one.
    /// Draws sampling it are skipped: a pass cannot read what it writes.
    pub sampled_output: Option<TextureViewId>,
}

/// What a pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassStats {
    /// Draw calls issued.
    pub draws: u32,
    /// Descriptors skipped because they read the pass's own output.
    pub skipped: u32,
    /// State objects and textures actually bound.
    pub state_changes: u32,
}

/// What the executor believes is bound on the device.
///
/// Starts empty at each pass so the first draw binds everything it names.
#[derive(Debug, Default)]
struct BoundState {
    shaders: Option<ShaderPairId>,
    blend: Option<BlendStateId>,
    depth: Option<DepthStateId>,
    raster: Option<RasterizerStateId>,
    textures: [Option<TextureViewId>; MAX_TEXTURE_SLOTS],
    samplers: [Option<SamplerId>; MAX_TEXTURE_SLOTS],
    changes: u32,
}

impl BoundState {
    fn swap<T: PartialEq + Copy>(slot: &mut Option<T>, value: T, changes: &mut u32) -> bool {
        if *slot == Some(value) {
            return false;
        }
        *slot = Some(value);
        *changes += 1;
        true
    }
}

impl PassContext<'_> {
    /// Renders `draws` into `target`.
    ///
    /// Binds and clears the targets, sets the viewport, writes the per-frame
    /// constants from the target's camera (the other per-frame fields must
    /// already be filled), then walks the draw list in order. Each draw binds
    /// only the state that differs from what is already bound, rewrites the
    /// per-model constants and issues the draw.
    pub fn execute(
        &self,
        target: &PassTarget,
        per_frame: &mut ConstantBuffer<PerFrameConstants>,
        per_model: &mut ConstantBuffer<PerModelConstants>,
        store: &EntityStore,
        phases: &ShaderPhases,
        draws: &[DrawDescriptor],
    ) -> PassStats {
        let device = self.device;
        log::debug!("Pass '{}': {} draws", target.label, draws.len());

        device.set_render_targets(target.color, target.depth);
        device.clear_render_target(target.color, target.clear_color);
        device.clear_depth(target.depth, 1.0);
        device.set_viewport(target.viewport);

        let frame = per_frame.get_mut();
        frame.view = target.camera.view_matrix();
        frame.projection = target.camera.projection_matrix();
        frame.view_projection = frame.projection * frame.view;
        per_frame.upload(device);
        device.bind_constant_buffer(PER_FRAME_SLOT, per_frame.buffer());
        device.bind_constant_buffer(PER_MODEL_SLOT, per_model.buffer());

        let mut bound = BoundState::default();
        let mut stats = PassStats::default();

        for draw in draws {
            let reads_own_output = target.sampled_output.is_some()
                && draw
                    .textures
                    .iter()
                    .any(|t| Some(self.resolve(t.source)) == target.sampled_output);
            if reads_own_output {
                log::trace!("Pass '{}': skipping '{}'", target.label, draw.label);
                stats.skipped += 1;
                continue;
            }

            self.bind_state(&mut bound, draw);
            for binding in &draw.textures {
                let view = self.resolve(binding.source);
                let slot = binding.slot as usize;
                if slot >= MAX_TEXTURE_SLOTS {
                    log::warn!("'{}': texture slot {} is out of range", draw.label, slot);
                    continue;
                }
                if BoundState::swap(&mut bound.textures[slot], view, &mut bound.changes) {
                    device.set_texture(binding.slot, view);
                }
                let sampler = self.samplers.get(binding.sampler);
                if BoundState::swap(&mut bound.samplers[slot], sampler, &mut bound.changes) {
                    device.set_sampler(binding.slot, sampler);
                }
            }

            let (world, color, mesh) = subject_of(store, draw);
            per_model.write(
                device,
                PerModelConstants {
                    world,
                    object_color: color,
                    wiggle: phases.wiggle,
                    rotation: phases.rotation,
                    lerp: phases.lerp_factor(),
                    _pad: [0.0; 2],
                },
            );
            log::trace!("Pass '{}': draw '{}'", target.label, draw.label);
            device.draw_mesh(mesh);
            stats.draws += 1;
        }

        stats.state_changes = bound.changes;
        stats
    }

    fn resolve(&self, source: TextureSource) -> TextureViewId {
        match source {
            TextureSource::Asset(view) => view,
            TextureSource::PortalColor => self.portal_color,
        }
    }

    fn bind_state(&self, bound: &mut BoundState, draw: &DrawDescriptor) {
        let device = self.device;
        let changes = &mut bound.changes;

        let shaders = self.shaders.get(draw.technique);
        if BoundState::swap(&mut bound.shaders, shaders, changes) {
            device.set_shader_pair(shaders);
        }
        let blend = self.states.blend(draw.blend);
        if BoundState::swap(&mut bound.blend, blend, changes) {
            device.set_blend_state(blend);
        }
        let depth = self.states.depth(draw.depth);
        if BoundState::swap(&mut bound.depth, depth, changes) {
            device.set_depth_state(depth);
        }
        let raster = self.states.rasterizer(draw.cull);
        if BoundState::swap(&mut bound.raster, raster, changes) {
            device.set_rasterizer_state(raster);
        }
    }
}

/// World matrix, resolved tint and mesh of a draw's subject.
fn subject_of<'s>(store: &'s EntityStore, draw: &DrawDescriptor) -> (Mat4, Vec3, &'s Mesh) {
    let (model, own_color) = match draw.subject {
        DrawSubject::Model(id) => {
            let model = store.model(id);
            (model, model.color)
        }
        DrawSubject::Light(id) => {
            let light = store.light(id);
            (&light.marker, Some(light.color))
        }
    };
    let color = draw.tint.or(own_color).unwrap_or(DEFAULT_OBJECT_COLOR);
    (model.world_matrix(), color, model.mesh.as_ref())
}
