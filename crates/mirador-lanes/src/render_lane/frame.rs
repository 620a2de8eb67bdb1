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

//! The per-frame orchestrator: constants, portal pass, main pass, present.

use super::constant_buffer::ConstantBuffer;
use super::draw::DrawDescriptor;
use super::libraries::{SamplerLibrary, ShaderLibrary, StateLibrary};
use super::pass::{PassContext, PassStats, PassTarget};
use super::portal::PortalTargets;
use crate::animation_lane::ShaderPhases;
use mirador_core::math::{LinearRgba, Vec3};
use mirador_core::renderer::{
    GraphicsDevice, LightConstants, PerFrameConstants, PerModelConstants, Viewport, MAX_LIGHTS,
};
use mirador_data::{CameraId, EntityStore};

/// Pass-invariant lighting and clear settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSettings {
    /// Ambient light color.
    pub ambient_color: Vec3,
    /// Specular exponent.
    pub specular_power: f32,
    /// Cell-shading outline color.
    pub outline_color: Vec3,
    /// Cell-shading outline thickness.
    pub outline_thickness: f32,
    /// Background color both passes clear to.
    pub clear_color: LinearRgba,
    /// Whether the portal pass runs. When off, the portal shows the last
    /// completed portal image (or the clear color if none was ever rendered).
    pub portal_enabled: bool,
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self {
            ambient_color: Vec3::new(0.2, 0.2, 0.3),
            specular_power: 256.0,
            outline_color: Vec3::ZERO,
            outline_thickness: 0.05,
            clear_color: LinearRgba::new(0.2, 0.2, 0.3, 1.0),
            portal_enabled: true,
        }
    }
}

/// Everything a frame reads from the simulation side.
#[derive(Debug, Clone, Copy)]
pub struct SceneView<'a> {
    /// The entities.
    pub store: &'a EntityStore,
    /// Shader phases at this frame.
    pub phases: &'a ShaderPhases,
    /// The camera rendering to the display.
    pub main_camera: CameraId,
    /// The camera rendering into the portal texture.
    pub portal_camera: CameraId,
    /// The ordered draw list, shared by both passes.
    pub draws: &'a [DrawDescriptor],
}

/// What a frame did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// The portal pass, if it ran.
    pub portal: Option<PassStats>,
    /// The main pass.
    pub main: PassStats,
}

/// Owns the GPU-side state needed to draw a frame.
#[derive(Debug)]
pub struct FrameRenderer {
    states: StateLibrary,
    samplers: SamplerLibrary,
    shaders: ShaderLibrary,
    per_frame: ConstantBuffer<PerFrameConstants>,
    per_model: ConstantBuffer<PerModelConstants>,
    portal: PortalTargets,
    settings: FrameSettings,
}

impl FrameRenderer {
    /// Assembles a renderer from resources created at init.
    pub fn new(
        states: StateLibrary,
        samplers: SamplerLibrary,
        shaders: ShaderLibrary,
        per_frame: ConstantBuffer<PerFrameConstants>,
        per_model: ConstantBuffer<PerModelConstants>,
        portal: PortalTargets,
        settings: FrameSettings,
    ) -> Self {
        Self {
            states,
            samplers,
            shaders,
            per_frame,
            per_model,
            portal,
            settings,
        }
    }

    /// The portal render targets.
    pub fn portal(&self) -> &PortalTargets {
        &self.portal
    }

    /// The active settings.
    pub fn settings(&self) -> &FrameSettings {
        &self.settings
    }

    /// Turns the portal pass on or off.
    pub fn set_portal_enabled(&mut self, enabled: bool) {
        self.settings.portal_enabled = enabled;
    }

    /// The per-frame constants as last written.
    pub fn per_frame(&self) -> &PerFrameConstants {
        self.per_frame.get()
    }

    /// Draws one frame and presents it.
    ///
    /// Fills the pass-invariant constants once, renders the portal pass into
    /// the portal targets, renders the main pass into the back buffer (reading
    /// the portal texture) and presents. The order is fixed.
    pub fn render_frame(&mut self, device: &dyn GraphicsDevice, scene: &SceneView) -> FrameStats {
        self.write_invariants(scene);

        let ctx = PassContext {
            device,
            states: &self.states,
            samplers: &self.samplers,
            shaders: &self.shaders,
            portal_color: self.portal.color_texture(),
        };

        let portal = if self.settings.portal_enabled {
            let target = PassTarget {
                label: "Portal",
                camera: scene.store.camera(scene.portal_camera),
                color: self.portal.render_target_view(),
                depth: self.portal.depth_stencil_view(),
                viewport: self.portal.viewport(),
                clear_color: self.settings.clear_color,
                sampled_output: Some(self.portal.color_texture()),
            };
            Some(ctx.execute(
                &target,
                &mut self.per_frame,
                &mut self.per_model,
                scene.store,
                scene.phases,
                scene.draws,
            ))
        } else {
            None
        };

        let (width, height) = device.surface_size();
        let target = PassTarget {
            label: "Main",
            camera: scene.store.camera(scene.main_camera),
            color: device.back_buffer(),
            depth: device.main_depth_stencil(),
            viewport: Viewport::full(width, height),
            clear_color: self.settings.clear_color,
            sampled_output: None,
        };
        let main = ctx.execute(
            &target,
            &mut self.per_frame,
            &mut self.per_model,
            scene.store,
            scene.phases,
            scene.draws,
        );

        device.present();
        FrameStats { portal, main }
    }

    fn write_invariants(&mut self, scene: &SceneView) {
        let store = scene.store;
        if store.lights().len() > MAX_LIGHTS {
            log::warn!(
                "Scene has {} lights, only the first {} are lit",
                store.lights().len(),
                MAX_LIGHTS
            );
        }

        let frame = self.per_frame.get_mut();
        frame.lights = [LightConstants::default(); MAX_LIGHTS];
        for (slot, light) in frame.lights.iter_mut().zip(store.lights()) {
            *slot = LightConstants::new(light.emitted_color(), light.position());
        }
        frame.ambient_color = self.settings.ambient_color;
        frame.specular_power = self.settings.specular_power;
        frame.camera_position = store.camera(scene.main_camera).position();
        frame.outline_color = self.settings.outline_color;
        frame.outline_thickness = self.settings.outline_thickness;
    }
}
