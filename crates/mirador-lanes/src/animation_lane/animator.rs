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

//! The per-frame scene state machine.

use super::frame_timer::{FrameReport, FrameTimer};
use super::phases::{ShaderPhases, SpinAngles};
use mirador_core::animation::OrbitDriver;
use mirador_core::platform::{InputState, NoInput};
use mirador_data::{CameraId, EntityStore, LightId, ModelId};

/// The three blended cubes, each spun with one axis left out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinTargets {
    /// Spins about Y and Z.
    pub additive: ModelId,
    /// Spins about X and Z.
    pub multiplicative: ModelId,
    /// Spins about X and Y.
    pub alpha: ModelId,
}

/// The portal display model and the camera that renders its texture.
///
/// Both orbit `center` together and keep facing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortalRig {
    /// The model showing the portal texture.
    pub model: ModelId,
    /// The camera rendering into the portal texture.
    pub camera: CameraId,
    /// The model the rig circles and looks at.
    pub center: ModelId,
    /// The circular motion.
    pub orbit: OrbitDriver,
}

/// Free-fly control of one camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraControl {
    /// The controlled camera.
    pub camera: CameraId,
    /// Pitch/yaw rate in radians per second.
    pub turn_speed: f32,
    /// Translation rate in units per second.
    pub move_speed: f32,
}

/// Owns the scene-wide animation state and applies it to an [`EntityStore`].
///
/// Per-light animation lives on the lights themselves; everything else
/// (shader phases, cube spin, the portal rig, camera control, frame timing)
/// is held here. One [`update`](SceneAnimator::update) call is one tick:
///
/// 1. light strength pulses (marker scaled to half the strength)
/// 2. light color drifts
/// 3. light orbits around their center models
/// 4. wiggle and rotation phases
/// 5. the lerp oscillator
/// 6. cube spin
/// 7. the portal rig
/// 8. free camera control
/// 9. frame-time accounting
///
/// Steps 1 to 3 run light by light. No later step moves a model that a light
/// orbits, so evaluating all light orbits before the shader phases gives the
/// same result as interleaving them.
#[derive(Debug, Clone)]
pub struct SceneAnimator {
    phases: ShaderPhases,
    spin: SpinAngles,
    spin_targets: SpinTargets,
    portal: PortalRig,
    control: CameraControl,
    timer: FrameTimer,
}

impl SceneAnimator {
    /// Creates an animator with all phases at zero.
    pub fn new(
        spin_targets: SpinTargets,
        portal: PortalRig,
        control: CameraControl,
        report_interval: f32,
    ) -> Self {
        Self {
            phases: ShaderPhases::default(),
            spin: SpinAngles::default(),
            spin_targets,
            portal,
            control,
            timer: FrameTimer::new(report_interval),
        }
    }

    /// Runs one tick of `dt` seconds.
    ///
    /// Returns a [`FrameReport`] when a reporting interval completed this tick.
    pub fn update(
        &mut self,
        store: &mut EntityStore,
        dt: f32,
        input: &dyn InputState,
    ) -> Option<FrameReport> {
        self.apply(store, dt, input);

        let report = self.timer.tick(dt);
        if let Some(report) = report {
            log::info!("{report}");
        }
        report
    }

    /// Evaluates every animated pose at the current phase without advancing
    /// time or counting a frame.
    ///
    /// Called once after the scene is built so that a zero-length tick is a
    /// no-op from the very first frame.
    pub fn settle(&mut self, store: &mut EntityStore) {
        self.apply(store, 0.0, &NoInput);
    }

    /// The current shader phases.
    pub fn phases(&self) -> &ShaderPhases {
        &self.phases
    }

    /// The portal rig.
    pub fn portal(&self) -> &PortalRig {
        &self.portal
    }

    /// The most recent frame report.
    pub fn last_report(&self) -> Option<FrameReport> {
        self.timer.last_report()
    }

    fn apply(&mut self, store: &mut EntityStore, dt: f32, input: &dyn InputState) {
        for index in 0..store.lights().len() {
            animate_light(store, LightId(index as u32), dt);
        }

        self.phases.advance(dt);

        self.spin.advance(dt);
        store.model_mut(self.spin_targets.additive).transform.rotation = self.spin.without_x();
        store.model_mut(self.spin_targets.multiplicative).transform.rotation =
            self.spin.without_y();
        store.model_mut(self.spin_targets.alpha).transform.rotation = self.spin.without_z();

        let center = store.model(self.portal.center).position();
        let position = self.portal.orbit.advance(center, dt);
        let portal_model = store.model_mut(self.portal.model);
        portal_model.transform.position = position;
        portal_model.face_target(center);
        let portal_camera = store.camera_mut(self.portal.camera);
        portal_camera.transform.position = position;
        portal_camera.face_target(center);

        store.camera_mut(self.control.camera).control(
            dt,
            input,
            self.control.turn_speed,
            self.control.move_speed,
        );
    }
}

fn animate_light(store: &mut EntityStore, id: LightId, dt: f32) {
    let mut animation = store.light(id).animation;
    let center = animation
        .orbit
        .map(|orbit| store.model(orbit.center).position());

    let light = store.light_mut(id);
    if let Some(pulse) = animation.pulse.as_mut() {
        light.strength = pulse.advance(dt);
        light.marker.transform.set_uniform_scale(light.strength / 2.0);
    }
    if let Some(drift) = animation.drift.as_mut() {
        drift.red.advance(dt);
        drift.green.advance(dt);
        light.color = drift.color();
    }
    if let (Some(orbit), Some(center)) = (animation.orbit.as_mut(), center) {
        light.marker.transform.position = orbit.driver.advance(center, dt);
    }
    light.animation = animation;
}
