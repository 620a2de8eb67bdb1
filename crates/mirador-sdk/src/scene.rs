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

//! The portal scene session.

use crate::config::SceneConfig;
use crate::error::InitError;
use crate::layout::{self, SceneLayout, SceneMeshes, SceneTextures};
use mirador_core::asset::{upload_mesh, upload_texture, MeshRepository, TextureLoader};
use mirador_core::platform::InputState;
use mirador_core::renderer::{
    GraphicsDevice, Mesh, PerFrameConstants, PerModelConstants, ResourceError, ResourceScope,
    TextureViewId,
};
use mirador_data::EntityStore;
use mirador_lanes::animation_lane::{FrameReport, SceneAnimator, ShaderPhases};
use mirador_lanes::render_lane::{
    ConstantBuffer, DrawDescriptor, FrameRenderer, FrameStats, PortalTargets, SamplerLibrary,
    SceneView, ShaderLibrary, StateLibrary,
};
use std::rc::Rc;

const MESHES: &str = "Error loading meshes";
const SHADERS: &str = "Error loading shaders";
const CONSTANT_BUFFERS: &str = "Error creating constant buffers";
const TEXTURES: &str = "Error loading textures";
const PORTAL: &str = "Error creating portal texture";
const STATES: &str = "Error creating states";

fn device_error(context: &'static str) -> impl FnOnce(ResourceError) -> InitError {
    move |source| InitError::DeviceResource { context, source }
}

/// Everything created by [`PortalScene::init_geometry`].
#[derive(Debug)]
struct Geometry {
    meshes: SceneMeshes,
    textures: SceneTextures,
    renderer: FrameRenderer,
}

/// Everything created by [`PortalScene::init_scene`].
#[derive(Debug)]
struct SceneState {
    layout: SceneLayout,
    animator: SceneAnimator,
    draws: Vec<DrawDescriptor>,
}

/// A lit, animated scene with a portal showing a second camera's view.
///
/// The lifecycle is `init_geometry`, `init_scene`, then any number of
/// `update_scene` / `render_scene` pairs, then `release_resources` (or drop).
/// Every GPU object is owned by one [`ResourceScope`] and released newest
/// first.
pub struct PortalScene {
    config: SceneConfig,
    mesh_source: Rc<dyn MeshRepository>,
    texture_source: Rc<dyn TextureLoader>,
    scope: ResourceScope,
    store: EntityStore,
    geometry: Option<Geometry>,
    scene: Option<SceneState>,
    last_error: Option<String>,
}

impl PortalScene {
    /// Creates an empty session. Nothing is loaded until
    /// [`init_geometry`](Self::init_geometry).
    pub fn new(
        device: Rc<dyn GraphicsDevice>,
        mesh_source: Rc<dyn MeshRepository>,
        texture_source: Rc<dyn TextureLoader>,
        config: SceneConfig,
    ) -> Self {
        Self {
            config,
            mesh_source,
            texture_source,
            scope: ResourceScope::new(device, "PortalScene"),
            store: EntityStore::new(),
            geometry: None,
            scene: None,
            last_error: None,
        }
    }

    /// Loads meshes, shaders, constant buffers, textures, the portal targets
    /// and the fixed-function states, in that order.
    ///
    /// # Errors
    ///
    /// The first failing step is returned and kept as [`last_error`](Self::last_error).
    /// Objects created before the failure stay owned by the session and are
    /// freed by [`release_resources`](Self::release_resources).
    pub fn init_geometry(&mut self) -> Result<(), InitError> {
        if self.geometry.is_some() {
            log::warn!("Geometry is already initialised");
            return Ok(());
        }
        match self.build_geometry() {
            Ok(geometry) => {
                log::info!(
                    "Geometry initialised: {} GPU objects, portal {}x{}",
                    self.scope.len(),
                    self.config.portal_size.0,
                    self.config.portal_size.1
                );
                self.geometry = Some(geometry);
                self.last_error = None;
                Ok(())
            }
            Err(err) => Err(self.record(err)),
        }
    }

    /// Places the initial entities and builds the animator and draw list.
    ///
    /// Animated poses are settled, so `update_scene(0.0)` right after this
    /// changes nothing.
    ///
    /// # Errors
    ///
    /// [`InitError::NotReady`] if the geometry is not initialised.
    pub fn init_scene(&mut self) -> Result<(), InitError> {
        let Some(geometry) = self.geometry.as_ref() else {
            return Err(self.record(InitError::NotReady {
                stage: "initialise the scene",
            }));
        };

        let (width, height) = self.scope.device().surface_size();
        self.store.clear();
        let layout = layout::populate(
            &mut self.store,
            &geometry.meshes,
            &self.config,
            width as f32 / height.max(1) as f32,
        );
        let mut animator = layout::animator(&layout, &self.config);
        animator.settle(&mut self.store);
        let draws = layout::draw_list(&layout, &geometry.textures);

        log::info!(
            "Scene initialised: {} models, {} lights, {} draws per pass",
            self.store.models().len(),
            self.store.lights().len(),
            draws.len()
        );
        self.scene = Some(SceneState {
            layout,
            animator,
            draws,
        });
        self.last_error = None;
        Ok(())
    }

    /// Advances the animation by `dt` seconds.
    ///
    /// Returns a [`FrameReport`] when a reporting interval completed.
    pub fn update_scene(&mut self, dt: f32, input: &dyn InputState) -> Option<FrameReport> {
        let Some(scene) = self.scene.as_mut() else {
            log::warn!("update_scene called before init_scene");
            return None;
        };
        scene.animator.update(&mut self.store, dt, input)
    }

    /// Renders the portal pass, then the main pass, then presents.
    ///
    /// Does nothing (and returns `None`) before the scene is initialised.
    pub fn render_scene(&mut self) -> Option<FrameStats> {
        let (Some(geometry), Some(scene)) = (self.geometry.as_mut(), self.scene.as_ref()) else {
            log::warn!("render_scene called before the scene is initialised");
            return None;
        };
        let view = SceneView {
            store: &self.store,
            phases: scene.animator.phases(),
            main_camera: scene.layout.main_camera,
            portal_camera: scene.layout.portal_camera,
            draws: &scene.draws,
        };
        let device: &dyn GraphicsDevice = self.scope.device().as_ref();
        Some(geometry.renderer.render_frame(device, &view))
    }

    /// Drops the entities and releases every GPU object, newest first.
    ///
    /// Safe to call after a partial init and more than once.
    pub fn release_resources(&mut self) {
        if self.geometry.is_none() && self.scene.is_none() && self.scope.is_empty() {
            return;
        }
        self.scene = None;
        self.geometry = None;
        self.store.clear();
        self.scope.release_all();
        log::info!("Scene resources released");
    }

    /// Turns the portal pass on or off.
    pub fn set_portal_enabled(&mut self, enabled: bool) {
        self.config.portal_enabled = enabled;
        if let Some(geometry) = self.geometry.as_mut() {
            geometry.renderer.set_portal_enabled(enabled);
        }
    }

    /// The message of the last init failure, cleared by the next successful
    /// init step.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The most recent frame statistics.
    pub fn last_frame_report(&self) -> Option<FrameReport> {
        self.scene
            .as_ref()
            .and_then(|scene| scene.animator.last_report())
    }

    /// The configured title, followed by the latest frame statistics.
    pub fn window_title(&self) -> String {
        match self.last_frame_report() {
            Some(report) => format!("{} - {report}", self.config.title),
            None => self.config.title.clone(),
        }
    }

    /// The session configuration.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// The entities.
    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    /// Keys of the scene entities, once the scene is initialised.
    pub fn layout(&self) -> Option<&SceneLayout> {
        self.scene.as_ref().map(|scene| &scene.layout)
    }

    /// The draw list both passes execute.
    pub fn draws(&self) -> &[DrawDescriptor] {
        self.scene
            .as_ref()
            .map(|scene| scene.draws.as_slice())
            .unwrap_or_default()
    }

    /// Current shader phases.
    pub fn phases(&self) -> Option<&ShaderPhases> {
        self.scene.as_ref().map(|scene| scene.animator.phases())
    }

    /// The portal render targets, once the geometry is initialised.
    pub fn portal_targets(&self) -> Option<&PortalTargets> {
        self.geometry
            .as_ref()
            .map(|geometry| geometry.renderer.portal())
    }

    /// The frame renderer, once the geometry is initialised.
    pub fn renderer(&self) -> Option<&FrameRenderer> {
        self.geometry.as_ref().map(|geometry| &geometry.renderer)
    }

    /// Number of GPU objects the session owns.
    pub fn resource_count(&self) -> usize {
        self.scope.len()
    }

    fn record(&mut self, err: InitError) -> InitError {
        log::error!("{err}");
        self.last_error = Some(err.to_string());
        err
    }

    fn build_geometry(&mut self) -> Result<Geometry, InitError> {
        let meshes = self.load_meshes()?;

        let shaders = ShaderLibrary::create(&mut self.scope).map_err(device_error(SHADERS))?;

        let per_frame = ConstantBuffer::new(
            &mut self.scope,
            PerFrameConstants::default(),
            "Per-Frame Constants",
        )
        .map_err(device_error(CONSTANT_BUFFERS))?;
        let per_model = ConstantBuffer::new(
            &mut self.scope,
            PerModelConstants::default(),
            "Per-Model Constants",
        )
        .map_err(device_error(CONSTANT_BUFFERS))?;

        let textures = self.load_textures()?;

        let (width, height) = self.config.portal_size;
        let portal = PortalTargets::create(
            &mut self.scope,
            width,
            height,
            self.config.background_color,
        )
        .map_err(device_error(PORTAL))?;

        let states = StateLibrary::create(&mut self.scope).map_err(device_error(STATES))?;
        let samplers = SamplerLibrary::create(&mut self.scope).map_err(device_error(STATES))?;

        let renderer = FrameRenderer::new(
            states,
            samplers,
            shaders,
            per_frame,
            per_model,
            portal,
            self.config.frame_settings(),
        );
        Ok(Geometry {
            meshes,
            textures,
            renderer,
        })
    }

    fn load_meshes(&mut self) -> Result<SceneMeshes, InitError> {
        let files = self.config.meshes.clone();
        Ok(SceneMeshes {
            light: self.load_mesh("Light", &files.light)?,
            portal: self.load_mesh("Portal", &files.portal)?,
            floor: self.load_mesh("Ground", &files.floor)?,
            teapot: self.load_mesh("Teapot", &files.teapot)?,
            sphere: self.load_mesh("Sphere", &files.sphere)?,
            cube: self.load_mesh("Cube", &files.cube)?,
            troll: self.load_mesh("Troll", &files.troll)?,
            robot: self.load_mesh("Robot", &files.robot)?,
        })
    }

    fn load_mesh(&mut self, label: &str, file: &str) -> Result<Rc<Mesh>, InitError> {
        let data = self
            .mesh_source
            .load_mesh(&self.config.media_path(file))
            .map_err(|source| InitError::ResourceLoad {
                context: MESHES,
                source,
            })?;
        let mesh = upload_mesh(&mut self.scope, label, &data).map_err(device_error(MESHES))?;
        Ok(Rc::new(mesh))
    }

    fn load_textures(&mut self) -> Result<SceneTextures, InitError> {
        let files = self.config.textures.clone();
        Ok(SceneTextures {
            light: self.load_texture("Light", &files.light)?,
            floor: self.load_texture("Floor", &files.floor)?,
            teapot: self.load_texture("Teapot", &files.teapot)?,
            sphere: self.load_texture("Sphere", &files.sphere)?,
            brick: self.load_texture("Brick", &files.brick)?,
            tiles: self.load_texture("Tiles", &files.tiles)?,
            additive: self.load_texture("Additive", &files.additive)?,
            glass: self.load_texture("Glass", &files.glass)?,
            moogle: self.load_texture("Moogle", &files.moogle)?,
            pattern: self.load_texture("Pattern", &files.pattern)?,
            pattern_normal: self.load_texture("Pattern Normal", &files.pattern_normal)?,
            troll: self.load_texture("Troll", &files.troll)?,
            cell_gradient: self.load_texture("Cell Gradient", &files.cell_gradient)?,
            robot: self.load_texture("Robot", &files.robot)?,
        })
    }

    fn load_texture(&mut self, label: &str, file: &str) -> Result<TextureViewId, InitError> {
        let data = self
            .texture_source
            .load_texture(&self.config.media_path(file))
            .map_err(|source| InitError::ResourceLoad {
                context: TEXTURES,
                source,
            })?;
        upload_texture(&mut self.scope, label, &data).map_err(device_error(TEXTURES))
    }
}

impl std::fmt::Debug for PortalScene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortalScene")
            .field("resources", &self.scope.len())
            .field("geometry", &self.geometry.is_some())
            .field("scene", &self.scene.is_some())
            .field("last_error", &self.last_error)
            .finish()
    }
}
