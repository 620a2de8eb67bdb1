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

//! A [`GraphicsDevice`] that keeps every object in memory and records the
//! command stream instead of talking to a GPU.

use super::command::{DeviceCommand, SampledInput, TextureContents};
use mirador_core::math::LinearRgba;
use mirador_core::renderer::{
    BlendMode, BlendStateId, BufferDescriptor, BufferId, BufferUsage, CullMode, DepthMode,
    DepthStateId, GraphicsDevice, Mesh, RasterizerStateId, ResourceError, ResourceId, SamplerId,
    SamplerKind, ShaderPairId, ShaderTechnique, TextureDescriptor, TextureFormat, TextureId,
    TextureViewId, TextureViewKind, Viewport,
};
use std::cell::RefCell;
use std::collections::HashMap;

/// Classes of objects whose creation can be made to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Buffers.
    Buffer,
    /// Textures.
    Texture,
    /// Texture views.
    TextureView,
    /// Shader pairs.
    ShaderPair,
    /// Blend states.
    BlendState,
    /// Depth states.
    DepthState,
    /// Rasterizer states.
    RasterizerState,
    /// Samplers.
    Sampler,
}

impl ResourceKind {
    fn name(self) -> &'static str {
        match self {
            ResourceKind::Buffer => "buffer",
            ResourceKind::Texture => "texture",
            ResourceKind::TextureView => "texture view",
            ResourceKind::ShaderPair => "shader pair",
            ResourceKind::BlendState => "blend state",
            ResourceKind::DepthState => "depth state",
            ResourceKind::RasterizerState => "rasterizer state",
            ResourceKind::Sampler => "sampler",
        }
    }
}

#[derive(Debug)]
struct BufferEntry {
    usage: BufferUsage,
    bytes: Vec<u8>,
}

#[derive(Debug)]
struct TextureEntry {
    format: TextureFormat,
    size: (u32, u32),
    contents: TextureContents,
}

#[derive(Debug, Clone, Copy)]
struct ViewEntry {
    texture: TextureId,
    kind: TextureViewKind,
}

#[derive(Debug, Default)]
struct Bindings {
    color: Option<TextureViewId>,
    depth: Option<TextureViewId>,
    textures: HashMap<u32, TextureViewId>,
}

#[derive(Debug, Default)]
struct DeviceState {
    next_id: usize,
    buffers: HashMap<BufferId, BufferEntry>,
    textures: HashMap<TextureId, TextureEntry>,
    views: HashMap<TextureViewId, ViewEntry>,
    shaders: HashMap<ShaderPairId, ShaderTechnique>,
    blend_states: HashMap<BlendStateId, BlendMode>,
    depth_states: HashMap<DepthStateId, DepthMode>,
    rasterizer_states: HashMap<RasterizerStateId, CullMode>,
    samplers: HashMap<SamplerId, SamplerKind>,
    bindings: Bindings,
    commands: Vec<DeviceCommand>,
    released: Vec<ResourceId>,
    /// Creations left before a kind starts failing.
    failures: HashMap<ResourceKind, usize>,
    presents: u32,
    hazards: u32,
    invalid_handles: u32,
}

impl DeviceState {
    fn next_id(&mut self) -> usize {
        self.next_id += 1;
        self.next_id
    }

    fn check_failure(&mut self, kind: ResourceKind) -> Result<(), String> {
        match self.failures.get_mut(&kind) {
            Some(0) => Err(format!("{} creation disabled", kind.name())),
            Some(remaining) => {
                *remaining -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn invalid(&mut self, what: &str, id: impl std::fmt::Debug) {
        self.invalid_handles += 1;
        log::warn!("HeadlessDevice: {what} called with unknown handle {id:?}");
    }

    fn insert_texture(
        &mut self,
        format: TextureFormat,
        size: (u32, u32),
        contents: TextureContents,
    ) -> TextureId {
        let id = TextureId(self.next_id());
        self.textures.insert(
            id,
            TextureEntry {
                format,
                size,
                contents,
            },
        );
        id
    }

    fn insert_view(&mut self, texture: TextureId, kind: TextureViewKind) -> TextureViewId {
        let id = TextureViewId(self.next_id());
        self.views.insert(id, ViewEntry { texture, kind });
        id
    }

    fn view_texture(&self, view: TextureViewId) -> Option<TextureId> {
        self.views.get(&view).map(|v| v.texture)
    }
}

/// An in-memory graphics device.
///
/// Objects are real entries with real contents (buffers keep their bytes,
/// textures track whether they were cleared or drawn into), so a test can
/// check what a frame left behind, not only which calls it made. Context
/// operations are appended to a command log.
///
/// The display surface (back buffer and main depth) is owned by the device
/// and is not returned by [`release`](GraphicsDevice::release).
#[derive(Debug)]
pub struct HeadlessDevice {
    state: RefCell<DeviceState>,
    surface_size: (u32, u32),
    back_buffer: TextureViewId,
    main_depth: TextureViewId,
}

impl HeadlessDevice {
    /// Creates a device with a `width` x `height` display surface.
    pub fn new(width: u32, height: u32) -> Self {
        let mut state = DeviceState::default();
        let color = state.insert_texture(
            TextureFormat::Rgba8Unorm,
            (width, height),
            TextureContents::Undefined,
        );
        let back_buffer = state.insert_view(color, TextureViewKind::RenderTarget);
        let depth = state.insert_texture(
            TextureFormat::Depth32Float,
            (width, height),
            TextureContents::Undefined,
        );
        let main_depth = state.insert_view(depth, TextureViewKind::DepthStencil);
        log::info!("HeadlessDevice: created with a {width}x{height} surface");

        Self {
            state: RefCell::new(state),
            surface_size: (width, height),
            back_buffer,
            main_depth,
        }
    }

    /// Makes every creation of `kind` fail after `successes` more succeed.
    pub fn fail_after(&self, kind: ResourceKind, successes: usize) {
        self.state.borrow_mut().failures.insert(kind, successes);
    }

    /// Makes every further creation of `kind` fail.
    pub fn fail(&self, kind: ResourceKind) {
        self.fail_after(kind, 0);
    }

    /// A copy of the command log.
    pub fn commands(&self) -> Vec<DeviceCommand> {
        self.state.borrow().commands.clone()
    }

    /// Drains the command log.
    pub fn take_commands(&self) -> Vec<DeviceCommand> {
        std::mem::take(&mut self.state.borrow_mut().commands)
    }

    /// Current bytes of a live buffer.
    pub fn buffer_contents(&self, buffer: BufferId) -> Option<Vec<u8>> {
        self.state
            .borrow()
            .buffers
            .get(&buffer)
            .map(|b| b.bytes.clone())
    }

    /// Live buffers created with `usage`, oldest first.
    pub fn buffers_with_usage(&self, usage: BufferUsage) -> Vec<BufferId> {
        let state = self.state.borrow();
        let mut ids: Vec<BufferId> = state
            .buffers
            .iter()
            .filter(|(_, b)| b.usage == usage)
            .map(|(id, _)| *id)
            .collect();
        ids.sort_by_key(|id| id.0);
        ids
    }

    /// Current contents of a live texture.
    pub fn texture_contents(&self, texture: TextureId) -> Option<TextureContents> {
        self.state
            .borrow()
            .textures
            .get(&texture)
            .map(|t| t.contents)
    }

    /// Size and format of a live texture.
    pub fn texture_info(&self, texture: TextureId) -> Option<((u32, u32), TextureFormat)> {
        self.state
            .borrow()
            .textures
            .get(&texture)
            .map(|t| (t.size, t.format))
    }

    /// The texture a live view looks at.
    pub fn view_texture(&self, view: TextureViewId) -> Option<TextureId> {
        self.state.borrow().view_texture(view)
    }

    /// Every successfully released object, in release order.
    pub fn released(&self) -> Vec<ResourceId> {
        self.state.borrow().released.clone()
    }

    /// Objects created through the trait and not yet released.
    pub fn live_objects(&self) -> usize {
        let s = self.state.borrow();
        // The surface accounts for two textures and two views.
        s.buffers.len()
            + s.textures.len()
            + s.views.len()
            + s.shaders.len()
            + s.blend_states.len()
            + s.depth_states.len()
            + s.rasterizer_states.len()
            + s.samplers.len()
            - 4
    }

    /// How many frames were presented.
    pub fn present_count(&self) -> u32 {
        self.state.borrow().presents
    }

    /// Draws that sampled the texture they were writing to.
    pub fn hazard_count(&self) -> u32 {
        self.state.borrow().hazards
    }

    /// Context calls that named an unknown object.
    pub fn invalid_handle_count(&self) -> u32 {
        self.state.borrow().invalid_handles
    }

    fn create<T>(
        &self,
        kind: ResourceKind,
        insert: impl FnOnce(&mut DeviceState) -> T,
    ) -> Result<T, ResourceError> {
        let mut state = self.state.borrow_mut();
        state
            .check_failure(kind)
            .map_err(|reason| ResourceError::Creation {
                kind: kind.name(),
                reason,
            })?;
        Ok(insert(&mut state))
    }

    fn record(&self, command: DeviceCommand) {
        self.state.borrow_mut().commands.push(command);
    }
}

impl GraphicsDevice for HeadlessDevice {
    fn create_buffer(
        &self,
        descriptor: &BufferDescriptor,
        data: Option<&[u8]>,
    ) -> Result<BufferId, ResourceError> {
        let mut bytes = vec![0u8; descriptor.size as usize];
        if let Some(data) = data {
            if data.len() > bytes.len() {
                return Err(ResourceError::OutOfBounds);
            }
            bytes[..data.len()].copy_from_slice(data);
        }
        let id = self.create(ResourceKind::Buffer, |s| {
            let id = BufferId(s.next_id());
            s.buffers.insert(
                id,
                BufferEntry {
                    usage: descriptor.usage,
                    bytes,
                },
            );
            id
        })?;
        log::debug!(
            "HeadlessDevice: Created buffer '{}' with ID: {:?}, size: {} bytes",
            descriptor.label.as_deref().unwrap_or_default(),
            id,
            descriptor.size
        );
        Ok(id)
    }

    fn create_texture(
        &self,
        descriptor: &TextureDescriptor,
        data: Option<&[u8]>,
    ) -> Result<TextureId, ResourceError> {
        if descriptor.width == 0 || descriptor.height == 0 {
            return Err(ResourceError::Creation {
                kind: ResourceKind::Texture.name(),
                reason: format!("invalid size {}x{}", descriptor.width, descriptor.height),
            });
        }
        let contents = match data {
            Some(data) if data.len() as u64 != descriptor.byte_size() => {
                return Err(ResourceError::OutOfBounds)
            }
            Some(_) => TextureContents::Uploaded,
            None => TextureContents::Undefined,
        };
        let id = self.create(ResourceKind::Texture, |s| {
            s.insert_texture(
                descriptor.format,
                (descriptor.width, descriptor.height),
                contents,
            )
        })?;
        log::debug!(
            "HeadlessDevice: Created texture '{}' with ID: {:?} ({}x{})",
            descriptor.label.as_deref().unwrap_or_default(),
            id,
            descriptor.width,
            descriptor.height
        );
        Ok(id)
    }

    fn create_texture_view(
        &self,
        texture: TextureId,
        kind: TextureViewKind,
    ) -> Result<TextureViewId, ResourceError> {
        if !self.state.borrow().textures.contains_key(&texture) {
            return Err(ResourceError::InvalidHandle);
        }
        self.create(ResourceKind::TextureView, |s| s.insert_view(texture, kind))
    }

    fn create_shader_pair(
        &self,
        technique: ShaderTechnique,
    ) -> Result<ShaderPairId, ResourceError> {
        let mut state = self.state.borrow_mut();
        if let Err(details) = state.check_failure(ResourceKind::ShaderPair) {
            return Err(ResourceError::Shader { technique, details });
        }
        let id = ShaderPairId(state.next_id());
        state.shaders.insert(id, technique);
        log::debug!("HeadlessDevice: Created shader pair '{technique}' with ID: {id:?}");
        Ok(id)
    }

    fn create_blend_state(&self, mode: BlendMode) -> Result<BlendStateId, ResourceError> {
        self.create(ResourceKind::BlendState, |s| {
            let id = BlendStateId(s.next_id());
            s.blend_states.insert(id, mode);
            id
        })
    }

    fn create_depth_state(&self, mode: DepthMode) -> Result<DepthStateId, ResourceError> {
        self.create(ResourceKind::DepthState, |s| {
            let id = DepthStateId(s.next_id());
            s.depth_states.insert(id, mode);
            id
        })
    }

    fn create_rasterizer_state(
        &self,
        mode: CullMode,
    ) -> Result<RasterizerStateId, ResourceError> {
        self.create(ResourceKind::RasterizerState, |s| {
            let id = RasterizerStateId(s.next_id());
            s.rasterizer_states.insert(id, mode);
            id
        })
    }

    fn create_sampler(&self, kind: SamplerKind) -> Result<SamplerId, ResourceError> {
        self.create(ResourceKind::Sampler, |s| {
            let id = SamplerId(s.next_id());
            s.samplers.insert(id, kind);
            id
        })
    }

    fn release(&self, id: ResourceId) -> Result<(), ResourceError> {
        let mut state = self.state.borrow_mut();
        let surface = |view: TextureViewId| view == self.back_buffer || view == self.main_depth;
        let found = match id {
            ResourceId::Buffer(b) => state.buffers.remove(&b).is_some(),
            ResourceId::Texture(t) => {
                let is_surface = [self.back_buffer, self.main_depth]
                    .iter()
                    .any(|v| state.view_texture(*v) == Some(t));
                !is_surface && state.textures.remove(&t).is_some()
            }
            ResourceId::TextureView(v) => !surface(v) && state.views.remove(&v).is_some(),
            ResourceId::ShaderPair(s) => state.shaders.remove(&s).is_some(),
            ResourceId::BlendState(s) => state.blend_states.remove(&s).is_some(),
            ResourceId::DepthState(s) => state.depth_states.remove(&s).is_some(),
            ResourceId::RasterizerState(s) => state.rasterizer_states.remove(&s).is_some(),
            ResourceId::Sampler(s) => state.samplers.remove(&s).is_some(),
        };
        if !found {
            return Err(ResourceError::InvalidHandle);
        }
        log::trace!("HeadlessDevice: Released {id:?}");
        state.released.push(id);
        Ok(())
    }

    fn back_buffer(&self) -> TextureViewId {
        self.back_buffer
    }

    fn main_depth_stencil(&self) -> TextureViewId {
        self.main_depth
    }

    fn surface_size(&self) -> (u32, u32) {
        self.surface_size
    }

    fn set_render_targets(&self, color: TextureViewId, depth: TextureViewId) {
        let mut state = self.state.borrow_mut();
        for view in [color, depth] {
            if !state.views.contains_key(&view) {
                state.invalid("set_render_targets", view);
                return;
            }
        }
        state.bindings.color = Some(color);
        state.bindings.depth = Some(depth);
        state
            .commands
            .push(DeviceCommand::SetRenderTargets { color, depth });
    }

    fn clear_render_target(&self, view: TextureViewId, color: LinearRgba) {
        let mut state = self.state.borrow_mut();
        let Some(texture) = state.view_texture(view) else {
            state.invalid("clear_render_target", view);
            return;
        };
        if let Some(entry) = state.textures.get_mut(&texture) {
            entry.contents = TextureContents::Cleared(color);
        }
        state
            .commands
            .push(DeviceCommand::ClearRenderTarget { view, color });
    }

    fn clear_depth(&self, view: TextureViewId, depth: f32) {
        let mut state = self.state.borrow_mut();
        let Some(texture) = state.view_texture(view) else {
            state.invalid("clear_depth", view);
            return;
        };
        if let Some(entry) = state.textures.get_mut(&texture) {
            entry.contents = TextureContents::Cleared(LinearRgba::new(depth, 0.0, 0.0, 0.0));
        }
        state.commands.push(DeviceCommand::ClearDepth { view, depth });
    }

    fn set_viewport(&self, viewport: Viewport) {
        self.record(DeviceCommand::SetViewport(viewport));
    }

    fn set_shader_pair(&self, shaders: ShaderPairId) {
        let mut state = self.state.borrow_mut();
        match state.shaders.get(&shaders).copied() {
            Some(t) => state.commands.push(DeviceCommand::SetShaderPair(t)),
            None => state.invalid("set_shader_pair", shaders),
        }
    }

    fn set_blend_state(&self, blend: BlendStateId) {
        let mut state = self.state.borrow_mut();
        match state.blend_states.get(&blend).copied() {
            Some(m) => state.commands.push(DeviceCommand::SetBlendState(m)),
            None => state.invalid("set_blend_state", blend),
        }
    }

    fn set_depth_state(&self, depth: DepthStateId) {
        let mut state = self.state.borrow_mut();
        match state.depth_states.get(&depth).copied() {
            Some(m) => state.commands.push(DeviceCommand::SetDepthState(m)),
            None => state.invalid("set_depth_state", depth),
        }
    }

    fn set_rasterizer_state(&self, raster: RasterizerStateId) {
        let mut state = self.state.borrow_mut();
        match state.rasterizer_states.get(&raster).copied() {
            Some(m) => state.commands.push(DeviceCommand::SetRasterizerState(m)),
            None => state.invalid("set_rasterizer_state", raster),
        }
    }

    fn set_texture(&self, slot: u32, view: TextureViewId) {
        let mut state = self.state.borrow_mut();
        match state.views.get(&view) {
            Some(v) if v.kind == TextureViewKind::ShaderResource => {
                state.bindings.textures.insert(slot, view);
                state.commands.push(DeviceCommand::SetTexture { slot, view });
            }
            Some(v) => {
                log::warn!(
                    "HeadlessDevice: view {view:?} is a {:?} view and cannot be sampled",
                    v.kind
                );
            }
            None => state.invalid("set_texture", view),
        }
    }

    fn set_sampler(&self, slot: u32, sampler: SamplerId) {
        let mut state = self.state.borrow_mut();
        match state.samplers.get(&sampler).copied() {
            Some(kind) => state.commands.push(DeviceCommand::SetSampler { slot, kind }),
            None => state.invalid("set_sampler", sampler),
        }
    }

    fn update_buffer(&self, buffer: BufferId, data: &[u8]) {
        let mut state = self.state.borrow_mut();
        let Some(entry) = state.buffers.get_mut(&buffer) else {
            state.invalid("update_buffer", buffer);
            return;
        };
        if data.len() > entry.bytes.len() {
            log::warn!(
                "HeadlessDevice: {} bytes do not fit buffer {:?} ({} bytes)",
                data.len(),
                buffer,
                entry.bytes.len()
            );
            return;
        }
        entry.bytes[..data.len()].copy_from_slice(data);
        state.commands.push(DeviceCommand::UpdateBuffer {
            buffer,
            size: data.len(),
        });
    }

    fn bind_constant_buffer(&self, slot: u32, buffer: BufferId) {
        let mut state = self.state.borrow_mut();
        if state.buffers.contains_key(&buffer) {
            state
                .commands
                .push(DeviceCommand::BindConstantBuffer { slot, buffer });
        } else {
            state.invalid("bind_constant_buffer", buffer);
        }
    }

    fn draw_mesh(&self, mesh: &Mesh) {
        let mut state = self.state.borrow_mut();
        if !state.buffers.contains_key(&mesh.vertex_buffer)
            || !state.buffers.contains_key(&mesh.index_buffer)
        {
            state.invalid("draw_mesh", &mesh.label);
            return;
        }

        let target = state.bindings.color.and_then(|v| state.view_texture(v));
        let mut slots: Vec<(u32, TextureViewId)> = state
            .bindings
            .textures
            .iter()
            .map(|(slot, view)| (*slot, *view))
            .collect();
        slots.sort_by_key(|(slot, _)| *slot);
        let inputs: Vec<SampledInput> = slots
            .into_iter()
            .filter_map(|(slot, view)| {
                let texture = state.view_texture(view)?;
                let contents = state.textures.get(&texture)?.contents;
                Some(SampledInput {
                    slot,
                    texture,
                    contents,
                })
            })
            .collect();

        if let Some(target) = target {
            if inputs.iter().any(|i| i.texture == target) {
                state.hazards += 1;
                log::warn!(
                    "HeadlessDevice: '{}' samples the texture it renders into",
                    mesh.label
                );
            }
            if let Some(entry) = state.textures.get_mut(&target) {
                entry.contents = match entry.contents {
                    TextureContents::Drawn { draws } => TextureContents::Drawn { draws: draws + 1 },
                    _ => TextureContents::Drawn { draws: 1 },
                };
            }
        }

        state.commands.push(DeviceCommand::Draw {
            mesh: mesh.label.clone(),
            target,
            inputs,
        });
    }

    fn present(&self) {
        let mut state = self.state.borrow_mut();
        state.presents += 1;
        state.commands.push(DeviceCommand::Present);
        log::trace!("HeadlessDevice: presented frame {}", state.presents);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    fn constant_buffer(device: &HeadlessDevice, size: u64) -> BufferId {
        device
            .create_buffer(
                &BufferDescriptor {
                    label: Some(Cow::Borrowed("test")),
                    size,
                    usage: BufferUsage::Constant,
                },
                None,
            )
            .unwrap()
    }

    #[test]
    fn test_buffer_keeps_its_bytes() {
        let device = HeadlessDevice::new(8, 8);
        let buffer = constant_buffer(&device, 8);
        assert_eq!(device.buffer_contents(buffer), Some(vec![0; 8]));

        device.update_buffer(buffer, &[1, 2, 3, 4]);
        assert_eq!(
            device.buffer_contents(buffer),
            Some(vec![1, 2, 3, 4, 0, 0, 0, 0])
        );

        // Too large: ignored.
        device.update_buffer(buffer, &[9; 16]);
        assert_eq!(device.buffer_contents(buffer).unwrap()[0], 1);
    }

    #[test]
    fn test_initial_data_larger_than_buffer_is_rejected() {
        let device = HeadlessDevice::new(8, 8);
        let err = device
            .create_buffer(
                &BufferDescriptor {
                    label: None,
                    size: 2,
                    usage: BufferUsage::Vertex,
                },
                Some(&[0; 4]),
            )
            .unwrap_err();
        assert_eq!(err, ResourceError::OutOfBounds);
    }

    #[test]
    fn test_release_twice_is_invalid() {
        let device = HeadlessDevice::new(8, 8);
        let buffer = constant_buffer(&device, 4);
        assert_eq!(device.live_objects(), 1);
        assert!(device.release(buffer.into()).is_ok());
        assert_eq!(
            device.release(buffer.into()),
            Err(ResourceError::InvalidHandle)
        );
        assert_eq!(device.live_objects(), 0);
        assert_eq!(device.released(), vec![ResourceId::Buffer(buffer)]);
    }

    #[test]
    fn test_surface_cannot_be_released() {
        let device = HeadlessDevice::new(8, 8);
        assert_eq!(
            device.release(device.back_buffer().into()),
            Err(ResourceError::InvalidHandle)
        );
    }

    #[test]
    fn test_failure_injection() {
        let device = HeadlessDevice::new(8, 8);
        device.fail_after(ResourceKind::ShaderPair, 1);
        assert!(device.create_shader_pair(ShaderTechnique::Alpha).is_ok());
        let err = device
            .create_shader_pair(ShaderTechnique::Wiggle)
            .unwrap_err();
        assert!(matches!(
            err,
            ResourceError::Shader {
                technique: ShaderTechnique::Wiggle,
                ..
            }
        ));

        device.fail(ResourceKind::Sampler);
        assert!(matches!(
            device.create_sampler(SamplerKind::Point),
            Err(ResourceError::Creation {
                kind: "sampler",
                ..
            })
        ));
    }

    #[test]
    fn test_unknown_handles_are_ignored() {
        let device = HeadlessDevice::new(8, 8);
        device.set_shader_pair(ShaderPairId(999));
        device.update_buffer(BufferId(999), &[0]);
        assert!(device.commands().is_empty());
        assert_eq!(device.invalid_handle_count(), 2);
    }

    #[test]
    fn test_draw_tracks_target_contents_and_hazards() {
        let device = HeadlessDevice::new(8, 8);
        let vb = constant_buffer(&device, 4);
        let ib = constant_buffer(&device, 4);
        let mesh = Mesh {
            label: "Quad".into(),
            vertex_buffer: vb,
            index_buffer: ib,
            index_count: 6,
        };

        let texture = device
            .create_texture(
                &TextureDescriptor {
                    label: None,
                    width: 4,
                    height: 4,
                    format: TextureFormat::Rgba8Unorm,
                    render_attachment: true,
                    sampled: true,
                },
                None,
            )
            .unwrap();
        let rtv = device
            .create_texture_view(texture, TextureViewKind::RenderTarget)
            .unwrap();
        let srv = device
            .create_texture_view(texture, TextureViewKind::ShaderResource)
            .unwrap();
        assert_eq!(
            device.texture_contents(texture),
            Some(TextureContents::Undefined)
        );

        device.set_render_targets(rtv, device.main_depth_stencil());
        device.clear_render_target(rtv, LinearRgba::ONE);
        assert_eq!(
            device.texture_contents(texture),
            Some(TextureContents::Cleared(LinearRgba::ONE))
        );
        device.draw_mesh(&mesh);
        device.draw_mesh(&mesh);
        assert_eq!(
            device.texture_contents(texture),
            Some(TextureContents::Drawn { draws: 2 })
        );
        assert_eq!(device.hazard_count(), 0);

        device.set_texture(0, srv);
        device.draw_mesh(&mesh);
        assert_eq!(device.hazard_count(), 1);

        device.set_render_targets(device.back_buffer(), device.main_depth_stencil());
        device.draw_mesh(&mesh);
        let last = device.commands().pop().unwrap();
        assert_eq!(
            last,
            DeviceCommand::Draw {
                mesh: "Quad".into(),
                target: device.view_texture(device.back_buffer()),
                inputs: vec![SampledInput {
                    slot: 0,
                    texture,
                    contents: TextureContents::Drawn { draws: 3 },
                }],
            }
        );
    }

    #[test]
    fn test_render_target_view_cannot_be_sampled() {
        let device = HeadlessDevice::new(8, 8);
        device.set_texture(0, device.back_buffer());
        assert!(device.commands().is_empty());
    }
}
