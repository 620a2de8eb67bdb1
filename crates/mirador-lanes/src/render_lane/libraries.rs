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

//! Pre-built GPU state objects, looked up by their enum.
//!
//! Every variant is created once at init, so a lookup never fails. Storage is
//! a fixed array indexed by the variant's discriminant; each enum's `ALL`
//! table lists variants in declaration order.

use mirador_core::renderer::{
    BlendMode, BlendStateId, CullMode, DepthMode, DepthStateId, RasterizerStateId,
    ResourceError, ResourceScope, SamplerId, SamplerKind, ShaderPairId, ShaderTechnique,
};

/// One blend, depth and rasterizer state per mode.
#[derive(Debug, Clone)]
pub struct StateLibrary {
    blend: [BlendStateId; 4],
    depth: [DepthStateId; 2],
    raster: [RasterizerStateId; 3],
}

impl StateLibrary {
    /// Creates every fixed-function state, registering each with `scope`.
    pub fn create(scope: &mut ResourceScope) -> Result<Self, ResourceError> {
        let device = scope.device().clone();
        let mut blend = [BlendStateId(0); 4];
        for (slot, mode) in blend.iter_mut().zip(BlendMode::ALL) {
            *slot = scope.track(device.create_blend_state(mode)?);
        }
        let mut depth = [DepthStateId(0); 2];
        for (slot, mode) in depth.iter_mut().zip(DepthMode::ALL) {
            *slot = scope.track(device.create_depth_state(mode)?);
        }
        let mut raster = [RasterizerStateId(0); 3];
        for (slot, mode) in raster.iter_mut().zip(CullMode::ALL) {
            *slot = scope.track(device.create_rasterizer_state(mode)?);
        }
        log::debug!("Created blend, depth and rasterizer states");
        Ok(Self {
            blend,
            depth,
            raster,
        })
    }

    /// The blend state for `mode`.
    pub fn blend(&self, mode: BlendMode) -> BlendStateId {
        self.blend[mode as usize]
    }

    /// The depth state for `mode`.
    pub fn depth(&self, mode: DepthMode) -> DepthStateId {
        self.depth[mode as usize]
    }

    /// The rasterizer state for `mode`.
    pub fn rasterizer(&self, mode: CullMode) -> RasterizerStateId {
        self.raster[mode as usize]
    }
}

/// One sampler per kind.
#[derive(Debug, Clone)]
pub struct SamplerLibrary {
    samplers: [SamplerId; 2],
}

impl SamplerLibrary {
    /// Creates every sampler, registering each with `scope`.
    pub fn create(scope: &mut ResourceScope) -> Result<Self, ResourceError> {
        let device = scope.device().clone();
        let mut samplers = [SamplerId(0); 2];
        for (slot, kind) in samplers.iter_mut().zip(SamplerKind::ALL) {
            *slot = scope.track(device.create_sampler(kind)?);
        }
        Ok(Self { samplers })
    }

    /// The sampler for `kind`.
    pub fn get(&self, kind: SamplerKind) -> SamplerId {
        self.samplers[kind as usize]
    }
}

/// One compiled shader pair per technique.
#[derive(Debug, Clone)]
pub struct ShaderLibrary {
    pairs: [ShaderPairId; 8],
}

impl ShaderLibrary {
    /// Loads every technique in [`ShaderTechnique::ALL`] order, stopping at the
    /// first failure.
    pub fn create(scope: &mut ResourceScope) -> Result<Self, ResourceError> {
        let device = scope.device().clone();
        let mut pairs = [ShaderPairId(0); 8];
        for (slot, technique) in pairs.iter_mut().zip(ShaderTechnique::ALL) {
            *slot = scope.track(device.create_shader_pair(technique)?);
            log::debug!("Loaded shader pair '{technique}'");
        }
        Ok(Self { pairs })
    }

    /// The shader pair for `technique`.
    pub fn get(&self, technique: ShaderTechnique) -> ShaderPairId {
        self.pairs[technique as usize]
    }
}
